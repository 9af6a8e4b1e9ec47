//! Store record types.
//!
//! Field names follow the store's camelCase JSON. Every record carries an
//! `extra` map so fields this crate does not model survive a read/write cycle.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier assigned by the store.
///
/// json-server hands out numbers or strings depending on version, so both are
/// accepted. Comparison is strict: `Num(1)` and `Str("1")` are different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Num(u64),
    Str(String),
}

impl RecordId {
    /// Turn an all-digit string id into a number, leaving anything else as is.
    pub fn coerce_numeric(&self) -> RecordId {
        match self {
            RecordId::Str(s) => s.parse().map(RecordId::Num).unwrap_or_else(|_| self.clone()),
            RecordId::Num(_) => self.clone(),
        }
    }

    /// Compare against an id typed by a person, ignoring the number/string split.
    pub fn matches(&self, raw: &str) -> bool {
        self.to_string() == raw.trim()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Num(n) => write!(f, "{n}"),
            RecordId::Str(s) => f.write_str(s),
        }
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId::Num(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Str(id.to_string())
    }
}

/// Read `null` as the field's default. Records written by older clients hold
/// `null` wherever a number failed to parse.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub room_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capacity: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amenities: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Room fields sent on create and update; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub price: f64,
    pub capacity: u32,
    pub description: String,
    pub image: String,
    pub amenities: Vec<String>,
}

/// A stay reserved for a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: RecordId,
    /// `None` when the store holds `null` or nothing for the room.
    #[serde(default)]
    pub room_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<RecordId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub guest_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub check_in: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub check_out: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Booking fields sent on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub room_id: RecordId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<RecordId>,
    pub guest_name: String,
    pub check_in: String,
    pub check_out: String,
}

/// A guest account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Signup fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// An administrator account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
