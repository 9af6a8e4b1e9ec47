//! Admin room console: list, create, edit and delete rooms.

use tracing::{error, info};

use crate::api::{ApiClient, RecordId, Room, RoomPayload};
use crate::views::FormError;

pub const SAVE_FAILED: &str = "Failed to save room.";
pub const DELETE_FAILED: &str = "Failed to delete room.";
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this room?";

/// Room form fields as typed; amenities are comma separated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomForm {
    pub name: String,
    pub room_type: String,
    pub price: String,
    pub capacity: String,
    pub description: String,
    pub image: String,
    pub amenities: String,
}

impl RoomForm {
    /// Seed the form from an existing room.
    pub fn from_room(room: &Room) -> Self {
        Self {
            name: room.name.clone(),
            room_type: room.room_type.clone(),
            price: room.price.to_string(),
            capacity: room.capacity.to_string(),
            description: room.description.clone(),
            image: room.image.clone(),
            amenities: room.amenities.join(", "),
        }
    }

    /// Convert typed fields into the store payload.
    pub fn to_payload(&self) -> Result<RoomPayload, FormError> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| FormError::InvalidNumber {
                field: "price",
                value: self.price.clone(),
            })?;
        let capacity = self
            .capacity
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::InvalidNumber {
                field: "capacity",
                value: self.capacity.clone(),
            })?;

        Ok(RoomPayload {
            name: self.name.clone(),
            room_type: self.room_type.clone(),
            price,
            capacity,
            description: self.description.clone(),
            image: self.image.clone(),
            amenities: parse_amenities(&self.amenities),
        })
    }
}

/// Split a comma separated list, trimming entries and dropping empty ones.
pub fn parse_amenities(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Admin console state.
#[derive(Debug, Clone, Default)]
pub struct AdminConsole {
    pub rooms: Vec<Room>,
    pub form: RoomForm,
    pub show_form: bool,
    editing: Option<RecordId>,
}

impl AdminConsole {
    /// Fetch the room list; a failed load is logged and leaves it empty.
    pub async fn load(api: &ApiClient) -> Self {
        let rooms = api
            .get_rooms()
            .await
            .inspect_err(|e| error!(error = %e, "Error loading rooms"))
            .unwrap_or_default();
        Self {
            rooms,
            ..Self::default()
        }
    }

    /// Open an empty form for a new room.
    pub fn open_new(&mut self) {
        self.form = RoomForm::default();
        self.editing = None;
        self.show_form = true;
    }

    /// Open the form on an existing room.
    pub fn edit(&mut self, id: &RecordId) -> bool {
        let Some(room) = self.rooms.iter().find(|r| &r.id == id) else {
            return false;
        };
        self.form = RoomForm::from_room(room);
        self.editing = Some(id.clone());
        self.show_form = true;
        true
    }

    pub fn editing_id(&self) -> Option<&RecordId> {
        self.editing.as_ref()
    }

    /// Clear and close the form.
    pub fn reset_form(&mut self) {
        self.form = RoomForm::default();
        self.editing = None;
        self.show_form = false;
    }

    /// Create or update from the form, then reset it.
    ///
    /// Form errors are reported as themselves; store failures as
    /// [`SAVE_FAILED`]. The form is kept open on failure.
    pub async fn save(&mut self, api: &ApiClient) -> Result<Room, String> {
        let payload = self.form.to_payload().map_err(|e| e.to_string())?;

        let saved = match &self.editing {
            Some(id) => {
                let updated = api
                    .update_room(id, &payload)
                    .await
                    .map_err(|_| SAVE_FAILED.to_string())?;
                if let Some(slot) = self.rooms.iter_mut().find(|r| &r.id == id) {
                    *slot = updated.clone();
                }
                info!(room_id = %updated.id, "Room updated");
                updated
            }
            None => {
                let created = api
                    .create_room(&payload)
                    .await
                    .map_err(|_| SAVE_FAILED.to_string())?;
                self.rooms.push(created.clone());
                info!(room_id = %created.id, "Room created");
                created
            }
        };

        self.reset_form();
        Ok(saved)
    }

    /// Delete a room once confirmed. Returns `Ok(false)` when not confirmed.
    pub async fn delete(
        &mut self,
        api: &ApiClient,
        id: &RecordId,
        confirmed: bool,
    ) -> Result<bool, &'static str> {
        if !confirmed {
            return Ok(false);
        }
        api.delete_room(id).await.map_err(|_| DELETE_FAILED)?;
        self.rooms.retain(|r| &r.id != id);
        info!(room_id = %id, "Room deleted");
        Ok(true)
    }
}
