//! Home, room list and room details pages.

use tracing::{error, info};

use crate::api::{ApiClient, RecordId, Room};
use crate::routing::Page;

/// Rooms shown on the home page.
pub const FEATURED_COUNT: usize = 3;

pub const NO_ROOMS: &str = "No rooms available at the moment.";
pub const ROOMS_LOAD_FAILED: &str = "Failed to load rooms. Please try again later.";
pub const ROOM_LOAD_FAILED: &str = "Failed to load room details.";
pub const ROOM_NOT_FOUND: &str = "Room not found";

/// The first few rooms; a failed load is logged and shows nothing.
pub async fn featured_rooms(api: &ApiClient) -> Vec<Room> {
    match api.get_rooms().await {
        Ok(mut rooms) => {
            rooms.truncate(FEATURED_COUNT);
            rooms
        }
        Err(e) => {
            error!(error = %e, "Error loading featured rooms");
            Vec::new()
        }
    }
}

/// Room list page state.
#[derive(Debug, Clone, Default)]
pub struct RoomsView {
    pub rooms: Vec<Room>,
    pub error: Option<String>,
}

impl RoomsView {
    pub async fn load(api: &ApiClient) -> Self {
        match api.get_rooms().await {
            Ok(rooms) => {
                info!(count = rooms.len(), "Loaded rooms");
                Self { rooms, error: None }
            }
            Err(_) => Self {
                rooms: Vec::new(),
                error: Some(ROOMS_LOAD_FAILED.to_string()),
            },
        }
    }

    /// Placeholder text when there is nothing else to show.
    pub fn empty_message(&self) -> Option<&'static str> {
        (self.error.is_none() && self.rooms.is_empty()).then_some(NO_ROOMS)
    }
}

/// Room details page state.
#[derive(Debug, Clone, Default)]
pub struct RoomDetailsView {
    pub room: Option<Room>,
    pub error: Option<String>,
}

impl RoomDetailsView {
    pub async fn load(api: &ApiClient, id: &RecordId) -> Self {
        match api.get_room(id).await {
            Ok(room) => Self {
                room: Some(room),
                error: None,
            },
            Err(_) => Self {
                room: None,
                error: Some(ROOM_LOAD_FAILED.to_string()),
            },
        }
    }

    /// Banner shown instead of the room.
    pub fn message(&self) -> Option<&str> {
        match (&self.error, &self.room) {
            (Some(error), _) => Some(error),
            (None, None) => Some(ROOM_NOT_FOUND),
            (None, Some(_)) => None,
        }
    }

    /// Target of the "Book Now" button.
    pub fn book_now(&self) -> Option<Page> {
        self.room.as_ref().map(|room| Page::Booking {
            room_id: room.id.to_string(),
        })
    }
}

/// One-line summary used by list output.
pub fn room_summary(room: &Room) -> String {
    format!(
        "{}  {} ({})  ₹{}  {} guests",
        room.id, room.name, room.room_type, room.price, room.capacity
    )
}
