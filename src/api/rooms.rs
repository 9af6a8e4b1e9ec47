//! Room collection operations.

use tracing::error;

use crate::api::client::ApiClient;
use crate::api::error::ApiResult;
use crate::api::types::{RecordId, Room, RoomPayload};

impl ApiClient {
    /// Fetch every room.
    pub async fn get_rooms(&self) -> ApiResult<Vec<Room>> {
        self.get("/rooms")
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching rooms"))
    }

    /// Fetch a single room by id.
    pub async fn get_room(&self, id: &RecordId) -> ApiResult<Room> {
        self.get(&format!("/rooms/{id}"))
            .await
            .inspect_err(|e| error!(room_id = %id, error = %e, "Error fetching room"))
    }

    /// Create a room (admin console).
    pub async fn create_room(&self, room: &RoomPayload) -> ApiResult<Room> {
        self.post("/rooms", room)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating room"))
    }

    /// Replace a room (admin console).
    pub async fn update_room(&self, id: &RecordId, room: &RoomPayload) -> ApiResult<Room> {
        self.put(&format!("/rooms/{id}"), room)
            .await
            .inspect_err(|e| error!(room_id = %id, error = %e, "Error updating room"))
    }

    /// Delete a room (admin console).
    pub async fn delete_room(&self, id: &RecordId) -> ApiResult<()> {
        self.delete(&format!("/rooms/{id}"))
            .await
            .inspect_err(|e| error!(room_id = %id, error = %e, "Error deleting room"))
    }
}
