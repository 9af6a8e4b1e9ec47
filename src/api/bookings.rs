//! Booking collection operations.

use tracing::error;

use crate::api::client::ApiClient;
use crate::api::error::ApiResult;
use crate::api::types::{Booking, NewBooking, RecordId};

impl ApiClient {
    /// Fetch every booking. Filtering by owner happens client-side.
    pub async fn get_bookings(&self) -> ApiResult<Vec<Booking>> {
        self.get("/bookings")
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching bookings"))
    }

    /// Fetch a single booking by id.
    pub async fn get_booking(&self, id: &RecordId) -> ApiResult<Booking> {
        self.get(&format!("/bookings/{id}"))
            .await
            .inspect_err(|e| error!(booking_id = %id, error = %e, "Error fetching booking"))
    }

    /// Create a booking.
    pub async fn create_booking(&self, booking: &NewBooking) -> ApiResult<Booking> {
        self.post("/bookings", booking)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating booking"))
    }

    /// Replace a booking with the given record.
    pub async fn update_booking(&self, id: &RecordId, booking: &Booking) -> ApiResult<Booking> {
        self.put(&format!("/bookings/{id}"), booking)
            .await
            .inspect_err(|e| error!(booking_id = %id, error = %e, "Error updating booking"))
    }

    /// Delete a booking.
    pub async fn delete_booking(&self, id: &RecordId) -> ApiResult<()> {
        self.delete(&format!("/bookings/{id}"))
            .await
            .inspect_err(|e| error!(booking_id = %id, error = %e, "Error deleting booking"))
    }
}
