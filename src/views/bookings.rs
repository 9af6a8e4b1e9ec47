//! Bookings list page: view, edit and delete.
//!
//! Admins see every booking; guests see the ones stamped with their id.

use futures_util::future::join_all;
use serde::Serialize;
use tracing::{info, warn};

use crate::api::{ApiClient, Booking, RecordId, Room};
use crate::session::AuthState;

pub const BOOKINGS_LOAD_FAILED: &str = "Failed to load bookings.";
pub const UPDATE_FAILED: &str = "Failed to update booking.";
pub const DELETE_FAILED: &str = "Failed to delete booking.";
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this booking?";

/// A booking joined with its room, when the room could be fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingEntry {
    #[serde(flatten)]
    pub booking: Booking,
    pub room: Option<Room>,
}

/// Fields editable in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingEdit {
    pub guest_name: String,
    pub check_in: String,
    pub check_out: String,
}

impl BookingEdit {
    fn from_booking(booking: &Booking) -> Self {
        Self {
            guest_name: booking.guest_name.clone(),
            check_in: booking.check_in.clone(),
            check_out: booking.check_out.clone(),
        }
    }

    /// The existing record with the edited fields laid over it.
    pub fn apply(&self, booking: &Booking) -> Booking {
        Booking {
            guest_name: self.guest_name.clone(),
            check_in: self.check_in.clone(),
            check_out: self.check_out.clone(),
            ..booking.clone()
        }
    }
}

/// Keep the bookings the session may see.
///
/// Only a guest session without admin rights is filtered; an admin (or no
/// session at all) sees everything.
pub fn visible_bookings(bookings: Vec<Booking>, state: &AuthState) -> Vec<Booking> {
    match (&state.user, state.is_admin()) {
        (Some(user), false) => bookings
            .into_iter()
            .filter(|b| b.user_id.as_ref() == Some(&user.id))
            .collect(),
        _ => bookings,
    }
}

/// Bookings page state.
#[derive(Debug, Clone, Default)]
pub struct BookingsView {
    pub entries: Vec<BookingEntry>,
    pub error: Option<String>,
    pub admin_view: bool,
    editing: Option<(RecordId, BookingEdit)>,
}

impl BookingsView {
    /// Fetch bookings, filter them for the session and attach rooms.
    pub async fn load(api: &ApiClient, state: &AuthState) -> Self {
        let mut view = Self {
            admin_view: state.is_admin(),
            ..Self::default()
        };

        let bookings = match api.get_bookings().await {
            Ok(bookings) => visible_bookings(bookings, state),
            Err(_) => {
                view.error = Some(BOOKINGS_LOAD_FAILED.to_string());
                return view;
            }
        };

        view.entries = join_all(bookings.into_iter().map(|booking| async move {
            let room = match &booking.room_id {
                Some(room_id) => api
                    .get_room(room_id)
                    .await
                    .inspect_err(|e| {
                        warn!(booking_id = %booking.id, error = %e, "Booking shown without room")
                    })
                    .ok(),
                None => {
                    warn!(booking_id = %booking.id, "Booking has no room id");
                    None
                }
            };
            BookingEntry { booking, room }
        }))
        .await;

        info!(count = view.entries.len(), admin = view.admin_view, "Loaded bookings");
        view
    }

    pub fn title(&self) -> &'static str {
        if self.admin_view {
            "All Bookings"
        } else {
            "My Bookings"
        }
    }

    /// Placeholder text when the list is empty.
    pub fn empty_message(&self) -> Option<&'static str> {
        if !self.entries.is_empty() {
            return None;
        }
        Some(if self.admin_view {
            "No bookings in the system yet."
        } else {
            "You have no bookings yet."
        })
    }

    pub fn find(&self, id: &RecordId) -> Option<&BookingEntry> {
        self.entries.iter().find(|e| &e.booking.id == id)
    }

    /// Open the edit form for a booking, seeded with its current values.
    pub fn begin_edit(&mut self, id: &RecordId) -> bool {
        let Some(entry) = self.find(id) else {
            return false;
        };
        let edit = BookingEdit::from_booking(&entry.booking);
        self.editing = Some((id.clone(), edit));
        true
    }

    /// Fields of the open edit form.
    pub fn edit_form_mut(&mut self) -> Option<&mut BookingEdit> {
        self.editing.as_mut().map(|(_, edit)| edit)
    }

    pub fn editing_id(&self) -> Option<&RecordId> {
        self.editing.as_ref().map(|(id, _)| id)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Store the open edit. The form stays open when the store refuses.
    pub async fn save_edit(&mut self, api: &ApiClient) -> Result<(), &'static str> {
        let Some((id, edit)) = self.editing.as_ref() else {
            return Ok(());
        };
        let Some(entry) = self.find(id) else {
            self.editing = None;
            return Ok(());
        };

        let merged = edit.apply(&entry.booking);
        let updated = api.update_booking(id, &merged).await.map_err(|_| UPDATE_FAILED)?;

        let id = id.clone();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.booking.id == id) {
            entry.booking = updated;
        }
        self.editing = None;
        info!(booking_id = %id, "Booking updated");
        Ok(())
    }

    /// Delete a booking once the visitor has confirmed.
    ///
    /// Returns `Ok(false)` when not confirmed; nothing is sent then.
    pub async fn delete(
        &mut self,
        api: &ApiClient,
        id: &RecordId,
        confirmed: bool,
    ) -> Result<bool, &'static str> {
        if !confirmed {
            return Ok(false);
        }
        api.delete_booking(id).await.map_err(|_| DELETE_FAILED)?;
        self.entries.retain(|e| &e.booking.id != id);
        info!(booking_id = %id, "Booking deleted");
        Ok(true)
    }
}
