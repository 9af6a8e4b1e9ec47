//! Booking form page.

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::api::{ApiClient, Booking, NewBooking, RecordId, Room};
use crate::routing::Page;
use crate::session::AuthState;
use crate::views::catalog::{ROOM_LOAD_FAILED, ROOM_NOT_FOUND};
use crate::views::FormError;

pub const BOOKING_FAILED: &str = "Failed to create booking. Please try again.";
pub const BOOKING_CREATED: &str = "Booking created successfully! Redirecting to your bookings...";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form fields as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub guest_name: String,
    pub check_in: String,
    pub check_out: String,
}

impl BookingForm {
    /// Check the form against `today` and return the parsed stay dates.
    pub fn validate(&self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate), FormError> {
        if self.guest_name.trim().is_empty()
            || self.check_in.trim().is_empty()
            || self.check_out.trim().is_empty()
        {
            return Err(FormError::MissingFields);
        }

        let check_in = parse_date("checkIn", &self.check_in)?;
        let check_out = parse_date("checkOut", &self.check_out)?;
        if check_in < Self::min_check_in(today) {
            return Err(FormError::CheckInInPast);
        }
        if check_out < today {
            return Err(FormError::CheckOutInPast);
        }
        if check_out <= self.min_check_out(today) {
            return Err(FormError::CheckOutNotAfterCheckIn);
        }
        Ok((check_in, check_out))
    }

    /// Earliest check-in the date picker offers.
    pub fn min_check_in(today: NaiveDate) -> NaiveDate {
        today
    }

    /// Earliest check-out the date picker offers: the chosen check-in, else today.
    pub fn min_check_out(&self, today: NaiveDate) -> NaiveDate {
        NaiveDate::parse_from_str(self.check_in.trim(), DATE_FORMAT).unwrap_or(today)
    }

    /// Build the store payload for `room`.
    ///
    /// The room id is coerced to a number when it looks like one, and the
    /// booking is stamped with the guest account's id when there is one.
    pub fn to_booking(&self, room_id: &RecordId, state: &AuthState) -> NewBooking {
        NewBooking {
            room_id: room_id.coerce_numeric(),
            user_id: state.user_id().cloned(),
            guest_name: self.guest_name.trim().to_string(),
            check_in: self.check_in.trim().to_string(),
            check_out: self.check_out.trim().to_string(),
        }
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| FormError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Today's UTC date, the picker's lower bound.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Booking page state.
#[derive(Debug, Clone, Default)]
pub struct BookingView {
    pub room_id: Option<RecordId>,
    pub room: Option<Room>,
    pub error: Option<String>,
    pub success: bool,
    pub created: Option<Booking>,
}

impl BookingView {
    /// Fetch the room being booked.
    pub async fn load(api: &ApiClient, room_id: &RecordId) -> Self {
        let mut view = Self {
            room_id: Some(room_id.clone()),
            ..Self::default()
        };
        match api.get_room(room_id).await {
            Ok(room) => view.room = Some(room),
            Err(_) => view.error = Some(ROOM_LOAD_FAILED.to_string()),
        }
        view
    }

    /// Validate and submit the form.
    ///
    /// Returns the page to continue to once the booking is stored; on any
    /// failure `error` holds the banner text and `None` is returned.
    pub async fn submit(
        &mut self,
        api: &ApiClient,
        state: &AuthState,
        form: &BookingForm,
    ) -> Option<Page> {
        self.error = None;

        let Some(room) = &self.room else {
            self.error = Some(ROOM_NOT_FOUND.to_string());
            return None;
        };

        if let Err(e) = form.validate(today()) {
            self.error = Some(e.to_string());
            return None;
        }

        let booking = form.to_booking(&room.id, state);

        match api.create_booking(&booking).await {
            Ok(created) => {
                info!(booking_id = %created.id, room_id = %room.id, "Booking created");
                self.created = Some(created);
                self.success = true;
                Some(Page::Bookings)
            }
            Err(_) => {
                self.error = Some(BOOKING_FAILED.to_string());
                None
            }
        }
    }

    /// Banner text, success taking precedence.
    pub fn message(&self) -> Option<&str> {
        if self.success {
            Some(BOOKING_CREATED)
        } else {
            self.error.as_deref()
        }
    }
}
