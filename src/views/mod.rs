//! Page logic, independent of how pages are drawn.
//!
//! Each view owns the state its page shows (records, error banner, form
//! fields) and exposes the operations the page's buttons trigger. Messages are
//! the exact strings shown to the visitor.

pub mod admin;
pub mod auth_forms;
pub mod booking;
pub mod bookings;
pub mod catalog;
pub mod navbar;
pub mod profile;

use thiserror::Error;

/// Client-side form rejection, raised before any store call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Check-in date cannot be in the past.")]
    CheckInInPast,

    #[error("Check-out date cannot be in the past.")]
    CheckOutInPast,

    #[error("Check-out date must be after check-in date.")]
    CheckOutNotAfterCheckIn,

    #[error("{field} '{value}' is not a valid date (expected YYYY-MM-DD).")]
    InvalidDate { field: &'static str, value: String },

    #[error("{field} '{value}' is not a valid number.")]
    InvalidNumber { field: &'static str, value: String },
}
