//! REST data store mediation.
//!
//! # Data Flow
//! ```text
//! view / CLI command
//!     → rooms.rs / bookings.rs / auth.rs (one operation per store call)
//!     → client.rs (URL join, x-request-id, timeouts, status check, decode)
//!     → JSON REST server
//! ```
//!
//! # Design Decisions
//! - One request per operation, no retries and no caching
//! - Failures are logged with the operation name, then propagated unchanged
//! - Records keep unknown fields so writes never drop data the store holds

pub mod auth;
pub mod bookings;
pub mod client;
pub mod error;
pub mod rooms;
pub mod types;

pub use client::{ApiClient, X_REQUEST_ID};
pub use error::{ApiError, ApiResult};
pub use types::{Admin, Booking, NewBooking, NewUser, RecordId, Room, RoomPayload, User};
