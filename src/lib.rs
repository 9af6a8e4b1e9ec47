//! Hotel booking client library.
//!
//! Room browsing, bookings, guest/admin login and the admin room console over
//! a generic JSON REST data store.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod routing;
pub mod security;
pub mod session;
pub mod views;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::AppError;
pub use session::{AuthState, Session};
