//! Page authorization.
//!
//! # Data Flow
//! ```text
//! Page → Page::guard() → access_control::authorize(guard, &AuthState)
//!     → Allow | Pending (session still loading) | Redirect(login page)
//! ```
//!
//! # Design Decisions
//! - Decisions read only the in-memory session; the store is never asked
//! - Guards only gate navigation; store writes themselves are unauthenticated

pub mod access_control;

pub use access_control::{authorize, Access, Guard};
