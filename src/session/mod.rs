//! Login session state.
//!
//! # Data Flow
//! ```text
//! startup:  storage.rs (keys "user" / "admin") → state.rs restore → AuthState
//! login:    api::auth record → Session::login / admin_login → storage.rs
//! logout:   Session::logout → both keys removed
//! readers:  security::access_control, views (borrow &AuthState)
//! ```
//!
//! # Design Decisions
//! - Storage is a string key/value store, the shape of browser localStorage
//! - User and admin sessions are independent; both may be present at once
//! - A stored record that no longer decodes is dropped, not fatal

pub mod state;
pub mod storage;

pub use state::{AuthState, Identity, Session, ADMIN_KEY, USER_KEY};
pub use storage::{FileStorage, MemoryStorage, SessionError, SessionStorage};
