//! Page routing.
//!
//! # Data Flow
//! ```text
//! path ("/rooms/3")
//!     → matcher.rs (segment pattern match, parameter capture)
//!     → router.rs (first matching entry of the page table)
//!     → Page (carries the captured ids)
//! ```
//!
//! # Design Decisions
//! - Exact segment matching, no prefixes and no regex
//! - The page table order is the declaration order

pub mod matcher;
pub mod router;

pub use matcher::{Params, PathPattern};
pub use router::Page;
