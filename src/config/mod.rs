//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, environment overrides)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → handed to ApiClient / FileStorage / logging
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so a missing file is a valid configuration
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{ApiConfig, ClientConfig, ObservabilityConfig, SessionConfig};
pub use validation::{validate_config, ValidationError};
