//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or SdkConfig::default()
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SdkConfig (validated, immutable)
//!     → consumed by broadcaster, event source, listener
//! ```
//!
//! # Design Decisions
//! - Config is a passive value object; immutable once accepted
//! - All fields have defaults so a minimal file (or no file) works
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{Network, SdkConfig};
pub use validation::{validate_config, ValidationError};
