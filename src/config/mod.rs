//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional TOML file ($PROMPT_RELAY_CONFIG)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!
//! environment ($RELAY_SECRET_TOKEN, $UPSTREAM_API_KEY)
//!     → secrets.rs
//!     → Secrets (immutable, redacted in Debug)
//!
//! Both are built once in main and handed to the server by value.
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod secrets;
pub mod validation;

pub use loader::ConfigError;
pub use schema::RelayConfig;
pub use schema::ListenerConfig;
pub use schema::UpstreamConfig;
pub use secrets::Secrets;
