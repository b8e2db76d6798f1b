//! Authenticated prompt relay for an image-generation API.

pub mod config;
pub mod forwarder;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::{RelayConfig, Secrets};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
