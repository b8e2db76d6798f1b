//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned and echoed)
//!     → forwarder (validation, upstream call)
//!     → Send to client
//! ```

pub mod request;
pub mod server;

pub use request::{MakeRelayRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
