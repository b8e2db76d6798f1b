//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → auth.rs (shared-secret bearer check)
//!     → limits.rs (bounded body read)
//!     → Pass to prompt validation
//! ```
//!
//! # Design Decisions
//! - Fail closed: reject on any security check failure
//! - No trust in client input

pub mod auth;
pub mod limits;
