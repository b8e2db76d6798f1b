//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Read secrets → Init logging/metrics → Bind → Serve
//!
//! Shutdown:
//!     SIGINT/SIGTERM → signals.rs → Shutdown::trigger → server drains → Exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
