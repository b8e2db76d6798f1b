//! Prompt forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! inbound POST
//!     → handler.rs (method check, auth, body read)
//!     → prompt.rs (JSON parse, type + length checks, escaping)
//!     → upstream.rs (one outbound POST, outcome classification)
//!     → handler.rs (JSON passthrough or error.rs response)
//! ```

pub mod error;
pub mod handler;
pub mod prompt;
pub mod upstream;

pub use error::ForwardError;
pub use handler::forward_prompt;
pub use prompt::{SanitizedPrompt, MAX_PROMPT_LEN};
pub use upstream::{ClientError, UpstreamClient, STEPS};
