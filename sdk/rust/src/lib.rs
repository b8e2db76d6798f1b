//! Client for submitting prompts to a running relay.

mod client;

pub use client::{PromptRequest, RelayClient};
