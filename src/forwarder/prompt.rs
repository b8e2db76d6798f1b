//! Inbound prompt extraction, validation and escaping.

use serde::Serialize;
use serde_json::Value;

use crate::forwarder::error::ForwardError;

/// Longest accepted prompt, in UTF-16 code units.
pub const MAX_PROMPT_LEN: usize = 100;

/// A prompt that passed validation and has had its special characters escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SanitizedPrompt(String);

impl SanitizedPrompt {
    /// Escape `^`, `:`, `"` and newline with a leading backslash, in that order.
    pub fn escape(raw: &str) -> Self {
        let escaped = raw
            .replace('^', "\\^")
            .replace(':', "\\:")
            .replace('"', "\\\"")
            .replace('\n', "\\n");
        Self(escaped)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Run body parse, field extraction, length check and escaping over a raw body.
pub fn parse_prompt(body: &[u8]) -> Result<SanitizedPrompt, ForwardError> {
    let prompt = extract_prompt(body)?;
    check_length(&prompt)?;
    Ok(SanitizedPrompt::escape(&prompt))
}

/// Pull the `prompt` field out of a JSON body.
///
/// A missing or `null` field, or a body that is not an object, yields an
/// empty prompt.
pub fn extract_prompt(body: &[u8]) -> Result<String, ForwardError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ForwardError::InvalidJson)?;

    match value.get("prompt") {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(prompt)) => Ok(prompt.clone()),
        Some(_) => Err(ForwardError::InvalidType),
    }
}

/// Length as counted in UTF-16 code units.
pub fn prompt_len(prompt: &str) -> usize {
    prompt.encode_utf16().count()
}

pub fn check_length(prompt: &str) -> Result<(), ForwardError> {
    if prompt_len(prompt) > MAX_PROMPT_LEN {
        return Err(ForwardError::PromptTooLong);
    }
    Ok(())
}
