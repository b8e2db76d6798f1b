//! Process-wide credentials.
//!
//! Both values come from the environment once at startup and are never
//! written to config files, logs or responses.

use std::fmt;

use crate::config::loader::ConfigError;

/// Environment variable holding the token callers must present.
pub const SECRET_TOKEN_ENV: &str = "RELAY_SECRET_TOKEN";

/// Environment variable holding the upstream API key.
pub const API_KEY_ENV: &str = "UPSTREAM_API_KEY";

/// Caller-facing shared secret and upstream API key.
#[derive(Clone)]
pub struct Secrets {
    shared_token: String,
    api_key: String,
}

impl Secrets {
    pub fn new(shared_token: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            shared_token: shared_token.into(),
            api_key: api_key.into(),
        }
    }

    /// Read both secrets from the process environment.
    ///
    /// Unset and empty variables are both rejected.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(read_var(SECRET_TOKEN_ENV)?, read_var(API_KEY_ENV)?))
    }

    pub fn shared_token(&self) -> &str {
        &self.shared_token
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

fn read_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingSecret(name)),
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("shared_token", &"[redacted]")
            .field("api_key", &"[redacted]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_never_contains_secret_values() {
        let secrets = Secrets::new("caller-token-123", "upstream-key-456");
        let rendered = format!("{:?}", secrets);

        assert!(!rendered.contains("caller-token-123"));
        assert!(!rendered.contains("upstream-key-456"));
        assert!(rendered.contains("[redacted]"));
    }

    #[test]
    fn accessors_return_configured_values() {
        let secrets = Secrets::new("tok", "key");
        assert_eq!(secrets.shared_token(), "tok");
        assert_eq!(secrets.api_key(), "key");
    }
}
