//! Compiled-in fallback source

use super::traits::{CredentialResult, CredentialSource};
use super::types::{CredentialsRecord, DEFAULT_HOSTNAME};

/// Source of last resort: no API key, hostname [`DEFAULT_HOSTNAME`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSource;

impl DefaultSource {
    pub const NAME: &'static str = "default";

    pub fn new() -> Self {
        Self
    }
}

impl CredentialSource for DefaultSource {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn describe(&self) -> String {
        format!("Built-in default ({})", DEFAULT_HOSTNAME)
    }

    fn read(&self) -> CredentialResult<CredentialsRecord> {
        Ok(CredentialsRecord::new(None, Some(DEFAULT_HOSTNAME.to_string())))
    }
}
