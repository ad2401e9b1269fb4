//! Caller-supplied overrides

use super::traits::{CredentialResult, CredentialSource};
use super::types::CredentialsRecord;

/// Values set explicitly by the caller; highest precedence in the standard
/// chain
#[derive(Debug, Clone, Default)]
pub struct OverrideSource {
    values: CredentialsRecord,
}

impl OverrideSource {
    pub const NAME: &'static str = "override";

    pub fn new(values: CredentialsRecord) -> Self {
        Self {
            values: values.normalized(),
        }
    }
}

impl CredentialSource for OverrideSource {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn describe(&self) -> String {
        "Explicit override".to_string()
    }

    fn read(&self) -> CredentialResult<CredentialsRecord> {
        Ok(self.values.clone())
    }
}
