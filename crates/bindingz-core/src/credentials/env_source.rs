//! Environment variable credential source

use std::env;

use super::traits::{CredentialResult, CredentialSource};
use super::types::{non_empty, CredentialsRecord};

/// Environment variable holding the API key
pub const API_KEY_ENV_VAR: &str = "BINDINGZ_API_KEY";

/// Environment variable holding the API hostname
pub const HOSTNAME_ENV_VAR: &str = "BINDINGZ_HOSTNAME";

/// Source that reads `BINDINGZ_API_KEY` and `BINDINGZ_HOSTNAME`
///
/// Unset, empty and non-unicode variables all read as absent. This source
/// never fails.
///
/// # Example
///
/// ```
/// use bindingz_core::credentials::{CredentialSource, EnvironmentSource};
///
/// let source = EnvironmentSource::new();
/// let values = source.read().unwrap();
/// // values.api_key is Some(..) when BINDINGZ_API_KEY is set
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvironmentSource {
    _private: (),
}

impl EnvironmentSource {
    pub const NAME: &'static str = "environment";

    pub fn new() -> Self {
        Self { _private: () }
    }

    fn var(name: &str) -> Option<String> {
        non_empty(env::var(name).ok())
    }
}

impl CredentialSource for EnvironmentSource {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn describe(&self) -> String {
        format!("Environment variables ${}, ${}", API_KEY_ENV_VAR, HOSTNAME_ENV_VAR)
    }

    fn read(&self) -> CredentialResult<CredentialsRecord> {
        Ok(CredentialsRecord::new(
            Self::var(API_KEY_ENV_VAR),
            Self::var(HOSTNAME_ENV_VAR),
        ))
    }
}
