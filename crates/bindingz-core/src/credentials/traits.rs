//! Core traits and error types for credential sources

use std::path::PathBuf;

use thiserror::Error;

use super::types::CredentialsRecord;

/// Errors that can occur while reading or writing credentials
#[derive(Error, Debug)]
pub enum CredentialError {
    /// The config file exists but does not hold the two-field shape
    #[error("Malformed config file {}: {message}", path.display())]
    MalformedConfig { path: PathBuf, message: String },

    /// Only produced when writing a config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized for writing
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl CredentialError {
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        CredentialError::MalformedConfig {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn is_malformed_config(&self) -> bool {
        matches!(self, CredentialError::MalformedConfig { .. })
    }
}

pub type CredentialResult<T> = Result<T, CredentialError>;

/// A read-only origin of credential values
///
/// Implementations:
/// - `OverrideSource`: values set explicitly by the caller
/// - `EnvironmentSource`: `BINDINGZ_API_KEY` / `BINDINGZ_HOSTNAME`
/// - `FileSource`: a persisted config file
/// - `DefaultSource`: the compiled-in hostname
///
/// `read` must return empty strings as `None`; the resolver does not
/// normalize.
pub trait CredentialSource: Send + Sync {
    /// Short machine-readable name, e.g. "environment"
    fn name(&self) -> &str;

    /// Human-readable description of where values come from
    fn describe(&self) -> String {
        self.name().to_string()
    }

    /// Read both fields from this source
    fn read(&self) -> CredentialResult<CredentialsRecord>;
}
