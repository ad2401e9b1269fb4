//! API credentials and the sources they are resolved from
//!
//! This module provides:
//! - `ApiCredentials`, the resolved value handed to API clients
//! - `CredentialSource` trait with four implementations: `OverrideSource`,
//!   `EnvironmentSource`, `FileSource`, `DefaultSource`
//! - `ConfigCodec` for the persisted config file
//! - `ApiCredentialsBuilder`, the public entry point

mod types;
mod traits;
mod codec;
mod override_source;
mod env_source;
mod file_source;
mod default_source;
mod builder;

pub use types::{ApiCredentials, CredentialsRecord, DEFAULT_HOSTNAME, non_empty};
pub use traits::{CredentialSource, CredentialError, CredentialResult};
pub use codec::{ConfigCodec, ConfigFormat};
pub use override_source::OverrideSource;
pub use env_source::{EnvironmentSource, API_KEY_ENV_VAR, HOSTNAME_ENV_VAR};
pub use file_source::{FileSource, default_config_path};
pub use default_source::DefaultSource;
pub use builder::ApiCredentialsBuilder;
