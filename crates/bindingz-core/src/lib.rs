//! Bindingz Core
//!
//! Runtime-agnostic resolution of Bindingz API credentials.
//! This crate provides the core functionality that can be used from any
//! environment (native tools, Python via PyO3, etc.)
//!
//! ## Resolution
//!
//! The API key and hostname are resolved independently, each taking the first
//! value supplied by, in order:
//! 1. Explicit overrides on the builder
//! 2. `BINDINGZ_API_KEY` / `BINDINGZ_HOSTNAME`
//! 3. The config file (`~/.bindingz/config.json` by default)
//! 4. The built-in default (hostname `https://api.bindingz.io`, no key)
//!
//! ```rust,no_run
//! use bindingz_core::ApiCredentialsBuilder;
//!
//! let credentials = ApiCredentialsBuilder::new("/path/to/bindingz.json")
//!     .with_hostname("https://bindingz.internal")
//!     .build()?;
//!
//! if let Some(key) = credentials.api_key() {
//!     // authenticate against credentials.hostname() with `key`
//! }
//! # Ok::<(), bindingz_core::CredentialError>(())
//! ```

pub mod credentials;
pub mod logging;
pub mod resolver;

// Re-export commonly used types
pub use credentials::{
    ApiCredentials, ApiCredentialsBuilder, CredentialsRecord,
    CredentialSource, CredentialError, CredentialResult,
    ConfigCodec, ConfigFormat,
    OverrideSource, EnvironmentSource, FileSource, DefaultSource,
    DEFAULT_HOSTNAME, API_KEY_ENV_VAR, HOSTNAME_ENV_VAR,
};

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger};

pub use resolver::{CredentialResolver, ResolvedCredentials};
