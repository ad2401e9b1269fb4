//! Fluent entry point for credential resolution

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::file_source::{default_config_path, FileSource};
use super::traits::{CredentialResult, CredentialSource};
use super::types::{non_empty, ApiCredentials, CredentialsRecord};
use crate::logging::{NoOpLogger, SharedLogger};
use crate::resolver::{CredentialResolver, ResolvedCredentials};

/// Builds [`ApiCredentials`] from explicit overrides, the environment, a
/// config file and the built-in default.
///
/// `build` re-reads every source each time it is called; nothing is cached.
///
/// # Example
///
/// ```no_run
/// use bindingz_core::credentials::ApiCredentialsBuilder;
///
/// let credentials = ApiCredentialsBuilder::from_default_location()
///     .with_api_key("mykey")
///     .build()
///     .unwrap();
/// println!("{}", credentials.hostname());
/// ```
#[derive(Clone)]
pub struct ApiCredentialsBuilder {
    config_path: Option<PathBuf>,
    overrides: CredentialsRecord,
    logger: SharedLogger,
}

impl ApiCredentialsBuilder {
    /// Builder reading the config file at `path`. A path that does not
    /// reference an existing file contributes nothing.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::from_config_path(Some(path.into()))
    }

    /// Builder reading `~/.bindingz/config.json`
    pub fn from_default_location() -> Self {
        Self::new(default_config_path())
    }

    /// Builder with no config file source
    pub fn without_file() -> Self {
        Self::from_config_path(None)
    }

    fn from_config_path(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            overrides: CredentialsRecord::empty(),
            logger: Arc::new(NoOpLogger),
        }
    }

    /// Override the API key. Empty values are ignored.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        if let Some(api_key) = non_empty(Some(api_key.into())) {
            self.overrides.api_key = Some(api_key);
        }
        self
    }

    /// Override the hostname. Empty values are ignored.
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        if let Some(hostname) = non_empty(Some(hostname.into())) {
            self.overrides.hostname = Some(hostname);
        }
        self
    }

    /// Report resolution progress to `logger`
    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// The configured config file, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// The overrides collected so far
    pub fn overrides(&self) -> &CredentialsRecord {
        &self.overrides
    }

    /// Resolve credentials.
    ///
    /// Fails with `MalformedConfig` if the config file exists but cannot be
    /// parsed, regardless of what the other sources hold.
    pub fn build(&self) -> CredentialResult<ApiCredentials> {
        self.resolve().map(ResolvedCredentials::into_credentials)
    }

    /// Resolve credentials, reporting which source supplied each field
    pub fn resolve(&self) -> CredentialResult<ResolvedCredentials> {
        let file = match &self.config_path {
            Some(path) => {
                if !path.exists() {
                    crate::log_info!(self.logger, "No config file at {}", path.display());
                } else if !path.is_file() {
                    crate::log_warn!(self.logger, "{} is not a regular file; ignoring it", path.display());
                }
                FileSource::new(path)
            }
            None => FileSource::none(),
        };
        crate::log_debug!(self.logger, "Resolving credentials ({})", file.describe());

        let resolver = CredentialResolver::standard(self.overrides.clone(), file);
        match resolver.resolve() {
            Ok(resolved) => {
                crate::log_debug!(
                    self.logger,
                    "apiKey from {}, hostname from {}",
                    resolved.api_key_source.as_deref().unwrap_or("none"),
                    resolved.hostname_source
                );
                Ok(resolved)
            }
            Err(e) => {
                crate::log_error!(self.logger, "Credential resolution failed: {}", e);
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for ApiCredentialsBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentialsBuilder")
            .field("config_path", &self.config_path)
            .field("api_key", &self.overrides.api_key.as_ref().map(|_| "<redacted>"))
            .field("hostname", &self.overrides.hostname)
            .finish()
    }
}
