//! Per-field precedence resolution over credential sources
//!
//! Standard chain, highest precedence first:
//! 1. Explicit overrides
//! 2. Environment variables
//! 3. Config file
//! 4. Built-in default

use std::sync::Arc;

use crate::credentials::{
    ApiCredentials, CredentialResult, CredentialSource, CredentialsRecord, DefaultSource,
    EnvironmentSource, FileSource, OverrideSource, DEFAULT_HOSTNAME,
};

/// Result of a resolution with source tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCredentials {
    /// The resolved credentials
    pub credentials: ApiCredentials,
    /// Which source supplied the API key, if any did
    pub api_key_source: Option<String>,
    /// Which source supplied the hostname
    pub hostname_source: String,
}

impl ResolvedCredentials {
    pub fn into_credentials(self) -> ApiCredentials {
        self.credentials
    }
}

/// Resolves credentials from a priority-ordered chain of sources
///
/// Each field is resolved independently: the first source in the chain that
/// supplies a value for a field wins that field. Every source is read exactly
/// once per resolution, and any read error aborts the resolution.
///
/// # Example
///
/// ```
/// use bindingz_core::credentials::{CredentialsRecord, FileSource};
/// use bindingz_core::resolver::CredentialResolver;
///
/// let resolver = CredentialResolver::standard(
///     CredentialsRecord::empty().with_api_key("mykey"),
///     FileSource::none(),
/// );
/// let resolved = resolver.resolve().unwrap();
/// assert_eq!(resolved.credentials.api_key(), Some("mykey"));
/// assert_eq!(resolved.api_key_source.as_deref(), Some("override"));
/// ```
pub struct CredentialResolver {
    sources: Vec<Arc<dyn CredentialSource>>,
}

impl CredentialResolver {
    /// Create a resolver over `sources`, highest precedence first
    pub fn new(sources: Vec<Arc<dyn CredentialSource>>) -> Self {
        Self { sources }
    }

    /// The override > environment > file > default chain
    pub fn standard(overrides: CredentialsRecord, file: FileSource) -> Self {
        Self::new(vec![
            Arc::new(OverrideSource::new(overrides)),
            Arc::new(EnvironmentSource::new()),
            Arc::new(file),
            Arc::new(DefaultSource::new()),
        ])
    }

    /// Get the sources in this chain
    pub fn sources(&self) -> &[Arc<dyn CredentialSource>] {
        &self.sources
    }

    /// Resolve both fields.
    ///
    /// If no source supplies a hostname, [`DEFAULT_HOSTNAME`] is used even when
    /// the chain has no [`DefaultSource`].
    pub fn resolve(&self) -> CredentialResult<ResolvedCredentials> {
        let mut api_key: Option<(String, &str)> = None;
        let mut hostname: Option<(String, &str)> = None;

        for source in &self.sources {
            // A source that leaks an empty string must not claim the field
            let values = source.read()?.normalized();

            if api_key.is_none() {
                api_key = values.api_key.map(|v| (v, source.name()));
            }
            if hostname.is_none() {
                hostname = values.hostname.map(|v| (v, source.name()));
            }
        }

        let (hostname, hostname_source) =
            hostname.unwrap_or_else(|| (DEFAULT_HOSTNAME.to_string(), DefaultSource::NAME));
        let api_key_source = api_key.as_ref().map(|(_, source)| source.to_string());

        crate::debug_log!(
            "Resolved apiKey from {}, hostname from {}",
            api_key_source.as_deref().unwrap_or("nowhere"),
            hostname_source
        );

        Ok(ResolvedCredentials {
            credentials: ApiCredentials::new(api_key.map(|(v, _)| v), hostname),
            api_key_source,
            hostname_source: hostname_source.to_string(),
        })
    }
}

impl std::fmt::Debug for CredentialResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.sources.iter().map(|s| s.name()).collect();
        f.debug_struct("CredentialResolver")
            .field("sources", &names)
            .finish()
    }
}
