//! Credential value types

use serde::{Deserialize, Serialize};

/// Hostname used when no source supplies one
pub const DEFAULT_HOSTNAME: &str = "https://api.bindingz.io";

/// Treat an empty string as "not supplied"
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// The two-field credential shape with every field optional.
///
/// Used as the persisted file record, as the builder's override record and as
/// the value a [`CredentialSource`](super::CredentialSource) reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

impl CredentialsRecord {
    pub fn new(api_key: Option<String>, hostname: Option<String>) -> Self {
        Self { api_key, hostname }
    }

    /// A record with both fields absent
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Drop empty strings so they read as absent
    pub fn normalized(self) -> Self {
        Self {
            api_key: non_empty(self.api_key),
            hostname: non_empty(self.hostname),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.api_key.is_none() && self.hostname.is_none()
    }
}

/// Fully resolved API credentials
///
/// The hostname is never empty. The API key is either absent or non-empty.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CredentialsRecord", into = "CredentialsRecord")]
pub struct ApiCredentials {
    api_key: Option<String>,
    hostname: String,
}

impl ApiCredentials {
    /// Create credentials, normalizing empty values.
    ///
    /// An empty key becomes absent and an empty hostname becomes
    /// [`DEFAULT_HOSTNAME`].
    pub fn new(api_key: Option<String>, hostname: impl Into<String>) -> Self {
        let hostname = non_empty(Some(hostname.into()))
            .unwrap_or_else(|| DEFAULT_HOSTNAME.to_string());
        Self {
            api_key: non_empty(api_key),
            hostname,
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for ApiCredentials {
    fn default() -> Self {
        Self::new(None, DEFAULT_HOSTNAME)
    }
}

impl From<ApiCredentials> for CredentialsRecord {
    fn from(credentials: ApiCredentials) -> Self {
        Self {
            api_key: credentials.api_key,
            hostname: Some(credentials.hostname),
        }
    }
}

impl From<CredentialsRecord> for ApiCredentials {
    fn from(record: CredentialsRecord) -> Self {
        Self::new(record.api_key, record.hostname.unwrap_or_default())
    }
}

// Keep the key out of logs and panic messages
impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("hostname", &self.hostname)
            .finish()
    }
}
