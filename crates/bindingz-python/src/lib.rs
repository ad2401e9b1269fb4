//! Python bindings for Bindingz via PyO3

use pyo3::prelude::*;
use pyo3::exceptions::PyRuntimeError;

use bindingz_core::credentials::{
    ApiCredentials as CoreApiCredentials,
    ApiCredentialsBuilder as CoreApiCredentialsBuilder,
    CredentialError,
    default_config_path as core_default_config_path,
    API_KEY_ENV_VAR, DEFAULT_HOSTNAME, HOSTNAME_ENV_VAR,
};
use bindingz_core::logging::ConsoleLogger;
use bindingz_core::resolver::ResolvedCredentials as CoreResolvedCredentials;
use std::sync::Arc;

fn to_py_err(e: CredentialError) -> PyErr {
    PyRuntimeError::new_err(e.to_string())
}

// ============================================================================
// Credential Types
// ============================================================================

/// Resolved API credentials
#[pyclass]
#[derive(Clone)]
pub struct ApiCredentials {
    #[pyo3(get)]
    pub api_key: Option<String>,
    #[pyo3(get)]
    pub hostname: String,
}

#[pymethods]
impl ApiCredentials {
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn __repr__(&self) -> String {
        let api_key = if self.api_key.is_some() { "'<redacted>'" } else { "None" };
        format!("ApiCredentials(api_key={}, hostname='{}')", api_key, self.hostname)
    }
}

impl From<CoreApiCredentials> for ApiCredentials {
    fn from(credentials: CoreApiCredentials) -> Self {
        Self {
            api_key: credentials.api_key().map(String::from),
            hostname: credentials.hostname().to_string(),
        }
    }
}

/// Resolved credentials plus the source of each field
#[pyclass]
#[derive(Clone)]
pub struct ResolvedCredentials {
    #[pyo3(get)]
    pub credentials: ApiCredentials,
    #[pyo3(get)]
    pub api_key_source: Option<String>,
    #[pyo3(get)]
    pub hostname_source: String,
}

#[pymethods]
impl ResolvedCredentials {
    fn __repr__(&self) -> String {
        format!(
            "ResolvedCredentials(api_key_source={:?}, hostname_source='{}')",
            self.api_key_source, self.hostname_source
        )
    }
}

impl From<CoreResolvedCredentials> for ResolvedCredentials {
    fn from(resolved: CoreResolvedCredentials) -> Self {
        Self {
            credentials: resolved.credentials.into(),
            api_key_source: resolved.api_key_source,
            hostname_source: resolved.hostname_source,
        }
    }
}

// ============================================================================
// ApiCredentialsBuilder
// ============================================================================

/// Fluent credentials builder
///
/// `ApiCredentialsBuilder()` reads `~/.bindingz/config.json`;
/// `ApiCredentialsBuilder(path)` reads the given file.
#[pyclass]
pub struct ApiCredentialsBuilder {
    inner: CoreApiCredentialsBuilder,
}

#[pymethods]
impl ApiCredentialsBuilder {
    #[new]
    #[pyo3(signature = (path=None))]
    pub fn new(path: Option<String>) -> Self {
        let inner = match path {
            Some(p) => CoreApiCredentialsBuilder::new(p),
            None => CoreApiCredentialsBuilder::from_default_location(),
        };
        Self { inner }
    }

    #[staticmethod]
    pub fn without_file() -> Self {
        Self { inner: CoreApiCredentialsBuilder::without_file() }
    }

    #[getter]
    pub fn config_path(&self) -> Option<String> {
        self.inner.config_path().map(|p| p.to_string_lossy().to_string())
    }

    pub fn with_api_key(mut slf: PyRefMut<'_, Self>, api_key: String) -> PyRefMut<'_, Self> {
        let inner = slf.inner.clone().with_api_key(api_key);
        slf.inner = inner;
        slf
    }

    pub fn with_hostname(mut slf: PyRefMut<'_, Self>, hostname: String) -> PyRefMut<'_, Self> {
        let inner = slf.inner.clone().with_hostname(hostname);
        slf.inner = inner;
        slf
    }

    /// Report resolution progress on stderr, filtered by `BINDINGZ_LOG_LEVEL`
    pub fn with_console_logger(mut slf: PyRefMut<'_, Self>) -> PyRefMut<'_, Self> {
        let inner = slf.inner.clone().with_logger(Arc::new(ConsoleLogger::from_env()));
        slf.inner = inner;
        slf
    }

    pub fn build(&self) -> PyResult<ApiCredentials> {
        self.inner.build().map(Into::into).map_err(to_py_err)
    }

    pub fn resolve(&self) -> PyResult<ResolvedCredentials> {
        self.inner.resolve().map(Into::into).map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!("ApiCredentialsBuilder(config_path={:?})", self.config_path())
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Conventional config file location
#[pyfunction]
pub fn default_config_path() -> String {
    core_default_config_path().to_string_lossy().to_string()
}

// ============================================================================
// Module Definition
// ============================================================================

#[pymodule]
fn bindingz(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ApiCredentials>()?;
    m.add_class::<ResolvedCredentials>()?;
    m.add_class::<ApiCredentialsBuilder>()?;

    m.add_function(wrap_pyfunction!(default_config_path, m)?)?;

    m.add("DEFAULT_HOSTNAME", DEFAULT_HOSTNAME)?;
    m.add("API_KEY_ENV_VAR", API_KEY_ENV_VAR)?;
    m.add("HOSTNAME_ENV_VAR", HOSTNAME_ENV_VAR)?;

    Ok(())
}
