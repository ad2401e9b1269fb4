//! Config file credential source

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

use super::codec::ConfigCodec;
use super::traits::{CredentialResult, CredentialSource};
use super::types::CredentialsRecord;

static DEFAULT_CONFIG_PATH: Lazy<PathBuf> = Lazy::new(|| {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".bindingz")
        .join("config.json")
});

/// Conventional config location (`~/.bindingz/config.json`)
pub fn default_config_path() -> &'static Path {
    DEFAULT_CONFIG_PATH.as_path()
}

/// Source backed by a persisted config file
///
/// The file is decoded fresh on every read. A missing file reads as absent;
/// a malformed one is an error.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: Option<PathBuf>,
}

impl FileSource {
    pub const NAME: &'static str = "file";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A file source with no file configured; always reads as absent
    pub fn none() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn exists(&self) -> bool {
        self.path.as_deref().is_some_and(Path::is_file)
    }
}

impl CredentialSource for FileSource {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn describe(&self) -> String {
        match &self.path {
            Some(path) => format!("Config file {}", path.display()),
            None => "Config file (none)".to_string(),
        }
    }

    fn read(&self) -> CredentialResult<CredentialsRecord> {
        let Some(path) = &self.path else {
            return Ok(CredentialsRecord::empty());
        };

        match ConfigCodec::decode(path) {
            Ok(Some(record)) => Ok(record.normalized()),
            Ok(None) => {
                crate::debug_log!("No config file at {}", path.display());
                Ok(CredentialsRecord::empty())
            }
            Err(e) => {
                crate::warn_log!("{}", e);
                Err(e)
            }
        }
    }
}
