//! Config file codec (JSON or YAML)
//!
//! The persisted form holds two optional string fields, `apiKey` and
//! `hostname`. Unknown fields are ignored and missing fields decode to absent.

use std::fs;
use std::path::Path;

use super::traits::{CredentialError, CredentialResult};
use super::types::CredentialsRecord;

/// Persisted field names
const FIELDS: [&str; 2] = ["apiKey", "hostname"];

/// On-disk format of a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Pick the format from the file extension (`.yaml`/`.yml` are YAML,
    /// everything else is JSON)
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Json,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yaml",
        }
    }
}

/// Reads and writes [`CredentialsRecord`]s
///
/// # Example
///
/// ```no_run
/// use bindingz_core::credentials::{ConfigCodec, CredentialsRecord};
///
/// let record = CredentialsRecord::empty().with_api_key("key").with_hostname("https://example.com");
/// ConfigCodec::encode(&record, "/tmp/bindingz.json").unwrap();
/// assert_eq!(ConfigCodec::decode("/tmp/bindingz.json").unwrap(), Some(record));
/// ```
pub struct ConfigCodec;

impl ConfigCodec {
    /// Read the record stored at `path`.
    ///
    /// Returns `Ok(None)` when nothing usable exists at `path` (missing, or not
    /// a regular file). Returns `MalformedConfig` when the file exists but its
    /// content cannot be read into the two-field shape.
    pub fn decode(path: impl AsRef<Path>) -> CredentialResult<Option<CredentialsRecord>> {
        let path = path.as_ref();
        if !path.is_file() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CredentialError::malformed(path, format!("Failed to read file: {}", e)))?;

        Self::decode_str(&content, ConfigFormat::from_path(path))
            .map(Some)
            .map_err(|message| CredentialError::malformed(path, message))
    }

    /// Parse a record from text in the given format.
    ///
    /// Empty content and non-string field values are rejected in both formats.
    fn decode_str(content: &str, format: ConfigFormat) -> Result<CredentialsRecord, String> {
        if content.trim().is_empty() {
            return Err("File is empty".to_string());
        }

        match format {
            ConfigFormat::Json => serde_json::from_str(content)
                .map_err(|e| format!("Failed to parse JSON: {}", e)),
            ConfigFormat::Yaml => {
                let value: serde_yaml::Value = serde_yaml::from_str(content)
                    .map_err(|e| format!("Failed to parse YAML: {}", e))?;
                Self::check_yaml_shape(&value)?;
                serde_yaml::from_value(value)
                    .map_err(|e| format!("Failed to parse YAML: {}", e))
            }
        }
    }

    // YAML reads plain scalars like `42` or `true` as strings; only quoted or
    // plain string nodes and null are accepted for the two fields.
    fn check_yaml_shape(value: &serde_yaml::Value) -> Result<(), String> {
        use serde_yaml::Value;

        let Value::Mapping(map) = value else {
            return Err("Failed to parse YAML: expected a mapping at the top level".to_string());
        };

        for field in FIELDS {
            match map.get(field) {
                None | Some(Value::Null) | Some(Value::String(_)) => {}
                Some(_) => {
                    return Err(format!("Failed to parse YAML: field `{}` must be a string", field));
                }
            }
        }
        Ok(())
    }

    /// Write `record` to `path`, replacing any existing content.
    ///
    /// Parent directories are created as needed. Absent fields are omitted.
    pub fn encode(record: &CredentialsRecord, path: impl AsRef<Path>) -> CredentialResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = Self::encode_string(record, ConfigFormat::from_path(path))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn encode_string(record: &CredentialsRecord, format: ConfigFormat) -> CredentialResult<String> {
        match format {
            ConfigFormat::Json => serde_json::to_string_pretty(record)
                .map_err(|e| CredentialError::Serialize(format!("Failed to serialize JSON: {}", e))),
            ConfigFormat::Yaml => serde_yaml::to_string(record)
                .map_err(|e| CredentialError::Serialize(format!("Failed to serialize YAML: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("a/config.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("config.YML")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("config.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("config")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("tmp123bindingz.io")), ConfigFormat::Json);
    }

    #[test]
    fn test_round_trip_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let record = CredentialsRecord::empty().with_api_key("api1").with_hostname("hostname2");

        ConfigCodec::encode(&record, &path).unwrap();
        assert_eq!(ConfigCodec::decode(&path).unwrap(), Some(record));
    }

    #[test]
    fn test_round_trip_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let record = CredentialsRecord::empty().with_hostname("http://yaml.example");

        ConfigCodec::encode(&record, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("hostname: http://yaml.example"));
        assert!(!content.contains("apiKey"));
        assert_eq!(ConfigCodec::decode(&path).unwrap(), Some(record));
    }

    #[test]
    fn test_encode_overwrites_and_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("config.json");

        ConfigCodec::encode(&CredentialsRecord::empty().with_api_key("first"), &path).unwrap();
        ConfigCodec::encode(&CredentialsRecord::empty().with_api_key("second"), &path).unwrap();

        let decoded = ConfigCodec::decode(&path).unwrap().unwrap();
        assert_eq!(decoded.api_key, Some("second".to_string()));
        assert_eq!(decoded.hostname, None);
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = tempdir().unwrap();
        assert_eq!(ConfigCodec::decode(dir.path().join("DOESNT_EXIST")).unwrap(), None);
    }

    #[test]
    fn test_decode_directory_is_no_data() {
        let dir = tempdir().unwrap();
        assert_eq!(ConfigCodec::decode(dir.path()).unwrap(), None);
    }

    #[test]
    fn test_decode_ignores_unknown_and_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"apiKey": "k", "profile": "ignored", "nested": {"a": 1}}"#).unwrap();

        let record = ConfigCodec::decode(&path).unwrap().unwrap();
        assert_eq!(record.api_key, Some("k".to_string()));
        assert_eq!(record.hostname, None);
    }

    #[test]
    fn test_decode_null_is_absent() {
        let record = ConfigCodec::decode_str(r#"{"apiKey": null, "hostname": "h"}"#, ConfigFormat::Json).unwrap();
        assert_eq!(record, CredentialsRecord::new(None, Some("h".to_string())));
    }

    #[test]
    fn test_decode_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        for content in ["not json {", "", "[1, 2]", r#"{"apiKey": 42}"#] {
            fs::write(&path, content).unwrap();
            let err = ConfigCodec::decode(&path).unwrap_err();
            assert!(err.is_malformed_config(), "content {:?} gave {}", content, err);
        }
    }

    #[test]
    fn test_decode_malformed_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(&path, "apiKey: [unterminated").unwrap();

        assert!(matches!(
            ConfigCodec::decode(&path),
            Err(CredentialError::MalformedConfig { .. })
        ));
    }

    #[test]
    fn test_decode_empty_yaml_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        for content in ["", "   \n\n"] {
            fs::write(&path, content).unwrap();
            let err = ConfigCodec::decode(&path).unwrap_err();
            assert!(err.is_malformed_config(), "content {:?} gave {}", content, err);
        }
    }

    #[test]
    fn test_decode_yaml_rejects_non_string_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        for content in ["apiKey: 42\n", "hostname: true\n", "apiKey: [a, b]\n", "- apiKey\n"] {
            fs::write(&path, content).unwrap();
            let err = ConfigCodec::decode(&path).unwrap_err();
            assert!(err.is_malformed_config(), "content {:?} gave {}", content, err);
        }
    }

    #[test]
    fn test_decode_yaml_accepts_strings_and_null() {
        let record = ConfigCodec::decode_str(
            "apiKey: \"42\"\nhostname: ~\nprofile: 7\n",
            ConfigFormat::Yaml,
        )
        .unwrap();
        assert_eq!(record, CredentialsRecord::new(Some("42".to_string()), None));
    }

    #[test]
    fn test_decode_whitespace_json_is_malformed() {
        let err = ConfigCodec::decode_str("  \n\t", ConfigFormat::Json).unwrap_err();
        assert_eq!(err, "File is empty");
    }
}
