//! Parsers for registry configuration profiles and record collections.
//!
//! Profiles (YAML or TOML) carry the validation ranges, valve-model
//! catalogs, and risk-factor list; record collections are JSON arrays as
//! exported by the persistence layer. Both parse into the strongly-typed
//! shapes of `registry_core`.
//!
//! # Example
//!
//! ```rust
//! use registry_parser::parse_yaml;
//!
//! let yaml = r#"
//! ranges:
//!   fe:
//!     min: 0
//!     max: 100
//!     unit: "%"
//!     label: FE
//! "#;
//!
//! let profile = parse_yaml(yaml).expect("Failed to parse profile");
//! assert_eq!(profile.ranges.get("fe").unwrap().max, 100.0);
//! // Omitted sections keep the standard configuration
//! assert_eq!(profile.risk_factors.len(), 6);
//! ```

use std::path::Path;

use registry_core::{Procedure, RegistryProfile};
use thiserror::Error;

/// Errors that can occur while loading profiles or record collections.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON records: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported profile file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a registry profile from a YAML string.
///
/// Sections omitted from the document fall back to the standard profile.
///
/// # Example
///
/// ```rust
/// use registry_parser::parse_yaml;
///
/// let yaml = r#"
/// balloon_expandable_models:
///   - Edwards SAPIEN 3
/// self_expandable_models:
///   - Portico
/// "#;
///
/// let profile = parse_yaml(yaml).unwrap();
/// assert_eq!(profile.balloon_expandable_models.len(), 1);
/// assert_eq!(profile.ranges.len(), 9);
/// ```
pub fn parse_yaml(content: &str) -> Result<RegistryProfile> {
    let profile: RegistryProfile = serde_yaml_ng::from_str(content)?;
    Ok(profile)
}

/// Parse a registry profile from a TOML string.
///
/// # Example
///
/// ```rust
/// use registry_parser::parse_toml;
///
/// let toml = r#"
/// risk_factors = ["Ipertensione arteriosa", "Diabete mellito"]
///
/// [ranges.peso]
/// min = 30
/// max = 200
/// unit = "kg"
/// label = "Peso"
/// "#;
///
/// let profile = parse_toml(toml).unwrap();
/// assert_eq!(profile.risk_factors.len(), 2);
/// assert_eq!(profile.ranges.get("peso").unwrap().min, 30.0);
/// ```
pub fn parse_toml(content: &str) -> Result<RegistryProfile> {
    let profile: RegistryProfile =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(profile)
}

/// Detect the profile format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `ProfileFormat::Yaml`
/// * `.toml` → `ProfileFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<ProfileFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(ProfileFormat::Yaml),
        "toml" => Ok(ProfileFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a registry profile from a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use registry_parser::parse_file;
/// use std::path::Path;
///
/// let profile = parse_file(Path::new("profiles/standard.yml")).unwrap();
/// println!("Loaded {} ranges", profile.ranges.len());
/// ```
pub fn parse_file(path: &Path) -> Result<RegistryProfile> {
    let content = std::fs::read_to_string(path)?;
    let format = detect_format(path)?;

    match format {
        ProfileFormat::Yaml => parse_yaml(&content),
        ProfileFormat::Toml => parse_toml(&content),
    }
}

/// Parse a record collection from a JSON array string.
///
/// Records are deliberately permissive: missing fields become defaults and
/// numeric fields accept both numbers and strings, so partially-filled or
/// legacy rows load without error and are judged by validation instead.
///
/// # Example
///
/// ```rust
/// use registry_parser::parse_records;
///
/// let json = r#"[
///   {"nome": "Mario", "cognome": "Rossi", "fe": "55"},
///   {"nome": "Anna", "cognome": "Bianchi", "fe": 48.5}
/// ]"#;
///
/// let records = parse_records(json).unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].fe.as_number(), Some(55.0));
/// ```
pub fn parse_records(content: &str) -> Result<Vec<Procedure>> {
    let records: Vec<Procedure> = serde_json::from_str(content)?;
    Ok(records)
}

/// Load a record collection from a JSON file.
pub fn load_records(path: &Path) -> Result<Vec<Procedure>> {
    let content = std::fs::read_to_string(path)?;
    parse_records(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use registry_core::ValveType;

    #[test]
    fn test_parse_valid_yaml_minimal() {
        let yaml = r#"
ranges:
  fe:
    min: 0
    max: 100
    unit: "%"
    label: FE
  vmax:
    min: 0
    max: 10
    unit: m/s
"#;

        let profile = parse_yaml(yaml).expect("Failed to parse valid YAML");

        assert_eq!(profile.ranges.len(), 2);
        let fe = profile.ranges.get("fe").unwrap();
        assert_eq!(fe.min, 0.0);
        assert_eq!(fe.max, 100.0);
        assert_eq!(fe.unit, "%");
        assert_eq!(fe.label, "FE");

        // label falls back to empty when omitted
        assert_eq!(profile.ranges.get("vmax").unwrap().label, "");

        // omitted sections keep the standard content
        assert_eq!(profile.balloon_expandable_models.len(), 4);
        assert_eq!(profile.self_expandable_models.len(), 5);
        assert_eq!(profile.risk_factors.len(), 6);
    }

    #[test]
    fn test_parse_empty_yaml_is_standard_profile() {
        let profile = parse_yaml("{}").expect("Failed to parse empty document");
        assert_eq!(profile, RegistryProfile::standard());
    }

    #[test]
    fn test_parse_yaml_with_catalogs() {
        let yaml = r#"
balloon_expandable_models:
  - Edwards SAPIEN 3
  - Myval
self_expandable_models:
  - Portico
risk_factors:
  - Ipertensione arteriosa
"#;

        let profile = parse_yaml(yaml).expect("Failed to parse YAML with catalogs");

        assert_eq!(
            profile.models_for(ValveType::BalloonExpandable),
            &["Edwards SAPIEN 3".to_string(), "Myval".to_string()]
        );
        assert_eq!(profile.models_for(ValveType::SelfExpandable).len(), 1);
        assert_eq!(profile.risk_factors, vec!["Ipertensione arteriosa"]);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let invalid_yaml = r#"
ranges:
  fe: [not, a, range]
"#;

        let result = parse_yaml(invalid_yaml);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ParserError::YamlError(_)));
    }

    #[test]
    fn test_parse_valid_toml_minimal() {
        let toml = r#"
balloon_expandable_models = ["Edwards SAPIEN 3"]

[ranges.anulus_aortico]
min = 15
max = 35
unit = "mm"
label = "Anulus Aortico"
"#;

        let profile = parse_toml(toml).expect("Failed to parse valid TOML");

        assert_eq!(profile.ranges.len(), 1);
        let anulus = profile.ranges.get("anulus_aortico").unwrap();
        assert_eq!(anulus.min, 15.0);
        assert_eq!(anulus.max, 35.0);
        assert_eq!(profile.balloon_expandable_models, vec!["Edwards SAPIEN 3"]);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let invalid_toml = r#"
risk_factors = "not an array
[[[invalid syntax
"#;

        let result = parse_toml(invalid_toml);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ParserError::TomlError(_)));
    }

    #[test]
    fn test_yaml_and_toml_yield_the_same_profile() {
        let yaml = r#"
self_expandable_models:
  - Portico
  - Allegra
ranges:
  fe:
    min: 40
    max: 100
    unit: "%"
    label: FE
"#;
        let toml = r#"
self_expandable_models = ["Portico", "Allegra"]

[ranges.fe]
min = 40.0
max = 100.0
unit = "%"
label = "FE"
"#;

        let from_yaml = parse_yaml(yaml).expect("Failed to parse YAML");
        let from_toml = parse_toml(toml).expect("Failed to parse TOML");
        assert_eq!(from_yaml, from_toml);
    }

    #[test]
    fn test_detect_format_yaml() {
        let path = Path::new("profile.yaml");
        assert_eq!(detect_format(path).unwrap(), ProfileFormat::Yaml);

        let path = Path::new("profile.yml");
        assert_eq!(detect_format(path).unwrap(), ProfileFormat::Yaml);
    }

    #[test]
    fn test_detect_format_toml() {
        let path = Path::new("profile.toml");
        assert_eq!(detect_format(path).unwrap(), ProfileFormat::Toml);
    }

    #[test]
    fn test_detect_format_unsupported() {
        let path = Path::new("profile.json");
        let result = detect_format(path);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ParserError::UnsupportedFormat(_)
        ));
    }

    #[test]
    fn test_detect_format_no_extension() {
        let path = Path::new("profile");
        let result = detect_format(path);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ParserError::InvalidExtension));
    }

    #[test]
    fn test_parse_file_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let yaml_path = dir.path().join("profile.yml");
        let yaml = serde_yaml_ng::to_string(&RegistryProfile::standard())
            .expect("Failed to serialize profile");
        std::fs::write(&yaml_path, yaml).expect("Failed to write profile");

        let parsed = parse_file(&yaml_path).expect("Failed to parse written profile");
        assert_eq!(parsed, RegistryProfile::standard());
    }

    #[test]
    fn test_parse_records_accepts_loose_input() {
        let json = r#"[
            {
                "id": 1,
                "nome": "Mario",
                "cognome": "Rossi",
                "data_procedura": "2024-06-10",
                "tipo_valvola": "Balloon Expandable",
                "fe": "55",
                "peso": 80.5
            },
            {"nome": "Anna"}
        ]"#;

        let records = parse_records(json).expect("Failed to parse records");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, Some(1));
        assert_eq!(records[0].tipo_valvola, Some(ValveType::BalloonExpandable));
        assert_eq!(records[0].fe.as_number(), Some(55.0));
        assert_eq!(records[1].cognome, "");
        assert!(records[1].tipo_valvola.is_none());
    }

    #[test]
    fn test_parse_records_rejects_non_arrays() {
        let result = parse_records(r#"{"nome": "Mario"}"#);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ParserError::JsonError(_)));
    }

    #[test]
    fn test_load_records_from_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("records.json");
        std::fs::write(&path, r#"[{"nome": "Mario", "cognome": "Rossi"}]"#)
            .expect("Failed to write records");

        let records = load_records(&path).expect("Failed to load records");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].full_name(), "Mario Rossi");
    }
}
