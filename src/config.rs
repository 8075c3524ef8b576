//! `.rentmap.toml` configuration.
//!
//! The config file is optional; when present it may carry a partial
//! `[weights]` table and `[output]` defaults. Configuration is loaded
//! once at the command boundary and passed down as plain arguments --
//! there is no process-global config state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::errors::{Error, Result};
use crate::scoring::ScoringWeights;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".rentmap.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RentmapConfig {
    /// Partial weight map. Only the `schools` key has a fallback; any
    /// other missing key is rejected at load time.
    #[serde(default)]
    pub weights: Option<BTreeMap<String, f64>>,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub default_format: Option<String>,
    pub top: Option<usize>,
}

impl RentmapConfig {
    /// Resolve the configured weights, or the canonical defaults when no
    /// `[weights]` table is present.
    pub fn scoring_weights(&self) -> Result<ScoringWeights> {
        match &self.weights {
            Some(map) => ScoringWeights::from_map(map),
            None => Ok(ScoringWeights::default()),
        }
    }
}

fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string.
pub fn parse_config(contents: &str) -> Result<RentmapConfig> {
    let config = toml::from_str::<RentmapConfig>(contents)?;
    // Surface weight-table contract violations at load time rather than
    // at first ranking call.
    config.scoring_weights()?;
    Ok(config)
}

/// Load configuration.
///
/// An explicit path must exist and parse; with no path, a missing
/// `.rentmap.toml` in the working directory just means defaults.
pub fn load_config(path: Option<&Path>) -> Result<RentmapConfig> {
    match path {
        Some(explicit) => {
            let contents = read_config_file(explicit).map_err(|e| {
                Error::configuration(format!(
                    "cannot read config file {}: {e}",
                    explicit.display()
                ))
            })?;
            let config = parse_config(&contents)?;
            log::debug!("loaded config from {}", explicit.display());
            Ok(config)
        }
        None => {
            let default_path = Path::new(CONFIG_FILE_NAME);
            match read_config_file(default_path) {
                Ok(contents) => {
                    let config = parse_config(&contents)?;
                    log::debug!("loaded config from {}", default_path.display());
                    Ok(config)
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    log::debug!("no {CONFIG_FILE_NAME} found, using defaults");
                    Ok(RentmapConfig::default())
                }
                Err(e) => Err(e.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::DEFAULT_SCHOOLS_WEIGHT;

    #[test]
    fn empty_config_uses_default_weights() {
        let config = parse_config("").unwrap();
        assert!(config.weights.is_none());
        assert_eq!(
            config.scoring_weights().unwrap(),
            ScoringWeights::default()
        );
    }

    #[test]
    fn full_weights_table_parses() {
        let config = parse_config(
            r#"
[weights]
affordability = 0.4
amenities = 0.15
transit = 0.15
safety = 0.15
schools = 0.05
growth = 0.1
"#,
        )
        .unwrap();
        let weights = config.scoring_weights().unwrap();
        assert_eq!(weights.affordability, 0.4);
        assert_eq!(weights.schools, 0.05);
    }

    #[test]
    fn partial_table_missing_only_schools_is_accepted() {
        let config = parse_config(
            r#"
[weights]
affordability = 0.3
amenities = 0.2
transit = 0.2
safety = 0.2
growth = 0.1
"#,
        )
        .unwrap();
        let weights = config.scoring_weights().unwrap();
        assert_eq!(weights.schools, DEFAULT_SCHOOLS_WEIGHT);
    }

    #[test]
    fn partial_table_missing_another_key_is_rejected() {
        let result = parse_config(
            r#"
[weights]
affordability = 0.3
amenities = 0.2
safety = 0.2
growth = 0.1
"#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("weights.transit"));
    }

    #[test]
    fn invalid_toml_is_rejected() {
        assert!(parse_config("[weights\naffordability = ").is_err());
    }

    #[test]
    fn output_section_parses() {
        let config = parse_config(
            r#"
[output]
default_format = "json"
top = 10
"#,
        )
        .unwrap();
        assert_eq!(config.output.default_format.as_deref(), Some("json"));
        assert_eq!(config.output.top, Some(10));
    }

    #[test]
    fn load_config_with_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn load_config_reads_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rentmap.toml");
        fs::write(&path, "[output]\ndefault_format = \"markdown\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.output.default_format.as_deref(), Some("markdown"));
    }
}
