use crate::error::{CliError, Result};
use minichemistry::engine::config::{ChemistryConfig, ChemistryConfigBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialDataConfig {
    #[serde(rename = "solubility-path")]
    solubility_path: Option<PathBuf>,
    #[serde(rename = "acids-path")]
    acids_path: Option<PathBuf>,
    #[serde(rename = "activity-path")]
    activity_path: Option<PathBuf>,
    #[serde(rename = "molecular-rules-path")]
    molecular_rules_path: Option<PathBuf>,
    #[serde(rename = "ionic-rules-path")]
    ionic_rules_path: Option<PathBuf>,
    #[serde(rename = "potentials-path")]
    potentials_path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialEqualizerConfig {
    #[serde(rename = "lambda-threshold")]
    lambda_threshold: Option<u32>,
    #[serde(rename = "charge-balance")]
    charge_balance: Option<bool>,
}

/// The `[data]` and `[equalizer]` tables of a configuration file, every key optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialChemistryConfig {
    data: Option<PartialDataConfig>,
    equalizer: Option<PartialEqualizerConfig>,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl PartialChemistryConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CliError::ConfigFile {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::ConfigFile {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Loads `path` when given, otherwise starts from the built-in resources.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies the command-line overrides and validates the result.
    ///
    /// Relative data paths are resolved against the directory of the configuration file.
    pub fn merge_with_cli(self, threshold: Option<u32>) -> Result<ChemistryConfig> {
        let data = self.data.unwrap_or_default();
        let equalizer = self.equalizer.unwrap_or_default();
        let base_dir = self.base_dir;

        let resolve = |path: Option<PathBuf>, key: &str| -> Result<Option<PathBuf>> {
            let Some(path) = path else {
                return Ok(None);
            };
            let path = match &base_dir {
                Some(dir) if path.is_relative() => dir.join(path),
                _ => path,
            };
            if !path.exists() {
                return Err(CliError::Config(format!(
                    "The file given for 'data.{}' does not exist: {}",
                    key,
                    path.display()
                )));
            }
            Ok(Some(path))
        };

        let mut builder = ChemistryConfigBuilder::new();
        if let Some(path) = resolve(data.solubility_path, "solubility-path")? {
            builder = builder.solubility_path(path);
        }
        if let Some(path) = resolve(data.acids_path, "acids-path")? {
            builder = builder.acids_path(path);
        }
        if let Some(path) = resolve(data.activity_path, "activity-path")? {
            builder = builder.activity_path(path);
        }
        if let Some(path) = resolve(data.molecular_rules_path, "molecular-rules-path")? {
            builder = builder.molecular_rules_path(path);
        }
        if let Some(path) = resolve(data.ionic_rules_path, "ionic-rules-path")? {
            builder = builder.ionic_rules_path(path);
        }
        if let Some(path) = resolve(data.potentials_path, "potentials-path")? {
            builder = builder.potentials_path(path);
        }
        if let Some(threshold) = threshold.or(equalizer.lambda_threshold) {
            builder = builder.lambda_threshold(threshold);
        }
        if let Some(enabled) = equalizer.charge_balance {
            builder = builder.charge_balance(enabled);
        }

        builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("minichem.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_means_builtin_resources() {
        let config = PartialChemistryConfig::load(None)
            .unwrap()
            .merge_with_cli(None)
            .unwrap();
        assert_eq!(config, ChemistryConfig::default());
    }

    #[test]
    fn file_values_are_loaded_and_paths_resolved() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("rules.csv"), "").unwrap();
        let path = write_config(
            dir.path(),
            r#"
            [data]
            molecular-rules-path = "rules.csv"

            [equalizer]
            lambda-threshold = 7
            charge-balance = false
            "#,
        );

        let config = PartialChemistryConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(None)
            .unwrap();
        assert_eq!(config.data.molecular_rules, Some(dir.path().join("rules.csv")));
        assert_eq!(config.data.solubility, None);
        assert_eq!(config.equalizer.lambda_threshold, 7);
        assert!(!config.equalizer.charge_balance);
    }

    #[test]
    fn cli_threshold_overrides_file_value() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "[equalizer]\nlambda-threshold = 7\n");
        let config = PartialChemistryConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(Some(2))
            .unwrap();
        assert_eq!(config.equalizer.lambda_threshold, 2);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "[equalizer]\nthreshold = 7\n");
        assert!(matches!(
            PartialChemistryConfig::from_file(&path),
            Err(CliError::ConfigFile { .. })
        ));
    }

    #[test]
    fn missing_config_file_names_the_path() {
        let result = PartialChemistryConfig::from_file(Path::new("/nonexistent/minichem.toml"));
        assert!(matches!(
            result,
            Err(CliError::ConfigFile { ref path, .. }) if path.ends_with("minichem.toml")
        ));
    }

    #[test]
    fn missing_data_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "[data]\nacids-path = \"nowhere.csv\"\n");
        let result = PartialChemistryConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(None);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("data.acids-path")));
    }

    #[test]
    fn zero_threshold_is_invalid() {
        let result = PartialChemistryConfig::default().merge_with_cli(Some(0));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
