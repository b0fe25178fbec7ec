use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_LAMBDA_THRESHOLD: u32 = 4;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for parameter '{parameter}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

/// Paths that replace the embedded resources. `None` keeps the built-in file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataPaths {
    pub solubility: Option<PathBuf>,
    pub acids: Option<PathBuf>,
    pub activity: Option<PathBuf>,
    pub molecular_rules: Option<PathBuf>,
    pub ionic_rules: Option<PathBuf>,
    pub potentials: Option<PathBuf>,
}

/// How the Equalizer builds and searches its solution space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EqualizerSettings {
    pub lambda_threshold: u32,
    pub charge_balance: bool,
}

impl Default for EqualizerSettings {
    fn default() -> Self {
        Self {
            lambda_threshold: DEFAULT_LAMBDA_THRESHOLD,
            charge_balance: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChemistryConfig {
    pub data: DataPaths,
    pub equalizer: EqualizerSettings,
}

#[derive(Default)]
pub struct ChemistryConfigBuilder {
    solubility_path: Option<PathBuf>,
    acids_path: Option<PathBuf>,
    activity_path: Option<PathBuf>,
    molecular_rules_path: Option<PathBuf>,
    ionic_rules_path: Option<PathBuf>,
    potentials_path: Option<PathBuf>,
    lambda_threshold: Option<u32>,
    charge_balance: Option<bool>,
}

impl ChemistryConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn solubility_path(mut self, path: PathBuf) -> Self {
        self.solubility_path = Some(path);
        self
    }
    pub fn acids_path(mut self, path: PathBuf) -> Self {
        self.acids_path = Some(path);
        self
    }
    pub fn activity_path(mut self, path: PathBuf) -> Self {
        self.activity_path = Some(path);
        self
    }
    pub fn molecular_rules_path(mut self, path: PathBuf) -> Self {
        self.molecular_rules_path = Some(path);
        self
    }
    pub fn ionic_rules_path(mut self, path: PathBuf) -> Self {
        self.ionic_rules_path = Some(path);
        self
    }
    pub fn potentials_path(mut self, path: PathBuf) -> Self {
        self.potentials_path = Some(path);
        self
    }
    pub fn lambda_threshold(mut self, threshold: u32) -> Self {
        self.lambda_threshold = Some(threshold);
        self
    }
    pub fn charge_balance(mut self, enabled: bool) -> Self {
        self.charge_balance = Some(enabled);
        self
    }

    pub fn build(self) -> Result<ChemistryConfig, ConfigError> {
        let lambda_threshold = self.lambda_threshold.unwrap_or(DEFAULT_LAMBDA_THRESHOLD);
        if lambda_threshold == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "lambda_threshold",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(ChemistryConfig {
            data: DataPaths {
                solubility: self.solubility_path,
                acids: self.acids_path,
                activity: self.activity_path,
                molecular_rules: self.molecular_rules_path,
                ionic_rules: self.ionic_rules_path,
                potentials: self.potentials_path,
            },
            equalizer: EqualizerSettings {
                lambda_threshold,
                charge_balance: self.charge_balance.unwrap_or(true),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_embedded_resources() {
        let config = ChemistryConfigBuilder::new().build().unwrap();
        assert_eq!(config, ChemistryConfig::default());
        assert_eq!(config.equalizer.lambda_threshold, 4);
        assert!(config.equalizer.charge_balance);
    }

    #[test]
    fn builder_applies_overrides() {
        let config = ChemistryConfigBuilder::new()
            .solubility_path(PathBuf::from("table.csv"))
            .lambda_threshold(6)
            .charge_balance(false)
            .potentials_path(PathBuf::from("potentials.csv"))
            .build()
            .unwrap();
        assert_eq!(config.data.potentials, Some(PathBuf::from("potentials.csv")));
        assert_eq!(config.data.solubility, Some(PathBuf::from("table.csv")));
        assert_eq!(config.data.acids, None);
        assert_eq!(config.equalizer.lambda_threshold, 6);
        assert!(!config.equalizer.charge_balance);
    }

    #[test]
    fn builder_rejects_zero_threshold() {
        let result = ChemistryConfigBuilder::new().lambda_threshold(0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                parameter: "lambda_threshold",
                ..
            })
        ));
    }
}
