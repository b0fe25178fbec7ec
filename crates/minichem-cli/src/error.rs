use minichemistry::engine::error::ChemistryError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Failures of a `minichem` run, named after the step that failed.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Cannot load the chemistry databases: {0}")]
    Databases(#[source] ChemistryError),

    #[error("Cannot read formula '{formula}': {source}")]
    Formula {
        formula: String,
        #[source]
        source: ChemistryError,
    },

    #[error("Cannot predict the products of '{reagents}': {source}")]
    Prediction {
        reagents: String,
        #[source]
        source: ChemistryError,
    },

    #[error("Cannot balance '{scheme}': {source}")]
    Balancing {
        scheme: String,
        #[source]
        source: ChemistryError,
    },

    #[error("Cannot derive the short ionic equation of '{reagents}': {source}")]
    Essential {
        reagents: String,
        #[source]
        source: ChemistryError,
    },

    #[error("Cannot combine '{first}' and '{second}': {source}")]
    Redox {
        first: String,
        second: String,
        #[source]
        source: ChemistryError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file '{path}': {source}", path = path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to read reaction list '{path}': {source}", path = path.display())]
    ReactionList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Terminal output setup failed: {0}")]
    Terminal(#[source] anyhow::Error),
}

impl CliError {
    /// Balancing failures keep their own variant even when they surface while predicting.
    pub fn prediction(reagents: &str, source: ChemistryError) -> Self {
        match source {
            ChemistryError::Equation(_) => Self::Balancing {
                scheme: reagents.to_string(),
                source,
            },
            source => Self::Prediction {
                reagents: reagents.to_string(),
                source,
            },
        }
    }

    pub fn balancing(scheme: &str, source: ChemistryError) -> Self {
        Self::Balancing {
            scheme: scheme.to_string(),
            source,
        }
    }

    /// The chemistry failure underneath, if any.
    pub fn chemistry(&self) -> Option<&ChemistryError> {
        match self {
            Self::Databases(source)
            | Self::Formula { source, .. }
            | Self::Prediction { source, .. }
            | Self::Balancing { source, .. }
            | Self::Essential { source, .. }
            | Self::Redox { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minichemistry::engine::equalizer::EquationError;

    fn equation_error() -> ChemistryError {
        EquationError::CannotEquateReaction {
            scheme: "H2 -> O2".to_string(),
            reason: "the substances cannot be balanced",
        }
        .into()
    }

    #[test]
    fn balancing_failures_during_prediction_are_reported_as_balancing() {
        let error = CliError::prediction("H2 + O2", equation_error());
        assert!(matches!(error, CliError::Balancing { ref scheme, .. } if scheme == "H2 + O2"));
        assert!(matches!(error.chemistry(), Some(ChemistryError::Equation(_))));
    }

    #[test]
    fn other_prediction_failures_keep_the_reagents() {
        let source = ChemistryError::CannotPredictProducts {
            reagents: "Cu + H2O".to_string(),
            stage: "no rule matches",
        };
        let error = CliError::prediction("Cu + H2O", source);
        assert!(matches!(error, CliError::Prediction { .. }));
        assert!(error.to_string().starts_with("Cannot predict the products of 'Cu + H2O'"));
    }

    #[test]
    fn non_chemistry_errors_have_no_chemistry_source() {
        assert!(CliError::Argument("x".to_string()).chemistry().is_none());
    }
}
