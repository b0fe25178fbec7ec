//! # Data Module
//!
//! Lookup databases consumed by the reaction engine: the solubility table, the acids and
//! bases compatibility tables and the metal activity series. Each table is parsed once,
//! either from the resources embedded in the crate or from a user-supplied file, and is
//! read-only afterwards.

pub mod acids;
pub mod activity;
pub mod bases;
pub mod solubility;

pub use acids::AcidsTable;
pub use activity::{Activity, MetalActivitySeries};
pub use bases::BasesTable;
pub use solubility::{IonQuery, Solubility, SolubilityTable, SubstanceFilter, SubstanceRecord};

use crate::core::formula::FormulaError;
use crate::core::particles::ParticleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid record in '{path}' at line {line}: {reason}")]
    InvalidRecord {
        path: String,
        line: u64,
        reason: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Substance {signature} not found in the solubility table")]
    SubstanceNotFound { signature: String },
    #[error("Substance {signature} is listed {count} times in the solubility table")]
    DuplicateSubstance { signature: String, count: usize },
    #[error("Ion {signature} not found")]
    IonNotFound { signature: String },
    #[error("No acid found for {signature}")]
    AcidNotFound { signature: String },
    #[error("No acidic oxide found for {signature}")]
    AcidicOxideNotFound { signature: String },
    #[error("No base found for {signature}")]
    BaseNotFound { signature: String },
    #[error("Element '{element}' is not a metal")]
    ElementIsNotMetal { element: &'static str },
    #[error("Activity of metal '{element}' is unknown")]
    UnknownActivityMetal { element: &'static str },
    #[error(transparent)]
    Particle(#[from] ParticleError),
    #[error(transparent)]
    Formula(#[from] FormulaError),
}

pub(crate) const BUILTIN_SOLUBILITY: &str = include_str!("../../../data/solubility.csv");
pub(crate) const BUILTIN_ACIDS: &str = include_str!("../../../data/acids.csv");
pub(crate) const BUILTIN_ACTIVITY: &str = include_str!("../../../data/activity.toml");
