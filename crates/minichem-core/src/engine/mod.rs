//! # Engine Module
//!
//! Reaction prediction and equation balancing on top of the [`crate::core`] model.
//!
//! ## Overview
//!
//! A prediction classifies the reagents, looks up the rule for their class signature in the
//! Reaction Prediction Tool, runs the selected mechanism and validates the products with the
//! rule's restriction. Balancing is independent of prediction: the Equalizer takes any two
//! lists of substances and finds the smallest positive integer coefficients.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Resource override paths and equalizer settings
//! - **Context** ([`context`]) - The loaded databases and rule tables, shared read-only
//! - **Mechanisms** ([`mechanisms`]) - Product predictors and product checks
//! - **Prediction** ([`rpt`]) - Rule tables and signature dispatch
//! - **Balancing** ([`equalizer`]) - Exact rational nullspace solver
//! - **Error Handling** ([`error`]) - The aggregate [`ChemistryError`]

pub mod config;
pub mod context;
pub mod equalizer;
pub mod error;
pub mod mechanisms;
pub mod rpt;

pub use config::{ChemistryConfig, ChemistryConfigBuilder, EqualizerSettings};
pub use context::{Chemistry, Databases};
pub use equalizer::{EquationError, Equalizer};
pub use error::{ChemistryError, RestrictionError};
pub use rpt::{Algorithm, ReagentClass, Rpt};
