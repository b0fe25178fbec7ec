use super::config::ConfigError;
use super::equalizer::EquationError;
use super::rpt::RuleLoadError;
use crate::core::data::{Activity, DataLoadError, LookupError};
use crate::core::elements::ElementError;
use crate::core::formula::{FormulaError, ParseError};
use crate::core::particles::ParticleError;
use thiserror::Error;

/// A mechanism produced products that chemistry says will not form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RestrictionError {
    #[error("No weak electrolyte (water, gas or precipitate) among the products: {products}")]
    WeakElectrolyteNotFound { products: String },
    #[error("Metal '{metal}' is not more active than '{displaced}', which it should displace")]
    LessActiveMetalReagent { metal: String, displaced: String },
    #[error("Metal '{metal}' is {activity}, expected {expected}")]
    WrongMetalActivity {
        metal: &'static str,
        activity: Activity,
        expected: Activity,
    },
}

#[derive(Debug, Error)]
pub enum ChemistryError {
    #[error(transparent)]
    Element(#[from] ElementError),
    #[error(transparent)]
    Particle(#[from] ParticleError),
    #[error(transparent)]
    Formula(#[from] FormulaError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    RuleLoad(#[from] RuleLoadError),
    #[error(transparent)]
    Restriction(#[from] RestrictionError),
    #[error(transparent)]
    Equation(#[from] EquationError),
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Cannot predict the products of {reagents} ({stage})")]
    CannotPredictProducts {
        reagents: String,
        stage: &'static str,
    },
    #[error("'{formula}' is a {class}, expected {expected}")]
    WrongSimpleClass {
        formula: String,
        class: String,
        expected: &'static str,
    },
    #[error("'{formula}' is a {subclass}, expected {expected}")]
    WrongSimpleSubclass {
        formula: String,
        subclass: String,
        expected: &'static str,
    },
    #[error("Expected {expected} reagents, got {found}: {reagents}")]
    WrongNumberOfReagents {
        reagents: String,
        found: usize,
        expected: &'static str,
    },
    #[error("Invalid reaction parameters: {reason}")]
    WrongReactionConstructorParameters { reason: String },
    #[error("'{formula}' is a {kind}, which a {reaction} cannot contain")]
    UnsupportedParticle {
        formula: String,
        kind: &'static str,
        reaction: &'static str,
    },
    #[error("No essential equation for '{scheme}': {reason}")]
    NoEssentialEquation {
        scheme: String,
        reason: &'static str,
    },
    #[error("Half-reaction '{scheme}' has no standard potential in the database")]
    HalfReactionNotFound { scheme: String },
    #[error("Internal inconsistency in {context}; this is a bug")]
    NotSupposedToHappen { context: &'static str },
}

impl ChemistryError {
    /// Whether the error is a restriction veto, which `ignore_restrictions` bypasses.
    pub fn is_restriction(&self) -> bool {
        matches!(self, ChemistryError::Restriction(_))
    }
}

/// Joins formulas the way reaction sides are written.
pub(crate) fn join_formulas<I: IntoIterator<Item = String>>(formulas: I) -> String {
    formulas.into_iter().collect::<Vec<_>>().join(" + ")
}
