//! # Formula Module
//!
//! Text front-end of the particle model. [`tokens`] turns plain formulas such as `Al2(SO4)3`
//! into element counts and splits charged notations such as `SO4(-2)`; [`parser`] resolves a
//! formula into the concrete [`Particle`](crate::core::particles::Particle) it denotes, using
//! the solubility table to recognise ions.

pub mod parser;
pub mod tokens;

pub use parser::{ParseError, ion_from_string, parse};
pub use tokens::{composition_of, split_ion_string};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("Invalid formula '{formula}': {reason}")]
    InvalidFormula {
        formula: String,
        reason: &'static str,
    },
    #[error("Unknown element '{symbol}' in formula '{formula}'")]
    UnknownElement { formula: String, symbol: String },
    #[error("Unexpected character '{character}' in formula '{formula}'")]
    UnexpectedCharacter { formula: String, character: char },
}
