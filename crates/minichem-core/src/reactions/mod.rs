//! # Reactions Module
//!
//! The public entry points: reaction entities that tie prediction and balancing together.
//!
//! ## Overview
//!
//! A reaction is built either from its reagents alone, in which case the Reaction Prediction
//! Tool supplies the products, or from both sides. Both sides are kept sorted by formula, so
//! a reaction is identified by its scheme and two reactions written in a different order
//! compare equal. Coefficients are recomputed by the Equalizer on every request.
//!
//! ## Architecture
//!
//! - **Shared Core** ([`reaction`]) - The generic [`Reaction`] with scheme, equation and
//!   coefficients
//! - **Molecular Reactions** ([`molecular`]) - Simple substances and molecules
//! - **Ionic Reactions** ([`ionic`]) - Ions, ion groups and molecules in solution
//! - **Half-Reactions** ([`half`]) - Redox halves with electrons, protons and neutrons
//! - **Modifiers** ([`modifiers`]) - Derived reactions such as the short ionic equation
//! - **Reaction Algebra** ([`math`]) - Balanced reactions as linear equations that can be
//!   scaled, added and substituted
//! - **Standard Potentials** ([`potentials`]) - The CSV-backed half-reaction potential table
//! - **Sorting** ([`sorting`]) - Cation/anion and reduction/oxidation ordering, overall redox

pub mod half;
pub mod ionic;
pub mod math;
pub mod modifiers;
pub mod molecular;
pub mod potentials;
pub mod reaction;
pub mod sorting;

pub use half::{HalfReaction, Side};
pub use ionic::IonGroupReaction;
pub use math::{MathReaction, Term};
pub use modifiers::essential_equation;
pub use molecular::{MolecularReaction, ReactionType};
pub use potentials::{Extremum, HalfReactionDatabase};
pub use reaction::Reaction;
pub use sorting::{ParticleKind, cation_and_anion, filter_particles, overall_redox, reduction_and_oxidation};

use crate::core::particles::Particle;
use crate::engine::context::Chemistry;
use crate::engine::error::ChemistryError;

/// A scheme split into its terms. Products are absent when the text has no arrow.
pub(crate) struct SchemeTerms {
    pub reagents: Vec<String>,
    pub products: Option<Vec<String>>,
}

/// Splits `"A + B -> C"` (or `"A + B = C"`, or just `"A + B"`) into terms.
///
/// Whitespace is ignored and `+` only separates terms outside brackets.
pub(crate) fn split_scheme(text: &str) -> Result<SchemeTerms, ChemistryError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized = compact.replace("->", "=");
    let sides: Vec<&str> = normalized.split('=').collect();
    match sides.as_slice() {
        [reagents] => Ok(SchemeTerms {
            reagents: split_side(reagents)?,
            products: None,
        }),
        [reagents, products] => Ok(SchemeTerms {
            reagents: split_side(reagents)?,
            products: Some(split_side(products)?),
        }),
        _ => Err(ChemistryError::WrongReactionConstructorParameters {
            reason: format!("'{text}' has more than one arrow"),
        }),
    }
}

fn split_side(side: &str) -> Result<Vec<String>, ChemistryError> {
    let mut terms = Vec::new();
    let mut current = String::new();
    let mut depth = 0_i32;
    for c in side.chars() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth -= 1,
            '+' if depth == 0 => {
                terms.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    terms.push(current);
    if terms.iter().any(String::is_empty) {
        return Err(ChemistryError::WrongReactionConstructorParameters {
            reason: format!("'{side}' has an empty term"),
        });
    }
    Ok(terms)
}

pub(crate) fn parse_terms(chemistry: &Chemistry, terms: &[String]) -> Result<Vec<Particle>, ChemistryError> {
    terms.iter().map(|t| chemistry.parse(t)).collect()
}

/// Rejects particle kinds a reaction type cannot hold.
pub(crate) fn check_kinds(
    particles: &[Particle],
    allowed: fn(&Particle) -> bool,
    reaction: &'static str,
) -> Result<(), ChemistryError> {
    match particles.iter().find(|p| !allowed(p)) {
        Some(p) => Err(ChemistryError::UnsupportedParticle {
            formula: p.formula(),
            kind: p.kind_name(),
            reaction,
        }),
        None => Ok(()),
    }
}

pub(crate) fn check_sides(reagents: &[Particle], products: &[Particle]) -> Result<(), ChemistryError> {
    if reagents.is_empty() || products.is_empty() {
        return Err(ChemistryError::WrongReactionConstructorParameters {
            reason: "both reagents and products must be given".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_scheme_accepts_both_arrows_and_no_arrow() {
        let terms = split_scheme("Na + H2O -> NaOH + H2").unwrap();
        assert_eq!(terms.reagents, ["Na", "H2O"]);
        assert_eq!(terms.products.unwrap(), ["NaOH", "H2"]);

        let terms = split_scheme("H2 + O2 = H2O").unwrap();
        assert_eq!(terms.products.unwrap(), ["H2O"]);

        let terms = split_scheme("  NaOH+H2SO4 ").unwrap();
        assert_eq!(terms.reagents, ["NaOH", "H2SO4"]);
        assert!(terms.products.is_none());
    }

    #[test]
    fn split_scheme_keeps_signed_charges_together() {
        let terms = split_scheme("Fe(3) + e(-1) -> Fe(2)").unwrap();
        assert_eq!(terms.reagents, ["Fe(3)", "e(-1)"]);
        assert_eq!(terms.products.unwrap(), ["Fe(2)"]);

        let terms = split_scheme("SO4(-2) + Ba(2) -> BaSO4").unwrap();
        assert_eq!(terms.reagents, ["SO4(-2)", "Ba(2)"]);
        let chemistry = Chemistry::builtin().unwrap();
        let parsed = parse_terms(&chemistry, &terms.reagents).unwrap();
        assert_eq!(parsed[0].charge(), -2);
        assert_eq!(parsed[1].formula(), "Ba(2)");
    }

    #[test]
    fn split_scheme_rejects_malformed_text() {
        assert!(split_scheme("A -> B -> C").is_err());
        assert!(split_scheme("A + -> B").is_err());
        assert!(split_scheme("").is_err());
    }
}
