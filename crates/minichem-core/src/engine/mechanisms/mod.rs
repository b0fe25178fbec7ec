//! # Mechanisms Module
//!
//! Product predictors and product checks. A mechanism turns reagents into products without
//! judging whether the reaction happens; a restriction inspects the products and vetoes the
//! ones that cannot form. The reaction periodic tables in [`super::rpt`] pair each reagent
//! signature with one mechanism and at most one restriction.
//!
//! ## Submodules
//!
//! - [`molecular`] - Mechanisms over simple substances and neutral molecules
//! - [`ionic`] - Mechanisms over ions, ion groups and molecules in solution
//! - [`restrictions`] - Product checks (weak electrolyte, metal activity)

pub mod ionic;
pub mod molecular;
pub mod restrictions;

use super::context::Databases;
use super::error::{ChemistryError, join_formulas};
use crate::core::particles::{Ion, Molecule, Particle, Simple};

pub type MechanismFn = fn(&Databases, &[Particle]) -> Result<Vec<Particle>, ChemistryError>;

pub type RestrictionFn = fn(&Databases, &[Particle]) -> Result<(), ChemistryError>;

pub(crate) fn formulas(particles: &[Particle]) -> String {
    join_formulas(particles.iter().map(Particle::formula))
}

/// Views `reagents` as an array of exactly `N` particles.
pub(crate) fn exact<'a, const N: usize>(
    reagents: &'a [Particle],
    expected: &'static str,
) -> Result<&'a [Particle; N], ChemistryError> {
    reagents
        .try_into()
        .map_err(|_| ChemistryError::WrongNumberOfReagents {
            reagents: formulas(reagents),
            found: reagents.len(),
            expected,
        })
}

fn unsupported(particle: &Particle, reaction: &'static str) -> ChemistryError {
    ChemistryError::UnsupportedParticle {
        formula: particle.formula(),
        kind: particle.kind_name(),
        reaction,
    }
}

pub(crate) fn molecule<'a>(
    particle: &'a Particle,
    reaction: &'static str,
) -> Result<&'a Molecule, ChemistryError> {
    particle.as_molecule().ok_or_else(|| unsupported(particle, reaction))
}

pub(crate) fn simple<'a>(
    particle: &'a Particle,
    reaction: &'static str,
) -> Result<&'a Simple, ChemistryError> {
    particle.as_simple().ok_or_else(|| unsupported(particle, reaction))
}

/// One simple substance and one molecule, in either order.
pub(crate) fn simple_and_molecule<'a>(
    reagents: &'a [Particle],
    reaction: &'static str,
) -> Result<(&'a Simple, &'a Molecule), ChemistryError> {
    let [first, second] = exact::<2>(reagents, "2")?;
    match (first, second) {
        (Particle::Simple(s), Particle::Molecule(m)) | (Particle::Molecule(m), Particle::Simple(s)) => Ok((s, m)),
        (Particle::Simple(_), other) | (other, _) => Err(unsupported(other, reaction)),
    }
}

/// One ion and one partner particle, in either order.
pub(crate) fn ion_and_other<'a>(
    reagents: &'a [Particle],
    reaction: &'static str,
) -> Result<(&'a Ion, &'a Particle), ChemistryError> {
    let [first, second] = exact::<2>(reagents, "2")?;
    match (first, second) {
        (Particle::Ion(i), other) | (other, Particle::Ion(i)) => Ok((i, other)),
        (other, _) => Err(unsupported(other, reaction)),
    }
}

/// A group-backed ion turns back into its ion group, any other ion stays an ion.
pub(crate) fn ion_particle(ion: &Ion) -> Particle {
    match ion.group() {
        Some(group) => Particle::IonGroup(group.clone()),
        None => Particle::Ion(ion.clone()),
    }
}

/// Cation, anion and their indices of a molecule or ion group.
pub(crate) fn ion_parts(particle: &Particle) -> Option<(&Ion, &Ion, u32, u32)> {
    match particle {
        Particle::Molecule(m) => Some((m.cation(), m.anion(), m.cation_index(), m.anion_index())),
        Particle::IonGroup(g) => Some((g.cation(), g.anion(), g.cation_index(), g.anion_index())),
        _ => None,
    }
}
