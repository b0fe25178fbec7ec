//! Helpers that put pairs of particles or half-reactions into their chemical roles.

use super::half::HalfReaction;
use super::math::MathReaction;
use super::potentials::{Extremum, HalfReactionDatabase};
use crate::core::particles::{ElementaryParticle, Ion, Particle, ParticleError, Reactant};
use crate::engine::error::ChemistryError;
use num_integer::Integer;
use num_rational::Rational64;

/// Particle families accepted by [`filter_particles`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Simple,
    Ion,
    Molecule,
    IonGroup,
}

impl ParticleKind {
    pub fn of(particle: &Particle) -> Self {
        match particle {
            Particle::Simple(_) => ParticleKind::Simple,
            Particle::Ion(_) => ParticleKind::Ion,
            Particle::Molecule(_) => ParticleKind::Molecule,
            Particle::IonGroup(_) => ParticleKind::IonGroup,
        }
    }
}

/// Orders two ions as `(cation, anion)`, whichever order they come in.
pub fn cation_and_anion<'a>(first: &'a Ion, second: &'a Ion) -> Result<(&'a Ion, &'a Ion), ParticleError> {
    match (first.is_cation(), second.is_cation()) {
        (true, false) => Ok((first, second)),
        (false, true) => Ok((second, first)),
        (true, true) => Err(ParticleError::Charge {
            formula: second.formula(),
            charge: second.charge(),
            expected: "an anion to pair with the cation",
        }),
        (false, false) => Err(ParticleError::Charge {
            formula: second.formula(),
            charge: second.charge(),
            expected: "a cation to pair with the anion",
        }),
    }
}

/// Orders two listed reduction half-reactions as `(reduction, oxidation)`.
///
/// The one with the higher standard potential keeps running as a reduction; the other is
/// the one that will run in reverse.
pub fn reduction_and_oxidation<'a>(
    database: &HalfReactionDatabase,
    first: &'a HalfReaction,
    second: &'a HalfReaction,
) -> Result<(&'a HalfReaction, &'a HalfReaction), ChemistryError> {
    let reduction = database.compare_potentials(&[first, second], Extremum::Highest)?;
    let oxidation = if std::ptr::eq(reduction, first) { second } else { first };
    Ok((reduction, oxidation))
}

/// The overall redox equation of two listed half-reactions, with the electrons cancelled.
pub fn overall_redox(
    database: &HalfReactionDatabase,
    first: &HalfReaction,
    second: &HalfReaction,
) -> Result<MathReaction<Reactant>, ChemistryError> {
    let (reduction, oxidation) = reduction_and_oxidation(database, first, second)?;
    let reduction = MathReaction::<Reactant>::from_reaction(reduction)?;
    let mut oxidation = MathReaction::<Reactant>::from_reaction(oxidation)?;
    oxidation.reverse();

    let electron = Reactant::Elementary(ElementaryParticle::Electron);
    let electrons = |half: &MathReaction<Reactant>| {
        half.coefficient(&electron)
            .filter(Rational64::is_integer)
            .map(|c| c.to_integer())
            .filter(|c| *c > 0)
            .ok_or_else(|| ChemistryError::WrongReactionConstructorParameters {
                reason: format!("'{}' transfers no electrons", half.scheme()),
            })
    };
    let gained = electrons(&reduction)?;
    let lost = electrons(&oxidation)?;
    let common = gained.lcm(&lost);
    Ok(reduction * (common / gained) + oxidation * (common / lost))
}

/// The particles of the given kind, in their original order.
pub fn filter_particles(particles: &[Particle], kind: ParticleKind) -> Vec<&Particle> {
    particles
        .iter()
        .filter(|p| ParticleKind::of(p) == kind)
        .collect()
}
