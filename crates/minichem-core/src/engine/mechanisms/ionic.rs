//! Mechanisms of the ionic algorithm.
//!
//! Reagents are ions, ion groups and molecules in solution. Acids dissociate stepwise
//! (`H2SO4` gives `H(1)` and `HSO4(-1)`), so partially dissociated ion groups appear both as
//! reagents and as products.

use super::{exact, formulas, ion_and_other, ion_particle, ion_parts};
use crate::core::particles::convert::{add_group, remove_group};
use crate::core::particles::special::{hydroxide, proton, water};
use crate::core::particles::{GroupKind, Ion, IonGroup, Molecule, Particle, SimpleClass};
use crate::engine::context::Databases;
use crate::engine::error::ChemistryError;

/// Oppositely charged ions (or an ion and an ion group) combine into one particle.
pub fn ionic_addition(_: &Databases, reagents: &[Particle]) -> Result<Vec<Particle>, ChemistryError> {
    let [first, second] = exact::<2>(reagents, "2")?;
    Ok(vec![combine(first, second)?])
}

/// A molecule or ion group releases one ion.
///
/// Acids release a proton and bases a hydroxide, one at a time; salts split into their
/// cation and anion. Ion groups hidden inside a salt come back out as ion groups.
pub fn ionic_decomposition(_: &Databases, reagents: &[Particle]) -> Result<Vec<Particle>, ChemistryError> {
    let [reagent] = exact::<1>(reagents, "1")?;
    decompose(reagent)
}

/// An ion pulls its counter-ion out of a molecule or ion group.
///
/// A cation binds the host's anion and an anion binds the host's cation. When the host holds
/// more than one of the taken ion, the rest stays behind as an ion group, which is only
/// possible for hydroxides and protons.
pub fn ion_picking(_: &Databases, reagents: &[Particle]) -> Result<Vec<Particle>, ChemistryError> {
    let (ion, host) = ion_and_other(reagents, "ion picking")?;
    let cannot = || ChemistryError::CannotPredictProducts {
        reagents: formulas(reagents),
        stage: "ion picking",
    };
    let (cation, anion, cation_index, anion_index) = ion_parts(host).ok_or_else(cannot)?;

    let (taken, leftover) = if ion.is_cation() {
        let taken = combine(&Particle::Ion(ion.clone()), &ion_particle(anion))?;
        let leftover = if anion_index > 1 {
            if anion != hydroxide() {
                return Err(cannot());
            }
            IonGroup::new(cation.clone(), cation_index, anion_index - 1)?.into()
        } else {
            ion_particle(cation)
        };
        (taken, leftover)
    } else {
        let taken = combine(&ion_particle(cation), &Particle::Ion(ion.clone()))?;
        let leftover = if cation_index > 1 {
            if cation != proton() {
                return Err(cannot());
            }
            IonGroup::new(anion.clone(), cation_index - 1, anion_index)?.into()
        } else {
            ion_particle(anion)
        };
        (taken, leftover)
    };
    Ok(vec![taken, leftover])
}

/// An acid and a base (molecules or ion groups) neutralise each other.
///
/// Both lose one group per step until either side is a bare ion; every step forms water.
pub fn ionic_exchange(_: &Databases, reagents: &[Particle]) -> Result<Vec<Particle>, ChemistryError> {
    let [first, second] = exact::<2>(reagents, "2")?;
    let (mut acid, mut base) = match (acid_or_base(first)?, acid_or_base(second)?) {
        (GroupKind::Acid, GroupKind::Base) => (first.clone(), second.clone()),
        (GroupKind::Base, GroupKind::Acid) => (second.clone(), first.clone()),
        (kind, _) => {
            return Err(ChemistryError::WrongSimpleClass {
                formula: formulas(reagents),
                class: format!("pair of {kind}s"),
                expected: "an acid and a base",
            });
        }
    };
    while !matches!(acid, Particle::Ion(_)) && !matches!(base, Particle::Ion(_)) {
        acid = remove_group(&acid)?;
        base = remove_group(&base)?;
    }
    Ok(vec![acid, base, water().clone().into()])
}

/// Routes an ion meeting an ion group.
///
/// A proton or hydroxide that the group does not already carry neutralises one of the
/// group's own partners; any other ion attaches to the group.
pub fn ion_group_decision(db: &Databases, reagents: &[Particle]) -> Result<Vec<Particle>, ChemistryError> {
    let (ion, other) = ion_and_other(reagents, "ion and ion group reaction")?;
    let Particle::IonGroup(group) = other else {
        return Err(ChemistryError::UnsupportedParticle {
            formula: other.formula(),
            kind: other.kind_name(),
            reaction: "ion and ion group reaction",
        });
    };
    let neutralising = (ion == proton() || ion == hydroxide()) && ion != group.partner();
    if neutralising {
        ion_picking(db, reagents)
    } else {
        ionic_addition(db, reagents)
    }
}

/// Dissociates every reagent down to ions.
///
/// Ions are listed once, in the order they first appear.
///
/// # Errors
///
/// Simple substances and oxides other than water cannot be dissociated.
pub fn complete_dissociation(reagents: &[Particle]) -> Result<Vec<Ion>, ChemistryError> {
    let mut ions: Vec<Ion> = Vec::new();
    let mut pending: Vec<Particle> = reagents.iter().rev().cloned().collect();
    while let Some(particle) = pending.pop() {
        match particle {
            Particle::Ion(ion) => match ion.group() {
                Some(group) => pending.push(Particle::IonGroup(group.clone())),
                None => {
                    if !ions.contains(&ion) {
                        ions.push(ion);
                    }
                }
            },
            other => {
                let parts = decompose(&other)?;
                pending.extend(parts.into_iter().rev());
            }
        }
    }
    Ok(ions)
}

fn decompose(particle: &Particle) -> Result<Vec<Particle>, ChemistryError> {
    match particle {
        Particle::Molecule(m) if m.is_water() => Ok(vec![
            proton().clone().into(),
            hydroxide().clone().into(),
        ]),
        Particle::Molecule(m) => match m.simple_class() {
            SimpleClass::Acid => Ok(vec![proton().clone().into(), remove_group(particle)?]),
            SimpleClass::Base => Ok(vec![hydroxide().clone().into(), remove_group(particle)?]),
            SimpleClass::Salt => Ok(vec![ion_particle(m.cation()), ion_particle(m.anion())]),
            class => Err(ChemistryError::WrongSimpleClass {
                formula: m.formula(),
                class: class.to_string(),
                expected: "an acid, a base, a salt or water",
            }),
        },
        Particle::IonGroup(g) => Ok(vec![remove_group(particle)?, g.partner().clone().into()]),
        other => Err(ChemistryError::UnsupportedParticle {
            formula: other.formula(),
            kind: other.kind_name(),
            reaction: "ionic decomposition",
        }),
    }
}

/// Combines a positive and a negative particle.
fn combine(first: &Particle, second: &Particle) -> Result<Particle, ChemistryError> {
    let (positive, negative) = match (first.charge().signum(), second.charge().signum()) {
        (1, -1) => (first, second),
        (-1, 1) => (second, first),
        _ => {
            return Err(ChemistryError::CannotPredictProducts {
                reagents: format!("{first} + {second}"),
                stage: "ionic addition needs opposite charges",
            });
        }
    };
    let product = match (positive, negative) {
        (Particle::Ion(cation), Particle::Ion(anion)) => {
            if cation == proton() && anion.charge() < -1 {
                IonGroup::new(anion.clone(), 1, 1)?.into()
            } else if anion == hydroxide() && cation.charge() > 1 {
                IonGroup::new(cation.clone(), 1, 1)?.into()
            } else {
                Molecule::new(cation.clone(), anion.clone())?.into()
            }
        }
        (Particle::IonGroup(_), Particle::Ion(anion)) if anion == hydroxide() => add_group(positive)?,
        (Particle::Ion(cation), Particle::IonGroup(_)) if cation == proton() => add_group(negative)?,
        (Particle::IonGroup(group), Particle::Ion(anion)) => {
            Molecule::new(Ion::from_group(group), anion.clone())?.into()
        }
        (Particle::Ion(cation), Particle::IonGroup(group)) => {
            Molecule::new(cation.clone(), Ion::from_group(group))?.into()
        }
        _ => {
            return Err(ChemistryError::CannotPredictProducts {
                reagents: format!("{first} + {second}"),
                stage: "ionic addition joins an ion with an ion or ion group",
            });
        }
    };
    Ok(product)
}

fn acid_or_base(particle: &Particle) -> Result<GroupKind, ChemistryError> {
    let class = match particle {
        Particle::IonGroup(g) => return Ok(g.kind()),
        Particle::Molecule(m) => m.simple_class(),
        other => {
            return Err(ChemistryError::UnsupportedParticle {
                formula: other.formula(),
                kind: other.kind_name(),
                reaction: "ionic exchange",
            });
        }
    };
    match class {
        SimpleClass::Acid => Ok(GroupKind::Acid),
        SimpleClass::Base => Ok(GroupKind::Base),
        class => Err(ChemistryError::WrongSimpleClass {
            formula: particle.formula(),
            class: class.to_string(),
            expected: "an acid or a base",
        }),
    }
}
