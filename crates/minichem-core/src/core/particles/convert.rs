//! Conversions between particle kinds.

use super::special::{hydroxide, proton};
use super::{GroupKind, Ion, IonGroup, Molecule, Particle, ParticleError, SimpleClass, Simple};
use crate::core::elements::Element;
use phf::{Set, phf_set};

static GASEOUS_SIMPLES: Set<&'static str> = phf_set! { "H", "N", "O", "F", "Cl" };
static GAS_FORMERS: Set<&'static str> = phf_set! { "C", "N", "S" };
static GAS_PARTNERS: Set<&'static str> = phf_set! { "H", "O" };

/// The simple substance of a single-element ion.
pub fn simple(ion: &Ion) -> Result<Simple, ParticleError> {
    ion.element()
        .map(Simple::of)
        .ok_or_else(|| ParticleError::UnsupportedSubstanceSize {
            formula: ion.formula(),
            size: ion.size(),
            expected: 1,
        })
}

/// An ion of `element` with a charge picked from its oxidation states.
///
/// The choice is a heuristic: the algebraically largest nonzero state, or the smallest when
/// `prefer_largest` is false. Intermediate states are never picked.
pub fn ion_of_element(element: &'static Element, prefer_largest: bool) -> Result<Ion, ParticleError> {
    let states = element.oxidation_states();
    let nonzero = states.iter().copied().filter(|s| *s != 0);
    let charge = if prefer_largest {
        nonzero.max()
    } else {
        nonzero.min()
    }
    .ok_or(ParticleError::NoOxidationState {
        element: element.symbol(),
    })?;
    Ion::of_element(element, charge)
}

/// An ion of the simple substance's element, with an explicit or heuristic charge.
pub fn ion_of_simple(
    simple: &Simple,
    charge: Option<i32>,
    prefer_largest: bool,
) -> Result<Ion, ParticleError> {
    match charge {
        Some(charge) => Ion::of_element(simple.element(), charge),
        None => ion_of_element(simple.element(), prefer_largest),
    }
}

/// Attaches one more proton (acid side) or hydroxide (base side).
pub fn add_group(particle: &Particle) -> Result<Particle, ParticleError> {
    alter_group(particle, 1)
}

/// Detaches one proton (acid side) or hydroxide (base side).
pub fn remove_group(particle: &Particle) -> Result<Particle, ParticleError> {
    alter_group(particle, -1)
}

fn alter_group(particle: &Particle, step: i64) -> Result<Particle, ParticleError> {
    let (ion, kind, cation_index, anion_index) = match particle {
        Particle::Molecule(m) => match m.simple_class() {
            SimpleClass::Acid => (m.anion(), GroupKind::Acid, m.cation_index(), m.anion_index()),
            SimpleClass::Base => (m.cation(), GroupKind::Base, m.cation_index(), m.anion_index()),
            _ => {
                return Err(ParticleError::InvalidGroupOperation {
                    formula: m.formula(),
                    reason: "only acids and bases can gain or lose groups",
                });
            }
        },
        Particle::IonGroup(g) => (g.ion(), g.kind(), g.cation_index(), g.anion_index()),
        Particle::Ion(i) if i.is_cation() => (i, GroupKind::Base, 1, 0),
        Particle::Ion(i) => (i, GroupKind::Acid, 0, 1),
        Particle::Simple(s) => {
            return Err(ParticleError::InvalidGroupOperation {
                formula: s.formula(),
                reason: "simple substances have no groups",
            });
        }
    };

    let (cation_index, anion_index) = match kind {
        GroupKind::Acid => (i64::from(cation_index) + step, i64::from(anion_index)),
        GroupKind::Base => (i64::from(cation_index), i64::from(anion_index) + step),
    };
    if cation_index <= 0 || anion_index <= 0 {
        return Ok(Particle::Ion(ion.clone()));
    }
    let (cation_index, anion_index) = (cation_index as u32, anion_index as u32);

    let (cation, anion) = match kind {
        GroupKind::Acid => (proton(), ion),
        GroupKind::Base => (ion, hydroxide()),
    };
    let charge = cation.charge() * cation_index as i32 + anion.charge() * anion_index as i32;
    if charge != 0 {
        Ok(IonGroup::new(ion.clone(), cation_index, anion_index)?.into())
    } else {
        Ok(Molecule::new(cation.clone(), anion.clone())?.into())
    }
}

/// Partially neutralises `ion` until its charge magnitude equals `charge`.
///
/// `SO4(-2)` with charge `-1` gives `HSO4(-1)`; `Al(3)` with charge `1` gives `Al(OH)2(1)`.
pub fn from_charge(ion: &Ion, charge: i32) -> Result<Particle, ParticleError> {
    if charge == 0
        || charge.signum() != ion.charge().signum()
        || charge.abs() > ion.charge().abs()
    {
        return Err(ParticleError::Charge {
            formula: ion.formula(),
            charge,
            expected: "a partial charge of the same sign and no larger magnitude",
        });
    }
    let mut current = Particle::Ion(ion.clone());
    while current.charge().abs() != charge.abs() {
        current = add_group(&current)?;
    }
    Ok(current)
}

/// Composition-based gas heuristic.
///
/// Diatomic H2, N2, O2, F2 and Cl2 are gases, as is any two-element compound pairing one of
/// C, N, S with H or O. Anything with more than two elements is not.
pub fn is_gas(particle: &Particle) -> bool {
    let composition = particle.composition();
    if composition.len() > 2 || particle.charge() != 0 {
        return false;
    }
    if let Particle::Simple(s) = particle {
        return GASEOUS_SIMPLES.contains(s.element().symbol()) && *s == Simple::of(s.element());
    }
    let symbols: Vec<&str> = composition.elements().map(|e| e.symbol()).collect();
    match symbols.as_slice() {
        [a, b] => {
            (GAS_FORMERS.contains(*a) && GAS_PARTNERS.contains(*b))
                || (GAS_FORMERS.contains(*b) && GAS_PARTNERS.contains(*a))
        }
        _ => false,
    }
}
