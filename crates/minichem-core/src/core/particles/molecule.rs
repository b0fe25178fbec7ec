use super::composition::Composition;
use super::ion::Ion;
use super::special::{hydroxide, oxide_ion, proton, water};
use super::{ParticleError, SimpleClass, Subclass};
use crate::core::elements::{is_metal, oxygen};
use num_integer::Integer;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A neutral compound of exactly one cation and one anion.
#[derive(Debug, Clone)]
pub struct Molecule {
    cation: Ion,
    anion: Ion,
    cation_index: u32,
    anion_index: u32,
}

impl Molecule {
    /// Combines a cation and an anion using the smallest neutral indices.
    ///
    /// With cation charge `n` and anion charge `-m`, `l = lcm(n, m)` gives the indices
    /// `l / n` and `l / m`. A proton paired with the oxide ion yields the canonical water
    /// molecule (proton and hydroxide).
    ///
    /// # Errors
    ///
    /// Returns [`ParticleError::Charge`] unless the first ion is a cation and the second an anion.
    pub fn new(cation: Ion, anion: Ion) -> Result<Self, ParticleError> {
        if !cation.is_cation() || !anion.is_anion() {
            return Err(ParticleError::Charge {
                formula: format!("{} + {}", cation.formula(), anion.formula()),
                charge: cation.charge() + anion.charge(),
                expected: "a cation followed by an anion",
            });
        }
        if &cation == proton() && &anion == oxide_ion() {
            return Ok(water().clone());
        }
        let cation_charge = cation.charge().unsigned_abs();
        let anion_charge = anion.charge().unsigned_abs();
        let lcm = cation_charge.lcm(&anion_charge);
        Ok(Self::from_parts(
            cation,
            anion,
            lcm / cation_charge,
            lcm / anion_charge,
        ))
    }

    pub(crate) fn from_parts(cation: Ion, anion: Ion, cation_index: u32, anion_index: u32) -> Self {
        Self {
            cation,
            anion,
            cation_index,
            anion_index,
        }
    }

    pub fn acid(anion: Ion) -> Result<Self, ParticleError> {
        Self::new(proton().clone(), anion)
    }

    pub fn base(cation: Ion) -> Result<Self, ParticleError> {
        Self::new(cation, hydroxide().clone())
    }

    pub fn oxide(cation: Ion) -> Result<Self, ParticleError> {
        Self::new(cation, oxide_ion().clone())
    }

    pub fn cation(&self) -> &Ion {
        &self.cation
    }

    pub fn anion(&self) -> &Ion {
        &self.anion
    }

    pub fn cation_index(&self) -> u32 {
        self.cation_index
    }

    pub fn anion_index(&self) -> u32 {
        self.anion_index
    }

    pub fn composition(&self) -> Composition {
        self.cation
            .composition()
            .scaled(self.cation_index)
            .merged(&self.anion.composition().scaled(self.anion_index))
    }

    /// Number of distinct elements.
    pub fn size(&self) -> usize {
        self.composition().len()
    }

    pub fn is_water(&self) -> bool {
        &self.cation == proton() && &self.anion == hydroxide()
    }

    pub fn formula(&self) -> String {
        if self.is_water() {
            return "H2O".to_string();
        }
        format!(
            "{}{}",
            parenthesize(&self.cation, self.cation_index),
            parenthesize(&self.anion, self.anion_index)
        )
    }

    pub fn molar_mass(&self) -> f64 {
        self.composition().molar_mass()
    }

    /// Coarse class. Water counts as an oxide even though it also matches the acid pattern.
    pub fn simple_class(&self) -> SimpleClass {
        if self.is_water() {
            SimpleClass::Oxide
        } else if &self.cation == proton() {
            SimpleClass::Acid
        } else if &self.anion == hydroxide() {
            SimpleClass::Base
        } else if &self.anion == oxide_ion() {
            SimpleClass::Oxide
        } else {
            SimpleClass::Salt
        }
    }

    /// Oxides split by the character of the bound element; other classes map to themselves.
    pub fn simple_subclass(&self) -> Subclass {
        if self.is_water() {
            return Subclass::AmphotericOxide;
        }
        match self.simple_class() {
            SimpleClass::Oxide => {
                let metal = self
                    .cation
                    .composition()
                    .elements()
                    .any(|e| e != oxygen() && is_metal(e));
                match (metal, self.cation.charge()) {
                    (true, c) if c < 4 => Subclass::BasicOxide,
                    (true, 4) | (true, 5) => Subclass::AmphotericOxide,
                    _ => Subclass::AcidicOxide,
                }
            }
            other => Subclass::from(other),
        }
    }
}

/// Renders one side of a compound formula: `(SO4)3`, `Cl2` or `Na`.
pub(crate) fn parenthesize(ion: &Ion, index: u32) -> String {
    let body = ion.body();
    if index > 1 && ion.size() > 1 {
        format!("({}){}", body, index)
    } else if index > 1 {
        format!("{}{}", body, index)
    } else {
        body
    }
}

impl PartialEq for Molecule {
    fn eq(&self, other: &Self) -> bool {
        self.composition() == other.composition()
    }
}

impl Eq for Molecule {}

impl Hash for Molecule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.composition().hash(state);
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formula())
    }
}
