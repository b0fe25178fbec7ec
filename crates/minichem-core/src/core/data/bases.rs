use super::LookupError;
use super::solubility::SolubilityTable;
use crate::core::elements::is_metal;
use crate::core::particles::special::{hydroxide, oxide_ion};
use crate::core::particles::{Ion, Molecule, Particle};

/// Metal cations that form bases, derived from the solubility table.
#[derive(Debug, Clone, Default)]
pub struct BasesTable {
    cations: Vec<Ion>,
}

impl BasesTable {
    /// Collects every distinct metal cation of the table, keeping each charge separately.
    pub fn from_solubility(table: &SolubilityTable) -> Self {
        let mut cations: Vec<Ion> = Vec::new();
        for ion in table.select_cations() {
            let metallic = ion.element().is_some_and(is_metal);
            if metallic && !cations.contains(&ion) {
                cations.push(ion);
            }
        }
        Self { cations }
    }

    pub fn len(&self) -> usize {
        self.cations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cations.is_empty()
    }

    pub fn cations(&self) -> &[Ion] {
        &self.cations
    }

    /// The metal cation behind a cation, a base or a basic oxide.
    pub fn cation(&self, particle: &Particle) -> Result<Ion, LookupError> {
        let candidate = match particle {
            Particle::Ion(ion) => Some(ion),
            Particle::Molecule(m) if m.anion() == hydroxide() || m.anion() == oxide_ion() => {
                Some(m.cation())
            }
            _ => None,
        };
        candidate
            .filter(|ion| self.cations.contains(ion))
            .cloned()
            .ok_or_else(|| LookupError::BaseNotFound {
                signature: particle.formula(),
            })
    }

    /// e.g. `CaO` or `Ca(2)` gives `Ca(OH)2`.
    pub fn base(&self, particle: &Particle) -> Result<Molecule, LookupError> {
        let cation = self.cation(particle)?;
        Ok(Molecule::base(cation)?)
    }

    pub fn basic_oxide(&self, particle: &Particle) -> Result<Molecule, LookupError> {
        let cation = self.cation(particle)?;
        Ok(Molecule::oxide(cation)?)
    }
}
