use super::ParticleError;
use super::composition::Composition;
use super::ion_group::IonGroup;
use crate::core::elements::Element;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A charged particle. Cations carry a positive charge, anions a negative one.
#[derive(Debug, Clone)]
pub struct Ion {
    composition: Composition,
    charge: i32,
    group: Option<Box<IonGroup>>, // set when the ion stands for a partially dissociated group
}

impl Ion {
    /// Creates an ion, rejecting zero charges and multi-element cations.
    pub fn new(composition: Composition, charge: i32) -> Result<Self, ParticleError> {
        if composition.is_empty() {
            return Err(ParticleError::EmptyComposition);
        }
        if charge == 0 {
            return Err(ParticleError::Charge {
                formula: composition.to_string(),
                charge,
                expected: "a nonzero charge for an ion",
            });
        }
        if charge > 0 && composition.len() > 1 {
            return Err(ParticleError::MultipleElementCation {
                formula: format!("{}({})", composition, charge),
            });
        }
        Ok(Self::unchecked(composition, charge))
    }

    pub fn of_element(element: &'static Element, charge: i32) -> Result<Self, ParticleError> {
        Self::new(Composition::single(element, 1), charge)
    }

    pub(crate) fn unchecked(composition: Composition, charge: i32) -> Self {
        Self {
            composition,
            charge,
            group: None,
        }
    }

    /// Wraps an ion group as a single charged unit, e.g. `HSO4` inside `NaHSO4`.
    pub(crate) fn from_group(group: &IonGroup) -> Self {
        Self {
            composition: group.composition(),
            charge: group.charge(),
            group: Some(Box::new(group.clone())),
        }
    }

    /// The ion group this ion was built from, as in the `HSO4` of `NaHSO4`.
    pub fn group(&self) -> Option<&IonGroup> {
        self.group.as_deref()
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn charge(&self) -> i32 {
        self.charge
    }

    pub fn is_cation(&self) -> bool {
        self.charge > 0
    }

    pub fn is_anion(&self) -> bool {
        self.charge < 0
    }

    pub fn size(&self) -> usize {
        self.composition.len()
    }

    /// The element of a single-element ion.
    pub fn element(&self) -> Option<&'static Element> {
        if self.composition.len() == 1 {
            self.composition.first_element()
        } else {
            None
        }
    }

    /// Formula without the charge suffix.
    pub fn body(&self) -> String {
        match &self.group {
            Some(group) => group.body(),
            None => self.composition.to_string(),
        }
    }

    pub fn formula(&self) -> String {
        format!("{}({})", self.body(), self.charge)
    }

    pub fn molar_mass(&self) -> f64 {
        self.composition.molar_mass()
    }
}

impl PartialEq for Ion {
    fn eq(&self, other: &Self) -> bool {
        self.charge == other.charge && self.composition == other.composition
    }
}

impl Eq for Ion {}

impl Hash for Ion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.composition.hash(state);
        self.charge.hash(state);
    }
}

impl fmt::Display for Ion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formula())
    }
}
