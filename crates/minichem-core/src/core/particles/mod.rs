//! # Particles Module
//!
//! The chemical entity model. Every substance the engine handles is a [`Particle`]: a simple
//! substance, an ion, a molecule of one cation and one anion, or a partially dissociated ion
//! group. Particles are immutable values compared by composition and charge, so two particles
//! with the same elements and charge are indistinguishable.
//!
//! ## Submodules
//!
//! - [`convert`] - Transformations between particle kinds (ion to simple, group add/remove)
//! - [`special`] - Lazily initialised process-wide particles (proton, hydroxide, water)

mod composition;
pub mod convert;
mod elementary;
mod ion;
mod ion_group;
mod molecule;
mod simple;
pub mod special;

pub use composition::Composition;
pub use elementary::{ElementaryParticle, Reactant};
pub use ion::Ion;
pub use ion_group::{GroupKind, IonGroup};
pub use molecule::Molecule;
pub use simple::Simple;

use crate::core::elements::Element;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParticleError {
    #[error("Charge {charge} of '{formula}' is invalid: expected {expected}")]
    Charge {
        formula: String,
        charge: i32,
        expected: &'static str,
    },
    #[error("Multi-element cation '{formula}' is not supported")]
    MultipleElementCation { formula: String },
    #[error("Particle '{formula}' has {size} elements; expected {expected}")]
    UnsupportedSubstanceSize {
        formula: String,
        size: usize,
        expected: usize,
    },
    #[error("Invalid index {index} for '{formula}'")]
    InvalidIndex { formula: String, index: u32 },
    #[error("A particle needs at least one element")]
    EmptyComposition,
    #[error("Element '{element}' has no nonzero oxidation state")]
    NoOxidationState { element: &'static str },
    #[error("Cannot change the group count of '{formula}': {reason}")]
    InvalidGroupOperation {
        formula: String,
        reason: &'static str,
    },
}

/// Coarse chemical class of a simple substance or molecule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimpleClass {
    Metal,
    Nonmetal,
    Acid,
    Base,
    Oxide,
    Salt,
}

impl fmt::Display for SimpleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SimpleClass::Metal => "metal",
            SimpleClass::Nonmetal => "nonmetal",
            SimpleClass::Acid => "acid",
            SimpleClass::Base => "base",
            SimpleClass::Oxide => "oxide",
            SimpleClass::Salt => "salt",
        })
    }
}

/// Refinement of [`SimpleClass`] that splits oxides by acid-base character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subclass {
    Metal,
    Nonmetal,
    Acid,
    Base,
    Salt,
    BasicOxide,
    AmphotericOxide,
    AcidicOxide,
}

impl From<SimpleClass> for Subclass {
    fn from(class: SimpleClass) -> Self {
        match class {
            SimpleClass::Metal => Subclass::Metal,
            SimpleClass::Nonmetal => Subclass::Nonmetal,
            SimpleClass::Acid => Subclass::Acid,
            SimpleClass::Base => Subclass::Base,
            SimpleClass::Salt => Subclass::Salt,
            SimpleClass::Oxide => Subclass::AmphotericOxide,
        }
    }
}

impl fmt::Display for Subclass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Subclass::Metal => "metal",
            Subclass::Nonmetal => "nonmetal",
            Subclass::Acid => "acid",
            Subclass::Base => "base",
            Subclass::Salt => "salt",
            Subclass::BasicOxide => "basic oxide",
            Subclass::AmphotericOxide => "amphoteric oxide",
            Subclass::AcidicOxide => "acidic oxide",
        })
    }
}

/// The shared face of everything that can be balanced in an equation.
pub trait Substance: Clone + PartialEq + fmt::Display {
    fn formula(&self) -> String;
    fn composition(&self) -> Composition;
    fn charge(&self) -> i32;
}

#[derive(Debug, Clone)]
pub enum Particle {
    Simple(Simple),
    Ion(Ion),
    Molecule(Molecule),
    IonGroup(IonGroup),
}

impl Particle {
    pub fn formula(&self) -> String {
        match self {
            Particle::Simple(s) => s.formula(),
            Particle::Ion(i) => i.formula(),
            Particle::Molecule(m) => m.formula(),
            Particle::IonGroup(g) => g.formula(),
        }
    }

    pub fn composition(&self) -> Composition {
        match self {
            Particle::Simple(s) => s.composition(),
            Particle::Ion(i) => i.composition().clone(),
            Particle::Molecule(m) => m.composition(),
            Particle::IonGroup(g) => g.composition(),
        }
    }

    pub fn charge(&self) -> i32 {
        match self {
            Particle::Simple(_) | Particle::Molecule(_) => 0,
            Particle::Ion(i) => i.charge(),
            Particle::IonGroup(g) => g.charge(),
        }
    }

    pub fn molar_mass(&self) -> f64 {
        self.composition().molar_mass()
    }

    pub fn elements(&self) -> Vec<&'static Element> {
        self.composition().elements().collect()
    }

    /// Number of distinct elements.
    pub fn size(&self) -> usize {
        self.composition().len()
    }

    /// Human-readable kind, as used in error messages and the CLI.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Particle::Simple(_) => "simple",
            Particle::Ion(_) => "ion",
            Particle::Molecule(_) => "molecule",
            Particle::IonGroup(_) => "ion group",
        }
    }

    pub fn as_simple(&self) -> Option<&Simple> {
        match self {
            Particle::Simple(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_ion(&self) -> Option<&Ion> {
        match self {
            Particle::Ion(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_molecule(&self) -> Option<&Molecule> {
        match self {
            Particle::Molecule(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_ion_group(&self) -> Option<&IonGroup> {
        match self {
            Particle::IonGroup(g) => Some(g),
            _ => None,
        }
    }

    pub fn is_water(&self) -> bool {
        self.as_molecule().is_some_and(Molecule::is_water)
    }
}

impl Substance for Particle {
    fn formula(&self) -> String {
        Particle::formula(self)
    }

    fn composition(&self) -> Composition {
        Particle::composition(self)
    }

    fn charge(&self) -> i32 {
        Particle::charge(self)
    }
}

impl PartialEq for Particle {
    fn eq(&self, other: &Self) -> bool {
        self.charge() == other.charge() && self.composition() == other.composition()
    }
}

impl Eq for Particle {}

impl Hash for Particle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.composition().hash(state);
        self.charge().hash(state);
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formula())
    }
}

impl From<Simple> for Particle {
    fn from(simple: Simple) -> Self {
        Particle::Simple(simple)
    }
}

impl From<Ion> for Particle {
    fn from(ion: Ion) -> Self {
        Particle::Ion(ion)
    }
}

impl From<Molecule> for Particle {
    fn from(molecule: Molecule) -> Self {
        Particle::Molecule(molecule)
    }
}

impl From<IonGroup> for Particle {
    fn from(group: IonGroup) -> Self {
        Particle::IonGroup(group)
    }
}
