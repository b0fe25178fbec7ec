use super::composition::Composition;
use super::{Particle, Substance};
use std::fmt;

/// Subatomic particles that appear in half-reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementaryParticle {
    Electron,
    Proton,
    Neutron,
}

impl ElementaryParticle {
    pub fn symbol(&self) -> &'static str {
        match self {
            ElementaryParticle::Electron => "e",
            ElementaryParticle::Proton => "p",
            ElementaryParticle::Neutron => "n",
        }
    }

    pub fn charge(&self) -> i32 {
        match self {
            ElementaryParticle::Electron => -1,
            ElementaryParticle::Proton => 1,
            ElementaryParticle::Neutron => 0,
        }
    }

    /// Mass in daltons.
    pub fn mass(&self) -> f64 {
        match self {
            ElementaryParticle::Electron => 0.00055,
            ElementaryParticle::Proton => 1.00728,
            ElementaryParticle::Neutron => 1.00867,
        }
    }

    pub fn formula(&self) -> String {
        format!("{}({})", self.symbol(), self.charge())
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "e" => Some(ElementaryParticle::Electron),
            "p" => Some(ElementaryParticle::Proton),
            "n" => Some(ElementaryParticle::Neutron),
            _ => None,
        }
    }
}

impl fmt::Display for ElementaryParticle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formula())
    }
}

/// Anything that may take part in a half-reaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reactant {
    Particle(Particle),
    Elementary(ElementaryParticle),
}

impl Substance for Reactant {
    fn formula(&self) -> String {
        match self {
            Reactant::Particle(p) => p.formula(),
            Reactant::Elementary(e) => e.formula(),
        }
    }

    fn composition(&self) -> Composition {
        match self {
            Reactant::Particle(p) => p.composition(),
            Reactant::Elementary(_) => Composition::new(),
        }
    }

    fn charge(&self) -> i32 {
        match self {
            Reactant::Particle(p) => p.charge(),
            Reactant::Elementary(e) => e.charge(),
        }
    }
}

impl From<Particle> for Reactant {
    fn from(particle: Particle) -> Self {
        Reactant::Particle(particle)
    }
}

impl From<ElementaryParticle> for Reactant {
    fn from(particle: ElementaryParticle) -> Self {
        Reactant::Elementary(particle)
    }
}

impl fmt::Display for Reactant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Substance::formula(self))
    }
}
