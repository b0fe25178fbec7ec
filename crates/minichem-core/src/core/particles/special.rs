//! Process-wide special particles.
//!
//! Ions are initialised before the molecules built from them; each value is created on first
//! access and never observed half-built.

use super::composition::Composition;
use super::ion::Ion;
use super::molecule::Molecule;
use super::simple::Simple;
use crate::core::elements::{hydrogen, nitrogen, oxygen};
use std::sync::LazyLock;

static PROTON: LazyLock<Ion> =
    LazyLock::new(|| Ion::unchecked(Composition::single(hydrogen(), 1), 1));

static HYDROXIDE: LazyLock<Ion> = LazyLock::new(|| {
    Ion::unchecked(Composition::from_pairs([(oxygen(), 1), (hydrogen(), 1)]), -1)
});

static OXIDE_ION: LazyLock<Ion> =
    LazyLock::new(|| Ion::unchecked(Composition::single(oxygen(), 1), -2));

static NITRATE: LazyLock<Ion> = LazyLock::new(|| {
    Ion::unchecked(Composition::from_pairs([(nitrogen(), 1), (oxygen(), 3)]), -1)
});

static NITRITE: LazyLock<Ion> = LazyLock::new(|| {
    Ion::unchecked(Composition::from_pairs([(nitrogen(), 1), (oxygen(), 2)]), -1)
});

static WATER: LazyLock<Molecule> =
    LazyLock::new(|| Molecule::from_parts(proton().clone(), hydroxide().clone(), 1, 1));

static HYDROGEN_GAS: LazyLock<Simple> = LazyLock::new(|| Simple::of(hydrogen()));

static OXYGEN_GAS: LazyLock<Simple> = LazyLock::new(|| Simple::of(oxygen()));

pub fn proton() -> &'static Ion {
    &PROTON
}

pub fn hydroxide() -> &'static Ion {
    &HYDROXIDE
}

pub fn oxide_ion() -> &'static Ion {
    &OXIDE_ION
}

pub fn nitrate() -> &'static Ion {
    &NITRATE
}

pub fn nitrite() -> &'static Ion {
    &NITRITE
}

pub fn water() -> &'static Molecule {
    &WATER
}

pub fn hydrogen_gas() -> &'static Simple {
    &HYDROGEN_GAS
}

pub fn oxygen_gas() -> &'static Simple {
    &OXYGEN_GAS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_particles_have_expected_formulas() {
        assert_eq!(proton().formula(), "H(1)");
        assert_eq!(hydroxide().formula(), "OH(-1)");
        assert_eq!(oxide_ion().formula(), "O(-2)");
        assert_eq!(water().formula(), "H2O");
        assert_eq!(hydrogen_gas().formula(), "H2");
        assert_eq!(oxygen_gas().formula(), "O2");
        assert_eq!(nitrate().formula(), "NO3(-1)");
        assert_eq!(nitrite().formula(), "NO2(-1)");
    }
}
