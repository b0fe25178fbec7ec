use super::ParticleError;
use super::composition::Composition;
use super::ion::Ion;
use super::molecule::parenthesize;
use super::special::{hydroxide, proton};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Which partner an ion group implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// An anion with protons, e.g. `HSO4(-1)`.
    Acid,
    /// A cation with hydroxide groups, e.g. `AlOH(2)`.
    Base,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GroupKind::Acid => "acid",
            GroupKind::Base => "base",
        })
    }
}

/// A partially dissociated acid or base.
///
/// Only one ion is stored; the other is the proton (acid groups) or the hydroxide ion
/// (base groups). The net charge is never zero, otherwise the group would be a molecule.
#[derive(Debug, Clone)]
pub struct IonGroup {
    kind: GroupKind,
    ion: Ion,
    cation_index: u32,
    anion_index: u32,
}

impl IonGroup {
    pub fn new(ion: Ion, cation_index: u32, anion_index: u32) -> Result<Self, ParticleError> {
        let kind = if ion.is_cation() {
            GroupKind::Base
        } else {
            GroupKind::Acid
        };
        let group = Self {
            kind,
            ion,
            cation_index,
            anion_index,
        };
        if cation_index == 0 || anion_index == 0 {
            return Err(ParticleError::InvalidIndex {
                formula: group.ion.formula(),
                index: 0,
            });
        }
        if group.charge() == 0 {
            return Err(ParticleError::Charge {
                formula: group.body(),
                charge: 0,
                expected: "a nonzero charge for an ion group",
            });
        }
        Ok(group)
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    /// The ion that is fully present in the group.
    pub fn ion(&self) -> &Ion {
        &self.ion
    }

    /// Number of implied partner ions (protons or hydroxides).
    pub fn index(&self) -> u32 {
        match self.kind {
            GroupKind::Acid => self.cation_index,
            GroupKind::Base => self.anion_index,
        }
    }

    pub fn cation(&self) -> &Ion {
        match self.kind {
            GroupKind::Acid => proton(),
            GroupKind::Base => &self.ion,
        }
    }

    pub fn anion(&self) -> &Ion {
        match self.kind {
            GroupKind::Acid => &self.ion,
            GroupKind::Base => hydroxide(),
        }
    }

    /// The implied ion: proton for acid groups, hydroxide for base groups.
    pub fn partner(&self) -> &Ion {
        match self.kind {
            GroupKind::Acid => proton(),
            GroupKind::Base => hydroxide(),
        }
    }

    pub fn cation_index(&self) -> u32 {
        self.cation_index
    }

    pub fn anion_index(&self) -> u32 {
        self.anion_index
    }

    pub fn charge(&self) -> i32 {
        self.cation().charge() * self.cation_index as i32
            + self.anion().charge() * self.anion_index as i32
    }

    pub fn composition(&self) -> Composition {
        self.cation()
            .composition()
            .scaled(self.cation_index)
            .merged(&self.anion().composition().scaled(self.anion_index))
    }

    pub fn body(&self) -> String {
        format!(
            "{}{}",
            parenthesize(self.cation(), self.cation_index),
            parenthesize(self.anion(), self.anion_index)
        )
    }

    pub fn formula(&self) -> String {
        format!("{}({})", self.body(), self.charge())
    }

    pub fn molar_mass(&self) -> f64 {
        self.composition().molar_mass()
    }
}

impl PartialEq for IonGroup {
    fn eq(&self, other: &Self) -> bool {
        self.charge() == other.charge() && self.composition() == other.composition()
    }
}

impl Eq for IonGroup {}

impl Hash for IonGroup {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.composition().hash(state);
        self.charge().hash(state);
    }
}

impl fmt::Display for IonGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formula())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::elements::get_by_symbol;

    fn sulfate() -> Ion {
        let composition = Composition::from_pairs([
            (get_by_symbol("S").unwrap(), 1),
            (get_by_symbol("O").unwrap(), 4),
        ]);
        Ion::new(composition, -2).unwrap()
    }

    #[test]
    fn anion_builds_acid_group() {
        let group = IonGroup::new(sulfate(), 1, 1).unwrap();
        assert_eq!(group.kind(), GroupKind::Acid);
        assert_eq!(group.charge(), -1);
        assert_eq!(group.formula(), "HSO4(-1)");
        assert_eq!(group.cation(), proton());
        assert_eq!(group.index(), 1);
    }

    #[test]
    fn cation_builds_base_group_with_indexed_composition() {
        let aluminium = Ion::of_element(get_by_symbol("Al").unwrap(), 3).unwrap();
        let group = IonGroup::new(aluminium, 1, 2).unwrap();
        assert_eq!(group.kind(), GroupKind::Base);
        assert_eq!(group.formula(), "Al(OH)2(1)");
        assert_eq!(group.composition().count(get_by_symbol("H").unwrap()), 2);
        assert_eq!(group.partner(), hydroxide());
    }

    #[test]
    fn new_rejects_neutral_group() {
        let result = IonGroup::new(sulfate(), 2, 1);
        assert!(matches!(result, Err(ParticleError::Charge { .. })));
    }
}
