use super::composition::Composition;
use super::{ParticleError, SimpleClass};
use crate::core::elements::{Element, is_metal};
use phf::{Set, phf_set};
use std::fmt;

static DIATOMIC: Set<&'static str> = phf_set! { "H", "N", "O", "F", "Cl", "Br", "I" };

/// A simple substance: one element repeated `index` times, e.g. `O2` or `Fe`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Simple {
    element: &'static Element,
    index: u32,
}

impl Simple {
    pub fn new(element: &'static Element, index: u32) -> Result<Self, ParticleError> {
        if index == 0 {
            return Err(ParticleError::InvalidIndex {
                formula: element.symbol().to_string(),
                index,
            });
        }
        Ok(Self { element, index })
    }

    /// The natural form of an element: diatomic gases get index 2, everything else 1.
    pub fn of(element: &'static Element) -> Self {
        let index = if DIATOMIC.contains(element.symbol()) {
            2
        } else {
            1
        };
        Self { element, index }
    }

    pub fn element(&self) -> &'static Element {
        self.element
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn composition(&self) -> Composition {
        Composition::single(self.element, self.index)
    }

    pub fn formula(&self) -> String {
        self.composition().to_string()
    }

    pub fn simple_class(&self) -> SimpleClass {
        if is_metal(self.element) {
            SimpleClass::Metal
        } else {
            SimpleClass::Nonmetal
        }
    }

    pub fn molar_mass(&self) -> f64 {
        self.element.molar_mass() * f64::from(self.index)
    }
}

impl fmt::Display for Simple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formula())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::elements::get_by_symbol;

    #[test]
    fn of_uses_index_two_for_diatomic_elements() {
        assert_eq!(Simple::of(get_by_symbol("O").unwrap()).formula(), "O2");
        assert_eq!(Simple::of(get_by_symbol("F").unwrap()).formula(), "F2");
        assert_eq!(Simple::of(get_by_symbol("Na").unwrap()).formula(), "Na");
    }

    #[test]
    fn simple_class_follows_metal_set() {
        assert_eq!(
            Simple::of(get_by_symbol("Zn").unwrap()).simple_class(),
            SimpleClass::Metal
        );
        assert_eq!(
            Simple::of(get_by_symbol("S").unwrap()).simple_class(),
            SimpleClass::Nonmetal
        );
    }

    #[test]
    fn new_rejects_zero_index() {
        assert!(Simple::new(get_by_symbol("P").unwrap(), 0).is_err());
        assert_eq!(
            Simple::new(get_by_symbol("P").unwrap(), 4).unwrap().formula(),
            "P4"
        );
    }
}
