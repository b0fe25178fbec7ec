//! # Elements Module
//!
//! Read-only periodic-table service. All 118 elements are compiled into a static table and
//! indexed by symbol through a perfect-hash map, so lookups never allocate and elements can be
//! shared as `&'static Element` throughout the particle model.

mod element;
mod groups;
mod table;

pub use element::{Element, Group, ParseGroupError};
pub use groups::{
    CHALCOGENS, FIRST_A, HALOGENS, METALS, NOBLE_GASES, NONMETALS, SECOND_A,
    group_oxidation_states, is_metal, is_noble_gas, is_nonmetal,
};
pub use table::ELEMENTS;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ElementError {
    #[error("Element with symbol '{symbol}' not found in the periodic table")]
    NotFound { symbol: String },
}

pub fn get_by_symbol(symbol: &str) -> Result<&'static Element, ElementError> {
    table::SYMBOL_INDEX
        .get(symbol)
        .map(|&index| &ELEMENTS[index])
        .ok_or_else(|| ElementError::NotFound {
            symbol: symbol.to_string(),
        })
}

pub fn get_by_atomic_number(atomic_number: u8) -> Option<&'static Element> {
    ELEMENTS.get(usize::from(atomic_number).checked_sub(1)?)
}

pub(crate) fn hydrogen() -> &'static Element {
    &ELEMENTS[0]
}

pub(crate) fn nitrogen() -> &'static Element {
    &ELEMENTS[6]
}

pub(crate) fn oxygen() -> &'static Element {
    &ELEMENTS[7]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered_by_atomic_number() {
        for (i, element) in ELEMENTS.iter().enumerate() {
            assert_eq!(usize::from(element.atomic_number()), i + 1);
            assert_eq!(get_by_symbol(element.symbol()).unwrap(), element);
        }
    }

    #[test]
    fn get_by_symbol_fails_for_unknown_symbol() {
        assert_eq!(
            get_by_symbol("Xx"),
            Err(ElementError::NotFound {
                symbol: "Xx".to_string()
            })
        );
    }

    #[test]
    fn well_known_elements_have_expected_properties() {
        let na = get_by_symbol("Na").unwrap();
        assert_eq!(na.name(), "Sodium");
        assert_eq!(na.group(), Group::A(1));
        assert_eq!(na.period(), 3);
        assert!(is_metal(na));

        let o = get_by_symbol("O").unwrap();
        assert_eq!(o, oxygen());
        assert!(is_nonmetal(o));
        assert_eq!(o.oxidation_states(), vec![-2, 2, 4, 6]);

        assert_eq!(get_by_symbol("Ar").unwrap().ren(), None);
        assert!(get_by_symbol("U").unwrap().is_radioactive());
    }

    #[test]
    fn metals_keep_only_non_negative_oxidation_states() {
        let al = get_by_symbol("Al").unwrap();
        assert_eq!(al.oxidation_states(), vec![1, 3]);
        let fe = get_by_symbol("Fe").unwrap();
        assert_eq!(fe.oxidation_states(), vec![2, 3, 6]);
    }

    #[test]
    fn metal_and_nonmetal_sets_are_disjoint_and_cover_the_table() {
        for element in ELEMENTS.iter() {
            assert_ne!(is_metal(element), is_nonmetal(element), "{}", element);
        }
        assert_eq!(hydrogen().symbol(), "H");
        assert_eq!(nitrogen().symbol(), "N");
        assert_eq!(get_by_atomic_number(118).unwrap().symbol(), "Og");
        assert!(get_by_atomic_number(0).is_none());
    }
}
