use super::element::{Element, Group};
use phf::{Set, phf_set};

pub static FIRST_A: Set<&'static str> = phf_set! { "H", "Li", "Na", "K", "Rb", "Cs", "Fr" };
pub static SECOND_A: Set<&'static str> = phf_set! { "Be", "Mg", "Ca", "Sr", "Ba", "Ra" };
pub static HALOGENS: Set<&'static str> = phf_set! { "F", "Cl", "Br", "I" };
pub static CHALCOGENS: Set<&'static str> = phf_set! { "O", "S", "Se", "Te" };
pub static NOBLE_GASES: Set<&'static str> = phf_set! { "He", "Ne", "Ar", "Kr", "Xe", "Rn" };

#[rustfmt::skip]
pub static METALS: Set<&'static str> = phf_set! {
    // alkali and alkaline-earth metals
    "Li", "Na", "K", "Rb", "Cs", "Fr", "Be", "Mg", "Ca", "Sr", "Ba", "Ra",
    // transition metals
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
    "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "La", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Ac", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn",
    // post-transition metals
    "Al", "Ga", "In", "Tl", "Sn", "Pb", "Sb", "Bi", "Po", "At",
    "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
    // lanthanides
    "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu",
    // actinides
    "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr",
};

#[rustfmt::skip]
pub static NONMETALS: Set<&'static str> = phf_set! {
    "H", "F", "Cl", "Br", "I", "O", "S", "Se", "Te",
    "He", "Ne", "Ar", "Kr", "Xe", "Rn",
    "B", "N", "P", "As", "C", "Si", "Ge",
};

/// Oxidation states of a group in ascending order.
pub fn group_oxidation_states(group: Group) -> &'static [i32] {
    match group {
        Group::A(1) => &[-1, 1],
        Group::A(2) => &[2],
        Group::A(3) => &[-3, 1, 3],
        Group::A(4) => &[-4, 2, 4],
        Group::A(5) => &[-3, 3, 5],
        Group::A(6) => &[-2, 2, 4, 6],
        Group::A(7) => &[-1, 1, 3, 5, 7],
        Group::A(_) => &[0],
        Group::B(1) => &[1, 2],
        Group::B(2) => &[2],
        Group::B(3) => &[3],
        Group::B(4) => &[2, 4],
        Group::B(5) => &[3, 5],
        Group::B(6) => &[2, 4, 6],
        Group::B(7) => &[2, 3, 4, 6, 7],
        Group::B(_) => &[2, 3, 6],
    }
}

pub fn is_metal(element: &Element) -> bool {
    METALS.contains(element.symbol())
}

pub fn is_nonmetal(element: &Element) -> bool {
    NONMETALS.contains(element.symbol())
}

pub fn is_noble_gas(element: &Element) -> bool {
    NOBLE_GASES.contains(element.symbol())
}
