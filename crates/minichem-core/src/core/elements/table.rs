use super::element::{Element, Group};
use phf::{Map, phf_map};

#[rustfmt::skip]
pub static ELEMENTS: [Element; 118] = [
    Element::new("H", "Hydrogen", 1, 1, Group::A(1), 1.01, Some(2.10), false),
    Element::new("He", "Helium", 2, 1, Group::A(8), 4.0, None, false),
    Element::new("Li", "Lithium", 3, 2, Group::A(1), 6.9, Some(0.98), false),
    Element::new("Be", "Beryllium", 4, 2, Group::A(2), 9.0, Some(1.75), false),
    Element::new("B", "Boron", 5, 2, Group::A(3), 10.8, Some(2.04), false),
    Element::new("C", "Carbon", 6, 2, Group::A(4), 12.0, Some(2.55), false),
    Element::new("N", "Nitrogen", 7, 2, Group::A(5), 14.0, Some(3.04), false),
    Element::new("O", "Oxygen", 8, 2, Group::A(6), 16.0, Some(3.44), false),
    Element::new("F", "Fluorine", 9, 2, Group::A(7), 19.0, Some(3.98), false),
    Element::new("Ne", "Neon", 10, 2, Group::A(8), 20.2, None, false),
    Element::new("Na", "Sodium", 11, 3, Group::A(1), 23.0, Some(0.93), false),
    Element::new("Mg", "Magnesium", 12, 3, Group::A(2), 24.3, Some(1.31), false),
    Element::new("Al", "Aluminium", 13, 3, Group::A(3), 27.0, Some(1.61), false),
    Element::new("Si", "Silicon", 14, 3, Group::A(4), 28.1, Some(1.90), false),
    Element::new("P", "Phosphorus", 15, 3, Group::A(5), 31.0, Some(2.19), false),
    Element::new("S", "Sulfur", 16, 3, Group::A(6), 32.1, Some(2.58), false),
    Element::new("Cl", "Chlorine", 17, 3, Group::A(7), 35.5, Some(3.16), false),
    Element::new("Ar", "Argon", 18, 3, Group::A(8), 39.9, None, false),
    Element::new("K", "Potassium", 19, 4, Group::A(1), 39.1, Some(0.82), false),
    Element::new("Ca", "Calcium", 20, 4, Group::A(2), 40.1, Some(1.00), false),
    Element::new("Sc", "Scandium", 21, 4, Group::B(3), 45.0, Some(1.36), false),
    Element::new("Ti", "Titanium", 22, 4, Group::B(4), 47.9, Some(1.54), false),
    Element::new("V", "Vanadium", 23, 4, Group::B(5), 50.9, Some(1.63), false),
    Element::new("Cr", "Chromium", 24, 4, Group::B(6), 52.0, Some(1.66), false),
    Element::new("Mn", "Manganese", 25, 4, Group::B(7), 54.9, Some(1.55), false),
    Element::new("Fe", "Iron", 26, 4, Group::B(8), 55.8, Some(1.83), false),
    Element::new("Co", "Cobalt", 27, 4, Group::B(8), 58.9, Some(1.88), false),
    Element::new("Ni", "Nickel", 28, 4, Group::B(8), 58.7, Some(1.91), false),
    Element::new("Cu", "Copper", 29, 4, Group::B(1), 63.5, Some(1.90), false),
    Element::new("Zn", "Zinc", 30, 4, Group::B(2), 65.4, Some(1.65), false),
    Element::new("Ga", "Gallium", 31, 4, Group::A(3), 69.7, Some(1.81), false),
    Element::new("Ge", "Germanium", 32, 4, Group::A(4), 72.6, Some(2.01), false),
    Element::new("As", "Arsenic", 33, 4, Group::A(5), 74.9, Some(2.18), false),
    Element::new("Se", "Selenium", 34, 4, Group::A(6), 79.0, Some(2.55), false),
    Element::new("Br", "Bromine", 35, 4, Group::A(7), 79.9, Some(2.96), false),
    Element::new("Kr", "Krypton", 36, 4, Group::A(8), 83.8, Some(3.00), false),
    Element::new("Rb", "Rubidium", 37, 5, Group::A(1), 85.5, Some(0.82), false),
    Element::new("Sr", "Strontium", 38, 5, Group::A(2), 87.6, Some(0.95), false),
    Element::new("Y", "Yttrium", 39, 5, Group::B(3), 88.9, Some(1.22), false),
    Element::new("Zr", "Zirconium", 40, 5, Group::B(4), 91.2, Some(1.33), false),
    Element::new("Nb", "Niobium", 41, 5, Group::B(5), 92.9, Some(1.60), false),
    Element::new("Mo", "Molybdenum", 42, 5, Group::B(6), 95.9, Some(2.16), false),
    Element::new("Tc", "Technetium", 43, 5, Group::B(7), 98.0, Some(1.90), true),
    Element::new("Ru", "Ruthenium", 44, 5, Group::B(8), 101.1, Some(2.20), false),
    Element::new("Rh", "Rhodium", 45, 5, Group::B(8), 102.9, Some(2.28), false),
    Element::new("Pd", "Palladium", 46, 5, Group::B(8), 106.4, Some(2.20), false),
    Element::new("Ag", "Silver", 47, 5, Group::B(1), 107.9, Some(1.93), false),
    Element::new("Cd", "Cadmium", 48, 5, Group::B(2), 112.4, Some(1.69), false),
    Element::new("In", "Indium", 49, 5, Group::A(3), 114.8, Some(1.78), false),
    Element::new("Sn", "Tin", 50, 5, Group::A(4), 118.7, Some(1.96), false),
    Element::new("Sb", "Antimony", 51, 5, Group::A(5), 121.8, Some(2.05), false),
    Element::new("Te", "Tellurium", 52, 5, Group::A(6), 127.6, Some(2.10), false),
    Element::new("I", "Iodine", 53, 5, Group::A(7), 126.9, Some(2.66), false),
    Element::new("Xe", "Xenon", 54, 5, Group::A(8), 131.3, Some(2.60), false),
    Element::new("Cs", "Caesium", 55, 6, Group::A(1), 132.9, Some(0.79), false),
    Element::new("Ba", "Barium", 56, 6, Group::A(2), 137.3, Some(0.89), false),
    Element::new("La", "Lanthanum", 57, 6, Group::B(3), 138.9, Some(1.10), false),
    Element::new("Ce", "Cerium", 58, 6, Group::B(3), 140.1, Some(1.12), false),
    Element::new("Pr", "Praseodymium", 59, 6, Group::B(3), 140.9, Some(1.13), false),
    Element::new("Nd", "Neodymium", 60, 6, Group::B(3), 144.2, Some(1.14), false),
    Element::new("Pm", "Promethium", 61, 6, Group::B(3), 145.0, Some(1.13), true),
    Element::new("Sm", "Samarium", 62, 6, Group::B(3), 150.4, Some(1.17), false),
    Element::new("Eu", "Europium", 63, 6, Group::B(3), 152.0, Some(1.20), false),
    Element::new("Gd", "Gadolinium", 64, 6, Group::B(3), 157.3, Some(1.20), false),
    Element::new("Tb", "Terbium", 65, 6, Group::B(3), 158.9, Some(1.10), false),
    Element::new("Dy", "Dysprosium", 66, 6, Group::B(3), 162.5, Some(1.22), false),
    Element::new("Ho", "Holmium", 67, 6, Group::B(3), 164.9, Some(1.23), false),
    Element::new("Er", "Erbium", 68, 6, Group::B(3), 167.3, Some(1.24), false),
    Element::new("Tm", "Thulium", 69, 6, Group::B(3), 168.9, Some(1.25), false),
    Element::new("Yb", "Ytterbium", 70, 6, Group::B(3), 173.0, Some(1.10), false),
    Element::new("Lu", "Lutetium", 71, 6, Group::B(3), 175.0, Some(1.27), false),
    Element::new("Hf", "Hafnium", 72, 6, Group::B(4), 178.5, Some(1.30), false),
    Element::new("Ta", "Tantalum", 73, 6, Group::B(5), 180.9, Some(1.50), false),
    Element::new("W", "Tungsten", 74, 6, Group::B(6), 183.8, Some(2.36), false),
    Element::new("Re", "Rhenium", 75, 6, Group::B(7), 186.2, Some(1.90), false),
    Element::new("Os", "Osmium", 76, 6, Group::B(8), 190.2, Some(2.20), false),
    Element::new("Ir", "Iridium", 77, 6, Group::B(8), 192.2, Some(2.20), false),
    Element::new("Pt", "Platinum", 78, 6, Group::B(8), 195.1, Some(2.28), false),
    Element::new("Au", "Gold", 79, 6, Group::B(1), 197.0, Some(2.54), false),
    Element::new("Hg", "Mercury", 80, 6, Group::B(2), 200.6, Some(2.00), false),
    Element::new("Tl", "Thallium", 81, 6, Group::A(3), 204.4, Some(1.62), false),
    Element::new("Pb", "Lead", 82, 6, Group::A(4), 207.2, Some(2.33), false),
    Element::new("Bi", "Bismuth", 83, 6, Group::A(5), 209.0, Some(2.02), false),
    Element::new("Po", "Polonium", 84, 6, Group::A(6), 209.0, Some(2.00), true),
    Element::new("At", "Astatine", 85, 6, Group::A(7), 210.0, Some(2.20), true),
    Element::new("Rn", "Radon", 86, 6, Group::A(8), 222.0, Some(2.20), true),
    Element::new("Fr", "Francium", 87, 7, Group::A(1), 223.0, Some(0.79), true),
    Element::new("Ra", "Radium", 88, 7, Group::A(2), 226.0, Some(0.90), true),
    Element::new("Ac", "Actinium", 89, 7, Group::B(3), 227.0, Some(1.10), true),
    Element::new("Th", "Thorium", 90, 7, Group::B(3), 232.0, Some(1.30), true),
    Element::new("Pa", "Protactinium", 91, 7, Group::B(3), 231.0, Some(1.50), true),
    Element::new("U", "Uranium", 92, 7, Group::B(3), 238.0, Some(1.38), true),
    Element::new("Np", "Neptunium", 93, 7, Group::B(3), 237.0, Some(1.36), true),
    Element::new("Pu", "Plutonium", 94, 7, Group::B(3), 244.0, Some(1.28), true),
    Element::new("Am", "Americium", 95, 7, Group::B(3), 243.0, Some(1.13), true),
    Element::new("Cm", "Curium", 96, 7, Group::B(3), 247.0, Some(1.28), true),
    Element::new("Bk", "Berkelium", 97, 7, Group::B(3), 247.0, Some(1.30), true),
    Element::new("Cf", "Californium", 98, 7, Group::B(3), 251.0, Some(1.30), true),
    Element::new("Es", "Einsteinium", 99, 7, Group::B(3), 252.0, Some(1.30), true),
    Element::new("Fm", "Fermium", 100, 7, Group::B(3), 257.0, Some(1.30), true),
    Element::new("Md", "Mendelevium", 101, 7, Group::B(3), 258.0, Some(1.30), true),
    Element::new("No", "Nobelium", 102, 7, Group::B(3), 259.0, Some(1.30), true),
    Element::new("Lr", "Lawrencium", 103, 7, Group::B(3), 262.0, Some(1.29), true),
    Element::new("Rf", "Rutherfordium", 104, 7, Group::B(4), 265.0, None, true),
    Element::new("Db", "Dubnium", 105, 7, Group::B(5), 268.0, None, true),
    Element::new("Sg", "Seaborgium", 106, 7, Group::B(6), 271.0, None, true),
    Element::new("Bh", "Bohrium", 107, 7, Group::B(7), 267.0, None, true),
    Element::new("Hs", "Hassium", 108, 7, Group::B(8), 269.0, None, true),
    Element::new("Mt", "Meitnerium", 109, 7, Group::B(8), 278.0, None, true),
    Element::new("Ds", "Darmstadtium", 110, 7, Group::B(8), 281.0, None, true),
    Element::new("Rg", "Roentgenium", 111, 7, Group::B(1), 281.0, None, true),
    Element::new("Cn", "Copernicium", 112, 7, Group::B(2), 285.0, None, true),
    Element::new("Nh", "Nihonium", 113, 7, Group::A(3), 284.0, None, true),
    Element::new("Fl", "Flerovium", 114, 7, Group::A(4), 289.0, None, true),
    Element::new("Mc", "Moscovium", 115, 7, Group::A(5), 288.0, None, true),
    Element::new("Lv", "Livermorium", 116, 7, Group::A(6), 293.0, None, true),
    Element::new("Ts", "Tennessine", 117, 7, Group::A(7), 294.0, None, true),
    Element::new("Og", "Oganesson", 118, 7, Group::A(8), 294.0, None, true),
];

#[rustfmt::skip]
pub(crate) static SYMBOL_INDEX: Map<&'static str, usize> = phf_map! {
    "H" => 0, "He" => 1, "Li" => 2, "Be" => 3, "B" => 4, "C" => 5, "N" => 6, "O" => 7, "F" => 8,
    "Ne" => 9, "Na" => 10, "Mg" => 11, "Al" => 12, "Si" => 13, "P" => 14, "S" => 15, "Cl" => 16,
    "Ar" => 17, "K" => 18, "Ca" => 19, "Sc" => 20, "Ti" => 21, "V" => 22, "Cr" => 23, "Mn" => 24,
    "Fe" => 25, "Co" => 26, "Ni" => 27, "Cu" => 28, "Zn" => 29, "Ga" => 30, "Ge" => 31,
    "As" => 32, "Se" => 33, "Br" => 34, "Kr" => 35, "Rb" => 36, "Sr" => 37, "Y" => 38, "Zr" => 39,
    "Nb" => 40, "Mo" => 41, "Tc" => 42, "Ru" => 43, "Rh" => 44, "Pd" => 45, "Ag" => 46,
    "Cd" => 47, "In" => 48, "Sn" => 49, "Sb" => 50, "Te" => 51, "I" => 52, "Xe" => 53, "Cs" => 54,
    "Ba" => 55, "La" => 56, "Ce" => 57, "Pr" => 58, "Nd" => 59, "Pm" => 60, "Sm" => 61,
    "Eu" => 62, "Gd" => 63, "Tb" => 64, "Dy" => 65, "Ho" => 66, "Er" => 67, "Tm" => 68,
    "Yb" => 69, "Lu" => 70, "Hf" => 71, "Ta" => 72, "W" => 73, "Re" => 74, "Os" => 75, "Ir" => 76,
    "Pt" => 77, "Au" => 78, "Hg" => 79, "Tl" => 80, "Pb" => 81, "Bi" => 82, "Po" => 83,
    "At" => 84, "Rn" => 85, "Fr" => 86, "Ra" => 87, "Ac" => 88, "Th" => 89, "Pa" => 90, "U" => 91,
    "Np" => 92, "Pu" => 93, "Am" => 94, "Cm" => 95, "Bk" => 96, "Cf" => 97, "Es" => 98,
    "Fm" => 99, "Md" => 100, "No" => 101, "Lr" => 102, "Rf" => 103, "Db" => 104, "Sg" => 105,
    "Bh" => 106, "Hs" => 107, "Mt" => 108, "Ds" => 109, "Rg" => 110, "Cn" => 111, "Nh" => 112,
    "Fl" => 113, "Mc" => 114, "Lv" => 115, "Ts" => 116, "Og" => 117,
};
