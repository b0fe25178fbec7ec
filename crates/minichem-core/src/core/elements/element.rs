use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use thiserror::Error;

/// Periodic-table group in the A/B (main/transition) notation used by school textbooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    A(u8),
    B(u8),
}

impl Group {
    pub fn number(&self) -> u8 {
        match self {
            Group::A(n) | Group::B(n) => *n,
        }
    }

    pub fn is_main(&self) -> bool {
        matches!(self, Group::A(_))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid group string '{0}'")]
pub struct ParseGroupError(pub String);

impl FromStr for Group {
    type Err = ParseGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed.len().saturating_sub(1);
        let (number, letter) = trimmed.split_at(split);
        let number: u8 = number
            .parse()
            .map_err(|_| ParseGroupError(s.to_string()))?;
        if !(1..=8).contains(&number) {
            return Err(ParseGroupError(s.to_string()));
        }
        match letter.to_ascii_uppercase().as_str() {
            "A" => Ok(Group::A(number)),
            "B" => Ok(Group::B(number)),
            _ => Err(ParseGroupError(s.to_string())),
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::A(n) => write!(f, "{}A", n),
            Group::B(n) => write!(f, "{}B", n),
        }
    }
}

/// A chemical element as listed in the periodic table.
///
/// Elements are immutable `'static` records; every particle refers to them by reference.
/// Two elements are equal when their atomic numbers are equal.
#[derive(Debug, Clone)]
pub struct Element {
    symbol: &'static str,
    name: &'static str,
    atomic_number: u8,
    period: u8,
    group: Group,
    molar_mass: f64,
    ren: Option<f64>, // relative electronegativity (Pauling), absent for noble gases and superheavies
    radioactive: bool,
}

impl Element {
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn new(
        symbol: &'static str,
        name: &'static str,
        atomic_number: u8,
        period: u8,
        group: Group,
        molar_mass: f64,
        ren: Option<f64>,
        radioactive: bool,
    ) -> Self {
        Self {
            symbol,
            name,
            atomic_number,
            period,
            group,
            molar_mass,
            ren,
            radioactive,
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn atomic_number(&self) -> u8 {
        self.atomic_number
    }

    pub fn period(&self) -> u8 {
        self.period
    }

    pub fn group(&self) -> Group {
        self.group
    }

    pub fn molar_mass(&self) -> f64 {
        self.molar_mass
    }

    pub fn ren(&self) -> Option<f64> {
        self.ren
    }

    pub fn is_radioactive(&self) -> bool {
        self.radioactive
    }

    /// Oxidation states derived from the element's group.
    ///
    /// Metals keep only the non-negative states of their group; nonmetals keep all of them.
    pub fn oxidation_states(&self) -> Vec<i32> {
        let states = super::groups::group_oxidation_states(self.group);
        if super::is_metal(self) {
            states.iter().copied().filter(|s| *s >= 0).collect()
        } else {
            states.to_vec()
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.atomic_number == other.atomic_number
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.atomic_number.hash(state);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)
    }
}
