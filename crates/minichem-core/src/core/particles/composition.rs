use crate::core::elements::Element;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Element-to-count mapping of a particle.
///
/// Entries keep the order in which elements were first added, which is the order used when a
/// formula is rendered. Equality and hashing ignore that order.
#[derive(Debug, Clone, Default)]
pub struct Composition {
    entries: Vec<(&'static Element, u32)>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(element: &'static Element, count: u32) -> Self {
        let mut composition = Self::new();
        composition.add(element, count);
        composition
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'static Element, u32)>,
    {
        let mut composition = Self::new();
        for (element, count) in pairs {
            composition.add(element, count);
        }
        composition
    }

    /// Adds `count` atoms of `element`, merging with an existing entry. Zero counts are ignored.
    /// A merged count saturates at `u32::MAX`; use [`Composition::try_add`] to detect that.
    pub fn add(&mut self, element: &'static Element, count: u32) {
        if count == 0 {
            return;
        }
        match self.entries.iter_mut().find(|(e, _)| *e == element) {
            Some((_, existing)) => *existing = existing.saturating_add(count),
            None => self.entries.push((element, count)),
        }
    }

    /// Like [`Composition::add`], but returns `None` and leaves `self` untouched when the merged
    /// count would not fit in a `u32`.
    pub fn try_add(&mut self, element: &'static Element, count: u32) -> Option<()> {
        if count == 0 {
            return Some(());
        }
        match self.entries.iter_mut().find(|(e, _)| *e == element) {
            Some((_, existing)) => *existing = existing.checked_add(count)?,
            None => self.entries.push((element, count)),
        }
        Some(())
    }

    pub fn count(&self, element: &Element) -> u32 {
        self.entries
            .iter()
            .find(|(e, _)| *e == element)
            .map_or(0, |(_, c)| *c)
    }

    pub fn contains(&self, element: &Element) -> bool {
        self.count(element) > 0
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static Element, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn elements(&self) -> impl Iterator<Item = &'static Element> + '_ {
        self.entries.iter().map(|(e, _)| *e)
    }

    pub fn first_element(&self) -> Option<&'static Element> {
        self.entries.first().map(|(e, _)| *e)
    }

    pub fn scaled(&self, factor: u32) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(e, c)| (*e, c.saturating_mul(factor)))
                .filter(|(_, c)| *c > 0)
                .collect(),
        }
    }

    pub fn checked_scaled(&self, factor: u32) -> Option<Self> {
        let entries = self
            .entries
            .iter()
            .map(|(e, c)| c.checked_mul(factor).map(|c| (*e, c)))
            .collect::<Option<Vec<_>>>()?;
        Some(Self {
            entries: entries.into_iter().filter(|(_, c)| *c > 0).collect(),
        })
    }

    pub fn merged(&self, other: &Composition) -> Self {
        let mut result = self.clone();
        for (element, count) in other.iter() {
            result.add(element, count);
        }
        result
    }

    pub fn checked_merged(&self, other: &Composition) -> Option<Self> {
        let mut result = self.clone();
        for (element, count) in other.iter() {
            result.try_add(element, count)?;
        }
        Some(result)
    }

    pub fn molar_mass(&self) -> f64 {
        self.entries
            .iter()
            .map(|(e, c)| e.molar_mass() * f64::from(*c))
            .sum()
    }

    fn sorted(&self) -> Vec<(u8, u32)> {
        let mut keys: Vec<(u8, u32)> = self
            .entries
            .iter()
            .map(|(e, c)| (e.atomic_number(), *c))
            .collect();
        keys.sort_unstable();
        keys
    }
}

impl PartialEq for Composition {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(e, c)| other.count(e) == c)
    }
}

impl Eq for Composition {}

impl Hash for Composition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (element, count) in &self.entries {
            f.write_str(element.symbol())?;
            if *count > 1 {
                write!(f, "{}", count)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::elements::get_by_symbol;
    use std::collections::hash_map::DefaultHasher;

    fn el(symbol: &str) -> &'static Element {
        get_by_symbol(symbol).unwrap()
    }

    fn hash_of(c: &Composition) -> u64 {
        let mut hasher = DefaultHasher::new();
        c.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_and_hash_ignore_insertion_order() {
        let a = Composition::from_pairs([(el("O"), 1), (el("H"), 1)]);
        let b = Composition::from_pairs([(el("H"), 1), (el("O"), 1)]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.to_string(), "OH");
        assert_eq!(b.to_string(), "HO");
    }

    #[test]
    fn add_merges_repeated_elements() {
        let mut c = Composition::single(el("H"), 1);
        c.add(el("O"), 1);
        c.add(el("H"), 1);
        c.add(el("S"), 0);
        assert_eq!(c.count(el("H")), 2);
        assert_eq!(c.len(), 2);
        assert!(!c.contains(el("S")));
        assert_eq!(c.to_string(), "H2O");
    }

    #[test]
    fn scaled_and_merged_compose_counts() {
        let hydroxide = Composition::from_pairs([(el("O"), 1), (el("H"), 1)]);
        let calcium = Composition::single(el("Ca"), 1);
        let base = calcium.merged(&hydroxide.scaled(2));
        assert_eq!(base.to_string(), "CaO2H2");
        assert!((base.molar_mass() - 74.12).abs() < 1e-9);
    }

    #[test]
    fn checked_operations_report_count_overflow() {
        let hydrogen = Composition::single(el("H"), 65536);
        assert!(hydrogen.checked_scaled(65536).is_none());
        assert_eq!(
            hydrogen.checked_scaled(2).unwrap().count(el("H")),
            131072
        );

        let full = Composition::single(el("H"), u32::MAX);
        assert!(full.checked_merged(&Composition::single(el("H"), 1)).is_none());

        let mut c = Composition::single(el("H"), u32::MAX);
        assert!(c.try_add(el("H"), 1).is_none());
        assert_eq!(c.count(el("H")), u32::MAX);
        c.add(el("H"), 1);
        assert_eq!(c.count(el("H")), u32::MAX);
    }
}
