use crate::core::particles::Substance;
use crate::engine::config::EqualizerSettings;
use crate::engine::equalizer::{EquationError, Equalizer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Reagents and products of a reaction, each side sorted by formula.
///
/// Equality and hashing go through [`Reaction::scheme`], so the order in which the
/// substances were given never matters.
#[derive(Debug, Clone)]
pub struct Reaction<S> {
    reagents: Vec<S>,
    products: Vec<S>,
    settings: EqualizerSettings,
}

impl<S: Substance> Reaction<S> {
    pub fn new(mut reagents: Vec<S>, mut products: Vec<S>, settings: EqualizerSettings) -> Self {
        reagents.sort_by_cached_key(|s| s.formula());
        products.sort_by_cached_key(|s| s.formula());
        Self {
            reagents,
            products,
            settings,
        }
    }

    pub fn reagents(&self) -> &[S] {
        &self.reagents
    }

    pub fn products(&self) -> &[S] {
        &self.products
    }

    /// Reagents followed by products.
    pub fn substances(&self) -> impl Iterator<Item = &S> + '_ {
        self.reagents.iter().chain(self.products.iter())
    }

    pub fn settings(&self) -> EqualizerSettings {
        self.settings
    }

    /// `"A + B -> C + D"`.
    pub fn scheme(&self) -> String {
        format!("{} -> {}", join(&self.reagents), join(&self.products))
    }

    pub fn equalizer(&self) -> Equalizer<'_, S> {
        Equalizer::new(&self.reagents, &self.products).with_settings(self.settings)
    }

    /// The substance-to-coefficient mapping as ordered pairs.
    ///
    /// Pairs follow [`Reaction::substances`]: reagents first, then products, each side in
    /// formula order. A substance appears at most once per side, so the pairs work as a map;
    /// see [`Reaction::coefficient_of`] for keyed lookup.
    pub fn coefficients(&self) -> Result<Vec<(&S, u64)>, EquationError> {
        self.equalizer().coefficient_map()
    }

    /// Coefficient of `substance`, or `None` when it takes no part in the reaction.
    pub fn coefficient_of(&self, substance: &S) -> Result<Option<u64>, EquationError> {
        Ok(self
            .coefficients()?
            .into_iter()
            .find(|(s, _)| *s == substance)
            .map(|(_, c)| c))
    }

    /// The balanced equation, e.g. `"2H2O + 2Na = H2 + 2NaOH"`. Unit coefficients are omitted.
    pub fn equation(&self) -> Result<String, EquationError> {
        let coefficients = self.equalizer().coefficients()?;
        let (left, right) = coefficients.split_at(self.reagents.len());
        Ok(format!(
            "{} = {}",
            render(&self.reagents, left),
            render(&self.products, right)
        ))
    }
}

fn join<S: Substance>(side: &[S]) -> String {
    side.iter()
        .map(Substance::formula)
        .collect::<Vec<_>>()
        .join(" + ")
}

fn render<S: Substance>(side: &[S], coefficients: &[u64]) -> String {
    side.iter()
        .zip(coefficients)
        .map(|(s, c)| match *c {
            1 => s.formula(),
            c => format!("{c}{}", s.formula()),
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

impl<S: Substance> PartialEq for Reaction<S> {
    fn eq(&self, other: &Self) -> bool {
        self.scheme() == other.scheme()
    }
}

impl<S: Substance> Eq for Reaction<S> {}

impl<S: Substance> Hash for Reaction<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scheme().hash(state);
    }
}

impl<S: Substance> fmt::Display for Reaction<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.scheme())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::SolubilityTable;
    use crate::core::formula::parse;
    use crate::core::particles::Particle;
    use std::collections::HashSet;

    fn reaction(reagents: &[&str], products: &[&str]) -> Reaction<Particle> {
        let table = SolubilityTable::builtin().unwrap();
        let side = |formulas: &[&str]| -> Vec<Particle> {
            formulas.iter().map(|f| parse(&table, f).unwrap()).collect()
        };
        Reaction::new(side(reagents), side(products), EqualizerSettings::default())
    }

    #[test]
    fn sides_are_sorted_by_formula() {
        let r = reaction(&["Na", "H2O"], &["NaOH", "H2"]);
        assert_eq!(r.scheme(), "H2O + Na -> H2 + NaOH");
        assert_eq!(r.substances().count(), 4);
    }

    #[test]
    fn equation_omits_unit_coefficients() {
        let r = reaction(&["Na", "H2O"], &["NaOH", "H2"]);
        assert_eq!(r.equation().unwrap(), "2H2O + 2Na = H2 + 2NaOH");
    }

    #[test]
    fn coefficients_pair_substances_in_scheme_order() {
        let r = reaction(&["O2", "H2"], &["H2O"]);
        let pairs: Vec<(String, u64)> = r
            .coefficients()
            .unwrap()
            .into_iter()
            .map(|(s, c)| (s.formula(), c))
            .collect();
        assert_eq!(
            pairs,
            [("H2".to_string(), 2), ("O2".to_string(), 1), ("H2O".to_string(), 2)]
        );
    }

    #[test]
    fn coefficient_of_looks_up_a_single_substance() {
        let r = reaction(&["Na", "H2O"], &["NaOH", "H2"]);
        let table = SolubilityTable::builtin().unwrap();
        let water = parse(&table, "H2O").unwrap();
        let hydrogen = parse(&table, "H2").unwrap();
        let oxygen = parse(&table, "O2").unwrap();
        assert_eq!(r.coefficient_of(&water).unwrap(), Some(2));
        assert_eq!(r.coefficient_of(&hydrogen).unwrap(), Some(1));
        assert_eq!(r.coefficient_of(&oxygen).unwrap(), None);
    }

    #[test]
    fn equality_and_hash_follow_the_scheme() {
        let a = reaction(&["Na", "H2O"], &["NaOH", "H2"]);
        let b = reaction(&["H2O", "Na"], &["H2", "NaOH"]);
        assert_eq!(a, b);
        let set: HashSet<Reaction<Particle>> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn unbalanceable_reactions_report_the_scheme() {
        let r = reaction(&["H2"], &["O2"]);
        let error = r.equation().unwrap_err();
        assert!(error.to_string().contains("H2 -> O2"));
    }
}
