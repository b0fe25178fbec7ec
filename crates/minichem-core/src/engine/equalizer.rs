//! Stoichiometric balancing with exact rational arithmetic.
//!
//! Every substance is a column and every element a row of the balance matrix (products
//! enter with a negative sign), optionally followed by a net-charge row. The coefficients
//! are a strictly positive integer vector in the nullspace of that matrix.

use super::config::EqualizerSettings;
use crate::core::elements::Element;
use crate::core::particles::Substance;
use num_integer::Integer;
use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Signed, Zero};
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EquationError {
    #[error("Cannot equate '{scheme}': {reason}")]
    CannotEquateReaction {
        scheme: String,
        reason: &'static str,
    },
}

pub struct Equalizer<'a, S> {
    reagents: &'a [S],
    products: &'a [S],
    settings: EqualizerSettings,
}

impl<'a, S: Substance> Equalizer<'a, S> {
    pub fn new(reagents: &'a [S], products: &'a [S]) -> Self {
        Self {
            reagents,
            products,
            settings: EqualizerSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: EqualizerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn substances(&self) -> impl Iterator<Item = &'a S> + '_ {
        self.reagents.iter().chain(self.products.iter())
    }

    /// Distinct elements in order of first appearance.
    pub fn elements(&self) -> Vec<&'static Element> {
        let mut elements: Vec<&'static Element> = Vec::new();
        for substance in self.substances() {
            for element in substance.composition().elements() {
                if !elements.contains(&element) {
                    elements.push(element);
                }
            }
        }
        elements
    }

    /// The balance matrix, one row per element plus the charge row when enabled.
    pub fn matrix(&self) -> Vec<Vec<Rational64>> {
        let sign = |column: usize| if column < self.reagents.len() { 1 } else { -1 };
        let mut matrix: Vec<Vec<Rational64>> = self
            .elements()
            .into_iter()
            .map(|element| {
                self.substances()
                    .enumerate()
                    .map(|(column, s)| {
                        Rational64::from_integer(sign(column) * i64::from(s.composition().count(element)))
                    })
                    .collect()
            })
            .collect();
        if self.settings.charge_balance {
            matrix.push(
                self.substances()
                    .enumerate()
                    .map(|(column, s)| Rational64::from_integer(sign(column) * i64::from(s.charge())))
                    .collect(),
            );
        }
        matrix
    }

    /// Positive integer coefficients, in reagent then product order.
    ///
    /// A one-dimensional nullspace gives the answer directly, reduced to its smallest integers.
    /// Larger nullspaces are searched for the first combination of basis vectors, each weighted
    /// in `1..=lambda_threshold`, that is already strictly positive and all-integer. That
    /// combination is returned unscaled.
    ///
    /// # Errors
    ///
    /// [`EquationError::CannotEquateReaction`] when the nullspace is empty, when its single
    /// vector has mixed signs or zeros, when the bounded search finds nothing, or when the
    /// counts are too large for 64-bit rational arithmetic.
    #[instrument(skip_all, name = "equalizer_solve")]
    pub fn coefficients(&self) -> Result<Vec<u64>, EquationError> {
        let columns = self.reagents.len() + self.products.len();
        let basis = nullspace(self.matrix(), columns).ok_or_else(|| self.overflow())?;
        debug!(dimension = basis.len(), scheme = %self.scheme(), "Computed nullspace.");
        match basis.as_slice() {
            [] => Err(self.failure("the substances cannot be balanced")),
            [vector] => {
                let mut integers = primitive(vector).ok_or_else(|| self.overflow())?;
                if integers.iter().all(|c| *c < 0) {
                    integers.iter_mut().for_each(|c| *c = -*c);
                }
                positive(&integers).ok_or_else(|| self.failure("the only balance has non-positive coefficients"))
            }
            _ => self.search(&basis),
        }
    }

    /// Pairs every substance with its coefficient.
    pub fn coefficient_map(&self) -> Result<Vec<(&'a S, u64)>, EquationError> {
        let coefficients = self.coefficients()?;
        Ok(self.substances().zip(coefficients).collect())
    }

    fn search(&self, basis: &[Vec<Rational64>]) -> Result<Vec<u64>, EquationError> {
        let threshold = i64::from(self.settings.lambda_threshold.max(1));
        let mut weights = vec![1_i64; basis.len()];
        loop {
            let combination = combine(basis, &weights).ok_or_else(|| self.overflow())?;
            if let Some(coefficients) = whole_positive(&combination) {
                debug!(weights = ?weights, "Lambda search succeeded.");
                return Ok(coefficients);
            }
            // odometer over 1..=threshold, last weight fastest
            let Some(position) = weights.iter().rposition(|w| *w < threshold) else {
                return Err(self.failure("no weights within the lambda threshold give positive integer coefficients"));
            };
            weights[position] += 1;
            weights[position + 1..].iter_mut().for_each(|w| *w = 1);
        }
    }

    fn scheme(&self) -> String {
        let side = |substances: &[S]| {
            substances
                .iter()
                .map(Substance::formula)
                .collect::<Vec<_>>()
                .join(" + ")
        };
        format!("{} -> {}", side(self.reagents), side(self.products))
    }

    fn failure(&self, reason: &'static str) -> EquationError {
        EquationError::CannotEquateReaction {
            scheme: self.scheme(),
            reason,
        }
    }

    fn overflow(&self) -> EquationError {
        self.failure("the counts overflow 64-bit rational arithmetic")
    }
}

/// Basis of the right nullspace, built from the reduced row echelon form.
///
/// `None` when an intermediate value does not fit in a [`Rational64`].
fn nullspace(mut matrix: Vec<Vec<Rational64>>, columns: usize) -> Option<Vec<Vec<Rational64>>> {
    let rows = matrix.len();
    let mut pivots: Vec<usize> = Vec::new();
    for column in 0..columns {
        let row = pivots.len();
        if row == rows {
            break;
        }
        let Some(found) = (row..rows).find(|&r| !matrix[r][column].is_zero()) else {
            continue;
        };
        matrix.swap(row, found);
        let pivot = matrix[row][column];
        for value in matrix[row].iter_mut() {
            *value = value.checked_div(&pivot)?;
        }
        for other in 0..rows {
            let factor = matrix[other][column];
            if other == row || factor.is_zero() {
                continue;
            }
            for c in 0..columns {
                let delta = factor.checked_mul(&matrix[row][c])?;
                matrix[other][c] = matrix[other][c].checked_sub(&delta)?;
            }
        }
        pivots.push(column);
    }

    let basis = (0..columns)
        .filter(|column| !pivots.contains(column))
        .map(|free| {
            let mut vector = vec![Rational64::zero(); columns];
            vector[free] = Rational64::one();
            for (row, &pivot) in pivots.iter().enumerate() {
                vector[pivot] = -matrix[row][free];
            }
            vector
        })
        .collect();
    Some(basis)
}

/// Weighted sum of the basis vectors.
fn combine(basis: &[Vec<Rational64>], weights: &[i64]) -> Option<Vec<Rational64>> {
    let mut combination = vec![Rational64::zero(); basis.first().map_or(0, Vec::len)];
    for (weight, vector) in weights.iter().zip(basis) {
        let weight = Rational64::from_integer(*weight);
        for (total, value) in combination.iter_mut().zip(vector) {
            *total = total.checked_add(&value.checked_mul(&weight)?)?;
        }
    }
    Some(combination)
}

/// Scales by the lcm of the denominators and divides out the common factor.
fn primitive(vector: &[Rational64]) -> Option<Vec<i64>> {
    let mut lcm = 1_i64;
    for value in vector {
        let denom = *value.denom();
        lcm = (lcm / lcm.gcd(&denom)).checked_mul(denom)?;
    }
    let scale = Rational64::from_integer(lcm);
    let integers = vector
        .iter()
        .map(|v| v.checked_mul(&scale).map(|v| v.to_integer()))
        .collect::<Option<Vec<i64>>>()?;
    let gcd = integers.iter().fold(0_i64, |acc, v| acc.gcd(v));
    if gcd > 1 {
        Some(integers.into_iter().map(|v| v / gcd).collect())
    } else {
        Some(integers)
    }
}

fn positive(integers: &[i64]) -> Option<Vec<u64>> {
    integers
        .iter()
        .map(|v| if v.is_positive() { u64::try_from(*v).ok() } else { None })
        .collect()
}

/// The combination itself when every entry is a positive integer.
fn whole_positive(combination: &[Rational64]) -> Option<Vec<u64>> {
    if !combination.iter().all(Rational64::is_integer) {
        return None;
    }
    let integers: Vec<i64> = combination.iter().map(Rational64::to_integer).collect();
    positive(&integers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::SolubilityTable;
    use crate::core::formula::parse;
    use crate::core::particles::{ElementaryParticle, Particle, Reactant};

    fn particles(formulas: &[&str]) -> Vec<Particle> {
        let table = SolubilityTable::builtin().unwrap();
        formulas.iter().map(|f| parse(&table, f).unwrap()).collect()
    }

    #[test]
    fn balances_water_synthesis() {
        let reagents = particles(&["H2", "O2"]);
        let products = particles(&["H2O"]);
        let equalizer = Equalizer::new(&reagents, &products);
        assert_eq!(equalizer.coefficients().unwrap(), vec![2, 1, 2]);
    }

    #[test]
    fn balances_sodium_and_water_with_smallest_integers() {
        let reagents = particles(&["Na", "H2O"]);
        let products = particles(&["NaOH", "H2"]);
        let coefficients = Equalizer::new(&reagents, &products).coefficients().unwrap();
        assert_eq!(coefficients, vec![2, 2, 2, 1]);
    }

    #[test]
    fn coefficients_are_stable_across_calls() {
        let reagents = particles(&["NaOH", "H2SO4"]);
        let products = particles(&["Na2SO4", "H2O"]);
        let equalizer = Equalizer::new(&reagents, &products);
        let first = equalizer.coefficients().unwrap();
        assert_eq!(first, vec![2, 1, 1, 2]);
        assert_eq!(first, equalizer.coefficients().unwrap());
    }

    #[test]
    fn searches_multi_dimensional_nullspace() {
        let reagents = particles(&["C", "O2"]);
        let products = particles(&["CO", "CO2"]);
        let equalizer = Equalizer::new(&reagents, &products);
        // weights (1, 1) give [2, 3/2, 1, 1], which is skipped rather than rescaled
        assert_eq!(equalizer.coefficients().unwrap(), vec![3, 2, 2, 1]);
    }

    #[test]
    fn search_fails_once_the_lambda_threshold_is_exhausted() {
        let reagents = particles(&["C", "O2"]);
        let products = particles(&["CO", "CO2"]);
        let settings = EqualizerSettings {
            lambda_threshold: 1,
            charge_balance: true,
        };
        let result = Equalizer::new(&reagents, &products)
            .with_settings(settings)
            .coefficients();
        assert!(matches!(
            result,
            Err(EquationError::CannotEquateReaction { reason, .. }) if reason.contains("lambda threshold")
        ));
    }

    #[test]
    fn whole_positive_rejects_fractions_and_non_positive_entries() {
        let half = Rational64::new(3, 2);
        let one = Rational64::one();
        assert_eq!(whole_positive(&[one, one + one]), Some(vec![1, 2]));
        assert_eq!(whole_positive(&[one, half]), None);
        assert_eq!(whole_positive(&[one, Rational64::zero()]), None);
        assert_eq!(whole_positive(&[one, -one]), None);
    }

    #[test]
    fn nullspace_reports_overflow_instead_of_panicking() {
        let r = Rational64::from_integer;
        let matrix = vec![
            vec![r(1 << 40), r(847_288_609_443), r(1)],
            vec![r(762_939_453_125), r(7), r(1)],
        ];
        assert!(nullspace(matrix, 3).is_none());
        assert!(primitive(&[Rational64::new(1, i64::MAX), Rational64::new(1, i64::MAX - 1)]).is_none());
    }

    #[test]
    fn fails_without_nullspace() {
        let reagents = particles(&["H2"]);
        let products = particles(&["O2"]);
        let result = Equalizer::new(&reagents, &products).coefficients();
        assert!(matches!(
            result,
            Err(EquationError::CannotEquateReaction { .. })
        ));
    }

    #[test]
    fn fails_when_single_solution_has_mixed_signs() {
        let reagents = particles(&["H2", "H2O"]);
        let products = particles(&["O2"]);
        assert!(Equalizer::new(&reagents, &products).coefficients().is_err());
    }

    #[test]
    fn balances_charge_with_elementary_particles() {
        let table = SolubilityTable::builtin().unwrap();
        let ferric = Reactant::Particle(parse(&table, "Fe(3)").unwrap());
        let ferrous = Reactant::Particle(parse(&table, "Fe(2)").unwrap());
        let reagents = vec![ferric, Reactant::Elementary(ElementaryParticle::Electron)];
        let products = vec![ferrous];
        let equalizer = Equalizer::new(&reagents, &products);
        assert_eq!(equalizer.coefficients().unwrap(), vec![1, 1, 1]);
    }

    #[test]
    fn charge_row_is_optional() {
        let reagents = particles(&["H2", "O2"]);
        let products = particles(&["H2O"]);
        let settings = EqualizerSettings {
            lambda_threshold: 4,
            charge_balance: false,
        };
        let equalizer = Equalizer::new(&reagents, &products).with_settings(settings);
        assert_eq!(equalizer.matrix().len(), 2);
        assert_eq!(equalizer.coefficients().unwrap(), vec![2, 1, 2]);
    }
}
