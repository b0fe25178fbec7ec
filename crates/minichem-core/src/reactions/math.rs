use super::half::Side;
use super::reaction::Reaction;
use crate::core::particles::Substance;
use crate::engine::config::EqualizerSettings;
use crate::engine::equalizer::EquationError;
use num_rational::Rational64;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// One substance of a [`MathReaction`] with its side and signed coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct Term<S> {
    pub substance: S,
    pub side: Side,
    pub coefficient: Rational64,
}

/// A balanced reaction treated as a linear equation over substances.
///
/// Equations can be scaled, added and subtracted, and one can be substituted into another.
/// Coefficients are exact rationals and may become negative or fractional along the way;
/// [`MathReaction::standard_form`] moves negative terms back to the other side. Terms whose
/// coefficient cancels to zero are dropped after every addition.
#[derive(Debug, Clone, PartialEq)]
pub struct MathReaction<S> {
    terms: Vec<Term<S>>,
}

impl<S: Substance> MathReaction<S> {
    /// The balanced form of `reaction`.
    pub fn from_reaction(reaction: &Reaction<S>) -> Result<Self, EquationError> {
        let coefficients = reaction.equalizer().coefficients()?;
        let reagents = reaction.reagents().len();
        let terms = reaction
            .substances()
            .zip(coefficients)
            .enumerate()
            .map(|(i, (substance, c))| Term {
                substance: substance.clone(),
                side: if i < reagents { Side::Reagents } else { Side::Products },
                coefficient: Rational64::from_integer(c as i64),
            })
            .collect();
        Ok(Self { terms })
    }

    pub fn terms(&self) -> &[Term<S>] {
        &self.terms
    }

    pub fn substances(&self) -> impl Iterator<Item = &S> + '_ {
        self.terms.iter().map(|t| &t.substance)
    }

    pub fn reagents(&self) -> Vec<&S> {
        self.on(Side::Reagents).map(|t| &t.substance).collect()
    }

    pub fn products(&self) -> Vec<&S> {
        self.on(Side::Products).map(|t| &t.substance).collect()
    }

    pub fn contains(&self, substance: &S) -> bool {
        self.position(substance).is_some()
    }

    pub fn term(&self, substance: &S) -> Option<&Term<S>> {
        self.terms.iter().find(|t| &t.substance == substance)
    }

    pub fn coefficient(&self, substance: &S) -> Option<Rational64> {
        self.term(substance).map(|t| t.coefficient)
    }

    pub fn all_positive(&self) -> bool {
        self.terms.iter().all(|t| t.coefficient.is_positive())
    }

    pub fn all_integer(&self) -> bool {
        self.terms.iter().all(|t| t.coefficient.is_integer())
    }

    /// Moves `substance` to the other side, negating its coefficient. Returns whether it was found.
    pub fn flip(&mut self, substance: &S) -> bool {
        match self.position(substance) {
            Some(i) => {
                let term = &mut self.terms[i];
                term.side = opposite(term.side);
                term.coefficient = -term.coefficient;
                true
            }
            None => false,
        }
    }

    /// Negates every coefficient in place.
    pub fn flip_sign(&mut self) {
        self.terms.iter_mut().for_each(|t| t.coefficient = -t.coefficient);
    }

    /// Swaps the two sides, `A = B` becoming `B = A`.
    pub fn reverse(&mut self) {
        self.terms.iter_mut().for_each(|t| t.side = opposite(t.side));
    }

    /// Rearranges so that `substance` stands alone on the reagent side with a positive
    /// coefficient. Returns whether it was found.
    pub fn solve_for(&mut self, substance: &S) -> bool {
        let Some(index) = self.position(substance) else {
            return false;
        };
        if self.terms[index].side == Side::Products {
            self.flip(substance);
        }
        for (i, term) in self.terms.iter_mut().enumerate() {
            if i != index && term.side == Side::Reagents {
                term.side = Side::Products;
                term.coefficient = -term.coefficient;
            }
        }
        if self.terms[index].coefficient.is_negative() {
            self.flip_sign();
        }
        true
    }

    /// Replaces `substance` with its expression from `other`.
    ///
    /// `other` is solved for `substance` and scaled to this equation's coefficient, then its
    /// remaining terms take the place of `substance`. Returns `false`, leaving `self`
    /// untouched, when either equation lacks `substance`.
    pub fn substitute(&mut self, other: &MathReaction<S>, substance: &S) -> bool {
        let Some(index) = self.position(substance) else {
            return false;
        };
        let mut expression = other.clone();
        if !expression.solve_for(substance) {
            return false;
        }
        let scale = match expression.coefficient(substance) {
            Some(own) if !own.is_zero() => self.terms[index].coefficient / own,
            _ => return false,
        };
        let side = self.terms.remove(index).side;
        for term in expression.terms.into_iter().filter(|t| &t.substance != substance) {
            self.merge(Term {
                side,
                coefficient: term.coefficient * scale,
                substance: term.substance,
            });
        }
        self.remove_zero_coefficients();
        true
    }

    /// Moves every negative term to the other side so all coefficients are positive.
    pub fn standard_form(&mut self) {
        for term in &mut self.terms {
            if term.coefficient.is_negative() {
                term.side = opposite(term.side);
                term.coefficient = -term.coefficient;
            }
        }
    }

    pub fn remove_zero_coefficients(&mut self) {
        self.terms.retain(|t| !t.coefficient.is_zero());
    }

    /// One side written out, e.g. `Cl2 + 2Fe(2)`. Unit coefficients are omitted and negative
    /// terms are written with a minus sign.
    pub fn side(&self, side: Side, with_coefficients: bool) -> String {
        let mut out = String::new();
        for term in self.on(side) {
            let negative = term.coefficient.is_negative();
            match (out.is_empty(), negative) {
                (true, true) => out.push('-'),
                (true, false) => {}
                (false, true) => out.push_str(" - "),
                (false, false) => out.push_str(" + "),
            }
            let magnitude = term.coefficient.abs();
            if with_coefficients && !magnitude.is_one() {
                out.push_str(&magnitude.to_string());
            }
            out.push_str(&term.substance.formula());
        }
        out
    }

    /// `"Cl2 + 2Fe(2) = 2Cl(-1) + 2Fe(3)"`.
    pub fn equation(&self) -> String {
        format!("{} = {}", self.side(Side::Reagents, true), self.side(Side::Products, true))
    }

    pub fn scheme(&self) -> String {
        format!("{} -> {}", self.side(Side::Reagents, false), self.side(Side::Products, false))
    }

    /// The substances on each side, after [`MathReaction::standard_form`], as a plain reaction
    /// to be balanced again.
    pub fn to_reaction(&self, settings: EqualizerSettings) -> Reaction<S> {
        let mut normalized = self.clone();
        normalized.standard_form();
        normalized.remove_zero_coefficients();
        let side = |side: Side| -> Vec<S> { normalized.on(side).map(|t| t.substance.clone()).collect() };
        Reaction::new(side(Side::Reagents), side(Side::Products), settings)
    }

    fn on(&self, side: Side) -> impl Iterator<Item = &Term<S>> + '_ {
        self.terms.iter().filter(move |t| t.side == side)
    }

    fn position(&self, substance: &S) -> Option<usize> {
        self.terms.iter().position(|t| &t.substance == substance)
    }

    /// Adds a term, combining it with an existing term of the same substance.
    fn merge(&mut self, term: Term<S>) {
        match self.position(&term.substance) {
            Some(i) => {
                let existing = &mut self.terms[i];
                if existing.side == term.side {
                    existing.coefficient += term.coefficient;
                } else {
                    existing.coefficient -= term.coefficient;
                }
            }
            None => self.terms.push(term),
        }
    }

    fn scaled(mut self, factor: Rational64) -> Self {
        self.terms.iter_mut().for_each(|t| t.coefficient *= factor);
        self
    }
}

fn opposite(side: Side) -> Side {
    match side {
        Side::Reagents => Side::Products,
        Side::Products => Side::Reagents,
    }
}

impl<S: Substance> Add for MathReaction<S> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        for term in other.terms {
            self.merge(term);
        }
        self.remove_zero_coefficients();
        self
    }
}

impl<S: Substance> Sub for MathReaction<S> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl<S: Substance> Neg for MathReaction<S> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.flip_sign();
        self
    }
}

impl<S: Substance> Mul<Rational64> for MathReaction<S> {
    type Output = Self;

    fn mul(self, factor: Rational64) -> Self {
        self.scaled(factor)
    }
}

impl<S: Substance> Mul<i64> for MathReaction<S> {
    type Output = Self;

    fn mul(self, factor: i64) -> Self {
        self.scaled(Rational64::from_integer(factor))
    }
}

/// # Panics
///
/// Panics when `divisor` is zero, like integer division.
impl<S: Substance> Div<Rational64> for MathReaction<S> {
    type Output = Self;

    fn div(self, divisor: Rational64) -> Self {
        self.scaled(divisor.recip())
    }
}

/// # Panics
///
/// Panics when `divisor` is zero, like integer division.
impl<S: Substance> Div<i64> for MathReaction<S> {
    type Output = Self;

    fn div(self, divisor: i64) -> Self {
        self.scaled(Rational64::new(1, divisor))
    }
}

impl<S: Substance> fmt::Display for MathReaction<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.equation())
    }
}
