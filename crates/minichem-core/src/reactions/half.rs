use super::reaction::Reaction;
use super::split_scheme;
use crate::core::particles::{ElementaryParticle, Reactant, Substance};
use crate::engine::context::Chemistry;
use crate::engine::equalizer::EquationError;
use crate::engine::error::ChemistryError;
use regex::Regex;
use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

static ELEMENTARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([epn])\(([+-]?\d)\)$").expect("elementary particle pattern is valid")
});

/// One side of a reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Reagents,
    Products,
}

/// An oxidation or reduction half, which may carry electrons, protons and neutrons.
///
/// Both sides are always given; there is nothing to predict.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HalfReaction {
    reaction: Reaction<Reactant>,
}

impl HalfReaction {
    pub fn new(
        chemistry: &Chemistry,
        reagents: Vec<Reactant>,
        products: Vec<Reactant>,
    ) -> Result<Self, ChemistryError> {
        if reagents.is_empty() || products.is_empty() {
            return Err(ChemistryError::WrongReactionConstructorParameters {
                reason: "both sides of a half-reaction must be given".to_string(),
            });
        }
        Ok(Self {
            reaction: Reaction::new(reagents, products, chemistry.equalizer_settings()),
        })
    }

    /// Reads `"Cl2 + e(-1) -> Cl(-1)"`. Elementary particles are written `e(-1)`, `p(1)` and `n(0)`.
    pub fn from_string(chemistry: &Chemistry, text: &str) -> Result<Self, ChemistryError> {
        let terms = split_scheme(text)?;
        let products = terms
            .products
            .ok_or_else(|| ChemistryError::WrongReactionConstructorParameters {
                reason: format!("half-reaction '{text}' has no products"),
            })?;
        let side = |terms: &[String]| -> Result<Vec<Reactant>, ChemistryError> {
            terms.iter().map(|t| reactant(chemistry, t)).collect()
        };
        Self::new(chemistry, side(&terms.reagents)?, side(&products)?)
    }

    /// Net charge of one side, each charge weighted by its coefficient.
    pub fn charge_sum(&self, side: Side) -> Result<i64, EquationError> {
        let coefficients = self.reaction.equalizer().coefficients()?;
        let (left, right) = coefficients.split_at(self.reaction.reagents().len());
        let (substances, coefficients) = match side {
            Side::Reagents => (self.reaction.reagents(), left),
            Side::Products => (self.reaction.products(), right),
        };
        Ok(substances
            .iter()
            .zip(coefficients)
            .map(|(s, &c)| i64::from(s.charge()) * c as i64)
            .sum())
    }

    /// The same half with reagents and products swapped.
    pub fn reversed(&self) -> Self {
        Self {
            reaction: Reaction::new(
                self.reaction.products().to_vec(),
                self.reaction.reagents().to_vec(),
                self.reaction.settings(),
            ),
        }
    }

    pub fn into_inner(self) -> Reaction<Reactant> {
        self.reaction
    }
}

fn reactant(chemistry: &Chemistry, term: &str) -> Result<Reactant, ChemistryError> {
    let Some(captures) = ELEMENTARY.captures(term) else {
        return Ok(chemistry.parse(term)?.into());
    };
    let particle = ElementaryParticle::from_symbol(&captures[1]).ok_or(
        ChemistryError::NotSupposedToHappen {
            context: "elementary particle symbol",
        },
    )?;
    let charge: i32 = captures[2]
        .parse()
        .map_err(|_| ChemistryError::WrongReactionConstructorParameters {
            reason: format!("'{term}' has an unreadable charge"),
        })?;
    if charge != particle.charge() {
        return Err(ChemistryError::WrongReactionConstructorParameters {
            reason: format!("'{term}' should be written {}", particle.formula()),
        });
    }
    Ok(particle.into())
}

impl Deref for HalfReaction {
    type Target = Reaction<Reactant>;

    fn deref(&self) -> &Self::Target {
        &self.reaction
    }
}

impl fmt::Display for HalfReaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.reaction, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chemistry() -> Chemistry {
        Chemistry::builtin().unwrap()
    }

    #[test]
    fn chlorine_takes_two_electrons() {
        let half = HalfReaction::from_string(&chemistry(), "Cl2 + e(-1) -> Cl(-1)").unwrap();
        assert_eq!(half.equation().unwrap(), "Cl2 + 2e(-1) = 2Cl(-1)");
        assert_eq!(half.charge_sum(Side::Reagents).unwrap(), -2);
        assert_eq!(half.charge_sum(Side::Products).unwrap(), -2);
    }

    #[test]
    fn iron_reduction_and_its_reverse() {
        let half = HalfReaction::from_string(&chemistry(), "Fe(3) + e(-1) = Fe(2)").unwrap();
        assert_eq!(half.equation().unwrap(), "Fe(3) + e(-1) = Fe(2)");
        assert_eq!(half.charge_sum(Side::Reagents).unwrap(), 2);

        let oxidation = half.reversed();
        assert_eq!(oxidation.scheme(), "Fe(2) -> Fe(3) + e(-1)");
        assert_eq!(oxidation.reversed(), half);
    }

    #[test]
    fn elementary_particles_need_their_own_charge() {
        let chemistry = chemistry();
        assert!(matches!(
            HalfReaction::from_string(&chemistry, "Fe(3) + e(1) -> Fe(2)"),
            Err(ChemistryError::WrongReactionConstructorParameters { .. })
        ));
        assert!(matches!(
            HalfReaction::from_string(&chemistry, "Fe(3) + e(-1)"),
            Err(ChemistryError::WrongReactionConstructorParameters { .. })
        ));
    }

    #[test]
    fn elementary_terms_are_recognised() {
        let chemistry = chemistry();
        assert_eq!(
            reactant(&chemistry, "p(+1)").unwrap(),
            Reactant::Elementary(ElementaryParticle::Proton)
        );
        assert_eq!(
            reactant(&chemistry, "n(0)").unwrap(),
            Reactant::Elementary(ElementaryParticle::Neutron)
        );
        assert!(matches!(reactant(&chemistry, "Na(1)").unwrap(), Reactant::Particle(_)));
    }
}
