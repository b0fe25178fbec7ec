use super::reaction::Reaction;
use super::{check_kinds, check_sides, parse_terms, split_scheme};
use crate::core::particles::Particle;
use crate::engine::context::Chemistry;
use crate::engine::error::ChemistryError;
use crate::engine::mechanisms::formulas;
use crate::engine::rpt::Algorithm;
use std::fmt;
use std::ops::Deref;
use tracing::{debug, instrument};

const REACTION_NAME: &str = "molecular reaction";

fn is_molecular(particle: &Particle) -> bool {
    matches!(particle, Particle::Simple(_) | Particle::Molecule(_))
}

/// School classification of a molecular reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionType {
    Addition,
    Decomposition,
    Exchange,
    Substitution,
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReactionType::Addition => "addition",
            ReactionType::Decomposition => "decomposition",
            ReactionType::Exchange => "exchange",
            ReactionType::Substitution => "substitution",
        })
    }
}

/// A reaction between simple substances and molecules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MolecularReaction {
    reaction: Reaction<Particle>,
}

impl MolecularReaction {
    /// Predicts the products of one or two reagents.
    #[instrument(skip_all, name = "molecular_reaction_predict")]
    pub fn predict(
        chemistry: &Chemistry,
        reagents: Vec<Particle>,
        ignore_restrictions: bool,
    ) -> Result<Self, ChemistryError> {
        check_kinds(&reagents, is_molecular, REACTION_NAME)?;
        if !(1..=2).contains(&reagents.len()) {
            return Err(ChemistryError::WrongNumberOfReagents {
                reagents: formulas(&reagents),
                found: reagents.len(),
                expected: "1 or 2",
            });
        }
        let products = chemistry.predict(Algorithm::Molecular, &reagents, ignore_restrictions)?;
        debug!(
            reagents = %formulas(&reagents),
            products = %formulas(&products),
            "Predicted molecular reaction."
        );
        Ok(Self {
            reaction: Reaction::new(reagents, products, chemistry.equalizer_settings()),
        })
    }

    /// A reaction with both sides given; nothing is predicted.
    pub fn new(
        chemistry: &Chemistry,
        reagents: Vec<Particle>,
        products: Vec<Particle>,
    ) -> Result<Self, ChemistryError> {
        check_sides(&reagents, &products)?;
        check_kinds(&reagents, is_molecular, REACTION_NAME)?;
        check_kinds(&products, is_molecular, REACTION_NAME)?;
        Ok(Self {
            reaction: Reaction::new(reagents, products, chemistry.equalizer_settings()),
        })
    }

    /// Reads `"A + B"` (predicting the products) or `"A + B -> C + D"` / `"A + B = C + D"`.
    pub fn from_string(
        chemistry: &Chemistry,
        text: &str,
        ignore_restrictions: bool,
    ) -> Result<Self, ChemistryError> {
        let terms = split_scheme(text)?;
        let reagents = parse_terms(chemistry, &terms.reagents)?;
        match terms.products {
            Some(products) => Self::new(chemistry, reagents, parse_terms(chemistry, &products)?),
            None => Self::predict(chemistry, reagents, ignore_restrictions),
        }
    }

    pub fn reaction_type(&self) -> Result<ReactionType, ChemistryError> {
        let (reagents, products) = (self.reagents(), self.products());
        if reagents.len() > 1 && products.len() == 1 {
            return Ok(ReactionType::Addition);
        }
        if reagents.len() == 1 && products.len() > 1 {
            return Ok(ReactionType::Decomposition);
        }
        match reagents {
            [Particle::Molecule(_), Particle::Molecule(_)] => Ok(ReactionType::Exchange),
            [Particle::Simple(_), Particle::Molecule(_)] | [Particle::Molecule(_), Particle::Simple(_)] => {
                Ok(ReactionType::Substitution)
            }
            _ => Err(ChemistryError::NotSupposedToHappen {
                context: "reaction type of an unrecognised reagent combination",
            }),
        }
    }

    /// Coefficients keyed by formula, in scheme order.
    pub fn string_coefficients(&self) -> Result<Vec<(String, u64)>, ChemistryError> {
        Ok(self
            .coefficients()?
            .into_iter()
            .map(|(p, c)| (p.formula(), c))
            .collect())
    }

    pub fn into_inner(self) -> Reaction<Particle> {
        self.reaction
    }
}

impl Deref for MolecularReaction {
    type Target = Reaction<Particle>;

    fn deref(&self) -> &Self::Target {
        &self.reaction
    }
}

impl fmt::Display for MolecularReaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.reaction, f)
    }
}
