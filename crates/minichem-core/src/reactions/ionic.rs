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

const REACTION_NAME: &str = "ionic reaction";

fn is_ionic(particle: &Particle) -> bool {
    matches!(
        particle,
        Particle::Ion(_) | Particle::IonGroup(_) | Particle::Molecule(_)
    )
}

/// A reaction in solution between ions, ion groups and molecules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IonGroupReaction {
    reaction: Reaction<Particle>,
}

impl IonGroupReaction {
    #[instrument(skip_all, name = "ionic_reaction_predict")]
    pub fn predict(
        chemistry: &Chemistry,
        reagents: Vec<Particle>,
        ignore_restrictions: bool,
    ) -> Result<Self, ChemistryError> {
        check_kinds(&reagents, is_ionic, REACTION_NAME)?;
        if !(1..=2).contains(&reagents.len()) {
            return Err(ChemistryError::WrongNumberOfReagents {
                reagents: formulas(&reagents),
                found: reagents.len(),
                expected: "1 or 2",
            });
        }
        let products = chemistry.predict(Algorithm::Ionic, &reagents, ignore_restrictions)?;
        debug!(
            reagents = %formulas(&reagents),
            products = %formulas(&products),
            "Predicted ionic reaction."
        );
        Ok(Self {
            reaction: Reaction::new(reagents, products, chemistry.equalizer_settings()),
        })
    }

    pub fn new(
        chemistry: &Chemistry,
        reagents: Vec<Particle>,
        products: Vec<Particle>,
    ) -> Result<Self, ChemistryError> {
        check_sides(&reagents, &products)?;
        check_kinds(&reagents, is_ionic, REACTION_NAME)?;
        check_kinds(&products, is_ionic, REACTION_NAME)?;
        Ok(Self {
            reaction: Reaction::new(reagents, products, chemistry.equalizer_settings()),
        })
    }

    /// Reads `"Ag(1) + NaCl"` or a full scheme such as `"H(1) + OH(-1) -> H2O"`.
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

    pub fn into_inner(self) -> Reaction<Particle> {
        self.reaction
    }
}

impl Deref for IonGroupReaction {
    type Target = Reaction<Particle>;

    fn deref(&self) -> &Self::Target {
        &self.reaction
    }
}

impl fmt::Display for IonGroupReaction {
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
    fn ions_combine_into_a_molecule() {
        let reaction = IonGroupReaction::from_string(&chemistry(), "Na(1) + Cl(-1)", false).unwrap();
        assert_eq!(reaction.equation().unwrap(), "Cl(-1) + Na(1) = NaCl");
    }

    #[test]
    fn an_ion_picks_its_counter_ion_from_a_salt() {
        let reaction = IonGroupReaction::from_string(&chemistry(), "Ag(1) + NaCl", false).unwrap();
        assert_eq!(reaction.scheme(), "Ag(1) + NaCl -> AgCl + Na(1)");
        assert_eq!(reaction.equation().unwrap(), "Ag(1) + NaCl = AgCl + Na(1)");
    }

    #[test]
    fn acids_dissociate_one_step_at_a_time() {
        let reaction = IonGroupReaction::from_string(&chemistry(), "H2SO4", false).unwrap();
        assert_eq!(reaction.equation().unwrap(), "H2SO4 = H(1) + HSO4(-1)");
    }

    #[test]
    fn soluble_products_are_vetoed_unless_ignored() {
        let chemistry = chemistry();
        let err = IonGroupReaction::from_string(&chemistry, "K(1) + NaCl", false).unwrap_err();
        assert!(err.is_restriction());
        assert!(IonGroupReaction::from_string(&chemistry, "K(1) + NaCl", true).is_ok());
    }

    #[test]
    fn charges_balance_in_explicit_schemes() {
        let reaction =
            IonGroupReaction::from_string(&chemistry(), "Al(3) + OH(-1) -> Al(OH)3", false).unwrap();
        assert_eq!(reaction.equation().unwrap(), "Al(3) + 3OH(-1) = Al(OH)3");
    }

    #[test]
    fn simple_substances_are_rejected() {
        assert!(matches!(
            IonGroupReaction::from_string(&chemistry(), "Na + H2O", false),
            Err(ChemistryError::UnsupportedParticle { kind: "simple", .. })
        ));
    }
}
