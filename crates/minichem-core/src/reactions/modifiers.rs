use super::ionic::IonGroupReaction;
use super::reaction::Reaction;
use crate::core::particles::Particle;
use crate::engine::context::Chemistry;
use crate::engine::error::ChemistryError;
use crate::engine::mechanisms::ionic::complete_dissociation;
use crate::engine::mechanisms::restrictions::weak_electrolyte;
use tracing::{debug, instrument};

/// The short ionic equation of a reaction in solution.
///
/// The single weak electrolyte among the products is split into its ions, each of which must
/// come from the fully dissociated reagents. The result keeps only those ions and the weak
/// electrolyte, e.g. `NaOH + HCl` gives `H(1) + OH(-1) = H2O`.
#[instrument(skip_all, name = "essential_equation")]
pub fn essential_equation(
    chemistry: &Chemistry,
    reaction: &Reaction<Particle>,
) -> Result<IonGroupReaction, ChemistryError> {
    let failure = |reason| ChemistryError::NoEssentialEquation {
        scheme: reaction.scheme(),
        reason,
    };
    let weak: Vec<&Particle> = reaction
        .products()
        .iter()
        .filter(|p| {
            matches!(p, Particle::Molecule(_))
                && weak_electrolyte(chemistry.databases(), std::slice::from_ref(*p)).is_ok()
        })
        .collect();
    let [product] = weak.as_slice() else {
        return Err(failure("expected exactly one weak electrolyte among the products"));
    };
    let reagent_ions = complete_dissociation(reaction.reagents())
        .map_err(|_| failure("the reagents do not dissociate into ions"))?;
    let product_ions = complete_dissociation(std::slice::from_ref(*product))
        .map_err(|_| failure("the weak electrolyte does not dissociate into ions"))?;
    if !product_ions.iter().all(|ion| reagent_ions.contains(ion)) {
        return Err(failure("the weak electrolyte is built from ions the reagents lack"));
    }
    debug!(weak = %product.formula(), "Built the short ionic equation.");
    IonGroupReaction::new(
        chemistry,
        product_ions.into_iter().map(Particle::Ion).collect(),
        vec![(*product).clone()],
    )
}
