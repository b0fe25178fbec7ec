use super::has_arrow;
use crate::cli::{PredictArgs, PredictionOptions};
use crate::error::{CliError, Result};
use minichemistry::engine::context::Chemistry;
use minichemistry::engine::error::ChemistryError;
use minichemistry::reactions::{IonGroupReaction, MolecularReaction};
use tracing::info;

pub fn run(args: PredictArgs, chemistry: &Chemistry) -> Result<()> {
    if has_arrow(&args.reagents) {
        return Err(CliError::Argument(format!(
            "'{}' already has products; use 'equate' to balance it",
            args.reagents
        )));
    }
    let equation = predict_equation(chemistry, &args.reagents, args.options)
        .map_err(|e| CliError::prediction(&args.reagents, e))?;
    println!("{equation}");
    Ok(())
}

/// Predicts the products of `reagents` and returns the balanced equation.
pub fn predict_equation(
    chemistry: &Chemistry,
    reagents: &str,
    options: PredictionOptions,
) -> std::result::Result<String, ChemistryError> {
    if options.ionic {
        let reaction = IonGroupReaction::from_string(chemistry, reagents, options.ignore_restrictions)?;
        info!(scheme = %reaction.scheme(), "Predicted ionic reaction.");
        return Ok(reaction.equation()?);
    }
    let reaction = MolecularReaction::from_string(chemistry, reagents, options.ignore_restrictions)?;
    match reaction.reaction_type() {
        Ok(kind) => info!(scheme = %reaction.scheme(), %kind, "Predicted molecular reaction."),
        Err(_) => info!(scheme = %reaction.scheme(), "Predicted molecular reaction."),
    }
    Ok(reaction.equation()?)
}
