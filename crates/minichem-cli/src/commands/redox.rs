use crate::cli::RedoxArgs;
use crate::error::{CliError, Result};
use minichemistry::engine::context::Chemistry;
use minichemistry::engine::error::ChemistryError;
use minichemistry::reactions::{HalfReaction, HalfReactionDatabase, overall_redox, reduction_and_oxidation};
use tracing::debug;

pub fn run(args: RedoxArgs, chemistry: &Chemistry) -> Result<()> {
    let database = HalfReactionDatabase::for_chemistry(chemistry).map_err(CliError::Databases)?;
    let lines = describe(chemistry, &database, &args.first, &args.second).map_err(|source| {
        CliError::Redox {
            first: args.first.clone(),
            second: args.second.clone(),
            source,
        }
    })?;
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// The reduction, the oxidation and the overall equation, one per line.
pub fn describe(
    chemistry: &Chemistry,
    database: &HalfReactionDatabase,
    first: &str,
    second: &str,
) -> std::result::Result<Vec<String>, ChemistryError> {
    let first = HalfReaction::from_string(chemistry, first)?;
    let second = HalfReaction::from_string(chemistry, second)?;
    let (reduction, oxidation) = reduction_and_oxidation(database, &first, &second)?;
    let potential = |half: &HalfReaction| database.potential(half).unwrap_or_default();
    let emf = potential(reduction) - potential(oxidation);
    debug!(emf, "Cell potential computed.");
    let mut total = overall_redox(database, &first, &second)?;
    total.standard_form();
    Ok(vec![
        format!("reduction: {} ({:+.2} V)", reduction.equation()?, potential(reduction)),
        format!("oxidation: {} ({:+.2} V)", oxidation.reversed().equation()?, -potential(oxidation)),
        format!("overall:   {total} (E = {emf:.2} V)"),
    ])
}
