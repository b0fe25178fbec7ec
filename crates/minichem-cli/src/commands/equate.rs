use super::has_arrow;
use crate::cli::EquateArgs;
use crate::error::{CliError, Result};
use minichemistry::engine::context::Chemistry;
use minichemistry::engine::error::ChemistryError;
use minichemistry::reactions::{HalfReaction, IonGroupReaction, MolecularReaction, Side};
use tracing::debug;

pub fn run(args: EquateArgs, chemistry: &Chemistry) -> Result<()> {
    if !has_arrow(&args.scheme) {
        return Err(CliError::Argument(format!(
            "'{}' has no products; use 'predict' to find them",
            args.scheme
        )));
    }
    let output = if args.half {
        equate_half(chemistry, &args.scheme)
    } else {
        equate_scheme(chemistry, &args.scheme, args.ionic)
    }
    .map_err(|e| CliError::balancing(&args.scheme, e))?;
    println!("{output}");
    Ok(())
}

/// Balances a scheme that names both sides, with the ionic or the molecular reaction type.
pub fn equate_scheme(chemistry: &Chemistry, scheme: &str, ionic: bool) -> std::result::Result<String, ChemistryError> {
    if ionic {
        Ok(IonGroupReaction::from_string(chemistry, scheme, false)?.equation()?)
    } else {
        Ok(MolecularReaction::from_string(chemistry, scheme, false)?.equation()?)
    }
}

/// The balanced half-reaction followed by the net charge of each side.
pub fn equate_half(chemistry: &Chemistry, scheme: &str) -> std::result::Result<String, ChemistryError> {
    let half = HalfReaction::from_string(chemistry, scheme)?;
    let equation = half.equation()?;
    let (left, right) = (half.charge_sum(Side::Reagents)?, half.charge_sum(Side::Products)?);
    debug!(%equation, left, right, "Balanced half-reaction.");
    Ok(format!("{equation}    (charge {left:+} = {right:+})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::CHEMISTRY;

    fn args(scheme: &str, half: bool) -> EquateArgs {
        EquateArgs {
            scheme: scheme.to_string(),
            half,
            ionic: false,
        }
    }

    #[test]
    fn half_reactions_report_their_charges() {
        assert_eq!(
            equate_half(&CHEMISTRY, "Cl2 + e(-1) -> Cl(-1)").unwrap(),
            "Cl2 + 2e(-1) = 2Cl(-1)    (charge -2 = -2)"
        );
    }

    #[test]
    fn molecular_schemes_are_balanced() {
        assert!(run(args("H2 + O2 -> H2O", false), &CHEMISTRY).is_ok());
    }

    #[test]
    fn schemes_without_products_are_rejected() {
        assert!(matches!(
            run(args("H2 + O2", false), &CHEMISTRY),
            Err(CliError::Argument(_))
        ));
    }

    #[test]
    fn unbalanceable_schemes_fail() {
        assert!(matches!(
            run(args("H2 -> O2", false), &CHEMISTRY),
            Err(CliError::Balancing { source: ChemistryError::Equation(_), .. })
        ));
    }
}
