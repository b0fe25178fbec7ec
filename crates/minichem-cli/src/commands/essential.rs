use crate::cli::EssentialArgs;
use crate::error::{CliError, Result};
use minichemistry::engine::context::Chemistry;
use minichemistry::engine::error::ChemistryError;
use minichemistry::reactions::{MolecularReaction, essential_equation};

pub fn run(args: EssentialArgs, chemistry: &Chemistry) -> Result<()> {
    let (full, short) = equations(chemistry, &args.reagents).map_err(|source| CliError::Essential {
        reagents: args.reagents.clone(),
        source,
    })?;
    println!("molecular:   {full}");
    println!("short ionic: {short}");
    Ok(())
}

/// The molecular equation and its short ionic form.
pub fn equations(chemistry: &Chemistry, reagents: &str) -> std::result::Result<(String, String), ChemistryError> {
    let reaction = MolecularReaction::from_string(chemistry, reagents, false)?;
    let short = essential_equation(chemistry, &reaction)?;
    Ok((reaction.equation()?, short.equation()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::CHEMISTRY;

    #[test]
    fn precipitation_keeps_only_the_precipitating_ions() {
        let (full, short) = equations(&CHEMISTRY, "BaCl2 + Na2SO4").unwrap();
        assert_eq!(full, "BaCl2 + Na2SO4 = BaSO4 + 2NaCl");
        assert_eq!(short, "Ba(2) + SO4(-2) = BaSO4");
    }

    #[test]
    fn addition_has_no_short_form() {
        assert!(matches!(
            equations(&CHEMISTRY, "Na + Cl2"),
            Err(ChemistryError::NoEssentialEquation { .. })
        ));
    }
}
