use crate::cli::ParseArgs;
use crate::error::{CliError, Result};
use minichemistry::core::particles::Particle;
use minichemistry::engine::context::Chemistry;

pub fn run(args: ParseArgs, chemistry: &Chemistry) -> Result<()> {
    for formula in &args.formulas {
        let particle = chemistry.parse(formula).map_err(|source| CliError::Formula {
            formula: formula.clone(),
            source,
        })?;
        println!("{}", describe(&particle));
    }
    Ok(())
}

/// One line per particle: formula, kind, class, charge and molar mass.
pub fn describe(particle: &Particle) -> String {
    let class = match particle {
        Particle::Simple(s) => s.simple_class().to_string(),
        Particle::Molecule(m) => {
            let (class, subclass) = (m.simple_class().to_string(), m.simple_subclass().to_string());
            if class == subclass {
                class
            } else {
                format!("{class} ({subclass})")
            }
        }
        Particle::Ion(ion) if ion.is_cation() => "cation".to_string(),
        Particle::Ion(_) => "anion".to_string(),
        Particle::IonGroup(group) => format!("{} group", group.kind()),
    };
    format!(
        "{}: {}, {}, charge {}, molar mass {:.3} g/mol",
        particle.formula(),
        particle.kind_name(),
        class,
        particle.charge(),
        particle.molar_mass()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::CHEMISTRY;

    fn line(formula: &str) -> String {
        describe(&CHEMISTRY.parse(formula).unwrap())
    }

    #[test]
    fn simple_substances_show_their_class() {
        assert_eq!(line("O2"), "O2: simple, nonmetal, charge 0, molar mass 32.000 g/mol");
    }

    #[test]
    fn ions_show_their_sign() {
        assert!(line("SO4(-2)").starts_with("SO4(-2): ion, anion, charge -2"));
        assert!(line("Na(1)").starts_with("Na(1): ion, cation, charge 1"));
    }

    #[test]
    fn molecules_show_class_and_subclass() {
        assert!(line("NaCl").starts_with("NaCl: molecule, salt,"));
        assert!(line("CaO").starts_with("CaO: molecule, oxide (basic oxide),"));
    }

    #[test]
    fn unknown_formulas_fail() {
        let args = ParseArgs {
            formulas: vec!["Xx2".to_string()],
        };
        assert!(matches!(
            run(args, &CHEMISTRY),
            Err(CliError::Formula { ref formula, .. }) if formula == "Xx2"
        ));
    }
}
