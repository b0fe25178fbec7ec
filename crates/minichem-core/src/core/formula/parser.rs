use super::FormulaError;
use super::tokens::{composition_of, split_ion_string};
use crate::core::data::{IonQuery, LookupError, SolubilityTable};
use crate::core::elements::get_by_symbol;
use crate::core::particles::convert::from_charge;
use crate::core::particles::special::{hydroxide, proton};
use crate::core::particles::{Composition, Ion, Molecule, Particle, ParticleError, Simple};
use num_rational::Ratio;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Formula(#[from] FormulaError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Particle(#[from] ParticleError),
    #[error("No {search} in the solubility table fits '{formula}'")]
    OutOfOptions {
        formula: String,
        search: &'static str,
    },
}

/// Resolves a formula into the particle it denotes.
///
/// Formulas ending in `)` are ions or ion groups (`SO4(-2)`, `HSO4(-1)`); other formulas
/// with one element are simple substances and the rest are molecules. Compound formulas
/// are matched against the solubility table, so the cation must be written first (`H3N`,
/// not `NH3`). The particle returned always renders back to the input formula.
pub fn parse(table: &SolubilityTable, formula: &str) -> Result<Particle, ParseError> {
    let formula = formula.trim();
    trace!(formula, "Parsing formula");
    if formula.ends_with(')') {
        return parse_ion(table, formula);
    }
    let composition = composition_of(formula)?;
    if composition.len() > 1 {
        parse_molecule(table, formula).map(Particle::Molecule)
    } else {
        parse_simple(formula, &composition).map(Particle::Simple)
    }
}

/// Builds an ion from its body and charge.
///
/// With `database_check` the ion must either appear in the solubility table or be a
/// single-element ion whose charge is one of the element's oxidation states.
pub fn ion_from_string(
    table: &SolubilityTable,
    body: &str,
    charge: i32,
    database_check: bool,
) -> Result<Ion, ParseError> {
    let ion = Ion::new(composition_of(body)?, charge)?;
    if database_check && !table.contains_ion(&ion) {
        let known_state = ion
            .element()
            .is_some_and(|e| e.oxidation_states().contains(&charge));
        if !known_state {
            return Err(LookupError::IonNotFound {
                signature: ion.formula(),
            }
            .into());
        }
    }
    Ok(ion)
}

fn parse_simple(formula: &str, composition: &Composition) -> Result<Simple, ParseError> {
    let (element, index) = composition
        .iter()
        .next()
        .ok_or_else(|| FormulaError::InvalidFormula {
            formula: formula.to_string(),
            reason: "no elements found",
        })?;
    Ok(Simple::new(element, index)?)
}

/// Cations from the table are tried first, then every other positive oxidation state of the
/// element, so lower-state oxides such as `CO` resolve as well.
fn parse_molecule(table: &SolubilityTable, formula: &str) -> Result<Molecule, ParseError> {
    let (symbol, rest) = split_first_element(formula)?;
    let anion = find_anion(table, formula, rest)?;
    let mut candidates = table.select_ion(IonQuery::Cation(symbol));
    if let Ok(element) = get_by_symbol(symbol) {
        for state in element.oxidation_states().into_iter().filter(|s| *s > 0) {
            let ion = Ion::of_element(element, state)?;
            if !candidates.contains(&ion) {
                candidates.push(ion);
            }
        }
    }
    if candidates.is_empty() {
        return Err(ParseError::OutOfOptions {
            formula: formula.to_string(),
            search: "cation",
        });
    }
    for cation in candidates {
        let molecule = Molecule::new(cation, anion.clone())?;
        if molecule.formula() == formula {
            return Ok(molecule);
        }
    }
    Err(FormulaError::InvalidFormula {
        formula: formula.to_string(),
        reason: "no cation and anion pair renders this formula (ions need a trailing charge)",
    }
    .into())
}

fn parse_ion(table: &SolubilityTable, formula: &str) -> Result<Particle, ParseError> {
    let (body, charge) = split_ion_string(formula)?;
    let composition = composition_of(body)?;
    let particle = if composition.len() > 1 {
        match compound_ion(table, body, charge) {
            Err(ParseError::OutOfOptions { .. }) => {
                Particle::Ion(ion_from_string(table, body, charge, true)?)
            }
            other => other?,
        }
    } else {
        Particle::Ion(ion_from_string(table, body, charge, true)?)
    };
    if particle.formula() != formula {
        return Err(FormulaError::InvalidFormula {
            formula: formula.to_string(),
            reason: "the parsed ion renders differently",
        }
        .into());
    }
    Ok(particle)
}

/// Multi-element ions: acid residues with protons left (`HSO4`) and bases with hydroxides
/// left (`Al(OH)2`) become ion groups, anything else must be a known ion.
fn compound_ion(table: &SolubilityTable, body: &str, charge: i32) -> Result<Particle, ParseError> {
    let (symbol, rest) = split_first_element(body)?;
    let cations = find_cations(table, body, symbol)?;
    let anion = find_anion(table, body, rest)?;
    if cations.contains(proton()) {
        Ok(from_charge(&anion, charge)?)
    } else if &anion == hydroxide() {
        let main = cations
            .into_iter()
            .max_by_key(Ion::charge)
            .ok_or_else(|| ParseError::OutOfOptions {
                formula: body.to_string(),
                search: "cation",
            })?;
        Ok(from_charge(&main, charge)?)
    } else {
        Ok(Particle::Ion(ion_from_string(table, body, charge, true)?))
    }
}

/// Splits `Al2(SO4)3` into `("Al", "(SO4)3")`.
fn split_first_element(formula: &str) -> Result<(&str, &str), FormulaError> {
    let symbol_end = formula
        .char_indices()
        .skip(1)
        .find(|(_, c)| !c.is_ascii_lowercase())
        .map_or(formula.len(), |(i, _)| i);
    if !formula.starts_with(|c: char| c.is_ascii_uppercase()) {
        return Err(FormulaError::InvalidFormula {
            formula: formula.to_string(),
            reason: "a compound must start with its cation element",
        });
    }
    let rest = formula[symbol_end..].trim_start_matches(|c: char| c.is_ascii_digit());
    Ok((&formula[..symbol_end], rest))
}

fn find_cations(table: &SolubilityTable, formula: &str, symbol: &str) -> Result<Vec<Ion>, ParseError> {
    let cations = table.select_ion(IonQuery::Cation(symbol));
    if cations.is_empty() {
        return Err(ParseError::OutOfOptions {
            formula: formula.to_string(),
            search: "cation",
        });
    }
    Ok(cations)
}

/// The first anion of the table whose index proportions match `rest`.
fn find_anion(table: &SolubilityTable, formula: &str, rest: &str) -> Result<Ion, ParseError> {
    let out_of_options = || ParseError::OutOfOptions {
        formula: formula.to_string(),
        search: "anion",
    };
    if rest.is_empty() {
        return Err(out_of_options());
    }
    let target = index_ratios(&composition_of(rest)?);
    table
        .anions()
        .into_iter()
        .find(|anion| index_ratios(anion.composition()) == target)
        .cloned()
        .ok_or_else(out_of_options)
}

/// Each element's count divided by the largest count, ordered by atomic number.
fn index_ratios(composition: &Composition) -> Vec<(u8, Ratio<u32>)> {
    let max = composition.iter().map(|(_, n)| n).max().unwrap_or(1);
    let mut ratios: Vec<(u8, Ratio<u32>)> = composition
        .iter()
        .map(|(e, n)| (e.atomic_number(), Ratio::new(n, max)))
        .collect();
    ratios.sort();
    ratios
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::particles::{GroupKind, SimpleClass};

    fn table() -> SolubilityTable {
        SolubilityTable::builtin().unwrap()
    }

    #[test]
    fn parses_simple_substances() {
        let t = table();
        let o2 = parse(&t, "O2").unwrap();
        assert_eq!(o2.as_simple().unwrap().index(), 2);
        let fe = parse(&t, "Fe").unwrap();
        assert_eq!(fe.as_simple().unwrap().simple_class(), SimpleClass::Metal);
    }

    #[test]
    fn parses_molecules_and_resolves_cation_charge() {
        let t = table();
        for formula in ["NaCl", "H2O", "Al2(SO4)3", "Fe2O3", "FeO", "Ca(OH)2", "H3PO4", "SO3", "CO2"] {
            let particle = parse(&t, formula).unwrap();
            assert_eq!(particle.formula(), formula);
        }
        let fe2o3 = parse(&t, "Fe2O3").unwrap();
        assert_eq!(fe2o3.as_molecule().unwrap().cation().charge(), 3);
        assert!(parse(&t, "H2O").unwrap().is_water());
    }

    #[test]
    fn parses_lower_oxidation_state_oxides_missing_from_the_table() {
        let t = table();
        let co = parse(&t, "CO").unwrap();
        let molecule = co.as_molecule().unwrap();
        assert_eq!(molecule.cation().charge(), 2);
        assert_eq!(molecule.formula(), "CO");
        assert_eq!(parse(&t, "Cl2O").unwrap().as_molecule().unwrap().cation().charge(), 1);
        assert_eq!(parse(&t, "CO2").unwrap().as_molecule().unwrap().cation().charge(), 4);
    }

    #[test]
    fn parse_reports_count_overflow_as_a_formula_error() {
        let t = table();
        assert!(matches!(
            parse(&t, "(H65536)65536"),
            Err(ParseError::Formula(FormulaError::InvalidFormula { .. }))
        ));
    }

    #[test]
    fn parses_ions() {
        let t = table();
        let sulfate = parse(&t, "SO4(-2)").unwrap();
        assert_eq!(sulfate.as_ion().unwrap().charge(), -2);
        assert_eq!(parse(&t, "Na(1)").unwrap().formula(), "Na(1)");
        assert_eq!(parse(&t, "OH(-1)").unwrap().formula(), "OH(-1)");
        // not in the table, but a valid oxidation state
        assert_eq!(parse(&t, "Rb(1)").unwrap().formula(), "Rb(1)");
    }

    #[test]
    fn parses_ion_groups() {
        let t = table();
        let hso4 = parse(&t, "HSO4(-1)").unwrap();
        let group = hso4.as_ion_group().unwrap();
        assert_eq!(group.kind(), GroupKind::Acid);
        assert_eq!(group.ion().formula(), "SO4(-2)");

        let aloh2 = parse(&t, "Al(OH)2(1)").unwrap();
        assert_eq!(aloh2.as_ion_group().unwrap().kind(), GroupKind::Base);
        assert_eq!(aloh2.charge(), 1);
    }

    #[test]
    fn rejects_unknown_ions_and_mismatched_formulas() {
        let t = table();
        assert!(matches!(
            parse(&t, "Na(3)"),
            Err(ParseError::Lookup(LookupError::IonNotFound { .. }))
        ));
        assert!(matches!(
            parse(&t, "NaCl2"),
            Err(ParseError::Formula(FormulaError::InvalidFormula { .. }))
        ));
        assert!(matches!(
            parse(&t, "NH3"),
            Err(ParseError::OutOfOptions { .. })
        ));
        assert!(matches!(
            parse(&t, "Xx2"),
            Err(ParseError::Formula(FormulaError::UnknownElement { .. }))
        ));
    }

    #[test]
    fn ion_from_string_checks_database_only_when_asked() {
        let t = table();
        assert!(ion_from_string(&t, "MnO4", -1, true).is_err());
        assert_eq!(
            ion_from_string(&t, "MnO4", -1, false).unwrap().formula(),
            "MnO4(-1)"
        );
    }

    #[test]
    fn parse_round_trips_constructed_molecules() {
        let t = table();
        for record in t.iter() {
            let molecule = record.to_molecule().unwrap();
            let parsed = parse(&t, &molecule.formula()).unwrap();
            assert_eq!(parsed, Particle::Molecule(molecule));
        }
    }
}
