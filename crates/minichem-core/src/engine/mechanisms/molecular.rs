//! Mechanisms of the molecular algorithm.
//!
//! Reagents are simple substances and neutral molecules. Each function receives the reagents
//! selected by the molecular reaction table and returns unbalanced products.

use super::{exact, formulas, molecule, simple, simple_and_molecule};
use crate::core::data::{Activity, IonQuery};
use crate::core::elements::nitrogen;
use crate::core::particles::convert::{self, ion_of_simple};
use crate::core::particles::special::{
    hydrogen_gas, nitrate, nitrite, oxide_ion, oxygen_gas, water,
};
use crate::core::particles::{Ion, Molecule, Particle, Simple, SimpleClass, Subclass};
use crate::engine::context::Databases;
use crate::engine::error::ChemistryError;
use std::cmp::Reverse;

/// Two simple substances combine into a binary compound.
///
/// The element with the lower electronegativity supplies the cation. Cations are tried from
/// the highest charge down and anions from the most negative up; the first pair the solubility
/// table knows wins.
pub fn simple_addition(db: &Databases, reagents: &[Particle]) -> Result<Vec<Particle>, ChemistryError> {
    let [first, second] = exact::<2>(reagents, "2")?;
    let (a, b) = (simple(first, "simple addition")?, simple(second, "simple addition")?);
    let (donor, acceptor) = donor_and_acceptor(a, b);

    let mut cations: Vec<Ion> = db
        .solubility()
        .select_ion(IonQuery::Any(donor.element().symbol()))
        .into_iter()
        .filter(Ion::is_cation)
        .collect();
    cations.sort_by_key(|ion| Reverse(ion.charge()));
    let mut anions: Vec<Ion> = db
        .solubility()
        .select_ion(IonQuery::Any(acceptor.element().symbol()))
        .into_iter()
        .filter(Ion::is_anion)
        .collect();
    anions.sort_by_key(Ion::charge);

    cations
        .iter()
        .flat_map(|cation| anions.iter().map(move |anion| (cation, anion)))
        .find_map(|(cation, anion)| Molecule::new(cation.clone(), anion.clone()).ok())
        .map(|product| vec![product.into()])
        .ok_or_else(|| ChemistryError::CannotPredictProducts {
            reagents: formulas(reagents),
            stage: "no known ions pair the two elements",
        })
}

/// The first substance donates only when strictly less electronegative; ties go to the second.
fn donor_and_acceptor<'a>(a: &'a Simple, b: &'a Simple) -> (&'a Simple, &'a Simple) {
    if a.element().ren() < b.element().ren() {
        (a, b)
    } else {
        (b, a)
    }
}

/// A binary compound falls apart into its simple substances.
pub fn simple_decomposition(_: &Databases, reagents: &[Particle]) -> Result<Vec<Particle>, ChemistryError> {
    let [reagent] = exact::<1>(reagents, "1")?;
    let m = molecule(reagent, "simple decomposition")?;
    if m.is_water() {
        return Ok(vec![hydrogen_gas().clone().into(), oxygen_gas().clone().into()]);
    }
    Ok(vec![
        convert::simple(m.cation())?.into(),
        convert::simple(m.anion())?.into(),
    ])
}

/// A simple substance takes the place of the cation in a molecule. Metals and water give
/// hydrogen and the hydroxide.
pub fn simple_substitution(_: &Databases, reagents: &[Particle]) -> Result<Vec<Particle>, ChemistryError> {
    let (s, m) = simple_and_molecule(reagents, "simple substitution")?;
    let displaced = convert::simple(m.cation())?;
    let product = Molecule::new(ion_of_simple(s, None, true)?, m.anion().clone())?;
    Ok(vec![displaced.into(), product.into()])
}

/// Two molecules swap their anions.
pub fn simple_exchange(_: &Databases, reagents: &[Particle]) -> Result<Vec<Particle>, ChemistryError> {
    let [first, second] = exact::<2>(reagents, "2")?;
    let (m1, m2) = (
        molecule(first, "simple exchange")?,
        molecule(second, "simple exchange")?,
    );
    Ok(vec![
        Molecule::new(m1.cation().clone(), m2.anion().clone())?.into(),
        Molecule::new(m2.cation().clone(), m1.anion().clone())?.into(),
    ])
}

/// Ternary acids and bases lose water; salts split into their oxides.
pub fn complex_decomposition(db: &Databases, reagents: &[Particle]) -> Result<Vec<Particle>, ChemistryError> {
    let [reagent] = exact::<1>(reagents, "1")?;
    let m = molecule(reagent, "complex decomposition")?;
    let products = match m.simple_class() {
        SimpleClass::Acid => vec![db.acids().acidic_oxide(reagent)?, water().clone()],
        SimpleClass::Base => vec![db.bases().basic_oxide(reagent)?, water().clone()],
        SimpleClass::Salt => vec![
            db.bases().basic_oxide(&Particle::Ion(m.cation().clone()))?,
            db.acids().acidic_oxide(&Particle::Ion(m.anion().clone()))?,
        ],
        class => {
            return Err(ChemistryError::WrongSimpleClass {
                formula: m.formula(),
                class: class.to_string(),
                expected: "an acid, a base or a salt",
            });
        }
    };
    Ok(products.into_iter().map(Particle::from).collect())
}

/// Oxides combine with water into acids or bases, or with each other into a salt.
pub fn complex_addition(db: &Databases, reagents: &[Particle]) -> Result<Vec<Particle>, ChemistryError> {
    let [first, second] = exact::<2>(reagents, "2")?;
    let (m1, m2) = (
        molecule(first, "complex addition")?,
        molecule(second, "complex addition")?,
    );
    match (m1.is_water(), m2.is_water()) {
        (true, true) => Err(ChemistryError::WrongSimpleClass {
            formula: m2.formula(),
            class: "water".to_string(),
            expected: "an oxide other than water",
        }),
        (true, false) => Ok(vec![oxide_to_molecule(db, m2)?.into()]),
        (false, true) => Ok(vec![oxide_to_molecule(db, m1)?.into()]),
        (false, false) => {
            let (acidic, basic) = match (m1.simple_subclass(), m2.simple_subclass()) {
                (Subclass::AcidicOxide, Subclass::BasicOxide) => (m1, m2),
                (Subclass::BasicOxide, Subclass::AcidicOxide) => (m2, m1),
                (_, subclass) => {
                    return Err(ChemistryError::WrongSimpleSubclass {
                        formula: format!("{} + {}", m1.formula(), m2.formula()),
                        subclass: subclass.to_string(),
                        expected: "an acidic and a basic oxide",
                    });
                }
            };
            let acid = oxide_to_molecule(db, acidic)?;
            let base = oxide_to_molecule(db, basic)?;
            let mut salts = simple_exchange(db, &[acid.into(), base.into()])?;
            salts.retain(|p| !p.is_water());
            match <[Particle; 1]>::try_from(salts) {
                Ok([salt]) => Ok(vec![salt]),
                Err(_) => Err(ChemistryError::NotSupposedToHappen {
                    context: "oxide addition must leave exactly one salt",
                }),
            }
        }
    }
}

/// Acids react with basic oxides and acidic oxides with bases, as their hydrated forms.
pub fn complex_neutralization(db: &Databases, reagents: &[Particle]) -> Result<Vec<Particle>, ChemistryError> {
    let [first, second] = exact::<2>(reagents, "2")?;
    let (m1, m2) = (
        molecule(first, "complex neutralization")?,
        molecule(second, "complex neutralization")?,
    );
    let (acid, base) = match (m1.simple_subclass(), m2.simple_subclass()) {
        (Subclass::Acid, Subclass::BasicOxide) => (m1.clone(), oxide_to_molecule(db, m2)?),
        (Subclass::BasicOxide, Subclass::Acid) => (m2.clone(), oxide_to_molecule(db, m1)?),
        (Subclass::AcidicOxide, Subclass::Base) => (oxide_to_molecule(db, m1)?, m2.clone()),
        (Subclass::Base, Subclass::AcidicOxide) => (oxide_to_molecule(db, m2)?, m1.clone()),
        (Subclass::AcidicOxide, Subclass::BasicOxide) | (Subclass::BasicOxide, Subclass::AcidicOxide) => {
            return complex_addition(db, reagents);
        }
        (first, second) => {
            return Err(ChemistryError::WrongSimpleSubclass {
                formula: format!("{} + {}", m1.formula(), m2.formula()),
                subclass: format!("{first} and {second}"),
                expected: "an acid or acidic oxide paired with a base or basic oxide",
            });
        }
    };
    simple_exchange(db, &[acid.into(), base.into()])
}

/// Thermal decomposition of nitrates, which depends on the activity of the metal.
///
/// Active metals leave the nitrite, middle-active metals the oxide and inactive metals the
/// free metal. The last two also release nitrogen dioxide; oxygen is always released.
pub fn nitrate_decomposition(db: &Databases, reagents: &[Particle]) -> Result<Vec<Particle>, ChemistryError> {
    let [reagent] = exact::<1>(reagents, "1")?;
    let m = molecule(reagent, "nitrate decomposition")?;
    let class = m.simple_class();
    if !matches!(class, SimpleClass::Acid | SimpleClass::Salt) || m.anion() != nitrate() {
        return Err(ChemistryError::WrongSimpleClass {
            formula: m.formula(),
            class: class.to_string(),
            expected: "a nitrate",
        });
    }
    let cation = m.cation();
    let metal = cation.element().ok_or(ChemistryError::NotSupposedToHappen {
        context: "nitrate cation without a single element",
    })?;
    let nitrogen_dioxide = || -> Result<Particle, ChemistryError> {
        Ok(Molecule::new(Ion::of_element(nitrogen(), 4)?, oxide_ion().clone())?.into())
    };
    let oxygen = Particle::from(oxygen_gas().clone());

    match db.activity().activity(metal)? {
        Activity::Active => Ok(vec![
            Molecule::new(cation.clone(), nitrite().clone())?.into(),
            oxygen,
        ]),
        Activity::MiddleActive => Ok(vec![
            Molecule::oxide(cation.clone())?.into(),
            nitrogen_dioxide()?,
            oxygen,
        ]),
        Activity::Inactive => Ok(vec![
            convert::simple(cation)?.into(),
            nitrogen_dioxide()?,
            oxygen,
        ]),
        Activity::Unknown => Err(ChemistryError::NotSupposedToHappen {
            context: "nitrate of a metal with unknown activity",
        }),
    }
}

fn oxide_to_molecule(db: &Databases, oxide: &Molecule) -> Result<Molecule, ChemistryError> {
    let particle = Particle::Molecule(oxide.clone());
    match oxide.simple_subclass() {
        Subclass::AcidicOxide => Ok(db.acids().acid(&particle)?),
        Subclass::BasicOxide => Ok(db.bases().base(&particle)?),
        subclass => Err(ChemistryError::WrongSimpleSubclass {
            formula: oxide.formula(),
            subclass: subclass.to_string(),
            expected: "an acidic or basic oxide",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::formula::parse;

    fn db() -> Databases {
        Databases::builtin().unwrap()
    }

    fn reagents(db: &Databases, formulas: &[&str]) -> Vec<Particle> {
        formulas
            .iter()
            .map(|f| parse(db.solubility(), f).unwrap())
            .collect()
    }

    fn run(
        mechanism: fn(&Databases, &[Particle]) -> Result<Vec<Particle>, ChemistryError>,
        formulas: &[&str],
    ) -> Result<Vec<String>, ChemistryError> {
        let db = db();
        let products = mechanism(&db, &reagents(&db, formulas))?;
        Ok(products.iter().map(Particle::formula).collect())
    }

    #[test]
    fn simple_addition_picks_the_less_electronegative_cation() {
        assert_eq!(run(simple_addition, &["Na", "Cl2"]).unwrap(), ["NaCl"]);
        assert_eq!(run(simple_addition, &["Cl2", "Na"]).unwrap(), ["NaCl"]);
        assert_eq!(run(simple_addition, &["H2", "O2"]).unwrap(), ["H2O"]);
    }

    #[test]
    fn equal_electronegativity_makes_the_second_reagent_the_donor() {
        let db = db();
        let particles = reagents(&db, &["Cu", "Si"]);
        let (cu, si) = (particles[0].as_simple().unwrap(), particles[1].as_simple().unwrap());
        assert_eq!(cu.element().ren(), si.element().ren());
        let (donor, acceptor) = donor_and_acceptor(cu, si);
        assert_eq!((donor.formula(), acceptor.formula()), ("Si".to_string(), "Cu".to_string()));
        let (donor, _) = donor_and_acceptor(si, cu);
        assert_eq!(donor.formula(), "Cu");
    }

    #[test]
    fn simple_addition_prefers_the_highest_cation_charge() {
        assert_eq!(run(simple_addition, &["Fe", "Cl2"]).unwrap(), ["FeCl3"]);
    }

    #[test]
    fn simple_addition_fails_without_known_ions() {
        assert!(matches!(
            run(simple_addition, &["Au", "Cl2"]),
            Err(ChemistryError::CannotPredictProducts { .. })
        ));
    }

    #[test]
    fn simple_decomposition_splits_binary_compounds() {
        assert_eq!(run(simple_decomposition, &["NaCl"]).unwrap(), ["Na", "Cl2"]);
        assert_eq!(run(simple_decomposition, &["H2O"]).unwrap(), ["H2", "O2"]);
    }

    #[test]
    fn simple_substitution_accepts_either_order() {
        assert_eq!(run(simple_substitution, &["Zn", "CuSO4"]).unwrap(), ["Cu", "ZnSO4"]);
        assert_eq!(run(simple_substitution, &["H2O", "Na"]).unwrap(), ["H2", "NaOH"]);
    }

    #[test]
    fn simple_exchange_swaps_anions() {
        assert_eq!(run(simple_exchange, &["NaOH", "HCl"]).unwrap(), ["NaCl", "H2O"]);
        assert_eq!(
            run(simple_exchange, &["BaCl2", "Na2SO4"]).unwrap(),
            ["BaSO4", "NaCl"]
        );
    }

    #[test]
    fn complex_decomposition_releases_oxides() {
        assert_eq!(run(complex_decomposition, &["H2SO4"]).unwrap(), ["SO3", "H2O"]);
        assert_eq!(run(complex_decomposition, &["Cu(OH)2"]).unwrap(), ["CuO", "H2O"]);
        assert_eq!(run(complex_decomposition, &["CaCO3"]).unwrap(), ["CaO", "CO2"]);
        assert!(matches!(
            run(complex_decomposition, &["CaO"]),
            Err(ChemistryError::WrongSimpleClass { .. })
        ));
    }

    #[test]
    fn complex_addition_hydrates_and_combines_oxides() {
        assert_eq!(run(complex_addition, &["SO3", "H2O"]).unwrap(), ["H2SO4"]);
        assert_eq!(run(complex_addition, &["H2O", "CaO"]).unwrap(), ["Ca(OH)2"]);
        assert_eq!(run(complex_addition, &["CaO", "CO2"]).unwrap(), ["CaCO3"]);
        assert!(matches!(
            run(complex_addition, &["H2O", "H2O"]),
            Err(ChemistryError::WrongSimpleClass { .. })
        ));
    }

    #[test]
    fn complex_neutralization_goes_through_hydrated_forms() {
        assert_eq!(run(complex_neutralization, &["CaO", "HCl"]).unwrap(), ["H2O", "CaCl2"]);
        assert_eq!(
            run(complex_neutralization, &["NaOH", "SO3"]).unwrap(),
            ["H2O", "Na2SO4"]
        );
        assert_eq!(run(complex_neutralization, &["CO2", "CaO"]).unwrap(), ["CaCO3"]);
        assert!(matches!(
            run(complex_neutralization, &["HCl", "H2SO4"]),
            Err(ChemistryError::WrongSimpleSubclass { .. })
        ));
    }

    #[test]
    fn nitrate_decomposition_depends_on_metal_activity() {
        assert_eq!(run(nitrate_decomposition, &["KNO3"]).unwrap(), ["KNO2", "O2"]);
        assert_eq!(
            run(nitrate_decomposition, &["Zn(NO3)2"]).unwrap(),
            ["ZnO", "NO2", "O2"]
        );
        assert_eq!(
            run(nitrate_decomposition, &["AgNO3"]).unwrap(),
            ["Ag", "NO2", "O2"]
        );
        assert_eq!(
            run(nitrate_decomposition, &["HNO3"]).unwrap(),
            ["H2O", "NO2", "O2"]
        );
    }

    #[test]
    fn nitrate_decomposition_rejects_other_salts() {
        assert!(matches!(
            run(nitrate_decomposition, &["NaCl"]),
            Err(ChemistryError::WrongSimpleClass { .. })
        ));
    }

    #[test]
    fn mechanisms_check_the_number_of_reagents() {
        assert!(matches!(
            run(simple_exchange, &["NaCl"]),
            Err(ChemistryError::WrongNumberOfReagents { found: 1, .. })
        ));
        assert!(matches!(
            run(simple_decomposition, &["Na"]),
            Err(ChemistryError::UnsupportedParticle { .. })
        ));
    }
}
