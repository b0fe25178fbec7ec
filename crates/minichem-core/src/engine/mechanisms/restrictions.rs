//! Product checks applied after a mechanism has run.
//!
//! A restriction returns `Ok(())` when the products can form and a
//! [`RestrictionError`] otherwise; lookup failures are reported as they are.

use super::formulas;
use crate::core::data::Activity;
use crate::core::particles::convert::is_gas;
use crate::core::particles::{Particle, SimpleClass};
use crate::engine::context::Databases;
use crate::engine::error::{ChemistryError, RestrictionError};

/// Exchange reactions run only when they remove ions from solution: water, a gas or a
/// weak electrolyte (precipitate) must be among the products.
pub fn weak_electrolyte(db: &Databases, products: &[Particle]) -> Result<(), ChemistryError> {
    if products.iter().any(|p| p.is_water() || is_gas(p)) {
        return Ok(());
    }
    for product in products {
        if let Particle::Molecule(m) = product {
            if db.solubility().solubility_of(m)?.is_weak_electrolyte() {
                return Ok(());
            }
        }
    }
    Err(weak_electrolyte_not_found(products))
}

/// The ionic variant: only water or a weakly soluble molecule counts.
pub fn ionic_weak_electrolyte(db: &Databases, products: &[Particle]) -> Result<(), ChemistryError> {
    if products.iter().any(Particle::is_water) {
        return Ok(());
    }
    for product in products {
        if let Particle::Molecule(m) = product {
            if db.solubility().solubility_of(m)?.is_weak_electrolyte() {
                return Ok(());
            }
        }
    }
    Err(weak_electrolyte_not_found(products))
}

/// A metal displaces another only when it is strictly more active.
///
/// The products of a substitution hold the displaced simple substance and the molecule
/// formed by the reacting metal.
pub fn metal_activity_reagent(db: &Databases, products: &[Particle]) -> Result<(), ChemistryError> {
    let simple = products.iter().find_map(Particle::as_simple);
    let molecule = products.iter().find_map(Particle::as_molecule);
    let (Some(simple), Some(molecule)) = (simple, molecule) else {
        return Err(ChemistryError::NotSupposedToHappen {
            context: "substitution products without a simple substance and a molecule",
        });
    };
    let metal = molecule
        .cation()
        .element()
        .ok_or(ChemistryError::NotSupposedToHappen {
            context: "substitution product with a compound cation",
        })?;
    let displaced = simple.element();
    if metal != displaced && db.activity().more_active(displaced, metal)? == metal {
        return Ok(());
    }
    Err(RestrictionError::LessActiveMetalReagent {
        metal: metal.symbol().to_string(),
        displaced: simple.formula(),
    }
    .into())
}

/// Only active metals react with water, which shows as the base among the products.
pub fn metal_activity_water(db: &Databases, products: &[Particle]) -> Result<(), ChemistryError> {
    let base = products
        .iter()
        .filter_map(Particle::as_molecule)
        .find(|m| m.simple_class() == SimpleClass::Base)
        .ok_or_else(|| ChemistryError::WrongSimpleClass {
            formula: formulas(products),
            class: "set of products without a base".to_string(),
            expected: "a base among the products",
        })?;
    let metal = base
        .cation()
        .element()
        .ok_or(ChemistryError::NotSupposedToHappen {
            context: "base with a compound cation",
        })?;
    match db.activity().activity(metal)? {
        Activity::Active => Ok(()),
        activity => Err(RestrictionError::WrongMetalActivity {
            metal: metal.symbol(),
            activity,
            expected: Activity::Active,
        }
        .into()),
    }
}

fn weak_electrolyte_not_found(products: &[Particle]) -> ChemistryError {
    RestrictionError::WeakElectrolyteNotFound {
        products: formulas(products),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::formula::parse;

    fn check(
        restriction: fn(&Databases, &[Particle]) -> Result<(), ChemistryError>,
        formulas: &[&str],
    ) -> Result<(), ChemistryError> {
        let db = Databases::builtin().unwrap();
        let products: Vec<Particle> = formulas
            .iter()
            .map(|f| parse(db.solubility(), f).unwrap())
            .collect();
        restriction(&db, &products)
    }

    #[test]
    fn weak_electrolyte_accepts_water_gas_or_precipitate() {
        assert!(check(weak_electrolyte, &["NaCl", "H2O"]).is_ok());
        assert!(check(weak_electrolyte, &["NaCl", "CO2"]).is_ok());
        assert!(check(weak_electrolyte, &["BaSO4", "NaCl"]).is_ok());
    }

    #[test]
    fn weak_electrolyte_rejects_soluble_products() {
        let error = check(weak_electrolyte, &["NaCl", "KNO3"]).unwrap_err();
        assert!(error.is_restriction());
        assert!(matches!(
            error,
            ChemistryError::Restriction(RestrictionError::WeakElectrolyteNotFound { .. })
        ));
    }

    #[test]
    fn ionic_weak_electrolyte_ignores_gases() {
        assert!(check(ionic_weak_electrolyte, &["H2O"]).is_ok());
        assert!(check(ionic_weak_electrolyte, &["AgCl", "Na(1)"]).is_ok());
        assert!(check(ionic_weak_electrolyte, &["Cl(-1)", "Na(1)"]).is_err());
    }

    #[test]
    fn metal_activity_reagent_needs_a_more_active_metal() {
        assert!(check(metal_activity_reagent, &["Cu", "ZnSO4"]).is_ok());
        assert!(check(metal_activity_reagent, &["H2", "NaCl"]).is_ok());
        assert!(matches!(
            check(metal_activity_reagent, &["Zn", "CuSO4"]),
            Err(ChemistryError::Restriction(
                RestrictionError::LessActiveMetalReagent { .. }
            ))
        ));
        assert!(check(metal_activity_reagent, &["Cu", "CuSO4"]).is_err());
    }

    #[test]
    fn metal_activity_water_needs_an_active_metal() {
        assert!(check(metal_activity_water, &["H2", "NaOH"]).is_ok());
        assert!(matches!(
            check(metal_activity_water, &["H2", "Zn(OH)2"]),
            Err(ChemistryError::Restriction(RestrictionError::WrongMetalActivity {
                activity: Activity::MiddleActive,
                ..
            }))
        ));
        assert!(matches!(
            check(metal_activity_water, &["H2", "NaCl"]),
            Err(ChemistryError::WrongSimpleClass { .. })
        ));
    }
}
