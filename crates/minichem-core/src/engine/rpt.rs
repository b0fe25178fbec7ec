//! # Reaction Prediction Tool
//!
//! Signature-keyed dispatch from reagent classes to a mechanism and an optional restriction.
//!
//! ## Architecture
//!
//! Each [`Rpt`] serves one [`Algorithm`]. Its table is read once from a `;`-delimited rule
//! file (`class1;class2;mechanism;restriction`) and every code is resolved to a function
//! pointer while loading, so an unknown code fails construction rather than the first
//! prediction that needs it. Prediction classifies every reagent, sorts the class labels into
//! a [`Signature`], runs the mechanism it maps to and checks the products with the
//! restriction.

use super::context::Databases;
use super::error::ChemistryError;
use super::mechanisms::{MechanismFn, RestrictionFn, formulas, ionic, molecular, restrictions};
use crate::core::particles::special::nitrate;
use crate::core::particles::{Particle, SimpleClass, Subclass};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, instrument, warn};

pub(crate) const BUILTIN_MOLECULAR_RULES: &str = include_str!("../../data/molecular_rules.csv");
pub(crate) const BUILTIN_IONIC_RULES: &str = include_str!("../../data/ionic_rules.csv");

#[derive(Debug, Error)]
pub enum RuleLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Unknown mechanism code '{code}' in '{path}' at line {line}")]
    UnknownMechanism { path: String, line: u64, code: String },
    #[error("Unknown restriction code '{code}' in '{path}' at line {line}")]
    UnknownRestriction { path: String, line: u64, code: String },
    #[error("Unknown {algorithm} reagent class '{label}' in '{path}' at line {line}")]
    UnknownClass {
        path: String,
        line: u64,
        label: String,
        algorithm: Algorithm,
    },
    #[error("Code '{code}' in '{path}' at line {line} is not available to the {algorithm} algorithm")]
    WrongAlgorithm {
        path: String,
        line: u64,
        code: String,
        algorithm: Algorithm,
    },
    #[error("Duplicate signature '{signature}' in '{path}' at line {line}")]
    DuplicateSignature {
        path: String,
        line: u64,
        signature: String,
    },
}

/// The two prediction domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Simple substances and neutral molecules.
    Molecular,
    /// Ions, ion groups and molecules in solution.
    Ionic,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Molecular => "molecular",
            Algorithm::Ionic => "ionic",
        })
    }
}

/// Coarse class of a reagent as used by the rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReagentClass {
    Metal,
    Nonmetal,
    BinarySalt,
    TernarySalt,
    BinaryAcid,
    TernaryAcid,
    Base,
    BasicOxide,
    AmphotericOxide,
    AcidicOxide,
    Water,
    Nitrate,
    Ion,
    IonGroup,
    Molecule,
}

impl ReagentClass {
    const ALL: [ReagentClass; 15] = [
        ReagentClass::Metal,
        ReagentClass::Nonmetal,
        ReagentClass::BinarySalt,
        ReagentClass::TernarySalt,
        ReagentClass::BinaryAcid,
        ReagentClass::TernaryAcid,
        ReagentClass::Base,
        ReagentClass::BasicOxide,
        ReagentClass::AmphotericOxide,
        ReagentClass::AcidicOxide,
        ReagentClass::Water,
        ReagentClass::Nitrate,
        ReagentClass::Ion,
        ReagentClass::IonGroup,
        ReagentClass::Molecule,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReagentClass::Metal => "metal",
            ReagentClass::Nonmetal => "nonmetal",
            ReagentClass::BinarySalt => "binary salt",
            ReagentClass::TernarySalt => "ternary salt",
            ReagentClass::BinaryAcid => "binary acid",
            ReagentClass::TernaryAcid => "ternary acid",
            ReagentClass::Base => "base",
            ReagentClass::BasicOxide => "basic oxide",
            ReagentClass::AmphotericOxide => "amphoteric oxide",
            ReagentClass::AcidicOxide => "acidic oxide",
            ReagentClass::Water => "water",
            ReagentClass::Nitrate => "nitrate",
            ReagentClass::Ion => "ion",
            ReagentClass::IonGroup => "ion group",
            ReagentClass::Molecule => "molecule",
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            ReagentClass::Ion | ReagentClass::IonGroup | ReagentClass::Molecule => Algorithm::Ionic,
            _ => Algorithm::Molecular,
        }
    }

    /// Classifies a reagent for `algorithm`.
    ///
    /// Molecular classes check nitrates before water and everything else; acids and salts
    /// with three elements are ternary.
    pub fn of(particle: &Particle, algorithm: Algorithm) -> Result<Self, ChemistryError> {
        let unsupported = || ChemistryError::UnsupportedParticle {
            formula: particle.formula(),
            kind: particle.kind_name(),
            reaction: match algorithm {
                Algorithm::Molecular => "molecular reaction",
                Algorithm::Ionic => "ionic reaction",
            },
        };
        match (algorithm, particle) {
            (Algorithm::Ionic, Particle::Ion(_)) => Ok(ReagentClass::Ion),
            (Algorithm::Ionic, Particle::IonGroup(_)) => Ok(ReagentClass::IonGroup),
            (Algorithm::Ionic, Particle::Molecule(_)) => Ok(ReagentClass::Molecule),
            (Algorithm::Molecular, Particle::Simple(s)) => Ok(match s.simple_class() {
                SimpleClass::Metal => ReagentClass::Metal,
                _ => ReagentClass::Nonmetal,
            }),
            (Algorithm::Molecular, Particle::Molecule(m)) => {
                if m.anion() == nitrate() {
                    return Ok(ReagentClass::Nitrate);
                }
                if m.is_water() {
                    return Ok(ReagentClass::Water);
                }
                let ternary = m.size() == 3;
                Ok(match m.simple_subclass() {
                    Subclass::Acid if ternary => ReagentClass::TernaryAcid,
                    Subclass::Acid => ReagentClass::BinaryAcid,
                    Subclass::Salt if ternary => ReagentClass::TernarySalt,
                    Subclass::Salt => ReagentClass::BinarySalt,
                    Subclass::Base => ReagentClass::Base,
                    Subclass::BasicOxide => ReagentClass::BasicOxide,
                    Subclass::AmphotericOxide => ReagentClass::AmphotericOxide,
                    Subclass::AcidicOxide => ReagentClass::AcidicOxide,
                    Subclass::Metal | Subclass::Nonmetal => return Err(unsupported()),
                })
            }
            _ => Err(unsupported()),
        }
    }
}

impl fmt::Display for ReagentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReagentClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.label() == label)
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MechanismCode {
    SimpleAddition,
    SimpleDecomposition,
    SimpleSubstitution,
    SimpleExchange,
    ComplexDecomposition,
    ComplexAddition,
    ComplexNeutralization,
    NitrateDecomposition,
    IonicAddition,
    IonicDecomposition,
    IonPicking,
    IonicExchange,
    IonGroupDecision,
}

impl MechanismCode {
    pub fn code(&self) -> &'static str {
        match self {
            MechanismCode::SimpleAddition => "SA",
            MechanismCode::SimpleDecomposition => "SD",
            MechanismCode::SimpleSubstitution => "SS",
            MechanismCode::SimpleExchange => "SE",
            MechanismCode::ComplexDecomposition => "CD",
            MechanismCode::ComplexAddition => "CA",
            MechanismCode::ComplexNeutralization => "CN",
            MechanismCode::NitrateDecomposition => "ND",
            MechanismCode::IonicAddition => "IA",
            MechanismCode::IonicDecomposition => "ID",
            MechanismCode::IonPicking => "IP",
            MechanismCode::IonicExchange => "IE",
            MechanismCode::IonGroupDecision => "IIGD",
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            MechanismCode::IonicAddition
            | MechanismCode::IonicDecomposition
            | MechanismCode::IonPicking
            | MechanismCode::IonicExchange
            | MechanismCode::IonGroupDecision => Algorithm::Ionic,
            _ => Algorithm::Molecular,
        }
    }

    pub fn function(&self) -> MechanismFn {
        match self {
            MechanismCode::SimpleAddition => molecular::simple_addition,
            MechanismCode::SimpleDecomposition => molecular::simple_decomposition,
            MechanismCode::SimpleSubstitution => molecular::simple_substitution,
            MechanismCode::SimpleExchange => molecular::simple_exchange,
            MechanismCode::ComplexDecomposition => molecular::complex_decomposition,
            MechanismCode::ComplexAddition => molecular::complex_addition,
            MechanismCode::ComplexNeutralization => molecular::complex_neutralization,
            MechanismCode::NitrateDecomposition => molecular::nitrate_decomposition,
            MechanismCode::IonicAddition => ionic::ionic_addition,
            MechanismCode::IonicDecomposition => ionic::ionic_decomposition,
            MechanismCode::IonPicking => ionic::ion_picking,
            MechanismCode::IonicExchange => ionic::ionic_exchange,
            MechanismCode::IonGroupDecision => ionic::ion_group_decision,
        }
    }
}

impl FromStr for MechanismCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "SA" => MechanismCode::SimpleAddition,
            "SD" => MechanismCode::SimpleDecomposition,
            "SS" => MechanismCode::SimpleSubstitution,
            "SE" => MechanismCode::SimpleExchange,
            "CD" => MechanismCode::ComplexDecomposition,
            "CA" => MechanismCode::ComplexAddition,
            "CN" => MechanismCode::ComplexNeutralization,
            "ND" => MechanismCode::NitrateDecomposition,
            "IA" => MechanismCode::IonicAddition,
            "ID" => MechanismCode::IonicDecomposition,
            "IP" => MechanismCode::IonPicking,
            "IE" => MechanismCode::IonicExchange,
            "IIGD" => MechanismCode::IonGroupDecision,
            other => return Err(other.to_string()),
        })
    }
}

impl fmt::Display for MechanismCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestrictionCode {
    WeakElectrolyte,
    MetalActivityReagent,
    MetalActivityWater,
    None,
}

impl RestrictionCode {
    pub fn code(&self) -> &'static str {
        match self {
            RestrictionCode::WeakElectrolyte => "WER",
            RestrictionCode::MetalActivityReagent => "MAR",
            RestrictionCode::MetalActivityWater => "MAW",
            RestrictionCode::None => "None",
        }
    }

    /// Whether `algorithm` has an implementation of this restriction.
    pub fn supports(&self, algorithm: Algorithm) -> bool {
        match self {
            RestrictionCode::MetalActivityReagent | RestrictionCode::MetalActivityWater => {
                algorithm == Algorithm::Molecular
            }
            RestrictionCode::WeakElectrolyte | RestrictionCode::None => true,
        }
    }

    pub fn function(&self, algorithm: Algorithm) -> Option<RestrictionFn> {
        match (self, algorithm) {
            (RestrictionCode::WeakElectrolyte, Algorithm::Molecular) => Some(restrictions::weak_electrolyte),
            (RestrictionCode::WeakElectrolyte, Algorithm::Ionic) => Some(restrictions::ionic_weak_electrolyte),
            (RestrictionCode::MetalActivityReagent, Algorithm::Molecular) => {
                Some(restrictions::metal_activity_reagent)
            }
            (RestrictionCode::MetalActivityWater, Algorithm::Molecular) => Some(restrictions::metal_activity_water),
            _ => None,
        }
    }
}

impl FromStr for RestrictionCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "WER" => RestrictionCode::WeakElectrolyte,
            "MAR" => RestrictionCode::MetalActivityReagent,
            "MAW" => RestrictionCode::MetalActivityWater,
            "None" | "" => RestrictionCode::None,
            other => return Err(other.to_string()),
        })
    }
}

impl fmt::Display for RestrictionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Reagent classes sorted by label, so reagent order never matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(Vec<ReagentClass>);

impl Signature {
    pub fn new(mut classes: Vec<ReagentClass>) -> Self {
        classes.sort_by_key(ReagentClass::label);
        Self(classes)
    }

    pub fn classes(&self) -> &[ReagentClass] {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.0.iter().map(ReagentClass::label).collect();
        f.write_str(&labels.join(" + "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub mechanism: MechanismCode,
    pub restriction: RestrictionCode,
}

#[derive(Debug, Deserialize)]
struct RuleRecord {
    class1: String,
    class2: String,
    mechanism: String,
    restriction: String,
}

#[derive(Debug, Clone)]
pub struct Rpt {
    algorithm: Algorithm,
    rules: HashMap<Signature, Rule>,
}

impl Rpt {
    pub fn builtin(algorithm: Algorithm) -> Result<Self, RuleLoadError> {
        match algorithm {
            Algorithm::Molecular => Self::from_reader(
                BUILTIN_MOLECULAR_RULES.as_bytes(),
                "<builtin>/molecular_rules.csv",
                algorithm,
            ),
            Algorithm::Ionic => Self::from_reader(
                BUILTIN_IONIC_RULES.as_bytes(),
                "<builtin>/ionic_rules.csv",
                algorithm,
            ),
        }
    }

    pub fn load(path: &Path, algorithm: Algorithm) -> Result<Self, RuleLoadError> {
        let file = std::fs::File::open(path).map_err(|e| RuleLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_reader(file, &path.to_string_lossy(), algorithm)
    }

    fn from_reader<R: Read>(reader: R, origin: &str, algorithm: Algorithm) -> Result<Self, RuleLoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut rules = HashMap::new();
        for (index, result) in reader.deserialize::<RuleRecord>().enumerate() {
            let record = result.map_err(|e| RuleLoadError::Csv {
                path: origin.to_string(),
                source: e,
            })?;
            let line = index as u64 + 2;
            let (signature, rule) = parse_rule(&record, algorithm, origin, line)?;
            if rules.contains_key(&signature) {
                return Err(RuleLoadError::DuplicateSignature {
                    path: origin.to_string(),
                    line,
                    signature: signature.to_string(),
                });
            }
            rules.insert(signature, rule);
        }
        Ok(Self { algorithm, rules })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule(&self, signature: &Signature) -> Option<Rule> {
        self.rules.get(signature).copied()
    }

    /// The signature of one or two reagents.
    pub fn signature(&self, reagents: &[Particle]) -> Result<Signature, ChemistryError> {
        if !(1..=2).contains(&reagents.len()) {
            return Err(ChemistryError::WrongNumberOfReagents {
                reagents: formulas(reagents),
                found: reagents.len(),
                expected: "1 or 2",
            });
        }
        let classes = reagents
            .iter()
            .map(|r| ReagentClass::of(r, self.algorithm))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Signature::new(classes))
    }

    /// Predicts the products of `reagents`.
    ///
    /// With `ignore_restrictions` the restriction still runs, but a veto is only logged and the
    /// mechanism's products are returned.
    ///
    /// # Errors
    ///
    /// [`ChemistryError::CannotPredictProducts`] when no rule matches the signature, plus any
    /// error raised by the mechanism or the restriction.
    #[instrument(skip_all, name = "rpt_predict", fields(algorithm = %self.algorithm))]
    pub fn predict(
        &self,
        db: &Databases,
        reagents: &[Particle],
        ignore_restrictions: bool,
    ) -> Result<Vec<Particle>, ChemistryError> {
        let signature = self.signature(reagents)?;
        let rule = self
            .rule(&signature)
            .ok_or_else(|| ChemistryError::CannotPredictProducts {
                reagents: formulas(reagents),
                stage: "no rule for these reagent classes",
            })?;
        debug!(
            signature = %signature,
            mechanism = %rule.mechanism,
            restriction = %rule.restriction,
            "Selected rule."
        );

        let products = (rule.mechanism.function())(db, reagents)?;
        if let Some(restriction) = rule.restriction.function(self.algorithm) {
            match restriction(db, &products) {
                Ok(()) => {}
                Err(error) if ignore_restrictions && error.is_restriction() => {
                    warn!(
                        restriction = %rule.restriction,
                        products = %formulas(&products),
                        %error,
                        "Restriction bypassed."
                    );
                }
                Err(error) => return Err(error),
            }
        }
        Ok(products)
    }
}

fn parse_rule(
    record: &RuleRecord,
    algorithm: Algorithm,
    origin: &str,
    line: u64,
) -> Result<(Signature, Rule), RuleLoadError> {
    let mut classes = Vec::with_capacity(2);
    for label in [&record.class1, &record.class2] {
        if label.is_empty() {
            continue;
        }
        let class = label
            .parse::<ReagentClass>()
            .ok()
            .filter(|c| c.algorithm() == algorithm)
            .ok_or_else(|| RuleLoadError::UnknownClass {
                path: origin.to_string(),
                line,
                label: label.clone(),
                algorithm,
            })?;
        classes.push(class);
    }
    if classes.is_empty() {
        return Err(RuleLoadError::UnknownClass {
            path: origin.to_string(),
            line,
            label: String::new(),
            algorithm,
        });
    }

    let mechanism = record
        .mechanism
        .parse::<MechanismCode>()
        .map_err(|code| RuleLoadError::UnknownMechanism {
            path: origin.to_string(),
            line,
            code,
        })?;
    let restriction = record
        .restriction
        .parse::<RestrictionCode>()
        .map_err(|code| RuleLoadError::UnknownRestriction {
            path: origin.to_string(),
            line,
            code,
        })?;
    let wrong_algorithm = |code: &str| RuleLoadError::WrongAlgorithm {
        path: origin.to_string(),
        line,
        code: code.to_string(),
        algorithm,
    };
    if mechanism.algorithm() != algorithm {
        return Err(wrong_algorithm(mechanism.code()));
    }
    if !restriction.supports(algorithm) {
        return Err(wrong_algorithm(restriction.code()));
    }
    Ok((
        Signature::new(classes),
        Rule {
            mechanism,
            restriction,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::formula::parse;
    use crate::engine::error::RestrictionError;
    use std::fs;
    use tempfile::tempdir;

    fn setup(algorithm: Algorithm) -> (Databases, Rpt) {
        (Databases::builtin().unwrap(), Rpt::builtin(algorithm).unwrap())
    }

    fn particles(db: &Databases, formulas: &[&str]) -> Vec<Particle> {
        formulas
            .iter()
            .map(|f| parse(db.solubility(), f).unwrap())
            .collect()
    }

    fn predict(algorithm: Algorithm, formulas: &[&str], ignore: bool) -> Result<Vec<String>, ChemistryError> {
        let (db, rpt) = setup(algorithm);
        let products = rpt.predict(&db, &particles(&db, formulas), ignore)?;
        Ok(products.iter().map(Particle::formula).collect())
    }

    fn write_rules(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rules.csv");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn builtin_tables_load() {
        assert_eq!(Rpt::builtin(Algorithm::Molecular).unwrap().len(), 39);
        assert_eq!(Rpt::builtin(Algorithm::Ionic).unwrap().len(), 7);
    }

    #[test]
    fn classification_distinguishes_nitrates_and_ternary_compounds() {
        let db = Databases::builtin().unwrap();
        let class = |f: &str| ReagentClass::of(&parse(db.solubility(), f).unwrap(), Algorithm::Molecular).unwrap();
        assert_eq!(class("NaNO3"), ReagentClass::Nitrate);
        assert_eq!(class("HNO3"), ReagentClass::Nitrate);
        assert_eq!(class("H2O"), ReagentClass::Water);
        assert_eq!(class("NaCl"), ReagentClass::BinarySalt);
        assert_eq!(class("Na2SO4"), ReagentClass::TernarySalt);
        assert_eq!(class("HCl"), ReagentClass::BinaryAcid);
        assert_eq!(class("H2SO4"), ReagentClass::TernaryAcid);
        assert_eq!(class("CaO"), ReagentClass::BasicOxide);
        assert_eq!(class("SO3"), ReagentClass::AcidicOxide);
        assert_eq!(class("Fe"), ReagentClass::Metal);
        assert_eq!(class("O2"), ReagentClass::Nonmetal);
        let ion = parse(db.solubility(), "Na(1)").unwrap();
        assert!(ReagentClass::of(&ion, Algorithm::Molecular).is_err());
        assert_eq!(ReagentClass::of(&ion, Algorithm::Ionic).unwrap(), ReagentClass::Ion);
    }

    #[test]
    fn signature_ignores_reagent_order() {
        let a = Signature::new(vec![ReagentClass::Water, ReagentClass::Metal]);
        let b = Signature::new(vec![ReagentClass::Metal, ReagentClass::Water]);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "metal + water");
    }

    #[test]
    fn predicts_substitution_and_exchange() {
        assert_eq!(predict(Algorithm::Molecular, &["Na", "H2O"], false).unwrap(), ["H2", "NaOH"]);
        assert_eq!(predict(Algorithm::Molecular, &["H2SO4", "NaOH"], false).unwrap(), ["H2O", "Na2SO4"]);
        assert_eq!(predict(Algorithm::Molecular, &["Zn", "CuSO4"], false).unwrap(), ["Cu", "ZnSO4"]);
    }

    #[test]
    fn restrictions_veto_impossible_reactions() {
        assert!(matches!(
            predict(Algorithm::Molecular, &["Cu", "H2O"], false),
            Err(ChemistryError::Restriction(RestrictionError::WrongMetalActivity { .. }))
        ));
        assert!(matches!(
            predict(Algorithm::Molecular, &["Cu", "ZnSO4"], false),
            Err(ChemistryError::Restriction(RestrictionError::LessActiveMetalReagent { .. }))
        ));
        assert!(matches!(
            predict(Algorithm::Molecular, &["NaCl", "KNO3"], false),
            Err(ChemistryError::Restriction(RestrictionError::WeakElectrolyteNotFound { .. }))
        ));
    }

    #[test]
    fn ignore_restrictions_returns_the_vetoed_products() {
        assert_eq!(predict(Algorithm::Molecular, &["Cu", "H2O"], true).unwrap(), ["H2", "Cu(OH)2"]);
        assert_eq!(predict(Algorithm::Molecular, &["NaCl", "KNO3"], true).unwrap(), ["NaNO3", "KCl"]);
    }

    #[test]
    fn unknown_signatures_and_counts_fail() {
        assert!(matches!(
            predict(Algorithm::Molecular, &["Na"], false),
            Err(ChemistryError::CannotPredictProducts { .. })
        ));
        assert!(matches!(
            predict(Algorithm::Molecular, &["Na", "Cl2", "O2"], false),
            Err(ChemistryError::WrongNumberOfReagents { found: 3, .. })
        ));
    }

    #[test]
    fn ionic_predictions_use_the_ionic_table() {
        assert_eq!(predict(Algorithm::Ionic, &["Na(1)", "Cl(-1)"], false).unwrap(), ["NaCl"]);
        assert_eq!(predict(Algorithm::Ionic, &["Ag(1)", "NaCl"], false).unwrap(), ["AgCl", "Na(1)"]);
        assert!(predict(Algorithm::Ionic, &["K(1)", "NaCl"], false).unwrap_err().is_restriction());
        assert_eq!(predict(Algorithm::Ionic, &["H2SO4"], false).unwrap(), ["H(1)", "HSO4(-1)"]);
    }

    #[test]
    fn load_reports_unknown_codes_with_line_numbers() {
        let (_dir, path) = write_rules("class1;class2;mechanism;restriction\nmetal;nonmetal;SA;None\nbase;;XX;None\n");
        assert!(matches!(
            Rpt::load(&path, Algorithm::Molecular),
            Err(RuleLoadError::UnknownMechanism { line: 3, .. })
        ));

        let (_dir, path) = write_rules("class1;class2;mechanism;restriction\nbase;;CD;NOPE\n");
        assert!(matches!(
            Rpt::load(&path, Algorithm::Molecular),
            Err(RuleLoadError::UnknownRestriction { line: 2, .. })
        ));

        let (_dir, path) = write_rules("class1;class2;mechanism;restriction\nalkali;;CD;None\n");
        assert!(matches!(
            Rpt::load(&path, Algorithm::Molecular),
            Err(RuleLoadError::UnknownClass { .. })
        ));
    }

    #[test]
    fn load_rejects_duplicates_and_foreign_codes() {
        let (_dir, path) =
            write_rules("class1;class2;mechanism;restriction\nmetal;nonmetal;SA;None\nnonmetal;metal;SA;None\n");
        assert!(matches!(
            Rpt::load(&path, Algorithm::Molecular),
            Err(RuleLoadError::DuplicateSignature { line: 3, .. })
        ));

        let (_dir, path) = write_rules("class1;class2;mechanism;restriction\nion;ion;SA;None\n");
        assert!(matches!(
            Rpt::load(&path, Algorithm::Ionic),
            Err(RuleLoadError::WrongAlgorithm { .. })
        ));

        let (_dir, path) = write_rules("class1;class2;mechanism;restriction\nion;ion;IA;MAR\n");
        assert!(matches!(
            Rpt::load(&path, Algorithm::Ionic),
            Err(RuleLoadError::WrongAlgorithm { .. })
        ));
    }

    #[test]
    fn load_reads_a_custom_table() {
        let (_dir, path) = write_rules("class1;class2;mechanism;restriction\nMetal;Nonmetal;SA;None\n");
        let rpt = Rpt::load(&path, Algorithm::Molecular).unwrap();
        assert_eq!(rpt.len(), 1);
        let rule = rpt
            .rule(&Signature::new(vec![ReagentClass::Nonmetal, ReagentClass::Metal]))
            .unwrap();
        assert_eq!(rule.mechanism, MechanismCode::SimpleAddition);
        assert_eq!(rule.restriction, RestrictionCode::None);
    }
}
