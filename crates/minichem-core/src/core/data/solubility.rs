use super::{BUILTIN_SOLUBILITY, DataLoadError, LookupError};
use crate::core::formula::tokens::composition_of;
use crate::core::particles::{Ion, Molecule};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Solubility {
    #[serde(rename = "SL")]
    Soluble,
    #[serde(rename = "SS")]
    SlightlySoluble,
    #[serde(rename = "NS")]
    NotSoluble,
    #[serde(rename = "RW")]
    ReactsWithWater,
    #[serde(rename = "ND")]
    NoData,
}

impl Solubility {
    /// Insoluble and slightly soluble substances count as weak electrolytes.
    pub fn is_weak_electrolyte(&self) -> bool {
        matches!(self, Solubility::NotSoluble | Solubility::SlightlySoluble)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Solubility::Soluble => "SL",
            Solubility::SlightlySoluble => "SS",
            Solubility::NotSoluble => "NS",
            Solubility::ReactsWithWater => "RW",
            Solubility::NoData => "ND",
        }
    }
}

impl fmt::Display for Solubility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One row of the solubility table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct SubstanceRecord {
    pub cation: String,
    pub cation_charge: i32,
    pub anion: String,
    pub anion_charge: i32,
    pub solubility: Solubility,
}

impl SubstanceRecord {
    pub fn new(
        cation: &str,
        cation_charge: i32,
        anion: &str,
        anion_charge: i32,
        solubility: Solubility,
    ) -> Self {
        Self {
            cation: cation.to_string(),
            cation_charge,
            anion: anion.to_string(),
            anion_charge,
            solubility,
        }
    }

    pub fn signature(&self) -> String {
        format!(
            "{}({}) {}({})",
            self.cation, self.cation_charge, self.anion, self.anion_charge
        )
    }

    fn ions(&self) -> Result<(Ion, Ion), LookupError> {
        let cation = Ion::new(composition_of(&self.cation)?, self.cation_charge)?;
        let anion = Ion::new(composition_of(&self.anion)?, self.anion_charge)?;
        if !cation.is_cation() || !anion.is_anion() {
            return Err(LookupError::IonNotFound {
                signature: self.signature(),
            });
        }
        Ok((cation, anion))
    }

    pub fn to_molecule(&self) -> Result<Molecule, LookupError> {
        let (cation, anion) = self.ions()?;
        Ok(Molecule::new(cation, anion)?)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    record: SubstanceRecord,
    cation: Ion,
    anion: Ion,
}

/// Selects ions by formula; [`IonQuery::Any`] matches either side of a row.
#[derive(Debug, Clone, Copy)]
pub enum IonQuery<'a> {
    Cation(&'a str),
    Anion(&'a str),
    Any(&'a str),
}

/// Column constraints for [`SolubilityTable::select_substance`]; `None` matches anything.
#[derive(Debug, Clone, Default)]
pub struct SubstanceFilter<'a> {
    pub cation: Option<&'a str>,
    pub cation_charge: Option<i32>,
    pub anion: Option<&'a str>,
    pub anion_charge: Option<i32>,
    pub solubility: Option<Solubility>,
}

impl SubstanceFilter<'_> {
    fn matches(&self, record: &SubstanceRecord) -> bool {
        self.cation.is_none_or(|c| c == record.cation)
            && self.cation_charge.is_none_or(|c| c == record.cation_charge)
            && self.anion.is_none_or(|a| a == record.anion)
            && self.anion_charge.is_none_or(|a| a == record.anion_charge)
            && self.solubility.is_none_or(|s| s == record.solubility)
    }
}

/// Solubility of cation/anion pairs, and the catalogue of known ions.
#[derive(Debug, Clone, Default)]
pub struct SolubilityTable {
    entries: Vec<Entry>,
}

impl SolubilityTable {
    pub fn builtin() -> Result<Self, DataLoadError> {
        Self::from_reader(BUILTIN_SOLUBILITY.as_bytes(), "<builtin>/solubility.csv")
    }

    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let file = std::fs::File::open(path).map_err(|e| DataLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_reader(file, &path.to_string_lossy())
    }

    fn from_reader<R: Read>(reader: R, origin: &str) -> Result<Self, DataLoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut table = Self::default();
        for (index, result) in reader.deserialize::<SubstanceRecord>().enumerate() {
            let record = result.map_err(|e| DataLoadError::Csv {
                path: origin.to_string(),
                source: e,
            })?;
            // header occupies the first line
            let line = index as u64 + 2;
            table
                .try_insert(record)
                .map_err(|e| DataLoadError::InvalidRecord {
                    path: origin.to_string(),
                    line,
                    reason: e.to_string(),
                })?;
        }
        Ok(table)
    }

    pub fn save(&self, path: &Path) -> Result<(), DataLoadError> {
        let csv_error = |e| DataLoadError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        };
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .from_path(path)
            .map_err(csv_error)?;
        for entry in &self.entries {
            writer.serialize(&entry.record).map_err(csv_error)?;
        }
        writer.flush().map_err(|e| DataLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    /// Adds a row unless an identical one exists. Returns whether the table changed.
    pub fn try_insert(&mut self, record: SubstanceRecord) -> Result<bool, LookupError> {
        if self.entries.iter().any(|e| e.record == record) {
            return Ok(false);
        }
        let (cation, anion) = record.ions()?;
        self.entries.push(Entry {
            record,
            cation,
            anion,
        });
        Ok(true)
    }

    pub fn remove(&mut self, record: &SubstanceRecord) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| &e.record != record);
        before != self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubstanceRecord> + '_ {
        self.entries.iter().map(|e| &e.record)
    }

    /// Every known anion, in table order without repeats.
    pub fn anions(&self) -> Vec<&Ion> {
        let mut anions: Vec<&Ion> = Vec::new();
        for entry in &self.entries {
            if !anions.contains(&&entry.anion) {
                anions.push(&entry.anion);
            }
        }
        anions
    }

    /// Every known cation, in table order without repeats.
    pub fn select_cations(&self) -> Vec<Ion> {
        let mut cations: Vec<Ion> = Vec::new();
        for entry in &self.entries {
            if !cations.contains(&entry.cation) {
                cations.push(entry.cation.clone());
            }
        }
        cations
    }

    /// Distinct ions whose formula matches the query, in table order.
    pub fn select_ion(&self, query: IonQuery<'_>) -> Vec<Ion> {
        let mut found: Vec<Ion> = Vec::new();
        let mut push = |ion: &Ion| {
            if !found.contains(ion) {
                found.push(ion.clone());
            }
        };
        for entry in &self.entries {
            match query {
                IonQuery::Cation(f) if entry.record.cation == f => push(&entry.cation),
                IonQuery::Anion(f) if entry.record.anion == f => push(&entry.anion),
                IonQuery::Any(f) => {
                    if entry.record.cation == f {
                        push(&entry.cation);
                    }
                    if entry.record.anion == f {
                        push(&entry.anion);
                    }
                }
                _ => {}
            }
        }
        found
    }

    pub fn select_substance(&self, filter: &SubstanceFilter<'_>) -> Vec<&SubstanceRecord> {
        self.iter().filter(|r| filter.matches(r)).collect()
    }

    pub fn contains_ion(&self, ion: &Ion) -> bool {
        self.entries
            .iter()
            .any(|e| &e.cation == ion || &e.anion == ion)
    }

    /// The row describing `molecule`.
    ///
    /// # Errors
    ///
    /// [`LookupError::SubstanceNotFound`] when no row matches, and
    /// [`LookupError::DuplicateSubstance`] when more than one does (a corrupted table).
    pub fn substance_of(&self, molecule: &Molecule) -> Result<&SubstanceRecord, LookupError> {
        let matches: Vec<&SubstanceRecord> = self
            .entries
            .iter()
            .filter(|e| &e.cation == molecule.cation() && &e.anion == molecule.anion())
            .map(|e| &e.record)
            .collect();
        match matches.as_slice() {
            [record] => Ok(record),
            [] => Err(LookupError::SubstanceNotFound {
                signature: format!(
                    "{} + {}",
                    molecule.cation().formula(),
                    molecule.anion().formula()
                ),
            }),
            many => Err(LookupError::DuplicateSubstance {
                signature: molecule.formula(),
                count: many.len(),
            }),
        }
    }

    pub fn solubility_of(&self, molecule: &Molecule) -> Result<Solubility, LookupError> {
        self.substance_of(molecule).map(|r| r.solubility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn table() -> SolubilityTable {
        SolubilityTable::builtin().unwrap()
    }

    #[test]
    fn builtin_table_loads_and_knows_common_salts() {
        let t = table();
        assert!(t.len() > 250);
        let agcl = SubstanceRecord::new("Ag", 1, "Cl", -1, Solubility::NotSoluble).to_molecule().unwrap();
        assert_eq!(t.solubility_of(&agcl).unwrap(), Solubility::NotSoluble);
        let nano3 = SubstanceRecord::new("Na", 1, "NO3", -1, Solubility::Soluble).to_molecule().unwrap();
        assert_eq!(t.solubility_of(&nano3).unwrap(), Solubility::Soluble);
    }

    #[test]
    fn select_ion_returns_distinct_ions_by_side() {
        let t = table();
        let iron = t.select_ion(IonQuery::Cation("Fe"));
        let charges: Vec<i32> = iron.iter().map(Ion::charge).collect();
        assert_eq!(charges, vec![2, 3]);
        let sulfate = t.select_ion(IonQuery::Anion("SO4"));
        assert_eq!(sulfate.len(), 1);
        assert_eq!(sulfate[0].formula(), "SO4(-2)");
        assert!(t.select_ion(IonQuery::Cation("SO4")).is_empty());
        let sulfur = t.select_ion(IonQuery::Any("S"));
        assert_eq!(sulfur.len(), 3);
    }

    #[test]
    fn select_substance_applies_every_constraint() {
        let t = table();
        let filter = SubstanceFilter {
            anion: Some("PO4"),
            solubility: Some(Solubility::Soluble),
            ..Default::default()
        };
        let cations: Vec<&str> = t
            .select_substance(&filter)
            .iter()
            .map(|r| r.cation.as_str())
            .collect();
        assert_eq!(cations, vec!["H", "K", "Na"]);
    }

    #[test]
    fn substance_of_fails_for_unknown_pair() {
        let t = table();
        let m = SubstanceRecord::new("Rb", 1, "Cl", -1, Solubility::Soluble).to_molecule().unwrap();
        assert!(matches!(
            t.substance_of(&m),
            Err(LookupError::SubstanceNotFound { .. })
        ));
    }

    #[test]
    fn load_fails_for_malformed_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.csv");
        fs::write(&path, "cation;cation_charge;anion;anion_charge;solubility\nNa;one;Cl;-1;SL\n").unwrap();
        assert!(matches!(
            SolubilityTable::load(&path),
            Err(DataLoadError::Csv { .. })
        ));
    }

    #[test]
    fn load_fails_for_invalid_ion() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid.csv");
        fs::write(&path, "cation;cation_charge;anion;anion_charge;solubility\nNH4;1;Cl;-1;SL\n").unwrap();
        assert!(matches!(
            SolubilityTable::load(&path),
            Err(DataLoadError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            SolubilityTable::load(&dir.path().join("missing.csv")),
            Err(DataLoadError::Io { .. })
        ));
    }

    #[test]
    fn save_then_load_preserves_edits() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edited.csv");
        let mut t = table();
        let rb = SubstanceRecord::new("Rb", 1, "Cl", -1, Solubility::Soluble);
        assert!(t.try_insert(rb.clone()).unwrap());
        assert!(!t.try_insert(rb.clone()).unwrap());
        let agcl = SubstanceRecord::new("Ag", 1, "Cl", -1, Solubility::NotSoluble);
        assert!(t.remove(&agcl));
        t.save(&path).unwrap();

        let reloaded = SolubilityTable::load(&path).unwrap();
        assert_eq!(reloaded.len(), t.len());
        assert!(reloaded.iter().any(|r| r == &rb));
        assert!(!reloaded.iter().any(|r| r == &agcl));
    }
}
