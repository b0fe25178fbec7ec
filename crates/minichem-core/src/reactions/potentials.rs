use super::half::{HalfReaction, Side};
use crate::core::data::DataLoadError;
use crate::core::particles::Reactant;
use crate::engine::context::Chemistry;
use crate::engine::error::ChemistryError;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, instrument};

const BUILTIN_POTENTIALS: &str = include_str!("../../data/potentials.csv");

/// One row of the potentials file: a reduction half-reaction and its potential in volts.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PotentialRecord {
    pub scheme: String,
    pub potential: f64,
}

/// Which end of the potential scale [`HalfReactionDatabase::compare_potentials`] picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Lowest,
    Highest,
}

#[derive(Debug, Clone)]
struct Entry {
    half: HalfReaction,
    potential: f64,
}

/// Standard electrode potentials keyed by half-reaction.
///
/// Rows are matched by scheme, so a half-reaction finds its potential however its
/// substances were ordered when it was written.
#[derive(Debug, Clone, Default)]
pub struct HalfReactionDatabase {
    entries: Vec<Entry>,
}

impl HalfReactionDatabase {
    pub fn builtin(chemistry: &Chemistry) -> Result<Self, ChemistryError> {
        Self::from_reader(chemistry, BUILTIN_POTENTIALS.as_bytes(), "<builtin>/potentials.csv")
    }

    pub fn load(chemistry: &Chemistry, path: &Path) -> Result<Self, ChemistryError> {
        let file = std::fs::File::open(path).map_err(|e| DataLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_reader(chemistry, file, &path.to_string_lossy())
    }

    /// The table configured for `chemistry`: its override path, or the embedded file.
    #[instrument(skip_all, name = "potentials_load")]
    pub fn for_chemistry(chemistry: &Chemistry) -> Result<Self, ChemistryError> {
        let database = match chemistry.potentials_path() {
            Some(path) => Self::load(chemistry, path)?,
            None => Self::builtin(chemistry)?,
        };
        info!(half_reactions = database.len(), "Standard potentials loaded.");
        Ok(database)
    }

    fn from_reader<R: Read>(chemistry: &Chemistry, reader: R, origin: &str) -> Result<Self, ChemistryError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut database = Self::default();
        for (index, result) in reader.deserialize::<PotentialRecord>().enumerate() {
            let record = result.map_err(|e| DataLoadError::Csv {
                path: origin.to_string(),
                source: e,
            })?;
            let line = index as u64 + 2;
            let half = HalfReaction::from_string(chemistry, &record.scheme).map_err(|e| {
                DataLoadError::InvalidRecord {
                    path: origin.to_string(),
                    line,
                    reason: e.to_string(),
                }
            })?;
            if !database.try_insert(half, record.potential) {
                debug!(line, scheme = %record.scheme, "Skipping repeated half-reaction.");
            }
        }
        Ok(database)
    }

    pub fn save(&self, path: &Path) -> Result<(), DataLoadError> {
        let csv_error = |e| DataLoadError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        };
        let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
        for entry in &self.entries {
            let record = PotentialRecord {
                scheme: entry.half.scheme(),
                potential: entry.potential,
            };
            writer.serialize(&record).map_err(csv_error)?;
        }
        writer.flush().map_err(|e| DataLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HalfReaction, f64)> + '_ {
        self.entries.iter().map(|e| (&e.half, e.potential))
    }

    pub fn contains(&self, half: &HalfReaction) -> bool {
        self.potential(half).is_some()
    }

    pub fn potential(&self, half: &HalfReaction) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| &e.half == half)
            .map(|e| e.potential)
    }

    /// Adds a half-reaction unless its scheme is already listed. Returns whether it was added.
    pub fn try_insert(&mut self, half: HalfReaction, potential: f64) -> bool {
        if self.contains(&half) {
            return false;
        }
        self.entries.push(Entry { half, potential });
        true
    }

    /// Replaces the potential of a listed half-reaction.
    pub fn rewrite(&mut self, half: &HalfReaction, potential: f64) -> Result<(), ChemistryError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| &e.half == half)
            .ok_or_else(|| ChemistryError::HalfReactionNotFound {
                scheme: half.scheme(),
            })?;
        entry.potential = potential;
        Ok(())
    }

    pub fn remove(&mut self, half: &HalfReaction) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| &e.half != half);
        before != self.entries.len()
    }

    /// Half-reactions containing `substance`, on the given side or on either side when `None`.
    pub fn matching(&self, substance: &Reactant, side: Option<Side>) -> Vec<&HalfReaction> {
        self.entries
            .iter()
            .map(|e| &e.half)
            .filter(|half| {
                let in_reagents = half.reagents().contains(substance);
                let in_products = half.products().contains(substance);
                match side {
                    Some(Side::Reagents) => in_reagents,
                    Some(Side::Products) => in_products,
                    None => in_reagents || in_products,
                }
            })
            .collect()
    }

    /// The half-reaction with the lowest or highest potential among `halves`.
    ///
    /// # Errors
    ///
    /// [`ChemistryError::HalfReactionNotFound`] when one of them is not listed, and
    /// [`ChemistryError::WrongReactionConstructorParameters`] when `halves` is empty.
    pub fn compare_potentials<'a>(
        &self,
        halves: &[&'a HalfReaction],
        extremum: Extremum,
    ) -> Result<&'a HalfReaction, ChemistryError> {
        let rated = halves
            .iter()
            .map(|half| {
                self.potential(half)
                    .map(|p| (*half, p))
                    .ok_or_else(|| ChemistryError::HalfReactionNotFound {
                        scheme: half.scheme(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let pick = match extremum {
            Extremum::Lowest => rated.into_iter().min_by(|a, b| a.1.total_cmp(&b.1)),
            Extremum::Highest => rated.into_iter().max_by(|a, b| a.1.total_cmp(&b.1)),
        };
        pick.map(|(half, _)| half)
            .ok_or_else(|| ChemistryError::WrongReactionConstructorParameters {
                reason: "no half-reactions to compare".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::particles::ElementaryParticle;
    use std::fs;
    use tempfile::tempdir;

    fn chemistry() -> Chemistry {
        Chemistry::builtin().unwrap()
    }

    fn half(chemistry: &Chemistry, text: &str) -> HalfReaction {
        HalfReaction::from_string(chemistry, text).unwrap()
    }

    #[test]
    fn builtin_table_resolves_every_row() {
        let chemistry = chemistry();
        let database = HalfReactionDatabase::for_chemistry(&chemistry).unwrap();
        assert_eq!(database.len(), 24);
        let copper = half(&chemistry, "Cu(2) + e(-1) -> Cu");
        assert_eq!(database.potential(&copper), Some(0.34));
    }

    #[test]
    fn lookup_ignores_the_written_order() {
        let chemistry = chemistry();
        let database = HalfReactionDatabase::builtin(&chemistry).unwrap();
        let chlorine = half(&chemistry, "e(-1) + Cl2 = Cl(-1)");
        assert_eq!(database.potential(&chlorine), Some(1.36));
        assert!(!database.contains(&chlorine.reversed()));
    }

    #[test]
    fn compare_potentials_picks_either_end() {
        let chemistry = chemistry();
        let database = HalfReactionDatabase::builtin(&chemistry).unwrap();
        let zinc = half(&chemistry, "Zn(2) + e(-1) -> Zn");
        let copper = half(&chemistry, "Cu(2) + e(-1) -> Cu");
        let silver = half(&chemistry, "Ag(1) + e(-1) -> Ag");
        let all = [&zinc, &copper, &silver];
        assert_eq!(database.compare_potentials(&all, Extremum::Highest).unwrap(), &silver);
        assert_eq!(database.compare_potentials(&all, Extremum::Lowest).unwrap(), &zinc);
        assert!(database.compare_potentials(&[], Extremum::Lowest).is_err());
    }

    #[test]
    fn compare_potentials_rejects_unlisted_half_reactions() {
        let chemistry = chemistry();
        let database = HalfReactionDatabase::builtin(&chemistry).unwrap();
        let oxidation = half(&chemistry, "Zn -> Zn(2) + e(-1)");
        assert!(matches!(
            database.compare_potentials(&[&oxidation], Extremum::Highest),
            Err(ChemistryError::HalfReactionNotFound { .. })
        ));
    }

    #[test]
    fn matching_filters_by_side() {
        let chemistry = chemistry();
        let database = HalfReactionDatabase::builtin(&chemistry).unwrap();
        let ferrous: Reactant = chemistry.parse("Fe(2)").unwrap().into();
        assert_eq!(database.matching(&ferrous, Some(Side::Reagents)).len(), 1);
        assert_eq!(database.matching(&ferrous, Some(Side::Products)).len(), 1);
        assert_eq!(database.matching(&ferrous, None).len(), 2);
        let electron = Reactant::Elementary(ElementaryParticle::Electron);
        assert_eq!(database.matching(&electron, Some(Side::Reagents)).len(), database.len());
    }

    #[test]
    fn edits_survive_save_and_load() {
        let chemistry = chemistry();
        let dir = tempdir().unwrap();
        let path = dir.path().join("potentials.csv");
        let mut database = HalfReactionDatabase::builtin(&chemistry).unwrap();
        let copper = half(&chemistry, "Cu(2) + e(-1) -> Cu");
        let cuprous = half(&chemistry, "Cu(1) + e(-1) -> Cu");
        database.rewrite(&copper, 0.337).unwrap();
        assert!(database.try_insert(cuprous.clone(), 0.52));
        assert!(!database.try_insert(cuprous.clone(), 0.0));
        assert!(database.remove(&half(&chemistry, "F2 + e(-1) -> F(-1)")));
        database.save(&path).unwrap();

        let reloaded = HalfReactionDatabase::load(&chemistry, &path).unwrap();
        assert_eq!(reloaded.len(), 24);
        assert_eq!(reloaded.potential(&copper), Some(0.337));
        assert_eq!(reloaded.potential(&cuprous), Some(0.52));
        assert!(matches!(
            database.rewrite(&half(&chemistry, "Zn -> Zn(2) + e(-1)"), 0.0),
            Err(ChemistryError::HalfReactionNotFound { .. })
        ));
    }

    #[test]
    fn unreadable_rows_are_reported_with_their_line() {
        let chemistry = chemistry();
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.csv");
        fs::write(&path, "scheme,potential\nCu(2) + e(-1) -> Cu,0.34\nXx + e(-1) -> Cu,0.1\n").unwrap();
        assert!(matches!(
            HalfReactionDatabase::load(&chemistry, &path),
            Err(ChemistryError::DataLoad(DataLoadError::InvalidRecord { line: 3, .. }))
        ));
    }
}
