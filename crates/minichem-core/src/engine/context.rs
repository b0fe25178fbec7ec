//! The shared chemistry context.
//!
//! [`Chemistry`] owns every lookup database and both reaction tables. It is built once,
//! never mutated afterwards and handed out by shared reference, so one instance can serve
//! any number of reactions on any number of threads.

use super::config::{ChemistryConfig, DataPaths, EqualizerSettings};
use super::error::ChemistryError;
use super::rpt::{Algorithm, Rpt};
use crate::core::data::{AcidsTable, BasesTable, DataLoadError, MetalActivitySeries, SolubilityTable};
use crate::core::formula::parse;
use crate::core::particles::Particle;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// The lookup databases consulted by mechanisms and restrictions.
#[derive(Debug, Clone)]
pub struct Databases {
    solubility: SolubilityTable,
    acids: AcidsTable,
    bases: BasesTable,
    activity: MetalActivitySeries,
}

impl Databases {
    pub fn builtin() -> Result<Self, DataLoadError> {
        Self::load(&DataPaths::default())
    }

    /// Loads each database from its override path, or from the embedded file when unset.
    pub fn load(paths: &DataPaths) -> Result<Self, DataLoadError> {
        let solubility = match &paths.solubility {
            Some(path) => SolubilityTable::load(path)?,
            None => SolubilityTable::builtin()?,
        };
        let acids = match &paths.acids {
            Some(path) => AcidsTable::load(path)?,
            None => AcidsTable::builtin()?,
        };
        let activity = match &paths.activity {
            Some(path) => MetalActivitySeries::load(path)?,
            None => MetalActivitySeries::builtin()?,
        };
        let bases = BasesTable::from_solubility(&solubility);
        Ok(Self {
            solubility,
            acids,
            bases,
            activity,
        })
    }

    pub fn solubility(&self) -> &SolubilityTable {
        &self.solubility
    }

    pub fn acids(&self) -> &AcidsTable {
        &self.acids
    }

    pub fn bases(&self) -> &BasesTable {
        &self.bases
    }

    pub fn activity(&self) -> &MetalActivitySeries {
        &self.activity
    }
}

#[derive(Debug, Clone)]
pub struct Chemistry {
    databases: Databases,
    molecular: Rpt,
    ionic: Rpt,
    equalizer: EqualizerSettings,
    potentials: Option<PathBuf>,
}

impl Chemistry {
    /// A context built entirely from the embedded resources.
    pub fn builtin() -> Result<Self, ChemistryError> {
        Self::load(&ChemistryConfig::default())
    }

    #[instrument(skip_all, name = "chemistry_load")]
    pub fn load(config: &ChemistryConfig) -> Result<Self, ChemistryError> {
        debug!(paths = ?config.data, "Loading chemistry resources.");
        let databases = Databases::load(&config.data)?;
        let molecular = match &config.data.molecular_rules {
            Some(path) => Rpt::load(path, Algorithm::Molecular)?,
            None => Rpt::builtin(Algorithm::Molecular)?,
        };
        let ionic = match &config.data.ionic_rules {
            Some(path) => Rpt::load(path, Algorithm::Ionic)?,
            None => Rpt::builtin(Algorithm::Ionic)?,
        };
        info!(
            substances = databases.solubility.len(),
            acids = databases.acids.len(),
            bases = databases.bases.len(),
            metals = databases.activity.elements().len(),
            molecular_rules = molecular.len(),
            ionic_rules = ionic.len(),
            "Chemistry resources loaded."
        );
        Ok(Self {
            databases,
            molecular,
            ionic,
            equalizer: config.equalizer,
            potentials: config.data.potentials.clone(),
        })
    }

    pub fn databases(&self) -> &Databases {
        &self.databases
    }

    pub fn rpt(&self, algorithm: Algorithm) -> &Rpt {
        match algorithm {
            Algorithm::Molecular => &self.molecular,
            Algorithm::Ionic => &self.ionic,
        }
    }

    pub fn equalizer_settings(&self) -> EqualizerSettings {
        self.equalizer
    }

    /// Override for the standard potentials table; `None` means the embedded one.
    ///
    /// The table is read on demand because its rows are half-reactions parsed against this
    /// context.
    pub fn potentials_path(&self) -> Option<&Path> {
        self.potentials.as_deref()
    }

    /// Parses a formula against this context's solubility table.
    pub fn parse(&self, formula: &str) -> Result<Particle, ChemistryError> {
        Ok(parse(&self.databases.solubility, formula)?)
    }

    pub fn predict(
        &self,
        algorithm: Algorithm,
        reagents: &[Particle],
        ignore_restrictions: bool,
    ) -> Result<Vec<Particle>, ChemistryError> {
        self.rpt(algorithm)
            .predict(&self.databases, reagents, ignore_restrictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::ChemistryConfigBuilder;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn chemistry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Chemistry>();
    }

    #[test]
    fn builtin_context_loads_every_resource() {
        let chemistry = Chemistry::builtin().unwrap();
        assert!(!chemistry.databases().solubility().is_empty());
        assert!(!chemistry.databases().acids().is_empty());
        assert!(!chemistry.databases().bases().is_empty());
        assert_eq!(chemistry.rpt(Algorithm::Ionic).algorithm(), Algorithm::Ionic);
        assert_eq!(chemistry.equalizer_settings(), EqualizerSettings::default());
        assert_eq!(chemistry.parse("NaCl").unwrap().formula(), "NaCl");
    }

    #[test]
    fn load_uses_override_paths() {
        let dir = tempdir().unwrap();
        let rules = dir.path().join("rules.csv");
        fs::write(&rules, "class1;class2;mechanism;restriction\nmetal;nonmetal;SA;None\n").unwrap();
        let config = ChemistryConfigBuilder::new()
            .molecular_rules_path(rules)
            .lambda_threshold(2)
            .build()
            .unwrap();
        let chemistry = Chemistry::load(&config).unwrap();
        assert_eq!(chemistry.rpt(Algorithm::Molecular).len(), 1);
        assert_eq!(chemistry.equalizer_settings().lambda_threshold, 2);
    }

    #[test]
    fn load_reports_missing_files() {
        let config = ChemistryConfigBuilder::new()
            .activity_path("missing/activity.toml".into())
            .build()
            .unwrap();
        assert!(matches!(
            Chemistry::load(&config),
            Err(ChemistryError::DataLoad(DataLoadError::Io { .. }))
        ));
    }
}
