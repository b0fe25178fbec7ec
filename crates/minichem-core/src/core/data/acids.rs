use super::{BUILTIN_ACIDS, DataLoadError, LookupError};
use crate::core::formula::tokens::{composition_of, split_ion_string};
use crate::core::particles::special::{oxide_ion, proton};
use crate::core::particles::{Ion, Molecule, Particle};
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone)]
struct AcidRow {
    rest: Ion,
    element: Option<Ion>, // central element of the matching acidic oxide
}

/// Acid residues paired with the element ion of their acidic oxide.
#[derive(Debug, Clone, Default)]
pub struct AcidsTable {
    rows: Vec<AcidRow>,
}

fn parse_ion(text: &str) -> Result<Ion, LookupError> {
    let (body, charge) = split_ion_string(text)?;
    Ok(Ion::new(composition_of(body)?, charge)?)
}

impl AcidsTable {
    pub fn builtin() -> Result<Self, DataLoadError> {
        Self::from_reader(BUILTIN_ACIDS.as_bytes(), "<builtin>/acids.csv")
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
            .delimiter(b':')
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut rows = Vec::new();
        for (index, result) in reader.deserialize::<(String, String)>().enumerate() {
            let (rest, element) = result.map_err(|e| DataLoadError::Csv {
                path: origin.to_string(),
                source: e,
            })?;
            let invalid = |e: LookupError| DataLoadError::InvalidRecord {
                path: origin.to_string(),
                line: index as u64 + 1,
                reason: e.to_string(),
            };
            let rest = parse_ion(&rest).map_err(invalid)?;
            let element = match element.as_str() {
                "None" => None,
                text => Some(parse_ion(text).map_err(invalid)?),
            };
            if !rest.is_anion() || element.as_ref().is_some_and(|e| !e.is_cation()) {
                return Err(DataLoadError::InvalidRecord {
                    path: origin.to_string(),
                    line: index as u64 + 1,
                    reason: format!("'{}' is not an acid residue row", rest.formula()),
                });
            }
            rows.push(AcidRow { rest, element });
        }
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Finds the row for an acid residue, an oxide-forming element ion, an acid or an
    /// acidic oxide.
    fn row_of(&self, particle: &Particle) -> Result<&AcidRow, LookupError> {
        let found = match particle {
            Particle::Ion(ion) if ion.is_anion() => self.rows.iter().find(|r| &r.rest == ion),
            Particle::Ion(ion) => self
                .rows
                .iter()
                .find(|r| r.element.as_ref() == Some(ion)),
            Particle::Molecule(m) if m.is_water() => None,
            Particle::Molecule(m) if m.cation() == proton() => {
                self.rows.iter().find(|r| &r.rest == m.anion())
            }
            Particle::Molecule(m) if m.anion() == oxide_ion() => self
                .rows
                .iter()
                .find(|r| r.element.as_ref() == Some(m.cation())),
            _ => None,
        };
        found.ok_or_else(|| LookupError::AcidNotFound {
            signature: particle.formula(),
        })
    }

    /// The acid matching an acid residue or an acidic oxide, e.g. `SO3` gives `H2SO4`.
    pub fn acid(&self, particle: &Particle) -> Result<Molecule, LookupError> {
        let row = self.row_of(particle)?;
        Ok(Molecule::acid(row.rest.clone())?)
    }

    pub fn acid_rest(&self, particle: &Particle) -> Result<Ion, LookupError> {
        self.row_of(particle).map(|row| row.rest.clone())
    }

    /// The acidic oxide of an acid or residue. Oxygen-free acids have none.
    pub fn acidic_oxide(&self, particle: &Particle) -> Result<Molecule, LookupError> {
        let row = self.row_of(particle)?;
        match &row.element {
            Some(element) => Ok(Molecule::oxide(element.clone())?),
            None => Err(LookupError::AcidicOxideNotFound {
                signature: particle.formula(),
            }),
        }
    }

    pub fn rests(&self) -> impl Iterator<Item = &Ion> + '_ {
        self.rows.iter().map(|r| &r.rest)
    }
}
