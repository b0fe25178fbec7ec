use super::{BUILTIN_ACTIVITY, DataLoadError, LookupError};
use crate::core::elements::{Element, Group, get_by_symbol, hydrogen, is_metal};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Relative reactivity class of a metal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    Active,
    MiddleActive,
    Inactive,
    Unknown,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Activity::Active => "active",
            Activity::MiddleActive => "middle active",
            Activity::Inactive => "inactive",
            Activity::Unknown => "unknown",
        })
    }
}

const INACTIVE_ELECTRONEGATIVITY: f64 = 1.90;
const FIRST_TRANSACTINIDE: u8 = 104;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SeriesFile {
    series: Vec<String>,
}

/// The metal activity series, most active first. Hydrogen is listed as a reference point.
#[derive(Debug, Clone)]
pub struct MetalActivitySeries {
    series: Vec<&'static Element>,
}

impl MetalActivitySeries {
    pub fn builtin() -> Result<Self, DataLoadError> {
        Self::from_toml(BUILTIN_ACTIVITY, "<builtin>/activity.toml")
    }

    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| DataLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml(&content, &path.to_string_lossy())
    }

    fn from_toml(content: &str, origin: &str) -> Result<Self, DataLoadError> {
        let file: SeriesFile = toml::from_str(content).map_err(|e| DataLoadError::Toml {
            path: origin.to_string(),
            source: e,
        })?;
        let mut series = Vec::with_capacity(file.series.len());
        for (position, symbol) in file.series.iter().enumerate() {
            let invalid = |reason: String| DataLoadError::InvalidRecord {
                path: origin.to_string(),
                line: position as u64 + 1,
                reason,
            };
            let element = get_by_symbol(symbol).map_err(|e| invalid(e.to_string()))?;
            if element != hydrogen() && !is_metal(element) {
                return Err(invalid(format!("'{}' is not a metal", symbol)));
            }
            if series.contains(&element) {
                return Err(invalid(format!("'{}' is listed twice", symbol)));
            }
            series.push(element);
        }
        Ok(Self { series })
    }

    pub fn elements(&self) -> &[&'static Element] {
        &self.series
    }

    /// Classifies a metal (or hydrogen) by its group and relative electronegativity.
    pub fn activity(&self, element: &'static Element) -> Result<Activity, LookupError> {
        if element == hydrogen() {
            return Ok(Activity::MiddleActive);
        }
        if !is_metal(element) {
            return Err(LookupError::ElementIsNotMetal {
                element: element.symbol(),
            });
        }
        if element.atomic_number() >= FIRST_TRANSACTINIDE {
            return Ok(Activity::Unknown);
        }
        if element.symbol() == "Ni" {
            return Ok(Activity::MiddleActive);
        }
        Ok(match (element.group(), element.ren()) {
            (Group::A(n), _) if n <= 2 => Activity::Active,
            (Group::A(_), _) => Activity::MiddleActive,
            (Group::B(_), Some(ren)) if ren < INACTIVE_ELECTRONEGATIVITY => Activity::MiddleActive,
            (Group::B(_), Some(_)) => Activity::Inactive,
            (Group::B(_), None) => Activity::Unknown,
        })
    }

    /// The series member standing in for `element`.
    ///
    /// Listed elements represent themselves. Otherwise active metals take the closest
    /// electronegativity within their own group, middle-active metals the closest over the
    /// whole series, and inactive metals map to Pt (8B), Ag (1B and 2B) or W.
    pub fn estimate(&self, element: &'static Element) -> Result<&'static Element, LookupError> {
        if self.series.contains(&element) {
            return Ok(element);
        }
        let unknown = || LookupError::UnknownActivityMetal {
            element: element.symbol(),
        };
        let estimate = match self.activity(element)? {
            Activity::Active => self.closest(element, |e| e.group() == element.group()),
            Activity::MiddleActive => self.closest(element, |_| true),
            Activity::Inactive => {
                let symbol = match element.group() {
                    Group::B(8) => "Pt",
                    Group::B(1) | Group::B(2) => "Ag",
                    _ => "W",
                };
                get_by_symbol(symbol)
                    .ok()
                    .filter(|e| self.series.contains(e))
            }
            Activity::Unknown => None,
        }
        .ok_or_else(unknown)?;
        debug!(
            element = element.symbol(),
            estimate = estimate.symbol(),
            "Estimated metal activity"
        );
        Ok(estimate)
    }

    fn closest<F>(&self, element: &Element, filter: F) -> Option<&'static Element>
    where
        F: Fn(&Element) -> bool,
    {
        let target = element.ren()?;
        self.series
            .iter()
            .copied()
            .filter(|e| filter(e))
            .filter_map(|e| e.ren().map(|ren| (e, (ren - target).abs())))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(e, _)| e)
    }

    /// Position in the series after estimation; lower is more active.
    pub fn index(&self, element: &'static Element) -> Result<usize, LookupError> {
        let estimate = self.estimate(element)?;
        self.series
            .iter()
            .position(|e| *e == estimate)
            .ok_or(LookupError::UnknownActivityMetal {
                element: element.symbol(),
            })
    }

    /// Returns the more active of the two when `return_active` is set, otherwise the more
    /// inert. Elements sharing a position return `first`.
    pub fn compare(
        &self,
        first: &'static Element,
        second: &'static Element,
        return_active: bool,
    ) -> Result<&'static Element, LookupError> {
        let (a, b) = (self.index(first)?, self.index(second)?);
        if a == b {
            return Ok(first);
        }
        let first_is_more_active = a < b;
        Ok(if first_is_more_active == return_active {
            first
        } else {
            second
        })
    }

    pub fn more_active(
        &self,
        first: &'static Element,
        second: &'static Element,
    ) -> Result<&'static Element, LookupError> {
        self.compare(first, second, true)
    }

    pub fn more_inert(
        &self,
        first: &'static Element,
        second: &'static Element,
    ) -> Result<&'static Element, LookupError> {
        self.compare(first, second, false)
    }
}
