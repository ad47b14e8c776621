//! Accumulated validation output, reported back to the caller wholesale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-area error lists. Empty lists mean the area passed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub biomass: Vec<String>,
    pub agricultural: Vec<String>,
    pub industrial: Vec<String>,
    pub distribution: Vec<String>,
    pub combustion: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    pub fn error_count(&self) -> usize {
        self.areas().map(|(_, errors)| errors.len()).sum()
    }

    /// (area, errors) pairs in canonical order.
    pub fn areas(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        [
            ("biomass", self.biomass.as_slice()),
            ("agricultural", self.agricultural.as_slice()),
            ("industrial", self.industrial.as_slice()),
            ("distribution", self.distribution.as_slice()),
            ("combustion", self.combustion.as_slice()),
        ]
        .into_iter()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (area, errors) in self.areas() {
            for error in errors {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{area}: {error}")?;
                first = false;
            }
        }
        if first {
            write!(f, "no errors")?;
        }
        Ok(())
    }
}
