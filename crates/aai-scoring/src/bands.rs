use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::DescriptorError;

/// Qualitative severity reported for a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Severity {
    WellControlled,
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::WellControlled => "well-controlled",
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper edge of a bounded band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum UpperBound {
    /// The band ends just below this value.
    Exclusive(f64),
    /// The band includes this value.
    Inclusive(f64),
}

impl UpperBound {
    pub fn value(self) -> f64 {
        match self {
            UpperBound::Exclusive(v) | UpperBound::Inclusive(v) => v,
        }
    }

    fn admits(self, total: f64) -> bool {
        match self {
            UpperBound::Exclusive(v) => total < v,
            UpperBound::Inclusive(v) => total <= v,
        }
    }

    /// Position on the real line; an inclusive bound sits just after an
    /// exclusive bound of the same value.
    fn rank(self) -> (f64, u8) {
        match self {
            UpperBound::Exclusive(v) => (v, 0),
            UpperBound::Inclusive(v) => (v, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Band {
    pub upper: UpperBound,
    pub severity: Severity,
}

/// Ordered severity bands. Each band starts where the previous one ends and
/// `ceiling` takes every total above the last bounded band, so the table
/// covers the whole real line.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct BandTable {
    pub bands: Vec<Band>,
    pub ceiling: Severity,
}

impl BandTable {
    /// Verify the bounded bands are finite and strictly ascending.
    pub fn check(&self) -> Result<(), DescriptorError> {
        let mut previous: Option<(f64, u8)> = None;
        for (index, band) in self.bands.iter().enumerate() {
            let bound = band.upper.value();
            if !bound.is_finite() {
                return Err(DescriptorError::NonFiniteBound { index });
            }
            let rank = band.upper.rank();
            if let Some(prev) = previous
                && rank <= prev
            {
                return Err(DescriptorError::BandOrder { index, bound });
            }
            previous = Some(rank);
        }
        Ok(())
    }

    pub fn classify(&self, total: f64) -> Severity {
        classify(total, self)
    }

    /// Label of the lowest band, reported for an all-zero input.
    pub fn mildest(&self) -> Severity {
        self.bands
            .first()
            .map(|b| b.severity)
            .unwrap_or(self.ceiling)
    }
}

/// Map a total score to the first band that admits it.
pub fn classify(total: f64, table: &BandTable) -> Severity {
    table
        .bands
        .iter()
        .find(|band| band.upper.admits(total))
        .map(|band| band.severity)
        .unwrap_or(table.ceiling)
}
