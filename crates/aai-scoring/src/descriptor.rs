//! Instrument descriptors: the static schema each scoring scheme is built from.
//!
//! A descriptor owns every constant the engine needs (field domains, region
//! weights, formula coefficients, rounding and the band table). Adding an
//! instrument means writing a new descriptor, not a new code path.

use std::collections::HashSet;

use serde::Serialize;
use ts_rs::TS;

use crate::bands::BandTable;
use crate::error::DescriptorError;
use crate::scoring::{ScoreRange, ScoreType, ScoreValue, round_one_decimal};

/// Labelled value of a discrete field, shown next to the control in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ScoreOption {
    pub value: u32,
    pub label: String,
}

/// A single scored input within an instrument.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Field {
    pub id: String,
    pub name: String,
    pub score_type: ScoreType,
    pub range: ScoreRange,
    pub options: Vec<ScoreOption>,
    pub description: Option<String>,
}

/// An anatomical region with its share of total body surface area.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Region {
    pub id: String,
    pub name: String,
    /// Maximum body-surface share this region contributes, in percent.
    pub weight: f64,
}

/// Exact rational multiplier applied to a component in the total formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Ratio {
    pub numerator: u32,
    pub denominator: u32,
}

impl Ratio {
    pub const ONE: Ratio = Ratio::new(1, 1);

    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Multiply before dividing so whole components stay exact.
    pub fn apply(self, value: f64) -> f64 {
        value * f64::from(self.numerator) / f64::from(self.denominator)
    }
}

/// How a derived score is presented in the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Rounding {
    /// Whole-number count, reported without a fractional part.
    Integral,
    /// Rounded to one decimal place.
    OneDecimal,
}

impl Rounding {
    pub fn apply(self, value: f64) -> ScoreValue {
        match self {
            Rounding::Integral => ScoreValue::Count(value.round().max(0.0) as u32),
            Rounding::OneDecimal => ScoreValue::Measure(round_one_decimal(value)),
        }
    }
}

/// A named set of fields summed into one component score.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct FieldGroup {
    pub id: String,
    pub name: String,
    pub fields: Vec<Field>,
    pub coefficient: Ratio,
    pub rounding: Rounding,
}

impl FieldGroup {
    pub fn max_sum(&self) -> f64 {
        self.fields.iter().map(|f| f.range.max).sum()
    }
}

/// Weighted body-region area plus summed field groups.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct RegionalLayout {
    /// Domain of the per-region percentage affected.
    pub region_range: ScoreRange,
    pub regions: Vec<Region>,
    /// Maximum of the area component; the region weights sum to it.
    pub area_max: f64,
    pub area_coefficient: Ratio,
    pub area_rounding: Rounding,
    pub groups: Vec<FieldGroup>,
    pub total_rounding: Rounding,
}

/// A fixed window of days, each scored on the same fields.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct DaySequenceLayout {
    pub days: u32,
    pub fields: Vec<Field>,
    pub average_rounding: Rounding,
}

impl DaySequenceLayout {
    pub fn daily_max(&self) -> f64 {
        self.fields.iter().map(|f| f.range.max).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Layout {
    Regional(RegionalLayout),
    DaySequence(DaySequenceLayout),
}

impl Layout {
    pub fn kind(&self) -> &'static str {
        match self {
            Layout::Regional(_) => "regional",
            Layout::DaySequence(_) => "day_sequence",
        }
    }
}

/// A complete scoring scheme. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct InstrumentDescriptor {
    pub id: String,
    pub name: String,
    pub version: String,
    pub reference: Option<String>,
    pub description: Option<String>,
    pub layout: Layout,
    pub bands: BandTable,
    pub max_score: f64,
}

impl InstrumentDescriptor {
    /// Check the descriptor's internal consistency.
    pub fn check(&self) -> Result<(), DescriptorError> {
        self.bands.check()?;

        let derived = match &self.layout {
            Layout::Regional(layout) => self.check_regional(layout)?,
            Layout::DaySequence(layout) => self.check_day_sequence(layout)?,
        };
        if (derived - self.max_score).abs() > 1e-9 {
            return Err(DescriptorError::MaxScore {
                instrument: self.id.clone(),
                declared: self.max_score,
                derived,
            });
        }
        Ok(())
    }

    fn check_regional(&self, layout: &RegionalLayout) -> Result<f64, DescriptorError> {
        let weights: f64 = layout.regions.iter().map(|r| r.weight).sum();
        if (weights - layout.area_max).abs() > 1e-9 {
            return Err(DescriptorError::RegionWeights {
                instrument: self.id.clone(),
                actual: weights,
                expected: layout.area_max,
            });
        }

        let mut seen = HashSet::new();
        let ids = layout
            .regions
            .iter()
            .map(|r| r.id.as_str())
            .chain(layout.groups.iter().map(|g| g.id.as_str()));
        for id in ids {
            if !seen.insert(id) {
                return Err(self.duplicate(id));
            }
        }

        let mut derived = self.apply_ratio(layout.area_coefficient, layout.area_max)?;
        for group in &layout.groups {
            let mut group_seen = HashSet::new();
            for field in &group.fields {
                if !group_seen.insert(field.id.as_str()) {
                    return Err(self.duplicate(&field.id));
                }
                if group.rounding == Rounding::Integral && !field.range.is_whole_step() {
                    return Err(self.fractional(&field.id));
                }
            }
            derived += self.apply_ratio(group.coefficient, group.max_sum())?;
        }
        Ok(derived)
    }

    fn check_day_sequence(&self, layout: &DaySequenceLayout) -> Result<f64, DescriptorError> {
        if layout.days == 0 || layout.fields.is_empty() {
            return Err(DescriptorError::EmptyDaySequence {
                instrument: self.id.clone(),
            });
        }
        let mut seen = HashSet::new();
        for field in &layout.fields {
            if !seen.insert(field.id.as_str()) {
                return Err(self.duplicate(&field.id));
            }
            // Daily and weekly totals are counts.
            if !field.range.is_whole_step() {
                return Err(self.fractional(&field.id));
            }
        }
        Ok(f64::from(layout.days) * layout.daily_max())
    }

    fn apply_ratio(&self, ratio: Ratio, value: f64) -> Result<f64, DescriptorError> {
        if ratio.denominator == 0 {
            return Err(DescriptorError::ZeroDenominator {
                instrument: self.id.clone(),
            });
        }
        Ok(ratio.apply(value))
    }

    fn duplicate(&self, field: &str) -> DescriptorError {
        DescriptorError::DuplicateField {
            instrument: self.id.clone(),
            field: field.to_string(),
        }
    }

    fn fractional(&self, field: &str) -> DescriptorError {
        DescriptorError::FractionalCount {
            instrument: self.id.clone(),
            field: field.to_string(),
        }
    }
}
