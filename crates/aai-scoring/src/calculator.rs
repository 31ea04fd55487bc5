//! Score calculator: pure formulas over validated input.

use std::collections::BTreeMap;

use crate::descriptor::{
    DaySequenceLayout, InstrumentDescriptor, Layout, RegionalLayout, Rounding,
};
use crate::error::ScoringError;
use crate::input::{DailyEntry, DaySequenceInput, RegionalInput, ScoreInput};

/// Region values are percentages of the region.
const PERCENT: f64 = 100.0;

/// An unrounded component score.
#[derive(Debug, Clone, PartialEq)]
pub struct RawComponent {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub rounding: Rounding,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawDaily {
    pub day: i32,
    pub scores: BTreeMap<String, f64>,
    pub total: f64,
}

/// Calculator output before rounding and classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentScores {
    pub components: Vec<RawComponent>,
    /// Per-day breakdown, ordered by day. Empty for regional instruments.
    pub daily: Vec<RawDaily>,
    pub total: f64,
    pub total_rounding: Rounding,
}

/// Compute component scores and the total for already-validated input.
///
/// The input is validated again here. Reaching this with hard violations is
/// a caller bug and yields [`ScoringError::InvariantViolation`]; user-facing
/// callers go through [`InstrumentDescriptor::compute`] instead.
pub fn calculate(
    descriptor: &InstrumentDescriptor,
    input: &ScoreInput,
) -> Result<ComponentScores, ScoringError> {
    let report = descriptor.validate(input);
    if !report.valid {
        let summary = report.summary();
        tracing::error!(
            instrument = %descriptor.id,
            violations = report.errors.len(),
            "calculator reached with unvalidated input"
        );
        return Err(ScoringError::InvariantViolation {
            instrument: descriptor.name.clone(),
            summary,
        });
    }

    match (&descriptor.layout, input) {
        (Layout::Regional(layout), ScoreInput::Regional(input)) => {
            Ok(calculate_regional(layout, input))
        }
        (Layout::DaySequence(layout), ScoreInput::DaySequence(input)) => {
            Ok(calculate_day_sequence(layout, input))
        }
        // Validation rejects mismatched shapes.
        _ => Err(ScoringError::InvariantViolation {
            instrument: descriptor.name.clone(),
            summary: format!("{} input for {} layout", input.kind(), descriptor.layout.kind()),
        }),
    }
}

/// Weighted area: the sum of `percent × weight / 100` over the layout's
/// regions. Regions missing from `regions` count as zero.
pub fn total_area(layout: &RegionalLayout, regions: &BTreeMap<String, f64>) -> f64 {
    let weighted: f64 = layout
        .regions
        .iter()
        .map(|r| regions.get(&r.id).copied().unwrap_or(0.0) * r.weight)
        .sum();
    weighted / PERCENT
}

/// Sum of one day's scores.
pub fn daily_total(entry: &DailyEntry) -> f64 {
    entry.scores.values().sum()
}

fn calculate_regional(layout: &RegionalLayout, input: &RegionalInput) -> ComponentScores {
    let area = total_area(layout, &input.regions);
    let mut total = layout.area_coefficient.apply(area);
    let mut components = vec![RawComponent {
        id: "area".to_string(),
        name: "Area".to_string(),
        value: area,
        rounding: layout.area_rounding,
    }];

    for group in &layout.groups {
        let sum: f64 = group
            .fields
            .iter()
            .map(|f| input.item(&group.id, &f.id).unwrap_or(0.0))
            .sum();
        total += group.coefficient.apply(sum);
        components.push(RawComponent {
            id: group.id.clone(),
            name: group.name.clone(),
            value: sum,
            rounding: group.rounding,
        });
    }

    ComponentScores {
        components,
        daily: Vec::new(),
        total,
        total_rounding: layout.total_rounding,
    }
}

fn calculate_day_sequence(layout: &DaySequenceLayout, input: &DaySequenceInput) -> ComponentScores {
    let mut daily: Vec<RawDaily> = input
        .days
        .iter()
        .map(|entry| RawDaily {
            day: entry.day,
            scores: entry.scores.clone(),
            total: daily_total(entry),
        })
        .collect();
    daily.sort_by_key(|d| d.day);

    let weekly: f64 = daily.iter().map(|d| d.total).sum();
    let average = weekly / f64::from(layout.days);

    ComponentScores {
        components: vec![
            RawComponent {
                id: "weekly_total".to_string(),
                name: "Weekly total".to_string(),
                value: weekly,
                rounding: Rounding::Integral,
            },
            RawComponent {
                id: "average_daily".to_string(),
                name: "Average daily".to_string(),
                value: average,
                rounding: layout.average_rounding,
            },
        ],
        daily,
        total: weekly,
        total_rounding: Rounding::Integral,
    }
}
