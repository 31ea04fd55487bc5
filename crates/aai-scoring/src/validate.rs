//! Input validation. Collects every violation instead of stopping at the
//! first, so a form can flag all problems at once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::calculator::total_area;
use crate::descriptor::{DaySequenceLayout, Field, InstrumentDescriptor, Layout, RegionalLayout};
use crate::input::{DaySequenceInput, RegionalInput, ScoreInput};
use crate::scoring::ScoreRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ViolationKind {
    /// A single value outside its declared domain.
    FieldDomain,
    /// Wrong shape: missing, unknown, duplicated or miscounted entries.
    Structural,
}

/// A hard violation. Any one of these blocks computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct Violation {
    pub kind: ViolationKind,
    /// Field as named in the message, e.g. `Day 3 wheals`.
    pub field: Option<String>,
    pub value: Option<f64>,
    pub expected_range: Option<ScoreRange>,
    pub message: String,
}

impl Violation {
    fn structural(field: Option<String>, message: String) -> Self {
        Self {
            kind: ViolationKind::Structural,
            field,
            value: None,
            expected_range: None,
            message,
        }
    }

    fn domain(field: String, value: f64, range: ScoreRange, message: String) -> Self {
        Self {
            kind: ViolationKind::FieldDomain,
            field: Some(field),
            value: value.is_finite().then_some(value),
            expected_range: Some(range),
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<Violation>,
    /// Soft warnings; reported but never block computation.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn new(errors: Vec<Violation>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// All hard violations in one line.
    pub fn summary(&self) -> String {
        self.error_messages().join("; ")
    }
}

impl InstrumentDescriptor {
    /// Check `input` against this instrument's field domains.
    ///
    /// Never fails: problems come back in the report. The result depends on
    /// `input` alone.
    pub fn validate(&self, input: &ScoreInput) -> ValidationReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        match (&self.layout, input) {
            (Layout::Regional(layout), ScoreInput::Regional(input)) => {
                validate_regional(layout, input, &mut errors, &mut warnings);
            }
            (Layout::DaySequence(layout), ScoreInput::DaySequence(input)) => {
                validate_day_sequence(layout, input, &mut errors);
            }
            (layout, input) => errors.push(Violation::structural(
                None,
                format!(
                    "{} expects {} input, got {}",
                    self.name,
                    layout.kind(),
                    input.kind()
                ),
            )),
        }

        ValidationReport::new(errors, warnings)
    }
}

fn validate_regional(
    layout: &RegionalLayout,
    input: &RegionalInput,
    errors: &mut Vec<Violation>,
    warnings: &mut Vec<String>,
) {
    for region in &layout.regions {
        match input.region(&region.id) {
            Some(value) if !layout.region_range.contains(value) => {
                errors.push(Violation::domain(
                    region.id.clone(),
                    value,
                    layout.region_range,
                    range_message(&region.id, value, "%", &layout.region_range),
                ));
            }
            Some(_) => {}
            None => errors.push(missing(&region.id, "region")),
        }
    }
    for id in input.regions.keys() {
        if !layout.regions.iter().any(|r| &r.id == id) {
            errors.push(unknown(id, "region"));
        }
    }

    for group in &layout.groups {
        match input.groups.get(&group.id) {
            Some(values) => check_fields(&group.fields, values, "", errors),
            None => errors.push(missing(&group.id, "field group")),
        }
    }
    for id in input.groups.keys() {
        if !layout.groups.iter().any(|g| &g.id == id) {
            errors.push(unknown(id, "field group"));
        }
    }

    let area = total_area(layout, &input.regions);
    if area > layout.area_max {
        warnings.push(format!(
            "Total BSA ({area:.1}%) exceeds {}%. Please review region assessments.",
            layout.area_max
        ));
    }
}

fn validate_day_sequence(
    layout: &DaySequenceLayout,
    input: &DaySequenceInput,
    errors: &mut Vec<Violation>,
) {
    let expected = layout.days as usize;
    if input.days.len() != expected {
        errors.push(Violation::structural(
            None,
            format!("Expected {expected} days of data, got {}", input.days.len()),
        ));
    }

    let day_range = ScoreRange::discrete(1.0, f64::from(layout.days));
    for entry in &input.days {
        if !day_range.contains(f64::from(entry.day)) {
            errors.push(Violation::domain(
                "day".to_string(),
                f64::from(entry.day),
                day_range,
                format!("Day {} is out of range ({})", entry.day, day_range.span()),
            ));
        }
        let prefix = format!("Day {} ", entry.day);
        check_fields(&layout.fields, &entry.scores, &prefix, errors);
    }

    let mut days: Vec<i32> = input.days.iter().map(|e| e.day).collect();
    days.sort_unstable();
    let in_order = days.len() == expected && days.iter().zip(1..).all(|(&day, n)| day == n);
    if !in_order {
        let got = days
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        errors.push(Violation::structural(
            Some("day".to_string()),
            format!(
                "Days must be numbered 1-{} without duplicates. Got: {got}",
                layout.days
            ),
        ));
    }
}

/// Check a set of field values against their declarations. `prefix` scopes
/// the messages, e.g. `"Day 3 "`.
fn check_fields(
    fields: &[Field],
    values: &BTreeMap<String, f64>,
    prefix: &str,
    errors: &mut Vec<Violation>,
) {
    for field in fields {
        let label = format!("{prefix}{}", field.id);
        match values.get(&field.id) {
            Some(&value) if !field.range.contains(value) => {
                let message = if field.range.within_bounds(value) {
                    format!(
                        "{label}: {value} is not a valid {} score ({})",
                        field.name.to_lowercase(),
                        field.range.span()
                    )
                } else {
                    range_message(&label, value, field.score_type.unit(), &field.range)
                };
                errors.push(Violation::domain(label, value, field.range, message));
            }
            Some(_) => {}
            None => errors.push(missing(&label, "score")),
        }
    }
    for id in values.keys() {
        if !fields.iter().any(|f| &f.id == id) {
            errors.push(unknown(&format!("{prefix}{id}"), "field"));
        }
    }
}

fn range_message(label: &str, value: f64, unit: &str, range: &ScoreRange) -> String {
    if value.is_finite() {
        format!("{label}: {value}{unit} is out of range ({})", range.span())
    } else {
        format!("{label}: value is not a finite number")
    }
}

fn missing(label: &str, what: &str) -> Violation {
    Violation::structural(Some(label.to_string()), format!("{label}: missing {what}"))
}

fn unknown(label: &str, what: &str) -> Violation {
    Violation::structural(Some(label.to_string()), format!("{label}: unknown {what}"))
}
