use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::descriptor::{InstrumentDescriptor, Layout};

/// Scores entered for one instrument, shaped by its layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreInput {
    Regional(RegionalInput),
    DaySequence(DaySequenceInput),
}

impl ScoreInput {
    pub fn kind(&self) -> &'static str {
        match self {
            ScoreInput::Regional(_) => "regional",
            ScoreInput::DaySequence(_) => "day_sequence",
        }
    }
}

/// Region percentages keyed by region id, and field scores keyed by group
/// then field id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegionalInput {
    pub regions: BTreeMap<String, f64>,
    pub groups: BTreeMap<String, BTreeMap<String, f64>>,
}

impl RegionalInput {
    pub fn set_region(&mut self, region: &str, percent: f64) -> &mut Self {
        self.regions.insert(region.to_string(), percent);
        self
    }

    pub fn set_item(&mut self, group: &str, field: &str, value: f64) -> &mut Self {
        self.groups
            .entry(group.to_string())
            .or_default()
            .insert(field.to_string(), value);
        self
    }

    pub fn region(&self, region: &str) -> Option<f64> {
        self.regions.get(region).copied()
    }

    pub fn item(&self, group: &str, field: &str) -> Option<f64> {
        self.groups.get(group)?.get(field).copied()
    }
}

/// One day's scores. `day` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyEntry {
    pub day: i32,
    pub scores: BTreeMap<String, f64>,
}

impl DailyEntry {
    pub fn new<'a>(day: i32, scores: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self {
            day,
            scores: scores
                .into_iter()
                .map(|(field, value)| (field.to_string(), value))
                .collect(),
        }
    }

    pub fn score(&self, field: &str) -> Option<f64> {
        self.scores.get(field).copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DaySequenceInput {
    pub days: Vec<DailyEntry>,
}

impl DaySequenceInput {
    /// Copy of this input with one day's field replaced. Other days, and
    /// `self`, are left untouched; an unknown day changes nothing.
    pub fn with_day_score(&self, day: i32, field: &str, value: f64) -> Self {
        let days = self
            .days
            .iter()
            .map(|entry| {
                let mut entry = entry.clone();
                if entry.day == day {
                    entry.scores.insert(field.to_string(), value);
                }
                entry
            })
            .collect();
        Self { days }
    }

    pub fn day(&self, day: i32) -> Option<&DailyEntry> {
        self.days.iter().find(|entry| entry.day == day)
    }
}

impl InstrumentDescriptor {
    /// An input with every field present and set to zero.
    pub fn create_empty_input(&self) -> ScoreInput {
        match &self.layout {
            Layout::Regional(layout) => {
                let regions = layout
                    .regions
                    .iter()
                    .map(|r| (r.id.clone(), 0.0))
                    .collect();
                let groups = layout
                    .groups
                    .iter()
                    .map(|g| {
                        let fields = g.fields.iter().map(|f| (f.id.clone(), 0.0)).collect();
                        (g.id.clone(), fields)
                    })
                    .collect();
                ScoreInput::Regional(RegionalInput { regions, groups })
            }
            Layout::DaySequence(layout) => {
                let days = (1..=layout.days as i32)
                    .map(|day| {
                        DailyEntry::new(day, layout.fields.iter().map(|f| (f.id.as_str(), 0.0)))
                    })
                    .collect();
                ScoreInput::DaySequence(DaySequenceInput { days })
            }
        }
    }
}
