use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The kind of value a field carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// Share of a body region affected, 0–100.
    Percentage,
    /// Ordinal clinician or patient rating (e.g., 0–3).
    Rating,
    /// Visual analogue scale, e.g. 0–10. Fractional values allowed.
    VisualAnalogue,
}

impl ScoreType {
    /// Suffix appended to values of this type in messages.
    pub fn unit(self) -> &'static str {
        match self {
            ScoreType::Percentage => "%",
            ScoreType::Rating | ScoreType::VisualAnalogue => "",
        }
    }
}

/// Defines the valid range for a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    /// Whole-number range, e.g. a 0–3 rating.
    pub const fn discrete(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: Some(1.0),
        }
    }

    /// Any finite value between the bounds.
    pub const fn continuous(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: None,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.within_bounds(value) && self.on_step(value)
    }

    /// Bounds check only, ignoring the step.
    pub fn within_bounds(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    fn on_step(&self, value: f64) -> bool {
        match self.step {
            Some(step) => {
                let remainder = (value - self.min) % step;
                // Allow floating point tolerance
                remainder < 1e-9 || (step - remainder) < 1e-9
            }
            None => true,
        }
    }

    /// True when every admitted value is an integer.
    pub fn is_whole_step(&self) -> bool {
        self.step == Some(1.0) && self.min.fract() == 0.0
    }

    /// Bounds as shown in messages, e.g. `0-3`.
    pub fn span(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }
}

/// A derived score, either an exact count or a continuous measure.
///
/// Counts serialize as plain integers so discrete totals never pick up a
/// fractional part on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ScoreValue {
    Count(u32),
    Measure(f64),
}

impl ScoreValue {
    pub fn as_f64(self) -> f64 {
        match self {
            ScoreValue::Count(n) => f64::from(n),
            ScoreValue::Measure(v) => v,
        }
    }
}

impl std::fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreValue::Count(n) => write!(f, "{n}"),
            ScoreValue::Measure(v) => write!(f, "{v:.1}"),
        }
    }
}

/// Round to one decimal place, half away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
