use thiserror::Error;

use crate::validate::Violation;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// The caller supplied input with hard violations.
    #[error("invalid {instrument} input: {summary}")]
    InvalidInput {
        instrument: String,
        violations: Vec<Violation>,
        summary: String,
    },

    /// The calculator was reached with input that does not validate.
    #[error("score calculator invoked on unvalidated {instrument} input: {summary}")]
    InvariantViolation { instrument: String, summary: String },
}

impl ScoringError {
    pub fn violations(&self) -> &[Violation] {
        match self {
            ScoringError::InvalidInput { violations, .. } => violations,
            ScoringError::InvariantViolation { .. } => &[],
        }
    }
}

/// A malformed instrument descriptor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DescriptorError {
    #[error("band {index} has a non-finite upper bound")]
    NonFiniteBound { index: usize },

    #[error("band {index} upper bound {bound} does not ascend from the previous band")]
    BandOrder { index: usize, bound: f64 },

    #[error("{instrument}: region weights sum to {actual}, expected {expected}")]
    RegionWeights {
        instrument: String,
        actual: f64,
        expected: f64,
    },

    #[error("{instrument}: duplicate field id '{field}'")]
    DuplicateField { instrument: String, field: String },

    #[error("{instrument}: field '{field}' feeds a count but its range is not whole-step")]
    FractionalCount { instrument: String, field: String },

    #[error("{instrument}: declared max score {declared} differs from formula maximum {derived}")]
    MaxScore {
        instrument: String,
        declared: f64,
        derived: f64,
    },

    #[error("{instrument}: day sequence must have at least one day and one field")]
    EmptyDaySequence { instrument: String },

    #[error("{instrument}: formula coefficient has a zero denominator")]
    ZeroDenominator { instrument: String },
}
