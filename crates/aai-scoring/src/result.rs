use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::bands::{Severity, classify};
use crate::calculator::{ComponentScores, calculate};
use crate::descriptor::{InstrumentDescriptor, Rounding};
use crate::error::ScoringError;
use crate::input::ScoreInput;
use crate::scoring::ScoreValue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComponentScore {
    pub id: String,
    pub name: String,
    pub value: ScoreValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyScore {
    pub day: i32,
    pub scores: BTreeMap<String, f64>,
    pub daily_total: ScoreValue,
}

/// Outcome of scoring one input. Identical input always yields an identical
/// result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub instrument_id: String,
    pub components: Vec<ComponentScore>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub daily_scores: Vec<DailyScore>,
    pub total: ScoreValue,
    pub max_score: f64,
    pub interpretation: Severity,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ScoreResult {
    pub fn component(&self, id: &str) -> Option<ScoreValue> {
        self.components.iter().find(|c| c.id == id).map(|c| c.value)
    }
}

/// Apply the descriptor's rounding policy and attach the interpretation.
pub fn assemble(
    descriptor: &InstrumentDescriptor,
    scores: ComponentScores,
    interpretation: Severity,
    warnings: Vec<String>,
) -> ScoreResult {
    let components = scores
        .components
        .into_iter()
        .map(|c| ComponentScore {
            value: c.rounding.apply(c.value),
            id: c.id,
            name: c.name,
        })
        .collect();
    let daily_scores = scores
        .daily
        .into_iter()
        .map(|d| DailyScore {
            day: d.day,
            scores: d.scores,
            daily_total: Rounding::Integral.apply(d.total),
        })
        .collect();

    ScoreResult {
        instrument_id: descriptor.id.clone(),
        components,
        daily_scores,
        total: scores.total_rounding.apply(scores.total),
        max_score: descriptor.max_score,
        interpretation,
        warnings,
    }
}

impl InstrumentDescriptor {
    /// Validate, calculate, classify and assemble.
    ///
    /// Fails once with every hard violation joined into the message. Soft
    /// warnings never block; they are carried on the result.
    pub fn compute(&self, input: &ScoreInput) -> Result<ScoreResult, ScoringError> {
        let report = self.validate(input);
        if !report.valid {
            tracing::debug!(
                instrument = %self.id,
                violations = report.errors.len(),
                "rejected score input"
            );
            return Err(ScoringError::InvalidInput {
                instrument: self.name.clone(),
                summary: report.summary(),
                violations: report.errors,
            });
        }

        let scores = calculate(self, input)?;
        // Classified on the unrounded total.
        let interpretation = classify(scores.total, &self.bands);
        Ok(assemble(self, scores, interpretation, report.warnings))
    }
}
