use axum::Json;
use axum::extract::Path;

use aai_scoring::{ScoreInput, ScoreResult, ValidationReport};

use crate::error::ApiError;
use crate::routes::lookup;

/// Live feedback while the form is edited. Bad values are reported in the
/// body, never as an HTTP error.
pub async fn validate_input(
    Path(id): Path<String>,
    Json(input): Json<ScoreInput>,
) -> Result<Json<ValidationReport>, ApiError> {
    Ok(Json(lookup(&id)?.validate(&input)))
}

pub async fn compute_score(
    Path(id): Path<String>,
    Json(input): Json<ScoreInput>,
) -> Result<Json<ScoreResult>, ApiError> {
    let result = lookup(&id)?.compute(&input)?;
    Ok(Json(result))
}
