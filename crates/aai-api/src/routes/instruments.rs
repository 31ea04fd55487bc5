use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use aai_scoring::{InstrumentDescriptor, ScoreInput, all_instruments};

use crate::error::ApiError;
use crate::routes::lookup;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
    max_score: f64,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id.clone(),
            name: i.name.clone(),
            max_score: i.max_score,
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<&'static InstrumentDescriptor>, ApiError> {
    Ok(Json(lookup(&id)?))
}

/// All-zero input the wizard starts from.
pub async fn empty_input(Path(id): Path<String>) -> Result<Json<ScoreInput>, ApiError> {
    Ok(Json(lookup(&id)?.create_empty_input()))
}
