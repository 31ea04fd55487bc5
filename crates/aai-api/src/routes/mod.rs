pub mod health;
pub mod instruments;
pub mod scores;

use aai_scoring::{InstrumentDescriptor, get_instrument};

use crate::error::ApiError;

fn lookup(id: &str) -> Result<&'static InstrumentDescriptor, ApiError> {
    get_instrument(id).ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))
}
