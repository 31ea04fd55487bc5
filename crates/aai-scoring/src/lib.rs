//! aai-scoring
//!
//! Clinical severity-scoring engine. Pure and synchronous, no I/O.
//! Each instrument is a static [`InstrumentDescriptor`]; one generic
//! pipeline validates, calculates, classifies and assembles results for
//! all of them.

pub mod bands;
pub mod calculator;
pub mod descriptor;
pub mod error;
pub mod input;
pub mod instruments;
pub mod result;
pub mod scoring;
pub mod validate;

pub use bands::{Severity, classify};
pub use descriptor::InstrumentDescriptor;
pub use error::{DescriptorError, ScoringError};
pub use input::ScoreInput;
pub use result::ScoreResult;
pub use validate::ValidationReport;

/// Return all registered instruments.
pub fn all_instruments() -> Vec<&'static InstrumentDescriptor> {
    vec![&*instruments::scorad::SCORAD, &*instruments::uas7::UAS7]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<&'static InstrumentDescriptor> {
    all_instruments().into_iter().find(|i| i.id == id)
}
