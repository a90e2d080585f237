//! Core domain traits for the cost planner.
//!
//! These are intentionally minimal. Concrete apps wire in real backends;
//! test suites substitute stubs.

use thiserror::Error;

use crate::features::Location;
use crate::geocode::GeoError;

/// A pre-trained price model exposed behind a uniform capability.
///
/// `F` is the feature schema the model was fitted on. A given feature record
/// must always yield the same scalar for the same trained artifact.
pub trait PricePredictor<F> {
    fn predict(&self, features: &F) -> Result<f64, PredictError>;
}

/// Failure surfaced by a prediction backend (malformed record, category
/// unknown to the encoder, transport fault).
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct PredictError {
    pub message: String,
}

impl PredictError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Resolves a free-text place name to coordinates.
pub trait Geocoder {
    fn resolve(&self, place: &str) -> Result<Location, GeoError>;
}
