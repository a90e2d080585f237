//! Stub prediction backends and geocoders for estimator tests.

use std::collections::HashMap;

use living_cost_planner::features::{FareFeatures, Location, RentFeatures, SharedRoomFeatures};
use living_cost_planner::geocode::GeoError;
use living_cost_planner::traits::{Geocoder, PredictError, PricePredictor};

/// Returns the same scalar for every feature record.
#[derive(Debug, Clone)]
pub struct FixedPrice(pub f64);

impl PricePredictor<RentFeatures> for FixedPrice {
    fn predict(&self, _features: &RentFeatures) -> Result<f64, PredictError> {
        Ok(self.0)
    }
}

impl PricePredictor<SharedRoomFeatures> for FixedPrice {
    fn predict(&self, _features: &SharedRoomFeatures) -> Result<f64, PredictError> {
        Ok(self.0)
    }
}

impl PricePredictor<FareFeatures> for FixedPrice {
    fn predict(&self, _features: &FareFeatures) -> Result<f64, PredictError> {
        Ok(self.0)
    }
}

/// Always fails, the way a pipeline does when a category is unknown to its
/// encoder.
#[derive(Debug, Clone)]
pub struct FailingModel(pub &'static str);

impl PricePredictor<RentFeatures> for FailingModel {
    fn predict(&self, _features: &RentFeatures) -> Result<f64, PredictError> {
        Err(PredictError::new(self.0))
    }
}

impl PricePredictor<SharedRoomFeatures> for FailingModel {
    fn predict(&self, _features: &SharedRoomFeatures) -> Result<f64, PredictError> {
        Err(PredictError::new(self.0))
    }
}

impl PricePredictor<FareFeatures> for FailingModel {
    fn predict(&self, _features: &FareFeatures) -> Result<f64, PredictError> {
        Err(PredictError::new(self.0))
    }
}

/// Scripted geocoder: listed places resolve, everything else is a
/// zero-result lookup.
#[derive(Debug, Clone, Default)]
pub struct TableGeocoder {
    places: HashMap<String, Location>,
}

impl TableGeocoder {
    pub fn with(mut self, name: &str, location: Location) -> Self {
        self.places.insert(name.to_string(), location);
        self
    }
}

impl Geocoder for TableGeocoder {
    fn resolve(&self, place: &str) -> Result<Location, GeoError> {
        self.places
            .get(place)
            .copied()
            .ok_or_else(|| GeoError::NotFound(place.to_string()))
    }
}
