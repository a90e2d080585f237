//! HTTP adapter for the pre-trained scoring backend.
//!
//! The regression pipelines are opaque trained artifacts served elsewhere;
//! this client posts a feature record and reads back a single scalar.

use serde::{Deserialize, Serialize};

use crate::features::{FareFeatures, RentFeatures, SharedRoomFeatures};
use crate::traits::{PredictError, PricePredictor};

#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8600".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScoringClient {
    config: ScoringConfig,
    client: reqwest::blocking::Client,
}

impl ScoringClient {
    pub fn new(config: ScoringConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn predict_at<F: Serialize>(&self, model: &str, features: &F) -> Result<f64, PredictError> {
        let url = format!("{}/models/{}/predict", self.config.base_url, model);

        let response = self
            .client
            .post(url)
            .json(features)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<PredictResponse>())
            .map_err(|err| PredictError::new(format!("{} model: {}", model, err)))?;

        Ok(response.prediction)
    }
}

impl PricePredictor<RentFeatures> for ScoringClient {
    fn predict(&self, features: &RentFeatures) -> Result<f64, PredictError> {
        self.predict_at("rent", features)
    }
}

impl PricePredictor<SharedRoomFeatures> for ScoringClient {
    fn predict(&self, features: &SharedRoomFeatures) -> Result<f64, PredictError> {
        self.predict_at("shared-room", features)
    }
}

impl PricePredictor<FareFeatures> for ScoringClient {
    fn predict(&self, features: &FareFeatures) -> Result<f64, PredictError> {
        self.predict_at("fare", features)
    }
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    prediction: f64,
}
