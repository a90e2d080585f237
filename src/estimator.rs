//! Monthly living-cost estimation.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::features::{
    AccommodationMode, FareFeatures, RentFeatures, SharedRoomFeatures, TripRequest,
    ValidationError,
};
use crate::food::FoodCostTable;
use crate::traits::{PredictError, PricePredictor};

#[derive(Debug, Clone)]
pub struct EstimateOptions {
    /// Multiplier applied to the raw fare model output. The fare pipeline was
    /// fitted on per-trip private-transport data; the scaled figure is the
    /// monthly commute estimate.
    pub fare_scale: f64,
}

impl Default for EstimateOptions {
    fn default() -> Self {
        Self { fare_scale: 20.0 }
    }
}

/// Pipeline stage a prediction failure occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionStage {
    Rent,
    SharedRoom,
    Fare,
}

impl fmt::Display for PredictionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PredictionStage::Rent => "rent",
            PredictionStage::SharedRoom => "shared-room",
            PredictionStage::Fare => "fare",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
    /// A model invocation failed. The whole attempt is aborted; no partial
    /// total is ever produced.
    #[error("{stage} prediction failed: {source}")]
    Prediction {
        stage: PredictionStage,
        source: PredictError,
    },
}

/// One completed estimation. Immutable snapshot; a new trigger produces a
/// fresh result.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimationResult {
    pub housing_cost: f64,
    pub food_cost: u32,
    /// `None` when no trip was resolved; contributes 0 to the total.
    pub fare_cost: Option<f64>,
    pub extra_cost: f64,
    pub total: f64,
}

impl EstimationResult {
    /// Whole-rupee housing figure, truncated for display.
    pub fn housing_display(&self) -> i64 {
        self.housing_cost as i64
    }

    pub fn fare_display(&self) -> Option<i64> {
        self.fare_cost.map(|fare| fare as i64)
    }

    pub fn total_display(&self) -> i64 {
        self.total as i64
    }
}

/// Orchestrates the three price models and the food table into one total.
///
/// All collaborators are injected at construction; the estimator holds no
/// global state and each call is an independent deterministic attempt.
#[derive(Debug, Clone)]
pub struct Estimator<R, S, F> {
    rent_model: R,
    shared_room_model: S,
    fare_model: F,
    food_costs: FoodCostTable,
    options: EstimateOptions,
}

impl<R, S, F> Estimator<R, S, F>
where
    R: PricePredictor<RentFeatures>,
    S: PricePredictor<SharedRoomFeatures>,
    F: PricePredictor<FareFeatures>,
{
    pub fn new(
        rent_model: R,
        shared_room_model: S,
        fare_model: F,
        food_costs: FoodCostTable,
        options: EstimateOptions,
    ) -> Self {
        Self {
            rent_model,
            shared_room_model,
            fare_model,
            food_costs,
            options,
        }
    }

    pub fn estimate(
        &self,
        mode: &AccommodationMode,
        trip: Option<&TripRequest>,
        extra_cost: f64,
    ) -> Result<EstimationResult, EstimateError> {
        mode.validate()?;
        if let Some(trip) = trip {
            trip.validate()?;
        }

        let (housing_cost, food_cost) = match mode {
            AccommodationMode::Rental(details) => {
                let rent = self
                    .rent_model
                    .predict(&details.to_features())
                    .map_err(|source| EstimateError::Prediction {
                        stage: PredictionStage::Rent,
                        source,
                    })?;

                // Food allowance always applies to a rental.
                (rent, self.food_costs.lookup(&details.city))
            }
            AccommodationMode::SharedRoom(details) => {
                let price = self
                    .shared_room_model
                    .predict(&details.to_features())
                    .map_err(|source| EstimateError::Prediction {
                        stage: PredictionStage::SharedRoom,
                        source,
                    })?;

                let food_cost = if details.food_included {
                    0
                } else {
                    self.food_costs.lookup(&details.city)
                };

                (price, food_cost)
            }
        };

        let fare_cost = match trip {
            Some(trip) => {
                let raw = self
                    .fare_model
                    .predict(&trip.to_features())
                    .map_err(|source| EstimateError::Prediction {
                        stage: PredictionStage::Fare,
                        source,
                    })?;

                Some(raw * self.options.fare_scale)
            }
            None => None,
        };

        let total = housing_cost + f64::from(food_cost) + fare_cost.unwrap_or(0.0) + extra_cost;

        debug!(
            housing_cost,
            food_cost,
            ?fare_cost,
            extra_cost,
            total,
            "estimate complete"
        );

        Ok(EstimationResult {
            housing_cost,
            food_cost,
            fare_cost,
            extra_cost,
            total,
        })
    }
}
