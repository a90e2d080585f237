//! OpenCage-style forward geocoding adapter.

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::features::{Location, TripRequest};
use crate::traits::Geocoder;

#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl GeocoderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://api.opencagedata.com".to_string(),
            api_key: api_key.into(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("no results found for location: {0}")]
    NotFound(String),
    #[error("geocoding request failed with status code {0}")]
    Status(u16),
    #[error("error fetching coordinates: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Blocking client for a forward-geocoding endpoint.
///
/// One lookup per call; no retries, caching, or rate limiting.
#[derive(Debug, Clone)]
pub struct OpenCageClient {
    config: GeocoderConfig,
    client: reqwest::blocking::Client,
}

impl OpenCageClient {
    pub fn new(config: GeocoderConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl Geocoder for OpenCageClient {
    fn resolve(&self, place: &str) -> Result<Location, GeoError> {
        let url = format!("{}/geocode/v1/json", self.config.base_url);

        let response = self
            .client
            .get(url)
            .query(&[("q", place), ("key", self.config.api_key.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeoError::Status(status.as_u16()));
        }

        let body = response.json::<GeocodeResponse>()?;
        match body.results.into_iter().next() {
            Some(result) => Ok(Location::new(result.geometry.lat, result.geometry.lng)),
            None => Err(GeoError::NotFound(place.to_string())),
        }
    }
}

/// Geocode both trip endpoints, yielding `None` when either fails.
///
/// Fare estimation is optional downstream; a failed lookup must skip the
/// trip rather than substitute a sentinel coordinate.
pub fn resolve_trip<G: Geocoder>(
    geocoder: &G,
    pickup: &str,
    dropoff: &str,
    passenger_count: u8,
) -> Option<TripRequest> {
    let pickup_location = match geocoder.resolve(pickup) {
        Ok(location) => location,
        Err(err) => {
            warn!("could not geocode pickup '{}': {}", pickup, err);
            return None;
        }
    };

    let dropoff_location = match geocoder.resolve(dropoff) {
        Ok(location) => location,
        Err(err) => {
            warn!("could not geocode dropoff '{}': {}", dropoff, err);
            return None;
        }
    };

    Some(TripRequest {
        pickup: pickup_location,
        dropoff: dropoff_location,
        passenger_count,
    })
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}
