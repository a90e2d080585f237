//! Domain records and the feature schemas handed to the price models.
//!
//! The feature structs are the wire contract the regression pipelines were
//! fitted on: field names and category labels must match the training data
//! exactly, so category enums carry their fitted label and serde renames map
//! struct fields onto the training column names.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A resolved coordinate pair.
///
/// Produced by successful geocoding or direct user entry. Absence of a
/// location is always `Option`/`Result`, never a sentinel value; (0.0, 0.0)
/// is a legitimate point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Rental property type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Flat,
    Builder,
    Apartment,
    Studio,
    Penthouse,
    House,
    Villa,
}

impl PropertyType {
    /// Category label the rent pipeline was trained on.
    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Flat => "Flat",
            PropertyType::Builder => "Builder",
            PropertyType::Apartment => "Apartment",
            PropertyType::Studio => "Studio",
            PropertyType::Penthouse => "Penthouse",
            PropertyType::House => "House",
            PropertyType::Villa => "Villa",
        }
    }
}

/// Furnishing state of a rental unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Furnishing {
    SemiFurnished,
    Unfurnished,
    Furnished,
}

impl Furnishing {
    pub fn label(self) -> &'static str {
        match self {
            Furnishing::SemiFurnished => "Semi-Furnished",
            Furnishing::Unfurnished => "Unfurnished",
            Furnishing::Furnished => "Furnished",
        }
    }
}

/// Tenant type the landlord accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantPreference {
    Bachelors,
    BachelorsFamily,
}

impl TenantPreference {
    pub fn label(self) -> &'static str {
        match self {
            TenantPreference::Bachelors => "Bachelors",
            TenantPreference::BachelorsFamily => "Bachelors/Family",
        }
    }
}

/// Gender policy of a shared-room (paying-guest) arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderPolicy {
    Boys,
    Girls,
    Coed,
}

impl GenderPolicy {
    pub fn label(self) -> &'static str {
        match self {
            GenderPolicy::Boys => "Boys",
            GenderPolicy::Girls => "Girls",
            GenderPolicy::Coed => "Coed",
        }
    }
}

/// Form input rejected at the boundary, before any model is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },
    #[error("city must not be empty")]
    EmptyCity,
}

fn check_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(())
}

/// Details of a full rental unit.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalDetails {
    pub bhk: u8,
    pub property_type: PropertyType,
    pub city: String,
    pub location: Location,
    pub furnishing: Furnishing,
    pub bathrooms: u8,
    pub tenant_preference: TenantPreference,
    pub carpet_area_sqft: u32,
}

impl RentalDetails {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.city.trim().is_empty() {
            return Err(ValidationError::EmptyCity);
        }
        check_range("bhk", i64::from(self.bhk), 1, 5)?;
        check_range("bathrooms", i64::from(self.bathrooms), 1, 5)?;
        check_range(
            "carpet_area_sqft",
            i64::from(self.carpet_area_sqft),
            100,
            5000,
        )?;
        Ok(())
    }

    pub fn to_features(&self) -> RentFeatures {
        RentFeatures {
            bhk: self.bhk,
            property_type: self.property_type.label(),
            latitude: self.location.latitude,
            longitude: self.location.longitude,
            city: self.city.clone(),
            furnishing: self.furnishing.label(),
            bathrooms: self.bathrooms,
            tenant_preferred: self.tenant_preference.label(),
            carpet_area: self.carpet_area_sqft,
        }
    }
}

/// Details of a shared-room (paying-guest) arrangement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedRoomDetails {
    pub gender_policy: GenderPolicy,
    pub city: String,
    /// Whether food is part of the package price. Gates the food allowance.
    pub food_included: bool,
    pub wifi_available: bool,
    pub ac_available: bool,
    pub food_available: bool,
}

impl SharedRoomDetails {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.city.trim().is_empty() {
            return Err(ValidationError::EmptyCity);
        }
        Ok(())
    }

    pub fn to_features(&self) -> SharedRoomFeatures {
        SharedRoomFeatures {
            gender: self.gender_policy.label(),
            city: self.city.clone(),
            food_included: if self.food_included {
                "Food Included"
            } else {
                "Food Charge extra"
            },
            wifi_available: if self.wifi_available {
                "Wifi Available"
            } else {
                "Wifi Not Available"
            },
            ac_available: if self.ac_available {
                "AC Available"
            } else {
                "AC Not Available"
            },
            food_available: if self.food_available {
                "Food Available"
            } else {
                "Food Not Available"
            },
        }
    }
}

/// Accommodation the user is pricing, as a tagged variant per mode.
#[derive(Debug, Clone, PartialEq)]
pub enum AccommodationMode {
    Rental(RentalDetails),
    SharedRoom(SharedRoomDetails),
}

impl AccommodationMode {
    pub fn city(&self) -> &str {
        match self {
            AccommodationMode::Rental(details) => &details.city,
            AccommodationMode::SharedRoom(details) => &details.city,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            AccommodationMode::Rental(details) => details.validate(),
            AccommodationMode::SharedRoom(details) => details.validate(),
        }
    }
}

/// A commute trip with both endpoints resolved.
///
/// Only constructed when both endpoints geocoded successfully; fare
/// estimation is skipped otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    pub pickup: Location,
    pub dropoff: Location,
    pub passenger_count: u8,
}

impl TripRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range("passenger_count", i64::from(self.passenger_count), 1, 6)
    }

    pub fn to_features(&self) -> FareFeatures {
        FareFeatures {
            pickup_longitude: self.pickup.longitude,
            pickup_latitude: self.pickup.latitude,
            dropoff_longitude: self.dropoff.longitude,
            dropoff_latitude: self.dropoff.latitude,
            passenger_count: self.passenger_count,
        }
    }
}

/// Feature record for the rent pipeline. Field names match the training
/// columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentFeatures {
    #[serde(rename = "BHK")]
    pub bhk: u8,
    #[serde(rename = "Type")]
    pub property_type: &'static str,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "City")]
    pub city: String,
    pub furnishing: &'static str,
    #[serde(rename = "Bathroom")]
    pub bathrooms: u8,
    pub tenant_preferred: &'static str,
    pub carpet_area: u32,
}

/// Feature record for the shared-room pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedRoomFeatures {
    pub gender: &'static str,
    pub city: String,
    pub food_included: &'static str,
    pub wifi_available: &'static str,
    pub ac_available: &'static str,
    pub food_available: &'static str,
}

/// Feature record for the trip-fare pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareFeatures {
    pub pickup_longitude: f64,
    pub pickup_latitude: f64,
    pub dropoff_longitude: f64,
    pub dropoff_latitude: f64,
    pub passenger_count: u8,
}
