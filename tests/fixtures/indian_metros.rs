//! Real Indian metro coordinates for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. City names line up with the
//! seeded food cost table.

use living_cost_planner::features::{
    Furnishing, GenderPolicy, Location, PropertyType, RentalDetails, SharedRoomDetails,
    TenantPreference, TripRequest,
};

/// A named place with coordinates.
#[derive(Debug, Clone)]
pub struct Place {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn location(&self) -> Location {
        Location::new(self.lat, self.lng)
    }
}

// ============================================================================
// Metro centres (cities present in the food cost table)
// ============================================================================

pub const METROS: &[Place] = &[
    Place::new("New Delhi", 28.6139, 77.2090),
    Place::new("Mumbai", 19.0760, 72.8777),
    Place::new("Bangalore", 12.9716, 77.5946),
    Place::new("Kolkata", 22.5726, 88.3639),
    Place::new("Hyderabad", 17.3850, 78.4867),
    Place::new("Pune", 18.5204, 73.8567),
];

// ============================================================================
// Delhi localities (good for pickup/dropoff endpoints)
// ============================================================================

pub const DELHI_AREAS: &[Place] = &[
    Place::new("South Delhi", 28.5494, 77.2001),
    Place::new("Connaught Place", 28.6315, 77.2167),
    Place::new("Hauz Khas", 28.5535, 77.1926),
    Place::new("Dwarka", 28.5921, 77.0460),
    Place::new("Saket", 28.5245, 77.2066),
];

pub fn place(name: &str) -> &'static Place {
    METROS
        .iter()
        .chain(DELHI_AREAS.iter())
        .find(|place| place.name == name)
        .unwrap_or_else(|| panic!("unknown fixture place: {}", name))
}

/// A typical two-bedroom rental in the given city.
pub fn rental_in(city: &str) -> RentalDetails {
    RentalDetails {
        bhk: 2,
        property_type: PropertyType::Flat,
        city: city.to_string(),
        location: place_or_delhi(city),
        furnishing: Furnishing::SemiFurnished,
        bathrooms: 2,
        tenant_preference: TenantPreference::Bachelors,
        carpet_area_sqft: 1500,
    }
}

/// A typical shared room in the given city.
pub fn shared_room_in(city: &str, food_included: bool) -> SharedRoomDetails {
    SharedRoomDetails {
        gender_policy: GenderPolicy::Coed,
        city: city.to_string(),
        food_included,
        wifi_available: true,
        ac_available: false,
        food_available: true,
    }
}

/// A commute between two Delhi localities.
pub fn delhi_commute(passenger_count: u8) -> TripRequest {
    TripRequest {
        pickup: place("South Delhi").location(),
        dropoff: place("Connaught Place").location(),
        passenger_count,
    }
}

fn place_or_delhi(city: &str) -> Location {
    METROS
        .iter()
        .find(|place| place.name.eq_ignore_ascii_case(city))
        .map(Place::location)
        .unwrap_or_else(|| place("New Delhi").location())
}
