//! Static monthly food allowance per city.
//!
//! Fixed figures (rupees per month, per person), not model output. Unknown
//! cities fall back to a flat default.

use std::collections::HashMap;

/// Allowance for cities missing from the table.
const DEFAULT_FOOD_COST: u32 = 3000;

const SEED_COSTS: &[(&str, u32)] = &[
    ("new delhi", 7000),
    ("mumbai", 8000),
    ("bangalore", 7500),
    ("kolkata", 6000),
    ("hyderabad", 6500),
    ("pune", 7000),
];

/// Case-insensitive city → monthly food allowance lookup.
#[derive(Debug, Clone)]
pub struct FoodCostTable {
    costs: HashMap<String, u32>,
    default_cost: u32,
}

impl Default for FoodCostTable {
    fn default() -> Self {
        Self::from_entries(SEED_COSTS.iter().copied(), DEFAULT_FOOD_COST)
    }
}

impl FoodCostTable {
    /// Build a table from custom entries. Keys are normalized to lower case.
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, u32)>,
        default_cost: u32,
    ) -> Self {
        let costs = entries
            .into_iter()
            .map(|(city, cost)| (city.to_lowercase(), cost))
            .collect();
        Self {
            costs,
            default_cost,
        }
    }

    /// Monthly allowance for a city, or the default when unknown.
    pub fn lookup(&self, city: &str) -> u32 {
        self.costs
            .get(&city.to_lowercase())
            .copied()
            .unwrap_or(self.default_cost)
    }

    /// Known city names, sorted. The form layer uses this to populate its
    /// city selector.
    pub fn cities(&self) -> Vec<&str> {
        let mut cities: Vec<&str> = self.costs.keys().map(String::as_str).collect();
        cities.sort_unstable();
        cities
    }
}
