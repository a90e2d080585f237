//! living-cost-planner core
//!
//! Estimation pipeline turning accommodation and travel input into a
//! combined monthly living-cost figure.

pub mod traits;
pub mod features;
pub mod food;
pub mod geocode;
pub mod scoring;
pub mod estimator;
