//! Test helpers for common test setup and fixtures.
//!
//! This module provides shared fixtures to reduce duplication across test
//! files.

use crate::features::MlPricingData;
use crate::rides::{Location, RouteSummary};

/// Rider source in central Berlin, used across test files for consistency.
pub const SOURCE: Location = Location {
    latitude: 52.5200,
    longitude: 13.4050,
};

/// Pickup point a short walk from [`SOURCE`].
pub const PICKUP_POINT: Location = Location {
    latitude: 52.5232,
    longitude: 13.4113,
};

/// Drop-off across town.
pub const DESTINATION: Location = Location {
    latitude: 52.4800,
    longitude: 13.3250,
};

/// Walking leg from [`SOURCE`] to [`PICKUP_POINT`].
pub fn walk_leg(duration_secs: f64, distance_m: f64) -> RouteSummary {
    RouteSummary {
        source: SOURCE,
        destination: PICKUP_POINT,
        duration_secs,
        distance_m,
    }
}

/// Driving leg from [`PICKUP_POINT`] to [`DESTINATION`].
pub fn drive_leg(duration_secs: f64, distance_m: f64) -> RouteSummary {
    RouteSummary {
        source: PICKUP_POINT,
        destination: DESTINATION,
        duration_secs,
        distance_m,
    }
}

/// Feature tuple for a trip of the given time and distance, with the
/// remaining features fixed at plausible weekday-morning values.
pub fn sample_features(time_in_seconds: f64, distance_in_meters: f64) -> MlPricingData {
    MlPricingData {
        time_in_seconds,
        distance_in_meters,
        time_to_historic_ratio: 1.05,
        time_to_no_traffic_ratio: 1.30,
        day_of_week_sin: 0.4339,
        day_of_week_cos: -0.9010,
        time_of_day_sin: 0.2588,
        time_of_day_cos: 0.9659,
    }
}
