//! Feature vectors for the remote pricing model.
//!
//! The model scores each ride from a fixed tuple of eight features computed
//! by an upstream collaborator. This module carries the tuple and encodes the
//! request payload; it never derives feature values itself.

use serde::{Deserialize, Serialize};

/// Input features for pricing one ride. One tuple per ride, in ride order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MlPricingData {
    pub time_in_seconds: f64,
    pub distance_in_meters: f64,
    pub time_to_historic_ratio: f64,
    pub time_to_no_traffic_ratio: f64,
    pub day_of_week_sin: f64,
    pub day_of_week_cos: f64,
    pub time_of_day_sin: f64,
    pub time_of_day_cos: f64,
}

impl MlPricingData {
    /// Flatten into the feature order the model was trained on.
    pub fn to_feature_vector(&self) -> [f64; 8] {
        [
            self.time_in_seconds,
            self.distance_in_meters,
            self.time_to_historic_ratio,
            self.time_to_no_traffic_ratio,
            self.day_of_week_sin,
            self.day_of_week_cos,
            self.time_of_day_sin,
            self.time_of_day_cos,
        ]
    }
}

/// Request payload shape: `{"data": [[f64; 8], ...]}`.
#[derive(Serialize, Deserialize)]
struct FeatureMatrix {
    data: Vec<[f64; 8]>,
}

/// Encode the feature tuples as the pricing request body.
pub fn encode_features(pricing_data: &[MlPricingData]) -> Result<String, serde_json::Error> {
    let matrix = FeatureMatrix {
        data: pricing_data
            .iter()
            .map(MlPricingData::to_feature_vector)
            .collect(),
    };
    serde_json::to_string(&matrix)
}
