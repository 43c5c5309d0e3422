use serde::Deserialize;

/// Wire shape of the pricing service reply.
///
/// `prices` holds one price per submitted feature vector, followed by one
/// trailing baseline price for the same trip without any walk to a pickup
/// point. The baseline is only used to compute savings.
#[derive(Debug, Deserialize)]
pub(super) struct PricingResponse {
    pub(super) prices: Vec<f64>,
}
