use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

use crate::features::{encode_features, MlPricingData};
use crate::rides::Ride;

use super::error::PricingError;
use super::merge::apply_prices;
use super::response::PricingResponse;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Requests that never reached the service are reissued this many times.
const TRANSPORT_RETRIES: usize = 1;

/// Where and how to reach the pricing service.
#[derive(Clone, Debug)]
pub struct PricingConfig {
    /// Full URL of the pricing endpoint, e.g. `http://pricing.internal/invocations`.
    pub endpoint_url: String,
    /// Upper bound on one request/response exchange.
    pub timeout: Duration,
}

impl PricingConfig {
    /// Configuration for the given endpoint with the default timeout.
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Thin blocking HTTP client for the pricing service.
#[derive(Clone, Debug)]
pub struct PricingClient {
    client: Client,
    endpoint: String,
}

impl PricingClient {
    /// Create a client for the configured endpoint.
    pub fn new(config: &PricingConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to build pricing client");
        Self {
            client,
            endpoint: config.endpoint_url.trim_end_matches('/').to_string(),
        }
    }

    /// Price every ride in one exchange with the pricing service.
    ///
    /// Sends one feature vector per ride, then folds the returned prices and
    /// baseline-relative savings back into the rides. Pricing is
    /// all-or-nothing: any error drops the batch unpriced and tells the
    /// caller which stage failed.
    ///
    /// An empty batch returns immediately without calling the service.
    pub fn price_rides(
        &self,
        mut rides: Vec<Ride>,
        pricing_data: &[MlPricingData],
    ) -> Result<Vec<Ride>, PricingError> {
        if rides.is_empty() {
            return Ok(rides);
        }
        if pricing_data.len() != rides.len() {
            return Err(PricingError::FeatureCountMismatch {
                rides: rides.len(),
                features: pricing_data.len(),
            });
        }

        let body = encode_features(pricing_data).map_err(PricingError::Encoding)?;
        log::debug!("pricing request to {}: {}", self.endpoint, body);

        let response = self.post_with_retry(&body)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PricingError::Api(status.to_string()));
        }

        let parsed: PricingResponse = response.json().map_err(PricingError::Json)?;
        log::debug!("pricing response carried {} prices", parsed.prices.len());

        apply_prices(&mut rides, &parsed.prices)?;
        Ok(rides)
    }

    /// Issue the POST, reissuing once when the request never reached the wire.
    fn post_with_retry(&self, body: &str) -> Result<Response, PricingError> {
        let mut attempt = 0;
        loop {
            let result = self
                .client
                .post(&self.endpoint)
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_string())
                .send();

            match result {
                Ok(response) => return Ok(response),
                Err(err) if err.is_connect() && attempt < TRANSPORT_RETRIES => {
                    log::warn!("pricing request failed to connect, retrying: {}", err);
                    attempt += 1;
                }
                Err(err) => return Err(PricingError::Http(err)),
            }
        }
    }
}
