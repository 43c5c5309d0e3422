use std::fmt;

/// Errors encountered while pricing a ride batch.
///
/// Pricing is all-or-nothing: whichever variant is returned, no ride from the
/// batch has been partially priced.
#[derive(Debug)]
pub enum PricingError {
    /// The feature tuples could not be serialized.
    Encoding(serde_json::Error),
    /// The request could not be sent or the response body could not be read.
    Http(reqwest::Error),
    /// The response body was not the expected JSON shape.
    Json(reqwest::Error),
    /// The service answered with a non-success HTTP status.
    Api(String),
    /// The `prices` array did not hold one price per ride plus the baseline.
    PriceCountMismatch { expected: usize, received: usize },
    /// The caller supplied a different number of feature tuples than rides.
    FeatureCountMismatch { rides: usize, features: usize },
}

impl From<reqwest::Error> for PricingError {
    fn from(err: reqwest::Error) -> Self {
        PricingError::Http(err)
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::Encoding(err) => write!(f, "failed to encode pricing features: {}", err),
            PricingError::Http(err) => write!(f, "pricing request failed: {}", err),
            PricingError::Json(err) => write!(f, "failed to decode pricing response: {}", err),
            PricingError::Api(status) => write!(f, "pricing service returned {}", status),
            PricingError::PriceCountMismatch { expected, received } => write!(
                f,
                "pricing service returned {} prices, expected {}",
                received, expected
            ),
            PricingError::FeatureCountMismatch { rides, features } => write!(
                f,
                "{} rides cannot be priced with {} feature tuples",
                rides, features
            ),
        }
    }
}

impl std::error::Error for PricingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PricingError::Encoding(err) => Some(err),
            PricingError::Http(err) | PricingError::Json(err) => Some(err),
            _ => None,
        }
    }
}
