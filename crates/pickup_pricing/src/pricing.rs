//! Pricing of assembled rides through the remote ML pricing service.
//!
//! One blocking request per batch: the ride features go out as a matrix and
//! the service answers with one price per ride plus a trailing "no pickup"
//! baseline. The returned prices are folded back into the rides together with
//! the savings each pickup point buys relative to that baseline. The exchange
//! itself lives in `client`; `merge` applies decoded prices and is testable
//! without a network.

mod client;
mod error;
mod merge;
mod response;


pub use client::{PricingClient, PricingConfig};
pub use error::PricingError;
