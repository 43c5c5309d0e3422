use crate::rides::Ride;

use super::error::PricingError;

/// Fold decoded prices into the ride records.
///
/// `prices` must hold one price per ride followed by the no-walk baseline.
/// Savings are the percentage saved against that baseline; a zero baseline
/// yields zero savings instead of dividing by zero. The length check runs
/// before any ride is touched, so a failed merge leaves every ride unpriced.
pub(super) fn apply_prices(rides: &mut [Ride], prices: &[f64]) -> Result<(), PricingError> {
    let expected = rides.len() + 1;
    if prices.len() != expected {
        return Err(PricingError::PriceCountMismatch {
            expected,
            received: prices.len(),
        });
    }

    let baseline = prices[rides.len()];
    for (ride, &price) in rides.iter_mut().zip(prices) {
        ride.price = price;
        ride.savings = if baseline == 0.0 {
            0.0
        } else {
            100.0 * (baseline - price) / baseline
        };
    }

    Ok(())
}
