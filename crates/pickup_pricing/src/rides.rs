//! Ride assembly: pairing a walking leg with a driving leg.
//!
//! A ride covers two measured legs from the routing collaborator: the rider
//! walks from their source to a nearby pickup point, then drives from the
//! pickup point to the destination. Assembly only folds the two measurements
//! together; prices and savings are attached later by [`crate::pricing`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Geographic point, passed through untouched from the routing collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Measured time and distance for one directed leg.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub source: Location,
    pub destination: Location,
    /// Travel time in seconds.
    pub duration_secs: f64,
    /// Travel distance in metres.
    pub distance_m: f64,
}

/// A two-leg ride: walk to the pickup point, drive to the destination.
///
/// Serializes with the field names the response consumer expects
/// (`pickupPoint`, `walkTime`, ...). `total_time` and `total_distance` are
/// always the exact sums of the two legs; `price` and `savings` stay zero
/// until the ride has been priced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    pub source: Location,
    pub pickup_point: Location,
    pub destination: Location,
    pub walk_time: f64,
    pub walk_distance: f64,
    pub drive_time: f64,
    pub drive_distance: f64,
    pub total_time: f64,
    pub total_distance: f64,
    pub price: f64,
    /// Percentage saved against the no-walk baseline price.
    pub savings: f64,
}

/// The two leg lists handed to [`build_rides`] differ in length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegCountMismatch {
    pub inbound: usize,
    pub outbound: usize,
}

impl fmt::Display for LegCountMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} inbound legs cannot be paired with {} outbound legs",
            self.inbound, self.outbound
        )
    }
}

impl std::error::Error for LegCountMismatch {}

/// Combine one inbound (walk) and one outbound (drive) leg into a ride.
///
/// The caller guarantees that `inbound.destination` and `outbound.source`
/// name the same pickup point; this is not validated here.
pub fn build_ride(inbound: &RouteSummary, outbound: &RouteSummary) -> Ride {
    Ride {
        source: inbound.source,
        pickup_point: inbound.destination,
        destination: outbound.destination,
        walk_time: inbound.duration_secs,
        walk_distance: inbound.distance_m,
        drive_time: outbound.duration_secs,
        drive_distance: outbound.distance_m,
        total_time: inbound.duration_secs + outbound.duration_secs,
        total_distance: inbound.distance_m + outbound.distance_m,
        price: 0.0,
        savings: 0.0,
    }
}

/// Batch [`build_ride`], pairing legs by position.
///
/// Lists of different lengths are rejected rather than truncated to the
/// shorter one, so a dropped leg can never go unnoticed.
pub fn build_rides(
    inbounds: &[RouteSummary],
    outbounds: &[RouteSummary],
) -> Result<Vec<Ride>, LegCountMismatch> {
    if inbounds.len() != outbounds.len() {
        return Err(LegCountMismatch {
            inbound: inbounds.len(),
            outbound: outbounds.len(),
        });
    }

    Ok(inbounds
        .iter()
        .zip(outbounds)
        .map(|(inbound, outbound)| build_ride(inbound, outbound))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{drive_leg, walk_leg, DESTINATION, PICKUP_POINT, SOURCE};

    #[test]
    fn build_ride_sums_legs_and_leaves_price_unset() {
        let ride = build_ride(&walk_leg(180.0, 250.0), &drive_leg(600.0, 4200.0));

        assert_eq!(ride.source, SOURCE);
        assert_eq!(ride.pickup_point, PICKUP_POINT);
        assert_eq!(ride.destination, DESTINATION);
        assert_eq!(ride.walk_time, 180.0);
        assert_eq!(ride.walk_distance, 250.0);
        assert_eq!(ride.drive_time, 600.0);
        assert_eq!(ride.drive_distance, 4200.0);
        assert_eq!(ride.total_time, 180.0 + 600.0);
        assert_eq!(ride.total_distance, 250.0 + 4200.0);
        assert_eq!(ride.price, 0.0);
        assert_eq!(ride.savings, 0.0);
    }

    #[test]
    fn build_rides_pairs_legs_by_index() {
        let inbounds = vec![walk_leg(60.0, 80.0), walk_leg(120.0, 160.0)];
        let outbounds = vec![drive_leg(300.0, 2000.0), drive_leg(540.0, 3600.0)];

        let rides = build_rides(&inbounds, &outbounds).expect("equal-length legs");
        assert_eq!(rides.len(), 2);
        assert_eq!(rides[0].walk_time, 60.0);
        assert_eq!(rides[0].drive_time, 300.0);
        assert_eq!(rides[1].walk_time, 120.0);
        assert_eq!(rides[1].drive_time, 540.0);
    }

    #[test]
    fn build_rides_on_empty_lists_is_empty() {
        let rides = build_rides(&[], &[]).expect("empty lists pair trivially");
        assert!(rides.is_empty());
    }

    #[test]
    fn build_rides_rejects_mismatched_lengths() {
        let inbounds = vec![walk_leg(60.0, 80.0), walk_leg(120.0, 160.0)];
        let outbounds = vec![drive_leg(300.0, 2000.0)];

        let err = build_rides(&inbounds, &outbounds).expect_err("should reject mismatch");
        assert_eq!(
            err,
            LegCountMismatch {
                inbound: 2,
                outbound: 1
            }
        );
    }

    #[test]
    fn ride_serializes_with_consumer_field_names() {
        let ride = build_ride(&walk_leg(180.0, 250.0), &drive_leg(600.0, 4200.0));
        let json = serde_json::to_value(&ride).expect("ride should serialize");

        let object = json.as_object().expect("ride serializes as an object");
        for key in [
            "source",
            "pickupPoint",
            "destination",
            "walkTime",
            "walkDistance",
            "driveTime",
            "driveDistance",
            "totalTime",
            "totalDistance",
            "price",
            "savings",
        ] {
            assert!(object.contains_key(key), "missing field {}", key);
        }
        assert_eq!(object.len(), 11);
        assert_eq!(json["totalTime"], 780.0);
    }
}
