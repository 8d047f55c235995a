//! Travel estimation across car, train and bus
//!
//! One driving route is fetched and reused for every mode. Train and bus
//! estimates keep its distance and geometry and only scale the duration,
//! annotated with the lines the transit knowledge table suggests. This is a
//! heuristic, not a transit planner.

use std::sync::Arc;

use domain::entities::{RouteInfo, TravelModes};
use domain::transit_knowledge::{TransitEntry, TransitKnowledge};
use domain::value_objects::{GeoLocation, RouteProfile};
use tracing::{debug, instrument};

use crate::ports::RoutingPort;

/// Train duration relative to the driving duration
pub const TRAIN_DURATION_FACTOR: f64 = 0.75;

/// Bus duration relative to the driving duration
pub const BUS_DURATION_FACTOR: f64 = 1.5;

/// Derive all three travel modes from a single base route
#[must_use]
pub fn derive_travel_modes(base: RouteInfo, entry: &TransitEntry) -> TravelModes {
    let train = base.scaled(TRAIN_DURATION_FACTOR, entry.train_lines.clone());
    let bus = base.scaled(BUS_DURATION_FACTOR, Some(entry.lines.clone()));
    TravelModes {
        car: base,
        train,
        bus,
    }
}

/// Computes [`TravelModes`] between the user and a destination
#[derive(Clone)]
pub struct TravelEstimator {
    routing: Arc<dyn RoutingPort>,
    knowledge: Arc<TransitKnowledge>,
}

impl std::fmt::Debug for TravelEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TravelEstimator").finish_non_exhaustive()
    }
}

impl TravelEstimator {
    /// Create an estimator over a routing port and a knowledge table
    pub fn new(routing: Arc<dyn RoutingPort>, knowledge: Arc<TransitKnowledge>) -> Self {
        Self { routing, knowledge }
    }

    /// Estimate car, train and bus travel to `destination`
    ///
    /// Never fails: a missing base route yields the sentinel for all modes,
    /// still carrying the suggested lines.
    #[instrument(skip(self))]
    pub async fn estimate(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
        destination_id: Option<&str>,
    ) -> TravelModes {
        let base = self
            .routing
            .fetch_route(origin, destination, RouteProfile::Car)
            .await;
        let entry = self.knowledge.lookup(destination_id);

        debug!(
            distance_km = base.distance_km,
            duration_minutes = base.duration_minutes,
            unavailable = base.is_unavailable(),
            "Base route resolved"
        );

        derive_travel_modes(base, entry)
    }
}

#[cfg(test)]
mod tests {
    use domain::entities::RouteGeometry;
    use proptest::prelude::*;

    use super::*;
    use crate::ports::MockRoutingPort;

    fn base_route(distance_km: f64, duration_minutes: u32) -> RouteInfo {
        RouteInfo {
            distance_km,
            duration_minutes,
            geometry: Some(RouteGeometry::new(vec![
                [-46.7265, -23.5934],
                [-46.6559, -23.5614],
            ])),
            lines: None,
        }
    }

    fn estimator(mock: MockRoutingPort) -> TravelEstimator {
        TravelEstimator::new(Arc::new(mock), Arc::new(TransitKnowledge::sao_paulo()))
    }

    #[tokio::test]
    async fn scales_durations_from_base_route() {
        let mut mock = MockRoutingPort::new();
        mock.expect_fetch_route()
            .times(1)
            .returning(|_, _, _| base_route(12.3, 40));

        let modes = estimator(mock)
            .estimate(
                &GeoLocation::new_unchecked(-23.5934, -46.7265),
                &GeoLocation::new_unchecked(-23.5614, -46.6559),
                Some("paulista"),
            )
            .await;

        assert_eq!(modes.car.duration_minutes, 40);
        assert_eq!(modes.train.duration_minutes, 30);
        assert_eq!(modes.bus.duration_minutes, 60);
        assert!((modes.train.distance_km - 12.3).abs() < f64::EPSILON);
        assert!((modes.bus.distance_km - 12.3).abs() < f64::EPSILON);
        assert!(modes.car.lines.is_none());
    }

    #[tokio::test]
    async fn requests_car_profile_only() {
        let mut mock = MockRoutingPort::new();
        mock.expect_fetch_route()
            .withf(|_, _, profile| *profile == RouteProfile::Car)
            .times(1)
            .returning(|_, _, _| base_route(5.0, 10));

        let _ = estimator(mock)
            .estimate(
                &GeoLocation::sao_paulo_center(),
                &GeoLocation::new_unchecked(-23.5874, -46.6576),
                None,
            )
            .await;
    }

    #[tokio::test]
    async fn geometry_is_shared_by_all_modes() {
        let mut mock = MockRoutingPort::new();
        mock.expect_fetch_route()
            .returning(|_, _, _| base_route(3.4, 12));

        let modes = estimator(mock)
            .estimate(
                &GeoLocation::sao_paulo_center(),
                &GeoLocation::new_unchecked(-23.5417, -46.6297),
                Some("mercadão"),
            )
            .await;

        assert_eq!(modes.car.geometry, modes.train.geometry);
        assert_eq!(modes.car.geometry, modes.bus.geometry);
    }

    #[tokio::test]
    async fn missing_route_keeps_lines_from_fallback() {
        let mut mock = MockRoutingPort::new();
        mock.expect_fetch_route()
            .returning(|_, _, _| RouteInfo::unavailable());

        let modes = estimator(mock)
            .estimate(
                &GeoLocation::sao_paulo_center(),
                &GeoLocation::new_unchecked(-23.6, -46.7),
                Some("nowhere"),
            )
            .await;

        for mode in [&modes.car, &modes.train, &modes.bus] {
            assert!(mode.distance_km.abs() < f64::EPSILON);
            assert_eq!(mode.duration_minutes, 0);
            assert!(mode.geometry.is_none());
        }
        let fallback = TransitKnowledge::sao_paulo().fallback().clone();
        assert_eq!(modes.bus.lines, Some(fallback.lines));
        assert_eq!(modes.train.lines, fallback.train_lines);
    }

    #[tokio::test]
    async fn known_destination_gets_its_lines() {
        let mut mock = MockRoutingPort::new();
        mock.expect_fetch_route()
            .returning(|_, _, _| base_route(8.0, 25));

        let knowledge = TransitKnowledge::sao_paulo();
        let expected = knowledge.lookup(Some("ibirapuera")).clone();

        let modes = estimator(mock)
            .estimate(
                &GeoLocation::sao_paulo_center(),
                &GeoLocation::new_unchecked(-23.5874, -46.6576),
                Some("ibirapuera"),
            )
            .await;

        assert_eq!(modes.bus.lines, Some(expected.lines));
        assert_eq!(modes.train.lines, expected.train_lines);
    }

    #[test]
    fn derive_rounds_half_minutes() {
        let entry = TransitKnowledge::sao_paulo().fallback().clone();
        let modes = derive_travel_modes(base_route(1.0, 7), &entry);
        // 5.25 -> 5, 10.5 -> 11
        assert_eq!(modes.train.duration_minutes, 5);
        assert_eq!(modes.bus.duration_minutes, 11);
    }

    proptest! {
        #[test]
        fn mode_invariants_hold(
            tenths in 0u32..5_000,
            minutes in 0u32..600,
            id in proptest::option::of("[a-z_]{0,12}")
        ) {
            let knowledge = TransitKnowledge::sao_paulo();
            let base = base_route(f64::from(tenths) / 10.0, minutes);
            let modes = derive_travel_modes(base, knowledge.lookup(id.as_deref()));

            prop_assert!((modes.train.distance_km - modes.car.distance_km).abs() < f64::EPSILON);
            prop_assert!((modes.bus.distance_km - modes.car.distance_km).abs() < f64::EPSILON);
            let train = (f64::from(minutes) * 0.75).round();
            let bus = (f64::from(minutes) * 1.5).round();
            prop_assert!((f64::from(modes.train.duration_minutes) - train).abs() < f64::EPSILON);
            prop_assert!((f64::from(modes.bus.duration_minutes) - bus).abs() < f64::EPSILON);
        }
    }
}
