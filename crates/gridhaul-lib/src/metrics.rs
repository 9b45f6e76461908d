use serde::{Deserialize, Serialize};

use crate::output::{RouteStep, StepKind};

/// Aggregate counters derived from a route log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMetrics {
    /// Sum of every step's travelled distance.
    pub total_distance: u64,
    pub refuel_count: usize,
    /// Highest trip index observed.
    pub trips: u32,
    pub total_steps: usize,
    pub orders_delivered: usize,
}

impl RouteMetrics {
    /// Key/value pairs in report order.
    pub fn entries(&self) -> [(&'static str, String); 5] {
        [
            ("total_distance", self.total_distance.to_string()),
            ("refuel_count", self.refuel_count.to_string()),
            ("trips", self.trips.to_string()),
            ("total_steps", self.total_steps.to_string()),
            ("orders_delivered", self.orders_delivered.to_string()),
        ]
    }

    /// Fold one more step into the counters.
    pub fn record(&mut self, step: &RouteStep) {
        self.total_distance += u64::from(step.distance.unwrap_or(0));
        self.trips = self.trips.max(step.trip);
        self.total_steps += 1;
        match step.kind {
            StepKind::Refuel => self.refuel_count += 1,
            StepKind::Delivery => self.orders_delivered += 1,
            _ => {}
        }
    }
}

/// Reduce a route log to its summary metrics. The result does not depend on
/// step order.
pub fn calculate_metrics(steps: &[RouteStep]) -> RouteMetrics {
    steps.iter().fold(RouteMetrics::default(), |mut metrics, step| {
        metrics.record(step);
        metrics
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coord;
    use crate::test_helpers::RouteStepBuilder;

    #[test]
    fn empty_log_has_zero_metrics() {
        assert_eq!(calculate_metrics(&[]), RouteMetrics::default());
    }

    #[test]
    fn sums_distances_and_counts_kinds() {
        let steps = vec![
            RouteStepBuilder::new().build(),
            RouteStepBuilder::new()
                .kind(StepKind::Refuel)
                .position(Coord::new(0, 1))
                .distance(1)
                .build(),
            RouteStepBuilder::new()
                .kind(StepKind::Pickup)
                .position(Coord::new(0, 4))
                .distance(3)
                .order(1, 6.0)
                .build(),
            RouteStepBuilder::new()
                .kind(StepKind::Delivery)
                .position(Coord::new(2, 4))
                .distance(2)
                .order(1, 6.0)
                .build(),
            RouteStepBuilder::new()
                .kind(StepKind::Return)
                .distance(6)
                .trip(1)
                .build(),
            RouteStepBuilder::new()
                .kind(StepKind::Pickup)
                .distance(5)
                .trip(2)
                .build(),
        ];

        let metrics = calculate_metrics(&steps);
        assert_eq!(metrics.total_distance, 17);
        assert_eq!(metrics.refuel_count, 1);
        assert_eq!(metrics.trips, 2);
        assert_eq!(metrics.total_steps, 6);
        assert_eq!(metrics.orders_delivered, 1);

        let mut reversed = steps.clone();
        reversed.reverse();
        assert_eq!(calculate_metrics(&reversed), metrics);
    }
}
