use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::grid::{Coord, GridBounds};
use crate::metrics::RouteMetrics;
use crate::order::{Order, OrderId};
use crate::routing::RoutePlan;

const RULE_WIDTH: usize = 80;

/// Kind tag attached to every entry of the route log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Start,
    Pickup,
    Delivery,
    Refuel,
    Return,
    FinalReturn,
}

impl StepKind {
    /// Upper-case label shown in textual reports.
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Start => "START",
            StepKind::Pickup => "PICKUP",
            StepKind::Delivery => "DELIVERY",
            StepKind::Refuel => "REFUEL",
            StepKind::Return => "RETURN",
            StepKind::FinalReturn => "FINAL_RETURN",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            StepKind::Start => "start",
            StepKind::Pickup => "pickup",
            StepKind::Delivery => "delivery",
            StepKind::Refuel => "refuel",
            StepKind::Return => "return",
            StepKind::FinalReturn => "final_return",
        };
        f.write_str(value)
    }
}

/// One entry of the append-only route log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteStep {
    #[serde(rename = "type")]
    pub kind: StepKind,
    pub position: Coord,
    pub trip: u32,
    /// Grid distance travelled to reach this step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<u32>,
    /// Fuel level after the step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel: Option<f64>,
    /// Cargo load after the step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Fuel level when a refuel detour began.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_before: Option<f64>,
}

impl RouteStep {
    fn bare(kind: StepKind, position: Coord, trip: u32) -> Self {
        Self {
            kind,
            position,
            trip,
            distance: None,
            fuel: None,
            load: None,
            order_id: None,
            weight: None,
            fuel_before: None,
        }
    }

    pub fn start(position: Coord, trip: u32, fuel: f64, load: f64) -> Self {
        Self {
            fuel: Some(fuel),
            load: Some(load),
            ..Self::bare(StepKind::Start, position, trip)
        }
    }

    /// Pickup or delivery of `order`; the position is the matching end of
    /// the order.
    pub fn order(
        kind: StepKind,
        order: &Order,
        trip: u32,
        distance: u32,
        fuel: f64,
        load: f64,
    ) -> Self {
        let position = match kind {
            StepKind::Delivery => order.delivery,
            _ => order.pickup,
        };
        Self {
            distance: Some(distance),
            fuel: Some(fuel),
            load: Some(load),
            order_id: Some(order.id),
            weight: Some(order.weight),
            ..Self::bare(kind, position, trip)
        }
    }

    pub fn refuel(
        position: Coord,
        trip: u32,
        distance: u32,
        fuel_before: f64,
        fuel: f64,
        load: f64,
    ) -> Self {
        Self {
            distance: Some(distance),
            fuel: Some(fuel),
            load: Some(load),
            fuel_before: Some(fuel_before),
            ..Self::bare(StepKind::Refuel, position, trip)
        }
    }

    /// `return` or `final_return` to the depot.
    pub fn depot_return(
        kind: StepKind,
        position: Coord,
        trip: u32,
        distance: u32,
        fuel: f64,
    ) -> Self {
        Self {
            distance: Some(distance),
            fuel: Some(fuel),
            load: Some(0.0),
            ..Self::bare(kind, position, trip)
        }
    }
}

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Structured representation of a planned route that higher-level consumers
/// can serialise or render.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub grid: GridBounds,
    pub depot: Coord,
    pub steps: Vec<RouteStep>,
    pub metrics: RouteMetrics,
}

impl RouteSummary {
    /// Build a summary from a completed plan.
    pub fn from_plan(grid: GridBounds, depot: Coord, plan: &RoutePlan) -> Self {
        Self {
            grid,
            depot,
            steps: plan.steps.clone(),
            metrics: plan.metrics.clone(),
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{rule}");
        let _ = writeln!(buffer, "DELIVERY ROUTE PLAN");
        let _ = writeln!(buffer, "{rule}");

        for (index, step) in self.steps.iter().enumerate() {
            let _ = writeln!(buffer, "\nStep {}:", index + 1);
            let _ = writeln!(buffer, "  Type: {}", step.kind.label());
            let _ = writeln!(buffer, "  Position: {}", step.position);
            let _ = writeln!(buffer, "  Trip: {}", step.trip);
            if let Some(id) = step.order_id {
                let _ = writeln!(buffer, "  Order: {id}");
            }
            if let Some(distance) = step.distance {
                let _ = writeln!(buffer, "  Distance: {distance} units");
            }
            if let Some(before) = step.fuel_before {
                let _ = writeln!(buffer, "  Fuel before: {before:.2} liters");
            }
            if let Some(fuel) = step.fuel {
                let _ = writeln!(buffer, "  Fuel: {fuel:.2} liters");
            }
            if let Some(load) = step.load {
                let _ = writeln!(buffer, "  Load: {load:.2} kg");
            }
            if let Some(weight) = step.weight {
                let _ = writeln!(buffer, "  Weight: {weight:.2} kg");
            }
        }

        let _ = writeln!(buffer, "\n{rule}");
        let _ = writeln!(buffer, "SUMMARY METRICS");
        let _ = writeln!(buffer, "{rule}");
        for (key, value) in self.metrics.entries() {
            let _ = writeln!(buffer, "  {key}: {value}");
        }
        let _ = writeln!(buffer, "{rule}");
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Delivery plan** - _{}x{} grid, depot {}_ ({} trips, {} units)",
            self.grid.rows,
            self.grid.cols,
            self.depot,
            self.metrics.trips,
            self.metrics.total_distance
        );
        for (index, step) in self.steps.iter().enumerate() {
            let order = step
                .order_id
                .map(|id| format!(" order `{id}`"))
                .unwrap_or_default();
            let distance = step
                .distance
                .map(|d| format!(" after {d} units"))
                .unwrap_or_default();
            let fuel = step
                .fuel
                .map(|f| format!(", fuel {f:.2}"))
                .unwrap_or_default();
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}**{} at `{}` (trip {}{}{})",
                index + 1,
                step.kind,
                order,
                step.position,
                step.trip,
                distance,
                fuel
            );
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::RouteStepBuilder;

    fn summary() -> RouteSummary {
        let steps = vec![
            RouteStepBuilder::new().build(),
            RouteStepBuilder::new()
                .kind(StepKind::Pickup)
                .position(Coord::new(0, 2))
                .distance(2)
                .order(7, 5.0)
                .build(),
        ];
        let metrics = crate::metrics::calculate_metrics(&steps);
        RouteSummary {
            grid: GridBounds { rows: 3, cols: 3 },
            depot: Coord::new(0, 0),
            steps,
            metrics,
        }
    }

    #[test]
    fn plain_text_lists_steps_and_metrics() {
        let text = summary().render(RouteRenderMode::PlainText);
        assert!(text.contains("DELIVERY ROUTE PLAN"));
        assert!(text.contains("Step 2:\n  Type: PICKUP\n  Position: (0, 2)"));
        assert!(text.contains("  Order: 7"));
        assert!(text.contains("  Distance: 2 units"));
        assert!(text.contains("  total_distance: 2"));
    }

    #[test]
    fn rich_text_uses_markdown_bullets() {
        let text = summary().render(RouteRenderMode::RichText);
        assert!(text.starts_with("**Delivery plan**"));
        assert!(text.contains("**pickup** order `7` at `(0, 2)`"));
    }

    #[test]
    fn step_serialises_type_tag_and_skips_absent_fields() {
        let step = RouteStep::depot_return(StepKind::FinalReturn, Coord::new(0, 0), 1, 4, 92.0);
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["type"], "final_return");
        assert_eq!(json["position"], serde_json::json!([0, 0]));
        assert!(json.get("order_id").is_none());
        assert!(json.get("fuel_before").is_none());
    }
}
