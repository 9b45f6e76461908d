//! Distance and fuel rules.
//!
//! Pure helpers shared by the dispatch engine: grid distance, fuel cost for a
//! distance, reachability with the fuel on board, and nearest-station lookup.

use serde::{Deserialize, Serialize};

use crate::grid::Coord;

/// Absolute tolerance applied when comparing fuel quantities, so that
/// accumulated floating-point error never triggers a spurious detour.
pub const FUEL_EPSILON: f64 = 1e-9;

/// Fuel consumption rules for a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelRules {
    /// Fuel units burned per unit of grid distance.
    pub consumption_rate: f64,
}

impl FuelRules {
    pub fn new(consumption_rate: f64) -> Self {
        Self { consumption_rate }
    }

    /// Manhattan distance between two grid cells.
    pub fn distance(&self, from: Coord, to: Coord) -> u32 {
        from.manhattan(&to)
    }

    /// Fuel required to travel `distance` grid units.
    pub fn fuel_needed(&self, distance: u32) -> f64 {
        f64::from(distance) * self.consumption_rate
    }

    /// Whether `to` is reachable from `from` with `current_fuel` on board.
    pub fn can_reach(&self, from: Coord, to: Coord, current_fuel: f64) -> bool {
        self.fuel_needed(self.distance(from, to)) <= current_fuel + FUEL_EPSILON
    }

    /// Station closest to `position`, with its index in `stations`.
    ///
    /// Ties are broken by list order: the first station at the minimum
    /// distance wins. Returns `None` when `stations` is empty.
    pub fn nearest_station(&self, position: Coord, stations: &[Coord]) -> Option<(usize, Coord)> {
        stations
            .iter()
            .copied()
            .enumerate()
            .min_by_key(|(index, station)| (self.distance(position, *station), *index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuel_scales_with_distance() {
        let rules = FuelRules::new(0.05);
        assert!((rules.fuel_needed(20) - 1.0).abs() < 1e-12);
        assert_eq!(rules.fuel_needed(0), 0.0);
    }

    #[test]
    fn exact_fuel_is_enough() {
        let rules = FuelRules::new(1.0);
        assert!(rules.can_reach(Coord::new(0, 0), Coord::new(0, 3), 3.0));
        assert!(!rules.can_reach(Coord::new(0, 0), Coord::new(0, 3), 2.999));
    }

    #[test]
    fn accumulated_rounding_does_not_block_reachability() {
        let rules = FuelRules::new(0.1);
        let mut fuel = 1.0;
        for _ in 0..7 {
            fuel -= rules.fuel_needed(1);
        }
        // 1.0 - 7 * 0.1 is slightly below 0.3 in binary floating point.
        assert!(rules.can_reach(Coord::new(0, 0), Coord::new(0, 3), fuel));
    }

    #[test]
    fn nearest_station_prefers_list_order_on_ties() {
        let rules = FuelRules::new(1.0);
        let stations = [Coord::new(0, 4), Coord::new(2, 2), Coord::new(4, 0)];
        assert_eq!(
            rules.nearest_station(Coord::new(0, 0), &stations),
            Some((0, Coord::new(0, 4)))
        );
        assert_eq!(
            rules.nearest_station(Coord::new(3, 1), &stations),
            Some((1, Coord::new(2, 2)))
        );
    }

    #[test]
    fn nearest_station_of_empty_list_is_none() {
        assert_eq!(FuelRules::new(1.0).nearest_station(Coord::new(0, 0), &[]), None);
    }
}
