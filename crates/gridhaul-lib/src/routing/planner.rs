//! Leg planning strategies.
//!
//! The dispatch engine only needs "a shortest path between two cells"; the
//! `PathPlanner` trait lets the search algorithm vary without touching the
//! dispatch loop.

use crate::grid::{Coord, GridBounds};
use crate::path::{find_path_a_star, find_path_bfs};

use super::PathAlgorithm;

/// Trait for grid pathfinding strategies.
pub trait PathPlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> PathAlgorithm;

    /// Shortest path from `start` to `goal`, inclusive of both endpoints.
    ///
    /// Returns `None` when no path exists.
    fn find_path(&self, bounds: &GridBounds, start: Coord, goal: Coord) -> Option<Vec<Coord>>;
}

/// A* planner guided by the Manhattan-distance heuristic.
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner;

impl PathPlanner for AStarPlanner {
    fn algorithm(&self) -> PathAlgorithm {
        PathAlgorithm::AStar
    }

    fn find_path(&self, bounds: &GridBounds, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
        find_path_a_star(bounds, start, goal)
    }
}

/// Breadth-first planner.
#[derive(Debug, Clone, Default)]
pub struct BfsPlanner;

impl PathPlanner for BfsPlanner {
    fn algorithm(&self) -> PathAlgorithm {
        PathAlgorithm::Bfs
    }

    fn find_path(&self, bounds: &GridBounds, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
        find_path_bfs(bounds, start, goal)
    }
}

/// Select the planner for the requested algorithm.
pub fn select_planner(algorithm: PathAlgorithm) -> Box<dyn PathPlanner> {
    match algorithm {
        PathAlgorithm::AStar => Box::new(AStarPlanner),
        PathAlgorithm::Bfs => Box::new(BfsPlanner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_planner_returns_matching_algorithm() {
        assert_eq!(
            select_planner(PathAlgorithm::AStar).algorithm(),
            PathAlgorithm::AStar
        );
        assert_eq!(
            select_planner(PathAlgorithm::Bfs).algorithm(),
            PathAlgorithm::Bfs
        );
    }
}
