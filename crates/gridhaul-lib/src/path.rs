use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use crate::grid::{Coord, GridBounds};

/// Neighbour expansion order: east, south, west, north.
const MOVES: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Find the shortest 4-connected path between `start` and `goal` using A*
/// with the Manhattan-distance heuristic.
///
/// The returned sequence includes both endpoints. Frontier entries with equal
/// `g + h` are expanded in insertion order, so the same inputs always yield
/// the same path.
///
/// Returns `None` when either endpoint lies outside `bounds`.
pub fn find_path_a_star(bounds: &GridBounds, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
    if !bounds.contains(start) || !bounds.contains(goal) {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let mut g_score: HashMap<Coord, u32> = HashMap::new();
    let mut parents: HashMap<Coord, Option<Coord>> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;

    g_score.insert(start, 0);
    parents.insert(start, None);
    queue.push(AStarEntry::new(start, 0, start.manhattan(&goal), sequence));

    while let Some(entry) = queue.pop() {
        let current_score = match g_score.get(&entry.node) {
            Some(score) if *score < entry.cost => continue,
            Some(score) => *score,
            None => continue,
        };

        if entry.node == goal {
            return Some(reconstruct_path(&parents, start, goal));
        }

        for (d_row, d_col) in MOVES {
            let next = entry.node.offset(d_row, d_col);
            if !bounds.contains(next) {
                continue;
            }

            let tentative_g = current_score + 1;
            if tentative_g < *g_score.get(&next).unwrap_or(&u32::MAX) {
                g_score.insert(next, tentative_g);
                parents.insert(next, Some(entry.node));
                sequence += 1;
                queue.push(AStarEntry::new(
                    next,
                    tentative_g,
                    next.manhattan(&goal),
                    sequence,
                ));
            }
        }
    }

    None
}

/// Find a shortest path using breadth-first search.
///
/// Every move costs one unit, so BFS is optimal on the grid as well; it
/// explores more cells than A* and is kept as a reference planner.
pub fn find_path_bfs(bounds: &GridBounds, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
    if !bounds.contains(start) || !bounds.contains(goal) {
        return None;
    }
    if start == goal {
        return Some(vec![start]);
    }

    let mut parents: HashMap<Coord, Option<Coord>> = HashMap::new();
    let mut queue = VecDeque::new();

    parents.insert(start, None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for (d_row, d_col) in MOVES {
            let next = current.offset(d_row, d_col);
            if !bounds.contains(next) || parents.contains_key(&next) {
                continue;
            }

            parents.insert(next, Some(current));
            if next == goal {
                return Some(reconstruct_path(&parents, start, goal));
            }
            queue.push_back(next);
        }
    }

    None
}

/// Number of unit moves in a path (its length minus one).
pub fn path_distance(path: &[Coord]) -> u32 {
    path.len().saturating_sub(1) as u32
}

fn reconstruct_path(
    parents: &HashMap<Coord, Option<Coord>>,
    start: Coord,
    goal: Coord,
) -> Vec<Coord> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    node: Coord,
    cost: u32,
    estimate: u32,
    sequence: u64,
}

impl AStarEntry {
    fn new(node: Coord, cost: u32, heuristic: u32, sequence: u64) -> Self {
        Self {
            node,
            cost,
            estimate: cost + heuristic,
            sequence,
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate, with
        // earlier insertions winning ties.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
