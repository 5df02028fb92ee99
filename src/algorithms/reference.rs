use pathfinding::prelude::dijkstra;

use crate::grid::{Grid, Position};

/// Fixed-point units per orthogonal step.
const ORTHOGONAL_UNITS: u64 = 1_000_000;
/// Fixed-point units per diagonal step, √2 rounded to six places.
const DIAGONAL_UNITS: u64 = 1_414_214;

/// Solves `start -> goal` in one shot with the `pathfinding` crate.
///
/// This is independent of [`Session`](crate::algorithms::session::Session)
/// and serves as the yardstick for its results. Step costs are summed as
/// fixed-point integers to satisfy the solver's `Ord` bound; the returned
/// cost is recomputed in floating point from the path it found.
///
/// # Returns
///
/// The path (both endpoints included) and its cost, or `None` if either
/// endpoint is blocked or the goal is unreachable.
pub fn optimal_path(grid: &Grid, start: Position, goal: Position) -> Option<(Vec<Position>, f64)> {
    if grid.is_blocked(start) || grid.is_blocked(goal) {
        return None;
    }

    let (path, _units) = dijkstra(
        &start,
        |p| {
            grid.get_neighbors(p)
                .into_iter()
                .map(|n| {
                    let units = if n.x != p.x && n.y != p.y {
                        DIAGONAL_UNITS
                    } else {
                        ORTHOGONAL_UNITS
                    };
                    (n, units)
                })
                .collect::<Vec<_>>()
        },
        |p| *p == goal,
    )?;

    let cost = path
        .windows(2)
        .filter_map(|w| Grid::step_cost(w[0], w[1]))
        .sum();
    Some((path, cost))
}

/// Cost of the optimal path, if any.
pub fn optimal_cost(grid: &Grid, start: Position, goal: Position) -> Option<f64> {
    optimal_path(grid, start, goal).map(|(_, cost)| cost)
}
