use crate::algorithms::common::Status;
use crate::algorithms::session::Session;
use crate::grid::{Grid, Position};

/// A start-to-goal route.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Positions from start to goal, both included.
    pub positions: Vec<Position>,
    /// g-cost of the goal when the search finished.
    pub cost: f64,
}

impl Path {
    /// Number of moves along the path.
    pub fn moves(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Sum of the step costs between consecutive positions, or `None` if
    /// some pair is not adjacent.
    pub fn step_cost_sum(&self) -> Option<f64> {
        self.positions
            .windows(2)
            .map(|w| Grid::step_cost(w[0], w[1]))
            .sum()
    }
}

/// Walks parent links back from the goal of a finished search.
///
/// Returns `None` unless the session's status is [`Status::Found`].
pub fn reconstruct(session: &Session<'_>) -> Option<Path> {
    if session.status() != Status::Found {
        return None;
    }
    let goal = session.goal();
    let cost = session.cell(goal)?.g_cost?;

    let mut positions = vec![goal];
    let mut current = goal;
    // A parent chain can never be longer than the grid.
    for _ in 0..session.grid().len() {
        match session.cell(current)?.parent {
            Some(parent) => {
                positions.push(parent);
                current = parent;
            }
            None => break,
        }
    }
    if current != session.start() {
        return None;
    }

    positions.reverse();
    Some(Path { positions, cost })
}
