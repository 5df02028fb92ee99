use std::fmt;
use std::time::Duration;

use crate::algorithms::{Heuristic, Session, Status, Variant};

/// Tolerance when comparing floating-point path costs.
pub const COST_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone)]
pub struct SearchStats {
    pub variant: Variant,
    pub heuristic: Heuristic,
    pub status: Status,
    /// Calls to `step`, including the final one.
    pub steps: usize,
    /// Cells moved into the closed set.
    pub expanded: usize,
    pub frontier_peak: usize,
    /// Moves along the found path.
    pub path_length: Option<usize>,
    pub path_cost: Option<f64>,
    /// Cost of the shortest path according to the reference solver.
    pub optimal_cost: Option<f64>,
    /// Time spent inside `step`, excluding rendering and delays.
    pub elapsed: Duration,
}

impl SearchStats {
    pub fn from_session(session: &Session<'_>, optimal_cost: Option<f64>, elapsed: Duration) -> Self {
        let path = session.result();
        SearchStats {
            variant: session.variant(),
            heuristic: session.heuristic(),
            status: session.status(),
            steps: session.steps(),
            expanded: session.expanded(),
            frontier_peak: session.frontier_peak(),
            path_length: path.as_ref().map(|p| p.moves()),
            path_cost: path.map(|p| p.cost),
            optimal_cost,
            elapsed,
        }
    }

    pub fn found(&self) -> bool {
        self.status == Status::Found
    }

    /// Whether the result agrees with the reference solver: the same cost
    /// when a path exists, or no path on either side.
    pub fn is_optimal(&self) -> bool {
        match (self.path_cost, self.optimal_cost) {
            (Some(found), Some(best)) => (found - best).abs() < COST_EPSILON,
            (None, None) => true,
            _ => false,
        }
    }

    /// Found cost divided by the optimal cost; 1.0 is optimal.
    pub fn cost_ratio(&self) -> Option<f64> {
        match (self.path_cost, self.optimal_cost) {
            (Some(found), Some(best)) if best > 0.0 => Some(found / best),
            (Some(_), Some(_)) => Some(1.0),
            _ => None,
        }
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {} ({} heuristic)", self.variant, self.heuristic)?;
        writeln!(f, "Status: {:?}", self.status)?;
        writeln!(f, "Steps: {}", self.steps)?;
        writeln!(f, "Cells expanded: {}", self.expanded)?;
        writeln!(f, "Peak frontier size: {}", self.frontier_peak)?;
        match (self.path_length, self.path_cost) {
            (Some(moves), Some(cost)) => {
                writeln!(f, "Path: {} moves, cost {:.3}", moves, cost)?;
            }
            _ => writeln!(f, "Path: none")?,
        }
        match self.optimal_cost {
            Some(best) => writeln!(f, "Optimal cost (reference): {:.3}", best)?,
            None => writeln!(f, "Optimal cost (reference): unreachable")?,
        }
        if let Some(ratio) = self.cost_ratio() {
            writeln!(f, "Cost ratio: {:.3}", ratio)?;
            if !self.is_optimal() {
                writeln!(f, "⚠ Path is longer than optimal - the heuristic overestimates")?;
            }
        }
        writeln!(f, "Search time: {:.2?}", self.elapsed)?;
        Ok(())
    }
}
