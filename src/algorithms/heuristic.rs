use std::f64::consts::SQRT_2;
use std::fmt;

use crate::grid::{Movement, Position};

/// Estimate of the remaining cost from a cell to the goal.
///
/// Dijkstra is A* with [`Heuristic::Zero`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    Zero,
    /// `dx + dy`. Overestimates once diagonal steps are allowed.
    Manhattan,
    /// `max(dx, dy)`.
    Chebyshev,
    /// `max(dx, dy) + (√2 - 1) * min(dx, dy)`, the exact cost on an open
    /// 8-connected grid.
    Octile,
}

impl Heuristic {
    pub fn estimate(self, from: Position, to: Position) -> f64 {
        let dx = from.x.abs_diff(to.x) as f64;
        let dy = from.y.abs_diff(to.y) as f64;
        match self {
            Heuristic::Zero => 0.0,
            Heuristic::Manhattan => dx + dy,
            Heuristic::Chebyshev => dx.max(dy),
            Heuristic::Octile => dx.max(dy) + (SQRT_2 - 1.0) * dx.min(dy),
        }
    }

    /// Whether the estimate never exceeds the true remaining cost for the
    /// given movement rule. A* is only guaranteed optimal when this holds.
    pub fn is_admissible(self, movement: Movement) -> bool {
        match (self, movement) {
            (Heuristic::Manhattan, Movement::Diagonal) => false,
            _ => true,
        }
    }

    /// The tightest admissible heuristic for a movement rule.
    pub fn consistent_for(movement: Movement) -> Self {
        match movement {
            Movement::Orthogonal => Heuristic::Manhattan,
            Movement::Diagonal => Heuristic::Octile,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Zero => "zero",
            Heuristic::Manhattan => "manhattan",
            Heuristic::Chebyshev => "chebyshev",
            Heuristic::Octile => "octile",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
