use std::fmt;

use crate::algorithms::heuristic::Heuristic;
use crate::grid::{Movement, Position};

/// Which shortest-path search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    Dijkstra,
    #[default]
    AStar,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Dijkstra, Variant::AStar];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Dijkstra => "dijkstra",
            Variant::AStar => "a_star",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle of a search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Created but not yet given endpoints.
    Idle,
    Running,
    /// The goal was popped from the frontier.
    Found,
    /// The frontier ran dry without reaching the goal.
    Exhausted,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Found | Status::Exhausted)
    }
}

/// How a session searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub variant: Variant,
    /// Heuristic override for A*. `None` picks one consistent with the
    /// grid's movement. Ignored by Dijkstra.
    pub heuristic: Option<Heuristic>,
}

impl SearchOptions {
    pub fn dijkstra() -> Self {
        SearchOptions {
            variant: Variant::Dijkstra,
            heuristic: None,
        }
    }

    pub fn a_star() -> Self {
        SearchOptions {
            variant: Variant::AStar,
            heuristic: None,
        }
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    /// The heuristic actually used on a grid with the given movement.
    pub fn resolve_heuristic(&self, movement: Movement) -> Heuristic {
        match self.variant {
            Variant::Dijkstra => Heuristic::Zero,
            Variant::AStar => self
                .heuristic
                .unwrap_or_else(|| Heuristic::consistent_for(movement)),
        }
    }
}

/// What one call to `step` did.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub status: Status,
    /// Cell moved into the closed set during this step.
    pub expanded: Option<Position>,
    /// Cells inserted into the frontier or given a lower key, in neighbor order.
    pub discovered: Vec<Position>,
}

impl Step {
    pub fn is_complete(&self) -> bool {
        self.status.is_terminal()
    }
}
