use crate::grid::Position;

/// Per-cell search state, stored in a session-owned arena indexed like the grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellState {
    /// Best known cost from the start. `None` until the cell is reached;
    /// walls never get one.
    pub g_cost: Option<f64>,
    /// Heuristic estimate to the goal, 0 for Dijkstra.
    pub h_cost: f64,
    pub parent: Option<Position>,
    /// Set once the cell has been expanded into the closed set.
    pub visited: bool,
}

impl CellState {
    /// `g + h`, or `None` while the cell is unreached.
    pub fn f_cost(&self) -> Option<f64> {
        self.g_cost.map(|g| g + self.h_cost)
    }

    pub fn is_reached(&self) -> bool {
        self.g_cost.is_some()
    }

    /// Whether a path costing `tentative_g` improves on what the cell holds.
    pub(crate) fn improves(&self, tentative_g: f64) -> bool {
        self.g_cost.map_or(true, |g| tentative_g < g)
    }
}
