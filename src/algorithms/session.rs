use log::{debug, trace, warn};
use rustc_hash::FxHashSet;

use crate::algorithms::cell::CellState;
use crate::algorithms::common::{SearchOptions, Status, Step, Variant};
use crate::algorithms::frontier::{Frontier, Priority};
use crate::algorithms::heuristic::Heuristic;
use crate::algorithms::path::{self, Path};
use crate::error::{Result, SearchError};
use crate::grid::{Grid, Position};

/// An incremental Dijkstra / A* search over a borrowed grid.
///
/// The session owns every piece of mutable search state (cell arena,
/// frontier, closed set), so any number of sessions can search the same
/// grid side by side. Each call to [`Session::step`] expands at most one
/// cell and returns.
#[derive(Debug, Clone)]
pub struct Session<'g> {
    grid: &'g Grid,
    variant: Variant,
    heuristic: Heuristic,
    start: Position,
    goal: Position,
    cells: Vec<CellState>,
    frontier: Frontier,
    closed: FxHashSet<Position>,
    status: Status,
    steps: usize,
    frontier_peak: usize,
}

impl<'g> Session<'g> {
    /// Creates an idle session. Call [`Session::initialize`] before stepping.
    pub fn new(grid: &'g Grid, options: SearchOptions) -> Self {
        let heuristic = options.resolve_heuristic(grid.movement());
        if !heuristic.is_admissible(grid.movement()) {
            warn!(
                "{} heuristic overestimates with {:?} movement; A* may return a longer path",
                heuristic,
                grid.movement()
            );
        }

        Session {
            grid,
            variant: options.variant,
            heuristic,
            start: Position::default(),
            goal: Position::default(),
            cells: Vec::new(),
            frontier: Frontier::new(),
            closed: FxHashSet::default(),
            status: Status::Idle,
            steps: 0,
            frontier_peak: 0,
        }
    }

    /// Creates a session and initializes it in one go.
    pub fn started(
        grid: &'g Grid,
        start: Position,
        goal: Position,
        options: SearchOptions,
    ) -> Result<Self> {
        let mut session = Session::new(grid, options);
        session.initialize(start, goal)?;
        Ok(session)
    }

    /// Seeds the search from `start` towards `goal` and moves to `Running`.
    ///
    /// Endpoints are validated before anything is touched, so a failed call
    /// leaves the session exactly as it was.
    pub fn initialize(&mut self, start: Position, goal: Position) -> Result<()> {
        if !self.grid.in_bounds(start) {
            return Err(SearchError::StartOutOfBounds(start));
        }
        if !self.grid.in_bounds(goal) {
            return Err(SearchError::GoalOutOfBounds(goal));
        }
        if self.grid.is_blocked(start) {
            return Err(SearchError::StartBlocked(start));
        }
        if self.grid.is_blocked(goal) {
            return Err(SearchError::GoalBlocked(goal));
        }

        self.start = start;
        self.goal = goal;
        self.cells = vec![CellState::default(); self.grid.len()];
        self.frontier = Frontier::with_capacity(self.grid.len());
        self.closed.clear();
        self.steps = 0;

        let h = self.heuristic.estimate(start, goal);
        let start_index = self.index(start);
        self.cells[start_index] = CellState {
            g_cost: Some(0.0),
            h_cost: h,
            parent: None,
            visited: false,
        };
        self.frontier.insert(start_index, Priority::new(h, h));
        self.frontier_peak = 1;
        self.status = Status::Running;

        debug!(
            "{} search initialized: {} -> {} ({} heuristic)",
            self.variant, start, goal, self.heuristic
        );
        Ok(())
    }

    /// Performs one bounded unit of work.
    ///
    /// Stepping an idle session or one that already finished is an error and
    /// changes nothing.
    pub fn step(&mut self) -> Result<Step> {
        match self.status {
            Status::Idle => return Err(SearchError::NotInitialized),
            Status::Found | Status::Exhausted => {
                return Err(SearchError::AlreadyComplete(self.status))
            }
            Status::Running => {}
        }
        self.steps += 1;

        let Some((current_index, _)) = self.frontier.extract_min() else {
            self.status = Status::Exhausted;
            debug!("{} search exhausted after {} steps", self.variant, self.steps);
            return Ok(self.report(None, Vec::new()));
        };
        let current = self.grid.position(current_index);

        if current == self.goal {
            self.status = Status::Found;
            debug!(
                "{} search reached {} after {} steps (cost {:.3})",
                self.variant,
                current,
                self.steps,
                self.cells[current_index].g_cost.unwrap_or_default()
            );
            return Ok(self.report(None, Vec::new()));
        }

        self.closed.insert(current);
        self.cells[current_index].visited = true;
        // Every cell popped from the frontier was given a cost when inserted.
        let current_g = self.cells[current_index].g_cost.unwrap_or_default();

        let mut discovered = Vec::new();
        for neighbor in self.grid.get_neighbors(&current) {
            if self.closed.contains(&neighbor) {
                continue;
            }
            let Some(cost) = Grid::step_cost(current, neighbor) else {
                continue;
            };
            let tentative_g = current_g + cost;
            let neighbor_index = self.index(neighbor);
            if !self.cells[neighbor_index].improves(tentative_g) {
                continue;
            }

            let h = self.heuristic.estimate(neighbor, self.goal);
            let cell = &mut self.cells[neighbor_index];
            cell.g_cost = Some(tentative_g);
            cell.h_cost = h;
            cell.parent = Some(current);
            self.frontier
                .insert(neighbor_index, Priority::new(tentative_g + h, h));
            discovered.push(neighbor);
        }
        self.frontier_peak = self.frontier_peak.max(self.frontier.len());

        trace!(
            "step {}: expanded {} (g={:.3}), {} discovered, frontier {}",
            self.steps,
            current,
            current_g,
            discovered.len(),
            self.frontier.len()
        );
        Ok(self.report(Some(current), discovered))
    }

    /// Steps until the search finishes and returns the terminal status.
    pub fn run(&mut self) -> Result<Status> {
        while !self.is_complete() {
            self.step()?;
        }
        Ok(self.status)
    }

    pub fn is_complete(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The start-to-goal path once the goal was found, `None` otherwise.
    pub fn result(&self) -> Option<Path> {
        path::reconstruct(self)
    }

    /// Search state of `pos`, or `None` when it lies outside the grid or the
    /// session was never initialized.
    pub fn cell(&self, pos: Position) -> Option<&CellState> {
        self.grid.index(pos).and_then(|i| self.cells.get(i))
    }

    pub fn is_closed(&self, pos: Position) -> bool {
        self.closed.contains(&pos)
    }

    pub fn in_frontier(&self, pos: Position) -> bool {
        self.grid
            .index(pos)
            .is_some_and(|i| self.frontier.contains(i))
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Largest frontier size seen so far.
    pub fn frontier_peak(&self) -> usize {
        self.frontier_peak
    }

    /// Number of successful `step` calls.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of cells moved into the closed set.
    pub fn expanded(&self) -> usize {
        self.closed.len()
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    fn index(&self, pos: Position) -> usize {
        // Only called with positions from the grid itself.
        pos.y * self.grid.width() + pos.x
    }

    fn report(&self, expanded: Option<Position>, discovered: Vec<Position>) -> Step {
        Step {
            status: self.status,
            expanded,
            discovered,
        }
    }
}
