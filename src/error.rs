//! Error types for the search engine and its collaborators.

use thiserror::Error;

use crate::algorithms::common::Status;
use crate::grid::Position;

/// Errors raised by a search session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("start position {0} is outside the grid")]
    StartOutOfBounds(Position),

    #[error("goal position {0} is outside the grid")]
    GoalOutOfBounds(Position),

    #[error("start position {0} is blocked")]
    StartBlocked(Position),

    #[error("goal position {0} is blocked")]
    GoalBlocked(Position),

    #[error("search has not been initialized")]
    NotInitialized,

    #[error("search already finished with status {0:?}")]
    AlreadyComplete(Status),
}

impl SearchError {
    /// True for the errors `initialize` reports about bad endpoints.
    pub fn is_initialization(&self) -> bool {
        matches!(
            self,
            SearchError::StartOutOfBounds(_)
                | SearchError::GoalOutOfBounds(_)
                | SearchError::StartBlocked(_)
                | SearchError::GoalBlocked(_)
        )
    }
}

/// Errors from parsing or generating a board.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error("board has no rows")]
    Empty,

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("unknown tile {tile:?} at {pos}")]
    UnknownTile { tile: char, pos: Position },

    #[error("board has no start tile 'S'")]
    MissingStart,

    #[error("board has no goal tile 'G'")]
    MissingGoal,

    #[error("board has more than one {0:?} tile")]
    Duplicate(char),

    #[error("board must be at least 3x3, got {width}x{height}")]
    TooSmall { width: usize, height: usize },
}

/// Errors from the simulation driver.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("board setup failed: {0}")]
    Board(#[from] BoardError),

    #[error("search failed: {0}")]
    Search(#[from] SearchError),
}

pub type Result<T> = std::result::Result<T, SearchError>;
