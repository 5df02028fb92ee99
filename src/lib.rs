//! Step-by-step Dijkstra and A* search on 2-D grids.
//!
//! A [`Session`] borrows a [`Grid`] and advances one expansion per
//! [`Session::step`] call, so a driver can render each frame of the search.
//! Board generation, text rendering and the frame driver live in
//! [`board`], [`render`] and [`simulation`].
//!
//! ```
//! use stepwise_pathfinding::{Grid, Movement, Position, SearchOptions, Session, Status};
//!
//! let grid = Grid::new(5, 5, Movement::Orthogonal);
//! let mut session =
//!     Session::started(&grid, Position::new(0, 0), Position::new(4, 4), SearchOptions::dijkstra())?;
//! while !session.step()?.is_complete() {}
//! assert_eq!(session.status(), Status::Found);
//! assert_eq!(session.result().map(|p| p.cost), Some(8.0));
//! # Ok::<(), stepwise_pathfinding::SearchError>(())
//! ```

pub mod algorithms;
pub mod board;
pub mod config;
pub mod error;
pub mod grid;
pub mod render;
pub mod simulation;
pub mod statistics;

pub use algorithms::{CellState, Heuristic, Path, SearchOptions, Session, Status, Step, Variant};
pub use board::Board;
pub use error::{BoardError, SearchError, SimulationError};
pub use grid::{Cell, Grid, Movement, Position};
