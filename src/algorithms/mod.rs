//! The incremental search engine and its reference solver.

pub mod cell;
pub mod common;
pub mod frontier;
pub mod heuristic;
pub mod path;
pub mod reference;
pub mod session;

pub use cell::CellState;
pub use common::{SearchOptions, Status, Step, Variant};
pub use frontier::{Frontier, Priority};
pub use heuristic::Heuristic;
pub use path::{reconstruct, Path};
pub use session::Session;
