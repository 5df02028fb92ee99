use clap::{Parser, ValueEnum};

use crate::algorithms::{Heuristic, SearchOptions, Variant};
use crate::grid::Movement;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmChoice {
    Dijkstra,
    AStar,
    /// Run every variant on the same board and compare.
    All,
}

impl AlgorithmChoice {
    pub fn variants(self) -> Vec<Variant> {
        match self {
            AlgorithmChoice::Dijkstra => vec![Variant::Dijkstra],
            AlgorithmChoice::AStar => vec![Variant::AStar],
            AlgorithmChoice::All => Variant::ALL.to_vec(),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicChoice {
    Zero,
    Manhattan,
    Chebyshev,
    Octile,
}

impl From<HeuristicChoice> for Heuristic {
    fn from(choice: HeuristicChoice) -> Self {
        match choice {
            HeuristicChoice::Zero => Heuristic::Zero,
            HeuristicChoice::Manhattan => Heuristic::Manhattan,
            HeuristicChoice::Chebyshev => Heuristic::Chebyshev,
            HeuristicChoice::Octile => Heuristic::Octile,
        }
    }
}

/// Watch Dijkstra and A* explore a grid one step at a time.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 10)]
    pub width: usize,

    #[arg(long, default_value_t = 10)]
    pub height: usize,

    /// Random walls scattered on top of the central barrier
    #[arg(long, default_value_t = 0)]
    pub num_walls: usize,

    #[arg(long, value_enum, default_value_t = AlgorithmChoice::AStar)]
    pub algorithm: AlgorithmChoice,

    /// Override the A* heuristic (defaults to one matching the movement rule)
    #[arg(long, value_enum)]
    pub heuristic: Option<HeuristicChoice>,

    /// Only allow 4-directional moves
    #[arg(long, default_value_t = false)]
    pub orthogonal: bool,

    /// Pause between rendered steps
    #[arg(long, default_value_t = 40)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    /// Seed for board generation; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only print the final results
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 10,
            height: 10,
            num_walls: 0,
            algorithm: AlgorithmChoice::AStar,
            heuristic: None,
            orthogonal: false,
            delay_ms: 40,
            no_visualization: false,
            seed: None,
            quiet: false,
        }
    }
}

impl Config {
    pub fn movement(&self) -> Movement {
        if self.orthogonal {
            Movement::Orthogonal
        } else {
            Movement::Diagonal
        }
    }

    pub fn search_options(&self, variant: Variant) -> SearchOptions {
        SearchOptions {
            variant,
            heuristic: self.heuristic.map(Heuristic::from),
        }
    }

    /// Whether frames are drawn while searching.
    pub fn visualize(&self) -> bool {
        !self.no_visualization && !self.quiet
    }
}
