use std::thread;
use std::time::{Duration, Instant};

use log::info;

use crate::algorithms::reference;
use crate::algorithms::{Path, Session, Step, Variant};
use crate::board::Board;
use crate::config::Config;
use crate::error::SimulationError;
use crate::render::{self, LEGEND};
use crate::statistics::SearchStats;

#[derive(Debug, Clone)]
pub struct AlgorithmResult {
    pub name: String,
    pub statistics: SearchStats,
    pub path: Option<Path>,
}

impl AlgorithmResult {
    pub fn success(&self) -> bool {
        self.statistics.found()
    }
}

/// Drives search sessions over one board, pacing and drawing each step.
pub struct Simulation {
    config: Config,
    board: Board,
    seed: Option<u64>,
    optimal_cost: Option<f64>,
}

impl Simulation {
    /// Generates a board from the config. Without a configured seed a random
    /// one is drawn and reported so the run can be reproduced.
    pub fn new(config: Config) -> Result<Self, SimulationError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let board = Board::from_seed(
            config.width,
            config.height,
            config.num_walls,
            config.movement(),
            seed,
        )?;
        info!("board seed: {} (pass --seed {} to reproduce)", seed, seed);

        let mut simulation = Self::with_board(config, board);
        simulation.seed = Some(seed);
        Ok(simulation)
    }

    /// Uses a prepared board instead of generating one.
    pub fn with_board(config: Config, board: Board) -> Self {
        let optimal_cost = reference::optimal_cost(&board.grid, board.start, board.goal);
        Simulation {
            config,
            board,
            seed: None,
            optimal_cost,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn optimal_cost(&self) -> Option<f64> {
        self.optimal_cost
    }

    /// Searches the board with one variant, stepping until it finishes.
    ///
    /// With visualization on, every step is followed by a redraw and a
    /// `delay_ms` pause; only time spent inside `step` is measured.
    pub fn run(&self, variant: Variant) -> Result<AlgorithmResult, SimulationError> {
        let options = self.config.search_options(variant);
        let mut session = Session::started(&self.board.grid, self.board.start, self.board.goal, options)?;
        let visualize = self.config.visualize();
        let delay = Duration::from_millis(self.config.delay_ms);

        if visualize {
            self.draw(&session, None);
            thread::sleep(delay);
        }

        let mut elapsed = Duration::ZERO;
        while !session.is_complete() {
            let step_start = Instant::now();
            let step = session.step()?;
            elapsed += step_start.elapsed();

            if visualize {
                self.draw(&session, Some(&step));
                thread::sleep(delay);
            }
        }

        let statistics = SearchStats::from_session(&session, self.optimal_cost, elapsed);
        info!(
            "{} finished: {:?} after {} steps, {} cells expanded",
            variant, statistics.status, statistics.steps, statistics.expanded
        );
        if !self.config.quiet && !statistics.is_optimal() {
            println!(
                "{}: path cost differs from the reference optimum ({:?} vs {:?})",
                variant, statistics.path_cost, statistics.optimal_cost
            );
        }

        Ok(AlgorithmResult {
            name: variant.to_string(),
            statistics,
            path: session.result(),
        })
    }

    /// Runs every variant selected in the config on the same board.
    pub fn run_all(&self) -> Result<Vec<AlgorithmResult>, SimulationError> {
        let variants = self.config.algorithm.variants();
        let mut results = Vec::with_capacity(variants.len());
        for (i, variant) in variants.iter().enumerate() {
            if !self.config.quiet {
                println!("Running algorithm {} of {}: {}", i + 1, variants.len(), variant);
            }
            results.push(self.run(*variant)?);
        }
        Ok(results)
    }

    fn draw(&self, session: &Session<'_>, step: Option<&Step>) {
        render::clear_screen();
        println!("=== PATHFINDING VISUALIZATION ===");
        println!(
            "Algorithm: {} ({} heuristic) | Step: {} | Expanded: {} | Frontier: {}",
            session.variant(),
            session.heuristic(),
            session.steps(),
            session.expanded(),
            session.frontier_len()
        );
        println!("Start: {} | Goal: {}", self.board.start, self.board.goal);

        if let Some(step) = step {
            match step.expanded {
                Some(pos) => {
                    let cell = session.cell(pos).copied().unwrap_or_default();
                    println!(
                        "Expanded {} (g={:.3}, h={:.3}) | {} frontier updates",
                        pos,
                        cell.g_cost.unwrap_or_default(),
                        cell.h_cost,
                        step.discovered.len()
                    );
                }
                None => println!("Search finished: {:?}", step.status),
            }
        }

        println!("{}", LEGEND);
        print!("{}", render::render_frame(&self.board, session));
        println!();
    }

    /// Print comparison results in a table, followed by a short analysis.
    pub fn print_comparison_results(results: &[AlgorithmResult]) {
        println!("\n=== ALGORITHM COMPARISON RESULTS ===");
        println!();

        println!(
            "{:<10} {:<10} {:<7} {:<9} {:<6} {:<7} {:<9} {:<9} {:<12}",
            "Algorithm", "Status", "Steps", "Expanded", "Peak", "Moves", "Cost", "Optimal", "Search time"
        );
        println!("{}", "-".repeat(85));

        for result in results {
            let stats = &result.statistics;
            let moves = stats
                .path_length
                .map_or_else(|| "-".to_string(), |m| m.to_string());
            let cost = stats
                .path_cost
                .map_or_else(|| "-".to_string(), |c| format!("{:.3}", c));
            let optimal = if stats.is_optimal() { "✓" } else { "✗" };

            println!(
                "{:<10} {:<10} {:<7} {:<9} {:<6} {:<7} {:<9} {:<9} {:<12}",
                result.name,
                format!("{:?}", stats.status),
                stats.steps,
                stats.expanded,
                stats.frontier_peak,
                moves,
                cost,
                optimal,
                format!("{:.2?}", stats.elapsed)
            );
        }
        println!();

        let successful: Vec<_> = results.iter().filter(|r| r.success()).collect();
        if successful.is_empty() {
            println!("No algorithm reached the goal.");
            return;
        }

        println!("=== PERFORMANCE ANALYSIS ===");
        if let Some(fewest) = successful.iter().min_by_key(|r| r.statistics.expanded) {
            println!(
                "Fewest cells expanded: {} ({} cells)",
                fewest.name, fewest.statistics.expanded
            );
        }
        if let (Some(most), Some(least)) = (
            successful.iter().map(|r| r.statistics.expanded).max(),
            successful.iter().map(|r| r.statistics.expanded).min(),
        ) {
            if most > least && least > 0 {
                println!(
                    "Expansion spread: {} cells ({:.1}x)",
                    most - least,
                    most as f64 / least as f64
                );
            }
        }
        for result in &successful {
            if !result.statistics.is_optimal() {
                println!(
                    "⚠ {} returned a suboptimal path (cost ratio {:.3})",
                    result.name,
                    result.statistics.cost_ratio().unwrap_or(f64::NAN)
                );
            }
        }
    }
}
