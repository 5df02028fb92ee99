use clap::Parser;

use stepwise_pathfinding::config::Config;
use stepwise_pathfinding::simulation::Simulation;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let config = Config::parse();

    if !config.quiet {
        println!("Starting pathfinding visualization...");
        println!("Grid size: {}x{}", config.width, config.height);
        println!("Extra walls: {}", config.num_walls);
        println!("Movement: {:?}", config.movement());
        if config.visualize() {
            println!("Visualization enabled with {}ms delay", config.delay_ms);
            println!("Press Ctrl+C to stop");
        } else {
            println!("Visualization disabled - running in fast mode");
        }
        println!();
    }

    let simulation = match Simulation::new(config.clone()) {
        Ok(simulation) => simulation,
        Err(e) => {
            eprintln!("Failed to set up the board: {}", e);
            eprintln!("Try a grid of at least 3x3");
            std::process::exit(1);
        }
    };

    if !config.quiet {
        if let Some(seed) = simulation.seed() {
            println!("Board seed: {} (for reproducibility)", seed);
        }
        match simulation.optimal_cost() {
            Some(cost) => println!("Optimal path cost (reference): {:.3}", cost),
            None => println!("The goal is unreachable on this board"),
        }
        println!();
    }

    match simulation.run_all() {
        Ok(results) if results.len() > 1 => {
            Simulation::print_comparison_results(&results);
        }
        Ok(results) => {
            for result in &results {
                println!("\n=== FINAL RESULTS ===");
                println!("{}", result.statistics);
                if let Some(path) = &result.path {
                    let route: Vec<String> = path.positions.iter().map(|p| p.to_string()).collect();
                    println!("Path: {}", route.join(" -> "));
                }
            }
        }
        Err(e) => {
            eprintln!("Search failed: {}", e);
            std::process::exit(1);
        }
    }
}
