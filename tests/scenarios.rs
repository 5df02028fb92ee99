use std::f64::consts::SQRT_2;

use stepwise_pathfinding::{Grid, Movement, Position, SearchOptions, Session, Status, Variant};

fn p(x: usize, y: usize) -> Position {
    Position::new(x, y)
}

fn options(variant: Variant) -> SearchOptions {
    SearchOptions {
        variant,
        heuristic: None,
    }
}

/// Steps a fresh session to completion and returns it.
fn solve(grid: &Grid, start: Position, goal: Position, variant: Variant) -> Session<'_> {
    let mut session = Session::started(grid, start, goal, options(variant)).unwrap();
    while !session.step().unwrap().is_complete() {}
    session
}

#[test]
fn open_grid_orthogonal_cost() {
    let grid = Grid::new(5, 5, Movement::Orthogonal);
    for variant in Variant::ALL {
        let session = solve(&grid, p(0, 0), p(4, 4), variant);
        assert_eq!(session.status(), Status::Found);
        let path = session.result().unwrap();
        assert_eq!(path.cost, 8.0, "{variant}");
        assert_eq!(path.moves(), 8);
    }
}

#[test]
fn open_grid_diagonal_cost() {
    let grid = Grid::new(5, 5, Movement::Diagonal);
    for variant in Variant::ALL {
        let session = solve(&grid, p(0, 0), p(4, 4), variant);
        let path = session.result().unwrap();
        assert!((path.cost - 4.0 * SQRT_2).abs() < 1e-9, "{variant}: {}", path.cost);
        assert_eq!(path.positions, vec![p(0, 0), p(1, 1), p(2, 2), p(3, 3), p(4, 4)]);
    }
}

#[test]
fn wall_with_single_gap_forces_route_through_gap() {
    let walls = (0..10).filter(|&y| y != 5).map(|y| p(5, y));
    for movement in [Movement::Orthogonal, Movement::Diagonal] {
        let grid = Grid::with_walls(10, 10, movement, walls.clone());
        for variant in Variant::ALL {
            let session = solve(&grid, p(0, 5), p(9, 5), variant);
            assert_eq!(session.status(), Status::Found);
            let path = session.result().unwrap();
            assert!(path.contains(p(5, 5)), "{variant} {movement:?}: {:?}", path.positions);
            assert_eq!(path.cost, 9.0);
        }
    }
}

#[test]
fn start_equal_to_goal_finishes_on_first_step() {
    let grid = Grid::new(4, 4, Movement::Diagonal);
    for variant in Variant::ALL {
        let mut session = Session::started(&grid, p(2, 2), p(2, 2), options(variant)).unwrap();
        let step = session.step().unwrap();
        assert_eq!(step.status, Status::Found);
        assert_eq!(session.steps(), 1);
        assert_eq!(session.expanded(), 0);
        let path = session.result().unwrap();
        assert_eq!(path.positions, vec![p(2, 2)]);
        assert_eq!(path.cost, 0.0);
    }
}

#[test]
fn enclosed_goal_is_exhausted() {
    let ring: Vec<Position> = (4..=6)
        .flat_map(|x| (4..=6).map(move |y| p(x, y)))
        .filter(|&pos| pos != p(5, 5))
        .collect();
    let grid = Grid::with_walls(10, 10, Movement::Diagonal, ring);
    for variant in Variant::ALL {
        let session = solve(&grid, p(0, 0), p(5, 5), variant);
        assert_eq!(session.status(), Status::Exhausted);
        assert_eq!(session.result(), None);
        // Every reachable cell was closed before giving up.
        assert_eq!(session.expanded(), 100 - 9);
        assert_eq!(session.frontier_len(), 0);
    }
}

#[test]
fn full_wall_separates_start_and_goal() {
    let walls = (0..6).map(|y| p(3, y));
    let grid = Grid::with_walls(6, 6, Movement::Diagonal, walls);
    let mut session = Session::started(&grid, p(0, 0), p(5, 5), SearchOptions::a_star()).unwrap();
    assert_eq!(session.run(), Ok(Status::Exhausted));
    assert_eq!(session.result(), None);
    for y in 0..6 {
        for x in 4..6 {
            assert_eq!(session.cell(p(x, y)).unwrap().g_cost, None);
        }
    }
}
