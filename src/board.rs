use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

use crate::error::BoardError;
use crate::grid::{Grid, Movement, Position};

/// A grid together with the endpoints to search between.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub grid: Grid,
    pub start: Position,
    pub goal: Position,
}

impl Board {
    /// Parses a text board: `.` open, `#` wall, `S` start, `G` goal.
    ///
    /// Surrounding whitespace and blank lines are ignored; every row must
    /// have the same width.
    pub fn parse(text: &str, movement: Movement) -> Result<Self, BoardError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(BoardError::Empty);
        };
        let width = first.chars().count();
        let height = rows.len();

        let mut walls = Vec::new();
        let mut start = None;
        let mut goal = None;
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(BoardError::RaggedRow { row: y, expected: width, found });
            }
            for (x, tile) in row.chars().enumerate() {
                let pos = Position { x, y };
                match tile {
                    '.' => {}
                    '#' => walls.push(pos),
                    'S' if start.is_some() => return Err(BoardError::Duplicate('S')),
                    'S' => start = Some(pos),
                    'G' if goal.is_some() => return Err(BoardError::Duplicate('G')),
                    'G' => goal = Some(pos),
                    _ => return Err(BoardError::UnknownTile { tile, pos }),
                }
            }
        }

        Ok(Board {
            grid: Grid::with_walls(width, height, movement, walls),
            start: start.ok_or(BoardError::MissingStart)?,
            goal: goal.ok_or(BoardError::MissingGoal)?,
        })
    }

    /// Generates a random board.
    ///
    /// Start and goal sit on opposite edges: left/right for a horizontal
    /// board, top/bottom for a vertical one, chosen with equal chance. A
    /// three-cell-thick band of walls across the middle then spans the rows
    /// (or columns) between them, and up to `num_walls` extra walls are
    /// scattered at random. Start and goal are never walled.
    pub fn generate<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        num_walls: usize,
        movement: Movement,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        if width < 3 || height < 3 {
            return Err(BoardError::TooSmall { width, height });
        }

        let horizontal = rng.gen_bool(0.5);
        let (start, goal) = if horizontal {
            (
                Position { x: 0, y: rng.gen_range(0..height) },
                Position { x: width - 1, y: rng.gen_range(0..height) },
            )
        } else {
            (
                Position { x: rng.gen_range(0..width), y: 0 },
                Position { x: rng.gen_range(0..width), y: height - 1 },
            )
        };

        let mut walls = FxHashSet::default();
        if horizontal {
            let center = width / 2;
            for x in center - 1..=center + 1 {
                for y in start.y.min(goal.y)..=start.y.max(goal.y) {
                    walls.insert(Position { x, y });
                }
            }
        } else {
            let center = height / 2;
            for y in center - 1..=center + 1 {
                for x in start.x.min(goal.x)..=start.x.max(goal.x) {
                    walls.insert(Position { x, y });
                }
            }
        }
        walls.remove(&start);
        walls.remove(&goal);
        let band = walls.len();

        // Scatter extra walls, giving up after a bounded number of attempts.
        let mut walls_placed = 0;
        let mut attempts = 0;
        while walls_placed < num_walls && attempts < num_walls * 3 {
            let pos = Position {
                x: rng.gen_range(0..width),
                y: rng.gen_range(0..height),
            };
            if pos != start && pos != goal && walls.insert(pos) {
                walls_placed += 1;
            }
            attempts += 1;
        }

        debug!(
            "generated {}x{} {} board: start {}, goal {}, {} band walls, {} scattered",
            width,
            height,
            if horizontal { "horizontal" } else { "vertical" },
            start,
            goal,
            band,
            walls_placed
        );

        Ok(Board {
            grid: Grid::with_walls(width, height, movement, walls),
            start,
            goal,
        })
    }

    /// [`Board::generate`] with a `StdRng` seeded from `seed`.
    pub fn from_seed(
        width: usize,
        height: usize,
        num_walls: usize,
        movement: Movement,
        seed: u64,
    ) -> Result<Self, BoardError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(width, height, num_walls, movement, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board = Board::parse(
            "
            S.#
            ..#
            ..G
            ",
            Movement::Orthogonal,
        )
        .unwrap();
        assert_eq!(board.grid.width(), 3);
        assert_eq!(board.grid.height(), 3);
        assert_eq!(board.start, Position::new(0, 0));
        assert_eq!(board.goal, Position::new(2, 2));
        assert!(board.grid.is_blocked(Position::new(2, 0)));
        assert!(board.grid.is_blocked(Position::new(2, 1)));
        assert_eq!(board.grid.wall_count(), 2);
        assert_eq!(board.grid.movement(), Movement::Orthogonal);
    }

    #[test]
    fn test_parse_errors() {
        let m = Movement::Diagonal;
        assert_eq!(Board::parse("  \n ", m), Err(BoardError::Empty));
        assert_eq!(
            Board::parse("S..\n.G", m),
            Err(BoardError::RaggedRow { row: 1, expected: 3, found: 2 })
        );
        assert_eq!(
            Board::parse("S?G", m),
            Err(BoardError::UnknownTile { tile: '?', pos: Position::new(1, 0) })
        );
        assert_eq!(Board::parse("..G", m), Err(BoardError::MissingStart));
        assert_eq!(Board::parse("S..", m), Err(BoardError::MissingGoal));
        assert_eq!(Board::parse("SSG", m), Err(BoardError::Duplicate('S')));
    }

    #[test]
    fn test_generate_rejects_tiny_boards() {
        assert_eq!(
            Board::from_seed(2, 10, 0, Movement::Diagonal, 1),
            Err(BoardError::TooSmall { width: 2, height: 10 })
        );
    }

    #[test]
    fn test_generate_is_reproducible() {
        let a = Board::from_seed(12, 9, 15, Movement::Diagonal, 42).unwrap();
        let b = Board::from_seed(12, 9, 15, Movement::Diagonal, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_endpoints_on_opposite_edges() {
        for seed in 0..50 {
            let board = Board::from_seed(10, 10, 20, Movement::Diagonal, seed).unwrap();
            let (s, g) = (board.start, board.goal);
            let horizontal = s.x == 0 && g.x == 9;
            let vertical = s.y == 0 && g.y == 9;
            assert!(horizontal || vertical, "seed {seed}: {s} -> {g}");
            assert!(!board.grid.is_blocked(s));
            assert!(!board.grid.is_blocked(g));
        }
    }

    #[test]
    fn test_generated_band_blocks_center() {
        for seed in 0..20 {
            let board = Board::from_seed(10, 10, 0, Movement::Diagonal, seed).unwrap();
            let (s, g) = (board.start, board.goal);
            let blocked = |x: usize, y: usize| board.grid.is_blocked(Position::new(x, y));
            let across_columns = (4..=6).all(|x| blocked(x, s.y.min(g.y)));
            let across_rows = (4..=6).all(|y| blocked(s.x.min(g.x), y));
            assert!(across_columns || across_rows, "seed {seed}");
            assert!(!board.grid.get_neighbors(&s).is_empty());
        }
    }
}
