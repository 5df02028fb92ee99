use std::f64::consts::SQRT_2;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
}

/// Which adjacent cells count as neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Movement {
    /// 4-neighborhood, every step costs 1.
    Orthogonal,
    /// 8-neighborhood, diagonal steps cost √2.
    #[default]
    Diagonal,
}

impl Movement {
    pub fn allows_diagonal(self) -> bool {
        self == Movement::Diagonal
    }
}

/// Offsets in neighbor scan order: `dx` outer, `dy` inner, each over -1..=1.
///
/// Tie-breaking in the search depends on this order, so it must not change.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Rectangular board topology. Cells are stored row-major, so the index of
/// `(x, y)` is `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    movement: Movement,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an open grid with no walls.
    pub fn new(width: usize, height: usize, movement: Movement) -> Self {
        Grid {
            width,
            height,
            movement,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Creates a grid and places a wall on every in-bounds position in `walls`.
    pub fn with_walls<I>(width: usize, height: usize, movement: Movement, walls: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut grid = Grid::new(width, height, movement);
        for pos in walls {
            grid.set_cell(pos, Cell::Wall);
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    /// Number of cells on the board.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Flat arena index of `pos`, or `None` when it lies outside the board.
    pub fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos).then(|| pos.y * self.width + pos.x)
    }

    /// Inverse of [`Grid::index`]. `index` must be below [`Grid::len`].
    pub fn position(&self, index: usize) -> Position {
        Position {
            x: index % self.width,
            y: index / self.width,
        }
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Overwrites a cell. Out-of-bounds positions are ignored and reported as `false`.
    pub fn set_cell(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Out-of-bounds positions count as blocked.
    pub fn is_blocked(&self, pos: Position) -> bool {
        self.cell(pos) != Some(Cell::Empty)
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Wall).count()
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len()).map(move |i| self.position(i))
    }

    /// Walkable cells adjacent to `pos`, in the fixed scan order of
    /// `dx` outer then `dy` inner (each -1, 0, 1). Diagonal offsets are
    /// skipped under [`Movement::Orthogonal`].
    pub fn get_neighbors(&self, pos: &Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(8);
        let (x, y) = (pos.x as i64, pos.y as i64);

        for &(dx, dy) in &NEIGHBOR_OFFSETS {
            if dx != 0 && dy != 0 && !self.movement.allows_diagonal() {
                continue;
            }
            let nx = x + dx;
            let ny = y + dy;

            if nx >= 0 && nx < self.width as i64 && ny >= 0 && ny < self.height as i64 {
                let next_pos = Position { x: nx as usize, y: ny as usize };
                if !self.is_blocked(next_pos) {
                    neighbors.push(next_pos);
                }
            }
        }
        neighbors
    }

    /// Cost of moving between two adjacent cells: 1 for an orthogonal step,
    /// √2 for a diagonal one. Any other pair is not an edge.
    pub fn step_cost(a: Position, b: Position) -> Option<f64> {
        match (a.x.abs_diff(b.x), a.y.abs_diff(b.y)) {
            (1, 0) | (0, 1) => Some(1.0),
            (1, 1) => Some(SQRT_2),
            _ => None,
        }
    }

    /// Whether `a -> b` is a move the search may take on this grid.
    pub fn is_edge(&self, a: Position, b: Position) -> bool {
        self.get_neighbors(&a).contains(&b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_index_round_trip_is_row_major() {
        let g = Grid::new(4, 3, Movement::Diagonal);
        assert_eq!(g.index(p(0, 0)), Some(0));
        assert_eq!(g.index(p(3, 0)), Some(3));
        assert_eq!(g.index(p(0, 1)), Some(4));
        assert_eq!(g.index(p(4, 0)), None);
        assert_eq!(g.index(p(0, 3)), None);
        assert_eq!(g.position(7), p(3, 1));
    }

    #[test]
    fn test_neighbor_scan_order() {
        let g = Grid::new(3, 3, Movement::Diagonal);
        assert_eq!(
            g.get_neighbors(&p(1, 1)),
            vec![p(0, 0), p(0, 1), p(0, 2), p(1, 0), p(1, 2), p(2, 0), p(2, 1), p(2, 2)]
        );
    }

    #[test]
    fn test_orthogonal_neighbors_skip_diagonals() {
        let g = Grid::new(3, 3, Movement::Orthogonal);
        assert_eq!(g.get_neighbors(&p(1, 1)), vec![p(0, 1), p(1, 0), p(1, 2), p(2, 1)]);
    }

    #[test]
    fn test_neighbors_clip_at_corner() {
        let g = Grid::new(5, 5, Movement::Diagonal);
        assert_eq!(g.get_neighbors(&p(0, 0)), vec![p(0, 1), p(1, 0), p(1, 1)]);
        assert_eq!(g.get_neighbors(&p(4, 4)), vec![p(3, 3), p(3, 4), p(4, 3)]);
    }

    #[test]
    fn test_walls_are_never_neighbors() {
        let g = Grid::with_walls(3, 3, Movement::Diagonal, [p(0, 1), p(2, 2)]);
        let n = g.get_neighbors(&p(1, 1));
        assert_eq!(n.len(), 6);
        assert!(!n.contains(&p(0, 1)));
        assert!(!n.contains(&p(2, 2)));
        assert_eq!(g.wall_count(), 2);
    }

    #[test]
    fn test_step_cost() {
        assert_eq!(Grid::step_cost(p(1, 1), p(2, 1)), Some(1.0));
        assert_eq!(Grid::step_cost(p(1, 1), p(1, 0)), Some(1.0));
        assert_eq!(Grid::step_cost(p(1, 1), p(0, 0)), Some(SQRT_2));
        assert_eq!(Grid::step_cost(p(1, 1), p(1, 1)), None);
        assert_eq!(Grid::step_cost(p(0, 0), p(2, 0)), None);
    }

    #[test]
    fn test_out_of_bounds_is_blocked() {
        let mut g = Grid::new(2, 2, Movement::Orthogonal);
        assert!(g.is_blocked(p(2, 0)));
        assert!(!g.set_cell(p(5, 5), Cell::Wall));
        assert!(g.set_cell(p(1, 1), Cell::Wall));
        assert!(g.is_blocked(p(1, 1)));
        assert!(!g.is_edge(p(0, 1), p(1, 1)));
        assert!(g.is_edge(p(0, 1), p(0, 0)));
    }
}
