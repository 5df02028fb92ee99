use std::fmt::Write;

use crate::algorithms::Session;
use crate::board::Board;
use crate::grid::Position;

pub const LEGEND: &str =
    "Legend: S=Start, G=Goal, #=Wall, *=Path, x=Closed, o=Frontier, .=Untouched";

/// Draws the board with the session's current search state.
///
/// Column numbers run along the top and row numbers down the left, both
/// modulo 10 for the columns.
pub fn render_frame(board: &Board, session: &Session<'_>) -> String {
    let path = session.result().map(|p| p.positions).unwrap_or_default();
    let grid = &board.grid;
    let mut out = String::new();

    out.push_str("   ");
    for x in 0..grid.width() {
        let _ = write!(out, "{:2}", x % 10);
    }
    out.push('\n');

    for y in 0..grid.height() {
        let _ = write!(out, "{:2} ", y);
        for x in 0..grid.width() {
            let pos = Position { x, y };
            let tile = if pos == board.start {
                'S'
            } else if pos == board.goal {
                'G'
            } else if grid.is_blocked(pos) {
                '#'
            } else if path.contains(&pos) {
                '*'
            } else if session.is_closed(pos) {
                'x'
            } else if session.in_frontier(pos) {
                'o'
            } else {
                '.'
            };
            let _ = write!(out, " {}", tile);
        }
        out.push('\n');
    }
    out
}

/// Clear the terminal and home the cursor.
pub fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::SearchOptions;
    use crate::grid::Movement;

    fn rows(frame: &str) -> Vec<String> {
        frame
            .lines()
            .skip(1)
            .map(|line| line[3..].split_whitespace().collect())
            .collect()
    }

    #[test]
    fn test_frame_before_and_after_search() {
        let board = Board::parse("S.#.\n..#G\n....", Movement::Orthogonal).unwrap();
        let mut session =
            Session::started(&board.grid, board.start, board.goal, SearchOptions::dijkstra())
                .unwrap();
        assert_eq!(rows(&render_frame(&board, &session)), vec!["S.#.", "..#G", "...."]);

        session.step().unwrap();
        assert_eq!(rows(&render_frame(&board, &session)), vec!["So#.", "o.#G", "...."]);

        session.run().unwrap();
        let frame = render_frame(&board, &session);
        let drawn = rows(&frame);
        // Any shortest route has to swing under the wall along the bottom row.
        assert!(drawn[2].ends_with("***"), "{frame}");
        assert!(frame.starts_with("    0 1 2 3\n"));
    }
}
