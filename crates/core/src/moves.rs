//! Move engine - apply the line reducer across the whole grid
//!
//! Every direction is expressed as a set of lines read toward the target
//! edge:
//! - Left: each row, left to right
//! - Right: each row, right to left
//! - Up: each column, top to bottom
//! - Down: each column, bottom to top
//!
//! A line is gathered into a scratch buffer, reduced, and written back in
//! the same order, which is the reverse/transpose dance done by index math.

use crate::grid::Grid;
use crate::line::reduce_line;
use crate::types::{Direction, Tile};

/// Result of applying one move to a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// True if any cell differs from before the move.
    pub changed: bool,
    /// Sum of all merge values produced by the move.
    pub score: u64,
}

/// Slide and merge every line of `grid` toward `direction`.
pub fn apply_move(grid: &mut Grid, direction: Direction) -> MoveOutcome {
    let (rows, cols) = (grid.rows(), grid.cols());
    let (line_count, line_len) = if direction.is_horizontal() {
        (rows, cols)
    } else {
        (cols, rows)
    };

    let cells = grid.cells_mut();
    let mut scratch: Vec<Tile> = Vec::with_capacity(line_len);
    let mut outcome = MoveOutcome::default();

    for line in 0..line_count {
        scratch.clear();
        scratch.extend((0..line_len).map(|pos| cells[cell_index(direction, rows, cols, line, pos)]));

        outcome.score += reduce_line(&mut scratch);

        for (pos, &value) in scratch.iter().enumerate() {
            let idx = cell_index(direction, rows, cols, line, pos);
            if cells[idx] != value {
                cells[idx] = value;
                outcome.changed = true;
            }
        }
    }

    outcome
}

/// Flat index of position `pos` along line `line` for `direction`.
///
/// Position 0 is the cell on the edge tiles slide toward.
#[inline(always)]
fn cell_index(direction: Direction, rows: usize, cols: usize, line: usize, pos: usize) -> usize {
    match direction {
        Direction::Left => line * cols + pos,
        Direction::Right => line * cols + (cols - 1 - pos),
        Direction::Up => pos * cols + line,
        Direction::Down => (rows - 1 - pos) * cols + line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[Tile]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_move_left() {
        let mut g = grid(&[&[2, 2, 4, 0], &[2, 0, 2, 2], &[0, 0, 0, 0], &[4, 8, 16, 32]]);
        let outcome = apply_move(&mut g, Direction::Left);
        assert!(outcome.changed);
        assert_eq!(outcome.score, 8);
        assert_eq!(
            g.to_rows(),
            vec![
                vec![4, 4, 0, 0],
                vec![4, 2, 0, 0],
                vec![0, 0, 0, 0],
                vec![4, 8, 16, 32],
            ]
        );
    }

    #[test]
    fn test_move_right() {
        let mut g = grid(&[&[2, 2, 4, 0], &[2, 0, 2, 2]]);
        let outcome = apply_move(&mut g, Direction::Right);
        assert!(outcome.changed);
        assert_eq!(outcome.score, 8);
        assert_eq!(g.to_rows(), vec![vec![0, 0, 4, 4], vec![0, 0, 2, 4]]);
    }

    #[test]
    fn test_move_up() {
        let mut g = grid(&[&[2, 0], &[2, 4], &[0, 4], &[8, 4]]);
        let outcome = apply_move(&mut g, Direction::Up);
        assert!(outcome.changed);
        assert_eq!(outcome.score, 12);
        assert_eq!(
            g.to_rows(),
            vec![vec![4, 8], vec![8, 4], vec![0, 0], vec![0, 0]]
        );
    }

    #[test]
    fn test_move_down() {
        let mut g = grid(&[&[2, 0], &[2, 4], &[0, 4], &[8, 4]]);
        let outcome = apply_move(&mut g, Direction::Down);
        assert!(outcome.changed);
        assert_eq!(outcome.score, 12);
        assert_eq!(
            g.to_rows(),
            vec![vec![0, 0], vec![0, 0], vec![4, 4], vec![8, 8]]
        );
    }

    #[test]
    fn test_unchanged_move_reports_no_change() {
        let mut g = grid(&[&[2, 4], &[0, 0]]);
        let before = g.clone();
        let outcome = apply_move(&mut g, Direction::Left);
        assert_eq!(outcome, MoveOutcome { changed: false, score: 0 });
        assert_eq!(g, before);
    }

    #[test]
    fn test_locked_grid_is_unchanged() {
        let rows: &[&[Tile]] = &[&[2, 4, 2], &[4, 2, 4], &[2, 4, 2]];
        for dir in Direction::ALL {
            let mut g = grid(rows);
            assert!(!apply_move(&mut g, dir).changed, "{:?} should be blocked", dir);
            assert_eq!(g, grid(rows));
        }
    }

    #[test]
    fn test_non_square_grid() {
        let mut g = grid(&[&[2, 2, 2, 2, 2], &[0, 0, 0, 0, 4]]);
        let outcome = apply_move(&mut g, Direction::Down);
        assert!(outcome.changed);
        assert_eq!(outcome.score, 0);
        assert_eq!(
            g.to_rows(),
            vec![vec![0, 0, 0, 0, 2], vec![2, 2, 2, 2, 4]]
        );
    }
}
