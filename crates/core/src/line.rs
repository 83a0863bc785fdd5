//! Line reducer - slide and merge a single row or column
//!
//! The reducer knows nothing about grid geometry. It always slides toward
//! index 0; callers pick the traversal order to get the other directions.
//!
//! Rules for one pass:
//! - Empty cells (`0`) are squeezed out, preserving order
//! - Adjacent equal tiles merge into one tile of double value
//! - A freshly merged tile never merges again in the same pass
//! - Tiles of [`MAX_TILE`] never merge
//! - The line is padded back to its length with empty cells
//! - The score delta is the sum of all merged (doubled) values

use crate::types::{Tile, MAX_TILE};

/// Reduce `line` in place and return the score delta.
///
/// Zero-allocation: a write cursor trails the read cursor, so every
/// non-empty tile is moved at most once.
///
/// # Examples
///
/// ```
/// use tui_2048_core::line::reduce_line;
///
/// let mut line = [2, 0, 2, 2];
/// assert_eq!(reduce_line(&mut line), 4);
/// assert_eq!(line, [4, 2, 0, 0]);
/// ```
pub fn reduce_line(line: &mut [Tile]) -> u64 {
    let mut write = 0usize;
    // Whether the last written tile may still absorb an equal neighbour.
    let mut mergeable = false;
    let mut score = 0u64;

    for read in 0..line.len() {
        let value = line[read];
        if value == 0 {
            continue;
        }
        line[read] = 0;

        if mergeable && value < MAX_TILE && line[write - 1] == value {
            let merged = value * 2;
            line[write - 1] = merged;
            score += merged as u64;
            mergeable = false;
        } else {
            line[write] = value;
            write += 1;
            mergeable = true;
        }
    }

    score
}

/// Reduce a copy of `line`, returning the new line and the score delta.
pub fn reduce(line: &[Tile]) -> (Vec<Tile>, u64) {
    let mut out = line.to_vec();
    let score = reduce_line(&mut out);
    (out, score)
}
