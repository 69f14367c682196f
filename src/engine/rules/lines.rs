//! Enumeration of candidate winning lines.
//!
//! A line is always a run of exactly three cells, regardless of board
//! size: a 10×10 board is won by any three-in-a-row anywhere on it.
//! Run length is a fixed property of the game, not a function of N.

/// Three row-major cell indices forming a geometric run.
pub type Triple = [usize; 3];

/// All length-3 runs on an n×n board, in fixed scan order:
/// horizontal rows, then columns, then ↘ diagonals, then ↙ diagonals.
///
/// The order matters to callers that stop at the first match, so it is
/// part of the contract.
pub fn triples(size: usize) -> Vec<Triple> {
    let n = size;
    let mut lines = Vec::with_capacity(2 * n * (n - 2) + 2 * (n - 2) * (n - 2));

    // Horizontal: row i, start column j
    for i in 0..n {
        for j in 0..=n - 3 {
            let a = i * n + j;
            lines.push([a, a + 1, a + 2]);
        }
    }

    // Vertical: column i, start row j
    for i in 0..n {
        for j in 0..=n - 3 {
            let a = j * n + i;
            lines.push([a, a + n, a + 2 * n]);
        }
    }

    // Diagonal ↘ from top-left anchor (i, j)
    for i in 0..=n - 3 {
        for j in 0..=n - 3 {
            lines.push([i * n + j, (i + 1) * n + j + 1, (i + 2) * n + j + 2]);
        }
    }

    // Diagonal ↙ over the same anchor range
    for i in 0..=n - 3 {
        for j in 0..=n - 3 {
            lines.push([i * n + j + 2, (i + 1) * n + j + 1, (i + 2) * n + j]);
        }
    }

    lines
}
