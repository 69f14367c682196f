//! Move selection for the computer opponent.

use super::rules::lines;
use crate::engine::types::{Board, Mark, Square};
use rand::Rng;
use tracing::{debug, instrument};

/// Picks the computer's move on a non-terminal board.
///
/// Completes the computer's own two-in-a-line when one exists (first
/// such line in the shared scan order), otherwise plays a uniformly
/// random empty cell from the injected RNG. The opponent's near-wins
/// are never blocked; that asymmetry is a characteristic of this
/// opponent, not an oversight.
///
/// Returns `None` only when the board has no empty cell left.
#[instrument(skip(board, rng), fields(size = board.size()))]
pub fn choose_move(board: &Board, ai_mark: Mark, rng: &mut impl Rng) -> Option<usize> {
    if let Some(cell) = completing_cell(board, ai_mark) {
        debug!(cell, "Completing own line");
        return Some(cell);
    }

    let open: Vec<usize> = board.empty_cells().collect();
    if open.is_empty() {
        return None;
    }
    let cell = open[rng.random_range(0..open.len())];
    debug!(cell, "No completion available, playing a random empty cell");
    Some(cell)
}

/// Finds the empty cell of the first line holding exactly two of `mark`.
fn completing_cell(board: &Board, mark: Mark) -> Option<usize> {
    let squares = board.squares();
    for triple in lines::triples(board.size()) {
        let mut own = 0;
        let mut open = None;
        for &cell in &triple {
            match squares[cell] {
                Square::Occupied(m) if m == mark => own += 1,
                Square::Empty => open = Some(cell),
                Square::Occupied(_) => {}
            }
        }
        if own == 2 {
            if let Some(cell) = open {
                return Some(cell);
            }
        }
    }
    None
}
