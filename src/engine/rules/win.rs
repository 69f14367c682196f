//! Win detection logic.

use super::lines;
use crate::engine::types::{Board, Mark, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Scans the candidate lines in their fixed order and returns the mark
/// of the first completed triple, or `None` if no triple is complete.
/// Under alternating play at most one mark can hold a completed triple,
/// so the scan order only decides which winning line is found first.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    let squares = board.squares();
    for [a, b, c] in lines::triples(board.size()) {
        let sq = squares[a];
        if sq != Square::Empty && sq == squares[b] && sq == squares[c] {
            return match sq {
                Square::Occupied(mark) => Some(mark),
                Square::Empty => None,
            };
        }
    }

    None
}
