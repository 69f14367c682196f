//! Draw detection logic.

use crate::engine::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw; the engine then starts the
/// next round immediately rather than parking on a terminal screen.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::engine::types::{BoardSize, Mark};

    fn board(n: usize) -> Board {
        Board::new(BoardSize::try_from(n).unwrap())
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&board(3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut b = board(3);
        b.set(4, Square::Occupied(Mark::X));
        assert!(!is_full(&b));
    }

    #[test]
    fn test_full_board() {
        let mut b = board(3);
        for cell in 0..9 {
            b.set(cell, Square::Occupied(Mark::X));
        }
        assert!(is_full(&b));
    }

    #[test]
    fn test_drawn_position_has_no_winner() {
        // X O X / O X X / O X O: full, no triple.
        let mut b = board(3);
        for (cell, mark) in [
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::O),
            (4, Mark::X),
            (5, Mark::X),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::O),
        ] {
            b.set(cell, Square::Occupied(mark));
        }
        assert!(is_full(&b));
        assert_eq!(check_winner(&b), None);
    }
}
