//! First-class invariants over engine state.
//!
//! Invariants are logical properties that must hold throughout a round.
//! They are testable independently and are asserted in debug builds
//! after every applied move.

use super::game::GameEngine;
use crate::engine::types::Square;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: squares never change once occupied.
///
/// Verified by replaying the round's move history onto a fresh board
/// and comparing with the current board.
pub struct MonotonicBoard;

impl Invariant<GameEngine> for MonotonicBoard {
    fn holds(engine: &GameEngine) -> bool {
        let mut replayed = engine.board().cleared();

        for mov in engine.history() {
            if !replayed.is_empty(mov.cell) {
                warn!(cell = mov.cell, "History replays onto an occupied square");
                return false;
            }
            replayed.set(mov.cell, Square::Occupied(mov.mark));
        }

        replayed == *engine.board()
    }

    fn description() -> &'static str {
        "Squares never change once occupied"
    }
}

/// Invariant: marks in the move history strictly alternate.
pub struct AlternatingMarks;

impl Invariant<GameEngine> for AlternatingMarks {
    fn holds(engine: &GameEngine) -> bool {
        let consistent = engine
            .history()
            .windows(2)
            .all(|pair| pair[1].mark == pair[0].mark.opponent());
        if !consistent {
            warn!("Move history does not alternate marks");
        }
        consistent
    }

    fn description() -> &'static str {
        "Marks in the move history strictly alternate"
    }
}

/// Invariant: the history accounts for every occupied square.
pub struct HistoryComplete;

impl Invariant<GameEngine> for HistoryComplete {
    fn holds(engine: &GameEngine) -> bool {
        let filled = engine
            .board()
            .squares()
            .iter()
            .filter(|sq| !matches!(sq, Square::Empty))
            .count();
        let history_len = engine.history().len();

        let consistent = filled == history_len;
        if !consistent {
            warn!(filled, history_len, "History length disagrees with the board");
        }
        consistent
    }

    fn description() -> &'static str {
        "The move history accounts for every occupied square"
    }
}

/// Asserts all engine invariants in debug builds.
pub(crate) fn assert_invariants(engine: &GameEngine) {
    debug_assert!(
        MonotonicBoard::holds(engine),
        "{}",
        MonotonicBoard::description()
    );
    debug_assert!(
        AlternatingMarks::holds(engine),
        "{}",
        AlternatingMarks::description()
    );
    debug_assert!(
        HistoryComplete::holds(engine),
        "{}",
        HistoryComplete::description()
    );
}
