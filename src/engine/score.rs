//! Win tallies across rounds.

use crate::engine::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Win counts per mark.
///
/// The tally survives board resets within a session and is zeroed only
/// by an explicit new game, a mode toggle, or a board-size change.
/// Recording a win and resetting are the only mutation paths.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize,
)]
pub struct ScoreBoard {
    /// Rounds won by X.
    x: u32,
    /// Rounds won by O.
    o: u32,
}

impl ScoreBoard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the win count for a mark.
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Credits a round win to `mark`.
    #[instrument(skip(self))]
    pub(crate) fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
        }
    }

    /// Zeros both counters.
    #[instrument(skip(self))]
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_win_increments_one_counter() {
        let mut score = ScoreBoard::new();
        score.record_win(Mark::X);
        score.record_win(Mark::X);
        score.record_win(Mark::O);
        assert_eq!(score.get(Mark::X), 2);
        assert_eq!(score.get(Mark::O), 1);
    }

    #[test]
    fn test_reset_zeros_both() {
        let mut score = ScoreBoard::new();
        score.record_win(Mark::X);
        score.record_win(Mark::O);
        score.reset();
        assert_eq!(score, ScoreBoard::new());
    }
}
