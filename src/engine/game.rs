//! The game engine: turn state machine and composition root.
//!
//! All mutable game state lives here: board, score, phase, mode, mark
//! assignment, move history, the strategist's RNG, and the pending
//! deferred computer move. Every transition is a method on
//! [`GameEngine`]; there is no ambient state.

use super::deferred::DeferredMove;
use super::invariants;
use super::rules;
use super::score::ScoreBoard;
use super::strategist;
use crate::engine::types::{Board, BoardSize, GameStatus, Mark, Move, PlayMode, Square};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Default cosmetic pause before the computer's move.
pub const DEFAULT_COMPUTER_DELAY: Duration = Duration::from_millis(500);

/// Internal phase of the turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Computer mode: waiting for the human to pick a mark.
    ChoosingMark,
    /// A round is underway.
    Playing {
        /// The mark that moves next.
        to_move: Mark,
    },
    /// A round ended with a winner. The board stays populated until a
    /// reset.
    Over {
        /// The mark that completed a triple.
        winner: Mark,
    },
}

/// Which mark each side controls during a computer-mode match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAssignment {
    /// The mark the human chose.
    pub human: Mark,
    /// The mark left to the computer.
    pub computer: Mark,
}

/// Why a submitted move changed nothing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The cell index is off the board.
    #[display("Cell index is off the board")]
    OutOfBounds,
    /// The square is already occupied.
    #[display("Square is already occupied")]
    SquareOccupied,
    /// The round already has a winner.
    #[display("Round is already over")]
    RoundOver,
    /// The human has not picked a mark yet.
    #[display("Mark choice is still pending")]
    MarkChoicePending,
    /// The computer acts next; human input waits.
    #[display("It is the computer's turn")]
    ComputersTurn,
    /// The computer-move ticket no longer matches the engine state.
    #[display("Computer-move ticket is stale")]
    StaleTicket,
}

/// Result of submitting a move.
///
/// Rejections are values, not errors: an ignored move leaves the engine
/// byte-for-byte unchanged and nothing panics or halts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied; the status it produced. A `Draw` here
    /// means the board has already been replaced for the next round,
    /// score untouched.
    Applied(GameStatus),
    /// The move was a no-op.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// True if the move changed the board.
    pub fn applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }
}

/// Serializable view of engine state for presentation layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board side length.
    pub size: usize,
    /// All squares in row-major order.
    pub squares: Vec<Square>,
    /// Derived status.
    pub status: GameStatus,
    /// Win tallies.
    pub score: ScoreBoard,
    /// Current play mode.
    pub mode: PlayMode,
    /// True while the engine waits for the human's mark choice.
    pub mark_choice_pending: bool,
}

/// The engine owning all mutable game state.
#[derive(Debug, Clone)]
pub struct GameEngine {
    size: BoardSize,
    board: Board,
    phase: Phase,
    mode: PlayMode,
    assignment: Option<MarkAssignment>,
    score: ScoreBoard,
    history: Vec<Move>,
    rng: SmallRng,
    computer_delay: Duration,
    generation: u64,
    pending: Option<DeferredMove>,
}

impl GameEngine {
    /// Creates an engine for two-human play on a board of the given
    /// size, with fresh RNG entropy for the computer opponent.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self::build(size, SmallRng::from_os_rng())
    }

    /// Creates an engine with a seeded RNG, so the computer's random
    /// fallback moves are deterministic.
    #[instrument]
    pub fn with_seed(size: BoardSize, seed: u64) -> Self {
        Self::build(size, SmallRng::seed_from_u64(seed))
    }

    fn build(size: BoardSize, rng: SmallRng) -> Self {
        info!(size = size.get(), "Creating game engine");
        Self {
            size,
            board: Board::new(size),
            phase: Phase::Playing { to_move: Mark::X },
            mode: PlayMode::HumanVsHuman,
            assignment: None,
            score: ScoreBoard::new(),
            history: Vec::new(),
            rng,
            computer_delay: DEFAULT_COMPUTER_DELAY,
            generation: 0,
            pending: None,
        }
    }

    /// Overrides the cosmetic pause before computer moves.
    pub fn set_computer_delay(&mut self, delay: Duration) {
        self.computer_delay = delay;
    }

    // ─────────────────────────────────────────────────────────────
    //  Inputs
    // ─────────────────────────────────────────────────────────────

    /// Submits a human move at `cell`.
    ///
    /// Ignored without state change when the cell is off the board or
    /// occupied, the round is over, the mark choice is pending, or the
    /// computer acts next.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, cell: usize) -> MoveOutcome {
        let to_move = match self.phase {
            Phase::ChoosingMark => {
                debug!("Move ignored: mark choice pending");
                return MoveOutcome::Ignored(IgnoreReason::MarkChoicePending);
            }
            Phase::Over { .. } => {
                debug!("Move ignored: round over");
                return MoveOutcome::Ignored(IgnoreReason::RoundOver);
            }
            Phase::Playing { to_move } => to_move,
        };

        if let Some(assignment) = self.assignment {
            if self.mode == PlayMode::HumanVsComputer && to_move == assignment.computer {
                debug!("Move ignored: computer acts next");
                return MoveOutcome::Ignored(IgnoreReason::ComputersTurn);
            }
        }

        self.place(cell, to_move)
    }

    /// Binds the human to `mark` for this match; the computer takes the
    /// other. Meaningful only while the choice is pending; otherwise a
    /// no-op returning `false`.
    #[instrument(skip(self))]
    pub fn choose_mark(&mut self, mark: Mark) -> bool {
        if self.phase != Phase::ChoosingMark {
            debug!("Mark choice ignored: no choice pending");
            return false;
        }

        self.assignment = Some(MarkAssignment {
            human: mark,
            computer: mark.opponent(),
        });
        self.bump_generation();
        self.phase = Phase::Playing { to_move: Mark::X };
        info!(human = %mark, computer = %mark.opponent(), "Marks assigned");
        self.schedule_computer_if_due();
        true
    }

    /// Fires a previously issued computer-move ticket.
    ///
    /// A stale ticket (any state transition happened since it was
    /// issued) is a no-op, so a deferred move can never land on a
    /// replaced board or a finished round.
    #[instrument(skip(self))]
    pub fn play_deferred(&mut self, ticket: DeferredMove) -> MoveOutcome {
        if self.pending != Some(ticket) || ticket.generation() != self.generation {
            debug!("Stale computer-move ticket ignored");
            return MoveOutcome::Ignored(IgnoreReason::StaleTicket);
        }

        let computer = match (self.phase, self.assignment) {
            (Phase::Playing { to_move }, Some(assignment))
                if to_move == assignment.computer =>
            {
                assignment.computer
            }
            _ => {
                self.pending = None;
                debug!("Computer-move ticket no longer applicable");
                return MoveOutcome::Ignored(IgnoreReason::StaleTicket);
            }
        };

        self.pending = None;
        match strategist::choose_move(&self.board, computer, &mut self.rng) {
            Some(cell) => self.place(cell, computer),
            None => {
                warn!("No empty square left for the computer");
                MoveOutcome::Ignored(IgnoreReason::RoundOver)
            }
        }
    }

    /// Clears the board for a fresh round, keeping the score. In
    /// computer mode the mark choice is re-solicited.
    #[instrument(skip(self))]
    pub fn reset_board_only(&mut self) {
        info!("Resetting board");
        self.reset_board(true);
    }

    /// "New game": clears board and score.
    #[instrument(skip(self))]
    pub fn reset_game_and_score(&mut self) {
        info!("Resetting game and score");
        self.score.reset();
        self.reset_board(true);
    }

    /// Switches between two-human and vs-computer play. Always starts a
    /// fresh match: board and score cleared, assignment dropped.
    #[instrument(skip(self))]
    pub fn toggle_play_mode(&mut self) {
        self.mode = match self.mode {
            PlayMode::HumanVsHuman => PlayMode::HumanVsComputer,
            PlayMode::HumanVsComputer => PlayMode::HumanVsHuman,
        };
        info!(mode = ?self.mode, "Play mode toggled");
        self.score.reset();
        self.reset_board(true);
    }

    /// Replaces the board at a new size. Starts a fresh match: score
    /// zeroed and, in computer mode, the mark choice re-solicited.
    #[instrument(skip(self, size), fields(size = size.get()))]
    pub fn change_board_size(&mut self, size: BoardSize) {
        info!(size = size.get(), "Changing board size");
        self.size = size;
        self.score.reset();
        self.reset_board(true);
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current play mode.
    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    /// Returns the win tallies.
    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    /// Returns the current round's move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the mark assignment, once chosen.
    pub fn mark_assignment(&self) -> Option<MarkAssignment> {
        self.assignment
    }

    /// True while the engine waits for the human's mark choice.
    pub fn mark_choice_pending(&self) -> bool {
        self.phase == Phase::ChoosingMark
    }

    /// Returns the pending computer-move ticket, if one is scheduled.
    pub fn pending_computer_move(&self) -> Option<DeferredMove> {
        self.pending
    }

    /// Current status, derived on demand from board and turn.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = rules::check_winner(&self.board) {
            return GameStatus::Won(winner);
        }
        if rules::is_full(&self.board) {
            return GameStatus::Draw;
        }
        match self.phase {
            Phase::Playing { to_move } => GameStatus::InProgress(to_move),
            // X always opens, so this is what the first move will be.
            Phase::ChoosingMark => GameStatus::InProgress(Mark::X),
            Phase::Over { winner } => GameStatus::Won(winner),
        }
    }

    /// Returns a serializable view of the engine state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            size: self.board.size(),
            squares: self.board.squares().to_vec(),
            status: self.status(),
            score: self.score,
            mode: self.mode,
            mark_choice_pending: self.mark_choice_pending(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    /// Applies an in-turn move; shared by the human and computer paths.
    fn place(&mut self, cell: usize, mark: Mark) -> MoveOutcome {
        if cell >= self.board.cell_count() {
            debug!(cell, "Move ignored: off the board");
            return MoveOutcome::Ignored(IgnoreReason::OutOfBounds);
        }
        if !self.board.is_empty(cell) {
            debug!(cell, "Move ignored: square occupied");
            return MoveOutcome::Ignored(IgnoreReason::SquareOccupied);
        }

        self.board.set(cell, Square::Occupied(mark));
        self.history.push(Move::new(mark, cell));
        self.bump_generation();

        let status = if let Some(winner) = rules::check_winner(&self.board) {
            self.score.record_win(winner);
            self.phase = Phase::Over { winner };
            info!(winner = %winner, "Round won");
            GameStatus::Won(winner)
        } else if rules::is_full(&self.board) {
            // A draw never parks on a terminal screen: the next round
            // starts at once, score and assignment untouched.
            info!("Round drawn, starting the next round");
            self.reset_board(false);
            GameStatus::Draw
        } else {
            let next = mark.opponent();
            self.phase = Phase::Playing { to_move: next };
            self.schedule_computer_if_due();
            GameStatus::InProgress(next)
        };

        invariants::assert_invariants(self);
        MoveOutcome::Applied(status)
    }

    /// Replaces the board and restarts the round.
    ///
    /// Explicit resets re-enter the mark choice in computer mode; the
    /// automatic draw reset keeps the assignment and rolls straight
    /// into the next round.
    fn reset_board(&mut self, explicit: bool) {
        self.board = Board::new(self.size);
        self.history.clear();
        self.bump_generation();

        if explicit && self.mode == PlayMode::HumanVsComputer {
            self.assignment = None;
            self.phase = Phase::ChoosingMark;
        } else {
            self.phase = Phase::Playing { to_move: Mark::X };
            self.schedule_computer_if_due();
        }
    }

    /// Invalidates any held ticket and cancels the pending one.
    fn bump_generation(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// Issues a deferred-move ticket when the computer acts next.
    fn schedule_computer_if_due(&mut self) {
        if self.mode != PlayMode::HumanVsComputer {
            return;
        }
        let Some(assignment) = self.assignment else {
            return;
        };
        if let Phase::Playing { to_move } = self.phase {
            if to_move == assignment.computer {
                let ticket = DeferredMove::new(self.generation, self.computer_delay);
                debug!(generation = self.generation, "Scheduling computer move");
                self.pending = Some(ticket);
            }
        }
    }
}
