//! Trigrid - an N×N tic-tac-toe engine where any three in a row wins.
//!
//! The win condition is always a run of exactly three, whatever the
//! board size: a 10×10 board is won by any three-in-a-row anywhere on
//! it, not ten-in-a-row.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns all mutable state (board, score,
//!   turn, mode, mark assignment) and exposes the move/reset/resize
//!   operations. Invalid moves are no-ops surfaced as values, never
//!   errors.
//! - **Rules**: pure functions over the board: win scan, draw check,
//!   and the shared line geometry.
//! - **Strategist**: the computer opponent. Completes its own
//!   two-in-a-line if possible, otherwise plays a random empty cell.
//! - **Deferred moves**: the computer acts through a cancellable
//!   ticket so a pending move can never land on a reset board.
//!
//! # Example
//!
//! ```
//! use trigrid::{BoardSize, GameEngine, GameStatus, Mark};
//!
//! let size = BoardSize::try_from(3)?;
//! let mut engine = GameEngine::new(size);
//! engine.apply_move(0);
//! engine.apply_move(3);
//! engine.apply_move(1);
//! engine.apply_move(4);
//! engine.apply_move(2);
//! assert_eq!(engine.status(), GameStatus::Won(Mark::X));
//! # Ok::<(), trigrid::SizeError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod engine;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Engine operations
pub use engine::game::{
    DEFAULT_COMPUTER_DELAY, GameEngine, GameSnapshot, IgnoreReason, MarkAssignment,
    MoveOutcome,
};

// Crate-level exports - Deferred computer moves
pub use engine::deferred::DeferredMove;

// Crate-level exports - Score
pub use engine::score::ScoreBoard;

// Crate-level exports - Domain types
pub use engine::types::{
    Board, BoardSize, GameStatus, MIN_BOARD_SIZE, Mark, Move, PlayMode, SizeError, Square,
};
