//! Game-logic engine for grid tic-tac-toe.
//!
//! Pure rules (`rules`), the computer opponent (`strategist`), win
//! tallies (`score`), deferred-move scheduling (`deferred`), runtime
//! invariants (`invariants`), and the owning state machine (`game`).

pub mod deferred;
pub mod game;
pub mod invariants;
pub mod rules;
pub mod score;
pub mod strategist;
pub mod types;
