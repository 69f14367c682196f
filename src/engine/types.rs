//! Core domain types for the grid engine.

use serde::{Deserialize, Serialize};

/// A player mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (opens every round).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// The smallest side length that can hold a three-in-a-row.
pub const MIN_BOARD_SIZE: usize = 3;

/// A validated board side length.
///
/// Construction goes through [`TryFrom<usize>`] so an undersized value
/// fails at the boundary instead of corrupting board geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Returns the side length.
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = SizeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value < MIN_BOARD_SIZE {
            Err(SizeError { size: value })
        } else {
            Ok(Self(value))
        }
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// A side length that cannot hold a three-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Board size must be at least {MIN_BOARD_SIZE}, got {size}")]
pub struct SizeError {
    /// The rejected value.
    pub size: usize,
}

/// Who is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    /// Two humans sharing the board.
    HumanVsHuman,
    /// One human against the built-in opponent.
    HumanVsComputer,
}

/// Current status of a round, derived on demand from board and turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Round is ongoing; the contained mark moves next.
    InProgress(Mark),
    /// Round ended with a winner. The board stays populated until a reset.
    Won(Mark),
    /// The board filled with no winner. The next round starts immediately.
    Draw,
}

/// A mark placed at a cell: the engine's first-class move event.
///
/// Moves are kept in a per-round history for replay and invariant checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Row-major cell index.
    pub cell: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, cell: usize) -> Self {
        Self { mark, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.cell)
    }
}

/// An N×N board of squares in row-major order: cell(row, col) = row·N + col.
///
/// A board is never resized in place; resets and size changes replace it
/// with a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board with the given side length.
    pub fn new(size: BoardSize) -> Self {
        let n = size.get();
        Self {
            size: n,
            squares: vec![Square::Empty; n * n],
        }
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of cells (always size squared).
    pub fn cell_count(&self) -> usize {
        self.squares.len()
    }

    /// Gets the square at the given cell, or `None` off the board.
    pub fn get(&self, cell: usize) -> Option<Square> {
        self.squares.get(cell).copied()
    }

    /// Sets a square. Out-of-range indices are ignored.
    pub fn set(&mut self, cell: usize, square: Square) {
        if let Some(slot) = self.squares.get_mut(cell) {
            *slot = square;
        }
    }

    /// Returns an empty board with the same geometry.
    pub(crate) fn cleared(&self) -> Self {
        Self {
            size: self.size,
            squares: vec![Square::Empty; self.squares.len()],
        }
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_empty(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Converts a (row, col) pair to a cell index.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Iterates over the indices of all empty cells.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, sq)| **sq == Square::Empty)
            .map(|(cell, _)| cell)
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their cell index so a player can type it back in.
    pub fn display(&self) -> String {
        let width = (self.cell_count() - 1).to_string().len();
        let mut result = String::new();
        for row in 0..self.size {
            if row > 0 {
                result.push('\n');
                let dashes = "-".repeat(width);
                let sep: Vec<&str> = (0..self.size).map(|_| dashes.as_str()).collect();
                result.push_str(&sep.join("+"));
                result.push('\n');
            }
            let cells: Vec<String> = (0..self.size)
                .map(|col| {
                    let cell = self.index(row, col);
                    match self.squares[cell] {
                        Square::Empty => format!("{cell:>width$}"),
                        Square::Occupied(mark) => format!("{:>width$}", mark.to_string()),
                    }
                })
                .collect();
            result.push_str(&cells.join("|"));
        }
        result
    }
}
