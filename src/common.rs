//! Common types for the engine: board errors, shot outcomes and cell views.

use crate::bitboard::BitBoardError;
use crate::coord::Coord;

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The cell had been fired upon before; nothing changed.
    AlreadyShot,
    /// Shot landed in open water.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot struck the last intact segment of a ship, carrying its name.
    Sunk(&'static str),
}

impl ShotOutcome {
    /// `true` for `Hit` and `Sunk`, the outcomes that earn a bonus turn.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk(_))
    }
}

impl core::fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShotOutcome::AlreadyShot => write!(f, "already shot"),
            ShotOutcome::Miss => write!(f, "miss"),
            ShotOutcome::Hit => write!(f, "hit"),
            ShotOutcome::Sunk(name) => write!(f, "hit, {} sunk", name),
        }
    }
}

/// What a single cell shows to whoever looks at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    /// Never fired upon, nothing visible.
    Unknown,
    /// Intact ship segment, only visible when ships are revealed.
    Ship,
    /// Fired upon and holding a ship segment.
    Hit,
    /// Fired upon, open water.
    Miss,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Ship index is outside the fleet.
    InvalidIndex(usize),
    /// Coordinate lies outside the grid.
    OutOfBounds(Coord),
    /// Random placement kept failing through every allowed restart.
    PlacementExhausted { restarts: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidIndex(i) => write!(f, "Ship index {} is out of range", i),
            BoardError::OutOfBounds(c) => {
                write!(f, "Coordinate ({}, {}) is outside the board", c.x, c.y)
            }
            BoardError::PlacementExhausted { restarts } => {
                write!(f, "Unable to place fleet after {} restarts", restarts)
            }
        }
    }
}
