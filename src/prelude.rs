//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Board, Coord, Game, GameError, Orientation, Phase, Player, Session, ShotOutcome,
    ShotReport, Side,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_board, print_status, CliPlayer};
