//! Grid coordinates and the `A1` text codec.
//!
//! Columns are letters `A`..`F` (x = 0..5), rows are digits `1`..`6`
//! (y = 0..5).

use core::fmt;
use core::str::FromStr;

use crate::config::BOARD_SIZE;

/// A cell on the board, `x` is the column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether the coordinate lies on the `BOARD_SIZE`×`BOARD_SIZE` grid.
    pub const fn in_bounds(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// Every coordinate on the grid, row by row.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord::new(x, y)))
    }

    /// Column letter, `A` for x = 0.
    pub fn column_label(x: usize) -> char {
        (b'A' + x as u8) as char
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Coord::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Coord::column_label(self.x), self.y + 1)
    }
}

/// Reasons a coordinate string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseCoordError {
    /// Input was not exactly two characters after trimming.
    Length,
    /// Column letter outside `A`..`F`.
    Column(char),
    /// Row digit outside `1`..`6`.
    Row(char),
}

impl fmt::Display for ParseCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last_col = Coord::column_label(BOARD_SIZE - 1);
        match self {
            ParseCoordError::Length => {
                write!(f, "expected a letter A-{} followed by a digit 1-{}", last_col, BOARD_SIZE)
            }
            ParseCoordError::Column(c) => write!(f, "column '{}' is not in A-{}", c, last_col),
            ParseCoordError::Row(c) => write!(f, "row '{}' is not in 1-{}", c, BOARD_SIZE),
        }
    }
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (col, row) = match (chars.next(), chars.next(), chars.next()) {
            (Some(col), Some(row), None) => (col.to_ascii_uppercase(), row),
            _ => return Err(ParseCoordError::Length),
        };
        let x = match col {
            'A'..='Z' if ((col as u8 - b'A') as usize) < BOARD_SIZE => (col as u8 - b'A') as usize,
            _ => return Err(ParseCoordError::Column(col)),
        };
        let y = match row.to_digit(10) {
            Some(d) if d >= 1 && (d as usize) <= BOARD_SIZE => d as usize - 1,
            _ => return Err(ParseCoordError::Row(row)),
        };
        Ok(Coord::new(x, y))
    }
}
