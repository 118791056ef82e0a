// Target selection for the computer opponent: uniform over unshot cells.

use crate::{board::Grid, config::BOARD_SIZE, coord::Coord};
use rand::Rng;

/// Draw a cell uniformly at random until one not in `shots` comes up.
///
/// Returns `None` only when every cell has already been fired upon.
pub fn random_target<R: Rng + ?Sized>(shots: &Grid, rng: &mut R) -> Option<Coord> {
    if shots.count_ones() >= BOARD_SIZE * BOARD_SIZE {
        return None;
    }
    loop {
        let x = rng.random_range(0..BOARD_SIZE);
        let y = rng.random_range(0..BOARD_SIZE);
        if !shots.get(x, y).unwrap_or(true) {
            return Some(Coord::new(x, y));
        }
    }
}
