use crate::{ai, board::Board, coord::Coord};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Computer opponent that fires at uniformly random unshot cells.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> Option<Coord> {
        ai::random_target(&target.shots(), rng)
    }
}
