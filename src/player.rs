use crate::{board::Board, coord::Coord, game::ShotReport};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next cell to fire at on `target`, the opponent's board.
    ///
    /// Implementations must only see what an opponent may see (shots, hits
    /// and misses). `None` means the player gives up.
    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> Option<Coord>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _report: &ShotReport) {}

    /// Inform the player of an opponent shot against `own`, its board.
    fn handle_opponent_shot(&mut self, _report: &ShotReport, _own: &Board) {}
}
