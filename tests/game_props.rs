use seabattle::{random_target, Board, Coord, Game, Phase, ShotOutcome, Side, BOARD_SIZE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_game(seed: u64) -> Game {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut player = Board::new();
    let mut computer = Board::new();
    player.auto_place(&mut rng).unwrap();
    computer.auto_place(&mut rng).unwrap();
    Game::from_boards(player, computer)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// A miss flips the turn, a hit or sink keeps it, and only a fully sunk
    /// fleet ends the game.
    #[test]
    fn turn_transitions(
        seed in any::<u64>(),
        shots in prop::collection::vec((0..BOARD_SIZE, 0..BOARD_SIZE), 0..120),
    ) {
        let mut game = random_game(seed);
        for (x, y) in shots {
            let Some(side) = game.current_turn() else { break };
            let report = game.fire(side, Coord::new(x, y)).unwrap();
            prop_assert_eq!(report.shooter, side);
            prop_assert_eq!(report.phase, game.phase());

            if game.target_board(side).all_sunk() {
                prop_assert_eq!(report.phase, Phase::GameOver { winner: side });
                prop_assert!(report.outcome.is_hit());
                continue;
            }
            match report.outcome {
                ShotOutcome::Miss => {
                    prop_assert_eq!(report.phase, Phase::Turn(side.opponent()));
                }
                ShotOutcome::Hit | ShotOutcome::Sunk(_) | ShotOutcome::AlreadyShot => {
                    prop_assert_eq!(report.phase, Phase::Turn(side));
                }
            }
        }
    }

    #[test]
    fn status_tracks_remaining_ships(seed in any::<u64>(), n in 0..60usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = random_game(seed);
        for _ in 0..n {
            if game.is_over() {
                break;
            }
            if game.current_turn() == Some(Side::Computer) {
                game.play_computer_turn(&mut rng, |_| {}).unwrap();
            } else {
                let shots = game.computer_board().shots();
                let at = random_target(&shots, &mut rng).unwrap();
                game.fire(Side::Player, at).unwrap();
            }
            let status = game.status();
            prop_assert_eq!(status.player_ships_remaining, game.player_board().remaining_ship_count());
            prop_assert_eq!(status.opponent_ships_remaining, game.computer_board().remaining_ship_count());
        }
    }
}
