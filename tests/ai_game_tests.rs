use seabattle::{AiPlayer, Game, GameError, Session, Side, TOTAL_SHIP_CELLS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn play(seed: u64) -> Session<AiPlayer, AiPlayer> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let game = Game::new(&mut rng).unwrap();
    let mut session = Session::new(game, AiPlayer::new(), AiPlayer::new());
    let winner = session.run(&mut rng).unwrap();
    assert_eq!(winner, session.game().winner());
    session
}

#[test]
fn test_ai_vs_ai_game_finishes() {
    let session = play(123);
    let game = session.game();
    let winner = game.winner().expect("game should have a winner");
    let loser = winner.opponent();

    assert!(game.board(loser).all_sunk());
    assert!(!game.board(winner).all_sunk());
    assert!(session.shot_count(winner) >= TOTAL_SHIP_CELLS);
    assert!(session.shot_count(winner) <= 36);
    assert_eq!(
        session.shot_count(Side::Player),
        game.computer_board().shots().count_ones()
    );
    assert_eq!(
        session.shot_count(Side::Computer),
        game.player_board().shots().count_ones()
    );
}

#[test]
fn test_same_seed_same_match() {
    let a = play(77);
    let b = play(77);
    assert_eq!(a.game().winner(), b.game().winner());
    assert_eq!(a.shot_count(Side::Player), b.shot_count(Side::Player));
    assert_eq!(a.game().player_board(), b.game().player_board());
    assert_eq!(a.game().computer_board(), b.game().computer_board());
}

#[test]
fn test_step_after_game_over_is_an_error() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut session = play(5);
    assert_eq!(session.step(&mut rng).unwrap_err(), GameError::GameOver);
}

#[test]
fn test_many_matches_always_decided() {
    for seed in 0..50u64 {
        let session = play(seed);
        assert!(session.game().is_over(), "seed {} not finished", seed);
    }
}
