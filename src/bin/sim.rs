use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{AiPlayer, Game, Session, Side};
use serde::Serialize;

#[derive(Serialize)]
struct SideSummary {
    shots: usize,
    ships_remaining: usize,
}

#[derive(Serialize)]
struct MatchSummary {
    seed: u64,
    winner: Option<Side>,
    player: SideSummary,
    computer: SideSummary,
}

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let game = Game::new(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut session = Session::new(game, AiPlayer::new(), AiPlayer::new());
    let winner = session.run(&mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let status = session.game().status();
    let summary = MatchSummary {
        seed,
        winner,
        player: SideSummary {
            shots: session.shot_count(Side::Player),
            ships_remaining: status.player_ships_remaining,
        },
        computer: SideSummary {
            shots: session.shot_count(Side::Computer),
            ships_remaining: status.opponent_ships_remaining,
        },
    };

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
