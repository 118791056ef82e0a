#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    format_report, init_logging, print_board, print_status, AiPlayer, CliPlayer, Game, Session,
    Side,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the computer play against itself.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            let mut rng = make_rng(seed);
            println!("Welcome to Sea Battle! Placing ships...");
            let game = Game::new(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            println!("\nYour board:");
            print_board(game.player_board(), false);
            println!("\nEnter coordinates as a letter A-F followed by a digit 1-6, e.g. A1, C4, F6.");

            let mut session = Session::new(game, CliPlayer::new(), AiPlayer::new());
            while !session.game().is_over() {
                if session.game().current_turn() == Some(Side::Player) {
                    println!();
                    print_status(&session.game().status());
                }
                let step = session
                    .step(&mut rng)
                    .map_err(|e| anyhow::anyhow!(e))?;
                if step.is_none() {
                    println!("\nGame aborted.");
                    return Ok(());
                }
            }

            let game = session.into_game();
            println!("\n=== GAME OVER ===");
            match game.winner() {
                Some(Side::Player) => println!("Congratulations, you sank the whole enemy fleet!"),
                Some(Side::Computer) => println!("Defeat. The computer sank all your ships."),
                None => {}
            }
            println!("\nEnemy board:");
            print_board(game.computer_board(), true);
            println!("\nYour board:");
            print_board(game.player_board(), false);
        }
        Commands::Watch { seed } => {
            let mut rng = make_rng(seed);
            let game = Game::new(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let mut session = Session::new(game, AiPlayer::new(), AiPlayer::new());
            while let Some(report) = session
                .step(&mut rng)
                .map_err(|e| anyhow::anyhow!(e))?
            {
                println!("{}", format_report(&report));
                if session.game().is_over() {
                    break;
                }
            }
            let game = session.game();
            println!("\nPlayer board:");
            print_board(game.player_board(), false);
            println!("\nComputer board:");
            print_board(game.computer_board(), false);
        }
    }
    Ok(())
}
