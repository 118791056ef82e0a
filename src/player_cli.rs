#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use crate::{
    board::Board,
    common::{CellView, ShotOutcome},
    config::BOARD_SIZE,
    coord::Coord,
    game::{FleetStatus, Phase, ShotReport},
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Human player reading `A1`-style coordinates line by line.
pub struct CliPlayer {
    input: Box<dyn BufRead>,
}

impl CliPlayer {
    /// Read moves from standard input.
    pub fn new() -> Self {
        Self::with_input(io::BufReader::new(io::stdin()))
    }

    /// Read moves from any line source.
    pub fn with_input<R: BufRead + 'static>(input: R) -> Self {
        Self {
            input: Box::new(input),
        }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_symbol(view: CellView) -> &'static str {
    match view {
        CellView::Unknown => "~",
        CellView::Ship => "■",
        CellView::Hit => "X",
        CellView::Miss => "•",
    }
}

/// Render a board as text with column letters and row numbers.
pub fn format_board(board: &Board, hide_ships: bool) -> String {
    let mut out = String::from("  ");
    for x in 0..BOARD_SIZE {
        out.push(' ');
        out.push(Coord::column_label(x));
    }
    out.push('\n');
    for (y, row) in board.render(hide_ships).iter().enumerate() {
        out.push_str(&format!("{:2}", y + 1));
        for view in row.iter() {
            out.push(' ');
            out.push_str(cell_symbol(*view));
        }
        out.push('\n');
    }
    out
}

pub fn print_board(board: &Board, hide_ships: bool) {
    print!("{}", format_board(board, hide_ships));
}

pub fn print_status(status: &FleetStatus) {
    println!("Your ships: {} remaining", status.player_ships_remaining);
    println!("Enemy ships: {} remaining", status.opponent_ships_remaining);
}

fn describe(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::AlreadyShot => "already shot there",
        ShotOutcome::Miss => "Miss!",
        ShotOutcome::Hit => "Hit!",
        ShotOutcome::Sunk(_) => "Hit! Ship sunk!",
    }
}

/// One line describing a resolved shot.
pub fn format_report(report: &ShotReport) -> String {
    let mut line = format!(
        "{} fires at {}: {}",
        report.shooter,
        report.target,
        describe(report.outcome)
    );
    if let ShotOutcome::Sunk(name) = report.outcome {
        line.push_str(&format!(" ({})", name));
    }
    if report.is_bonus_turn() {
        line.push_str(" Extra shot!");
    }
    if let Phase::GameOver { winner } = report.phase {
        line.push_str(&format!(" All ships down, {} wins.", winner));
    }
    line
}

impl Player for CliPlayer {
    fn select_target(&mut self, _rng: &mut SmallRng, target: &Board) -> Option<Coord> {
        println!("\nEnemy board:");
        print_board(target, true);
        loop {
            print!("Enter target (e.g. A1, q to quit): ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    log::warn!("failed to read input: {}", e);
                    return None;
                }
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") {
                return None;
            }
            match line.parse::<Coord>() {
                Ok(at) if target.is_shot(at) => {
                    println!("You already fired at {}, pick another cell.", at);
                }
                Ok(at) => return Some(at),
                Err(e) => println!("Invalid coordinate: {}", e),
            }
        }
    }

    fn handle_shot_result(&mut self, report: &ShotReport) {
        println!("{}", format_report(report));
    }

    fn handle_opponent_shot(&mut self, report: &ShotReport, own: &Board) {
        println!("{}", format_report(report));
        println!("Your board:");
        print_board(own, false);
    }
}
