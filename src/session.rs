//! Drives a [`Game`] with two [`Player`]s until one fleet is sunk.

use rand::rngs::SmallRng;

use crate::{
    common::ShotOutcome,
    game::{Game, GameError, ShotReport, Side},
    player::Player,
};

pub struct Session<P: Player, C: Player> {
    game: Game,
    player: P,
    computer: C,
    shots: [usize; 2],
}

impl<P: Player, C: Player> Session<P, C> {
    pub fn new(game: Game, player: P, computer: C) -> Self {
        Self {
            game,
            player,
            computer,
            shots: [0; 2],
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_game(self) -> Game {
        self.game
    }

    /// Shots `side` has fired that landed on a fresh cell.
    pub fn shot_count(&self, side: Side) -> usize {
        self.shots[Self::seat(side)]
    }

    fn seat(side: Side) -> usize {
        match side {
            Side::Player => 0,
            Side::Computer => 1,
        }
    }

    /// Ask the side to move for a target and resolve the shot.
    ///
    /// Returns `Ok(None)` when that side gives up instead of choosing a cell.
    pub fn step(&mut self, rng: &mut SmallRng) -> Result<Option<ShotReport>, GameError> {
        let side = self.game.current_turn().ok_or(GameError::GameOver)?;
        let target = self.game.target_board(side);
        let choice = match side {
            Side::Player => self.player.select_target(rng, target),
            Side::Computer => self.computer.select_target(rng, target),
        };
        let Some(at) = choice else {
            log::info!("{} gave up", side);
            return Ok(None);
        };

        let report = self.game.fire(side, at)?;
        if report.outcome != ShotOutcome::AlreadyShot {
            self.shots[Self::seat(side)] += 1;
        }
        let victim = self.game.board(side.opponent());
        match side {
            Side::Player => {
                self.player.handle_shot_result(&report);
                self.computer.handle_opponent_shot(&report, victim);
            }
            Side::Computer => {
                self.computer.handle_shot_result(&report);
                self.player.handle_opponent_shot(&report, victim);
            }
        }
        Ok(Some(report))
    }

    /// Play until the game ends. Returns the winner, or `None` if a side quit.
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<Option<Side>, GameError> {
        while !self.game.is_over() {
            if self.step(rng)?.is_none() {
                return Ok(None);
            }
        }
        Ok(self.game.winner())
    }
}
