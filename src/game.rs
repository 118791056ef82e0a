use crate::{
    ai,
    board::Board,
    common::{BoardError, ShotOutcome},
    coord::Coord,
};
use core::fmt;
use rand::Rng;

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// Where the match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// `Side` is due to fire next.
    Turn(Side),
    /// One fleet is gone; terminal.
    GameOver { winner: Side },
}

/// Ships still afloat on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetStatus {
    pub player_ships_remaining: usize,
    pub opponent_ships_remaining: usize,
}

/// Everything that came out of one resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub shooter: Side,
    pub target: Coord,
    pub outcome: ShotOutcome,
    /// Phase after the shot was applied.
    pub phase: Phase,
}

impl ShotReport {
    /// The shooter fires again.
    pub fn is_bonus_turn(&self) -> bool {
        self.phase == Phase::Turn(self.shooter) && self.outcome.is_hit()
    }
}

/// Errors returned by Game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Error from the targeted board.
    Board(BoardError),
    /// The match has already been decided.
    GameOver,
    /// `side` tried to fire while it was `expected`'s turn.
    NotYourTurn { side: Side, expected: Side },
    /// No unshot cell left to aim at.
    NoTarget,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::NotYourTurn { side, expected } => {
                write!(f, "It is the {}'s turn, not the {}'s", expected, side)
            }
            GameError::NoTarget => write!(f, "Every cell has already been fired upon"),
        }
    }
}

/// A match between the player and the computer.
#[derive(Debug, Clone)]
pub struct Game {
    player_board: Board,
    computer_board: Board,
    phase: Phase,
}

impl Game {
    /// Set up a match with both fleets placed at random. The player moves first.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        let mut player_board = Board::new();
        let mut computer_board = Board::new();
        player_board.auto_place(rng)?;
        computer_board.auto_place(rng)?;
        Ok(Self::from_boards(player_board, computer_board))
    }

    /// Start a match on boards prepared by the caller. The player moves first.
    pub fn from_boards(player_board: Board, computer_board: Board) -> Self {
        Self {
            player_board,
            computer_board,
            phase: Phase::Turn(Side::Player),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side due to fire, `None` once the game is over.
    pub fn current_turn(&self) -> Option<Side> {
        match self.phase {
            Phase::Turn(side) => Some(side),
            Phase::GameOver { .. } => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            Phase::Turn(_) => None,
        }
    }

    /// The board holding `side`'s own fleet.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player_board,
            Side::Computer => &self.computer_board,
        }
    }

    fn board_mut(&mut self, side: Side) -> &mut Board {
        match side {
            Side::Player => &mut self.player_board,
            Side::Computer => &mut self.computer_board,
        }
    }

    /// The board `side` fires at.
    pub fn target_board(&self, side: Side) -> &Board {
        self.board(side.opponent())
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// Ships remaining on each side, seen from the player.
    pub fn status(&self) -> FleetStatus {
        FleetStatus {
            player_ships_remaining: self.player_board.remaining_ship_count(),
            opponent_ships_remaining: self.computer_board.remaining_ship_count(),
        }
    }

    /// Resolve one shot by `shooter` at `at` and advance the turn.
    ///
    /// Sinking the last ship ends the game. A hit or a sink keeps the turn
    /// with the shooter, a miss passes it over. Firing at a cell that was
    /// already shot changes nothing.
    pub fn fire(&mut self, shooter: Side, at: Coord) -> Result<ShotReport, GameError> {
        let expected = match self.phase {
            Phase::Turn(side) => side,
            Phase::GameOver { .. } => return Err(GameError::GameOver),
        };
        if shooter != expected {
            return Err(GameError::NotYourTurn {
                side: shooter,
                expected,
            });
        }

        let target = self.board_mut(shooter.opponent());
        let outcome = target.shoot(at)?;
        self.phase = if target.all_sunk() {
            Phase::GameOver { winner: shooter }
        } else {
            match outcome {
                ShotOutcome::Hit | ShotOutcome::Sunk(_) | ShotOutcome::AlreadyShot => {
                    Phase::Turn(shooter)
                }
                ShotOutcome::Miss => Phase::Turn(shooter.opponent()),
            }
        };

        log::trace!("{} fired at {}: {}", shooter, at, outcome);
        if let Phase::GameOver { winner } = self.phase {
            log::info!("game over, {} wins", winner);
        }
        Ok(ShotReport {
            shooter,
            target: at,
            outcome,
            phase: self.phase,
        })
    }

    /// Fire one computer shot at a uniformly random unshot cell.
    pub fn computer_fire<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<ShotReport, GameError> {
        let shots = self.player_board.shots();
        let at = ai::random_target(&shots, rng).ok_or(GameError::NoTarget)?;
        self.fire(Side::Computer, at)
    }

    /// Let the computer fire until it misses or wins, reporting every shot.
    pub fn play_computer_turn<R, F>(&mut self, rng: &mut R, mut on_shot: F) -> Result<Phase, GameError>
    where
        R: Rng + ?Sized,
        F: FnMut(&ShotReport),
    {
        while self.phase == Phase::Turn(Side::Computer) {
            let report = self.computer_fire(rng)?;
            on_shot(&report);
        }
        Ok(self.phase)
    }
}
