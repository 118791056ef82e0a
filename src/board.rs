//! Game board state: the fleet, its placement rules and incoming shots.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, CellView, ShotOutcome};
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, MAX_PLACEMENT_RESTARTS, NUM_SHIPS, SHIPS};
use crate::coord::Coord;
use crate::ship::{fleet_sunk, Orientation, Ship};
use core::fmt;
use rand::Rng;

/// Bitboard covering the whole grid.
pub type Grid = BitBoard<u64, BOARD_SIZE>;

/// One side's board: six ships and the cells the opponent has fired at.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    ships: [Ship; NUM_SHIPS],
    ship_map: Grid,
    shots: Grid,
}

impl Board {
    /// Create an empty board state (no ships placed, no shots).
    pub fn new() -> Self {
        Board {
            ships: core::array::from_fn(|i| Ship::new(SHIPS[i])),
            ship_map: Grid::new(),
            shots: Grid::new(),
        }
    }

    /// The fleet in configuration order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, ship_index: usize) -> Option<&Ship> {
        self.ships.get(ship_index)
    }

    /// Board occupancy mask of all placed ships.
    pub fn ship_map(&self) -> Grid {
        self.ship_map
    }

    /// Cells fired upon so far.
    pub fn shots(&self) -> Grid {
        self.shots
    }

    pub fn is_shot(&self, at: Coord) -> bool {
        self.shots.get(at.x, at.y).unwrap_or(false)
    }

    /// Cells a ship of `size` would cover, or `None` if it leaves the grid.
    pub fn footprint(size: usize, origin: Coord, orientation: Orientation) -> Option<Grid> {
        if size == 0 || !origin.in_bounds() {
            return None;
        }
        let (dx, dy) = orientation.step();
        let reach = size - 1;
        let end = Coord::new(
            origin.x.checked_add(dx.checked_mul(reach)?)?,
            origin.y.checked_add(dy.checked_mul(reach)?)?,
        );
        if !end.in_bounds() {
            return None;
        }
        Grid::from_iter((0..size).map(|i| (origin.x + dx * i, origin.y + dy * i))).ok()
    }

    /// Whether a ship of `size` fits at `origin` without touching the fleet.
    ///
    /// Ships may neither overlap nor touch, diagonals included: every other
    /// ship must stay outside the footprint's 8-connected neighbourhood.
    pub fn can_place(&self, size: usize, origin: Coord, orientation: Orientation) -> bool {
        let Some(footprint) = Self::footprint(size, origin, orientation) else {
            return false;
        };
        if !(self.ship_map & footprint).is_empty() {
            return false;
        }
        let buffer = footprint.dilate() & !footprint;
        (self.ship_map & buffer).is_empty()
    }

    /// Place ship `ship_index` at `origin`.
    ///
    /// Returns `Ok(false)` and leaves the board untouched when the placement
    /// breaks a rule. An unknown index or an origin off the grid is an error.
    pub fn place_ship(
        &mut self,
        ship_index: usize,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<bool, BoardError> {
        let size = self
            .ships
            .get(ship_index)
            .ok_or(BoardError::InvalidIndex(ship_index))?
            .size();
        if !origin.in_bounds() {
            return Err(BoardError::OutOfBounds(origin));
        }
        if !self.can_place(size, origin, orientation) {
            return Ok(false);
        }
        self.ships[ship_index].place(origin, orientation);
        self.rebuild_ship_map()?;
        Ok(true)
    }

    /// Unplace every ship and forget all shots.
    fn reset(&mut self) {
        for ship in self.ships.iter_mut() {
            ship.clear();
        }
        self.ship_map = Grid::new();
        self.shots = Grid::new();
    }

    fn rebuild_ship_map(&mut self) -> Result<(), BoardError> {
        let mut map = Grid::new();
        for ship in self.ships.iter() {
            for cell in ship.cells() {
                map.set(cell.x, cell.y)?;
            }
        }
        self.ship_map = map;
        Ok(())
    }

    /// Returns a random legal (origin, orientation) for `ship_index`, or
    /// `None` if `MAX_PLACEMENT_ATTEMPTS` draws all failed.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_index: usize,
    ) -> Result<Option<(Coord, Orientation)>, BoardError> {
        let size = self
            .ships
            .get(ship_index)
            .ok_or(BoardError::InvalidIndex(ship_index))?
            .size();
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let origin = Coord::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if self.can_place(size, origin, orientation) {
                return Ok(Some((origin, orientation)));
            }
        }
        Ok(None)
    }

    /// Randomly place the whole fleet.
    ///
    /// Ships are placed in order. If one of them cannot be fitted the board
    /// is wiped and placement starts over, up to `MAX_PLACEMENT_RESTARTS`
    /// times. On exhaustion the board is left empty.
    pub fn auto_place<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for restart in 0..=MAX_PLACEMENT_RESTARTS {
            self.reset();
            if self.try_place_fleet(rng)? {
                log::debug!("fleet placed after {} restart(s)", restart);
                return Ok(());
            }
            log::debug!("placement dead end, restarting board (restart {})", restart + 1);
        }
        log::warn!(
            "fleet placement exhausted after {} restarts",
            MAX_PLACEMENT_RESTARTS
        );
        self.reset();
        Err(BoardError::PlacementExhausted {
            restarts: MAX_PLACEMENT_RESTARTS,
        })
    }

    fn try_place_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<bool, BoardError> {
        for i in 0..NUM_SHIPS {
            match self.random_placement(rng, i)? {
                Some((origin, orientation)) => {
                    if !self.place_ship(i, origin, orientation)? {
                        return Ok(false);
                    }
                }
                None => return Ok(false),
            }
        }
        Ok(true)
    }

    /// Fire at `at`, recording the shot and any damage.
    pub fn shoot(&mut self, at: Coord) -> Result<ShotOutcome, BoardError> {
        if !at.in_bounds() {
            return Err(BoardError::OutOfBounds(at));
        }
        if self.shots.get(at.x, at.y)? {
            return Ok(ShotOutcome::AlreadyShot);
        }
        self.shots.set(at.x, at.y)?;
        for ship in self.ships.iter_mut() {
            if ship.hit(at) {
                if ship.is_sunk() {
                    return Ok(ShotOutcome::Sunk(ship.ship_type().name()));
                }
                return Ok(ShotOutcome::Hit);
            }
        }
        Ok(ShotOutcome::Miss)
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        fleet_sunk(self.ships.iter())
    }

    /// Ships still afloat.
    pub fn remaining_ship_count(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Classify one cell, hiding intact ship segments when `hide_ships`.
    pub fn cell_view(&self, at: Coord, hide_ships: bool) -> CellView {
        let occupied = self.ship_map.get(at.x, at.y).unwrap_or(false);
        if self.is_shot(at) {
            if occupied {
                CellView::Hit
            } else {
                CellView::Miss
            }
        } else if occupied && !hide_ships {
            CellView::Ship
        } else {
            CellView::Unknown
        }
    }

    /// The whole grid as cell views, indexed `[y][x]`.
    pub fn render(&self, hide_ships: bool) -> [[CellView; BOARD_SIZE]; BOARD_SIZE] {
        core::array::from_fn(|y| core::array::from_fn(|x| self.cell_view(Coord::new(x, y), hide_ships)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  shots: {:?},\n  ships: {:?}\n}}",
            self.ship_map, self.shots, self.ships
        )
    }
}
