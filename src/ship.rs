//! Ship definitions, geometry and damage tracking.

use core::fmt;

use crate::coord::Coord;

/// Longest ship whose damage can be tracked.
pub const MAX_SHIP_LEN: usize = u64::BITS as usize;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Offset between consecutive cells as `(dx, dy)`.
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    ///
    /// # Panics
    ///
    /// If `length` exceeds [`MAX_SHIP_LEN`].
    pub const fn new(name: &'static str, length: usize) -> Self {
        assert!(length <= MAX_SHIP_LEN, "ship too long");
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship of the fleet. Unplaced until `place` gives it an origin.
///
/// Damage is kept per segment: bit `i` of `hits` is the `i`-th cell of
/// [`Ship::cells`], so it holds even for cells outside any board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    placement: Option<(Coord, Orientation)>,
    hits: u64,
}

impl Ship {
    /// An unplaced, undamaged ship.
    pub fn new(ship_type: ShipType) -> Self {
        Ship {
            ship_type,
            placement: None,
            hits: 0,
        }
    }

    /// Lay the ship out from `origin` along `orientation`.
    ///
    /// Any earlier placement and its damage are discarded. No bounds checks
    /// happen here; the board validates the footprint first.
    pub fn place(&mut self, origin: Coord, orientation: Orientation) {
        self.placement = Some((origin, orientation));
        self.hits = 0;
    }

    /// Return the ship to its unplaced, undamaged state.
    pub fn clear(&mut self) {
        self.placement = None;
        self.hits = 0;
    }

    /// Register a shot at `at`. Returns `true` if it struck this ship.
    pub fn hit(&mut self, at: Coord) -> bool {
        match self.cells().position(|c| c == at) {
            Some(segment) => {
                self.hits |= 1 << segment;
                true
            }
            None => false,
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hit_count() == self.ship_type.length()
    }

    /// Whether `at` is one of the ship's cells.
    pub fn contains(&self, at: Coord) -> bool {
        self.cells().any(|c| c == at)
    }

    /// The ship's cells in order from the origin. Empty while unplaced.
    pub fn cells(&self) -> Cells {
        match self.placement {
            Some((origin, orientation)) => Cells {
                next: origin,
                step: orientation.step(),
                remaining: self.ship_type.length(),
            },
            None => Cells {
                next: Coord::new(0, 0),
                step: (0, 0),
                remaining: 0,
            },
        }
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Origin and orientation, if placed.
    pub fn placement(&self) -> Option<(Coord, Orientation)> {
        self.placement
    }

    /// Number of distinct segments hit.
    pub fn hit_count(&self) -> usize {
        self.hits.count_ones() as usize
    }

    /// Cells of this ship that have been hit, in segment order.
    pub fn hit_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells()
            .enumerate()
            .filter(move |&(i, _)| self.hits & (1 << i) != 0)
            .map(|(_, c)| c)
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Number of cells the ship occupies.
    pub fn size(&self) -> usize {
        self.ship_type.length()
    }
}

/// True when every ship in `ships` is sunk. An empty fleet counts as sunk.
pub fn fleet_sunk<'a, I>(ships: I) -> bool
where
    I: IntoIterator<Item = &'a Ship>,
{
    ships.into_iter().all(Ship::is_sunk)
}

/// Iterator over a ship's cells.
#[derive(Debug, Clone, Copy)]
pub struct Cells {
    next: Coord,
    step: (usize, usize),
    remaining: usize,
}

impl Iterator for Cells {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.remaining == 0 {
            return None;
        }
        let cell = self.next;
        self.next = Coord::new(
            cell.x.wrapping_add(self.step.0),
            cell.y.wrapping_add(self.step.1),
        );
        self.remaining -= 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Cells {}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", placement: {:?}, hits: {} }}",
            self.ship_type.name(),
            self.placement,
            self.hit_count(),
        )
    }
}
