use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 6;
pub const NUM_SHIPS: usize = 6;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Cruiser", 3),
    ShipType::new("Destroyer", 2),
    ShipType::new("Destroyer", 2),
    ShipType::new("Boat", 1),
    ShipType::new("Boat", 1),
    ShipType::new("Boat", 1),
];

/// Total number of ship segments in the fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1;

/// Random origins tried for a single ship before the board is discarded.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Full-board restarts allowed before auto-placement gives up.
pub const MAX_PLACEMENT_RESTARTS: usize = 1000;
