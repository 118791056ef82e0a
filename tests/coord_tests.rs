use seabattle::{Coord, ParseCoordError};

#[test]
fn parses_corners() {
    assert_eq!("A1".parse::<Coord>(), Ok(Coord::new(0, 0)));
    assert_eq!("F6".parse::<Coord>(), Ok(Coord::new(5, 5)));
    assert_eq!("C4".parse::<Coord>(), Ok(Coord::new(2, 3)));
}

#[test]
fn parse_trims_and_ignores_case() {
    assert_eq!("  b3\n".parse::<Coord>(), Ok(Coord::new(1, 2)));
}

#[test]
fn rejects_malformed_input() {
    assert_eq!("".parse::<Coord>(), Err(ParseCoordError::Length));
    assert_eq!("A".parse::<Coord>(), Err(ParseCoordError::Length));
    assert_eq!("A10".parse::<Coord>(), Err(ParseCoordError::Length));
    assert_eq!("G1".parse::<Coord>(), Err(ParseCoordError::Column('G')));
    assert_eq!("11".parse::<Coord>(), Err(ParseCoordError::Column('1')));
    assert_eq!("A7".parse::<Coord>(), Err(ParseCoordError::Row('7')));
    assert_eq!("A0".parse::<Coord>(), Err(ParseCoordError::Row('0')));
    assert_eq!("AA".parse::<Coord>(), Err(ParseCoordError::Row('A')));
}

#[test]
fn display_uses_letter_and_row_number() {
    assert_eq!(Coord::new(0, 0).to_string(), "A1");
    assert_eq!(Coord::new(5, 2).to_string(), "F3");
    for c in Coord::all() {
        assert_eq!(c.to_string().parse::<Coord>(), Ok(c));
    }
}

#[test]
fn all_covers_grid_once() {
    let cells: Vec<_> = Coord::all().collect();
    assert_eq!(cells.len(), 36);
    assert!(cells.iter().all(Coord::in_bounds));
    assert_eq!(cells[1], Coord::new(1, 0));
    assert!(!Coord::new(6, 0).in_bounds());
}
