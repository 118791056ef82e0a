use seabattle::{BitBoard, BitBoardError};

#[test]
fn test_get_set_bounds() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 2).unwrap();
    assert!(bb.get(1, 2).unwrap());
    assert!(!bb.get(2, 1).unwrap());

    assert_eq!(bb.count_ones(), 1);

    assert_eq!(
        bb.set(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { x: 4, y: 0 }
    );
}

#[test]
fn test_from_iter_and_iter() {
    let bb = BitBoard::<u16, 4>::from_iter([(1, 0), (3, 3), (0, 2)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    // row by row, x varies fastest
    assert_eq!(bits, vec![(1, 0), (0, 2), (3, 3)]);
}

#[test]
fn test_dilate_corner_is_clipped() {
    let bb = BitBoard::<u64, 6>::from_iter([(0, 0)]).unwrap();
    let grown = bb.dilate();
    let mut cells: Vec<_> = grown.iter_set_bits().collect();
    cells.sort();
    assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
}

#[test]
fn test_dilate_center_covers_ring() {
    let bb = BitBoard::<u64, 6>::from_iter([(2, 2), (3, 2)]).unwrap();
    let grown = bb.dilate();
    // 4 wide, 3 tall
    assert_eq!(grown.count_ones(), 12);
    assert!(grown.get(1, 1).unwrap());
    assert!(grown.get(4, 3).unwrap());
    assert!(!grown.get(5, 2).unwrap());
    assert!(!grown.get(2, 4).unwrap());
}

#[test]
fn test_not_stays_within_board() {
    let empty = BitBoard::<u64, 6>::new();
    assert_eq!((!empty).count_ones(), 36);
    let full = !empty;
    assert_eq!(!full, empty);

    // 3x3 in a u16 leaves the top seven bits unused
    let small = !BitBoard::<u16, 3>::new();
    assert_eq!(small.count_ones(), 9);
}
