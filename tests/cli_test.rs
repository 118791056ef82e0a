#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use seabattle::{
        format_board, format_report, Board, CliPlayer, Coord, Orientation, Phase, Player,
        ShotOutcome, ShotReport, Side,
    };
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn one_boat_board() -> Board {
        let mut board = Board::new();
        assert!(board
            .place_ship(3, Coord::new(1, 0), Orientation::Horizontal)
            .unwrap());
        board
    }

    #[test]
    fn test_skips_malformed_and_repeated_cells() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut board = one_boat_board();
        board.shoot(Coord::new(0, 0)).unwrap();

        let mut player = CliPlayer::with_input(Cursor::new("Z9\nhello\nA1\nc4\n"));
        assert_eq!(
            player.select_target(&mut rng, &board),
            Some(Coord::new(2, 3))
        );
    }

    #[test]
    fn test_quit_and_eof_give_up() {
        let mut rng = SmallRng::seed_from_u64(1);
        let board = one_boat_board();

        let mut player = CliPlayer::with_input(Cursor::new("q\nA1\n"));
        assert_eq!(player.select_target(&mut rng, &board), None);

        let mut player = CliPlayer::with_input(Cursor::new("G7\n"));
        assert_eq!(player.select_target(&mut rng, &board), None);
    }

    #[test]
    fn test_format_board_hides_ships() {
        let mut board = one_boat_board();
        board.shoot(Coord::new(0, 0)).unwrap();

        let hidden = format_board(&board, true);
        let lines: Vec<&str> = hidden.lines().collect();
        assert_eq!(lines[0], "   A B C D E F");
        assert_eq!(lines[1], " 1 • ~ ~ ~ ~ ~");
        assert_eq!(lines.len(), 7);

        let shown = format_board(&board, false);
        assert_eq!(shown.lines().nth(1), Some(" 1 • ■ ~ ~ ~ ~"));

        board.shoot(Coord::new(1, 0)).unwrap();
        let shown = format_board(&board, false);
        assert_eq!(shown.lines().nth(1), Some(" 1 • X ~ ~ ~ ~"));
    }

    #[test]
    fn test_format_report_mentions_bonus_and_winner() {
        let bonus = ShotReport {
            shooter: Side::Player,
            target: Coord::new(1, 0),
            outcome: ShotOutcome::Hit,
            phase: Phase::Turn(Side::Player),
        };
        assert_eq!(format_report(&bonus), "player fires at B1: Hit! Extra shot!");

        let last = ShotReport {
            shooter: Side::Computer,
            target: Coord::new(5, 5),
            outcome: ShotOutcome::Sunk("Boat"),
            phase: Phase::GameOver {
                winner: Side::Computer,
            },
        };
        assert_eq!(
            format_report(&last),
            "computer fires at F6: Hit! Ship sunk! (Boat) All ships down, computer wins."
        );
    }
}
