use std::collections::HashSet;

use proptest::prelude::*;
use reversi_engine::config::{BOARD_SIZE, DIRECTIONS};
use reversi_engine::{Cell, GameState, MoveError, Outcome, Player, Position, new_game};

/// Plays legal moves chosen by `picks` until the game ends or the picks run out.
fn play_out(picks: &[usize]) -> Vec<GameState> {
    let mut game = new_game();
    let mut states = vec![game];
    for &pick in picks {
        let moves = game.legal_moves_for_current();
        if moves.is_empty() {
            break;
        }
        let pos = moves[pick % moves.len()];
        game.attempt_move(pos.row, pos.col).unwrap();
        states.push(game);
    }
    states
}

fn disc_total(game: &GameState) -> u8 {
    let (black, white) = game.board().count();
    black + white
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn disc_totals_stay_consistent(picks in prop::collection::vec(any::<usize>(), 0..70)) {
        let states = play_out(&picks);
        for pair in states.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            prop_assert_eq!(disc_total(after), disc_total(before) + 1);
            prop_assert_eq!(disc_total(after) + after.board().empty_count(), 64);
        }
    }

    #[test]
    fn side_to_move_can_always_move(picks in prop::collection::vec(any::<usize>(), 0..70)) {
        for game in play_out(&picks) {
            if game.is_terminal() {
                prop_assert!(!game.has_valid_move(Player::Black));
                prop_assert!(!game.has_valid_move(Player::White));
                let (black, white) = game.board().count();
                prop_assert_eq!(game.outcome(), Some(Outcome::from_counts(black, white)));
            } else {
                prop_assert!(game.has_valid_move(game.current_player()));
                prop_assert_eq!(game.outcome(), None);
            }
        }
    }

    #[test]
    fn flips_are_contiguous_runs(
        picks in prop::collection::vec(any::<usize>(), 0..60),
        last in any::<usize>(),
    ) {
        let states = play_out(&picks);
        let mut game = *states.last().unwrap();
        let moves = game.legal_moves_for_current();
        prop_assume!(!moves.is_empty());

        let mover = game.current_player();
        let pos = moves[last % moves.len()];
        let (mover_before, _) = counts_for(&game, mover);
        let report = game.attempt_move(pos.row, pos.col).unwrap();
        let (mover_after, _) = counts_for(&game, mover);

        prop_assert!(!report.flipped.is_empty());
        prop_assert_eq!(mover_after, mover_before + 1 + report.flipped.len() as u8);
        prop_assert_eq!(game.board().cell(pos.row, pos.col), Some(Cell::from(mover)));

        let flipped: HashSet<Position> = report.flipped.iter().copied().collect();
        let mut reached = HashSet::new();
        for (dr, dc) in DIRECTIONS {
            let mut run = Vec::new();
            let mut r = pos.row as i32 + dr;
            let mut c = pos.col as i32 + dc;
            while (0..BOARD_SIZE as i32).contains(&r) && (0..BOARD_SIZE as i32).contains(&c) {
                let here = Position::new(r as u8, c as u8);
                if !flipped.contains(&here) {
                    break;
                }
                run.push(here);
                r += dr;
                c += dc;
            }
            if !run.is_empty() {
                // The run must end on a disc the mover already owned.
                let end = game.board().cell(r as u8, c as u8);
                prop_assert_eq!(end, Some(Cell::from(mover)));
            }
            reached.extend(run);
        }
        prop_assert_eq!(reached, flipped);
    }

    #[test]
    fn rejected_moves_change_nothing(
        picks in prop::collection::vec(any::<usize>(), 0..70),
        row in 0u8..12,
        col in 0u8..12,
    ) {
        let states = play_out(&picks);
        let mut game = *states.last().unwrap();
        let before = game;

        if let Err(err) = game.attempt_move(row, col) {
            prop_assert_eq!(game, before);
            match err {
                MoveError::GameOver => {
                    prop_assert!(before.is_terminal());
                }
                MoveError::OutOfRange { .. } => {
                    prop_assert!(row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE);
                }
                MoveError::Occupied { .. } => {
                    prop_assert_ne!(before.board().cell(row, col), Some(Cell::Empty));
                }
                MoveError::NoFlips { .. } => {
                    prop_assert!(!before.is_valid_move(row, col, before.current_player()));
                }
            }
        }
    }
}

fn counts_for(game: &GameState, player: Player) -> (u8, u8) {
    let (black, white) = game.board().count();
    match player {
        Player::Black => (black, white),
        Player::White => (white, black),
    }
}

#[test]
fn always_taking_first_move_reaches_a_terminal_state() {
    let states = play_out(&[0; 64]);
    let last = states.last().unwrap();

    assert!(last.is_terminal());
    assert!(last.outcome().is_some());
}
