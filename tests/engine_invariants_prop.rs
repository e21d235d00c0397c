//! Property/invariant tests for the rule engine.
//!
//! Invariants covered:
//! - Every nonzero cell on a reachable board is a power of two >= 2.
//! - A slide never increases a line's tile count, keeps tiles packed and
//!   conserves the tile sum.
//! - A slide that reports no change leaves the board identical and the score untouched.
//! - Score never decreases and grows by exactly the merged values.
//! - `is_game_over` is false whenever any cell is empty.

use proptest::prelude::*;

use tui_2048::core::{compact_and_merge_left, Board, GameState, RandSource};
use tui_2048::types::{Direction, GameStatus, Line, Rows};

fn tile() -> impl Strategy<Value = u32> {
    prop_oneof![
        3 => Just(0u32),
        5 => (1u32..=11).prop_map(|exp| 1u32 << exp),
    ]
}

fn line() -> impl Strategy<Value = Line> {
    prop::array::uniform4(tile())
}

fn rows() -> impl Strategy<Value = Rows> {
    prop::array::uniform4(line())
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn population(line: &Line) -> usize {
    line.iter().filter(|&&v| v != 0).count()
}

fn sum(rows: &Rows) -> u64 {
    rows.iter().flatten().map(|&v| v as u64).sum()
}

proptest! {
    #[test]
    fn merge_never_grows_population(line in line()) {
        let (out, gained) = compact_and_merge_left(&line);

        prop_assert!(population(&out) <= population(&line));

        // Tiles are packed to the left.
        let n = population(&out);
        prop_assert!(out[..n].iter().all(|&v| v != 0));
        prop_assert!(out[n..].iter().all(|&v| v == 0));

        // Tile mass is conserved; each merge adds its value to the gain once.
        let before: u32 = line.iter().sum();
        let after: u32 = out.iter().sum();
        prop_assert_eq!(before, after);
        prop_assert_eq!(gained % 4, 0);
    }

    #[test]
    fn slide_reports_change_exactly_when_board_differs(rows in rows(), dir in direction()) {
        let start = Board::from_rows(rows).unwrap();
        let mut b = start;
        let outcome = b.shift(dir);

        prop_assert_eq!(outcome.moved, b != start);
        if !outcome.moved {
            prop_assert_eq!(outcome.gained, 0);
        }
        prop_assert_eq!(sum(b.rows()), sum(start.rows()));
    }

    #[test]
    fn right_is_mirrored_left(rows in rows()) {
        let mut right = Board::from_rows(rows).unwrap();
        let mut mirrored = right;

        let a = right.move_right();
        mirrored.mirror();
        let b = mirrored.move_left();
        mirrored.mirror();

        prop_assert_eq!(a, b);
        prop_assert_eq!(right, mirrored);
    }

    #[test]
    fn down_is_transposed_right(rows in rows()) {
        let mut down = Board::from_rows(rows).unwrap();
        let mut transposed = down;

        let a = down.move_down();
        transposed.transpose();
        let b = transposed.move_right();
        transposed.transpose();

        prop_assert_eq!(a, b);
        prop_assert_eq!(down, transposed);
    }

    #[test]
    fn game_over_only_when_full(rows in rows()) {
        let b = Board::from_rows(rows).unwrap();
        let state = GameState::with_initial_board(b, RandSource::seeded(0));
        if !state.board().is_full() {
            prop_assert!(!state.is_game_over());
        }
    }

    #[test]
    fn generated_rollout_respects_core_invariants(
        seed in any::<u64>(),
        moves in prop::collection::vec(direction(), 1..200),
    ) {
        let mut state = GameState::new(seed);

        for dir in moves {
            let board_before = *state.board();
            let score_before = state.score();
            let status_before = state.status();

            let mut preview = board_before;
            let expected = preview.shift(dir);

            let moved = state.handle_move(dir);

            if status_before != GameStatus::Playing {
                prop_assert!(!moved);
                prop_assert_eq!(*state.board(), board_before);
                prop_assert_eq!(state.score(), score_before);
                prop_assert_eq!(state.status(), status_before);
                continue;
            }

            prop_assert_eq!(moved, expected.moved);
            prop_assert_eq!(state.score(), score_before + expected.gained);
            if moved {
                // Exactly one new tile on top of the slid board.
                prop_assert_eq!(state.board().count_empty() + 1, preview.count_empty());
            } else {
                prop_assert_eq!(*state.board(), board_before);
            }

            for &v in state.state().iter().flatten() {
                prop_assert!(v == 0 || (v >= 2 && v.is_power_of_two()));
            }
            if state.status() == GameStatus::Lost {
                prop_assert!(state.is_game_over());
            }
        }
    }
}
