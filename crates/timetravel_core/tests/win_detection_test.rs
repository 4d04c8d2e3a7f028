//! Exhaustive checks of the win detector over every 3x3 board.

use timetravel_core::rules::LINES;
use timetravel_core::{Board, Player, Square, is_draw, winning_line};

/// Rows, then columns, then diagonals: the order the detector scans in.
const EXPECTED_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Decodes `code` (base 3) into a board: 0 empty, 1 X, 2 O.
fn board_from_code(mut code: u32) -> Board {
    let mut squares = [Square::Empty; 9];
    for square in &mut squares {
        *square = match code % 3 {
            0 => Square::Empty,
            1 => Square::Occupied(Player::X),
            _ => Square::Occupied(Player::O),
        };
        code /= 3;
    }
    Board::from_squares(squares)
}

fn same_mark(s: &[Square; 9], a: usize, b: usize, c: usize) -> bool {
    s[a] != Square::Empty && s[a] == s[b] && s[b] == s[c]
}

/// Row, column and diagonal scan written out by hand.
fn has_three_in_a_row(board: &Board) -> bool {
    let s = board.squares();
    let rows = (0..3).any(|r| same_mark(s, r * 3, r * 3 + 1, r * 3 + 2));
    let columns = (0..3).any(|c| same_mark(s, c, c + 3, c + 6));
    let diagonals = same_mark(s, 0, 4, 8) || same_mark(s, 2, 4, 6);
    rows || columns || diagonals
}

#[test]
fn test_lines_are_rows_columns_diagonals_in_order() {
    assert_eq!(LINES.map(|line| line.indices()), EXPECTED_LINES);
}

#[test]
fn test_detector_matches_naive_check_on_all_boards() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        let line = winning_line(&board);
        assert_eq!(line.is_some(), has_three_in_a_row(&board), "board {code}");

        if let Some(line) = line {
            let s = board.squares();
            let first = EXPECTED_LINES
                .iter()
                .find(|[a, b, c]| same_mark(s, *a, *b, *c))
                .copied();
            assert_eq!(Some(line.indices()), first, "board {code}");
        }
    }
}

#[test]
fn test_first_line_wins_when_two_are_full() {
    // X holds the top row and the left column.
    let board = board_from_code(1 + 3 + 9 + 27 + 729);
    let line = winning_line(&board).unwrap();
    assert_eq!(line.indices(), [0, 1, 2]);
}

#[test]
fn test_draw_requires_full_board_without_line() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        let full = board.squares().iter().all(|s| *s != Square::Empty);
        assert_eq!(is_draw(&board), full && !has_three_in_a_row(&board));
    }
}
