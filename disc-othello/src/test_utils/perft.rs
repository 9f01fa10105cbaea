//! "Perft" performance test: count the number of leaves at a given depth.
//! A pass consumes a ply, and a second consecutive pass ends the game.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::board::{initial_board, Board};
use crate::game::Player;

/// Count leaves below the default starting board, with White to move.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(&initial_board(), Player::White, depth, false)
}

pub fn leaves_below(board: &Board, player: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.legal_moves(player);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, player.opponent(), depth - 1, true);
    }

    all_moves
        .into_iter()
        .map(|mv| leaves_below(&board.after_move(mv, player), player.opponent(), depth - 1, false))
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 12);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 184);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 2068);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 27700);
}

#[test]
fn perft_finished_board() {
    use crate::board::Layout;
    use crate::geometry::Geometry;

    let geometry = Geometry::new(1, 2).unwrap();
    let board = Board::from_layout(&Layout::from_labels(geometry, ["a1"], ["b1"]).unwrap());
    assert_eq!(leaves_below(&board, Player::Black, 5, false), 1);
}
