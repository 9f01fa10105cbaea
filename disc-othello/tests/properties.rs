//! Rule invariants checked over positions reached by random play.

use disc_othello::{initial_board, Action, Board, Cell, Direction, Game, Player, Square};
use proptest::prelude::*;

/// Play out a game from the default start, picking the `choice % n`-th legal
/// move at each ply. Returns every position reached and the player to move in it.
fn reachable_positions(choices: &[usize]) -> Vec<(Board, Player)> {
    let mut game = Game::default();
    let mut positions = vec![(game.board.clone(), game.active_player)];

    for &choice in choices {
        if game.is_finished() {
            break;
        }
        let moves = game.legal_moves();
        let action = match moves.is_empty() {
            true => Action::Pass,
            false => Action::Place(moves[choice % moves.len()]),
        };
        game = game.apply(action).unwrap();
        positions.push((game.board.clone(), game.active_player));
    }

    positions
}

fn move_choices() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..64, 0..40)
}

proptest! {
    #[test]
    fn score_is_zero_sum(choices in move_choices()) {
        for (board, _) in reachable_positions(&choices) {
            prop_assert_eq!(board.score(Player::Black), -board.score(Player::White));
        }
    }

    #[test]
    fn border_is_never_written(choices in move_choices()) {
        for (board, _) in reachable_positions(&choices) {
            let geometry = board.geometry();
            for index in 0..geometry.len() {
                let square = Square::from(index);
                prop_assert_eq!(board[square] == Cell::Sentinel, !geometry.is_interior(square));
            }
        }
    }

    #[test]
    fn legal_iff_bracket(choices in move_choices()) {
        for (board, player) in reachable_positions(&choices) {
            let moves = board.legal_moves(player);
            for square in board.geometry().squares() {
                let bracketed = Direction::ALL
                    .iter()
                    .any(|&direction| board.find_bracket(square, player, direction).is_some());
                let legal = board[square] == Cell::Empty && bracketed;
                prop_assert_eq!(board.is_legal(square, player), legal);
                prop_assert_eq!(moves.contains(&square), legal);
            }
            prop_assert_eq!(board.any_legal_move(player), !moves.is_empty());
        }
    }

    #[test]
    fn move_adds_exactly_one_disc(choices in move_choices()) {
        for (board, player) in reachable_positions(&choices) {
            for square in board.legal_moves(player) {
                let next = board.after_move(square, player);
                prop_assert_eq!(next.count_discs(), board.count_discs() + 1);
                prop_assert!(next.score(player) > board.score(player) + 1);
            }
        }
    }

    #[test]
    fn moves_only_flip_opponent_discs(choices in move_choices()) {
        for (board, player) in reachable_positions(&choices) {
            for square in board.legal_moves(player) {
                let next = board.after_move(square, player);
                for other in board.geometry().squares().filter(|&s| s != square) {
                    if board[other] != next[other] {
                        prop_assert_eq!(board[other], player.opponent().disc());
                        prop_assert_eq!(next[other], player.disc());
                    }
                }
            }
        }
    }
}

#[test]
fn initial_white_moves_are_legal() {
    let board = initial_board();
    let moves = board.legal_moves(Player::White);
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|&square| board.is_legal(square, Player::White)));
}

#[test]
fn label_bijection() {
    let geometry = initial_board().geometry();
    for square in geometry.squares() {
        assert_eq!(
            geometry.label_to_index(&geometry.index_to_label(square)),
            Ok(square)
        );
    }
}
