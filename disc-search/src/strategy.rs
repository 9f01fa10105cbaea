//! Pluggable move-selection policies.

use crate::search::{self, SearchResult, SearchStats};
use disc_othello::{Board, Player, Square};
use tracing::debug;

/// A policy that picks a move for a player on a board.
pub trait Strategy {
    /// Pick a legal move for `player`, or None if there is none.
    /// Never modifies `board`.
    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Square>;

    /// Counters from the most recent call to [`Strategy::choose_move`].
    fn stats(&self) -> SearchStats;
}

fn report(name: &str, board: &Board, result: SearchResult, stats: SearchStats) -> Option<Square> {
    match result.best_move {
        Some(mv) => debug!(
            strategy = name,
            chosen = %board.geometry().index_to_label(mv),
            value = result.value,
            boards = stats.boards_evaluated,
            "move selected"
        ),
        None => debug!(strategy = name, "no legal move"),
    }
    result.best_move
}

/// Maximise the score immediately after the move.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy {
    stats: SearchStats,
}

impl Strategy for Greedy {
    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Square> {
        self.stats = SearchStats::default();
        let result = search::greedy(board, player, &mut self.stats);
        report("greedy", board, result, self.stats)
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Plain negamax to a fixed depth. A depth of 0 searches one ply, so a move is
/// always chosen when one exists.
#[derive(Clone, Copy, Debug)]
pub struct Negamax {
    pub depth: u32,
    stats: SearchStats,
}

impl Negamax {
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            stats: SearchStats::default(),
        }
    }
}

impl Strategy for Negamax {
    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Square> {
        self.stats = SearchStats::default();
        let result = search::negamax(board, player, self.depth.max(1), &mut self.stats);
        report("negamax", board, result, self.stats)
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Alpha-beta negamax to a fixed depth (at least one ply), with an optional
/// evaluation budget.
#[derive(Clone, Copy, Debug)]
pub struct AlphaBeta {
    pub depth: u32,
    pub max_boards: Option<u64>,
    stats: SearchStats,
}

impl AlphaBeta {
    pub fn new(depth: u32, max_boards: Option<u64>) -> Self {
        Self {
            depth,
            max_boards,
            stats: SearchStats::default(),
        }
    }
}

impl Strategy for AlphaBeta {
    fn choose_move(&mut self, board: &Board, player: Player) -> Option<Square> {
        self.stats = SearchStats::default();
        let result =
            search::alpha_beta_root(board, player, self.depth.max(1), self.max_boards, &mut self.stats);
        report("alpha-beta", board, result, self.stats)
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use disc_othello::initial_board;

    #[test]
    fn strategies_are_interchangeable() {
        let board = initial_board();
        let mut strategies: Vec<Box<dyn Strategy>> = vec![
            Box::new(Greedy::default()),
            Box::new(Negamax::new(2)),
            Box::new(AlphaBeta::new(2, None)),
        ];

        for strategy in strategies.iter_mut() {
            let mv = strategy.choose_move(&board, Player::White).unwrap();
            assert!(board.is_legal(mv, Player::White));
            assert!(strategy.stats().boards_evaluated > 0);
        }
        assert_eq!(board, initial_board());
    }

    #[test]
    fn zero_limits_still_choose_a_move() {
        let board = initial_board();
        let f6 = board.geometry().label_to_index("f6").unwrap();
        let mut strategies: Vec<Box<dyn Strategy>> = vec![
            Box::new(Negamax::new(0)),
            Box::new(AlphaBeta::new(0, None)),
            Box::new(AlphaBeta::new(4, Some(0))),
        ];

        for strategy in strategies.iter_mut() {
            assert_eq!(strategy.choose_move(&board, Player::White), Some(f6));
        }
    }

    #[test]
    fn stats_reset_between_calls() {
        let board = initial_board();
        let mut strategy = Negamax::new(1);
        strategy.choose_move(&board, Player::White);
        strategy.choose_move(&board, Player::White);
        assert_eq!(strategy.stats().boards_evaluated, 12);
    }
}
