//! Internal search functions.
//!
//! All searches read the board they are given and explore each move on a
//! private copy, so the caller's board is never touched.

use crate::{terminal_value, Value, LOSS, WIN};
use disc_othello::{Board, Player, Square};

/// The outcome of searching one node, from the mover's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub value: Value,
    /// None at evaluation leaves, terminal positions and forced passes.
    pub best_move: Option<Square>,
}

impl SearchResult {
    fn leaf(value: Value) -> Self {
        Self {
            value,
            best_move: None,
        }
    }
}

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of positions scored statically, including terminal positions.
    pub boards_evaluated: u64,
}

impl SearchStats {
    fn evaluate(&mut self, board: &Board, player: Player) -> Value {
        self.boards_evaluated += 1;
        board.score(player)
    }

    fn evaluate_terminal(&mut self, board: &Board, player: Player) -> Value {
        self.boards_evaluated += 1;
        terminal_value(board, player)
    }
}

/// One-ply lookahead: the move maximising the mover's score right after it is played.
/// Ties keep the earliest move in square order.
pub fn greedy(board: &Board, player: Player, stats: &mut SearchStats) -> SearchResult {
    let mut best = SearchResult::leaf(LOSS);

    for mv in board.legal_moves(player) {
        let value = stats.evaluate(&board.after_move(mv, player), player);
        if best.best_move.is_none() || value > best.value {
            best = SearchResult {
                value,
                best_move: Some(mv),
            };
        }
    }

    best
}

/// Depth-limited negamax.
pub fn negamax(board: &Board, player: Player, depth: u32, stats: &mut SearchStats) -> SearchResult {
    if depth == 0 {
        return SearchResult::leaf(stats.evaluate(board, player));
    }

    let moves = board.legal_moves(player);
    if moves.is_empty() {
        // Both players pass: game ends
        if !board.any_legal_move(player.opponent()) {
            return SearchResult::leaf(stats.evaluate_terminal(board, player));
        }

        // I pass, but my opponent may have moves
        let reply = negamax(board, player.opponent(), depth - 1, stats);
        return SearchResult::leaf(-reply.value);
    }

    let mut best = SearchResult::leaf(LOSS);
    for mv in moves {
        let next = board.after_move(mv, player);
        let value = -negamax(&next, player.opponent(), depth - 1, stats).value;

        // The first move is kept even if it loses, so a legal move is always returned.
        if best.best_move.is_none() || value > best.value {
            best = SearchResult {
                value,
                best_move: Some(mv),
            };
        }
    }

    best
}

/// Negamax with a fail-hard alpha-beta window. Gives the same root value and
/// move as [`negamax`] when searched with the full window `(LOSS, WIN)`.
///
/// Once `max_boards` positions have been evaluated, remaining children are
/// scored statically instead of being expanded. The node itself is always
/// expanded, so a root with legal moves always yields one.
pub fn alpha_beta(
    board: &Board,
    player: Player,
    depth: u32,
    mut alpha: Value,
    beta: Value,
    max_boards: Option<u64>,
    stats: &mut SearchStats,
) -> SearchResult {
    if depth == 0 {
        return SearchResult::leaf(stats.evaluate(board, player));
    }

    let moves = board.legal_moves(player);
    if moves.is_empty() {
        if !board.any_legal_move(player.opponent()) {
            return SearchResult::leaf(stats.evaluate_terminal(board, player));
        }

        let reply = child_value(board, player.opponent(), depth - 1, -beta, -alpha, max_boards, stats);
        return SearchResult::leaf(-reply);
    }

    let mut best_move = None;
    for mv in moves {
        let next = board.after_move(mv, player);
        let value = -child_value(&next, player.opponent(), depth - 1, -beta, -alpha, max_boards, stats);

        // Fail high: this branch has a line so good for me my opponent won't allow it
        if value >= beta {
            return SearchResult {
                value: beta,
                best_move: Some(mv),
            };
        }

        // This branch is better than any line I could force before: update current lower bound
        if value > alpha {
            alpha = value;
            best_move = Some(mv);
        } else if best_move.is_none() {
            best_move = Some(mv);
        }
    }

    SearchResult {
        value: alpha,
        best_move,
    }
}

/// Value of a child node: searched while the budget lasts, scored statically after.
fn child_value(
    board: &Board,
    player: Player,
    depth: u32,
    alpha: Value,
    beta: Value,
    max_boards: Option<u64>,
    stats: &mut SearchStats,
) -> Value {
    let exhausted = max_boards.map_or(false, |limit| stats.boards_evaluated >= limit);
    if exhausted {
        return stats.evaluate(board, player);
    }
    alpha_beta(board, player, depth, alpha, beta, max_boards, stats).value
}

/// Search with the full window.
pub fn alpha_beta_root(
    board: &Board,
    player: Player,
    depth: u32,
    max_boards: Option<u64>,
    stats: &mut SearchStats,
) -> SearchResult {
    alpha_beta(board, player, depth, LOSS, WIN, max_boards, stats)
}
