//! Move selection for `disc-othello`.
//!
//! [`search`] holds the raw searches, which report a value and a move.
//! The [`Strategy`] implementations wrap them behind one "choose a move"
//! interface so a driver can swap policies without touching the rules.

pub mod search;

mod strategy;

pub use search::{SearchResult, SearchStats};
pub use strategy::*;

use disc_othello::{Board, Player, Square};
use tracing::instrument;

/// Search values, from the point of view of the player to move.
pub type Value = i32;

/// Value of a finished game the mover has won.
pub const WIN: Value = Value::MAX;

/// Value of a finished game the mover has lost. Exactly `-WIN`, so negation never overflows.
pub const LOSS: Value = -WIN;

/// Value of a finished game: [`WIN`], [`LOSS`], or 0 for a draw.
pub fn terminal_value(board: &Board, player: Player) -> Value {
    match board.score(player) {
        diff if diff > 0 => WIN,
        diff if diff < 0 => LOSS,
        _ => 0,
    }
}

/// The negamax choice for `player` looking `depth` plies ahead (at least one).
/// None only if `player` has no legal move.
#[instrument(level = "debug", skip(board))]
pub fn best_move(board: &Board, player: Player, depth: u32) -> Option<Square> {
    search::negamax(board, player, depth.max(1), &mut SearchStats::default()).best_move
}

/// The move giving `player` the best score right after it is played.
/// None only if `player` has no legal move.
#[instrument(level = "debug", skip(board))]
pub fn greedy_move(board: &Board, player: Player) -> Option<Square> {
    search::greedy(board, player, &mut SearchStats::default()).best_move
}
