//! Running games between [`Strategy`] players.
//!
//! Strategies only ever see a shared reference to the committed board, and
//! every action they pick is checked again by [`Game::apply`] before it is
//! committed.

use crate::config::EvalParams;
use disc_othello::{Action, Game, IllegalMove, Player};
use disc_search::{AlphaBeta, Greedy, Negamax, SearchStats, Strategy};
use tracing::info;

/// The selectable move-selection policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyKind {
    Greedy,
    Negamax,
    AlphaBeta,
}

impl StrategyKind {
    pub fn build(self, params: &EvalParams) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Greedy => Box::new(Greedy::default()),
            StrategyKind::Negamax => Box::new(Negamax::new(params.max_depth)),
            StrategyKind::AlphaBeta => Box::new(AlphaBeta::new(params.max_depth, params.max_boards)),
        }
    }
}

/// The action `strategy` picks for the active player: a placement, or a pass
/// when it finds no move.
pub fn next_action(strategy: &mut dyn Strategy, game: &Game) -> Action {
    match strategy.choose_move(&game.board, game.active_player) {
        Some(square) => Action::Place(square),
        None => Action::Pass,
    }
}

/// One committed ply.
#[derive(Clone, Debug)]
pub struct Ply {
    pub player: Player,
    pub action: Action,
    pub stats: SearchStats,
}

/// Let `strategy` pick an action for the active player and commit it.
pub fn play_turn(game: Game, strategy: &mut dyn Strategy) -> Result<(Game, Ply), IllegalMove> {
    let player = game.active_player;
    let action = next_action(strategy, &game);
    let game = game.apply(action)?;

    let ply = Ply {
        player,
        action,
        stats: strategy.stats(),
    };
    Ok((game, ply))
}

/// Play until neither side can move, calling `on_ply` after every committed ply.
pub fn self_play<F>(
    mut game: Game,
    black: &mut dyn Strategy,
    white: &mut dyn Strategy,
    mut on_ply: F,
) -> Result<Game, IllegalMove>
where
    F: FnMut(&Game, &Ply),
{
    let mut plies = 0;
    while !game.is_finished() {
        let strategy: &mut dyn Strategy = match game.active_player {
            Player::Black => &mut *black,
            Player::White => &mut *white,
        };

        let (next, ply) = play_turn(game, strategy)?;
        on_ply(&next, &ply);
        game = next;
        plies += 1;
    }

    info!(plies, winner = ?game.winner(), "game finished");
    Ok(game)
}
