//! Implements game-level Othello logic.
//!
//! For correctness, this higher-level interface is preferred, but search code
//! may work with [`Board`] directly.

use crate::board::{Board, Cell};
use crate::geometry::Square;
use derive_more::{Display, Error};
use std::fmt;
use tracing::debug;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Gets the other player.
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The cell state of this player's discs.
    #[inline]
    pub fn disc(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        self.opponent()
    }
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid player name")]
pub struct ParsePlayerError;

/// Parse a player from its name, ignoring case.
impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Player::Black),
            "white" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

/// An action in a game: place a disc or pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Place(Square),
    Pass,
}

impl From<Square> for Action {
    fn from(square: Square) -> Self {
        Self::Place(square)
    }
}

/// A rejected action, together with the board it was checked against.
#[derive(Debug, PartialEq, Eq, Error)]
pub struct IllegalMove {
    pub player: Player,
    pub action: Action,
    pub board: Board,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            Action::Pass => write!(f, "{} cannot pass", self.player),
            Action::Place(square) if self.board.geometry().is_interior(square) => write!(
                f,
                "{} cannot move to square {}",
                self.player,
                self.board.geometry().index_to_label(square)
            ),
            Action::Place(square) => write!(
                f,
                "{} cannot move to square {}",
                self.player,
                square.index()
            ),
        }
    }
}

/// A game in progress: the committed board and the player to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    pub board: Board,
    pub active_player: Player,
}

impl Default for Game {
    /// The default starting board, with White to move.
    fn default() -> Self {
        Self::new(Board::default(), Player::White)
    }
}

impl Game {
    pub fn new(board: Board, active_player: Player) -> Self {
        Self {
            board,
            active_player,
        }
    }

    /// Legal placements for the active player.
    pub fn legal_moves(&self) -> Vec<Square> {
        self.board.legal_moves(self.active_player)
    }

    /// True if the active player has no placement and must pass.
    pub fn must_pass(&self) -> bool {
        !self.board.any_legal_move(self.active_player)
    }

    /// True if neither player can place a disc.
    pub fn is_finished(&self) -> bool {
        self.must_pass() && !self.board.any_legal_move(self.active_player.opponent())
    }

    /// Apply an action for the active player. Passing is only allowed without
    /// a legal placement, and nothing is allowed once the game is finished.
    pub fn apply(self, action: Action) -> Result<Self, IllegalMove> {
        let player = self.active_player;
        let board = match action {
            Action::Place(square) => self.board.play(square, player)?,
            Action::Pass if self.must_pass() && !self.is_finished() => self.board,
            Action::Pass => {
                return Err(IllegalMove {
                    player,
                    action,
                    board: self.board,
                })
            }
        };

        debug!(%player, ?action, "applied action");
        Ok(Self {
            board,
            active_player: player.opponent(),
        })
    }

    /// The player with more discs on a finished board.
    /// None while the game is running, or for a draw.
    pub fn winner(&self) -> Option<Player> {
        if !self.is_finished() {
            return None;
        }

        match self.board.score(Player::Black) {
            diff if diff > 0 => Some(Player::Black),
            diff if diff < 0 => Some(Player::White),
            _ => None,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.active_player)
    }
}
