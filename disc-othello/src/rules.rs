//! Move legality, the bracket-and-flip capture rule, and move application.

use crate::board::{Board, Cell};
use crate::game::{Action, IllegalMove, Player};
use crate::geometry::{Direction, Square};

impl Board {
    /// Find the square closing a run of opponent discs next to `square` along
    /// `direction`, or None if the run is empty or ends on an empty or
    /// sentinel cell.
    pub fn find_bracket(&self, square: Square, player: Player, direction: Direction) -> Option<Square> {
        let geometry = self.geometry();
        if !geometry.is_interior(square) {
            return None;
        }

        let mut bracket = geometry.step(square, direction);
        if self[bracket] == player.disc() {
            return None;
        }

        let opponent = player.opponent().disc();
        while self[bracket] == opponent {
            bracket = geometry.step(bracket, direction);
        }

        match self[bracket].owner() {
            Some(owner) if owner == player => Some(bracket),
            _ => None,
        }
    }

    /// Returns whether `player` may place a disc on `square`.
    pub fn is_legal(&self, square: Square, player: Player) -> bool {
        self.geometry().is_interior(square)
            && self[square] == Cell::Empty
            && Direction::ALL
                .iter()
                .any(|&direction| self.find_bracket(square, player, direction).is_some())
    }

    /// All legal moves for `player`, in row-major square order.
    pub fn legal_moves(&self, player: Player) -> Vec<Square> {
        self.geometry()
            .squares()
            .filter(|&square| self.is_legal(square, player))
            .collect()
    }

    /// Returns whether `player` has at least one legal move.
    pub fn any_legal_move(&self, player: Player) -> bool {
        self.geometry()
            .squares()
            .any(|square| self.is_legal(square, player))
    }

    /// Flip the opponent discs between `square` and its bracket along `direction`.
    /// Does nothing if that direction has no bracket.
    pub fn make_flips(&mut self, square: Square, player: Player, direction: Direction) {
        let bracket = match self.find_bracket(square, player, direction) {
            Some(bracket) => bracket,
            None => return,
        };

        let geometry = self.geometry();
        let mut current = geometry.step(square, direction);
        while current != bracket {
            self.place(current, player.disc());
            current = geometry.step(current, direction);
        }
    }

    /// Place `player`'s disc on `square` and flip every bracketed run.
    /// The move must be legal: this is not checked.
    pub fn make_move(&mut self, square: Square, player: Player) {
        self.place(square, player.disc());
        for direction in Direction::ALL {
            self.make_flips(square, player, direction);
        }
    }

    /// A copy of this board with an unchecked move applied. The original is untouched.
    pub fn after_move(&self, square: Square, player: Player) -> Board {
        let mut next = self.clone();
        next.make_move(square, player);
        next
    }

    /// Check and commit a move, consuming the board.
    /// On failure the untouched board is returned inside the error.
    pub fn play(mut self, square: Square, player: Player) -> Result<Board, IllegalMove> {
        if !self.is_legal(square, player) {
            return Err(IllegalMove {
                player,
                action: Action::Place(square),
                board: self,
            });
        }

        self.make_move(square, player);
        Ok(self)
    }
}
