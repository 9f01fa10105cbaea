//! Board storage: a flat grid of [`Cell`]s with a sentinel border.
//!
//! Game logic lives in [`rules.rs`]; this module only stores cells, builds
//! starting positions and counts material.

use crate::game::Player;
use crate::geometry::{Geometry, ParseSquareError, Square};
use crate::utils;
use std::fmt;
use std::ops::Index;

/// The state of a single storage cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
    /// Off-board marker in the border ring. Never written during play.
    Sentinel,
}

impl Cell {
    /// The player owning a disc in this cell, if any.
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
            Cell::Empty | Cell::Sentinel => None,
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => '@',
            Cell::White => 'o',
            Cell::Sentinel => ' ',
        }
    }
}

/// Starting placement of discs on a board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Layout {
    pub geometry: Geometry,
    pub white: Vec<Square>,
    pub black: Vec<Square>,
}

/// The built-in asymmetric 8x8 starting position.
const DEFAULT_WHITE: [&str; 19] = [
    "b3", "b5", "b6", "c4", "c5", "d4", "d5", "d6", "d7", "e2", "e3", "e4", "e6", "f3", "g3",
    "g4", "g6", "h4", "h5",
];
const DEFAULT_BLACK: [&str; 18] = [
    "a4", "a5", "a6", "b4", "c1", "c3", "d1", "d2", "d3", "e5", "e7", "e8", "f2", "f4", "f5",
    "g5", "h3", "h6",
];

impl Default for Layout {
    fn default() -> Self {
        let geometry = Geometry::default();
        let resolve = |labels: &[&str]| -> Vec<Square> {
            labels
                .iter()
                .filter_map(|label| geometry.label_to_index(label).ok())
                .collect()
        };

        Self {
            geometry,
            white: resolve(&DEFAULT_WHITE),
            black: resolve(&DEFAULT_BLACK),
        }
    }
}

impl Layout {
    /// Resolve labelled positions against `geometry`.
    pub fn from_labels<W, B>(geometry: Geometry, white: W, black: B) -> Result<Self, ParseSquareError>
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        Ok(Self {
            geometry,
            white: resolve_labels(geometry, white)?,
            black: resolve_labels(geometry, black)?,
        })
    }

    /// The symmetric four-disc centre opening.
    /// Returns None unless both dimensions are even.
    pub fn standard(geometry: Geometry) -> Option<Self> {
        if geometry.rows() % 2 != 0 || geometry.cols() % 2 != 0 {
            return None;
        }

        let (row, col) = (geometry.rows() / 2, geometry.cols() / 2);
        Some(Self {
            geometry,
            white: vec![
                geometry.square_at(row, col)?,
                geometry.square_at(row + 1, col + 1)?,
            ],
            black: vec![
                geometry.square_at(row, col + 1)?,
                geometry.square_at(row + 1, col)?,
            ],
        })
    }
}

fn resolve_labels<I>(geometry: Geometry, labels: I) -> Result<Vec<Square>, ParseSquareError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    labels
        .into_iter()
        .map(|label| geometry.label_to_index(label.as_ref()))
        .collect()
}

/// A bordered board. Cloning gives an independent copy for speculative play.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    geometry: Geometry,
    cells: Vec<Cell>,
}

/// The default starting board.
pub fn initial_board() -> Board {
    Board::from_layout(&Layout::default())
}

impl Default for Board {
    fn default() -> Self {
        initial_board()
    }
}

impl Board {
    /// An empty board: all playable squares empty, border all sentinels.
    pub fn empty(geometry: Geometry) -> Self {
        let cells = (0..geometry.len())
            .map(|index| match geometry.is_interior(Square::from(index)) {
                true => Cell::Empty,
                false => Cell::Sentinel,
            })
            .collect();

        Self { geometry, cells }
    }

    /// Build a board from a starting layout. White discs are placed before
    /// black ones, so a square listed for both players ends up black.
    /// Squares outside the playable region are skipped.
    pub fn from_layout(layout: &Layout) -> Self {
        let mut board = Self::empty(layout.geometry);
        for &square in &layout.white {
            board.place(square, Cell::White);
        }
        for &square in &layout.black {
            board.place(square, Cell::Black);
        }
        board
    }

    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Write a disc into a playable square. Writes to the border are ignored.
    #[inline]
    pub(crate) fn place(&mut self, square: Square, cell: Cell) {
        if self.geometry.is_interior(square) {
            self.cells[square.index()] = cell;
        }
    }

    /// Count the playable squares holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.geometry
            .squares()
            .filter(|&square| self[square] == cell)
            .count()
    }

    /// Total number of discs of either colour.
    pub fn count_discs(&self) -> usize {
        self.count(Cell::Black) + self.count(Cell::White)
    }

    /// Material difference: # of `player`'s discs - # of the opponent's discs.
    pub fn score(&self, player: Player) -> i32 {
        self.geometry
            .squares()
            .map(|square| match self[square].owner() {
                Some(owner) if owner == player => 1,
                Some(_) => -1,
                None => 0,
            })
            .sum()
    }
}

impl Index<Square> for Board {
    type Output = Cell;

    /// Panics if `square` is outside storage.
    #[inline]
    fn index(&self, square: Square) -> &Cell {
        &self.cells[square.index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols = self.geometry.squares().map(|square| self[square].symbol());
        utils::format_grid(self.geometry, symbols, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(label: &str) -> Square {
        Geometry::default().label_to_index(label).unwrap()
    }

    #[test]
    fn empty_board_has_sentinel_border() {
        let geometry = Geometry::new(3, 4).unwrap();
        let board = Board::empty(geometry);
        for index in 0..geometry.len() {
            let square = Square::from(index);
            let expected = match geometry.is_interior(square) {
                true => Cell::Empty,
                false => Cell::Sentinel,
            };
            assert_eq!(board[square], expected);
        }
        assert_eq!(board.count(Cell::Empty), 12);
        assert_eq!(board.count(Cell::Sentinel), 0);
    }

    #[test]
    fn initial_layout() {
        let board = initial_board();
        assert_eq!(board.count(Cell::White), 19);
        assert_eq!(board.count(Cell::Black), 18);
        assert_eq!(board.count(Cell::Empty), 64 - 37);
        assert_eq!(board[square("b3")], Cell::White);
        assert_eq!(board[square("c1")], Cell::Black);
        assert_eq!(board[square("a1")], Cell::Empty);
    }

    #[test]
    fn initial_score() {
        let board = initial_board();
        assert_eq!(board.score(Player::White), 1);
        assert_eq!(board.score(Player::Black), -1);
    }

    #[test]
    fn score_is_repeatable() {
        let board = initial_board();
        assert_eq!(board.score(Player::White), board.score(Player::White));
    }

    #[test]
    fn overlapping_layout_prefers_black() {
        let geometry = Geometry::default();
        let layout = Layout::from_labels(geometry, ["d4", "e5"], ["d4"]).unwrap();
        let board = Board::from_layout(&layout);
        assert_eq!(board[square("d4")], Cell::Black);
        assert_eq!(board[square("e5")], Cell::White);
    }

    #[test]
    fn layout_from_bad_labels() {
        let geometry = Geometry::default();
        assert_eq!(
            Layout::from_labels(geometry, ["d4", "j9"], ["e4"]),
            Err(ParseSquareError)
        );
    }

    #[test]
    fn standard_layout() {
        let layout = Layout::standard(Geometry::default()).unwrap();
        let board = Board::from_layout(&layout);
        assert_eq!(board[square("d4")], Cell::White);
        assert_eq!(board[square("e5")], Cell::White);
        assert_eq!(board[square("d5")], Cell::Black);
        assert_eq!(board[square("e4")], Cell::Black);
        assert_eq!(board.score(Player::Black), 0);

        assert_eq!(Layout::standard(Geometry::new(5, 6).unwrap()), None);
    }

    #[test]
    fn display_standard() {
        let geometry = Geometry::new(4, 4).unwrap();
        let board = Board::from_layout(&Layout::standard(geometry).unwrap());
        let expected = [
            "    a b c d",
            " 1  . . . .  1",
            " 2  . o @ .  2",
            " 3  . @ o .  3",
            " 4  . . . .  4",
            "    a b c d",
        ]
        .join("\n");
        assert_eq!(board.to_string(), expected);
    }
}
