//! Static board geometry: [`Square`]s, ray [`Direction`]s and square labels.
//!
//! The playable region is surrounded by a one-cell sentinel ring, so every
//! interior square has all eight neighbours inside storage. Ray walks that
//! start on an interior square can therefore step freely until they hit a
//! sentinel without any bounds checks.

use derive_more::{Display, Error, From, Into};
use std::fmt;

/// The largest number of rows or columns, bounded by the column letters `a`..`z`.
pub const MAX_EDGE: usize = 26;

const COLUMN_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// A flat index into bordered board storage.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, From, Into)]
pub struct Square(usize);

impl Square {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One of the eight rays out of a square.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Direction {
    /// All directions, clockwise from [`Direction::Up`].
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    /// The linear index delta of one step along this ray, for storage rows `width` cells wide.
    #[inline]
    pub fn offset(self, width: usize) -> isize {
        let width = width as isize;
        match self {
            Direction::Up => -width,
            Direction::UpRight => -(width - 1),
            Direction::Right => 1,
            Direction::DownRight => width + 1,
            Direction::Down => width,
            Direction::DownLeft => width - 1,
            Direction::Left => -1,
            Direction::UpLeft => -(width + 1),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "board dimensions must be between 1 and {} (got {}x{})", MAX_EDGE, rows, cols)]
pub struct GeometryError {
    pub rows: usize,
    pub cols: usize,
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid square label")]
pub struct ParseSquareError;

/// Dimensions of the playable region.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Geometry {
    rows: usize,
    cols: usize,
}

impl Default for Geometry {
    /// The usual 8x8 board.
    fn default() -> Self {
        Self { rows: 8, cols: 8 }
    }
}

impl Geometry {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GeometryError> {
        if !(1..=MAX_EDGE).contains(&rows) || !(1..=MAX_EDGE).contains(&cols) {
            return Err(GeometryError { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    #[inline]
    pub fn rows(self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(self) -> usize {
        self.cols
    }

    /// Storage width, including the sentinel columns.
    #[inline]
    pub fn width(self) -> usize {
        self.cols + 2
    }

    /// Storage height, including the sentinel rows.
    #[inline]
    pub fn height(self) -> usize {
        self.rows + 2
    }

    /// Total number of storage cells.
    #[inline]
    pub fn len(self) -> usize {
        self.width() * self.height()
    }

    /// Number of playable squares.
    #[inline]
    pub fn num_squares(self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if `square` lies in the playable region.
    #[inline]
    pub fn is_interior(self, square: Square) -> bool {
        let (row, col) = (square.0 / self.width(), square.0 % self.width());
        (1..=self.rows).contains(&row) && (1..=self.cols).contains(&col)
    }

    /// The square with 1-based `row` and `col`, or None outside the playable region.
    pub fn square_at(self, row: usize, col: usize) -> Option<Square> {
        if (1..=self.rows).contains(&row) && (1..=self.cols).contains(&col) {
            Some(Square(row * self.width() + col))
        } else {
            None
        }
    }

    /// The neighbour of `square` along `direction`.
    /// Only meaningful for interior squares, whose neighbours always exist.
    #[inline]
    pub fn step(self, square: Square, direction: Direction) -> Square {
        let next = square.0 as isize + direction.offset(self.width());
        Square(next as usize)
    }

    /// Iterate over the playable squares in row-major order.
    pub fn squares(self) -> Squares {
        Squares {
            geometry: self,
            row: 1,
            col: 1,
        }
    }

    /// Parse a label such as `"d3"` (column letter, then 1-based row number).
    pub fn label_to_index(self, label: &str) -> Result<Square, ParseSquareError> {
        let mut chars = label.chars();
        let col_char = chars.next().ok_or(ParseSquareError)?.to_ascii_lowercase();
        let col = COLUMN_LETTERS.find(col_char).ok_or(ParseSquareError)? + 1;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseSquareError);
        }
        let row: usize = digits.parse().or(Err(ParseSquareError))?;

        self.square_at(row, col).ok_or(ParseSquareError)
    }

    /// Format an interior square as its label, the inverse of [`Geometry::label_to_index`].
    ///
    /// # Panics
    ///
    /// Panics if `square` is not playable on this geometry. Squares from
    /// [`Geometry::squares`] and [`Geometry::label_to_index`] always are; check
    /// [`Geometry::is_interior`] first for anything else.
    pub fn index_to_label(self, square: Square) -> String {
        assert!(self.is_interior(square), "square {} is not playable", square.0);
        Label {
            row: square.0 / self.width(),
            col: square.0 % self.width(),
        }
        .to_string()
    }
}

struct Label {
    row: usize,
    col: usize,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = COLUMN_LETTERS
            .chars()
            .nth(self.col - 1)
            .ok_or(fmt::Error)?;
        write!(f, "{}{}", col, self.row)
    }
}

/// Row-major iterator over the playable squares of a [`Geometry`].
#[derive(Clone, Debug)]
pub struct Squares {
    geometry: Geometry,
    row: usize,
    col: usize,
}

impl Iterator for Squares {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let square = self.geometry.square_at(self.row, self.col)?;
        if self.col == self.geometry.cols {
            self.col = 1;
            self.row += 1;
        } else {
            self.col += 1;
        }
        Some(square)
    }
}
