//! Miscellaneous project utilities.

use crate::geometry::Geometry;
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format one character per playable square into a labelled grid.
/// `piece_iter` must yield exactly `geometry.num_squares()` items, in row-major order.
pub fn format_grid<T: Iterator<Item = char>>(
    geometry: Geometry,
    mut piece_iter: T,
    f: &mut Formatter,
) -> fmt::Result {
    let letters: String = ('a'..='z')
        .take(geometry.cols())
        .map(|letter| format!(" {}", letter))
        .collect();

    write!(f, "   {}", letters)?;
    for row in 1..=geometry.rows() {
        write!(f, "\n{:>2} ", row)?;
        for _ in 0..geometry.cols() {
            write!(f, " {}", piece_iter.next().ok_or(fmt::Error)?)?;
        }
        write!(f, "  {}", row)?;
    }
    write!(f, "\n   {}", letters)?;

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
