//! `disc-othello` implements Othello on a mailbox board with a sentinel border.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Board`] holds the cells and implements the rules directly: bracket
//!    finding, legality, flipping and scoring. Its unchecked operations
//!    ([`Board::make_move`]) are meant for search code that only plays moves
//!    drawn from [`Board::legal_moves`].
//!  - [`Game`] is a high-level, safe interface that checks every action,
//!    handles forced passes and detects the end of the game.
//!
//! Board dimensions are a runtime [`Geometry`]; the default is 8x8 with the
//! asymmetric starting [`Layout`] returned by [`initial_board`].

pub mod test_utils;

mod board;
mod game;
mod geometry;
mod rules;
mod utils;

pub use board::*;
pub use game::*;
pub use geometry::*;
