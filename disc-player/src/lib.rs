//! Drivers for playing `disc-othello` games with `disc-search` strategies:
//! setup-file loading and the game loop used by the `disc-player` binary.

pub mod config;
pub mod play;
