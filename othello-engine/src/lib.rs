//! `othello-engine` is the rules and turn-management core of an N×N Othello game.
//!
//! The crate is layered from the geometry up:
//!
//!  - [`edges`] precomputes, for every cell, which of the eight directions run off the board.
//!  - [`moves`] finds every legal move for a player along with the pieces it flips,
//!    and applies a chosen move to a [`Board`].
//!  - [`status`] classifies a position as ongoing, a forced pass, or complete.
//!  - [`undo`] holds the single most recent move so it can be reversed once.
//!  - [`Game`] ties these together into a safe turn loop for a presentation layer.
//!
//! Cells are identified everywhere by their row-major index (`row * edge_length + col`).
//! The engine performs no I/O and never formats text for display.

pub mod edges;
pub mod moves;
pub mod status;
pub mod test_utils;
pub mod undo;

mod board;
mod error;
mod game;

pub use board::*;
pub use edges::{Direction, DirectionSet, EdgeMap};
pub use error::GameError;
pub use game::*;
pub use moves::{Move, MoveSet};
pub use status::{GameResult, Status};

/// The edge length of a standard Othello board.
pub const DEFAULT_EDGE_LENGTH: usize = 8;

/// The smallest supported edge length.
pub const MIN_EDGE_LENGTH: usize = 4;

/// The largest supported edge length: one column letter per column.
pub const MAX_EDGE_LENGTH: usize = 26;
