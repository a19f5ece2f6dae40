mod board;
mod cell;
mod pattern;

pub use board::{Board, BoardError, DEFAULT_DENSITY};
pub use cell::Cell;
pub use pattern::{Pattern, demo_seed};
