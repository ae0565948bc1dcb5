//! Core Connect Four game logic: board representation, player types, and the
//! game state machine.

mod board;
mod player;
mod state;

pub use board::{Board, InvalidDimension, DEFAULT_COLS, DEFAULT_ROWS, MIN_DIMENSION};
pub use player::{Player, PlayerId};
pub use state::{DropError, GameState, Status};
