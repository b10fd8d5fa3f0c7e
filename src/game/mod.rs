//! Core Connect Four game logic: board representation, player tokens, and the
//! session state machine driving a game from name entry to a result.

mod board;
mod player;
mod session;

pub use board::{Board, Cell, DropResult, COLS, ROWS};
pub use player::Token;
pub use session::{GameOutcome, GameSession, MoveReport, Phase};
