//! Terminal UI: name entry, the game board with a column cursor and drop
//! preview, and the winner screen. Every view is drawn from `GameSession`
//! queries; key presses are forwarded to its operations.

mod app;
pub mod board_widget;
mod game_view;
mod name_entry_view;
mod winner_view;

pub use app::{App, NameField, MAX_NAME_LEN};
pub use game_view::status_text;
