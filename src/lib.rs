//! # Connect Four
//!
//! Two-player Connect Four in the terminal. Players enter their names, take
//! turns dropping pieces into a 6×7 grid, and the first to line up four wins.
//!
//! ## Modules
//!
//! - [`game`]: core game logic (board, tokens, session state machine)
//! - [`ui`]: terminal UI built with Ratatui, a thin adapter over [`game`]
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: file-backed `tracing` subscriber
//! - [`error`]: structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
