//! # Connect Four
//!
//! A two-player Connect Four game for the terminal, built with Ratatui.
//! Players take turns dropping pieces into columns until one lines up four
//! in a row (horizontally, vertically, or diagonally) or the board fills
//! for a tie.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, state machine
//! - [`ui`] — Terminal UI: board rendering and input handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
