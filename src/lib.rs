//! # Othello
//!
//! The classic board game Othello (Reversi): one shared rule engine behind
//! two front ends — a console version (plain or ANSI-colorized) and an
//! interactive terminal UI with mouse play built on Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, capture rule, turn state machine
//! - [`console`] — Text front end: board printing and the coordinate prompt loop
//! - [`ui`] — Terminal UI: full-screen board with mouse and cursor play
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod ui;
