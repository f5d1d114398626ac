//! # Gridline
//!
//! Generalized tic-tac-toe on 3x3 to 6x6 boards with a variable run length
//! to win, plus a computer opponent with three strength tiers.
//!
//! ## Modules
//!
//! - [`game`] — Board, win detection, player marks, turn/outcome state, score tally
//! - [`ai`] — Agent trait, random/heuristic/minimax agents, difficulty dispatch
//! - [`arena`] — Agent-vs-agent matches and series
//! - [`console`] — Text rendering and move parsing for the terminal front-end
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
