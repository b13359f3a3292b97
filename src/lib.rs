//! Grid Snake - a fixed-tick Snake game
//!
//! This library provides:
//! - Core game logic: grid, snake, target and round lifecycle (game module)
//! - Tick scheduling and the interactive session (modes module)
//! - Terminal input mapping (input module) and TUI rendering (render module)

pub mod error;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;

pub use error::{ConfigError, GameError, GridError, SnakeError};
