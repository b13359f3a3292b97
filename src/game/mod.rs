//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Rendering and input live in their own modules and only talk to [`Game`].

pub mod action;
pub mod cell;
pub mod config;
pub mod engine;
pub mod grid;
pub mod snake;

// Re-export commonly used types
pub use action::Direction;
pub use cell::{Cell, CellState};
pub use config::{GameConfig, TargetRespawn, TerminalMove};
pub use engine::{Game, RoundPhase, RoundSummary, StepInfo, StepResult};
pub use grid::{Coordinate, Grid};
pub use snake::{Collision, Snake, StepPlan};
