//! Error types for grid construction, configuration and round setup

use thiserror::Error;

use crate::game::Coordinate;

/// Failure to build a grid from a declared row structure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row")]
    NoRows,
    #[error("grid must have at least one column")]
    NoColumns,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Failure to build a snake from an initial body
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnakeError {
    #[error("snake body must contain at least one segment")]
    EmptyBody,
    #[error("snake body visits {0} more than once")]
    DuplicateSegment(Coordinate),
}

/// Invalid game configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero (got {rows}x{columns})")]
    ZeroDimension { rows: usize, columns: usize },
    #[error("tick rate must be at least one tick per second")]
    ZeroTickRate,
    #[error("tick rate {0} is too high; the tick period rounds down to zero")]
    TickRateTooHigh(u32),
    #[error("initial snake body is empty")]
    EmptyBody,
}

/// Failure to start a round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Snake(#[from] SnakeError),
    #[error("target {0} lies outside the grid")]
    TargetOutOfBounds(Coordinate),
    #[error("target {0} overlaps the initial snake body")]
    TargetOnSnake(Coordinate),
    #[error("snake segment {0} lies outside the grid")]
    BodyOutOfBounds(Coordinate),
}
