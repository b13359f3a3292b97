use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::grid::Coordinate;
use crate::error::ConfigError;

/// What happens to the target once the snake has eaten it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TargetRespawn {
    /// The target is gone for the rest of the round
    #[default]
    Never,
    /// The target reappears at its configured coordinate once that cell is free
    Fixed,
}

/// How a move that ends the round is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TerminalMove {
    /// Leave the body and grid exactly as they were before the fatal move
    #[default]
    Freeze,
    /// Carry out the fatal move anyway; the body may overlap itself or leave
    /// the grid for the final frame
    Commit,
}

/// Configuration for a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub columns: usize,
    /// Ticks per second
    pub tick_rate: u32,
    /// Starting body, tail first and head last
    pub initial_body: Vec<Coordinate>,
    /// Starting heading
    pub initial_heading: Direction,
    /// Where the target is placed
    pub target: Coordinate,
    pub respawn: TargetRespawn,
    pub terminal_move: TerminalMove,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            columns: 20,
            tick_rate: 8,
            initial_body: vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(0, 2),
            ],
            initial_heading: Direction::Right,
            target: Coordinate::new(9, 9),
            respawn: TargetRespawn::default(),
            terminal_move: TerminalMove::default(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self {
            target: Coordinate::new(5, 5),
            ..Self::new(10, 10)
        }
    }

    /// Read a JSON configuration file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values that can be rejected without building a grid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::ZeroDimension {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.tick_period().is_zero() {
            return Err(ConfigError::TickRateTooHigh(self.tick_rate));
        }
        if self.initial_body.is_empty() {
            return Err(ConfigError::EmptyBody);
        }
        Ok(())
    }

    /// Time between two ticks
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}
