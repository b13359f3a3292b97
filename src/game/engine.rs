use tracing::{debug, info};

use super::{
    action::Direction,
    cell::CellState,
    config::{GameConfig, TargetRespawn, TerminalMove},
    grid::{Coordinate, Grid},
    snake::{Collision, Snake, StepPlan},
};
use crate::error::GameError;

/// Lifecycle of a round. `Ended` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Running,
    Ended(Collision),
}

/// Final numbers for a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub reason: Collision,
    pub score: u32,
    pub length: usize,
    pub ticks: u64,
}

/// Information about a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepInfo {
    /// Whether the snake ate the target this step
    pub ate_target: bool,
    /// Type of collision if one occurred
    pub collision: Option<Collision>,
}

/// Result of a game tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the round is over
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
    /// Set only on the tick that ended the round
    pub summary: Option<RoundSummary>,
}

/// One round of snake: owns the grid, the snake and the target, and applies
/// every side effect of a step.
///
/// A `Game` is single-use. Once the round has ended, ticks and direction
/// changes are ignored; start a new round by building a new `Game`.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    target: Option<Coordinate>,
    phase: RoundPhase,
    score: u32,
    ticks: u64,
}

impl Game {
    /// Build the grid, place the target and the snake, and start the round
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let grid = Grid::new(config.rows, config.columns)?;
        let snake = Snake::new(config.initial_body.iter().copied(), config.initial_heading)?;

        if let Some(segment) = snake.body().find(|&segment| !grid.contains(segment)) {
            return Err(GameError::BodyOutOfBounds(segment));
        }
        if !grid.contains(config.target) {
            return Err(GameError::TargetOutOfBounds(config.target));
        }
        if snake.contains(config.target) {
            return Err(GameError::TargetOnSnake(config.target));
        }

        let mut game = Self {
            config,
            grid,
            snake,
            target: None,
            phase: RoundPhase::Running,
            score: 0,
            ticks: 0,
        };
        game.place_target();
        game.redraw();

        info!(
            rows = game.grid.rows(),
            columns = game.grid.columns(),
            length = game.snake.len(),
            target_at = %game.config.target,
            "round started"
        );

        Ok(game)
    }

    /// Advance the round by one step
    pub fn tick(&mut self) -> StepResult {
        if !self.is_running() {
            return StepResult {
                terminated: true,
                info: StepInfo::default(),
                summary: None,
            };
        }

        self.ticks += 1;
        let plan = self.snake.plan_step(self.target, &self.grid);

        if let Some(collision) = plan.collision {
            let committed = self.config.terminal_move == TerminalMove::Commit;
            if committed {
                self.commit(&plan);
            }
            let summary = self.end(collision);

            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_target: committed && plan.grew,
                    collision: Some(collision),
                },
                summary,
            };
        }

        self.commit(&plan);
        self.respawn_target();

        StepResult {
            terminated: false,
            info: StepInfo {
                ate_target: plan.grew,
                collision: None,
            },
            summary: None,
        }
    }

    /// Map a raw arrow-key code to a direction change. Unknown codes are
    /// ignored. Returns whether the heading was accepted.
    pub fn change_direction(&mut self, key_code: u32) -> bool {
        Direction::from_key_code(key_code).is_some_and(|direction| self.set_direction(direction))
    }

    /// Request a new heading for the next tick. Reversals and requests made
    /// after the round ended are ignored.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !self.is_running() {
            return false;
        }

        let accepted = self.snake.set_direction(direction);
        debug!(?direction, accepted, "direction change");
        accepted
    }

    /// End the round. Only the first call has any effect; it returns the
    /// summary; every later call returns `None`.
    pub fn end(&mut self, reason: Collision) -> Option<RoundSummary> {
        if !self.is_running() {
            return None;
        }

        self.phase = RoundPhase::Ended(reason);
        let summary = self.summary();
        if let Some(summary) = &summary {
            info!(
                ?reason,
                score = summary.score,
                length = summary.length,
                ticks = summary.ticks,
                "round ended"
            );
        }
        summary
    }

    pub fn is_running(&self) -> bool {
        self.phase == RoundPhase::Running
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Summary of the round, once it has ended
    pub fn summary(&self) -> Option<RoundSummary> {
        match self.phase {
            RoundPhase::Running => None,
            RoundPhase::Ended(reason) => Some(RoundSummary {
                reason,
                score: self.score,
                length: self.snake.len(),
                ticks: self.ticks,
            }),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Current target, if one is on the grid
    pub fn target(&self) -> Option<Coordinate> {
        self.target
    }

    /// Targets eaten so far
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Mark every in-bounds body segment as occupied
    pub fn redraw(&mut self) {
        for segment in self.snake.body() {
            if let Some(cell) = self.grid.cell_at_mut(segment) {
                cell.set_occupied_by_actor();
            }
        }
    }

    /// Put the target on its configured cell if that cell is free
    fn place_target(&mut self) -> bool {
        let at = self.config.target;
        match self.grid.cell_at_mut(at) {
            Some(cell) if cell.is_empty() => {
                cell.set_as_target();
                self.target = Some(at);
                debug!(at = %at, "target placed");
                true
            }
            _ => false,
        }
    }

    /// Consume the target: its cell now belongs to the snake's head
    fn remove_target(&mut self) {
        let Some(at) = self.target.take() else {
            return;
        };
        if let Some(cell) = self.grid.cell_at_mut(at) {
            cell.clear();
            cell.set_occupied_by_actor();
        }
        debug!(at = %at, "target consumed");
    }

    fn respawn_target(&mut self) {
        if self.target.is_some() || self.config.respawn == TargetRespawn::Never {
            return;
        }
        if self.grid.state_at(self.config.target) == Some(CellState::Empty) {
            self.place_target();
        }
    }

    fn commit(&mut self, plan: &StepPlan) {
        if let Some(tail) = plan.vacated_tail {
            if let Some(cell) = self.grid.cell_at_mut(tail) {
                cell.clear();
            }
        }

        if plan.grew {
            self.remove_target();
            self.score += 1;
        }

        self.snake.apply(plan);

        if let Some(cell) = self.grid.cell_at_mut(plan.new_head) {
            cell.set_occupied_by_actor();
        }
    }
}
