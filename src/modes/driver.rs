//! Fixed-rate driving of a single round
//!
//! [`TickScheduler`] is the recurring timer; [`RoundDriver`] pairs it with a
//! [`Game`] so that the tick that ends the round also cancels the timer and
//! fires the end-of-round notification, each exactly once.

use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::debug;

use crate::error::GameError;
use crate::game::{Collision, Game, GameConfig, RoundSummary, StepResult};
use crate::metrics::GameMetrics;

/// Receives the end-of-round notification
pub trait RoundObserver {
    fn on_round_end(&mut self, summary: &RoundSummary);
}

impl RoundObserver for GameMetrics {
    fn on_round_end(&mut self, summary: &RoundSummary) {
        self.on_round_over(summary);
    }
}

/// A recurring timer at a fixed period.
///
/// The first tick fires one full period after creation. A tick that runs
/// late delays the following ones instead of bursting to catch up.
pub struct TickScheduler {
    interval: Option<Interval>,
    period: Duration,
}

impl TickScheduler {
    /// Must be called from within a tokio runtime
    pub fn new(period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            interval: Some(interval),
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_active(&self) -> bool {
        self.interval.is_some()
    }

    /// Wait for the next tick. Never completes once cancelled.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }

    /// Stop the timer. Returns true only for the call that actually stopped it.
    pub fn cancel(&mut self) -> bool {
        self.interval.take().is_some()
    }
}

/// One round plus the timer that drives it
pub struct RoundDriver {
    game: Game,
    scheduler: TickScheduler,
}

impl RoundDriver {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let period = config.tick_period();
        let game = Game::new(config)?;

        Ok(Self {
            game,
            scheduler: TickScheduler::new(period),
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    /// Wait for the next scheduled tick
    pub async fn next_tick(&mut self) {
        self.scheduler.tick().await;
    }

    /// Run one step of the round
    pub fn tick(&mut self, observer: &mut dyn RoundObserver) -> StepResult {
        let result = self.game.tick();
        if let Some(summary) = result.summary {
            self.finish(&summary, observer);
        }
        result
    }

    /// Forward a raw arrow-key code to the game
    pub fn steer(&mut self, key_code: u32) -> bool {
        self.game.change_direction(key_code)
    }

    /// End the round from outside the tick loop. Repeated calls are no-ops.
    pub fn end(&mut self, reason: Collision, observer: &mut dyn RoundObserver) -> bool {
        match self.game.end(reason) {
            Some(summary) => {
                self.finish(&summary, observer);
                true
            }
            None => false,
        }
    }

    fn finish(&mut self, summary: &RoundSummary, observer: &mut dyn RoundObserver) {
        if self.scheduler.cancel() {
            debug!("tick scheduler cancelled");
        }
        observer.on_round_end(summary);
    }
}
