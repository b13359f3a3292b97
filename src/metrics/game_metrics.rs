use std::time::{Duration, Instant};

use crate::game::RoundSummary;

/// Session-wide numbers shown in the header
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub rounds_played: u32,
    pub last_round: Option<RoundSummary>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            rounds_played: 0,
            last_round: None,
        }
    }

    /// Refresh the clock, unless the round is over
    pub fn update(&mut self) {
        if self.last_round.is_none() {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_round_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.last_round = None;
    }

    pub fn on_round_over(&mut self, summary: &RoundSummary) {
        self.rounds_played += 1;
        self.high_score = self.high_score.max(summary.score);
        self.last_round = Some(*summary);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
