//! Round scoring

use crate::core::Level;

/// Running totals across rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    /// Points earned by solved rounds
    pub obtained: u32,
    /// Points offered by every started round
    pub available: u32,
    pub rounds_played: u32,
    pub rounds_won: u32,
}

impl ScoreBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn round_started(&mut self, level: Level) {
        self.available += level.points();
        self.rounds_played += 1;
    }

    pub fn round_won(&mut self, level: Level) {
        self.obtained += level.points();
        self.rounds_won += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Share of available points obtained, as a percentage
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.available == 0 {
            0.0
        } else {
            f64::from(self.obtained) / f64::from(self.available) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn started_rounds_add_available_points() {
        let mut score = ScoreBoard::new();
        score.round_started(Level::Easy);
        score.round_started(Level::Hard);
        assert_eq!(score.available, 5);
        assert_eq!(score.rounds_played, 2);
        assert_eq!(score.obtained, 0);
    }

    #[test]
    fn won_rounds_add_obtained_points() {
        let mut score = ScoreBoard::new();
        score.round_started(Level::Medium);
        score.round_won(Level::Medium);
        score.round_started(Level::Medium);
        assert_eq!(score.obtained, 2);
        assert_eq!(score.rounds_won, 1);
        assert!((score.success_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut score = ScoreBoard::new();
        score.round_started(Level::Hard);
        score.round_won(Level::Hard);
        score.reset();
        assert_eq!(score, ScoreBoard::default());
        assert!(score.success_rate().abs() < f64::EPSILON);
    }
}
