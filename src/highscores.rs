//! Best rounds of the session
//!
//! Fed from `GameEvent::GameOver`; kept in memory only, top 10 rounds.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Maximum number of rounds to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Ticks survived
    pub ticks: u64,
}

/// Session table, sorted by descending score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished round. Returns its 1-based place in the table, or
    /// None for a scoreless round or one below the cut.
    pub fn record(&mut self, event: &GameEvent) -> Option<usize> {
        let GameEvent::GameOver { score, ticks } = *event;
        if score == 0 {
            return None;
        }

        // Ties keep the earlier round ahead
        let index = self.entries.partition_point(|e| e.score >= score);
        if index >= MAX_HIGH_SCORES {
            return None;
        }
        self.entries.insert(index, HighScoreEntry { score, ticks });
        self.entries.truncate(MAX_HIGH_SCORES);

        log::info!("Session best #{}: {}", index + 1, score);
        Some(index + 1)
    }

    /// Best score so far, if any round scored
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(score: u64, ticks: u64) -> GameEvent {
        GameEvent::GameOver { score, ticks }
    }

    #[test]
    fn test_scoreless_round_not_recorded() {
        let mut scores = HighScores::new();
        assert_eq!(scores.record(&round(0, 40)), None);
        assert!(scores.entries.is_empty());
        assert_eq!(scores.top_score(), None);
    }

    #[test]
    fn test_sorted_descending_and_placed() {
        let mut scores = HighScores::new();
        assert_eq!(scores.record(&round(50, 300)), Some(1));
        assert_eq!(scores.record(&round(80, 480)), Some(1));
        assert_eq!(scores.record(&round(60, 360)), Some(2));
        assert_eq!(scores.record(&round(60, 370)), Some(3));

        let values: Vec<u64> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(values, vec![80, 60, 60, 50]);
        // Tie: the earlier round stays ahead
        assert_eq!(scores.entries[1].ticks, 360);
        assert_eq!(scores.top_score(), Some(80));
    }

    #[test]
    fn test_capped_at_max() {
        let mut scores = HighScores::new();
        for s in 1..=15u64 {
            scores.record(&round(s, s * 6));
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(6));
        assert_eq!(scores.record(&round(6, 36)), None);
        assert_eq!(scores.record(&round(7, 42)), Some(10));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
    }

    #[test]
    fn test_entry_keeps_ticks() {
        let mut scores = HighScores::new();
        scores.record(&round(12, 75));
        assert_eq!(
            scores.entries,
            vec![HighScoreEntry { score: 12, ticks: 75 }]
        );
    }
}
