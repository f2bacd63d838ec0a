//! High score leaderboard
//!
//! Kept in memory for the lifetime of the process, tracks top 10 runs.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Obstacles cleared
    pub score: u32,
    /// Frames survived
    pub frames: u32,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// A run makes the board if it scored and beats the current last place
    pub fn qualifies(&self, score: u32) -> bool {
        score > 0
            && (self.entries.len() < MAX_HIGH_SCORES
                || self.entries.last().is_some_and(|last| score > last.score))
    }

    /// Record a finished run. Returns its 1-based rank, or None when it
    /// missed the board. Ties rank below earlier runs with the same score.
    pub fn add_score(&mut self, score: u32, frames: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let idx = self.entries.partition_point(|e| e.score >= score);
        self.entries.insert(idx, HighScoreEntry { score, frames });
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(idx + 1)
    }

    /// Entries best first, paired with their 1-based rank
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &HighScoreEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let mut hs = HighScores::new();
        assert_eq!(hs.add_score(0, 100), None);
        assert!(hs.is_empty());
    }

    #[test]
    fn test_sorted_with_ranks() {
        let mut hs = HighScores::new();
        assert_eq!(hs.add_score(3, 900), Some(1));
        assert_eq!(hs.add_score(7, 1800), Some(1));
        assert_eq!(hs.add_score(5, 1200), Some(2));
        assert_eq!(hs.add_score(5, 1300), Some(3));
        let scores: Vec<u32> = hs.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![7, 5, 5, 3]);
        let frames: Vec<(usize, u32)> = hs.ranked().map(|(r, e)| (r, e.frames)).collect();
        assert_eq!(frames, vec![(1, 1800), (2, 1200), (3, 1300), (4, 900)]);
    }

    #[test]
    fn test_truncates_to_max() {
        let mut hs = HighScores::new();
        for s in 1..=15 {
            hs.add_score(s, s * 200);
        }
        assert_eq!(hs.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(hs.entries.last().unwrap().score, 6);
        assert!(!hs.qualifies(6));
        assert!(hs.qualifies(7));
    }
}
