//! Best scores for the current power-on session
//!
//! The handheld has nowhere to keep them, so the table lives only as long as
//! the process does.

use serde::{Deserialize, Serialize};

/// Runs remembered per session
pub const MAX_HIGH_SCORES: usize = 10;

/// One finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u16,
    /// Play ticks the run lasted
    pub ticks: u32,
}

/// Best runs, highest score first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a run with `score` would take, if it makes the table at all.
    /// A tie goes below the runs already there.
    fn slot_for(&self, score: u16) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let slot = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        (slot < MAX_HIGH_SCORES).then_some(slot)
    }

    /// Whether a run scoring `score` would be kept. Empty runs never are.
    pub fn qualifies(&self, score: u16) -> bool {
        self.slot_for(score).is_some()
    }

    /// Record a finished run and return its 1-based place, or `None` when it
    /// didn't make the cut. The lowest run drops off a full table.
    pub fn add_score(&mut self, score: u16, ticks: u32) -> Option<usize> {
        let slot = self.slot_for(score)?;
        self.entries.insert(slot, HighScoreEntry { score, ticks });
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(slot + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best score this session
    pub fn top_score(&self) -> Option<u16> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(0, 100), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_ranks_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(5, 100), Some(1));
        assert_eq!(scores.add_score(9, 100), Some(1));
        assert_eq!(scores.add_score(7, 100), Some(2));
        assert_eq!(scores.add_score(7, 200), Some(3));
        assert_eq!(scores.top_score(), Some(9));
    }

    #[test]
    fn test_table_is_capped() {
        let mut scores = HighScores::new();
        for s in 1..=MAX_HIGH_SCORES as u16 {
            scores.add_score(s * 10, 0);
        }
        assert!(!scores.qualifies(10));
        assert_eq!(scores.add_score(15, 0), Some(10));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().unwrap().score, 15);
    }
}
