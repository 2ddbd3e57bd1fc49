//! Best rounds leaderboard
//!
//! Persisted to LocalStorage, tracks the ten best completed rounds.
//! Golf scoring: fewer strokes is better.

use serde::{Deserialize, Serialize};

/// Maximum number of rounds to keep
pub const MAX_BEST_ROUNDS: usize = 10;

/// A single completed round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundEntry {
    /// Total strokes for the round, penalties included
    pub strokes: u32,
    /// Course par, for the +/- display
    pub par: u32,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

impl RoundEntry {
    /// Strokes over (positive) or under (negative) par
    pub fn to_par(&self) -> i64 {
        self.strokes as i64 - self.par as i64
    }
}

/// Best rounds leaderboard, sorted ascending by strokes
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BestRounds {
    pub entries: Vec<RoundEntry>,
}

impl BestRounds {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "fairway_best_rounds";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a round qualifies for the leaderboard
    pub fn qualifies(&self, strokes: u32) -> bool {
        if strokes == 0 {
            return false;
        }
        if self.entries.len() < MAX_BEST_ROUNDS {
            return true;
        }
        // Must beat the worst kept round
        self.entries
            .last()
            .map(|e| strokes < e.strokes)
            .unwrap_or(true)
    }

    /// Get the rank a round would achieve (1-indexed, None if it doesn't
    /// qualify)
    pub fn potential_rank(&self, strokes: u32) -> Option<usize> {
        if !self.qualifies(strokes) {
            return None;
        }
        let rank = self.entries.iter().position(|e| strokes < e.strokes);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a completed round (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_round(&mut self, strokes: u32, par: u32, timestamp: f64) -> Option<usize> {
        if !self.qualifies(strokes) {
            return None;
        }

        let entry = RoundEntry {
            strokes,
            par,
            timestamp,
        };

        // Insertion point: ascending by strokes, earlier rounds win ties
        let pos = self.entries.iter().position(|e| strokes < e.strokes);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_BEST_ROUNDS);

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The best round on record (if any)
    pub fn best(&self) -> Option<u32> {
        self.entries.first().map(|e| e.strokes)
    }

    /// Load the leaderboard from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(rounds) = serde_json::from_str::<BestRounds>(&json) {
                    log::info!("Loaded {} best rounds", rounds.entries.len());
                    return rounds;
                }
            }
        }

        log::info!("No best rounds found, starting fresh");
        Self::new()
    }

    /// Save the leaderboard to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Best rounds saved ({} entries)", self.entries.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fewer_strokes_rank_higher() {
        let mut rounds = BestRounds::new();
        assert_eq!(rounds.add_round(40, 28, 0.0), Some(1));
        assert_eq!(rounds.add_round(30, 28, 1.0), Some(1));
        assert_eq!(rounds.add_round(35, 28, 2.0), Some(2));
        assert_eq!(rounds.best(), Some(30));
    }

    #[test]
    fn test_earlier_round_wins_ties() {
        let mut rounds = BestRounds::new();
        rounds.add_round(30, 28, 0.0);
        assert_eq!(rounds.add_round(30, 28, 1.0), Some(2));
        assert_eq!(rounds.entries[0].timestamp, 0.0);
    }

    #[test]
    fn test_full_board_drops_the_worst() {
        let mut rounds = BestRounds::new();
        for strokes in 30..40 {
            rounds.add_round(strokes, 28, 0.0);
        }
        assert_eq!(rounds.entries.len(), MAX_BEST_ROUNDS);
        assert!(!rounds.qualifies(39), "equal to the worst is not enough");
        assert!(rounds.qualifies(29));

        rounds.add_round(29, 28, 0.0);
        assert_eq!(rounds.entries.len(), MAX_BEST_ROUNDS);
        assert_eq!(rounds.best(), Some(29));
        assert!(rounds.entries.iter().all(|e| e.strokes != 39));
    }

    #[test]
    fn test_zero_stroke_round_never_qualifies() {
        let rounds = BestRounds::new();
        assert!(!rounds.qualifies(0));
        assert_eq!(rounds.potential_rank(0), None);
    }

    #[test]
    fn test_to_par() {
        let entry = RoundEntry {
            strokes: 30,
            par: 28,
            timestamp: 0.0,
        };
        assert_eq!(entry.to_par(), 2);
    }
}
