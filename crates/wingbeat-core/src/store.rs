use serde::{Deserialize, Serialize};

/// Persistence collaborator: the single source of truth for the life
/// count, banked extra lives, best score, and coin balance.
///
/// The gameplay core never caches the life count across ticks except as a
/// read-only display value refreshed from here. Calls are best-effort from
/// the core's perspective; a store that persists to disk handles its own
/// failures.
pub trait LivesStore {
    /// Current remaining lives.
    fn lives(&self) -> i32;

    /// Upper bound for `lives`; extra lives beyond it are banked instead.
    fn max_lives(&self) -> i32;

    /// Overwrite the life count (clamped to `0..=max_lives`).
    fn set_lives(&mut self, lives: i32);

    /// Deduct exactly one life and return the remaining count.
    fn lose_life(&mut self) -> i32;

    /// Record a best score if it beats the stored one.
    fn update_best_score(&mut self, score: u32);

    /// Credit collected coins.
    fn update_coins(&mut self, delta: u32);

    /// Bank one saved extra life for later use.
    fn add_saved_extra_life(&mut self);

    /// Consume one banked extra life. Returns false if none are banked.
    fn use_saved_extra_life(&mut self) -> bool;
}

/// In-memory `LivesStore`, used by tests and as the default store for
/// hosts without platform persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryLivesStore {
    lives: i32,
    max_lives: i32,
    saved_extra_lives: u32,
    best_score: u32,
    coins: u64,
}

impl MemoryLivesStore {
    pub fn new(max_lives: i32) -> Self {
        Self {
            lives: max_lives,
            max_lives,
            saved_extra_lives: 0,
            best_score: 0,
            coins: 0,
        }
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn coins(&self) -> u64 {
        self.coins
    }

    pub fn saved_extra_lives(&self) -> u32 {
        self.saved_extra_lives
    }
}

impl LivesStore for MemoryLivesStore {
    fn lives(&self) -> i32 {
        self.lives
    }

    fn max_lives(&self) -> i32 {
        self.max_lives
    }

    fn set_lives(&mut self, lives: i32) {
        self.lives = lives.clamp(0, self.max_lives);
    }

    fn lose_life(&mut self) -> i32 {
        self.lives = (self.lives - 1).max(0);
        self.lives
    }

    fn update_best_score(&mut self, score: u32) {
        if score > self.best_score {
            self.best_score = score;
        }
    }

    fn update_coins(&mut self, delta: u32) {
        self.coins += u64::from(delta);
    }

    fn add_saved_extra_life(&mut self) {
        self.saved_extra_lives += 1;
    }

    fn use_saved_extra_life(&mut self) -> bool {
        if self.saved_extra_lives == 0 {
            return false;
        }
        self.saved_extra_lives -= 1;
        true
    }
}
