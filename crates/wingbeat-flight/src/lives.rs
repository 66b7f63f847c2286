use serde::{Deserialize, Serialize};

use wingbeat_core::effect::EffectTimer;
use wingbeat_core::store::LivesStore;

/// Outcome of a collision reaching the lives controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeLoss {
    /// Invulnerability window open (or already game over): nothing happened.
    /// This is the idempotence guard against two collision signals landing
    /// in the same tick.
    Ignored,
    /// A life was deducted and the run continues.
    Continued { remaining: i32, saved_life_used: bool },
    /// No lives and no banked extra life left.
    GameOver,
}

/// Life-loss state machine: Alive(invulnerable) or GameOver.
///
/// The store is the single authority on the life count; this controller
/// never mirrors it across ticks, it only decides transitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LivesController {
    invulnerability: EffectTimer,
    game_over: bool,
}

impl LivesController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the invulnerability window down one tick.
    pub fn tick(&mut self) {
        self.invulnerability.tick();
    }

    /// While true, the session skips collision evaluation entirely.
    pub fn invulnerable(&self) -> bool {
        self.invulnerability.is_active()
    }

    pub fn invulnerability_remaining(&self) -> u32 {
        self.invulnerability.remaining()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Fresh game: window closed, alive again.
    pub fn reset(&mut self) {
        self.invulnerability.clear();
        self.game_over = false;
    }

    /// React to a collision. Deducts exactly one life through the store,
    /// opens the invulnerability window, and consumes a banked extra life
    /// when the count would otherwise reach zero.
    pub fn lose_life<S: LivesStore>(&mut self, store: &mut S, window_ticks: u32) -> LifeLoss {
        if self.game_over || self.invulnerability.is_active() {
            return LifeLoss::Ignored;
        }
        self.invulnerability.set(window_ticks);

        let remaining = store.lose_life();
        if remaining > 0 {
            return LifeLoss::Continued {
                remaining,
                saved_life_used: false,
            };
        }

        if store.use_saved_extra_life() {
            store.set_lives(1);
            tracing::debug!("saved extra life consumed, restoring to 1 life");
            return LifeLoss::Continued {
                remaining: 1,
                saved_life_used: true,
            };
        }

        self.game_over = true;
        LifeLoss::GameOver
    }
}
