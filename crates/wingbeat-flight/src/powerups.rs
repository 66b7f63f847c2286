use serde::{Deserialize, Serialize};

use wingbeat_core::effect::EffectTimer;

use crate::config::PowerUpConfig;

/// Power-up types. Four are timed effects; ExtraLife applies immediately
/// through the lives controller and never enters `PowerUpState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    Shield,
    SlowMotion,
    ScoreMultiplier,
    Magnet,
    ExtraLife,
}

impl PowerUpKind {
    /// Effect duration in ticks; None for the instantaneous ExtraLife.
    pub fn duration_ticks(&self, config: &PowerUpConfig) -> Option<u32> {
        match self {
            PowerUpKind::Shield => Some(config.shield_ticks),
            PowerUpKind::SlowMotion => Some(config.slow_motion_ticks),
            PowerUpKind::ScoreMultiplier => Some(config.multiplier_ticks),
            PowerUpKind::Magnet => Some(config.magnet_ticks),
            PowerUpKind::ExtraLife => None,
        }
    }
}

/// The four timed effects with their remaining durations, plus per-run
/// usage counters. Reset to all-inactive at run start and on continue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PowerUpState {
    shield: EffectTimer,
    slow_motion: EffectTimer,
    multiplier: EffectTimer,
    magnet: EffectTimer,
    pub shield_uses: u32,
    pub slow_motion_uses: u32,
    pub magnet_uses: u32,
}

impl PowerUpState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate (or refresh) a timed effect. Re-collecting while active
    /// resets the countdown to the full duration, it does not stack.
    /// ExtraLife is not a timed effect and is ignored here.
    pub fn activate(&mut self, kind: PowerUpKind, config: &PowerUpConfig) {
        let Some(duration) = kind.duration_ticks(config) else {
            return;
        };
        match kind {
            PowerUpKind::Shield => {
                self.shield.set(duration);
                self.shield_uses += 1;
            },
            PowerUpKind::SlowMotion => {
                self.slow_motion.set(duration);
                self.slow_motion_uses += 1;
            },
            PowerUpKind::ScoreMultiplier => {
                self.multiplier.set(duration);
            },
            PowerUpKind::Magnet => {
                self.magnet.set(duration);
                self.magnet_uses += 1;
            },
            PowerUpKind::ExtraLife => {},
        }
    }

    /// Decrement every active countdown by one tick. An effect whose
    /// countdown reaches zero is inactive within the same tick.
    pub fn decay(&mut self) {
        self.shield.tick();
        self.slow_motion.tick();
        self.multiplier.tick();
        self.magnet.tick();
    }

    /// All effects off, usage counters back to zero (run start / continue).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn shield_active(&self) -> bool {
        self.shield.is_active()
    }

    pub fn slow_motion_active(&self) -> bool {
        self.slow_motion.is_active()
    }

    pub fn multiplier_active(&self) -> bool {
        self.multiplier.is_active()
    }

    pub fn magnet_active(&self) -> bool {
        self.magnet.is_active()
    }

    pub fn shield_remaining(&self) -> u32 {
        self.shield.remaining()
    }
}
