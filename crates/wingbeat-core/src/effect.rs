use serde::{Deserialize, Serialize};

/// Tick-counted boolean+countdown pair.
///
/// Invariant: `is_active()` ⇔ countdown > 0. The countdown reaching zero
/// deactivates the effect in the same tick that decrements it.
/// Re-arming while active refreshes the countdown, it never stacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectTimer {
    remaining: u32,
}

impl EffectTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or refresh) the timer for `ticks` ticks.
    pub fn set(&mut self, ticks: u32) {
        self.remaining = ticks;
    }

    /// Deactivate immediately.
    pub fn clear(&mut self) {
        self.remaining = 0;
    }

    /// Decrement one tick. Returns true on the tick the countdown crosses
    /// zero, so callers can emit a one-shot deactivation side effect.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_by_default() {
        assert!(!EffectTimer::new().is_active());
    }

    #[test]
    fn runs_for_exactly_the_configured_ticks() {
        let mut t = EffectTimer::new();
        t.set(3);
        assert!(t.is_active());
        assert!(!t.tick());
        assert!(!t.tick());
        // Third tick crosses zero and reports it.
        assert!(t.tick());
        assert!(!t.is_active());
    }

    #[test]
    fn tick_on_inactive_is_a_noop() {
        let mut t = EffectTimer::new();
        assert!(!t.tick());
        assert_eq!(t.remaining(), 0);
    }

    #[test]
    fn set_refreshes_instead_of_stacking() {
        let mut t = EffectTimer::new();
        t.set(10);
        t.tick();
        t.tick();
        t.set(10);
        assert_eq!(t.remaining(), 10);
    }

    #[test]
    fn clear_deactivates() {
        let mut t = EffectTimer::new();
        t.set(5);
        t.clear();
        assert!(!t.is_active());
    }
}
