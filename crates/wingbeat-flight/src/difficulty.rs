//! Score-driven difficulty curve: pure functions of the current run score.
//!
//! All live obstacles share one global speed recomputed from the score each
//! tick. Per-obstacle speeds would let spacing drift as difficulty changes
//! mid-flight; a shared speed keeps the visual rhythm consistent.

use crate::config::DifficultyConfig;

/// Spawn-interval tiers: (score ceiling, interval in ticks).
/// Tier names, lowest to highest: fledgling, breeze, glide, headwind,
/// storm, gale. Past the last ceiling the run is in the "night owl" tier
/// and the interval holds at its floor.
const SPACING_TIERS: &[(u32, u32)] = &[
    (15, 105),
    (40, 95),
    (90, 85),
    (150, 78),
    (300, 70),
    (600, 64),
];

/// Interval floor once every tier ceiling is passed.
const SPACING_FLOOR: u32 = 58;

/// Ticks between obstacle spawns at the given score. Monotonically
/// non-increasing in score.
pub fn spacing(score: u32) -> u32 {
    for &(ceiling, interval) in SPACING_TIERS {
        if score <= ceiling {
            return interval;
        }
    }
    SPACING_FLOOR
}

/// Number of completed difficulty steps at the given score.
fn steps(config: &DifficultyConfig, score: u32) -> f32 {
    (score / config.score_interval.max(1)) as f32
}

/// Obstacle gap height: linear decay with a floor.
pub fn gap_size(config: &DifficultyConfig, score: u32) -> f32 {
    (config.base_gap - steps(config, score) * config.gap_reduction).max(config.min_gap)
}

/// Shared obstacle scroll speed: linear ramp with a ceiling, px per
/// reference frame.
pub fn global_speed(config: &DifficultyConfig, score: u32) -> f32 {
    (config.base_speed + steps(config, score) * config.speed_increase).min(config.max_speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_steps_down_through_tiers() {
        assert_eq!(spacing(0), 105);
        assert_eq!(spacing(15), 105);
        assert_eq!(spacing(16), 95);
        assert_eq!(spacing(90), 85);
        assert_eq!(spacing(300), 70);
        assert_eq!(spacing(600), 64);
        assert_eq!(spacing(601), SPACING_FLOOR);
        assert_eq!(spacing(u32::MAX), SPACING_FLOOR);
    }

    #[test]
    fn gap_follows_linear_decay_formula() {
        let cfg = DifficultyConfig::default();
        assert_eq!(gap_size(&cfg, 0), cfg.base_gap);
        // One full interval completed: one reduction step.
        assert_eq!(
            gap_size(&cfg, cfg.score_interval),
            cfg.base_gap - cfg.gap_reduction
        );
        // Score 650 with interval 10: 65 steps.
        let expected = (cfg.base_gap - 65.0 * cfg.gap_reduction).max(cfg.min_gap);
        assert_eq!(gap_size(&cfg, 650), expected);
    }

    #[test]
    fn gap_bottoms_out_at_floor() {
        let cfg = DifficultyConfig::default();
        assert_eq!(gap_size(&cfg, 1_000_000), cfg.min_gap);
    }

    #[test]
    fn speed_ramps_and_saturates() {
        let cfg = DifficultyConfig::default();
        assert_eq!(global_speed(&cfg, 0), cfg.base_speed);
        assert_eq!(
            global_speed(&cfg, cfg.score_interval * 2),
            cfg.base_speed + 2.0 * cfg.speed_increase
        );
        assert_eq!(global_speed(&cfg, 1_000_000), cfg.max_speed);
    }

    #[test]
    fn zero_score_interval_does_not_divide_by_zero() {
        let cfg = DifficultyConfig {
            score_interval: 0,
            ..DifficultyConfig::default()
        };
        // Degenerate config: treated as interval 1, not a panic.
        let _ = gap_size(&cfg, 100);
        let _ = global_speed(&cfg, 100);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn spacing_monotonically_non_increasing(s1 in 0u32..2000, s2 in 0u32..2000) {
                let (lo, hi) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
                prop_assert!(spacing(hi) <= spacing(lo));
            }

            #[test]
            fn gap_monotonically_non_increasing(s1 in 0u32..100_000, s2 in 0u32..100_000) {
                let cfg = DifficultyConfig::default();
                let (lo, hi) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
                prop_assert!(gap_size(&cfg, hi) <= gap_size(&cfg, lo));
            }

            #[test]
            fn speed_monotonically_non_decreasing(s1 in 0u32..100_000, s2 in 0u32..100_000) {
                let cfg = DifficultyConfig::default();
                let (lo, hi) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
                prop_assert!(global_speed(&cfg, hi) >= global_speed(&cfg, lo));
            }

            #[test]
            fn gap_never_below_floor(score in 0u32..1_000_000) {
                let cfg = DifficultyConfig::default();
                prop_assert!(gap_size(&cfg, score) >= cfg.min_gap);
            }

            #[test]
            fn speed_never_above_ceiling(score in 0u32..1_000_000) {
                let cfg = DifficultyConfig::default();
                prop_assert!(global_speed(&cfg, score) <= cfg.max_speed);
            }
        }
    }
}
