use serde::{Deserialize, Serialize};

use wingbeat_core::collision::Circle;
use wingbeat_core::screen::ScreenConfig;
use wingbeat_core::time::frame_scale;

use crate::config::BirdConfig;

/// The player's physics body. x is fixed for the whole session; only y and
/// the vertical velocity evolve. Ground and ceiling are collision events
/// handled by the session, never position clamps here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    pub velocity: f32,
    pub collision_radius: f32,
    pub visual_radius: f32,
}

impl Bird {
    pub fn new(config: &BirdConfig, screen: &ScreenConfig) -> Self {
        Self {
            x: screen.width * config.x_fraction,
            y: screen.center_y(),
            velocity: 0.0,
            collision_radius: config.collision_radius,
            visual_radius: config.visual_radius,
        }
    }

    /// Set velocity to the fixed upward impulse. Overrides the current
    /// velocity rather than adding to it, so rapid taps don't compound.
    pub fn jump(&mut self, config: &BirdConfig) {
        self.velocity = config.jump_impulse;
    }

    /// Apply gravity and integrate position for one tick. Only the
    /// downward (positive) velocity is capped; the jump impulse is a fixed
    /// constant and needs no clamp.
    pub fn update(&mut self, config: &BirdConfig, dt: f32) {
        let scale = frame_scale(dt);
        self.velocity += config.gravity * scale;
        self.velocity = self.velocity.min(config.max_fall_velocity);
        self.y += self.velocity * scale;
    }

    /// Recenter with zero velocity: run start, continue after a life loss.
    pub fn reset(&mut self, screen: &ScreenConfig) {
        self.y = screen.center_y();
        self.velocity = 0.0;
    }

    /// Tight collision geometry (smaller than the drawn sprite).
    pub fn geometry(&self) -> Circle {
        Circle {
            x: self.x,
            y: self.y,
            radius: self.collision_radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wingbeat_core::test_helpers::make_screen;
    use wingbeat_core::time::REFERENCE_TICK;

    fn make_bird() -> (Bird, BirdConfig) {
        let config = BirdConfig::default();
        let bird = Bird::new(&config, &make_screen());
        (bird, config)
    }

    #[test]
    fn spawns_at_screen_relative_point() {
        let (bird, config) = make_bird();
        let screen = make_screen();
        assert_eq!(bird.x, screen.width * config.x_fraction);
        assert_eq!(bird.y, screen.center_y());
        assert_eq!(bird.velocity, 0.0);
    }

    #[test]
    fn gravity_accelerates_downward() {
        let (mut bird, config) = make_bird();
        let y0 = bird.y;
        bird.update(&config, REFERENCE_TICK);
        assert!(bird.velocity > 0.0);
        assert!(bird.y > y0);
    }

    #[test]
    fn jump_overrides_velocity_instead_of_adding() {
        let (mut bird, config) = make_bird();
        bird.velocity = 10.0;
        bird.jump(&config);
        assert_eq!(bird.velocity, config.jump_impulse);
        // A second tap from an upward glide still lands on the same impulse.
        bird.jump(&config);
        assert_eq!(bird.velocity, config.jump_impulse);
    }

    #[test]
    fn fall_velocity_saturates_at_cap() {
        let (mut bird, config) = make_bird();
        for _ in 0..600 {
            bird.update(&config, REFERENCE_TICK);
        }
        assert_eq!(bird.velocity, config.max_fall_velocity);
    }

    #[test]
    fn upward_velocity_is_not_clamped() {
        let (mut bird, config) = make_bird();
        bird.jump(&config);
        bird.update(&config, REFERENCE_TICK);
        assert!(bird.velocity < 0.0, "one frame of gravity must not cancel a jump");
    }

    #[test]
    fn zero_dt_is_a_noop() {
        let (mut bird, config) = make_bird();
        bird.velocity = 5.0;
        let y0 = bird.y;
        bird.update(&config, 0.0);
        assert_eq!(bird.y, y0);
        assert_eq!(bird.velocity, 5.0);
    }

    #[test]
    fn reset_recenters_without_touching_x() {
        let (mut bird, config) = make_bird();
        let x0 = bird.x;
        bird.jump(&config);
        bird.update(&config, REFERENCE_TICK);
        bird.reset(&make_screen());
        assert_eq!(bird.x, x0);
        assert_eq!(bird.y, make_screen().center_y());
        assert_eq!(bird.velocity, 0.0);
    }

    #[test]
    fn collision_geometry_is_tighter_than_visual() {
        let (bird, _) = make_bird();
        assert!(bird.geometry().radius < bird.visual_radius);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Velocity never exceeds the cap, whatever dt sequence arrives.
            #[test]
            fn velocity_never_exceeds_cap(dts in proptest::collection::vec(0.0f32..0.2, 1..200)) {
                let (mut bird, config) = make_bird();
                for dt in dts {
                    bird.update(&config, dt);
                    prop_assert!(bird.velocity <= config.max_fall_velocity);
                }
            }

            #[test]
            fn position_stays_finite_under_garbage_dt(
                dts in proptest::collection::vec(
                    prop_oneof![Just(f32::NAN), Just(-1.0f32), Just(f32::INFINITY), 0.0f32..0.1],
                    1..100,
                )
            ) {
                let (mut bird, config) = make_bird();
                for dt in dts {
                    bird.update(&config, dt);
                    prop_assert!(bird.y.is_finite());
                    prop_assert!(bird.velocity.is_finite());
                }
            }
        }
    }
}
