use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use wingbeat_core::collision::{Circle, Rect, circle_rect_overlap};
use wingbeat_core::screen::ScreenConfig;
use wingbeat_core::time::frame_scale;

use crate::config::{DifficultyConfig, SpawnConfig};
use crate::difficulty::{gap_size, global_speed, spacing};

/// A pipe pair: two vertical barriers with a passable gap between
/// `gap_top` and `gap_bottom`, chosen once at spawn time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub width: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
    /// Set once when the bird clears the trailing edge; guards the
    /// pass-through score from firing twice.
    pub passed: bool,
}

impl Obstacle {
    /// The two solid rectangles this obstacle contributes to collision.
    pub fn pipe_rects(&self, screen: &ScreenConfig) -> [Rect; 2] {
        [
            Rect {
                x: self.x,
                y: 0.0,
                width: self.width,
                height: self.gap_top,
            },
            Rect {
                x: self.x,
                y: self.gap_bottom,
                width: self.width,
                height: screen.height - self.gap_bottom,
            },
        ]
    }
}

/// Owns the live obstacle collection: spawning on the difficulty curve's
/// cadence, advancing at the shared global speed, pass-through scoring,
/// and off-screen retirement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleField {
    pub obstacles: Vec<Obstacle>,
    spawn_timer: u32,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.spawn_timer = 0;
    }

    /// Advance the field one tick. Returns the points scored by obstacles
    /// passed this tick (`points_per_pass` each — the session supplies the
    /// multiplier-aware value).
    ///
    /// Slow motion skips whole ticks with 50% probability instead of
    /// scaling per-obstacle speed, so spacing between live obstacles is
    /// preserved while throughput halves.
    #[allow(clippy::too_many_arguments)]
    pub fn tick(
        &mut self,
        dt: f32,
        score: u32,
        slow_motion: bool,
        points_per_pass: u32,
        bird_x: f32,
        screen: &ScreenConfig,
        difficulty: &DifficultyConfig,
        spawn: &SpawnConfig,
        rng: &mut StdRng,
    ) -> u32 {
        if slow_motion && rng.random_bool(0.5) {
            return 0;
        }

        self.spawn_timer += 1;
        if self.spawn_timer >= spacing(score) {
            self.spawn_timer = 0;
            self.spawn_obstacle(score, screen, difficulty, spawn, rng);
        }

        let shift = global_speed(difficulty, score) * frame_scale(dt);
        let mut points = 0;
        for obstacle in &mut self.obstacles {
            obstacle.x -= shift;
            if !obstacle.passed && bird_x > obstacle.x + obstacle.width {
                obstacle.passed = true;
                points += points_per_pass;
            }
        }

        self.obstacles.retain(|o| o.x + o.width >= 0.0);
        points
    }

    fn spawn_obstacle(
        &mut self,
        score: u32,
        screen: &ScreenConfig,
        difficulty: &DifficultyConfig,
        spawn: &SpawnConfig,
        rng: &mut StdRng,
    ) {
        let gap = gap_size(difficulty, score);
        let lo = spawn.vertical_margin;
        let hi = screen.ground_y() - spawn.vertical_margin - gap;

        let (gap_top, gap_bottom) = if hi < lo {
            // Screen too short for the requested gap plus margins: degrade
            // to the feasible maximum rather than fail.
            (lo, (screen.ground_y() - spawn.vertical_margin).max(lo))
        } else {
            let top = rng.random_range(lo..=hi);
            (top, top + gap)
        };

        self.obstacles.push(Obstacle {
            x: screen.width,
            width: spawn.obstacle_width,
            gap_top,
            gap_bottom,
            passed: false,
        });
    }

    /// Whether the bird's collision circle intersects any pipe rectangle.
    pub fn collides(&self, bird: &Circle, screen: &ScreenConfig) -> bool {
        self.obstacles
            .iter()
            .flat_map(|o| o.pipe_rects(screen))
            .any(|rect| circle_rect_overlap(bird, &rect))
    }
}
