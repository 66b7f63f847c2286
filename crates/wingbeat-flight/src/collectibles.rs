use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use wingbeat_core::collision::{Circle, circles_overlap, distance};
use wingbeat_core::screen::ScreenConfig;
use wingbeat_core::time::frame_scale;

use crate::config::SpawnConfig;
use crate::powerups::PowerUpKind;

/// Coin denominations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinKind {
    Gold,
    Diamond,
}

impl CoinKind {
    pub fn value(&self) -> u32 {
        match self {
            CoinKind::Gold => 1,
            CoinKind::Diamond => 5,
        }
    }
}

/// What a collectible grants on pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    Coin(CoinKind),
    PowerUp(PowerUpKind),
}

/// A drifting pickup. Both coordinates are mutable: x scrolls left, y bobs
/// on a per-entity sine phase until attraction latches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub x: f32,
    pub y: f32,
    pub kind: CollectibleKind,
    phase: f32,
    /// Latched the first tick the bird comes within attraction range;
    /// from then on the entity moves toward the bird every tick.
    attracted: bool,
}

impl Collectible {
    pub fn new(x: f32, y: f32, kind: CollectibleKind) -> Self {
        Self {
            x,
            y,
            kind,
            phase: 0.0,
            attracted: false,
        }
    }

    pub fn geometry(&self, radius: f32) -> Circle {
        Circle {
            x: self.x,
            y: self.y,
            radius,
        }
    }
}

/// Owns coins and power-up entities: timer-gated spawning, drift and
/// attraction movement, pickup and off-screen removal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectibleField {
    pub items: Vec<Collectible>,
    coin_timer: u32,
    powerup_timer: u32,
    /// Redrawn uniformly from the configured range after each power-up
    /// spawn; 0 means "not drawn yet".
    next_powerup_interval: u32,
}

const POWERUP_ROSTER: [PowerUpKind; 5] = [
    PowerUpKind::Shield,
    PowerUpKind::SlowMotion,
    PowerUpKind::ScoreMultiplier,
    PowerUpKind::Magnet,
    PowerUpKind::ExtraLife,
];

impl CollectibleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.coin_timer = 0;
        self.powerup_timer = 0;
        self.next_powerup_interval = 0;
    }

    /// Advance the field one tick and return what the bird picked up.
    pub fn tick(
        &mut self,
        dt: f32,
        score: u32,
        magnet_active: bool,
        bird: &Circle,
        screen: &ScreenConfig,
        spawn: &SpawnConfig,
        rng: &mut StdRng,
    ) -> Vec<CollectibleKind> {
        self.run_spawners(score, screen, spawn, rng);

        let scale = frame_scale(dt);
        let range = if magnet_active {
            spawn.magnet_attraction_range
        } else {
            spawn.attraction_range
        };
        let (pull_x, pull_y) = if magnet_active {
            (spawn.magnet_pull_x, spawn.magnet_pull_y)
        } else {
            (spawn.pull_x, spawn.pull_y)
        };

        let mut picked = Vec::new();
        self.items.retain_mut(|item| {
            item.x -= spawn.collectible_speed * scale;

            if !item.attracted && distance(item.x, item.y, bird.x, bird.y) < range {
                item.attracted = true;
            }
            if item.attracted {
                // Fraction-of-remaining-distance pull; y stronger than x so
                // the pickup reels in instead of snapping sideways.
                item.x += (bird.x - item.x) * pull_x * scale;
                item.y += (bird.y - item.y) * pull_y * scale;
            } else {
                item.phase += 0.08 * scale;
                item.y += item.phase.sin() * spawn.float_amplitude * scale;
            }

            if circles_overlap(bird, &item.geometry(spawn.collectible_radius)) {
                picked.push(item.kind);
                return false;
            }
            item.x + spawn.collectible_radius * 2.0 >= 0.0
        });
        picked
    }

    fn run_spawners(
        &mut self,
        score: u32,
        screen: &ScreenConfig,
        spawn: &SpawnConfig,
        rng: &mut StdRng,
    ) {
        if score >= spawn.coin_score_gate {
            self.coin_timer += 1;
            if self.coin_timer >= spawn.coin_interval {
                self.coin_timer = 0;
                self.spawn_coins(screen, spawn, rng);
            }
        }

        if score >= spawn.powerup_score_gate {
            if self.next_powerup_interval == 0 {
                self.next_powerup_interval =
                    rng.random_range(spawn.powerup_interval_min..=spawn.powerup_interval_max);
            }
            self.powerup_timer += 1;
            if self.powerup_timer >= self.next_powerup_interval {
                self.powerup_timer = 0;
                self.next_powerup_interval =
                    rng.random_range(spawn.powerup_interval_min..=spawn.powerup_interval_max);
                self.spawn_powerup(screen, spawn, rng);
            }
        }
    }

    fn spawn_y(&self, screen: &ScreenConfig, spawn: &SpawnConfig, rng: &mut StdRng) -> f32 {
        let lo = spawn.vertical_margin;
        let hi = (screen.ground_y() - spawn.vertical_margin).max(lo);
        rng.random_range(lo..=hi)
    }

    fn spawn_coins(&mut self, screen: &ScreenConfig, spawn: &SpawnConfig, rng: &mut StdRng) {
        if rng.random_bool(spawn.chain_probability) {
            let len = rng.random_range(spawn.chain_len_min..=spawn.chain_len_max);
            let base_y = self.spawn_y(screen, spawn, rng);
            for i in 0..len {
                let wave = (i as f32 * spawn.chain_wave_step).sin() * spawn.chain_wave_amplitude;
                let kind = if rng.random_bool(spawn.diamond_probability_chain) {
                    CoinKind::Diamond
                } else {
                    CoinKind::Gold
                };
                self.push_item(
                    screen.width + i as f32 * spawn.chain_spacing,
                    base_y + wave,
                    CollectibleKind::Coin(kind),
                    rng,
                );
            }
        } else {
            let kind = if rng.random_bool(spawn.diamond_probability_single) {
                CoinKind::Diamond
            } else {
                CoinKind::Gold
            };
            let y = self.spawn_y(screen, spawn, rng);
            self.push_item(screen.width, y, CollectibleKind::Coin(kind), rng);
        }
    }

    fn spawn_powerup(&mut self, screen: &ScreenConfig, spawn: &SpawnConfig, rng: &mut StdRng) {
        let kind = POWERUP_ROSTER[rng.random_range(0..POWERUP_ROSTER.len())];
        let y = self.spawn_y(screen, spawn, rng);
        self.push_item(screen.width, y, CollectibleKind::PowerUp(kind), rng);
    }

    fn push_item(&mut self, x: f32, y: f32, kind: CollectibleKind, rng: &mut StdRng) {
        let mut item = Collectible::new(x, y, kind);
        item.phase = rng.random_range(0.0..std::f32::consts::TAU);
        self.items.push(item);
    }
}
