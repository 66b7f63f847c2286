pub mod bird;
pub mod collectibles;
pub mod config;
pub mod difficulty;
pub mod driver;
pub mod events;
pub mod lives;
pub mod obstacles;
pub mod powerups;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use wingbeat_core::effect::EffectTimer;
use wingbeat_core::screen::ScreenConfig;
use wingbeat_core::store::LivesStore;
use wingbeat_core::time::sanitize_dt;

use bird::Bird;
use collectibles::{CollectibleField, CollectibleKind};
use config::FlightConfig;
use events::SessionEvent;
use lives::{LifeLoss, LivesController};
use obstacles::ObstacleField;
use powerups::{PowerUpKind, PowerUpState};

/// One gameplay session: composes the bird, fields, power-up state, and
/// lives controller into a single `tick(dt, jump_requested)` call.
///
/// The session is synchronous and single-threaded; the driver is expected
/// to serialize ticks against render-snapshot reads (see `driver`).
/// Pausing is modeled as simply not calling `tick`.
pub struct FlightSession<S: LivesStore> {
    config: FlightConfig,
    screen: ScreenConfig,
    store: S,
    bird: Bird,
    obstacles: ObstacleField,
    collectibles: CollectibleField,
    powerups: PowerUpState,
    lives: LivesController,
    /// Current-run score; resets each attempt.
    score: u32,
    /// Accumulates every attempt's score within one game.
    total_score: u32,
    /// Frozen at true game over.
    final_score: Option<u32>,
    score_popup: EffectTimer,
    notification: EffectTimer,
    rng: StdRng,
}

impl<S: LivesStore> FlightSession<S> {
    pub fn new(config: FlightConfig, screen: ScreenConfig, store: S) -> Self {
        Self::with_seed(config, screen, store, rand::random())
    }

    /// Deterministic session for tests and replays.
    pub fn with_seed(config: FlightConfig, screen: ScreenConfig, store: S, seed: u64) -> Self {
        let bird = Bird::new(&config.bird, &screen);
        Self {
            config,
            screen,
            store,
            bird,
            obstacles: ObstacleField::new(),
            collectibles: CollectibleField::new(),
            powerups: PowerUpState::new(),
            lives: LivesController::new(),
            score: 0,
            total_score: 0,
            final_score: None,
            score_popup: EffectTimer::new(),
            notification: EffectTimer::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// Order per tick: input → bird physics → obstacles (scoring) →
    /// collectibles (pickups) → power-up decay → collision resolution →
    /// cosmetic timers. Returns the event batch for the render/audio/
    /// analytics collaborators; after game over the session is a no-op.
    pub fn tick(&mut self, dt: f32, jump_requested: bool) -> Vec<SessionEvent> {
        if self.lives.is_game_over() {
            return Vec::new();
        }
        let dt = sanitize_dt(dt);
        if dt == 0.0 {
            // Corrupt or zero delta: a no-op tick, nothing advances.
            return Vec::new();
        }

        let mut events = Vec::new();

        if jump_requested {
            self.bird.jump(&self.config.bird);
        }
        self.bird.update(&self.config.bird, dt);

        let points_per_pass = if self.powerups.multiplier_active() {
            self.config.powerups.multiplier_points
        } else {
            1
        };
        let points = self.obstacles.tick(
            dt,
            self.score,
            self.powerups.slow_motion_active(),
            points_per_pass,
            self.bird.x,
            &self.screen,
            &self.config.difficulty,
            &self.config.spawn,
            &mut self.rng,
        );
        if points > 0 {
            self.score += points;
            self.score_popup.set(self.config.run.score_popup_ticks);
            events.push(SessionEvent::Scored {
                points,
                score: self.score,
            });
        }

        let pickups = self.collectibles.tick(
            dt,
            self.score,
            self.powerups.magnet_active(),
            &self.bird.geometry(),
            &self.screen,
            &self.config.spawn,
            &mut self.rng,
        );
        for pickup in pickups {
            self.apply_pickup(pickup, &mut events);
        }

        self.powerups.decay();

        self.lives.tick();
        self.resolve_collisions(&mut events);

        self.score_popup.tick();
        self.notification.tick();

        events
    }

    fn apply_pickup(&mut self, pickup: CollectibleKind, events: &mut Vec<SessionEvent>) {
        match pickup {
            CollectibleKind::Coin(kind) => {
                self.store.update_coins(kind.value());
                events.push(SessionEvent::CoinCollected {
                    kind,
                    value: kind.value(),
                });
            },
            CollectibleKind::PowerUp(PowerUpKind::ExtraLife) => {
                if self.store.lives() < self.store.max_lives() {
                    let lives = self.store.lives();
                    self.store.set_lives(lives + 1);
                    events.push(SessionEvent::PowerUpActivated {
                        kind: PowerUpKind::ExtraLife,
                    });
                } else {
                    self.store.add_saved_extra_life();
                    events.push(SessionEvent::ExtraLifeBanked);
                }
                self.notification.set(self.config.run.notification_ticks);
            },
            CollectibleKind::PowerUp(kind) => {
                self.powerups.activate(kind, &self.config.powerups);
                self.notification.set(self.config.run.notification_ticks);
                events.push(SessionEvent::PowerUpActivated { kind });
            },
        }
    }

    fn resolve_collisions(&mut self, events: &mut Vec<SessionEvent>) {
        // Checks are skipped entirely while the grace window is open, and
        // the shield absorbs everything for its duration.
        if self.lives.invulnerable() || self.powerups.shield_active() {
            return;
        }

        let body = self.bird.geometry();
        let hit_ground = body.y + body.radius >= self.screen.ground_y();
        let hit_ceiling = body.y - body.radius <= 0.0;
        let hit_obstacle = self.obstacles.collides(&body, &self.screen);
        if !(hit_ground || hit_ceiling || hit_obstacle) {
            return;
        }

        match self
            .lives
            .lose_life(&mut self.store, self.config.run.invulnerability_ticks)
        {
            LifeLoss::Continued {
                remaining,
                saved_life_used,
            } => {
                // Continue with the board intact: obstacles, collectibles,
                // and spawn timers all survive. Only the bird, the active
                // effects, and the run score start over.
                self.bird.reset(&self.screen);
                self.powerups.reset();
                self.total_score += self.score;
                self.score = 0;
                self.notification.set(self.config.run.notification_ticks);
                events.push(SessionEvent::LifeLost {
                    remaining,
                    saved_life_used,
                });
            },
            LifeLoss::GameOver => {
                self.total_score += self.score;
                self.score = 0;
                let final_score = self.total_score;
                self.final_score = Some(final_score);
                self.store.update_best_score(final_score);
                tracing::info!(final_score, "game over");
                events.push(SessionEvent::GameOver { final_score });
            },
            LifeLoss::Ignored => {},
        }
    }

    /// Full restart: clears the board and all scores, unlike the
    /// continue-with-remaining-lives path. The life count itself lives in
    /// the store and is replenished by the external economy, not here.
    pub fn restart(&mut self) {
        self.obstacles.clear();
        self.collectibles.clear();
        self.powerups.reset();
        self.lives.reset();
        self.bird.reset(&self.screen);
        self.score = 0;
        self.total_score = 0;
        self.final_score = None;
        self.score_popup.clear();
        self.notification.clear();
    }

    /// Re-parameterize for a new surface size. Keeps the bird's vertical
    /// state; its fixed x follows the new width.
    pub fn surface_changed(&mut self, screen: ScreenConfig) {
        self.screen = screen;
        self.bird.x = screen.width * self.config.bird.x_fraction;
    }

    /// Consistent read-only view for the render collaborator. Lives are
    /// read fresh from the store on every call, never cached.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            bird: BirdView {
                x: self.bird.x,
                y: self.bird.y,
                velocity: self.bird.velocity,
                visual_radius: self.bird.visual_radius,
            },
            obstacles: self
                .obstacles
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.x,
                    width: o.width,
                    gap_top: o.gap_top,
                    gap_bottom: o.gap_bottom,
                })
                .collect(),
            collectibles: self
                .collectibles
                .items
                .iter()
                .map(|c| CollectibleView {
                    x: c.x,
                    y: c.y,
                    kind: c.kind,
                })
                .collect(),
            shield_active: self.powerups.shield_active(),
            slow_motion_active: self.powerups.slow_motion_active(),
            multiplier_active: self.powerups.multiplier_active(),
            magnet_active: self.powerups.magnet_active(),
            score: self.score,
            total_score: self.total_score,
            final_score: self.final_score,
            lives: self.store.lives(),
            invulnerable: self.lives.invulnerable(),
            score_popup_visible: self.score_popup.is_active(),
            notification_visible: self.notification.is_active(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.lives.is_game_over()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

/// Render-facing view of the bird.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BirdView {
    pub x: f32,
    pub y: f32,
    pub velocity: f32,
    pub visual_radius: f32,
}

/// Render-facing view of an obstacle.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ObstacleView {
    pub x: f32,
    pub width: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
}

/// Render-facing view of a collectible.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CollectibleView {
    pub x: f32,
    pub y: f32,
    pub kind: CollectibleKind,
}

/// One tick's worth of render state.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub bird: BirdView,
    pub obstacles: Vec<ObstacleView>,
    pub collectibles: Vec<CollectibleView>,
    pub shield_active: bool,
    pub slow_motion_active: bool,
    pub multiplier_active: bool,
    pub magnet_active: bool,
    pub score: u32,
    pub total_score: u32,
    pub final_score: Option<u32>,
    pub lives: i32,
    pub invulnerable: bool,
    pub score_popup_visible: bool,
    pub notification_visible: bool,
}
