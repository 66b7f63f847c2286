use serde::{Deserialize, Serialize};

/// Gravity per reference frame (positive = downward, screen coordinates).
pub const GRAVITY: f32 = 0.55;
/// Jump impulse: velocity is set to this, it never accumulates.
pub const JUMP_IMPULSE: f32 = -13.0;
/// Cap on downward velocity. Upward velocity is the fixed impulse.
pub const MAX_FALL_VELOCITY: f32 = 16.0;
/// Tight collision radius, for fairness.
pub const COLLISION_RADIUS: f32 = 36.0;
/// Larger radius the renderer draws at.
pub const VISUAL_RADIUS: f32 = 44.0;
/// Bird's fixed horizontal position as a fraction of screen width.
pub const BIRD_X_FRACTION: f32 = 0.28;

/// Bird physics parameters, per 60 Hz reference frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BirdConfig {
    pub gravity: f32,
    pub jump_impulse: f32,
    pub max_fall_velocity: f32,
    pub collision_radius: f32,
    pub visual_radius: f32,
    pub x_fraction: f32,
}

impl Default for BirdConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            max_fall_velocity: MAX_FALL_VELOCITY,
            collision_radius: COLLISION_RADIUS,
            visual_radius: VISUAL_RADIUS,
            x_fraction: BIRD_X_FRACTION,
        }
    }
}

/// Score-driven difficulty curve parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    /// Gap height at score 0.
    pub base_gap: f32,
    /// Gap height floor; the linear decay never goes below this.
    pub min_gap: f32,
    /// Gap shrink per score interval.
    pub gap_reduction: f32,
    /// Score points per difficulty step.
    pub score_interval: u32,
    /// Scroll speed at score 0, px per reference frame.
    pub base_speed: f32,
    /// Speed gain per score interval.
    pub speed_increase: f32,
    /// Scroll speed ceiling.
    pub max_speed: f32,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            base_gap: 520.0,
            min_gap: 320.0,
            gap_reduction: 12.0,
            score_interval: 10,
            base_speed: 7.0,
            speed_increase: 0.45,
            max_speed: 13.0,
        }
    }
}

/// Obstacle and collectible spawning parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub obstacle_width: f32,
    /// Minimum distance between a gap edge and the ceiling / ground.
    pub vertical_margin: f32,
    /// Score required before coins start spawning.
    pub coin_score_gate: u32,
    /// Score required before power-ups start spawning.
    pub powerup_score_gate: u32,
    /// Fixed coin spawn interval, in ticks.
    pub coin_interval: u32,
    /// Power-up interval is redrawn uniformly in this range after each spawn.
    pub powerup_interval_min: u32,
    pub powerup_interval_max: u32,
    /// Probability a coin spawn produces a chain instead of a single coin.
    pub chain_probability: f64,
    pub chain_len_min: u32,
    pub chain_len_max: u32,
    /// Horizontal spacing between chained coins.
    pub chain_spacing: f32,
    /// Sine-wave layout of a chain: vertical amplitude and phase step per coin.
    pub chain_wave_amplitude: f32,
    pub chain_wave_step: f32,
    pub diamond_probability_single: f64,
    pub diamond_probability_chain: f64,
    /// Leftward collectible scroll speed, px per reference frame.
    pub collectible_speed: f32,
    pub collectible_radius: f32,
    /// Idle vertical bob, px per reference frame at sine peak.
    pub float_amplitude: f32,
    pub attraction_range: f32,
    pub magnet_attraction_range: f32,
    /// Per-frame pull toward the bird, as a fraction of remaining distance.
    /// y pulls harder than x so pickups feel reeled in, not teleported.
    pub pull_x: f32,
    pub pull_y: f32,
    pub magnet_pull_x: f32,
    pub magnet_pull_y: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            obstacle_width: 160.0,
            vertical_margin: 80.0,
            coin_score_gate: 5,
            powerup_score_gate: 10,
            coin_interval: 240,
            powerup_interval_min: 540,
            powerup_interval_max: 900,
            chain_probability: 0.35,
            chain_len_min: 3,
            chain_len_max: 6,
            chain_spacing: 96.0,
            chain_wave_amplitude: 60.0,
            chain_wave_step: 0.9,
            diamond_probability_single: 0.15,
            diamond_probability_chain: 0.05,
            collectible_speed: 6.0,
            collectible_radius: 30.0,
            float_amplitude: 0.35,
            attraction_range: 140.0,
            magnet_attraction_range: 320.0,
            pull_x: 0.18,
            pull_y: 0.35,
            magnet_pull_x: 0.30,
            magnet_pull_y: 0.55,
        }
    }
}

/// Timed power-up durations (ticks) and scoring bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerUpConfig {
    pub shield_ticks: u32,
    pub slow_motion_ticks: u32,
    pub multiplier_ticks: u32,
    pub magnet_ticks: u32,
    /// Points per passed obstacle while the multiplier is active (base is 1).
    pub multiplier_points: u32,
}

impl Default for PowerUpConfig {
    fn default() -> Self {
        Self {
            shield_ticks: 600,
            slow_motion_ticks: 480,
            multiplier_ticks: 600,
            magnet_ticks: 540,
            multiplier_points: 2,
        }
    }
}

/// Top-level gameplay configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub bird: BirdConfig,
    pub difficulty: DifficultyConfig,
    pub spawn: SpawnConfig,
    pub powerups: PowerUpConfig,
    pub run: RunConfig,
}

/// Cross-cutting per-run timers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Post-collision grace window, in ticks. No collision is evaluated
    /// while it is open.
    pub invulnerability_ticks: u32,
    /// Cosmetic score-popup lifetime, in ticks.
    pub score_popup_ticks: u32,
    /// Cosmetic notification banner lifetime, in ticks.
    pub notification_ticks: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            invulnerability_ticks: 120,
            score_popup_ticks: 45,
            notification_ticks: 90,
        }
    }
}

impl FlightConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("WINGBEAT_CONFIG")
            .unwrap_or_else(|_| "config/wingbeat.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<FlightConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    FlightConfig::default()
                },
            },
            Err(_) => FlightConfig::default(),
        }
    }
}
