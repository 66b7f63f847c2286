use std::time::Instant;

/// Reference simulation tick (60 Hz). Physics constants are tuned per
/// reference frame; `frame_scale` converts a wall-clock dt into frames.
pub const REFERENCE_TICK: f32 = 1.0 / 60.0;

/// Largest dt a single tick may consume. A stall (backgrounded app,
/// debugger pause) otherwise arrives as one huge step and launches the
/// bird through geometry.
pub const MAX_FRAME_DT: f32 = 0.05;

/// Sanitize a driver-supplied delta-time: NaN and negative values become
/// a no-op tick, oversized steps are capped at `MAX_FRAME_DT`.
pub fn sanitize_dt(dt: f32) -> f32 {
    if !dt.is_finite() || dt < 0.0 {
        return 0.0;
    }
    dt.min(MAX_FRAME_DT)
}

/// dt expressed in reference frames (1.0 at exactly 60 Hz).
pub fn frame_scale(dt: f32) -> f32 {
    sanitize_dt(dt) / REFERENCE_TICK
}

/// Supplies bounded delta-times to the driver thread.
pub struct TickPacer {
    last: Instant,
}

impl TickPacer {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Elapsed time since the previous call, sanitized. The internal clock
    /// always advances, so a capped tick does not carry debt forward.
    pub fn next_dt(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        sanitize_dt(dt)
    }

    /// Restart the clock from now, e.g. after unpausing, so the idle span
    /// never reaches the simulation.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }
}

impl Default for TickPacer {
    fn default() -> Self {
        Self::new()
    }
}
