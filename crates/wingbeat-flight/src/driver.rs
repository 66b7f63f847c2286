use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use wingbeat_core::store::LivesStore;
use wingbeat_core::time::TickPacer;

use crate::events::SessionEvent;
use crate::{FlightSession, SessionSnapshot};

/// Wall-clock driver around a session for hosts with their own frame loop.
///
/// `step()` measures the elapsed time since the previous step and feeds it
/// to the session; pausing drops frames on the floor, so the pacer resets
/// its baseline on resume and no catch-up burst ever reaches the physics.
/// Ticks and snapshot reads serialize on the same lock, so a snapshot never
/// observes a half-applied tick.
pub struct SessionDriver<S: LivesStore> {
    session: Mutex<FlightSession<S>>,
    pacer: Mutex<TickPacer>,
    paused: AtomicBool,
}

impl<S: LivesStore> SessionDriver<S> {
    pub fn new(session: FlightSession<S>) -> Self {
        Self {
            session: Mutex::new(session),
            pacer: Mutex::new(TickPacer::new()),
            paused: AtomicBool::new(false),
        }
    }

    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
        // Discard the time spent paused.
        lock(&self.pacer).reset();
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    /// Run one tick with the measured frame delta. A paused driver does
    /// nothing and returns no events.
    pub fn step(&self, jump_requested: bool) -> Vec<SessionEvent> {
        if self.is_paused() {
            return Vec::new();
        }
        let dt = lock(&self.pacer).next_dt();
        lock(&self.session).tick(dt, jump_requested)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        lock(&self.session).snapshot()
    }

    /// Direct access for restart/surface-change calls from the host.
    pub fn with_session<R>(&self, f: impl FnOnce(&mut FlightSession<S>) -> R) -> R {
        f(&mut lock(&self.session))
    }
}

// The session holds no invariant that a panicked tick could leave
// half-open across the lock, so a poisoned mutex is still usable.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlightConfig;
    use wingbeat_core::store::MemoryLivesStore;
    use wingbeat_core::test_helpers::{make_screen, make_store};

    fn make_driver() -> SessionDriver<MemoryLivesStore> {
        let session =
            FlightSession::with_seed(FlightConfig::default(), make_screen(), make_store(3), 42);
        SessionDriver::new(session)
    }

    #[test]
    fn step_advances_the_session() {
        let driver = make_driver();
        let y0 = driver.snapshot().bird.y;
        std::thread::sleep(std::time::Duration::from_millis(5));
        driver.step(false);
        assert!(driver.snapshot().bird.y > y0, "gravity must act on a step");
    }

    #[test]
    fn paused_step_is_a_noop() {
        let driver = make_driver();
        driver.pause();
        assert!(driver.is_paused());
        std::thread::sleep(std::time::Duration::from_millis(5));
        let before = driver.snapshot().bird.y;
        assert!(driver.step(true).is_empty());
        assert_eq!(driver.snapshot().bird.y, before);
    }

    #[test]
    fn resume_discards_paused_time() {
        let driver = make_driver();
        driver.pause();
        std::thread::sleep(std::time::Duration::from_millis(30));
        driver.resume();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let y0 = driver.snapshot().bird.y;
        driver.step(false);
        let moved = driver.snapshot().bird.y - y0;
        // Far less than 30 ms of fall: the paused span never reached physics.
        let worst_case = crate::config::MAX_FALL_VELOCITY * 2.0;
        assert!(moved < worst_case, "moved {moved}");
    }

    #[test]
    fn with_session_allows_restart() {
        let driver = make_driver();
        std::thread::sleep(std::time::Duration::from_millis(5));
        driver.step(false);
        driver.with_session(|s| s.restart());
        assert_eq!(driver.snapshot().score, 0);
        assert_eq!(driver.snapshot().bird.velocity, 0.0);
    }
}
