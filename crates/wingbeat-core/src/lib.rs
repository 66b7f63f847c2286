pub mod collision;
pub mod effect;
pub mod screen;
pub mod store;
pub mod time;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::screen::ScreenConfig;
    use crate::store::MemoryLivesStore;

    /// Portrait phone surface used throughout the test suites.
    pub fn make_screen() -> ScreenConfig {
        ScreenConfig::new(1080.0, 1920.0, 120.0)
    }

    /// In-memory store with the given starting lives (`max_lives` matches).
    pub fn make_store(lives: i32) -> MemoryLivesStore {
        MemoryLivesStore::new(lives)
    }
}
