use serde::{Deserialize, Serialize};

/// Surface geometry the gameplay core is parameterized by.
///
/// Supplied once per surface-change event. All spawn and bounds math is
/// relative to these values; nothing in the core hard-codes a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Surface width in logical pixels.
    pub width: f32,
    /// Surface height in logical pixels.
    pub height: f32,
    /// Height of the ground strip at the bottom of the surface.
    pub ground_height: f32,
}

impl ScreenConfig {
    pub fn new(width: f32, height: f32, ground_height: f32) -> Self {
        Self {
            width,
            height,
            ground_height,
        }
    }

    /// Y of the ground surface (top edge of the ground strip).
    pub fn ground_y(&self) -> f32 {
        self.height - self.ground_height
    }

    /// Vertical center of the playable area, used as the bird spawn point.
    pub fn center_y(&self) -> f32 {
        self.ground_y() / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_y_excludes_ground_strip() {
        let screen = ScreenConfig::new(1080.0, 1920.0, 120.0);
        assert_eq!(screen.ground_y(), 1800.0);
    }

    #[test]
    fn center_is_middle_of_playable_area() {
        let screen = ScreenConfig::new(1080.0, 1920.0, 120.0);
        assert_eq!(screen.center_y(), 900.0);
    }
}
