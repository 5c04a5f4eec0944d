use serde::{Deserialize, Serialize};

/// Scale applied to terminal cells when nothing is configured.
///
/// Layout constants are authored for a pixel surface; one terminal cell is
/// roughly twenty of those units.
pub const DEFAULT_TERMINAL_SCALE: f32 = 0.05;

/// Accepted scale range; keeps every authored distance well inside `i32`.
pub const MIN_SCALE: f32 = 0.01;
pub const MAX_SCALE: f32 = 16.0;

/// Converts authored layout units into surface units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    pub scale: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl LayoutMetrics {
    /// Non-finite or non-positive scales fall back to 1.0; others are
    /// clamped to [`MIN_SCALE`]..=[`MAX_SCALE`].
    pub fn new(scale: f32) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale.clamp(MIN_SCALE, MAX_SCALE)
        } else {
            1.0
        };
        Self { scale }
    }

    pub fn terminal() -> Self {
        Self::new(DEFAULT_TERMINAL_SCALE)
    }

    pub fn px(&self, units: i32) -> i32 {
        (units as f32 * self.scale).round() as i32
    }
}
