use serde::Deserialize;

use crate::cursor::SMOOTHING;
use crate::scene::SHAPES;

/// Page-level tuning, read from the `showcase-config` JSON block in
/// `index.html`. Every field is optional.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub log_level: String,
    /// Pointer-follow lag constant `K`.
    pub smoothing: f64,
    /// How many entries of the shape table to render.
    pub shape_count: usize,
    /// Canvas grain amplitude in byte units.
    pub grain: f64,
    /// Blur radius over the 3D shapes, in CSS pixels.
    pub blur_px: f64,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            smoothing: SMOOTHING,
            shape_count: SHAPES.len(),
            grain: 30.0,
            blur_px: 60.0,
        }
    }
}

impl ShowcaseConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(text).map(Self::validated)
    }

    /// Clamps out-of-range values, logging each one.
    pub fn validated(mut self) -> Self {
        if !(self.smoothing >= 1.0) {
            log::warn!("smoothing {} below 1 would overshoot; using 1", self.smoothing);
            self.smoothing = 1.0;
        }
        if self.shape_count == 0 || self.shape_count > SHAPES.len() {
            let clamped = self.shape_count.clamp(1, SHAPES.len());
            log::warn!("shape_count {} out of range; using {}", self.shape_count, clamped);
            self.shape_count = clamped;
        }
        if !(0.0..=255.0).contains(&self.grain) {
            let clamped = if self.grain > 255.0 { 255.0 } else { 0.0 };
            log::warn!("grain {} out of range; using {}", self.grain, clamped);
            self.grain = clamped;
        }
        if !(self.blur_px >= 0.0) {
            log::warn!("blur_px {} is negative; using 0", self.blur_px);
            self.blur_px = 0.0;
        }
        self
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
