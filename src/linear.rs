//! Method 1: oversized CSS linear gradient whose position drifts.

use crate::driver::Effect;
use crate::keyframes::{mix, ping_pong};

pub const BACKGROUND: &str = "linear-gradient(45deg, #ff6b6b, #4ecdc4, #45b7d1)";
pub const BACKGROUND_SIZE: &str = "300% 300%";
/// Seconds for one 0% → 100% → 0% sweep.
pub const SHIFT_PERIOD: f64 = 4.0;

/// Inline style target for DOM-driven effects.
pub trait StyleSurface {
    fn set_style(&mut self, property: &str, value: &str);
    /// Detaches whatever elements the surface created.
    fn release(&mut self);
}

/// Horizontal background position in percent at `elapsed` seconds.
pub fn shift_position(elapsed: f64) -> f64 {
    mix(0.0, 100.0, ping_pong(elapsed, SHIFT_PERIOD))
}

pub struct LinearShift<S: StyleSurface> {
    surface: S,
    released: bool,
}

impl<S: StyleSurface> LinearShift<S> {
    pub fn new(mut surface: S) -> Self {
        surface.set_style("background", BACKGROUND);
        surface.set_style("background-size", BACKGROUND_SIZE);
        surface.set_style("background-position", "0% 50%");
        Self {
            surface,
            released: false,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: StyleSurface> Effect for LinearShift<S> {
    fn frame(&mut self, elapsed: f64) {
        if self.released {
            return;
        }
        let position = format!("{:.2}% 50%", shift_position(elapsed));
        self.surface.set_style("background-position", &position);
    }

    fn teardown(&mut self) {
        if !self.released {
            self.released = true;
            self.surface.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweeps_across_and_back() {
        assert_eq!(shift_position(0.0), 0.0);
        assert_eq!(shift_position(2.0), 100.0);
        assert_eq!(shift_position(4.0), 0.0);
        assert!(shift_position(1.0) > 0.0 && shift_position(1.0) < 100.0);
    }
}
