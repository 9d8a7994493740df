//! Landing view: translucent circles drifting over the still gradient.

use crate::driver::Effect;
use crate::keyframes::{cycle, mix, triangle};

pub const CIRCLE_COUNT: usize = 5;
/// Diameter of every circle in CSS pixels.
pub const CIRCLE_SIZE: f64 = 128.0;
/// Purple-to-pink at 20% opacity.
pub const CIRCLE_FILL: &str =
    "linear-gradient(to right, rgba(168, 85, 247, 0.2), rgba(236, 72, 153, 0.2))";

/// Anchor of circle `i`, in viewport percent.
pub fn circle_anchor(i: usize) -> (f64, f64) {
    (20.0 + i as f64 * 15.0, 10.0 + i as f64 * 20.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CirclePose {
    /// Vertical offset in pixels, negative is up.
    pub lift: f64,
    pub turn_deg: f64,
}

/// Pose of circle `i` at `time`: y `[0, -20, 0]` and one full turn, both
/// linear over `10 + 2i` seconds.
pub fn circle_pose(i: usize, time: f64) -> CirclePose {
    let period = 10.0 + 2.0 * i as f64;
    CirclePose {
        lift: mix(0.0, -20.0, triangle(time, period)),
        turn_deg: 360.0 * cycle(time, period),
    }
}

pub trait CircleSurface {
    fn place(&mut self, index: usize, pose: CirclePose);
    fn release(&mut self);
}

pub struct HomeDrift<S: CircleSurface> {
    surface: S,
    released: bool,
}

impl<S: CircleSurface> HomeDrift<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            released: false,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: CircleSurface> Effect for HomeDrift<S> {
    fn frame(&mut self, elapsed: f64) {
        if self.released {
            return;
        }
        for i in 0..CIRCLE_COUNT {
            self.surface.place(i, circle_pose(i, elapsed));
        }
    }

    fn teardown(&mut self) {
        if !self.released {
            self.released = true;
            self.surface.release();
        }
    }
}
