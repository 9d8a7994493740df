//! Method 2: layered radial-gradient blobs and a pointer-following blob.

use glam::DVec2;

use crate::cursor::CursorState;
use crate::driver::Effect;
use crate::input::{EventKind, InputEvent};
use crate::keyframes::{mix, ping_pong};

/// Static base layer under the floating blobs.
pub const BASE_LAYER: &str = "radial-gradient(circle at 20% 80%, #ff6b6b, transparent), \
     radial-gradient(circle at 80% 20%, #4ecdc4, transparent), \
     radial-gradient(circle at 40% 40%, #45b7d1, transparent), #1a1a2e";

pub const BLOB_COLORS: [&str; 3] = ["#ff6b6b", "#4ecdc4", "#45b7d1"];
/// Diameter of every blob in CSS pixels.
pub const BLOB_SIZE: f64 = 256.0;

/// Anchor of floating blob `i`, in viewport percent.
pub fn anchor(i: usize) -> (f64, f64) {
    (20.0 + i as f64 * 30.0, 20.0 + i as f64 * 20.0)
}

/// Offset and scale of a floating blob.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobPose {
    pub offset: DVec2,
    pub scale: f64,
}

/// Pose of floating blob `i` at `time`: x `[0, 100, 0]`, y `[0, -50, 0]`,
/// scale `[1, 1.2, 1]` over `8 + 2i` seconds.
pub fn float_pose(i: usize, time: f64) -> BlobPose {
    let k = ping_pong(time, 8.0 + 2.0 * i as f64);
    BlobPose {
        offset: DVec2::new(mix(0.0, 100.0, k), mix(0.0, -50.0, k)),
        scale: mix(1.0, 1.2, k),
    }
}

/// Where blob elements live.
pub trait BlobSurface {
    fn place(&mut self, index: usize, pose: BlobPose);
    /// Centers the follower blob on `position` (viewport pixels).
    fn follow(&mut self, position: DVec2);
    fn release(&mut self);
}

pub struct BlobField<S: BlobSurface> {
    surface: S,
    cursor: CursorState,
    released: bool,
}

impl<S: BlobSurface> BlobField<S> {
    pub fn new(surface: S, smoothing: f64) -> Self {
        Self {
            surface,
            cursor: CursorState::new(smoothing),
            released: false,
        }
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: BlobSurface> Effect for BlobField<S> {
    fn frame(&mut self, elapsed: f64) {
        if self.released {
            return;
        }
        for i in 0..BLOB_COLORS.len() {
            self.surface.place(i, float_pose(i, elapsed));
        }
        let position = self.cursor.step();
        self.surface.follow(position);
    }

    fn listens(&self) -> &'static [EventKind] {
        &[EventKind::PointerMove]
    }

    fn input(&mut self, event: &InputEvent) {
        if let InputEvent::PointerMove { x, y } = *event {
            self.cursor.aim(x, y);
        }
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
    fn blobs_rest_at_their_anchor_then_drift() {
        let start = float_pose(0, 0.0);
        assert_eq!(start.offset, DVec2::ZERO);
        assert_eq!(start.scale, 1.0);

        let peak = float_pose(0, 4.0);
        assert_eq!(peak.offset, DVec2::new(100.0, -50.0));
        assert!((peak.scale - 1.2).abs() < 1e-12);
    }

    #[test]
    fn later_blobs_move_slower() {
        // Blob 2 has a 12 s cycle, so at 4 s it is a third of the way.
        let pose = float_pose(2, 4.0);
        assert!(pose.offset.x > 0.0 && pose.offset.x < 100.0);
    }

    #[test]
    fn anchors_step_across_the_page() {
        assert_eq!(anchor(0), (20.0, 20.0));
        assert_eq!(anchor(2), (80.0, 60.0));
    }
}
