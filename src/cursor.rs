use glam::DVec2;

/// Default lag constant for pointer following.
pub const SMOOTHING: f64 = 20.0;

/// Smoothed pointer-follow position.
///
/// Pointer events only ever write `target`; each frame moves `current` a
/// fixed fraction of the remaining distance. With `k >= 1` this is a
/// first-order low-pass filter and cannot overshoot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorState {
    pub current: DVec2,
    pub target: DVec2,
    k: f64,
}

impl CursorState {
    pub fn new(k: f64) -> Self {
        Self {
            current: DVec2::ZERO,
            target: DVec2::ZERO,
            k: k.max(1.0),
        }
    }

    pub fn smoothing(&self) -> f64 {
        self.k
    }

    pub fn aim(&mut self, x: f64, y: f64) {
        self.target = DVec2::new(x, y);
    }

    /// One frame of `current += (target - current) / k`, per axis.
    pub fn step(&mut self) -> DVec2 {
        self.current += (self.target - self.current) / self.k;
        self.current
    }
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new(SMOOTHING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aiming_leaves_current_alone() {
        let mut cursor = CursorState::default();
        cursor.aim(40.0, -20.0);
        assert_eq!(cursor.current, DVec2::ZERO);
        assert_eq!(cursor.step(), DVec2::new(2.0, -1.0));
    }

    #[test]
    fn k_of_one_jumps() {
        let mut cursor = CursorState::new(1.0);
        cursor.aim(7.0, 9.0);
        assert_eq!(cursor.step(), DVec2::new(7.0, 9.0));
    }

    #[test]
    fn sub_unit_k_is_clamped() {
        assert_eq!(CursorState::new(0.25).smoothing(), 1.0);
    }

    #[test]
    fn converges_without_overshoot() {
        let mut cursor = CursorState::default();
        cursor.aim(-300.0, 512.0);
        let mut last = cursor.current;
        for _ in 0..1000 {
            let now = cursor.step();
            assert!(now.x <= last.x && now.x >= -300.0);
            assert!(now.y >= last.y && now.y <= 512.0);
            last = now;
        }
        assert!((last - cursor.target).length() < 1e-6);
    }
}
