/// Monotonic per-mount clock.
///
/// Timestamps come from the refresh scheduler (milliseconds on the same
/// origin as `performance.now()`); elapsed time is reported in seconds from
/// the moment the effect was mounted, never from the epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MountClock {
    origin_ms: f64,
    last: f64,
}

impl MountClock {
    pub fn starting_at(origin_ms: f64) -> Self {
        Self {
            origin_ms,
            last: 0.0,
        }
    }

    /// Seconds since mount. Never negative and never decreasing, even when
    /// the first frame timestamp predates the mount call.
    pub fn elapsed(&mut self, now_ms: f64) -> f64 {
        let secs = (now_ms - self.origin_ms) / 1000.0;
        if secs.is_finite() && secs > self.last {
            self.last = secs;
        }
        self.last
    }
}

impl Default for MountClock {
    fn default() -> Self {
        Self::starting_at(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_regardless_of_origin() {
        let mut clock = MountClock::starting_at(1.7e12);
        assert_eq!(clock.elapsed(1.7e12), 0.0);
        assert!((clock.elapsed(1.7e12 + 1500.0) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn frame_timestamp_before_mount_clamps_to_zero() {
        let mut clock = MountClock::starting_at(1000.0);
        assert_eq!(clock.elapsed(990.0), 0.0);
    }

    #[test]
    fn never_runs_backwards() {
        let mut clock = MountClock::starting_at(0.0);
        assert_eq!(clock.elapsed(2000.0), 2.0);
        assert_eq!(clock.elapsed(1000.0), 2.0);
        assert_eq!(clock.elapsed(f64::NAN), 2.0);
    }
}
