/// Smoothstep easing on `[0, 1]`, close to CSS `ease-in-out`.
pub fn ease_in_out(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    p * p * (3.0 - 2.0 * p)
}

/// Fraction of the current `period`-second cycle, in `[0, 1)`.
pub fn cycle(time: f64, period: f64) -> f64 {
    if period <= 0.0 || !time.is_finite() {
        return 0.0;
    }
    time.rem_euclid(period) / period
}

/// Linear `0 → 1 → 0` cycle of `period` seconds.
pub fn triangle(time: f64, period: f64) -> f64 {
    let p = cycle(time, period);
    if p < 0.5 {
        p * 2.0
    } else {
        (1.0 - p) * 2.0
    }
}

/// Eased `0 → 1 → 0` cycle of `period` seconds, for `[from, to, from]`
/// keyframe tracks.
pub fn ping_pong(time: f64, period: f64) -> f64 {
    ease_in_out(triangle(time, period))
}

/// Linear blend between two keyframe values.
pub fn mix(from: f64, to: f64, amount: f64) -> f64 {
    from + (to - from) * amount
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_its_ends() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(7.0), 1.0);
    }

    #[test]
    fn ping_pong_peaks_mid_cycle_and_repeats() {
        assert_eq!(ping_pong(0.0, 4.0), 0.0);
        assert_eq!(ping_pong(2.0, 4.0), 1.0);
        assert_eq!(ping_pong(4.0, 4.0), 0.0);
        assert_eq!(ping_pong(1.0, 4.0), ping_pong(9.0, 4.0));
        assert_eq!(ping_pong(1.0, 4.0), ping_pong(3.0, 4.0));
    }

    #[test]
    fn triangle_is_linear_between_turns() {
        assert_eq!(triangle(1.0, 4.0), 0.5);
        assert_eq!(triangle(2.0, 4.0), 1.0);
        assert_eq!(triangle(3.0, 4.0), 0.5);
        assert_eq!(cycle(5.0, 4.0), 0.25);
        assert_eq!(cycle(-1.0, 4.0), 0.75);
    }

    #[test]
    fn degenerate_periods_rest_at_start() {
        assert_eq!(ping_pong(3.0, 0.0), 0.0);
        assert_eq!(ping_pong(f64::INFINITY, 4.0), 0.0);
        assert_eq!(triangle(3.0, -1.0), 0.0);
    }
}
