//! Simulated frame time.

/// Simulated frame time step, in seconds.
pub const FRAME_DT: f64 = 1.0 / 60.0;

/// Accumulates orbit time one fixed step at a time.
///
/// The scale is applied per step, so changing it mid-run changes the rate
/// without moving `t` backwards. Negative and non-finite scales hold time still.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    t: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time, in seconds.
    pub fn time(&self) -> f64 {
        self.t
    }

    /// Advance one frame at `time_scale` and return the new time.
    pub fn tick(&mut self, time_scale: f64) -> f64 {
        let scale = if time_scale.is_finite() {
            time_scale.max(0.0)
        } else {
            0.0
        };
        self.t += FRAME_DT * scale;
        self.t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(FrameClock::new().time(), 0.0);
    }

    #[test]
    fn test_tick_advances_by_scaled_step() {
        let mut clock = FrameClock::new();
        clock.tick(1.0);
        let t = clock.tick(2.0);
        assert!((t - 3.0 * FRAME_DT).abs() < 1e-12);
    }

    #[test]
    fn test_lowering_scale_never_rewinds() {
        let mut clock = FrameClock::new();
        for _ in 0..240 {
            clock.tick(1.0);
        }
        let before = clock.time();
        let after = clock.tick(0.5);
        assert!(after > before, "{after} <= {before}");
    }

    #[test]
    fn test_negative_and_invalid_scales_hold_time() {
        let mut clock = FrameClock::new();
        clock.tick(1.0);
        let t = clock.time();
        assert_eq!(clock.tick(-2.0), t);
        assert_eq!(clock.tick(f64::NAN), t);
        assert_eq!(clock.tick(f64::INFINITY), t);
    }
}
