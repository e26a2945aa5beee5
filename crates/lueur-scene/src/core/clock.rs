/// Measured frame clock.
///
/// Converts `requestAnimationFrame` timestamps (milliseconds) into a
/// per-frame delta in seconds. Clip playback advances by this measured delta
/// instead of assuming a steady 60 Hz display, so playback speed stays
/// correct on 120/144 Hz screens.
pub struct FrameClock {
    last_ms: Option<f64>,
    /// Upper bound on a single delta, so a backgrounded tab doesn't replay
    /// seconds of animation in one frame.
    max_dt: f32,
}

/// Delta used for the very first frame, before any interval is measurable.
const FIRST_FRAME_DT: f32 = 1.0 / 60.0;

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_ms: None,
            max_dt: 0.1,
        }
    }

    pub fn with_max_dt(mut self, max_dt: f32) -> Self {
        self.max_dt = max_dt;
        self
    }

    /// Advance the clock to `now_ms` and return the elapsed seconds since the
    /// previous call, clamped to `max_dt`.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => FIRST_FRAME_DT,
        };
        self.last_ms = Some(now_ms);
        dt.clamp(0.0, self.max_dt)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
