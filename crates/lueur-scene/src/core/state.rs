/// All time-varying scalar state the animation driver owns.
///
/// One explicit value, mutated only inside the per-frame update. Collecting
/// these here instead of scattering them as globals makes every invariant
/// testable and keeps the driver re-entrant.
#[derive(Debug, Clone)]
pub struct AnimationState {
    /// Edge-reveal sweep progress, saturating in [0, 1].
    pub reveal_progress: f32,
    /// Ticks elapsed since the sweep started. Progress is recomputed from
    /// this count so `n * step` stays exact instead of accumulating drift.
    pub reveal_ticks: u32,
    /// Whether the reveal sweep is running.
    pub started: bool,
    /// Countdown (seconds) between arming and `started` flipping true.
    /// Negative when not armed.
    start_delay: f32,
    armed: bool,
    /// Smoothed model opacity in [0, 1].
    pub model_opacity: f32,
    /// Opacity target toggled by hover enter/leave on the title.
    pub target_opacity: f32,
    /// Smoothed model yaw in radians.
    pub current_yaw: f32,
    /// Bounded yaw target written by the input adapter.
    pub target_yaw: f32,
    /// Lantern patrol progress in [0, 1).
    pub lantern_progress: f32,
    /// Flips on every completed patrol traversal.
    pub lantern_reversed: bool,
    /// Flame flicker phase, in radians.
    pub flame_clock: f32,
    /// Monotonic clock pushed into the sky shader's `time` uniform.
    pub sky_clock: f32,
}

impl AnimationState {
    pub fn new() -> Self {
        Self {
            reveal_progress: 0.0,
            reveal_ticks: 0,
            started: false,
            start_delay: -1.0,
            armed: false,
            model_opacity: 1.0,
            target_opacity: 1.0,
            current_yaw: 0.0,
            target_yaw: 0.0,
            lantern_progress: 0.0,
            lantern_reversed: false,
            flame_clock: 0.0,
            sky_clock: 0.0,
        }
    }

    /// Arm the reveal sweep to start after `delay` seconds of wall time.
    /// Called once when the primary model finishes loading.
    pub fn arm_reveal(&mut self, delay: f32) {
        if !self.armed && !self.started {
            self.armed = true;
            self.start_delay = delay.max(0.0);
        }
    }

    /// Count the arming timer down by measured frame time. Flips `started`
    /// exactly once when the delay elapses.
    pub fn tick_start_delay(&mut self, dt: f32) {
        if self.armed && !self.started {
            self.start_delay -= dt;
            if self.start_delay <= 0.0 {
                self.started = true;
            }
        }
    }

    /// Whether the reveal has been armed (the model is loaded).
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unarmed() {
        let state = AnimationState::new();
        assert!(!state.started);
        assert!(!state.is_armed());
        assert_eq!(state.reveal_progress, 0.0);
        assert_eq!(state.model_opacity, 1.0);
    }

    #[test]
    fn arming_starts_after_delay() {
        let mut state = AnimationState::new();
        state.arm_reveal(0.4);
        state.tick_start_delay(0.2);
        assert!(!state.started);
        state.tick_start_delay(0.2);
        assert!(state.started);
    }

    #[test]
    fn ticking_without_arming_never_starts() {
        let mut state = AnimationState::new();
        for _ in 0..100 {
            state.tick_start_delay(1.0);
        }
        assert!(!state.started);
    }

    #[test]
    fn rearming_after_start_is_ignored() {
        let mut state = AnimationState::new();
        state.arm_reveal(0.0);
        state.tick_start_delay(0.016);
        assert!(state.started);
        state.arm_reveal(100.0);
        state.tick_start_delay(0.016);
        assert!(state.started);
    }
}
