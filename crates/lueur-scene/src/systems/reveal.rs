//! Edge-reveal system — advances the saturating sweep counter and pushes it
//! into every overlay's `progress` uniform.

use crate::core::scene::{NodeKind, SceneGraph};
use crate::core::state::AnimationState;

/// Advance the reveal sweep by one tick.
///
/// `dt` only drives the start-delay timer; once started, progress is
/// `min(1, n * step)` for n elapsed ticks, recomputed from the tick count
/// rather than accumulated so the product holds exactly for every n.
pub fn tick_reveal(state: &mut AnimationState, scene: &mut SceneGraph, step: f32, dt: f32) {
    state.tick_start_delay(dt);

    if state.started && state.reveal_progress < 1.0 {
        state.reveal_ticks += 1;
        state.reveal_progress = (state.reveal_ticks as f32 * step).min(1.0);
    }

    for node in scene.iter_mut() {
        if let NodeKind::EdgeOverlay { ref mut progress, .. } = node.kind {
            *progress = state.reveal_progress;
        }
    }
}
