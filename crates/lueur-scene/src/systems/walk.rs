//! Walk system — advances the companion's walk-cycle playhead.
//!
//! Uses the measured frame delta rather than a fixed 1/60 s step, so the
//! cycle plays at the same speed on every refresh rate.

use crate::core::scene::{NodeKind, SceneGraph};

pub fn tick_walk(scene: &mut SceneGraph, dt: f32, clip_duration: f32) {
    if clip_duration <= 0.0 {
        return;
    }
    for node in scene.iter_mut() {
        if let NodeKind::Character { ref mut clip_time, .. } = node.kind {
            *clip_time = (*clip_time + dt) % clip_duration;
        }
    }
}
