//! Sky system — advances the monotonic clock feeding the sky shader's
//! `time` uniform.

use crate::core::scene::{NodeKind, SceneGraph};
use crate::core::state::AnimationState;

/// Clock advance per tick. The starfield drifts and twinkles at this rate;
/// the gradient variant simply ignores the uniform.
pub const SKY_TIME_RATE: f32 = 0.01;

pub fn tick_sky(state: &mut AnimationState, scene: &mut SceneGraph) {
    state.sky_clock += SKY_TIME_RATE;
    if let Some(node) = scene.find_by_tag_mut("sky") {
        if let NodeKind::Sky { ref mut time } = node.kind {
            *time = state.sky_clock;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::NodeId;
    use crate::core::scene::Node;

    #[test]
    fn clock_is_monotonic_and_reaches_the_node() {
        let mut state = AnimationState::new();
        let mut scene = SceneGraph::new();
        scene.spawn(Node::new(NodeId(1), NodeKind::Sky { time: 0.0 }).with_tag("sky"));

        let mut prev = 0.0;
        for _ in 0..100 {
            tick_sky(&mut state, &mut scene);
            assert!(state.sky_clock > prev);
            prev = state.sky_clock;
        }
        match scene.get(NodeId(1)).unwrap().kind {
            NodeKind::Sky { time } => assert!((time - state.sky_clock).abs() < 1e-6),
            _ => unreachable!(),
        }
    }

    #[test]
    fn missing_sky_node_is_fine() {
        let mut state = AnimationState::new();
        let mut scene = SceneGraph::new();
        tick_sky(&mut state, &mut scene);
        assert!(state.sky_clock > 0.0);
    }
}
