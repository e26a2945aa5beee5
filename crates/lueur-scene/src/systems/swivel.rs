//! Swivel system — exponential low-pass smoothing of the model group's yaw
//! and opacity toward their targets.

use crate::api::config::SwivelConfig;
use crate::core::scene::{NodeKind, SceneGraph};
use crate::core::state::AnimationState;
use crate::extensions::exp_approach;

/// Smooth yaw and opacity one step and write them into the model nodes.
///
/// Only meshes and their edge overlays belong to the model group; lights,
/// sky, and the companion keep their own transforms.
pub fn tick_swivel(state: &mut AnimationState, scene: &mut SceneGraph, cfg: &SwivelConfig) {
    state.current_yaw = exp_approach(state.current_yaw, state.target_yaw, cfg.yaw_gain);
    state.model_opacity = exp_approach(state.model_opacity, state.target_opacity, cfg.opacity_gain);

    for node in scene.iter_mut() {
        match node.kind {
            NodeKind::Mesh { ref mut opacity } => {
                node.yaw = state.current_yaw;
                *opacity = state.model_opacity;
            }
            NodeKind::EdgeOverlay { ref mut opacity, .. } => {
                node.yaw = state.current_yaw;
                *opacity = state.model_opacity;
            }
            _ => {}
        }
    }
}
