//! Lantern system — ping-pong patrol between two endpoints, flame flicker,
//! and the companion character walking alongside.

use glam::Vec3;

use crate::api::config::{CompanionConfig, LanternConfig};
use crate::core::scene::{NodeKind, SceneGraph};
use crate::core::state::AnimationState;
use crate::extensions::lerp_vec3;

/// The patrol endpoints. Swapped on each completed traversal so the light
/// walks back and forth forever.
#[derive(Debug, Clone)]
pub struct LanternPath {
    pub start: Vec3,
    pub end: Vec3,
}

impl LanternPath {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
    }
}

/// Advance the lantern by one tick.
///
/// Progress wraps to exactly 0 at completion, flipping the direction flag and
/// the companion's facing; it never exceeds 1 mid-frame. When `override_pos`
/// is set the interpolation is bypassed and the light follows it directly.
pub fn tick_lantern(
    state: &mut AnimationState,
    scene: &mut SceneGraph,
    path: &mut LanternPath,
    cfg: &LanternConfig,
    companion: Option<&CompanionConfig>,
    override_pos: Option<Vec3>,
) {
    // Flame flicker: deterministic oscillation, not randomness.
    state.flame_clock += cfg.flicker_rate;
    let intensity = cfg.base_intensity + state.flame_clock.sin() * cfg.flicker_amplitude;

    let pos = match override_pos {
        Some(p) => p,
        None => {
            state.lantern_progress += cfg.speed;
            if state.lantern_progress >= 1.0 {
                state.lantern_progress = 0.0;
                state.lantern_reversed = !state.lantern_reversed;
                path.swap();
                flip_companion(scene);
            }
            lerp_vec3(path.start, path.end, state.lantern_progress)
        }
    };

    if let Some(node) = scene.find_by_tag_mut("lantern") {
        node.pos = pos;
        if let NodeKind::PointLight {
            intensity: ref mut light_intensity,
            ..
        } = node.kind
        {
            *light_intensity = intensity;
        }
    }

    if let Some(companion_cfg) = companion {
        let reversed = state.lantern_reversed;
        if let Some(node) = scene.find_by_tag_mut("companion") {
            node.pos = pos + companion_cfg.offset;
            node.yaw = if reversed { std::f32::consts::PI } else { 0.0 };
        }
    }
}

fn flip_companion(scene: &mut SceneGraph) {
    if let Some(node) = scene.find_by_tag_mut("companion") {
        if let NodeKind::Character {
            ref mut facing_reversed,
            ..
        } = node.kind
        {
            *facing_reversed = !*facing_reversed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::NodeId;
    use crate::core::scene::Node;

    fn lantern_cfg(speed: f32) -> LanternConfig {
        LanternConfig {
            speed,
            ..LanternConfig::default()
        }
    }

    fn scene_with_lantern() -> SceneGraph {
        let cfg = LanternConfig::default();
        let mut scene = SceneGraph::new();
        scene.spawn(
            Node::new(
                NodeId(1),
                NodeKind::PointLight {
                    color: cfg.color,
                    intensity: cfg.base_intensity,
                    radius: cfg.radius,
                    decay: cfg.decay,
                },
            )
            .with_tag("lantern")
            .with_pos(cfg.start),
        );
        scene
    }

    #[test]
    fn progress_never_exceeds_one_and_flips_exactly() {
        let mut state = AnimationState::new();
        let mut scene = scene_with_lantern();
        let cfg = lantern_cfg(0.25);
        let mut path = LanternPath::new(cfg.start, cfg.end);

        for _ in 0..3 {
            tick_lantern(&mut state, &mut scene, &mut path, &cfg, None, None);
            assert!(state.lantern_progress < 1.0);
            assert!(!state.lantern_reversed);
        }
        // Fourth tick reaches 1.0: reset to exactly 0, direction flipped.
        tick_lantern(&mut state, &mut scene, &mut path, &cfg, None, None);
        assert_eq!(state.lantern_progress, 0.0);
        assert!(state.lantern_reversed);
        // Endpoints swapped.
        assert_eq!(path.start, LanternConfig::default().end);
        assert_eq!(path.end, LanternConfig::default().start);
    }

    #[test]
    fn position_interpolates_along_path() {
        let mut state = AnimationState::new();
        let mut scene = scene_with_lantern();
        let cfg = lantern_cfg(0.5);
        let mut path = LanternPath::new(cfg.start, cfg.end);

        tick_lantern(&mut state, &mut scene, &mut path, &cfg, None, None);
        let pos = scene.find_by_tag("lantern").unwrap().pos;
        let expected = lerp_vec3(cfg.start, cfg.end, 0.5);
        assert!((pos - expected).length() < 1e-5);
    }

    #[test]
    fn flame_intensity_stays_in_band() {
        let mut state = AnimationState::new();
        let mut scene = scene_with_lantern();
        let cfg = lantern_cfg(0.001);
        let mut path = LanternPath::new(cfg.start, cfg.end);

        for _ in 0..2000 {
            tick_lantern(&mut state, &mut scene, &mut path, &cfg, None, None);
            let node = scene.find_by_tag("lantern").unwrap();
            if let NodeKind::PointLight { intensity, .. } = node.kind {
                assert!(intensity >= cfg.base_intensity - cfg.flicker_amplitude - 1e-6);
                assert!(intensity <= cfg.base_intensity + cfg.flicker_amplitude + 1e-6);
            } else {
                unreachable!();
            }
        }
    }

    #[test]
    fn override_bypasses_interpolation() {
        let mut state = AnimationState::new();
        let mut scene = scene_with_lantern();
        let cfg = lantern_cfg(0.25);
        let mut path = LanternPath::new(cfg.start, cfg.end);
        let manual = Vec3::new(3.0, -12.1, 2.0);

        let before = state.lantern_progress;
        tick_lantern(&mut state, &mut scene, &mut path, &cfg, None, Some(manual));
        assert_eq!(scene.find_by_tag("lantern").unwrap().pos, manual);
        // Patrol progress holds still while overridden.
        assert_eq!(state.lantern_progress, before);
    }

    #[test]
    fn companion_follows_and_turns_around() {
        let mut state = AnimationState::new();
        let mut scene = scene_with_lantern();
        let companion_cfg = CompanionConfig::default();
        scene.spawn(
            Node::new(
                NodeId(2),
                NodeKind::Character {
                    clip_time: 0.0,
                    facing_reversed: false,
                },
            )
            .with_tag("companion"),
        );
        let cfg = lantern_cfg(0.5);
        let mut path = LanternPath::new(cfg.start, cfg.end);

        tick_lantern(&mut state, &mut scene, &mut path, &cfg, Some(&companion_cfg), None);
        let lantern_pos = scene.find_by_tag("lantern").unwrap().pos;
        let node = scene.find_by_tag("companion").unwrap();
        assert!((node.pos - (lantern_pos + companion_cfg.offset)).length() < 1e-5);
        assert_eq!(node.yaw, 0.0);

        // Complete the traversal: facing flips by 180°.
        tick_lantern(&mut state, &mut scene, &mut path, &cfg, Some(&companion_cfg), None);
        let node = scene.find_by_tag("companion").unwrap();
        assert_eq!(node.yaw, std::f32::consts::PI);
        match node.kind {
            NodeKind::Character { facing_reversed, .. } => assert!(facing_reversed),
            _ => unreachable!(),
        }
    }

    #[test]
    fn missing_lantern_node_is_skipped() {
        // A scene where the light never loaded: the tick must be a no-op,
        // not a panic.
        let mut state = AnimationState::new();
        let mut scene = SceneGraph::new();
        let cfg = lantern_cfg(0.25);
        let mut path = LanternPath::new(cfg.start, cfg.end);
        tick_lantern(&mut state, &mut scene, &mut path, &cfg, None, None);
        assert!(state.lantern_progress > 0.0);
    }
}
