//! The landing-page scene: a wireframe-revealed model under a night sky,
//! patrolled by a lantern-bearing companion.

use glam::Vec3;

use crate::api::app::{SceneApp, SceneContext};
use crate::api::config::{CompanionConfig, SceneConfig};
use crate::api::types::{AssetSlot, NodeId, SceneEvent};
use crate::assets::loading::{LoadPhase, LoadTracker};
use crate::assets::manifest::SceneManifest;
use crate::assets::mesh::{
    extract_edges, flatten_segments, BoundingBox, MeshData, MeshError, ModelBounds,
};
use crate::audio::{AudioCommand, MusicController};
use crate::core::scene::{Node, NodeKind, SceneGraph};
use crate::input::adapter::InputAdapter;
use crate::input::queue::{InputEvent, InputQueue};
use crate::systems::lantern::{tick_lantern, LanternPath};
use crate::systems::reveal::tick_reveal;
use crate::systems::sky::tick_sky;
use crate::systems::swivel::tick_swivel;
use crate::systems::walk::tick_walk;

// ── Events forwarded to the page ──
// a/b/c payload meaning depends on the kind.

/// Overall loading progress; `a` is the percent.
pub const EVENT_LOAD_PROGRESS: f32 = 1.0;
/// An asset failed to load; `a` is the slot code.
pub const EVENT_LOAD_FAILED: f32 = 2.0;
/// Smooth-scroll the page; `a` is the target offset in pixels.
pub const EVENT_SCROLL_TO: f32 = 3.0;
/// Start music playback; `a` is the gain.
pub const EVENT_AUDIO_PLAY: f32 = 4.0;
/// Stop and discard the music source.
pub const EVENT_AUDIO_STOP: f32 = 5.0;
/// Adjust the active music gain; `a` is the gain.
pub const EVENT_AUDIO_GAIN: f32 = 6.0;

// ── Tuning ──

/// Dihedral angle above which a mesh edge joins the wireframe overlay.
pub const EDGE_ANGLE_THRESHOLD_DEGREES: f32 = 15.0;

fn slot_code(slot: AssetSlot) -> f32 {
    match slot {
        AssetSlot::Model => 0.0,
        AssetSlot::Companion => 1.0,
        AssetSlot::Audio => 2.0,
    }
}

/// The scene driver. One instance serves every page variant; the differences
/// live entirely in [`SceneConfig`].
pub struct LandingScene {
    cfg: SceneConfig,
    adapter: InputAdapter,
    loader: LoadTracker,
    music: Option<MusicController>,
    lantern_path: Option<LanternPath>,
    lantern_override: Option<Vec3>,
    bbox: BoundingBox,
    bounds: ModelBounds,
    edge_lists: Vec<Vec<f32>>,
    mesh_ids: Vec<NodeId>,
    viewport_height: f32,
}

impl LandingScene {
    pub fn new(cfg: SceneConfig, viewport_width: f32, viewport_height: f32) -> Self {
        let adapter = InputAdapter::new(cfg.input.clone(), viewport_width);
        let loader = LoadTracker::new(cfg.companion.is_some());
        let music = cfg
            .audio
            .as_ref()
            .map(|audio| MusicController::new(audio.default_volume));
        let lantern_path = cfg
            .lantern
            .as_ref()
            .map(|lantern| LanternPath::new(lantern.start, lantern.end));
        Self {
            cfg,
            adapter,
            loader,
            music,
            lantern_path,
            lantern_override: None,
            bbox: BoundingBox::empty(),
            bounds: ModelBounds::empty(),
            edge_lists: Vec::new(),
            mesh_ids: Vec::new(),
            viewport_height,
        }
    }

    /// Overall loading progress in percent.
    pub fn load_percent(&self) -> f32 {
        self.loader.overall_percent()
    }

    fn handle_scene_event(&mut self, ctx: &mut SceneContext, event: &InputEvent) {
        match *event {
            InputEvent::HoverEnter => {
                ctx.state.target_opacity = self.cfg.swivel.dimmed_opacity;
            }
            InputEvent::HoverLeave => {
                ctx.state.target_opacity = 1.0;
            }
            InputEvent::Resize { height, .. } => {
                self.viewport_height = height;
            }
            InputEvent::ScrollClick => {
                ctx.emit(SceneEvent::new(EVENT_SCROLL_TO, self.viewport_height, 0.0, 0.0));
            }
            InputEvent::MusicToggle => {
                if let Some(music) = self.music.as_mut() {
                    match music.toggle() {
                        AudioCommand::Play { gain } => {
                            ctx.emit(SceneEvent::new(EVENT_AUDIO_PLAY, gain, 0.0, 0.0));
                        }
                        AudioCommand::Stop => {
                            ctx.emit(SceneEvent::new(EVENT_AUDIO_STOP, 0.0, 0.0, 0.0));
                        }
                        AudioCommand::SetGain { .. } => {}
                    }
                }
            }
            InputEvent::MusicVolume { volume } => {
                if let Some(music) = self.music.as_mut() {
                    if let Some(AudioCommand::SetGain { gain }) = music.set_volume(volume) {
                        ctx.emit(SceneEvent::new(EVENT_AUDIO_GAIN, gain, 0.0, 0.0));
                    }
                }
            }
            InputEvent::LanternOverride { enabled, x, y, z } => {
                self.lantern_override = enabled.then(|| Vec3::new(x, y, z));
            }
            _ => {}
        }
    }

    /// Recenter the model group once every mesh has arrived: the group's
    /// origin moves to the bounding-box center, then the configured scale
    /// applies around it.
    fn settle_model(&mut self, scene: &mut SceneGraph) {
        let offset = -self.bbox.center() * self.cfg.model_scale;
        // Bounds go out in world space, after the centering offset and the
        // scale, so the shader's vertical normalization matches the geometry
        // it actually draws.
        let raw = self.bbox.vertical_bounds();
        self.bounds = ModelBounds {
            min_y: offset.y + raw.min_y * self.cfg.model_scale,
            max_y: offset.y + raw.max_y * self.cfg.model_scale,
        };
        for id in &self.mesh_ids {
            if let Some(node) = scene.get_mut(*id) {
                node.pos = offset;
            }
        }
        for node in scene.iter_mut() {
            if matches!(node.kind, NodeKind::EdgeOverlay { .. }) {
                node.pos = offset;
            }
        }
    }
}

impl SceneApp for LandingScene {
    fn config(&self) -> SceneConfig {
        self.cfg.clone()
    }

    fn load_manifest(&mut self, manifest: &SceneManifest) {
        // The manifest is the source of truth for which assets exist; the
        // config only carries their tuning.
        match &manifest.companion {
            Some(desc) => match self.cfg.companion.as_mut() {
                Some(companion) => companion.walk_clip_duration = desc.walk_clip_duration,
                None => {
                    self.cfg.companion = Some(CompanionConfig {
                        walk_clip_duration: desc.walk_clip_duration,
                        ..CompanionConfig::default()
                    });
                }
            },
            None => self.cfg.companion = None,
        }
        if manifest.audio.is_none() {
            self.cfg.audio = None;
            self.music = None;
        }
        self.loader = LoadTracker::new(manifest.has_secondary());
        log::info!(
            "manifest: model {}, companion {}, audio {}",
            manifest.model.path,
            manifest.companion.is_some(),
            manifest.audio.is_some()
        );
    }

    fn init(&mut self, ctx: &mut SceneContext) {
        let id = ctx.next_id();
        ctx.scene.spawn(Node::new(id, NodeKind::Sky { time: 0.0 }).with_tag("sky"));

        let lights = self.cfg.lights.clone();
        let id = ctx.next_id();
        ctx.scene.spawn(Node::new(
            id,
            NodeKind::AmbientLight {
                color: [1.0; 3],
                intensity: lights.ambient,
            },
        ));
        // Three directional fills around the model.
        for pos in [
            Vec3::new(5.0, 10.0, 7.5),
            Vec3::new(-5.0, 10.0, -7.5),
            Vec3::new(0.0, -10.0, 5.0),
        ] {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Node::new(
                    id,
                    NodeKind::DirectionalLight {
                        color: [1.0; 3],
                        intensity: lights.directional,
                    },
                )
                .with_pos(pos),
            );
        }
        let id = ctx.next_id();
        ctx.scene.spawn(Node::new(
            id,
            NodeKind::HemisphereLight {
                sky_color: [1.0; 3],
                ground_color: lights.ground_color,
                intensity: lights.hemisphere,
            },
        ));

        if let Some(lantern) = &self.cfg.lantern {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Node::new(
                    id,
                    NodeKind::PointLight {
                        color: lantern.color,
                        intensity: lantern.base_intensity,
                        radius: lantern.radius,
                        decay: lantern.decay,
                    },
                )
                .with_tag("lantern")
                .with_pos(lantern.start),
            );
        }
        log::info!("scene initialized with {} nodes", ctx.scene.len());
    }

    fn update(&mut self, ctx: &mut SceneContext, input: &InputQueue, dt: f32) {
        for event in input.iter() {
            if self.adapter.handle(event) {
                continue;
            }
            self.handle_scene_event(ctx, event);
        }
        ctx.state.target_yaw = self.adapter.target_yaw();

        tick_reveal(&mut ctx.state, &mut ctx.scene, self.cfg.reveal.step, dt);
        tick_swivel(&mut ctx.state, &mut ctx.scene, &self.cfg.swivel);
        if let (Some(lantern_cfg), Some(path)) = (&self.cfg.lantern, self.lantern_path.as_mut()) {
            tick_lantern(
                &mut ctx.state,
                &mut ctx.scene,
                path,
                lantern_cfg,
                self.cfg.companion.as_ref(),
                self.lantern_override,
            );
        }
        if let Some(companion) = &self.cfg.companion {
            tick_walk(&mut ctx.scene, dt, companion.walk_clip_duration);
        }
        tick_sky(&mut ctx.state, &mut ctx.scene);
    }

    fn ingest_mesh(
        &mut self,
        ctx: &mut SceneContext,
        slot: AssetSlot,
        positions: &[f32],
        indices: &[u32],
    ) -> Result<Option<NodeId>, MeshError> {
        // The companion renders host-side from its own file; only the primary
        // model gets the wireframe treatment.
        if slot != AssetSlot::Model {
            return Ok(None);
        }
        let mesh = MeshData::from_raw(positions, indices)?;
        self.bbox.extend(&mesh);

        let id = ctx.next_id();
        ctx.scene.spawn(
            Node::new(id, NodeKind::Mesh { opacity: ctx.state.model_opacity })
                .with_scale(self.cfg.model_scale),
        );
        self.mesh_ids.push(id);

        let edges = extract_edges(&mesh, EDGE_ANGLE_THRESHOLD_DEGREES);
        log::debug!(
            "ingested mesh: {} triangles, {} feature edges",
            mesh.triangle_count(),
            edges.len()
        );
        self.edge_lists.push(flatten_segments(&edges));
        let overlay_id = ctx.next_id();
        ctx.scene.spawn(
            Node::new(
                overlay_id,
                NodeKind::EdgeOverlay {
                    source: id,
                    progress: 0.0,
                    opacity: ctx.state.model_opacity,
                },
            )
            .with_scale(self.cfg.model_scale),
        );
        Ok(Some(id))
    }

    fn asset_loaded(&mut self, ctx: &mut SceneContext, slot: AssetSlot) {
        match slot {
            AssetSlot::Model => {
                self.settle_model(&mut ctx.scene);
                ctx.state.arm_reveal(self.cfg.reveal.start_delay);
                self.loader.complete(LoadPhase::Primary);
                log::info!(
                    "model loaded: {} meshes, bounds {:?}",
                    self.mesh_ids.len(),
                    self.bounds
                );
            }
            AssetSlot::Companion => {
                if let Some(companion) = &self.cfg.companion {
                    let pos = ctx
                        .scene
                        .find_by_tag("lantern")
                        .map(|n| n.pos + companion.offset)
                        .unwrap_or(companion.offset);
                    let id = ctx.next_id();
                    ctx.scene.spawn(
                        Node::new(
                            id,
                            NodeKind::Character {
                                clip_time: 0.0,
                                facing_reversed: false,
                            },
                        )
                        .with_tag("companion")
                        .with_pos(pos),
                    );
                }
                self.loader.complete(LoadPhase::Secondary);
            }
            AssetSlot::Audio => {
                log::debug!("audio track ready");
                return;
            }
        }
        let percent = self.loader.overall_percent();
        ctx.emit(SceneEvent::new(EVENT_LOAD_PROGRESS, percent, 0.0, 0.0));
    }

    fn asset_progress(&mut self, ctx: &mut SceneContext, slot: AssetSlot, loaded: u64, total: u64) {
        let phase = match slot {
            AssetSlot::Model => LoadPhase::Primary,
            AssetSlot::Companion => LoadPhase::Secondary,
            AssetSlot::Audio => return,
        };
        let percent = self.loader.progress(phase, loaded, total);
        ctx.emit(SceneEvent::new(EVENT_LOAD_PROGRESS, percent, 0.0, 0.0));
    }

    fn asset_failed(&mut self, ctx: &mut SceneContext, slot: AssetSlot) {
        log::error!("asset failed to load: {slot:?}");
        match slot {
            AssetSlot::Model => self.loader.fail(LoadPhase::Primary),
            AssetSlot::Companion => self.loader.fail(LoadPhase::Secondary),
            AssetSlot::Audio => {
                // The widget stays visible but inert when the track is gone.
                self.music = None;
                return;
            }
        }
        ctx.emit(SceneEvent::new(EVENT_LOAD_FAILED, slot_code(slot), 0.0, 0.0));
    }

    fn model_bounds(&self) -> ModelBounds {
        self.bounds
    }

    fn edge_list_count(&self) -> usize {
        self.edge_lists.len()
    }

    fn edge_list(&self, index: usize) -> Option<&[f32]> {
        self.edge_lists.get(index).map(|list| list.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::{AudioConfig, CompanionConfig};

    fn quad() -> (Vec<f32>, Vec<u32>) {
        let positions = vec![
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            1.0, 1.0, 0.0, //
            0.0, 1.0, 0.0,
        ];
        let indices = vec![0, 1, 2, 0, 2, 3];
        (positions, indices)
    }

    fn scene_with(cfg: SceneConfig) -> (LandingScene, SceneContext) {
        let mut app = LandingScene::new(cfg, 1920.0, 1080.0);
        let mut ctx = SceneContext::new();
        app.init(&mut ctx);
        (app, ctx)
    }

    fn run_input(app: &mut LandingScene, ctx: &mut SceneContext, events: &[InputEvent]) {
        let mut queue = InputQueue::new();
        for e in events {
            queue.push(*e);
        }
        app.update(ctx, &queue, 1.0 / 60.0);
    }

    #[test]
    fn init_builds_the_static_rig() {
        let (_, ctx) = scene_with(SceneConfig::default());
        assert!(ctx.scene.find_by_tag("sky").is_some());
        assert!(ctx.scene.find_by_tag("lantern").is_some());
        // sky + ambient + 3 directional + hemisphere + lantern
        assert_eq!(ctx.scene.len(), 7);
    }

    #[test]
    fn disabling_the_lantern_removes_it() {
        let cfg = SceneConfig {
            lantern: None,
            ..SceneConfig::default()
        };
        let (_, ctx) = scene_with(cfg);
        assert!(ctx.scene.find_by_tag("lantern").is_none());
    }

    #[test]
    fn hover_dims_and_restores_the_target() {
        let cfg = SceneConfig::default();
        let dimmed = cfg.swivel.dimmed_opacity;
        let (mut app, mut ctx) = scene_with(cfg);

        run_input(&mut app, &mut ctx, &[InputEvent::HoverEnter]);
        assert_eq!(ctx.state.target_opacity, dimmed);
        run_input(&mut app, &mut ctx, &[InputEvent::HoverLeave]);
        assert_eq!(ctx.state.target_opacity, 1.0);
    }

    #[test]
    fn scroll_click_reports_the_viewport_height() {
        let (mut app, mut ctx) = scene_with(SceneConfig::default());
        run_input(
            &mut app,
            &mut ctx,
            &[
                InputEvent::Resize { width: 1920.0, height: 900.0 },
                InputEvent::ScrollClick,
            ],
        );
        let scroll = ctx
            .events
            .iter()
            .find(|e| e.kind == EVENT_SCROLL_TO)
            .unwrap();
        assert_eq!(scroll.a, 900.0);
    }

    #[test]
    fn ingesting_the_model_builds_mesh_and_overlay() {
        let (mut app, mut ctx) = scene_with(SceneConfig::default());
        let (positions, indices) = quad();
        let id = app
            .ingest_mesh(&mut ctx, AssetSlot::Model, &positions, &indices)
            .unwrap();
        assert!(id.is_some());
        assert_eq!(app.edge_list_count(), 1);
        // A flat quad has 4 boundary edges, 6 floats each.
        assert_eq!(app.edge_list(0).unwrap().len(), 24);
        assert!(ctx
            .scene
            .iter()
            .any(|n| matches!(n.kind, NodeKind::EdgeOverlay { .. })));
    }

    #[test]
    fn malformed_mesh_is_rejected() {
        let (mut app, mut ctx) = scene_with(SceneConfig::default());
        let result = app.ingest_mesh(&mut ctx, AssetSlot::Model, &[0.0, 1.0], &[0, 1, 2]);
        assert!(matches!(result, Err(MeshError::RaggedPositions { .. })));
    }

    #[test]
    fn model_load_arms_the_reveal_and_reports_progress() {
        let (mut app, mut ctx) = scene_with(SceneConfig::default());
        let (positions, indices) = quad();
        app.ingest_mesh(&mut ctx, AssetSlot::Model, &positions, &indices)
            .unwrap();
        app.asset_loaded(&mut ctx, AssetSlot::Model);

        assert!(ctx.state.is_armed());
        // Raw y in [0, 1], centered and scaled by 0.85: half-span 0.425.
        let bounds = app.model_bounds();
        assert!((bounds.min_y - -0.425).abs() < 1e-6);
        assert!((bounds.max_y - 0.425).abs() < 1e-6);
        // No companion configured: the model spans the whole bar.
        let progress = ctx
            .events
            .iter()
            .find(|e| e.kind == EVENT_LOAD_PROGRESS)
            .unwrap();
        assert_eq!(progress.a, 100.0);
    }

    #[test]
    fn full_sweep_reveals_a_model_built_away_from_the_origin() {
        use crate::extensions::smoothstep;

        // Raw geometry entirely above the origin: y in [5, 7].
        let (mut app, mut ctx) = scene_with(SceneConfig::default());
        let positions = vec![
            0.0, 5.0, 0.0, //
            1.0, 5.0, 0.0, //
            1.0, 7.0, 0.0, //
            0.0, 7.0, 0.0,
        ];
        let indices = vec![0, 1, 2, 0, 2, 3];
        let mesh_id = app
            .ingest_mesh(&mut ctx, AssetSlot::Model, &positions, &indices)
            .unwrap()
            .unwrap();
        app.asset_loaded(&mut ctx, AssetSlot::Model);

        // Settled bounds are symmetric around the recentered origin.
        let scale = SceneConfig::default().model_scale;
        let bounds = app.model_bounds();
        assert!((bounds.min_y - -scale).abs() < 1e-5);
        assert!((bounds.max_y - scale).abs() < 1e-5);

        // Every settled vertex normalizes into [0, 1] against those bounds,
        // so at progress 1 the fade band has passed the whole model.
        let node_y = ctx.scene.get(mesh_id).unwrap().pos.y;
        let center_y = 0.5 * (bounds.min_y + bounds.max_y);
        let half_span = 0.5 * (bounds.max_y - bounds.min_y);
        for raw_y in [5.0_f32, 7.0] {
            let world_y = node_y + scale * raw_y;
            let vertical = (world_y - center_y).abs() / half_span;
            assert!(vertical <= 1.0 + 1e-5);
            let combined = vertical * 0.7;
            let fade = 1.0 - smoothstep(1.0 - 0.3, 1.0 + 0.3, combined);
            assert!(fade > 0.99);
        }
    }

    #[test]
    fn manifest_reconciles_companion_and_audio() {
        let cfg = SceneConfig {
            companion: Some(CompanionConfig::default()),
            audio: Some(AudioConfig::default()),
            ..SceneConfig::default()
        };
        let (mut app, mut ctx) = scene_with(cfg);
        let manifest = SceneManifest::from_json(r#"{ "model": { "path": "scene.glb" } }"#).unwrap();
        app.load_manifest(&manifest);

        // No companion in the manifest: the model spans the full bar again.
        app.asset_progress(&mut ctx, AssetSlot::Model, 50, 100);
        assert_eq!(ctx.events.last().unwrap().a, 50.0);
        // No audio track: the widget goes inert.
        run_input(&mut app, &mut ctx, &[InputEvent::MusicToggle]);
        assert!(!ctx.events.iter().any(|e| e.kind == EVENT_AUDIO_PLAY));
    }

    #[test]
    fn manifest_supplies_the_walk_clip_duration() {
        let (mut app, _ctx) = scene_with(SceneConfig::default());
        let manifest = SceneManifest::from_json(
            r#"{
                "model": { "path": "scene.glb" },
                "companion": { "path": "wanderer.glb", "walk_clip_duration": 1.2 }
            }"#,
        )
        .unwrap();
        app.load_manifest(&manifest);
        assert_eq!(app.cfg.companion.as_ref().unwrap().walk_clip_duration, 1.2);
    }

    #[test]
    fn companion_load_spawns_the_character() {
        let cfg = SceneConfig {
            companion: Some(CompanionConfig::default()),
            ..SceneConfig::default()
        };
        let (mut app, mut ctx) = scene_with(cfg);
        app.asset_loaded(&mut ctx, AssetSlot::Companion);
        let node = ctx.scene.find_by_tag("companion").unwrap();
        assert!(matches!(node.kind, NodeKind::Character { .. }));
    }

    #[test]
    fn byte_progress_is_half_weighted_with_a_companion() {
        let cfg = SceneConfig {
            companion: Some(CompanionConfig::default()),
            ..SceneConfig::default()
        };
        let (mut app, mut ctx) = scene_with(cfg);
        app.asset_progress(&mut ctx, AssetSlot::Model, 50, 100);
        assert_eq!(ctx.events.last().unwrap().a, 25.0);
    }

    #[test]
    fn music_toggle_emits_play_then_stop() {
        let cfg = SceneConfig {
            audio: Some(AudioConfig::default()),
            ..SceneConfig::default()
        };
        let (mut app, mut ctx) = scene_with(cfg);

        run_input(&mut app, &mut ctx, &[InputEvent::MusicToggle]);
        assert!(ctx.events.iter().any(|e| e.kind == EVENT_AUDIO_PLAY && e.a == 0.5));

        ctx.clear_frame_data();
        run_input(&mut app, &mut ctx, &[InputEvent::MusicToggle]);
        assert!(ctx.events.iter().any(|e| e.kind == EVENT_AUDIO_STOP));
    }

    #[test]
    fn audio_failure_disables_the_widget() {
        let cfg = SceneConfig {
            audio: Some(AudioConfig::default()),
            ..SceneConfig::default()
        };
        let (mut app, mut ctx) = scene_with(cfg);
        app.asset_failed(&mut ctx, AssetSlot::Audio);
        run_input(&mut app, &mut ctx, &[InputEvent::MusicToggle]);
        assert!(!ctx.events.iter().any(|e| e.kind == EVENT_AUDIO_PLAY));
    }

    #[test]
    fn model_failure_emits_the_failure_event() {
        let (mut app, mut ctx) = scene_with(SceneConfig::default());
        app.asset_failed(&mut ctx, AssetSlot::Model);
        let failed = ctx.events.iter().find(|e| e.kind == EVENT_LOAD_FAILED).unwrap();
        assert_eq!(failed.a, 0.0);
    }

    #[test]
    fn lantern_override_pins_the_light() {
        let (mut app, mut ctx) = scene_with(SceneConfig::default());
        run_input(
            &mut app,
            &mut ctx,
            &[InputEvent::LanternOverride { enabled: true, x: 3.0, y: -12.1, z: 2.0 }],
        );
        let pos = ctx.scene.find_by_tag("lantern").unwrap().pos;
        assert_eq!(pos, Vec3::new(3.0, -12.1, 2.0));

        // Progress holds while overridden, resumes when released.
        let held = ctx.state.lantern_progress;
        run_input(&mut app, &mut ctx, &[]);
        assert_eq!(ctx.state.lantern_progress, held);
        run_input(
            &mut app,
            &mut ctx,
            &[InputEvent::LanternOverride { enabled: false, x: 0.0, y: 0.0, z: 0.0 }],
        );
        assert!(ctx.state.lantern_progress > held);
    }

    #[test]
    fn pointer_input_steers_the_yaw_target() {
        let (mut app, mut ctx) = scene_with(SceneConfig::default());
        run_input(&mut app, &mut ctx, &[InputEvent::PointerMove { nx: 1.0, ny: 0.0 }]);
        assert!((ctx.state.target_yaw - -0.02).abs() < 1e-6);
    }
}
