use crate::api::config::SceneConfig;
use crate::api::types::{AssetSlot, NodeId, SceneEvent};
use crate::assets::manifest::SceneManifest;
use crate::assets::mesh::{MeshError, ModelBounds};
use crate::core::scene::SceneGraph;
use crate::core::state::AnimationState;
use crate::input::queue::InputQueue;

/// The core contract every scene must fulfill.
pub trait SceneApp {
    /// Return the scene configuration. Called once before init.
    fn config(&self) -> SceneConfig {
        SceneConfig::default()
    }

    /// Build the static scene: camera, lights, sky backdrop.
    fn init(&mut self, ctx: &mut SceneContext);

    /// Reconcile the scene with the asset manifest the host is about to
    /// fetch. Default: ignore.
    fn load_manifest(&mut self, _manifest: &SceneManifest) {}

    /// Per-frame update. `dt` is the measured time since the previous frame
    /// in seconds; counter-style animation quantities still advance per tick.
    fn update(&mut self, ctx: &mut SceneContext, input: &InputQueue, dt: f32);

    /// Ingest one renderable mesh of a loading asset (positions are xyz
    /// triples, indices form triangles). Default: ignore.
    fn ingest_mesh(
        &mut self,
        _ctx: &mut SceneContext,
        _slot: AssetSlot,
        _positions: &[f32],
        _indices: &[u32],
    ) -> Result<Option<NodeId>, MeshError> {
        Ok(None)
    }

    /// An asset finished loading. Default: ignore.
    fn asset_loaded(&mut self, _ctx: &mut SceneContext, _slot: AssetSlot) {}

    /// Byte-level progress callback from the host loader. Default: ignore.
    fn asset_progress(&mut self, _ctx: &mut SceneContext, _slot: AssetSlot, _loaded: u64, _total: u64) {
    }

    /// An asset failed to load. The scene degrades, never errors. Default: ignore.
    fn asset_failed(&mut self, _ctx: &mut SceneContext, _slot: AssetSlot) {}

    /// Vertical extent of the loaded model, for the reveal shader uniforms.
    fn model_bounds(&self) -> ModelBounds {
        ModelBounds::empty()
    }

    /// Number of edge-overlay line lists built so far.
    fn edge_list_count(&self) -> usize {
        0
    }

    /// Flattened xyz line-segment vertices for one edge overlay, for upload
    /// into a GPU vertex buffer by the host.
    fn edge_list(&self, _index: usize) -> Option<&[f32]> {
        None
    }
}

/// Mutable access to runtime state, passed to `SceneApp` methods.
pub struct SceneContext {
    pub scene: SceneGraph,
    pub state: AnimationState,
    pub events: Vec<SceneEvent>,
    next_id: u32,
}

impl SceneContext {
    pub fn new() -> Self {
        Self {
            scene: SceneGraph::new(),
            state: AnimationState::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a scene event to be forwarded to the host page.
    pub fn emit(&mut self, event: SceneEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (events).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for SceneContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ctx = SceneContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = SceneContext::new();
        ctx.emit(SceneEvent::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }
}
