use lueur_scene::{
    AssetSlot, FrameBuffer, FrameClock, FrameLayout, InputEvent, InputQueue, SceneApp,
    SceneConfig, SceneContext, SceneManifest,
};

/// Generic scene runner that wires up the frame loop.
///
/// The concrete scene creates a `thread_local!` SceneRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct SceneRunner<A: SceneApp> {
    app: A,
    ctx: SceneContext,
    input: InputQueue,
    clock: FrameClock,
    frame: FrameBuffer,
    config: SceneConfig,
    initialized: bool,
}

impl<A: SceneApp> SceneRunner<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        let frame = FrameBuffer::new(FrameLayout::new(config.max_nodes, config.max_events));

        Self {
            app,
            ctx: SceneContext::new(),
            input: InputQueue::new(),
            clock: FrameClock::new(),
            frame,
            config,
            initialized: false,
        }
    }

    /// Initialize the scene. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.app.config();
        self.app.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: update the scene with the measured dt and serialize it
    /// into the frame buffer. `now_ms` is the rAF timestamp.
    pub fn tick(&mut self, now_ms: f64) {
        if !self.initialized {
            return;
        }

        let dt = self.clock.tick(now_ms);
        self.app.update(&mut self.ctx, &self.input, dt);

        // Drain input after update
        self.input.drain();

        self.frame.write(
            &self.ctx.scene,
            &self.ctx.state,
            self.app.model_bounds(),
            self.config.reveal.depth_influence,
            &self.ctx.events,
        );

        // Events clear only after the write above has shipped them, so
        // emissions from asset callbacks between ticks reach the page too.
        self.ctx.clear_frame_data();
    }

    /// Parse the asset manifest and let the scene reconcile against it.
    pub fn load_manifest(&mut self, json: &str) {
        match SceneManifest::from_json(json) {
            Ok(manifest) => self.app.load_manifest(&manifest),
            Err(err) => log::error!("invalid asset manifest: {err}"),
        }
    }

    // ---- Asset callbacks from the host loader ----

    pub fn ingest_mesh(&mut self, slot_raw: u32, positions: &[f32], indices: &[u32]) {
        let Some(slot) = AssetSlot::from_u32(slot_raw) else {
            log::warn!("unknown asset slot {slot_raw}");
            return;
        };
        if let Err(err) = self.app.ingest_mesh(&mut self.ctx, slot, positions, indices) {
            log::error!("rejected mesh for {slot:?}: {err}");
        }
    }

    pub fn asset_progress(&mut self, slot_raw: u32, loaded: f64, total: f64) {
        if let Some(slot) = AssetSlot::from_u32(slot_raw) {
            self.app
                .asset_progress(&mut self.ctx, slot, loaded as u64, total as u64);
        }
    }

    pub fn asset_loaded(&mut self, slot_raw: u32) {
        if let Some(slot) = AssetSlot::from_u32(slot_raw) {
            self.app.asset_loaded(&mut self.ctx, slot);
        }
    }

    pub fn asset_failed(&mut self, slot_raw: u32) {
        if let Some(slot) = AssetSlot::from_u32(slot_raw) {
            self.app.asset_failed(&mut self.ctx, slot);
        }
    }

    // ---- Pointer accessors for zero-copy frame reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame_len_floats(&self) -> u32 {
        self.frame.len_floats() as u32
    }

    pub fn edge_list_count(&self) -> u32 {
        self.app.edge_list_count() as u32
    }

    pub fn edge_list_ptr(&self, index: u32) -> *const f32 {
        self.app
            .edge_list(index as usize)
            .map(|list| list.as_ptr())
            .unwrap_or(std::ptr::null())
    }

    pub fn edge_list_len(&self, index: u32) -> u32 {
        self.app
            .edge_list(index as usize)
            .map(|list| list.len() as u32)
            .unwrap_or(0)
    }

    // ---- Shader sources for the host pipeline builds ----

    pub fn edge_shader(&self) -> &'static str {
        lueur_scene::EDGE_REVEAL_WGSL
    }

    pub fn sky_shader(&self) -> &'static str {
        lueur_scene::sky_source(&self.config.sky)
    }
}
