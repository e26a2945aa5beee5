pub mod runner;

pub use runner::SceneRunner;

/// Generate all `#[wasm_bindgen]` exports for a scene.
///
/// Generates:
/// - `thread_local!` storage for the SceneRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (scene_init, scene_tick, input handlers, asset
///   callbacks, frame/edge/shader accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use lueur_web::SceneRunner;
///
/// lueur_web::export_scene!(lueur_scene::LandingScene, "my-scene");
/// ```
///
/// # Arguments
///
/// - `$scene_type`: a type implementing `lueur_scene::SceneApp` with a
///   `new(SceneConfig, viewport_width, viewport_height)` constructor
/// - `$scene_name`: a string literal used in the initialization log message
#[macro_export]
macro_rules! export_scene {
    ($scene_type:ty, $scene_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SceneRunner<$scene_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SceneRunner<$scene_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Scene not initialized. Call scene_init() first.");
                f(runner)
            })
        }

        /// Build the scene from a JSON config. A malformed config falls back
        /// to the reference variant rather than leaving the page blank.
        #[wasm_bindgen]
        pub fn scene_init(config_json: &str, viewport_width: f32, viewport_height: f32) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let config = match lueur_scene::SceneConfig::from_json(config_json) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("invalid scene config, using defaults: {err}");
                    lueur_scene::SceneConfig::default()
                }
            };
            let scene = <$scene_type>::new(config, viewport_width, viewport_height);
            let runner = $crate::SceneRunner::new(scene);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $scene_name);
        }

        #[wasm_bindgen]
        pub fn scene_tick(now_ms: f64) {
            with_runner(|r| r.tick(now_ms));
        }

        #[wasm_bindgen]
        pub fn scene_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        // ---- Input handlers ----

        #[wasm_bindgen]
        pub fn scene_pointer_move(nx: f32, ny: f32) {
            with_runner(|r| r.push_input(lueur_scene::InputEvent::PointerMove { nx, ny }));
        }

        #[wasm_bindgen]
        pub fn scene_orientation(beta: f32, gamma: f32) {
            with_runner(|r| r.push_input(lueur_scene::InputEvent::Orientation { beta, gamma }));
        }

        #[wasm_bindgen]
        pub fn scene_orientation_permission(granted: bool) {
            with_runner(|r| {
                r.push_input(lueur_scene::InputEvent::OrientationPermission { granted })
            });
        }

        #[wasm_bindgen]
        pub fn scene_hover_enter() {
            with_runner(|r| r.push_input(lueur_scene::InputEvent::HoverEnter));
        }

        #[wasm_bindgen]
        pub fn scene_hover_leave() {
            with_runner(|r| r.push_input(lueur_scene::InputEvent::HoverLeave));
        }

        #[wasm_bindgen]
        pub fn scene_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(lueur_scene::InputEvent::Resize { width, height }));
        }

        #[wasm_bindgen]
        pub fn scene_scroll_click() {
            with_runner(|r| r.push_input(lueur_scene::InputEvent::ScrollClick));
        }

        #[wasm_bindgen]
        pub fn scene_music_toggle() {
            with_runner(|r| r.push_input(lueur_scene::InputEvent::MusicToggle));
        }

        #[wasm_bindgen]
        pub fn scene_music_volume(volume: f32) {
            with_runner(|r| r.push_input(lueur_scene::InputEvent::MusicVolume { volume }));
        }

        #[wasm_bindgen]
        pub fn scene_lantern_override(enabled: bool, x: f32, y: f32, z: f32) {
            with_runner(|r| {
                r.push_input(lueur_scene::InputEvent::LanternOverride { enabled, x, y, z })
            });
        }

        // ---- Asset callbacks ----

        #[wasm_bindgen]
        pub fn scene_ingest_mesh(slot: u32, positions: &[f32], indices: &[u32]) {
            with_runner(|r| r.ingest_mesh(slot, positions, indices));
        }

        #[wasm_bindgen]
        pub fn scene_asset_progress(slot: u32, loaded: f64, total: f64) {
            with_runner(|r| r.asset_progress(slot, loaded, total));
        }

        #[wasm_bindgen]
        pub fn scene_asset_loaded(slot: u32) {
            with_runner(|r| r.asset_loaded(slot));
        }

        #[wasm_bindgen]
        pub fn scene_asset_failed(slot: u32) {
            with_runner(|r| r.asset_failed(slot));
        }

        // ---- Frame buffer accessors ----

        #[wasm_bindgen]
        pub fn get_frame_ptr() -> *const f32 {
            with_runner(|r| r.frame_ptr())
        }

        #[wasm_bindgen]
        pub fn get_frame_len_floats() -> u32 {
            with_runner(|r| r.frame_len_floats())
        }

        // ---- Edge overlay geometry accessors ----

        #[wasm_bindgen]
        pub fn get_edge_list_count() -> u32 {
            with_runner(|r| r.edge_list_count())
        }

        #[wasm_bindgen]
        pub fn get_edge_list_ptr(index: u32) -> *const f32 {
            with_runner(|r| r.edge_list_ptr(index))
        }

        #[wasm_bindgen]
        pub fn get_edge_list_len(index: u32) -> u32 {
            with_runner(|r| r.edge_list_len(index))
        }

        // ---- Shader sources ----

        #[wasm_bindgen]
        pub fn get_edge_shader() -> String {
            with_runner(|r| r.edge_shader().to_string())
        }

        #[wasm_bindgen]
        pub fn get_sky_shader() -> String {
            with_runner(|r| r.sky_shader().to_string())
        }
    };
}

#[cfg(target_arch = "wasm32")]
mod exports {
    use wasm_bindgen::prelude::*;

    crate::export_scene!(lueur_scene::LandingScene, "lueur");
}
