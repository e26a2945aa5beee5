pub mod api;
pub mod core;
pub mod systems;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod audio;
pub mod extensions;
pub mod landing;
pub mod shaders;

// Re-export key types at crate root for convenience
pub use api::app::{SceneApp, SceneContext};
pub use api::config::{
    AudioConfig, CameraConfig, CompanionConfig, InputConfig, LanternConfig, LightRigConfig,
    RevealConfig, SceneConfig, SkyMode, SwivelConfig,
};
pub use api::types::{AssetSlot, NodeId, SceneEvent};
pub use assets::loading::{LoadPhase, LoadTracker};
pub use assets::manifest::SceneManifest;
pub use assets::mesh::{
    extract_edges, flatten_segments, BoundingBox, MeshData, MeshError, ModelBounds,
};
pub use audio::{AudioCommand, MusicController};
pub use bridge::frame::{FrameBuffer, FrameLayout, NodeSnapshot};
pub use core::clock::FrameClock;
pub use core::scene::{Node, NodeKind, SceneGraph};
pub use core::state::AnimationState;
pub use input::adapter::{InputAdapter, InputMode};
pub use input::queue::{InputEvent, InputQueue};
pub use landing::LandingScene;
pub use shaders::{sky_source, EDGE_REVEAL_WGSL, SKY_GRADIENT_WGSL, SKY_NIGHT_WGSL};
pub use systems::lantern::LanternPath;

// Extensions — small math helpers shared by the systems
pub use extensions::{exp_approach, lerp, lerp_vec3, smoothstep};
