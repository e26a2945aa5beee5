use bytemuck::{Pod, Zeroable};

/// Unique identifier for a node in the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// A scene event communicated from Rust to the host page via the frame buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SceneEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl SceneEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}

/// Which external asset a loader callback refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSlot {
    /// The primary model (spans 0–50% of reported load progress).
    Model,
    /// The companion character (spans 50–100% of reported load progress).
    Companion,
    /// The background audio track (not part of the loading percentage).
    Audio,
}

impl AssetSlot {
    /// Decode a slot from its wire value. Unknown values map to `None`.
    pub fn from_u32(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(AssetSlot::Model),
            1 => Some(AssetSlot::Companion),
            2 => Some(AssetSlot::Audio),
            _ => None,
        }
    }
}
