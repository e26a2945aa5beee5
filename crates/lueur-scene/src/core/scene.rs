use glam::Vec3;

use crate::api::types::NodeId;

/// What a node renders as. An explicit tagged variant instead of the
/// duck-typed `isMesh` traversal the engine-side scene graph relied on.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A solid mesh of the loaded model.
    Mesh { opacity: f32 },
    /// Wireframe overlay derived from a mesh; fades in as `progress` rises.
    EdgeOverlay {
        source: NodeId,
        progress: f32,
        opacity: f32,
    },
    /// Positional light with distance falloff (the lantern).
    PointLight {
        color: [f32; 3],
        intensity: f32,
        radius: f32,
        decay: f32,
    },
    /// Fill light with a direction but no position falloff.
    DirectionalLight { color: [f32; 3], intensity: f32 },
    /// Uniform base illumination.
    AmbientLight { color: [f32; 3], intensity: f32 },
    /// Two-tone environment light.
    HemisphereLight {
        sky_color: [f32; 3],
        ground_color: [f32; 3],
        intensity: f32,
    },
    /// The backdrop plane driven by the sky shader's `time` uniform.
    Sky { time: f32 },
    /// The companion character with its walk-cycle playhead.
    Character {
        clip_time: f32,
        facing_reversed: bool,
    },
}

impl NodeKind {
    /// Numeric kind code for the frame-buffer wire format.
    pub fn code(&self) -> f32 {
        match self {
            NodeKind::Mesh { .. } => 1.0,
            NodeKind::EdgeOverlay { .. } => 2.0,
            NodeKind::PointLight { .. } => 3.0,
            NodeKind::DirectionalLight { .. } => 4.0,
            NodeKind::AmbientLight { .. } => 5.0,
            NodeKind::HemisphereLight { .. } => 6.0,
            NodeKind::Sky { .. } => 7.0,
            NodeKind::Character { .. } => 8.0,
        }
    }
}

/// A scene node: shared transform fields plus the kind-specific payload.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// String tag for finding nodes by name.
    pub tag: String,
    /// Inactive nodes are skipped by systems and the snapshot pass.
    pub active: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Rotation around Y in radians.
    pub yaw: f32,
    /// Uniform scale.
    pub scale: f32,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            yaw: 0.0,
            scale: 1.0,
            kind,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// Flat node storage. The scene holds a few dozen nodes, so linear scans
/// beat any indexing scheme.
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(64),
        }
    }

    /// Add a node to the scene.
    pub fn spawn(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Remove a node by ID. Returns the removed node if found.
    pub fn despawn(&mut self, id: NodeId) -> Option<Node> {
        if let Some(idx) = self.nodes.iter().position(|n| n.id == id) {
            Some(self.nodes.swap_remove(idx))
        } else {
            None
        }
    }

    /// Get a reference to a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Get a mutable reference to a node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Iterate over all nodes mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    /// Find the first node with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.tag == tag)
    }

    /// Find the first node with the given tag (mutable).
    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.tag == tag)
    }

    /// Number of nodes in the scene.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clear all nodes.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}
