//! Flat f32 frame buffer read by the host renderer each frame.
//! Must stay in sync with the page-side `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 8 floats]
//! [Nodes: max_nodes × 16 floats]
//! [Globals: 8 floats]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Capacities are written into the header at init; the page reads them to
//! compute section offsets dynamically.

use bytemuck::{Pod, Zeroable};

use crate::api::types::SceneEvent;
use crate::assets::mesh::ModelBounds;
use crate::core::scene::{NodeKind, SceneGraph};
use crate::core::state::AnimationState;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_NODE_COUNT: usize = 1;
pub const HEADER_EVENT_COUNT: usize = 2;
pub const HEADER_MAX_NODES: usize = 3;
pub const HEADER_MAX_EVENTS: usize = 4;
pub const HEADER_PROTOCOL_VERSION: usize = 5;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per node snapshot (wire format — never changes).
pub const NODE_FLOATS: usize = 16;

/// Floats in the globals section: sky time, reveal progress, model bounds,
/// depth influence, model yaw, model opacity, pad.
pub const GLOBALS_FLOATS: usize = 8;

/// Globals field indices (relative to the globals offset).
pub const GLOBAL_SKY_TIME: usize = 0;
pub const GLOBAL_REVEAL_PROGRESS: usize = 1;
pub const GLOBAL_MIN_Y: usize = 2;
pub const GLOBAL_MAX_Y: usize = 3;
pub const GLOBAL_DEPTH_INFLUENCE: usize = 4;
pub const GLOBAL_MODEL_YAW: usize = 5;
pub const GLOBAL_MODEL_OPACITY: usize = 6;

/// One node as seen by the page renderer. Generic slots so every `NodeKind`
/// fits the same stride: lights use `r/g/b`, the sky and character use the
/// `aux` slots (time, clip playhead), the hemisphere light packs its ground
/// color into them.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct NodeSnapshot {
    pub kind: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub yaw: f32,
    pub scale: f32,
    pub opacity: f32,
    pub progress: f32,
    pub intensity: f32,
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub aux_a: f32,
    pub aux_b: f32,
    pub aux_c: f32,
}

impl NodeSnapshot {
    pub const FLOATS: usize = NODE_FLOATS;

    pub fn from_node(node: &crate::core::scene::Node) -> Self {
        let mut snap = NodeSnapshot {
            kind: node.kind.code(),
            x: node.pos.x,
            y: node.pos.y,
            z: node.pos.z,
            yaw: node.yaw,
            scale: node.scale,
            ..Default::default()
        };
        match node.kind {
            NodeKind::Mesh { opacity } => {
                snap.opacity = opacity;
            }
            NodeKind::EdgeOverlay { progress, opacity, .. } => {
                snap.opacity = opacity;
                snap.progress = progress;
            }
            NodeKind::PointLight {
                color,
                intensity,
                radius,
                decay,
            } => {
                snap.r = color[0];
                snap.g = color[1];
                snap.b = color[2];
                snap.intensity = intensity;
                snap.radius = radius;
                snap.aux_a = decay;
            }
            NodeKind::DirectionalLight { color, intensity } => {
                snap.r = color[0];
                snap.g = color[1];
                snap.b = color[2];
                snap.intensity = intensity;
            }
            NodeKind::AmbientLight { color, intensity } => {
                snap.r = color[0];
                snap.g = color[1];
                snap.b = color[2];
                snap.intensity = intensity;
            }
            NodeKind::HemisphereLight {
                sky_color,
                ground_color,
                intensity,
            } => {
                snap.r = sky_color[0];
                snap.g = sky_color[1];
                snap.b = sky_color[2];
                snap.aux_a = ground_color[0];
                snap.aux_b = ground_color[1];
                snap.aux_c = ground_color[2];
                snap.intensity = intensity;
            }
            NodeKind::Sky { time } => {
                snap.aux_a = time;
            }
            NodeKind::Character {
                clip_time,
                facing_reversed,
            } => {
                snap.aux_a = clip_time;
                snap.aux_b = if facing_reversed { 1.0 } else { 0.0 };
            }
        }
        snap
    }
}

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    pub max_nodes: usize,
    pub max_events: usize,

    /// Offset (in floats) where node data begins.
    pub node_data_offset: usize,
    /// Offset (in floats) where the globals section begins.
    pub globals_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl FrameLayout {
    pub fn new(max_nodes: usize, max_events: usize) -> Self {
        let node_data_offset = HEADER_FLOATS;
        let globals_offset = node_data_offset + max_nodes * NODE_FLOATS;
        let event_data_offset = globals_offset + GLOBALS_FLOATS;
        let buffer_total_floats = event_data_offset + max_events * SceneEvent::FLOATS;

        Self {
            max_nodes,
            max_events,
            node_data_offset,
            globals_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }
}

/// The frame buffer itself: one contiguous float allocation the page reads
/// zero-copy out of WASM memory.
pub struct FrameBuffer {
    layout: FrameLayout,
    data: Vec<f32>,
    frame_counter: f32,
    node_count: usize,
    event_count: usize,
}

impl FrameBuffer {
    pub fn new(layout: FrameLayout) -> Self {
        let mut data = vec![0.0; layout.buffer_total_floats];
        data[HEADER_MAX_NODES] = layout.max_nodes as f32;
        data[HEADER_MAX_EVENTS] = layout.max_events as f32;
        data[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        Self {
            layout,
            data,
            frame_counter: 0.0,
            node_count: 0,
            event_count: 0,
        }
    }

    pub fn layout(&self) -> &FrameLayout {
        &self.layout
    }

    /// Serialize the scene into the buffer. Nodes and events beyond the
    /// configured capacities are dropped.
    pub fn write(
        &mut self,
        scene: &SceneGraph,
        state: &AnimationState,
        bounds: ModelBounds,
        depth_influence: f32,
        events: &[SceneEvent],
    ) {
        self.frame_counter += 1.0;
        self.data[HEADER_FRAME_COUNTER] = self.frame_counter;

        self.node_count = 0;
        for node in scene.iter() {
            if !node.active {
                continue;
            }
            if self.node_count >= self.layout.max_nodes {
                break;
            }
            let snap = NodeSnapshot::from_node(node);
            let offset = self.layout.node_data_offset + self.node_count * NODE_FLOATS;
            self.data[offset..offset + NODE_FLOATS]
                .copy_from_slice(bytemuck::cast_slice(std::slice::from_ref(&snap)));
            self.node_count += 1;
        }
        self.data[HEADER_NODE_COUNT] = self.node_count as f32;

        let g = self.layout.globals_offset;
        self.data[g + GLOBAL_SKY_TIME] = state.sky_clock;
        self.data[g + GLOBAL_REVEAL_PROGRESS] = state.reveal_progress;
        self.data[g + GLOBAL_MIN_Y] = bounds.min_y;
        self.data[g + GLOBAL_MAX_Y] = bounds.max_y;
        self.data[g + GLOBAL_DEPTH_INFLUENCE] = depth_influence;
        self.data[g + GLOBAL_MODEL_YAW] = state.current_yaw;
        self.data[g + GLOBAL_MODEL_OPACITY] = state.model_opacity;

        self.event_count = events.len().min(self.layout.max_events);
        for (i, event) in events.iter().take(self.event_count).enumerate() {
            let offset = self.layout.event_data_offset + i * SceneEvent::FLOATS;
            self.data[offset] = event.kind;
            self.data[offset + 1] = event.a;
            self.data[offset + 2] = event.b;
            self.data[offset + 3] = event.c;
        }
        self.data[HEADER_EVENT_COUNT] = self.event_count as f32;
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len_floats(&self) -> usize {
        self.data.len()
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn event_count(&self) -> usize {
        self.event_count
    }

    /// Read back one node snapshot (used by tests and debugging).
    pub fn node(&self, index: usize) -> Option<NodeSnapshot> {
        if index >= self.node_count {
            return None;
        }
        let offset = self.layout.node_data_offset + index * NODE_FLOATS;
        let slice = &self.data[offset..offset + NODE_FLOATS];
        let mut snap = NodeSnapshot::default();
        bytemuck::bytes_of_mut(&mut snap).copy_from_slice(bytemuck::cast_slice(slice));
        Some(snap)
    }

    /// Read back one event (used by tests and debugging).
    pub fn event(&self, index: usize) -> Option<SceneEvent> {
        if index >= self.event_count {
            return None;
        }
        let offset = self.layout.event_data_offset + index * SceneEvent::FLOATS;
        let s = &self.data[offset..offset + SceneEvent::FLOATS];
        Some(SceneEvent::new(s[0], s[1], s[2], s[3]))
    }

    pub fn global(&self, field: usize) -> f32 {
        self.data[self.layout.globals_offset + field]
    }
}
