//! Embedded WGSL shader sources and their uniform layouts.
//!
//! The sources are compiled by the host's WebGPU device; the uniform structs
//! here are the byte-exact layouts the driver writes each frame.

use bytemuck::{Pod, Zeroable};

use crate::api::config::SkyMode;

pub const EDGE_REVEAL_WGSL: &str = include_str!("edge_reveal.wgsl");
pub const SKY_NIGHT_WGSL: &str = include_str!("sky_night.wgsl");
pub const SKY_GRADIENT_WGSL: &str = include_str!("sky_gradient.wgsl");

/// Pick the sky shader source for a scene build.
pub fn sky_source(mode: &SkyMode) -> &'static str {
    match mode {
        SkyMode::Starfield => SKY_NIGHT_WGSL,
        SkyMode::Gradient { .. } => SKY_GRADIENT_WGSL,
    }
}

/// Uniform block of the edge-reveal shader.
/// Padded to 32 bytes for WebGPU uniform-buffer alignment.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct EdgeUniforms {
    pub progress: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub depth_influence: f32,
    pub opacity: f32,
    _pad: [f32; 3],
}

impl EdgeUniforms {
    pub fn new(progress: f32, min_y: f32, max_y: f32, depth_influence: f32, opacity: f32) -> Self {
        Self {
            progress,
            min_y,
            max_y,
            depth_influence,
            opacity,
            _pad: [0.0; 3],
        }
    }
}

/// Uniform block of the starfield sky shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SkyUniforms {
    pub time: f32,
    _pad: [f32; 3],
}

impl SkyUniforms {
    pub fn new(time: f32) -> Self {
        Self { time, _pad: [0.0; 3] }
    }
}

/// Uniform block of the gradient sky shader (vec4-aligned colors).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GradientUniforms {
    pub top_color: [f32; 4],
    pub bottom_color: [f32; 4],
}

impl GradientUniforms {
    pub fn new(top: [f32; 3], bottom: [f32; 3]) -> Self {
        Self {
            top_color: [top[0], top[1], top[2], 1.0],
            bottom_color: [bottom[0], bottom[1], bottom[2], 1.0],
        }
    }
}
