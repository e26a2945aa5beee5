// extensions/interp.rs
//
// Pure interpolation functions for animation smoothing.
// No dependencies on Node/SceneGraph — just math.

use glam::Vec3;

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec3 values.
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// One step of an exponential low-pass filter toward `target`.
///
/// For gain in (0, 1) the result approaches the target asymptotically and
/// never overshoots; the remaining distance shrinks by `1 - gain` each step.
#[inline]
pub fn exp_approach(current: f32, target: f32, gain: f32) -> f32 {
    current + (target - current) * gain
}

/// Hermite smooth threshold, matching WGSL `smoothstep(e0, e1, x)`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
