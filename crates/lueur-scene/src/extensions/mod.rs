// Extensions — pure-math helpers decoupled from the scene graph.

pub mod interp;

pub use interp::{exp_approach, lerp, lerp_vec3, smoothstep};
