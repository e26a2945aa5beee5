//! Wire layer between the headless scene and the page renderer.

pub mod frame;

pub use frame::{FrameBuffer, FrameLayout, NodeSnapshot};
