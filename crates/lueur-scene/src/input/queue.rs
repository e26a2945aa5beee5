/// Input event types the scene understands.
/// Raw DOM values — no scene-specific semantics.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Pointer moved; coordinates normalized to [-1, 1] over the viewport.
    PointerMove { nx: f32, ny: f32 },
    /// Device orientation sample in degrees (front-back tilt, left-right tilt).
    Orientation { beta: f32, gamma: f32 },
    /// Outcome of the one-time device-orientation permission request.
    OrientationPermission { granted: bool },
    /// Pointer entered the title element.
    HoverEnter,
    /// Pointer left the title element.
    HoverLeave,
    /// Viewport was resized.
    Resize { width: f32, height: f32 },
    /// The scroll-indicator arrow was clicked.
    ScrollClick,
    /// The music toggle button was clicked.
    MusicToggle,
    /// The volume slider moved; value on the 0–100 scale.
    MusicVolume { volume: f32 },
    /// Manual lantern override from the host: when enabled, the offset drives
    /// the lantern position directly instead of the patrol interpolation.
    LanternOverride { enabled: bool, x: f32, y: f32, z: f32 },
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove { nx: 0.5, ny: -0.25 });
        q.push(InputEvent::HoverEnter);
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn iter_does_not_consume() {
        let mut q = InputQueue::new();
        q.push(InputEvent::MusicVolume { volume: 70.0 });
        assert_eq!(q.iter().count(), 1);
        assert_eq!(q.len(), 1);
    }
}
