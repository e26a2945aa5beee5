use crate::api::config::InputConfig;
use crate::input::queue::InputEvent;

/// Which input source currently drives the target yaw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Desktop: pointer movement over the viewport.
    Pointer,
    /// Mobile: device-orientation tilt.
    Tilt,
}

/// State of the device-orientation permission handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TiltPermission {
    /// Platform did not require a prompt; the listener is registered.
    NotRequired,
    Granted,
    Denied,
}

/// Translates raw pointer/orientation input into a bounded target yaw.
///
/// The mode is picked from the viewport width and re-evaluated on every
/// resize, so crossing the mobile breakpoint switches input sources live
/// instead of freezing the choice made at startup. Events from the inactive
/// mode are ignored.
pub struct InputAdapter {
    cfg: InputConfig,
    mode: InputMode,
    permission: TiltPermission,
    target_yaw: f32,
}

impl InputAdapter {
    pub fn new(cfg: InputConfig, viewport_width: f32) -> Self {
        let mode = Self::mode_for_width(&cfg, viewport_width);
        Self {
            cfg,
            mode,
            permission: TiltPermission::NotRequired,
            target_yaw: 0.0,
        }
    }

    fn mode_for_width(cfg: &InputConfig, width: f32) -> InputMode {
        if width <= cfg.mobile_breakpoint {
            InputMode::Tilt
        } else {
            InputMode::Pointer
        }
    }

    /// The currently selected input mode.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// The bounded yaw target, in radians. Always within ±max_yaw.
    pub fn target_yaw(&self) -> f32 {
        self.target_yaw
    }

    /// Re-evaluate the input mode against the mobile breakpoint.
    pub fn on_resize(&mut self, width: f32) {
        let next = Self::mode_for_width(&self.cfg, width);
        if next != self.mode {
            log::info!("input mode switched to {:?} at width {width}", next);
            self.mode = next;
        }
    }

    /// Feed one raw input event. Returns true if the event was consumed.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        let bound = self.cfg.max_yaw();
        match *event {
            InputEvent::PointerMove { nx, .. } => {
                if self.mode != InputMode::Pointer {
                    return false;
                }
                self.target_yaw = (-nx * self.cfg.pointer_gain).clamp(-bound, bound);
                true
            }
            InputEvent::Orientation { gamma, .. } => {
                if self.mode != InputMode::Tilt || self.permission == TiltPermission::Denied {
                    return false;
                }
                self.target_yaw = (gamma / 90.0 * self.cfg.tilt_gain).clamp(-bound, bound);
                true
            }
            InputEvent::OrientationPermission { granted } => {
                self.permission = if granted {
                    TiltPermission::Granted
                } else {
                    log::warn!("device orientation permission denied; tilt input disabled");
                    TiltPermission::Denied
                };
                true
            }
            InputEvent::Resize { width, .. } => {
                self.on_resize(width);
                // Not consumed: the scene also reacts to resizes.
                false
            }
            _ => false,
        }
    }
}
