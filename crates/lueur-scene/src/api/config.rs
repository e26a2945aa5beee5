use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Full configuration for one scene build.
///
/// The landing page historically shipped three near-identical copies of the
/// scene script differing only in constants. All of those knobs live here
/// instead, so one driver serves every variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Camera pose.
    pub camera: CameraConfig,
    /// Uniform scale applied to the loaded model group.
    pub model_scale: f32,
    /// Static light rig intensities.
    pub lights: LightRigConfig,
    /// Patrolling lantern light. `None` disables the lantern entirely.
    pub lantern: Option<LanternConfig>,
    /// Companion character walking alongside the lantern.
    pub companion: Option<CompanionConfig>,
    /// Background music. `None` builds the scene without the music widget.
    pub audio: Option<AudioConfig>,
    /// Which sky backdrop shader is active.
    pub sky: SkyMode,
    /// Edge-reveal sweep parameters.
    pub reveal: RevealConfig,
    /// Yaw/opacity smoothing gains and the hover-dim target.
    pub swivel: SwivelConfig,
    /// Pointer/tilt input mapping.
    pub input: InputConfig,
    /// Maximum node snapshots in the frame buffer.
    pub max_nodes: usize,
    /// Maximum scene events per frame.
    pub max_events: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            model_scale: 0.85,
            lights: LightRigConfig::default(),
            lantern: Some(LanternConfig::default()),
            companion: None,
            audio: None,
            sky: SkyMode::Starfield,
            reveal: RevealConfig::default(),
            swivel: SwivelConfig::default(),
            input: InputConfig::default(),
            max_nodes: 256,
            max_events: 32,
        }
    }
}

impl SceneConfig {
    /// Parse a scene variant from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Camera position and look-at target. Consumed host-side: the page builds
/// its view/projection matrices from these values; the runtime only carries
/// them with the rest of the variant constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(-9.5, -12.1, 15.7),
            target: Vec3::new(-2.0, -10.0, 0.0),
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Intensities for the static light rig: one ambient light, three
/// directional fills, and a hemisphere light for tone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightRigConfig {
    pub ambient: f32,
    pub directional: f32,
    pub hemisphere: f32,
    /// Hemisphere ground color (sky color is white).
    pub ground_color: [f32; 3],
}

impl Default for LightRigConfig {
    fn default() -> Self {
        Self {
            ambient: 0.5,
            directional: 0.5,
            hemisphere: 0.4,
            ground_color: [0.267, 0.267, 0.267],
        }
    }
}

/// Lantern patrol path, light parameters, and flame flicker shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LanternConfig {
    pub start: Vec3,
    pub end: Vec3,
    /// Progress advanced per tick. 0.001 crosses the path in ~1000 frames.
    pub speed: f32,
    pub color: [f32; 3],
    pub base_intensity: f32,
    pub flicker_amplitude: f32,
    /// Radians added to the flame clock per tick.
    pub flicker_rate: f32,
    /// Maximum lighting distance.
    pub radius: f32,
    /// Quadratic attenuation exponent.
    pub decay: f32,
}

impl Default for LanternConfig {
    fn default() -> Self {
        Self {
            start: Vec3::new(-20.0, -12.1, -5.9),
            end: Vec3::new(20.0, -12.1, -5.9),
            speed: 0.001,
            color: [1.0, 0.667, 0.0],
            base_intensity: 2.0,
            flicker_amplitude: 0.5,
            flicker_rate: 0.05,
            radius: 17.6,
            decay: 2.0,
        }
    }
}

/// Companion character that carries the lantern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    /// Offset from the lantern position.
    pub offset: Vec3,
    /// Duration of the embedded walk cycle in seconds.
    pub walk_clip_duration: f32,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, -0.6, 0.0),
            walk_clip_duration: 1.0,
        }
    }
}

/// Background music widget defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Relative path to the compressed audio asset. Consumed host-side by the
    /// fetch layer; the runtime only tracks playback state.
    pub path: String,
    /// Initial volume on the 0–100 slider scale.
    pub default_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            path: "ambiance.mp3".to_string(),
            default_volume: 50.0,
        }
    }
}

/// Sky backdrop variant. Exactly one is active per scene build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkyMode {
    /// Time-driven procedural starfield with twinkle.
    Starfield,
    /// Static diagonal two-color gradient; ignores the sky clock.
    Gradient {
        top: [f32; 3],
        bottom: [f32; 3],
    },
}

/// Edge-reveal sweep parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Progress added per tick once the sweep has started.
    pub step: f32,
    /// Seconds between model load and the sweep starting.
    pub start_delay: f32,
    /// Half-width of the smoothstep fade band.
    pub transition_width: f32,
    /// Scales how much view depth shifts the fade boundary.
    pub depth_influence: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            step: 0.0025,
            start_delay: 0.4,
            transition_width: 0.3,
            depth_influence: 1.0,
        }
    }
}

/// Exponential smoothing gains for yaw and opacity, plus the hover-dim target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwivelConfig {
    /// Low-pass gain for yaw. Must stay in (0, 1) to avoid overshoot.
    pub yaw_gain: f32,
    /// Low-pass gain for model opacity.
    pub opacity_gain: f32,
    /// Opacity target while the title is hovered.
    pub dimmed_opacity: f32,
}

impl Default for SwivelConfig {
    fn default() -> Self {
        Self {
            yaw_gain: 0.05,
            opacity_gain: 0.1,
            dimmed_opacity: 0.3,
        }
    }
}

/// Pointer/tilt input mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Hard bound on the target yaw, in degrees, applied to both modes.
    pub max_yaw_degrees: f32,
    /// Radians of target yaw per unit of normalized pointer offset.
    pub pointer_gain: f32,
    /// Radians of target yaw at full 90° device tilt.
    pub tilt_gain: f32,
    /// Viewport width at or below which tilt input is selected.
    pub mobile_breakpoint: f32,
}

impl InputConfig {
    /// The yaw bound in radians.
    pub fn max_yaw(&self) -> f32 {
        self.max_yaw_degrees.to_radians()
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_yaw_degrees: 10.0,
            pointer_gain: 0.02,
            tilt_gain: 0.5,
            mobile_breakpoint: 768.0,
        }
    }
}
