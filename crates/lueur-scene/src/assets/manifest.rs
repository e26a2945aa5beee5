use serde::{Deserialize, Serialize};

/// Asset manifest for one scene build.
/// Loaded from a JSON file at runtime by the host page, which then fetches
/// each asset and streams progress callbacks back into the runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneManifest {
    /// The primary model (binary scene-graph format).
    pub model: AssetDescriptor,
    /// Optional companion character with an embedded walk cycle.
    #[serde(default)]
    pub companion: Option<CompanionDescriptor>,
    /// Optional background audio track.
    #[serde(default)]
    pub audio: Option<AssetDescriptor>,
}

/// A single fetchable asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDescriptor {
    /// Relative path to the asset file.
    pub path: String,
}

/// The companion asset plus its clip metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanionDescriptor {
    /// Relative path to the asset file.
    pub path: String,
    /// Duration of the embedded walk cycle in seconds.
    #[serde(default = "default_clip_duration")]
    pub walk_clip_duration: f32,
}

fn default_clip_duration() -> f32 {
    1.0
}

impl SceneManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether a secondary asset participates in the loading percentage.
    pub fn has_secondary(&self) -> bool {
        self.companion.is_some()
    }
}
