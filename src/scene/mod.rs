mod example;
mod validate;

pub use example::{example_schedule, Bindings, SCHEDULE_BINDING};
pub use validate::{validate, ValidationConfig};

use serde::{Deserialize, Serialize};

/// Recommended narrative roles for `SceneDescriptor::kind`.
pub const RECOMMENDED_SCENE_TYPES: &[&str] = &[
    "hook", "problem", "agitation", "solution", "proof", "story", "list-item", "cta", "outro",
];

/// Recommended avatar anchor positions.
pub const RECOMMENDED_AVATAR_POSITIONS: &[&str] = &[
    "bottom-right",
    "bottom-left",
    "bottom-center",
    "top-right",
    "top-left",
    "center",
];

/// Recommended avatar sizes.
pub const RECOMMENDED_AVATAR_SIZES: &[&str] = &["small", "medium", "large", "half"];

/// Recommended hero image styles.
pub const RECOMMENDED_IMAGE_STYLES: &[&str] = &[
    "cinematic",
    "photorealistic",
    "illustration",
    "documentary",
    "minimal",
];

/// Recommended hero image animations.
pub const RECOMMENDED_ANIMATIONS: &[&str] = &[
    "ken-burns-zoom-in",
    "ken-burns-zoom-out",
    "slow-zoom-in",
    "slow-zoom-out",
    "pan-left",
    "pan-right",
    "static",
];

/// A full scene schedule: narration plus the ordered scenes that cover it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// Full narration text
    pub voiceover_text: String,
    /// Background music prompt, empty when no music is wanted
    #[serde(default)]
    pub music_prompt: String,
    /// Scenes in playback order
    pub scenes: Vec<SceneDescriptor>,
}

/// One timed segment of the video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescriptor {
    /// Scene identifier, e.g. "1000"
    pub scene_id: String,
    /// Narrative role such as `hook` or `problem`
    #[serde(rename = "type")]
    pub kind: String,
    /// Slice of the voiceover spoken during this scene
    pub script_segment: String,
    /// Start timestamp (seconds)
    pub start_time: f64,
    /// End timestamp (seconds)
    pub end_time: f64,
    /// Presenter overlay
    pub avatar: Avatar,
    /// Layout mode, when the scene declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_type: Option<VisualType>,
    /// Background image, present for `halfHalf` and `fullImage` scenes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<HeroImage>,
}

impl SceneDescriptor {
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    pub visible: bool,
    pub position: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroImage {
    /// Image generation prompt
    pub prompt: String,
    pub style: String,
    pub animation: String,
}

/// Screen layout of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisualType {
    /// Avatar on the bottom half, hero image on top
    HalfHalf,
    /// Hero image fills the frame
    FullImage,
}

impl std::fmt::Display for VisualType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VisualType::HalfHalf => f.write_str("halfHalf"),
            VisualType::FullImage => f.write_str("fullImage"),
        }
    }
}
