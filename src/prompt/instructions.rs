use crate::error::{Result, ScheduleError};
use crate::scene::{example_schedule, ScheduleRecord};
use tracing::{debug, info};

/// Instructions handed to the scene-generation model.
pub const SCENE_INSTRUCTIONS: &str = r#"You are a helpful assistant that generates scenes for a video project.
We are going to create a short-form vertical video using an Avatar, Hero Images and a Voiceover Text.
Here are the instructions for the scenes:
- The video consists of the Avatar, Hero Images and B-Roll Images.
- There are 2 main visual types:
  1. halfHalf: the avatar fills the bottom half of the screen and hero images fill the top half.
  2. fullImage: a single image fills the whole screen.
- Pick the visual type from the importance of the picture, the voiceover text and the scene.
  Overall aim for roughly 20 percent fullImage and 80 percent halfHalf.
- A scene may show several hero images one after another.
- Scenes play in order. Each scene starts exactly where the previous one ends, and end_time is always after start_time (seconds).
- script_segment is the exact slice of the voiceover spoken during the scene.
- Every hero_image needs a descriptive prompt, a style (e.g. cinematic) and an animation (e.g. ken-burns-zoom-in, slow-zoom-out)."#;

/// Renders the full prompt: instructions, one example scene and, when
/// given, the voiceover to decompose.
pub fn build_prompt(voiceover: Option<&str>) -> Result<String> {
    let example = example_schedule();
    let example_scene = serde_json::to_string_pretty(&example.scenes[0])?;

    let mut prompt = format!(
        "{}\n\nExample scene:\n{}\n\nReturn a single JSON object with the keys voiceover_text, music_prompt and scenes. Return the JSON only, no other text.",
        SCENE_INSTRUCTIONS, example_scene
    );

    if let Some(text) = voiceover.map(str::trim).filter(|t| !t.is_empty()) {
        prompt.push_str("\n\nVoiceover text:\n");
        prompt.push_str(text);
    }

    debug!("Built prompt of {} characters", prompt.len());
    Ok(prompt)
}

/// Parses a model reply into a schedule. Anything around the outermost
/// JSON object (a Markdown fence, a sentence of prose) is ignored.
pub fn parse_schedule_reply(reply: &str) -> Result<ScheduleRecord> {
    let json_text = match (reply.find('{'), reply.rfind('}')) {
        (Some(start), Some(end)) if start < end => &reply[start..=end],
        _ => return Err(ScheduleError::Parse("reply contains no JSON object".to_string())),
    };

    let record: ScheduleRecord = serde_json::from_str(json_text)
        .map_err(|e| ScheduleError::Parse(format!("Failed to parse schedule JSON: {}", e)))?;

    info!("Parsed schedule with {} scenes", record.scenes.len());
    Ok(record)
}
