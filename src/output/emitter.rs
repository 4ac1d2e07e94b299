use crate::error::Result;
use crate::scene::Bindings;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub struct Emitter {
    pretty: bool,
}

impl Emitter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serializes the schedule bound to `name`.
    ///
    /// Fails with `UndefinedReference` when `name` is not a defined binding.
    pub fn render(&self, name: &str, bindings: &Bindings) -> Result<String> {
        let record = bindings.resolve(name)?;
        let mut text = if self.pretty {
            serde_json::to_string_pretty(record)?
        } else {
            serde_json::to_string(record)?
        };
        text.push('\n');
        Ok(text)
    }

    pub fn emit<W: Write>(&self, name: &str, bindings: &Bindings, writer: &mut W) -> Result<()> {
        let text = self.render(name, bindings)?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub async fn emit_to_file(&self, name: &str, bindings: &Bindings, path: &Path) -> Result<()> {
        let text = self.render(name, bindings)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, text).await?;
        info!("Schedule `{}` written to: {}", name, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;
    use crate::scene::{example_schedule, ScheduleRecord, SCHEDULE_BINDING};
    use serde_json::{json, Value};

    #[test]
    fn emitted_example_parses_back_to_the_literal() {
        let bindings = Bindings::new(example_schedule());
        let mut out = Vec::new();
        Emitter::new(true)
            .emit(SCHEDULE_BINDING, &bindings, &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));
        let parsed: ScheduleRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, example_schedule());
        assert_eq!(parsed.scenes.len(), 2);
    }

    #[test]
    fn emitted_example_matches_source_values() {
        let bindings = Bindings::new(example_schedule());
        let text = Emitter::new(true).render(SCHEDULE_BINDING, &bindings).unwrap();
        let emitted: Value = serde_json::from_str(&text).unwrap();

        let expected = json!({
            "voiceover_text": "this best 11 of Real Madrid players who left the club to become world class is surprising starting in goal Santiago karez the Spaniard left Madrid twice then became a Valencia Legend left back Teo Hernandez deemed Surplus to requirement at Madrid and is now Milan's star fullback left Center back Walter Samuel he signed for 25 mil but departed for inter The Following season right center back forino now I know he's not a CB but he's played there previously and I had to include it right back Ashraf hakeim he departed for 43 mil decent money but they still missed out big time CDM the obvious pick is Claude Mele but I think he was world class before Madrid sold to Chelsea so instead estan can be Uso my two attacking mids pure class Wesley Snider and Martin odard right wing Arian Robin this guy was always destined for greatness by and struck gold left wing Juan Mata yes he's more of a 10 but played on the left during his casaes and Striker Samuel letto he left Madrid and achieved greatness with Barca and Inter what a team",
            "music_prompt": "",
            "scenes": [
                {
                    "scene_id": "1000",
                    "type": "hook",
                    "script_segment": "Did you know that 90% of startups fail?",
                    "start_time": 0.0,
                    "end_time": 5.2,
                    "avatar": {
                        "visible": true,
                        "position": "bottom-right",
                        "size": "small"
                    },
                    "hero_image": {
                        "prompt": "Dramatic startup failure, office with empty desks",
                        "style": "cinematic",
                        "animation": "ken-burns-zoom-in"
                    }
                },
                {
                    "scene_id": "2000",
                    "type": "problem",
                    "script_segment": "The main reason? They run out of cash.",
                    "start_time": 5.2,
                    "end_time": 9.8,
                    "avatar": {
                        "visible": true,
                        "position": "bottom-right",
                        "size": "small"
                    },
                    "hero_image": {
                        "prompt": "Empty wallet, burning money, financial crisis",
                        "style": "cinematic",
                        "animation": "slow-zoom-out"
                    }
                }
            ]
        });

        assert_eq!(emitted, expected);
    }

    #[test]
    fn compact_output_is_single_line() {
        let bindings = Bindings::new(example_schedule());
        let text = Emitter::new(false).render(SCHEDULE_BINDING, &bindings).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn emitting_undefined_name_writes_nothing() {
        let bindings = Bindings::new(example_schedule());
        let mut out = Vec::new();
        let err = Emitter::new(true)
            .emit("scenes", &bindings, &mut out)
            .unwrap_err();

        assert!(matches!(err, ScheduleError::UndefinedReference(ref n) if n == "scenes"));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn writes_schedule_file() {
        let dir = std::env::temp_dir().join(format!("scene-schedule-emit-{}", std::process::id()));
        let path = dir.join("nested").join("schedule.json");
        let bindings = Bindings::new(example_schedule());

        Emitter::new(true)
            .emit_to_file(SCHEDULE_BINDING, &bindings, &path)
            .await
            .unwrap();

        let text = tokio::fs::read_to_string(&path).await.unwrap();
        let parsed: ScheduleRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, example_schedule());

        tokio::fs::remove_dir_all(&dir).await.ok();
    }
}
