use super::{Avatar, HeroImage, SceneDescriptor, ScheduleRecord};
use crate::error::{Result, ScheduleError};

/// Name under which the example schedule is bound.
pub const SCHEDULE_BINDING: &str = "scenes_data";

const EXAMPLE_VOICEOVER: &str = "this best 11 of Real Madrid players who left the club to become world class is surprising starting in goal Santiago karez the Spaniard left Madrid twice then became a Valencia Legend left back Teo Hernandez deemed Surplus to requirement at Madrid and is now Milan's star fullback left Center back Walter Samuel he signed for 25 mil but departed for inter The Following season right center back forino now I know he's not a CB but he's played there previously and I had to include it right back Ashraf hakeim he departed for 43 mil decent money but they still missed out big time CDM the obvious pick is Claude Mele but I think he was world class before Madrid sold to Chelsea so instead estan can be Uso my two attacking mids pure class Wesley Snider and Martin odard right wing Arian Robin this guy was always destined for greatness by and struck gold left wing Juan Mata yes he's more of a 10 but played on the left during his casaes and Striker Samuel letto he left Madrid and achieved greatness with Barca and Inter what a team";

/// The worked two-scene example.
pub fn example_schedule() -> ScheduleRecord {
    ScheduleRecord {
        voiceover_text: EXAMPLE_VOICEOVER.to_string(),
        music_prompt: String::new(),
        scenes: vec![
            SceneDescriptor {
                scene_id: "1000".to_string(),
                kind: "hook".to_string(),
                script_segment: "Did you know that 90% of startups fail?".to_string(),
                start_time: 0.0,
                end_time: 5.2,
                avatar: corner_avatar(),
                visual_type: None,
                hero_image: Some(HeroImage {
                    prompt: "Dramatic startup failure, office with empty desks".to_string(),
                    style: "cinematic".to_string(),
                    animation: "ken-burns-zoom-in".to_string(),
                }),
            },
            SceneDescriptor {
                scene_id: "2000".to_string(),
                kind: "problem".to_string(),
                script_segment: "The main reason? They run out of cash.".to_string(),
                start_time: 5.2,
                end_time: 9.8,
                avatar: corner_avatar(),
                visual_type: None,
                hero_image: Some(HeroImage {
                    prompt: "Empty wallet, burning money, financial crisis".to_string(),
                    style: "cinematic".to_string(),
                    animation: "slow-zoom-out".to_string(),
                }),
            },
        ],
    }
}

fn corner_avatar() -> Avatar {
    Avatar {
        visible: true,
        position: "bottom-right".to_string(),
        size: "small".to_string(),
    }
}

/// Named schedules available for emission.
#[derive(Debug, Clone)]
pub struct Bindings {
    schedule: ScheduleRecord,
}

impl Bindings {
    pub fn new(schedule: ScheduleRecord) -> Self {
        Self { schedule }
    }

    /// Looks a binding up by name. Only `scenes_data` is defined.
    pub fn resolve(&self, name: &str) -> Result<&ScheduleRecord> {
        if name == SCHEDULE_BINDING {
            Ok(&self.schedule)
        } else {
            Err(ScheduleError::UndefinedReference(name.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_has_two_ordered_contiguous_scenes() {
        let record = example_schedule();

        assert_eq!(record.scenes.len(), 2);
        assert_eq!(record.scenes[0].scene_id, "1000");
        assert_eq!(record.scenes[1].scene_id, "2000");
        assert_eq!(record.scenes[1].start_time, record.scenes[0].end_time);
        for scene in &record.scenes {
            assert!(scene.end_time > scene.start_time);
            assert!(!scene.scene_id.is_empty());
            assert!(!scene.kind.is_empty());
            let hero = scene.hero_image.as_ref().unwrap();
            assert!(!hero.prompt.is_empty());
        }
    }

    #[test]
    fn example_field_values_match_literal() {
        let record = example_schedule();
        assert!(record.voiceover_text.starts_with("this best 11 of Real Madrid players"));
        assert!(record.voiceover_text.ends_with("what a team"));
        assert!(record.music_prompt.is_empty());

        let hook = &record.scenes[0];
        assert_eq!(hook.kind, "hook");
        assert_eq!(hook.end_time, 5.2);
        assert_eq!(hook.avatar.position, "bottom-right");
        assert_eq!(hook.hero_image.as_ref().unwrap().animation, "ken-burns-zoom-in");

        let problem = &record.scenes[1];
        assert_eq!(problem.kind, "problem");
        assert_eq!(problem.script_segment, "The main reason? They run out of cash.");
        assert_eq!(problem.end_time, 9.8);
        assert_eq!(problem.hero_image.as_ref().unwrap().animation, "slow-zoom-out");
    }

    #[test]
    fn only_scenes_data_resolves() {
        let bindings = Bindings::new(example_schedule());

        assert!(bindings.resolve("scenes_data").is_ok());
        match bindings.resolve("scenes") {
            Err(ScheduleError::UndefinedReference(name)) => assert_eq!(name, "scenes"),
            other => panic!("expected undefined reference, got {:?}", other),
        }
    }
}
