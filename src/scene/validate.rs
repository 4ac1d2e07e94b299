use super::{
    SceneDescriptor, ScheduleRecord, VisualType, RECOMMENDED_ANIMATIONS,
    RECOMMENDED_AVATAR_POSITIONS, RECOMMENDED_AVATAR_SIZES, RECOMMENDED_IMAGE_STYLES,
    RECOMMENDED_SCENE_TYPES,
};
use crate::error::{Result, ScheduleError};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

pub const FULL_IMAGE_RATIO_VAR: &str = "SCENE_FULL_IMAGE_RATIO";
pub const RATIO_TOLERANCE_VAR: &str = "SCENE_RATIO_TOLERANCE";
pub const TIME_EPSILON_VAR: &str = "SCENE_TIME_EPSILON";

/// Thresholds used by [`validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    /// Target share of `fullImage` scenes
    pub full_image_ratio: f64,
    /// Allowed drift from the target share before warning
    pub ratio_tolerance: f64,
    /// Slack for timestamp comparisons (seconds)
    pub time_epsilon: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            full_image_ratio: 0.2,
            ratio_tolerance: 0.15,
            time_epsilon: 1e-6,
        }
    }
}

impl ValidationConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from a key lookup, falling back to defaults for
    /// missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            full_image_ratio: read_f64(&lookup, FULL_IMAGE_RATIO_VAR, defaults.full_image_ratio)?,
            ratio_tolerance: read_f64(&lookup, RATIO_TOLERANCE_VAR, defaults.ratio_tolerance)?,
            time_epsilon: read_f64(&lookup, TIME_EPSILON_VAR, defaults.time_epsilon)?,
        };

        if !(0.0..=1.0).contains(&config.full_image_ratio) {
            return Err(ScheduleError::Config(format!(
                "{} must be between 0 and 1, got {}",
                FULL_IMAGE_RATIO_VAR, config.full_image_ratio
            )));
        }
        if config.ratio_tolerance < 0.0 || config.time_epsilon < 0.0 {
            return Err(ScheduleError::Config(format!(
                "{} and {} must not be negative",
                RATIO_TOLERANCE_VAR, TIME_EPSILON_VAR
            )));
        }

        Ok(config)
    }
}

fn read_f64<F>(lookup: &F, key: &str, default: f64) -> Result<f64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => {
            let value: f64 = raw.trim().parse().map_err(|_| {
                ScheduleError::Config(format!("{} is not a number: {:?}", key, raw))
            })?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(ScheduleError::Config(format!("{} must be finite", key)))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub severity: Severity,
    /// Scene the issue belongs to; `None` for schedule-wide issues
    pub scene_id: Option<String>,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scene_id {
            Some(id) => write!(f, "scene {}: {}", id, self.message),
            None => f.write_str(&self.message),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Converts a report with errors into `ScheduleError::Validation`.
    pub fn into_result(self) -> Result<Self> {
        if !self.has_errors() {
            return Ok(self);
        }
        let count = self.errors().count();
        let first = self.errors().next().map(ToString::to_string).unwrap_or_default();
        Err(ScheduleError::Validation(format!(
            "{} error(s), first: {}",
            count, first
        )))
    }

    fn error(&mut self, scene: Option<&SceneDescriptor>, message: impl Into<String>) {
        self.push(Severity::Error, scene, message.into());
    }

    fn warn(&mut self, scene: Option<&SceneDescriptor>, message: impl Into<String>) {
        self.push(Severity::Warning, scene, message.into());
    }

    fn push(&mut self, severity: Severity, scene: Option<&SceneDescriptor>, message: String) {
        self.issues.push(ValidationIssue {
            severity,
            scene_id: scene.map(|s| s.scene_id.clone()),
            message,
        });
    }
}

/// Checks a schedule against the scene data contract.
///
/// Never mutates or rejects the record; callers decide what to do with the
/// report.
pub fn validate(record: &ScheduleRecord, config: &ValidationConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    if record.scenes.is_empty() {
        report.error(None, "schedule has no scenes");
        return report;
    }

    let voiceover = record.voiceover_text.to_lowercase();
    let mut seen_ids = HashSet::new();

    for scene in &record.scenes {
        check_scene(scene, &voiceover, &mut report);

        let id = scene.scene_id.trim();
        if !id.is_empty() && !seen_ids.insert(id) {
            report.error(Some(scene), "duplicate scene_id");
        }
    }

    check_timeline(&record.scenes, config, &mut report);
    check_visual_mix(&record.scenes, config, &mut report);

    debug!(
        "Validated {} scenes: {} issue(s)",
        record.scenes.len(),
        report.issues.len()
    );
    report
}

fn check_scene(scene: &SceneDescriptor, voiceover: &str, report: &mut ValidationReport) {
    if scene.scene_id.trim().is_empty() {
        report.error(Some(scene), "scene_id is empty");
    }
    if scene.kind.trim().is_empty() {
        report.error(Some(scene), "type is empty");
    } else if !RECOMMENDED_SCENE_TYPES.contains(&scene.kind.as_str()) {
        report.warn(Some(scene), format!("unrecognized type {:?}", scene.kind));
    }

    if !scene.start_time.is_finite() || !scene.end_time.is_finite() {
        report.error(Some(scene), "timestamps must be finite");
    } else {
        if scene.start_time < 0.0 {
            report.error(Some(scene), "start_time is negative");
        }
        if scene.end_time <= scene.start_time {
            report.error(
                Some(scene),
                format!(
                    "end_time {} is not after start_time {}",
                    scene.end_time, scene.start_time
                ),
            );
        }
    }

    let segment = scene.script_segment.trim();
    if segment.is_empty() {
        report.warn(Some(scene), "script_segment is empty");
    } else if !voiceover.contains(&segment.to_lowercase()) {
        report.warn(Some(scene), "script_segment does not appear in voiceover_text");
    }

    if !RECOMMENDED_AVATAR_POSITIONS.contains(&scene.avatar.position.as_str()) {
        report.warn(
            Some(scene),
            format!("unrecognized avatar position {:?}", scene.avatar.position),
        );
    }
    if !RECOMMENDED_AVATAR_SIZES.contains(&scene.avatar.size.as_str()) {
        report.warn(
            Some(scene),
            format!("unrecognized avatar size {:?}", scene.avatar.size),
        );
    }

    match &scene.hero_image {
        Some(hero) => {
            if hero.prompt.trim().is_empty() {
                report.error(Some(scene), "hero_image prompt is empty");
            }
            if !RECOMMENDED_IMAGE_STYLES.contains(&hero.style.as_str()) {
                report.warn(Some(scene), format!("unrecognized image style {:?}", hero.style));
            }
            if !RECOMMENDED_ANIMATIONS.contains(&hero.animation.as_str()) {
                report.warn(
                    Some(scene),
                    format!("unrecognized animation {:?}", hero.animation),
                );
            }
        }
        None => {
            if let Some(visual) = scene.visual_type {
                report.error(Some(scene), format!("{} scene has no hero_image", visual));
            }
        }
    }
}

fn check_timeline(scenes: &[SceneDescriptor], config: &ValidationConfig, report: &mut ValidationReport) {
    let eps = config.time_epsilon;

    if let Some(first) = scenes.first() {
        if first.start_time.is_finite() && first.start_time.abs() > eps {
            report.warn(
                Some(first),
                format!("first scene starts at {} instead of 0", first.start_time),
            );
        }
    }

    for pair in scenes.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if !prev.end_time.is_finite() || !next.start_time.is_finite() {
            continue;
        }
        if next.start_time < prev.end_time - eps {
            report.error(
                Some(next),
                format!(
                    "overlaps scene {} ({} < {})",
                    prev.scene_id, next.start_time, prev.end_time
                ),
            );
        } else if next.start_time > prev.end_time + eps {
            report.warn(
                Some(next),
                format!(
                    "gap of {:.3}s after scene {}",
                    next.start_time - prev.end_time,
                    prev.scene_id
                ),
            );
        }
    }
}

fn check_visual_mix(scenes: &[SceneDescriptor], config: &ValidationConfig, report: &mut ValidationReport) {
    let declared: Vec<VisualType> = scenes.iter().filter_map(|s| s.visual_type).collect();
    if declared.is_empty() {
        return;
    }

    let full = declared.iter().filter(|v| **v == VisualType::FullImage).count();
    let ratio = full as f64 / declared.len() as f64;
    if (ratio - config.full_image_ratio).abs() > config.ratio_tolerance {
        report.warn(
            None,
            format!(
                "fullImage share is {:.0}% ({} of {}), target is {:.0}%",
                ratio * 100.0,
                full,
                declared.len(),
                config.full_image_ratio * 100.0
            ),
        );
    }
}
