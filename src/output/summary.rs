use crate::scene::{ScheduleRecord, VisualType};

/// Per-scene timing rows plus totals, one line each.
pub fn timeline_lines(record: &ScheduleRecord) -> Vec<String> {
    let mut lines: Vec<String> = record
        .scenes
        .iter()
        .enumerate()
        .map(|(idx, scene)| {
            let visual = scene
                .visual_type
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string());
            format!(
                "#{} [{}] {:<10} {:>7.2}s -> {:>7.2}s ({:.2}s) {}",
                idx + 1,
                scene.scene_id,
                scene.kind,
                scene.start_time,
                scene.end_time,
                scene.duration(),
                visual
            )
        })
        .collect();

    let total = match (record.scenes.first(), record.scenes.last()) {
        (Some(first), Some(last)) => last.end_time - first.start_time,
        _ => 0.0,
    };
    lines.push(format!("{} scenes, {:.2}s total", record.scenes.len(), total));
    lines
}

/// Counts of scenes declaring each visual type: `(halfHalf, fullImage)`.
pub fn visual_mix(record: &ScheduleRecord) -> (usize, usize) {
    record
        .scenes
        .iter()
        .filter_map(|s| s.visual_type)
        .fold((0, 0), |(half, full), v| match v {
            VisualType::HalfHalf => (half + 1, full),
            VisualType::FullImage => (half, full + 1),
        })
}
