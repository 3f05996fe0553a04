use std::collections::BTreeMap;

use crate::config::LayoutConfig;

use super::HeaderPill;

const ROOT_LEVEL_TITLE: &str = "prerequisite root level";
const PILL_MIN_WIDTH: f64 = 92.0;
const PILL_CHAR_WIDTH: f64 = 8.0;
const PILL_PADDING: f64 = 18.0;

pub(super) fn column_center_x(idx: usize, config: &LayoutConfig) -> f64 {
    config.left_padding + idx as f64 * config.column_gap
}

pub(super) fn level_title(level: u32, count: usize) -> String {
    if level == 0 {
        format!("{ROOT_LEVEL_TITLE} · {count}")
    } else {
        format!("prerequisite level {level} · {count}")
    }
}

/// Estimated rendered width of a pill; a sizing heuristic, not a text metric.
pub(super) fn pill_width(title: &str) -> f64 {
    let chars = title.chars().count() as f64;
    (chars * PILL_CHAR_WIDTH + PILL_PADDING).max(PILL_MIN_WIDTH)
}

pub(super) fn plan_columns(
    level_values: &[u32],
    level_counts: &BTreeMap<u32, usize>,
    config: &LayoutConfig,
) -> Vec<HeaderPill> {
    level_values
        .iter()
        .enumerate()
        .map(|(idx, &level)| {
            let count = level_counts.get(&level).copied().unwrap_or(0);
            let title = level_title(level, count);
            let width = pill_width(&title);
            let center_x = column_center_x(idx, config);
            HeaderPill {
                level,
                idx,
                title,
                width,
                center_x,
                x: center_x - width / 2.0,
            }
        })
        .collect()
}
