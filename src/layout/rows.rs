use std::collections::BTreeMap;

use crate::config::LayoutConfig;
use crate::ir::KnowledgeItem;

use super::NodePosition;
use super::columns::column_center_x;
use super::levels::LevelBuckets;

const BASE_SYMBOL_SIZE: f64 = 24.0;
const IMPORTANCE_SIZE_SCALE: f64 = 18.0;
const MILESTONE_SIZE_BONUS: f64 = 6.0;

/// Rendered diameter of a node, in pixels.
pub fn node_symbol_size(item: &KnowledgeItem) -> f64 {
    let base = BASE_SYMBOL_SIZE + round_half_up(item.importance() * IMPORTANCE_SIZE_SCALE);
    if item.milestone {
        base + MILESTONE_SIZE_BONUS
    } else {
        base
    }
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Vertical extent available to node centers.
#[derive(Debug, Clone, Copy)]
pub(super) struct NodeArea {
    pub top: f64,
    pub bottom: f64,
}

impl NodeArea {
    pub fn new(canvas_height: f64, config: &LayoutConfig) -> Self {
        Self {
            top: config.top_padding,
            bottom: canvas_height - config.bottom_padding,
        }
    }

    fn center_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }
}

/// First-row y of a column of `count` nodes.
///
/// When the column does not fit, keeping the first node inside the area wins.
fn column_start_y(
    area: NodeArea,
    count: usize,
    first_size: f64,
    last_size: f64,
    row_gap: f64,
) -> f64 {
    let row_span = count.saturating_sub(1) as f64 * row_gap;
    let ideal = area.center_y() - row_span / 2.0 - (last_size - first_size) / 4.0;
    let min_y = area.top + first_size / 2.0;
    let max_y = area.bottom - last_size / 2.0 - row_span;
    ideal.min(max_y).max(min_y)
}

pub(super) fn place_rows(
    buckets: &LevelBuckets<'_>,
    area: NodeArea,
    config: &LayoutConfig,
) -> BTreeMap<String, NodePosition> {
    let mut positions = BTreeMap::new();

    for (level_idx, level) in buckets.values.iter().enumerate() {
        let Some(column) = buckets.items.get(level) else {
            continue;
        };
        let (Some(first), Some(last)) = (column.first(), column.last()) else {
            continue;
        };
        let start_y = column_start_y(
            area,
            column.len(),
            node_symbol_size(first),
            node_symbol_size(last),
            config.row_gap,
        );
        let x = column_center_x(level_idx, config);

        for (row_idx, item) in column.iter().enumerate() {
            let Some(id) = item.node_id() else {
                tracing::trace!(level, row_idx, "skipping item with blank keypoint_id");
                continue;
            };
            let position = NodePosition {
                level: *level,
                level_idx,
                row_idx,
                x,
                y: start_y + row_idx as f64 * config.row_gap,
            };
            if positions.insert(id.to_string(), position).is_some() {
                tracing::debug!(id, "duplicate keypoint_id, keeping the later item");
            }
        }
    }

    positions
}
