mod columns;
mod curves;
mod levels;
mod rows;
pub(crate) mod types;
pub use curves::CURVENESS_LIMIT;
pub use rows::node_symbol_size;
pub use types::*;
use columns::*;
use curves::*;
use levels::*;
use rows::*;

use crate::config::LayoutConfig;
use crate::ir::{Edge, KnowledgeItem};

/// Extra room below the canvas inside the scroll viewport.
const VIEWPORT_SLACK: u32 = 16;

/// Lays out a learning path with the default geometry.
pub fn build_layout(items: &[KnowledgeItem], edges: &[Edge]) -> Layout {
    compute_layout(items, edges, &LayoutConfig::DEFAULT)
}

pub fn compute_layout(items: &[KnowledgeItem], edges: &[Edge], config: &LayoutConfig) -> Layout {
    let buckets = assign_levels(items);
    if buckets.is_empty() {
        return Layout::empty(config);
    }

    let max_rows_per_level = buckets.max_rows().max(1);
    let canvas_height = canvas_height(max_rows_per_level, config);
    let viewport_height = viewport_height(canvas_height, config);

    let header_pills = plan_columns(&buckets.values, &buckets.counts, config);
    let canvas_width = canvas_width(buckets.values.len(), &header_pills, config);

    let node_positions = place_rows(
        &buckets,
        NodeArea::new(f64::from(canvas_height), config),
        config,
    );
    let edge_curveness_by_key = assign_curves(edges, &node_positions);

    tracing::debug!(
        items = items.len(),
        levels = buckets.values.len(),
        positioned = node_positions.len(),
        edges = edges.len(),
        curved = edge_curveness_by_key.len(),
        canvas_width,
        canvas_height,
        "computed learning path layout"
    );

    Layout {
        canvas_width,
        canvas_height,
        viewport_height,
        max_rows_per_level,
        level_values: buckets.values,
        level_counts: buckets.counts,
        header_pills,
        node_positions,
        edge_curveness_by_key,
    }
}

fn canvas_height(max_rows: usize, config: &LayoutConfig) -> u32 {
    let span = config.top_padding
        + max_rows.saturating_sub(1) as f64 * config.row_gap
        + config.bottom_padding;
    to_pixels(span).max(config.min_canvas_height)
}

fn viewport_height(canvas_height: u32, config: &LayoutConfig) -> u32 {
    canvas_height
        .saturating_add(VIEWPORT_SLACK)
        .min(config.max_viewport_height)
        .max(config.min_viewport_height)
}

fn canvas_width(level_count: usize, pills: &[HeaderPill], config: &LayoutConfig) -> u32 {
    let pill_right = pills
        .iter()
        .map(|pill| pill.x + pill.width)
        .fold(0.0_f64, f64::max);
    let column_right = column_center_x(level_count.max(1) - 1, config);
    let right = column_right.max(pill_right) + config.right_padding;
    to_pixels(right).max(config.min_canvas_width)
}

fn to_pixels(value: f64) -> u32 {
    // Saturating float-to-int cast; NaN becomes 0.
    value.ceil() as u32
}
