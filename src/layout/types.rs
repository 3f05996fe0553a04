use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::LayoutConfig;

/// Labeled badge above a level column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderPill {
    pub level: u32,
    pub idx: usize,
    pub title: String,
    pub width: f64,
    pub center_x: f64,
    pub x: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePosition {
    pub level: u32,
    pub level_idx: usize,
    pub row_idx: usize,
    pub x: f64,
    pub y: f64,
}

/// Layout of one learning path, recomputed from scratch on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub viewport_height: u32,
    pub max_rows_per_level: usize,
    pub level_values: Vec<u32>,
    pub level_counts: BTreeMap<u32, usize>,
    pub header_pills: Vec<HeaderPill>,
    pub node_positions: BTreeMap<String, NodePosition>,
    pub edge_curveness_by_key: BTreeMap<String, f64>,
}

impl Layout {
    /// Layout returned for a path without items.
    pub fn empty(config: &LayoutConfig) -> Self {
        Self {
            canvas_width: config.min_canvas_width,
            canvas_height: config.min_canvas_height,
            viewport_height: config.min_viewport_height,
            max_rows_per_level: 0,
            level_values: Vec::new(),
            level_counts: BTreeMap::new(),
            header_pills: Vec::new(),
            node_positions: BTreeMap::new(),
            edge_curveness_by_key: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.level_values.is_empty()
    }

    pub fn position(&self, id: &str) -> Option<&NodePosition> {
        self.node_positions.get(id.trim())
    }

    pub fn curveness(&self, from_id: &str, to_id: &str) -> Option<f64> {
        self.edge_curveness_by_key
            .get(&edge_key(from_id.trim(), to_id.trim()))
            .copied()
    }
}

/// Key of an edge in [`Layout::edge_curveness_by_key`].
pub fn edge_key(from_id: &str, to_id: &str) -> String {
    format!("{from_id}=>{to_id}")
}
