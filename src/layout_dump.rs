use crate::ir::KnowledgeItem;
use crate::layout::{HeaderPill, Layout, node_symbol_size};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Renderer-facing projection of a [`Layout`]: flat node and edge lists in the
/// shape a chart series consumes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDump {
    pub width: u32,
    pub height: u32,
    pub viewport_height: u32,
    pub header_pills: Vec<HeaderPill>,
    pub nodes: Vec<NodeDump>,
    pub edges: Vec<EdgeDump>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDump {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub x: f64,
    pub y: f64,
    pub symbol_size: f64,
    pub milestone: bool,
}

#[derive(Debug, Serialize)]
pub struct EdgeDump {
    pub from: String,
    pub to: String,
    pub curveness: f64,
}

impl ChartDump {
    /// `items` must be the list the layout was computed from.
    pub fn from_layout(layout: &Layout, items: &[KnowledgeItem]) -> Self {
        // Same precedence as the row placer: level order, later duplicates win.
        let mut ordered: Vec<&KnowledgeItem> = items.iter().collect();
        ordered.sort_by_key(|item| item.level());
        let by_id: HashMap<&str, &KnowledgeItem> = ordered
            .into_iter()
            .filter_map(|item| item.node_id().map(|id| (id, item)))
            .collect();

        let mut nodes: Vec<NodeDump> = layout
            .node_positions
            .iter()
            .map(|(id, pos)| {
                let item = by_id.get(id.as_str());
                NodeDump {
                    id: id.clone(),
                    name: item
                        .and_then(|item| item.name.clone())
                        .unwrap_or_else(|| id.clone()),
                    level: pos.level,
                    x: pos.x,
                    y: pos.y,
                    symbol_size: item.map(|item| node_symbol_size(item)).unwrap_or(0.0),
                    milestone: item.is_some_and(|item| item.milestone),
                }
            })
            .collect();
        nodes.sort_by(|a, b| {
            let pa = &layout.node_positions[&a.id];
            let pb = &layout.node_positions[&b.id];
            (pa.level_idx, pa.row_idx).cmp(&(pb.level_idx, pb.row_idx))
        });

        let edges = layout
            .edge_curveness_by_key
            .iter()
            .filter_map(|(key, curveness)| {
                let (from, to) = key.split_once("=>")?;
                Some(EdgeDump {
                    from: from.to_string(),
                    to: to.to_string(),
                    curveness: *curveness,
                })
            })
            .collect();

        ChartDump {
            width: layout.canvas_width,
            height: layout.canvas_height,
            viewport_height: layout.viewport_height,
            header_pills: layout.header_pills.clone(),
            nodes,
            edges,
        }
    }
}

pub fn write_layout_dump(
    path: &Path,
    layout: &Layout,
    items: &[KnowledgeItem],
) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = ChartDump::from_layout(layout, items);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
