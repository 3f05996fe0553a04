use std::collections::{BTreeMap, HashMap};

use crate::ir::Edge;

use super::{NodePosition, edge_key};

/// Base bends handed out in order to edges sharing a target.
const CURVE_OFFSETS: [f64; 7] = [-0.12, -0.06, 0.0, 0.06, 0.12, 0.18, -0.18];
const ROW_DELTA_STEP: f64 = 0.03;
const ROW_DELTA_LIMIT: f64 = 0.12;
pub const CURVENESS_LIMIT: f64 = 0.28;

struct Incoming<'a> {
    from_id: &'a str,
    source_row: usize,
}

pub(super) fn base_curveness(position: usize, group_len: usize) -> f64 {
    if group_len <= 1 {
        return 0.0;
    }
    CURVE_OFFSETS[position % CURVE_OFFSETS.len()]
}

pub(super) fn row_delta_correction(source_row: usize, target_row: usize) -> f64 {
    let delta = target_row as f64 - source_row as f64;
    (delta * ROW_DELTA_STEP).clamp(-ROW_DELTA_LIMIT, ROW_DELTA_LIMIT)
}

pub(super) fn assign_curves(
    edges: &[Edge],
    positions: &BTreeMap<String, NodePosition>,
) -> BTreeMap<String, f64> {
    let mut groups: HashMap<&str, Vec<Incoming<'_>>> = HashMap::new();
    let mut dropped = 0usize;

    for edge in edges {
        let Some((from_id, to_id)) = edge.endpoints() else {
            dropped += 1;
            continue;
        };
        let (Some(source), true) = (positions.get(from_id), positions.contains_key(to_id)) else {
            tracing::trace!(from_id, to_id, "dropping edge with unresolved endpoint");
            dropped += 1;
            continue;
        };
        groups.entry(to_id).or_default().push(Incoming {
            from_id,
            source_row: source.row_idx,
        });
    }

    let mut curveness = BTreeMap::new();
    for (to_id, mut group) in groups {
        let Some(target) = positions.get(to_id) else {
            continue;
        };
        group.sort_by(|a, b| {
            a.source_row
                .cmp(&b.source_row)
                .then_with(|| a.from_id.cmp(b.from_id))
        });
        let group_len = group.len();
        for (idx, incoming) in group.iter().enumerate() {
            let bend = base_curveness(idx, group_len)
                + row_delta_correction(incoming.source_row, target.row_idx);
            curveness.insert(
                edge_key(incoming.from_id, to_id),
                bend.clamp(-CURVENESS_LIMIT, CURVENESS_LIMIT),
            );
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, kept = curveness.len(), "dropped unresolved edges");
    }
    curveness
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(row_idx: usize, level_idx: usize) -> NodePosition {
        NodePosition {
            level: level_idx as u32,
            level_idx,
            row_idx,
            x: 96.0 + level_idx as f64 * 280.0,
            y: 72.0 + row_idx as f64 * 96.0,
        }
    }

    fn positions(entries: &[(&str, usize, usize)]) -> BTreeMap<String, NodePosition> {
        entries
            .iter()
            .map(|(id, row, level)| (id.to_string(), position(*row, *level)))
            .collect()
    }

    #[test]
    fn single_edge_on_same_row_is_straight() {
        let positions = positions(&[("a", 0, 0), ("b", 0, 1)]);
        let curves = assign_curves(&[Edge::new("a", "b")], &positions);
        assert_eq!(curves.get("a=>b"), Some(&0.0));
    }

    #[test]
    fn single_edge_keeps_row_delta() {
        let positions = positions(&[("a", 0, 0), ("b", 3, 1)]);
        let curves = assign_curves(&[Edge::new("a", "b")], &positions);
        let value = curves["a=>b"];
        assert!((value - 0.09).abs() < 1e-12, "got {value}");
    }

    #[test]
    fn converging_edges_ordered_by_source_row_then_id() {
        let positions = positions(&[("s2", 1, 0), ("s1", 0, 0), ("s0", 1, 0), ("t", 0, 1)]);
        let edges = vec![
            Edge::new("s2", "t"),
            Edge::new("s0", "t"),
            Edge::new("s1", "t"),
        ];
        let curves = assign_curves(&edges, &positions);
        // s1 (row 0) first, then s0 and s2 (row 1) by id
        assert!((curves["s1=>t"] - (-0.12)).abs() < 1e-12);
        assert!((curves["s0=>t"] - (-0.06 - 0.03)).abs() < 1e-12);
        assert!((curves["s2=>t"] - (0.0 - 0.03)).abs() < 1e-12);
    }

    #[test]
    fn row_delta_correction_is_bounded() {
        assert_eq!(row_delta_correction(0, 10), ROW_DELTA_LIMIT);
        assert_eq!(row_delta_correction(10, 0), -ROW_DELTA_LIMIT);
        assert_eq!(row_delta_correction(2, 2), 0.0);
    }

    #[test]
    fn base_offsets_wrap_every_seven() {
        for idx in 0..7 {
            assert_eq!(base_curveness(idx, 9), base_curveness(idx + 7, 9));
        }
        assert_eq!(base_curveness(0, 1), 0.0);
    }

    #[test]
    fn drops_blank_and_unresolved_endpoints() {
        let positions = positions(&[("a", 0, 0), ("b", 0, 1)]);
        let edges = vec![
            Edge::new("a", "missing"),
            Edge::new("ghost", "b"),
            Edge::new(" ", "b"),
            Edge::new(" a ", " b "),
        ];
        let curves = assign_curves(&edges, &positions);
        assert_eq!(curves.len(), 1);
        assert!(curves.contains_key("a=>b"));
    }
}
