//! Property-based invariant tests for the learning-path layout.
//!
//! 1. Level values are strictly ascending and match the items' levels.
//! 2. Every non-blank id gets exactly one position on its own level.
//! 3. Canvas and viewport respect their configured bounds.
//! 4. Curveness entries only exist for resolved edges and stay bounded.
//! 5. Same input, same layout.

use std::collections::BTreeSet;

use learning_path_layout::layout::CURVENESS_LIMIT;
use learning_path_layout::{Edge, KnowledgeItem, build_layout};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => (0u8..24).prop_map(|n| format!("k{n}")),
        1 => Just(String::new()),
        1 => Just("  ".to_string()),
    ]
}

fn level_strategy() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        6 => (0u8..6).prop_map(|n| Some(f64::from(n))),
        1 => (-3.0f64..8.0).prop_map(Some),
        1 => Just(Some(f64::NAN)),
        1 => Just(None),
    ]
}

fn item_strategy() -> impl Strategy<Value = KnowledgeItem> {
    (
        id_strategy(),
        level_strategy(),
        proptest::option::of(0.0f64..1.0),
        any::<bool>(),
    )
        .prop_map(|(id, level, importance, milestone)| {
            let mut item = KnowledgeItem::new(id, 0.0).with_milestone(milestone);
            item.path_level = level;
            item.importance = importance;
            item
        })
}

fn edge_strategy() -> impl Strategy<Value = Edge> {
    (id_strategy(), id_strategy()).prop_map(|(from, to)| Edge::new(from, to))
}

fn graph_strategy() -> impl Strategy<Value = (Vec<KnowledgeItem>, Vec<Edge>)> {
    (
        prop::collection::vec(item_strategy(), 0..40),
        prop::collection::vec(edge_strategy(), 0..60),
    )
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Level values
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn level_values_sorted_and_complete((items, edges) in graph_strategy()) {
        let layout = build_layout(&items, &edges);
        prop_assert!(layout.level_values.windows(2).all(|w| w[0] < w[1]));
        let expected: BTreeSet<u32> = items.iter().map(KnowledgeItem::level).collect();
        let actual: BTreeSet<u32> = layout.level_values.iter().copied().collect();
        prop_assert_eq!(expected, actual);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Positions
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn every_named_item_is_positioned((items, edges) in graph_strategy()) {
        let layout = build_layout(&items, &edges);
        let ids: BTreeSet<&str> = items.iter().filter_map(KnowledgeItem::node_id).collect();
        prop_assert_eq!(layout.node_positions.len(), ids.len());
        for id in ids {
            prop_assert!(layout.node_positions.contains_key(id), "missing {}", id);
        }
        for (id, pos) in &layout.node_positions {
            prop_assert!(!id.trim().is_empty());
            prop_assert_eq!(layout.level_values[pos.level_idx], pos.level);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Sizing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn canvas_respects_bounds((items, edges) in graph_strategy()) {
        let layout = build_layout(&items, &edges);
        prop_assert!(layout.canvas_width >= 980);
        prop_assert!(layout.canvas_height >= 380);
        prop_assert!((396..=640).contains(&layout.viewport_height));
        for pill in &layout.header_pills {
            prop_assert!(f64::from(layout.canvas_width) >= pill.x + pill.width + 96.0);
        }
        let densest = layout.level_counts.values().copied().max().unwrap_or(0);
        prop_assert_eq!(layout.max_rows_per_level, densest);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Curveness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn curveness_bounded_and_resolved((items, edges) in graph_strategy()) {
        let layout = build_layout(&items, &edges);
        for (key, value) in &layout.edge_curveness_by_key {
            let (from, to) = key.split_once("=>").expect("edge key");
            prop_assert!(layout.node_positions.contains_key(from));
            prop_assert!(layout.node_positions.contains_key(to));
            prop_assert!((-CURVENESS_LIMIT..=CURVENESS_LIMIT).contains(value));
        }
        for edge in &edges {
            let resolved = edge
                .endpoints()
                .is_some_and(|(from, to)| {
                    layout.node_positions.contains_key(from)
                        && layout.node_positions.contains_key(to)
                });
            let present = edge
                .endpoints()
                .is_some_and(|(from, to)| layout.curveness(from, to).is_some());
            prop_assert_eq!(resolved, present);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn layout_is_deterministic((items, edges) in graph_strategy()) {
        prop_assert_eq!(build_layout(&items, &edges), build_layout(&items, &edges));
    }
}
