use std::collections::BTreeMap;

use crate::ir::KnowledgeItem;

/// Items grouped by normalized level, ascending.
#[derive(Debug, Default)]
pub(super) struct LevelBuckets<'a> {
    pub values: Vec<u32>,
    pub counts: BTreeMap<u32, usize>,
    pub items: BTreeMap<u32, Vec<&'a KnowledgeItem>>,
}

impl LevelBuckets<'_> {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn max_rows(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }
}

/// Every item lands in a bucket, including those without a usable id; the
/// row placer skips blank ids later so they still count toward column height.
pub(super) fn assign_levels(items: &[KnowledgeItem]) -> LevelBuckets<'_> {
    let mut buckets: BTreeMap<u32, Vec<&KnowledgeItem>> = BTreeMap::new();
    for item in items {
        buckets.entry(item.level()).or_default().push(item);
    }

    let values: Vec<u32> = buckets.keys().copied().collect();
    let counts: BTreeMap<u32, usize> = buckets
        .iter()
        .map(|(level, bucket)| (*level, bucket.len()))
        .collect();

    LevelBuckets {
        values,
        counts,
        items: buckets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_normalized_level_in_input_order() {
        let mut missing = KnowledgeItem::new("missing", 0.0);
        missing.path_level = None;
        let items = vec![
            KnowledgeItem::new("c", 2.0),
            KnowledgeItem::new("a", 0.0),
            KnowledgeItem::new("neg", -2.0),
            KnowledgeItem::new("b", 1.6),
            missing,
            KnowledgeItem::new("", 2.0),
        ];

        let buckets = assign_levels(&items);
        assert_eq!(buckets.values, vec![0, 2]);
        assert_eq!(buckets.counts.get(&0), Some(&3));
        assert_eq!(buckets.counts.get(&2), Some(&3));
        let ids: Vec<&str> = buckets.items[&0]
            .iter()
            .map(|item| item.keypoint_id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "neg", "missing"]);
        assert_eq!(buckets.max_rows(), 3);
    }

    #[test]
    fn empty_input_has_no_levels() {
        let buckets = assign_levels(&[]);
        assert!(buckets.is_empty());
        assert!(buckets.counts.is_empty());
        assert_eq!(buckets.max_rows(), 0);
    }
}
