use std::collections::HashSet;

/// First-write-wins deduplication by concept id, preserving discovery order.
/// Callers scan outgoing edges before incoming ones, so when both directions
/// surface the same neighbor the outgoing row is the one kept.
pub fn dedup_by_concept_id<T>(items: Vec<T>, id: impl Fn(&T) -> i32) -> Vec<T> {
	let mut seen = HashSet::new();

	items.into_iter().filter(|item| seen.insert(id(item))).collect()
}
