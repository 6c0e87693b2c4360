/// Candidate fields the ranking keys read. Implemented by the service's
/// candidate type; keeps this crate free of storage concerns.
pub trait Ranked {
	fn concept_id(&self) -> i32;
	fn name(&self) -> &str;
	fn code(&self) -> &str;
	fn is_standard(&self) -> bool;
}

/// A candidate carrying a continuous relevance score (trigram similarity or
/// cosine similarity, depending on the strategy).
pub trait Scored {
	fn score(&self) -> f32;
}

/// Exact/prefix mode composite key. Each criterion is strictly higher
/// priority than the next; booleans are inverted so that `true` sorts first
/// under the derived ascending order. Substring-only matches fail all four
/// match criteria and end up ordered by standardness, then name.
fn exact_key<T: Ranked>(item: &T, query_lower: &str) -> (bool, bool, bool, bool, bool, String) {
	let name_lower = item.name().to_lowercase();
	let code_lower = item.code().to_lowercase();

	(
		code_lower != query_lower,
		name_lower != query_lower,
		!code_lower.starts_with(query_lower),
		!name_lower.starts_with(query_lower),
		!item.is_standard(),
		item.name().to_string(),
	)
}

/// Orders exact-mode candidates: code equality, name equality, code prefix,
/// name prefix, standardness, then case-sensitive name. The sort is stable,
/// so candidates identical on all six criteria keep their fetch order.
pub fn rank_exact<T: Ranked>(items: &mut [T], query: &str) {
	let query_lower = query.to_lowercase();

	items.sort_by_cached_key(|item| exact_key(item, &query_lower));
}

/// Orders fuzzy-mode candidates: an exact (case-insensitive) code match wins
/// outright, then name similarity descending, then name ascending. Codes are
/// never matched fuzzily.
pub fn rank_fuzzy<T: Ranked + Scored>(items: &mut [T], query: &str) {
	let query_lower = query.to_lowercase();

	items.sort_by(|a, b| {
		let a_code_eq = a.code().to_lowercase() == query_lower;
		let b_code_eq = b.code().to_lowercase() == query_lower;

		b_code_eq
			.cmp(&a_code_eq)
			.then_with(|| b.score().total_cmp(&a.score()))
			.then_with(|| a.name().cmp(b.name()))
	});
}

/// Orders semantic-mode candidates by similarity descending. Exactly-tied
/// scores fall back to concept id ascending so repeated identical requests
/// return the same id sequence.
pub fn rank_semantic<T: Ranked + Scored>(items: &mut [T]) {
	items.sort_by(|a, b| {
		b.score()
			.total_cmp(&a.score())
			.then_with(|| a.concept_id().cmp(&b.concept_id()))
	});
}

/// Case-insensitive substring test used by the descendant name search.
pub fn name_contains(name: &str, query: &str) -> bool {
	name.to_lowercase().contains(&query.to_lowercase())
}
