/// How a search request matches and ranks candidate concepts. Resolved once
/// at the request boundary; everything downstream switches on this enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
	Exact,
	Fuzzy,
	Semantic,
}
impl SearchStrategy {
	/// Semantic takes precedence over fuzzy; exact is the default. Exactly
	/// one strategy runs per request.
	pub fn resolve(fuzzy: bool, semantic: bool) -> Self {
		if semantic {
			Self::Semantic
		} else if fuzzy {
			Self::Fuzzy
		} else {
			Self::Exact
		}
	}
}

/// Request flags are opaque strings at the boundary; only the literal
/// `"true"` enables a flag.
pub fn flag_enabled(value: Option<&str>) -> bool {
	value == Some("true")
}

/// Trims the raw query. `None` means the request short-circuits to an empty
/// result set without touching the store.
pub fn normalize_query(raw: &str) -> Option<&str> {
	let trimmed = raw.trim();

	if trimmed.is_empty() { None } else { Some(trimmed) }
}
