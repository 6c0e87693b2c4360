use glossa_domain::{
	dedup,
	ranking::{self, Ranked, Scored},
	standardness::Standardness,
	strategy::{self, SearchStrategy},
	vector,
};

#[derive(Debug, Clone)]
struct Candidate {
	id: i32,
	name: &'static str,
	code: &'static str,
	standard: bool,
	score: f32,
}
impl Candidate {
	fn new(id: i32, name: &'static str, code: &'static str) -> Self {
		Self { id, name, code, standard: true, score: 0.0 }
	}

	fn non_standard(mut self) -> Self {
		self.standard = false;

		self
	}

	fn scored(mut self, score: f32) -> Self {
		self.score = score;

		self
	}
}
impl Ranked for Candidate {
	fn concept_id(&self) -> i32 {
		self.id
	}

	fn name(&self) -> &str {
		self.name
	}

	fn code(&self) -> &str {
		self.code
	}

	fn is_standard(&self) -> bool {
		self.standard
	}
}
impl Scored for Candidate {
	fn score(&self) -> f32 {
		self.score
	}
}

fn ids(items: &[Candidate]) -> Vec<i32> {
	items.iter().map(|item| item.id).collect()
}

#[test]
fn semantic_takes_precedence_over_fuzzy() {
	assert_eq!(SearchStrategy::resolve(true, true), SearchStrategy::Semantic);
	assert_eq!(SearchStrategy::resolve(false, true), SearchStrategy::Semantic);
	assert_eq!(SearchStrategy::resolve(true, false), SearchStrategy::Fuzzy);
	assert_eq!(SearchStrategy::resolve(false, false), SearchStrategy::Exact);
}

#[test]
fn only_the_literal_true_enables_a_flag() {
	assert!(strategy::flag_enabled(Some("true")));
	assert!(!strategy::flag_enabled(Some("TRUE")));
	assert!(!strategy::flag_enabled(Some("1")));
	assert!(!strategy::flag_enabled(Some("yes")));
	assert!(!strategy::flag_enabled(None));
}

#[test]
fn whitespace_queries_normalize_to_none() {
	assert_eq!(strategy::normalize_query(""), None);
	assert_eq!(strategy::normalize_query("   \t\n"), None);
	assert_eq!(strategy::normalize_query("  aspirin "), Some("aspirin"));
}

#[test]
fn decodes_standardness_codes() {
	assert_eq!(Standardness::from_code(Some("S")), Standardness::Standard);
	assert_eq!(Standardness::from_code(Some("C")), Standardness::Classification);
	assert_eq!(Standardness::from_code(None), Standardness::NonStandard);
	assert_eq!(Standardness::from_code(Some("X")), Standardness::NonStandard);
	assert!(Standardness::Standard.is_standard());
	assert!(!Standardness::Classification.is_standard());
}

#[test]
fn exact_rank_puts_code_match_before_name_substring() {
	// The code-equality rule: E11 the code must beat concepts that merely
	// contain the query in their name.
	let mut items = vec![
		Candidate::new(1, "Essential hypertension with E11 notes", "I10"),
		Candidate::new(201_826, "Type 2 diabetes mellitus", "E11"),
		Candidate::new(3, "E11-adjacent disorder", "Z99"),
	];

	ranking::rank_exact(&mut items, "E11");

	assert_eq!(ids(&items)[0], 201_826);
}

#[test]
fn exact_rank_orders_all_six_criteria() {
	let mut items = vec![
		Candidate::new(6, "zz substring aspirin zz", "B2").non_standard(),
		Candidate::new(5, "aa substring aspirin aa", "B1").non_standard(),
		Candidate::new(4, "aspirin-containing product", "C1"),
		Candidate::new(3, "high dose preparation", "ASPIRIN-X"),
		Candidate::new(2, "Aspirin", "A2"),
		Candidate::new(1, "unrelated name", "aspirin"),
	];

	ranking::rank_exact(&mut items, "aspirin");

	// code eq > name eq > code prefix > name prefix > substring-only, and
	// substring-only matches order by name.
	assert_eq!(ids(&items), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn exact_rank_is_case_insensitive_on_matches() {
	let mut items = vec![
		Candidate::new(2, "ASPIRIN", "X1"),
		Candidate::new(1, "some aspirin mixture", "X2"),
	];

	ranking::rank_exact(&mut items, "aspirin");

	assert_eq!(ids(&items), vec![2, 1]);
}

#[test]
fn exact_rank_prefers_standard_concepts_among_substring_matches() {
	let mut items = vec![
		Candidate::new(1, "b aspirin variant", "Y1").non_standard(),
		Candidate::new(2, "c aspirin variant", "Y2"),
	];

	ranking::rank_exact(&mut items, "aspirin");

	// Standard wins even though "b ..." sorts before "c ..." by name.
	assert_eq!(ids(&items), vec![2, 1]);
}

#[test]
fn exact_rank_final_tie_break_is_case_sensitive_name_order() {
	let mut items = vec![
		Candidate::new(1, "aspirin tablet b", "Y1"),
		Candidate::new(2, "Aspirin tablet a", "Y2"),
	];

	ranking::rank_exact(&mut items, "aspirin");

	// Both are name-prefix matches case-insensitively; 'A' < 'a' in a
	// case-sensitive comparison.
	assert_eq!(ids(&items), vec![2, 1]);
}

#[test]
fn fuzzy_rank_code_equality_beats_similarity() {
	let mut items = vec![
		Candidate::new(1, "Diabetes mellitus", "X9").scored(0.95),
		Candidate::new(201_826, "Type 2 diabetes mellitus", "E11").scored(0.2),
	];

	ranking::rank_fuzzy(&mut items, "e11");

	assert_eq!(ids(&items), vec![201_826, 1]);
}

#[test]
fn fuzzy_rank_orders_by_similarity_then_name() {
	let mut items = vec![
		Candidate::new(3, "b term", "C3").scored(0.4),
		Candidate::new(2, "a term", "C2").scored(0.4),
		Candidate::new(1, "z term", "C1").scored(0.9),
	];

	ranking::rank_fuzzy(&mut items, "term");

	assert_eq!(ids(&items), vec![1, 2, 3]);
}

#[test]
fn semantic_rank_breaks_score_ties_by_id() {
	let mut items = vec![
		Candidate::new(30, "gamma", "G1").scored(0.5),
		Candidate::new(10, "alpha", "A1").scored(0.5),
		Candidate::new(20, "beta", "B1").scored(0.9),
	];

	ranking::rank_semantic(&mut items);

	assert_eq!(ids(&items), vec![20, 10, 30]);
}

#[test]
fn semantic_rank_is_deterministic_across_runs() {
	let build = || {
		vec![
			Candidate::new(3, "c", "C").scored(0.31),
			Candidate::new(1, "a", "A").scored(0.31),
			Candidate::new(2, "b", "B").scored(0.70),
		]
	};
	let mut first = build();
	let mut second = build();

	ranking::rank_semantic(&mut first);
	ranking::rank_semantic(&mut second);

	assert_eq!(ids(&first), ids(&second));
}

#[test]
fn dedup_keeps_first_occurrence_and_order() {
	let items = vec![(1, "outgoing"), (2, "outgoing"), (1, "incoming"), (3, "incoming")];
	let deduped = dedup::dedup_by_concept_id(items, |item| item.0);

	assert_eq!(deduped, vec![(1, "outgoing"), (2, "outgoing"), (3, "incoming")]);
}

#[test]
fn name_contains_is_case_insensitive() {
	assert!(ranking::name_contains("Type 2 Diabetes Mellitus", "diabetes"));
	assert!(!ranking::name_contains("Type 2 Diabetes Mellitus", "hypertension"));
}

#[test]
fn normalizes_vectors_to_unit_length() {
	let mut vec = vec![3.0, 4.0];

	vector::l2_normalize(&mut vec);

	let norm = vec.iter().map(|v| v * v).sum::<f32>().sqrt();

	assert!((norm - 1.0).abs() < 1e-6);
	assert!((vec[0] - 0.6).abs() < 1e-6);
	assert!((vec[1] - 0.8).abs() < 1e-6);
}

#[test]
fn zero_vectors_are_left_untouched() {
	let mut vec = vec![0.0, 0.0, 0.0];

	vector::l2_normalize(&mut vec);

	assert_eq!(vec, vec![0.0, 0.0, 0.0]);
}

#[test]
fn renders_pgvector_literals() {
	assert_eq!(vector::pgvector_literal(&[0.5, -1.0, 2.0]), "[0.5,-1,2]");
	assert_eq!(vector::pgvector_literal(&[]), "[]");
}
