use time::Date;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Concept {
	pub concept_id: i32,
	pub concept_name: String,
	pub domain_id: String,
	pub vocabulary_id: String,
	pub concept_class_id: String,
	pub standard_concept: Option<String>,
	pub concept_code: String,
	pub valid_start_date: Option<Date>,
	pub valid_end_date: Option<Date>,
	pub invalid_reason: Option<String>,
}

/// A concept row carrying the strategy's continuous relevance score
/// (trigram similarity or cosine similarity).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ScoredConcept {
	#[sqlx(flatten)]
	pub concept: Concept,
	pub score: f32,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Vocabulary {
	pub vocabulary_id: String,
	pub vocabulary_name: String,
	pub vocabulary_reference: Option<String>,
	pub vocabulary_version: Option<String>,
	pub vocabulary_concept_id: Option<i32>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Domain {
	pub domain_id: String,
	pub domain_name: String,
	pub domain_concept_id: Option<i32>,
}

/// An ancestor or direct-descendant row from the transitive closure table,
/// joined with the neighbor's display fields. `concept_id` is the neighbor,
/// never the concept being explored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HierarchyNeighbor {
	pub concept_id: i32,
	pub concept_name: String,
	pub vocabulary_id: String,
	pub concept_code: String,
	pub min_levels_of_separation: i32,
	pub max_levels_of_separation: i32,
}

/// A typed-relationship neighbor joined with its display fields.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RelatedConcept {
	pub concept_id: i32,
	pub concept_name: String,
	pub vocabulary_id: String,
	pub domain_id: String,
	pub concept_code: String,
	pub standard_concept: Option<String>,
	pub relationship_id: String,
}
