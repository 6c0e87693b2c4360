use crate::{
	Result,
	db::Db,
	models::{HierarchyNeighbor, RelatedConcept},
};

/// Ancestors of a concept, closest first. The closure table stores a
/// separation-0 row for every concept; the self row must never surface, so
/// it is excluded in the predicate rather than filtered afterwards.
pub async fn ancestors(db: &Db, concept_id: i32, cap: i64) -> Result<Vec<HierarchyNeighbor>> {
	let rows = sqlx::query_as::<_, HierarchyNeighbor>(
		"\
SELECT
	ca.ancestor_concept_id AS concept_id,
	c.concept_name,
	c.vocabulary_id,
	c.concept_code,
	ca.min_levels_of_separation,
	ca.max_levels_of_separation
FROM concept_ancestor ca
JOIN concept c ON c.concept_id = ca.ancestor_concept_id
WHERE ca.descendant_concept_id = $1
	AND ca.ancestor_concept_id <> $1
ORDER BY ca.min_levels_of_separation, ca.ancestor_concept_id
LIMIT $2",
	)
	.bind(concept_id)
	.bind(cap)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

/// Direct descendants only (min separation exactly 1). Deeper descendants
/// are excluded to bound result size.
pub async fn direct_descendants(
	db: &Db,
	concept_id: i32,
	cap: i64,
) -> Result<Vec<HierarchyNeighbor>> {
	let rows = sqlx::query_as::<_, HierarchyNeighbor>(
		"\
SELECT
	ca.descendant_concept_id AS concept_id,
	c.concept_name,
	c.vocabulary_id,
	c.concept_code,
	ca.min_levels_of_separation,
	ca.max_levels_of_separation
FROM concept_ancestor ca
JOIN concept c ON c.concept_id = ca.descendant_concept_id
WHERE ca.ancestor_concept_id = $1
	AND ca.descendant_concept_id <> $1
	AND ca.min_levels_of_separation = 1
ORDER BY c.concept_name, ca.descendant_concept_id
LIMIT $2",
	)
	.bind(concept_id)
	.bind(cap)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

/// Outgoing typed edges: rows where the concept is the source. Edges with a
/// non-null invalidation reason are not eligible for traversal.
pub async fn related_outgoing(
	db: &Db,
	concept_id: i32,
	kinds: &[String],
	cap: i64,
) -> Result<Vec<RelatedConcept>> {
	let rows = sqlx::query_as::<_, RelatedConcept>(
		"\
SELECT
	cr.concept_id_2 AS concept_id,
	c.concept_name,
	c.vocabulary_id,
	c.domain_id,
	c.concept_code,
	c.standard_concept,
	cr.relationship_id
FROM concept_relationship cr
JOIN concept c ON c.concept_id = cr.concept_id_2
WHERE cr.concept_id_1 = $1
	AND cr.relationship_id = ANY($2)
	AND cr.invalid_reason IS NULL
ORDER BY cr.concept_id_2
LIMIT $3",
	)
	.bind(concept_id)
	.bind(kinds)
	.bind(cap)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

/// Incoming typed edges: the symmetric query, because the edge table stores
/// directed pairs and a concept can be a target without being a source for
/// the kinds of interest.
pub async fn related_incoming(
	db: &Db,
	concept_id: i32,
	kinds: &[String],
	cap: i64,
) -> Result<Vec<RelatedConcept>> {
	let rows = sqlx::query_as::<_, RelatedConcept>(
		"\
SELECT
	cr.concept_id_1 AS concept_id,
	c.concept_name,
	c.vocabulary_id,
	c.domain_id,
	c.concept_code,
	c.standard_concept,
	cr.relationship_id
FROM concept_relationship cr
JOIN concept c ON c.concept_id = cr.concept_id_1
WHERE cr.concept_id_2 = $1
	AND cr.relationship_id = ANY($2)
	AND cr.invalid_reason IS NULL
ORDER BY cr.concept_id_1
LIMIT $3",
	)
	.bind(concept_id)
	.bind(kinds)
	.bind(cap)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}
