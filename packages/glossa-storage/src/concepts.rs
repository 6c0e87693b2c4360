use sqlx::QueryBuilder;

use crate::{
	Result,
	db::Db,
	models::{Concept, Domain, ScoredConcept, Vocabulary},
};

const CONCEPT_COLUMNS: &str = "concept_id, concept_name, domain_id, vocabulary_id, \
	concept_class_id, standard_concept, concept_code, valid_start_date, valid_end_date, \
	invalid_reason";

/// Conjunctive filters applied identically to every search strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConceptFilters<'a> {
	pub vocabulary_id: Option<&'a str>,
	pub domain_id: Option<&'a str>,
	pub standard_only: bool,
}

/// Escapes LIKE metacharacters and wraps the query in `%` wildcards for a
/// case-insensitive substring predicate.
pub fn like_pattern(query: &str) -> String {
	let mut escaped = String::with_capacity(query.len() + 2);

	for ch in query.chars() {
		if matches!(ch, '%' | '_' | '\\') {
			escaped.push('\\');
		}

		escaped.push(ch);
	}

	format!("%{escaped}%")
}

fn push_filters<'a>(
	builder: &mut QueryBuilder<'a, sqlx::Postgres>,
	filters: &ConceptFilters<'a>,
	prefix: &str,
) {
	if let Some(vocabulary_id) = filters.vocabulary_id {
		builder.push(format!(" AND {prefix}vocabulary_id = "));
		builder.push_bind(vocabulary_id);
	}
	if let Some(domain_id) = filters.domain_id {
		builder.push(format!(" AND {prefix}domain_id = "));
		builder.push_bind(domain_id);
	}
	if filters.standard_only {
		builder.push(format!(" AND {prefix}standard_concept = 'S'"));
	}
}

/// Exact/prefix candidates: name or code contains the query as a
/// case-insensitive substring. Pre-ordered by name so the candidate pool is
/// stable; the final composite ordering happens in the ranking engine.
pub async fn search_exact<'a>(
	db: &Db,
	query: &'a str,
	filters: &ConceptFilters<'a>,
	cap: i64,
) -> Result<Vec<Concept>> {
	let pattern = like_pattern(query);
	let mut builder = QueryBuilder::new(format!(
		"SELECT {CONCEPT_COLUMNS} FROM concept WHERE (concept_name ILIKE "
	));

	builder.push_bind(pattern.clone());
	builder.push(" OR concept_code ILIKE ");
	builder.push_bind(pattern);
	builder.push(")");
	push_filters(&mut builder, filters, "");
	builder.push(" ORDER BY concept_name LIMIT ");
	builder.push_bind(cap);

	Ok(builder.build_query_as::<Concept>().fetch_all(&db.pool).await?)
}

/// Fuzzy candidates: trigram-similar names (provider-defined `%` threshold)
/// or a plain substring match on the code. Fuzziness never applies to codes.
pub async fn search_fuzzy<'a>(
	db: &Db,
	query: &'a str,
	filters: &ConceptFilters<'a>,
	cap: i64,
) -> Result<Vec<ScoredConcept>> {
	let pattern = like_pattern(query);
	let mut builder = QueryBuilder::new(format!(
		"SELECT {CONCEPT_COLUMNS}, similarity(concept_name, "
	));

	builder.push_bind(query);
	builder.push(") AS score FROM concept WHERE (concept_name % ");
	builder.push_bind(query);
	builder.push(" OR concept_code ILIKE ");
	builder.push_bind(pattern);
	builder.push(")");
	push_filters(&mut builder, filters, "");
	builder.push(" ORDER BY score DESC LIMIT ");
	builder.push_bind(cap);

	Ok(builder.build_query_as::<ScoredConcept>().fetch_all(&db.pool).await?)
}

/// Semantic candidates: concepts with a stored embedding, scored by cosine
/// similarity against the query vector (a pgvector text literal). Concepts
/// without an embedding row are excluded by the inner join.
pub async fn search_semantic<'a>(
	db: &Db,
	query_vector: &'a str,
	filters: &ConceptFilters<'a>,
	cap: i64,
) -> Result<Vec<ScoredConcept>> {
	let mut builder = QueryBuilder::new(
		"SELECT c.concept_id, c.concept_name, c.domain_id, c.vocabulary_id, \
		 c.concept_class_id, c.standard_concept, c.concept_code, c.valid_start_date, \
		 c.valid_end_date, c.invalid_reason, (1 - (ce.embedding <=> ",
	);

	builder.push_bind(query_vector);
	builder.push(
		"::vector))::real AS score FROM concept c \
		 JOIN concept_embedding ce ON ce.concept_id = c.concept_id WHERE TRUE",
	);
	push_filters(&mut builder, filters, "c.");
	builder.push(" ORDER BY ce.embedding <=> ");
	builder.push_bind(query_vector);
	builder.push("::vector LIMIT ");
	builder.push_bind(cap);

	Ok(builder.build_query_as::<ScoredConcept>().fetch_all(&db.pool).await?)
}

pub async fn get_concept(db: &Db, concept_id: i32) -> Result<Option<Concept>> {
	let sql = format!("SELECT {CONCEPT_COLUMNS} FROM concept WHERE concept_id = $1");
	let row = sqlx::query_as::<_, Concept>(&sql).bind(concept_id).fetch_optional(&db.pool).await?;

	Ok(row)
}

pub async fn list_vocabularies(db: &Db) -> Result<Vec<Vocabulary>> {
	let rows = sqlx::query_as::<_, Vocabulary>(
		"\
SELECT vocabulary_id, vocabulary_name, vocabulary_reference, vocabulary_version, \
 vocabulary_concept_id
FROM vocabulary
ORDER BY vocabulary_id",
	)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn list_domains(db: &Db) -> Result<Vec<Domain>> {
	let rows = sqlx::query_as::<_, Domain>(
		"\
SELECT domain_id, domain_name, domain_concept_id
FROM domain
ORDER BY domain_id",
	)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}
