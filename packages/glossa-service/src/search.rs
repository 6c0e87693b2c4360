use glossa_domain::{
	ranking::{self, Ranked, Scored},
	standardness::Standardness,
	strategy::{self, SearchStrategy},
	vector,
};
use glossa_storage::{
	concepts::{self, ConceptFilters},
	models::Concept,
};
use tracing::debug;

use crate::{Error, GlossaService, Result};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchRequest {
	pub query: String,
	#[serde(default)]
	pub fuzzy: bool,
	#[serde(default)]
	pub semantic: bool,
	#[serde(default)]
	pub standard_only: bool,
	#[serde(default)]
	pub vocabulary_id: Option<String>,
	#[serde(default)]
	pub domain_id: Option<String>,
	#[serde(default)]
	pub limit: Option<i64>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ConceptSummary {
	pub concept_id: i32,
	pub concept_name: String,
	pub domain_id: String,
	pub vocabulary_id: String,
	pub concept_class_id: String,
	pub standard_concept: Option<String>,
	pub concept_code: String,
	#[serde(default, with = "crate::date_serde")]
	pub valid_start_date: Option<time::Date>,
	#[serde(default, with = "crate::date_serde")]
	pub valid_end_date: Option<time::Date>,
	pub invalid_reason: Option<String>,
	/// Continuous relevance score for fuzzy and semantic strategies; absent
	/// in exact mode where the ordering is purely key-based.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub score: Option<f32>,
}
impl ConceptSummary {
	pub(crate) fn from_concept(concept: Concept, score: Option<f32>) -> Self {
		Self {
			concept_id: concept.concept_id,
			concept_name: concept.concept_name,
			domain_id: concept.domain_id,
			vocabulary_id: concept.vocabulary_id,
			concept_class_id: concept.concept_class_id,
			standard_concept: concept.standard_concept,
			concept_code: concept.concept_code,
			valid_start_date: concept.valid_start_date,
			valid_end_date: concept.valid_end_date,
			invalid_reason: concept.invalid_reason,
			score,
		}
	}
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
	pub strategy: SearchStrategy,
	pub items: Vec<ConceptSummary>,
}

/// Ranking-engine view of a fetched candidate row.
struct Candidate {
	concept: Concept,
	score: f32,
}
impl Ranked for Candidate {
	fn concept_id(&self) -> i32 {
		self.concept.concept_id
	}

	fn name(&self) -> &str {
		&self.concept.concept_name
	}

	fn code(&self) -> &str {
		&self.concept.concept_code
	}

	fn is_standard(&self) -> bool {
		Standardness::from_code(self.concept.standard_concept.as_deref()).is_standard()
	}
}
impl Scored for Candidate {
	fn score(&self) -> f32 {
		self.score
	}
}

impl GlossaService {
	pub async fn search(&self, req: SearchRequest) -> Result<SearchResponse> {
		let limit = self.resolve_limit(req.limit)?;
		let strategy = SearchStrategy::resolve(req.fuzzy, req.semantic);
		let Some(query) = strategy::normalize_query(&req.query) else {
			return Ok(SearchResponse { strategy, items: Vec::new() });
		};
		let filters = ConceptFilters {
			vocabulary_id: req.vocabulary_id.as_deref(),
			domain_id: req.domain_id.as_deref(),
			standard_only: req.standard_only,
		};
		let cap = self.candidate_cap(limit);
		let mut candidates = match strategy {
			SearchStrategy::Exact => {
				let rows = concepts::search_exact(&self.db, query, &filters, cap).await?;
				let mut candidates = rows
					.into_iter()
					.map(|concept| Candidate { concept, score: 0.0 })
					.collect::<Vec<_>>();

				ranking::rank_exact(&mut candidates, query);

				candidates
			},
			SearchStrategy::Fuzzy => {
				let rows = concepts::search_fuzzy(&self.db, query, &filters, cap).await?;
				let mut candidates = rows
					.into_iter()
					.map(|row| Candidate { concept: row.concept, score: row.score })
					.collect::<Vec<_>>();

				ranking::rank_fuzzy(&mut candidates, query);

				candidates
			},
			SearchStrategy::Semantic => {
				let mut query_vector = self.embed_query(query).await?;

				vector::l2_normalize(&mut query_vector);

				let literal = vector::pgvector_literal(&query_vector);
				let rows = concepts::search_semantic(&self.db, &literal, &filters, cap).await?;
				let mut candidates = rows
					.into_iter()
					.map(|row| Candidate { concept: row.concept, score: row.score })
					.collect::<Vec<_>>();

				ranking::rank_semantic(&mut candidates);

				candidates
			},
		};

		candidates.truncate(limit as usize);

		debug!(?strategy, count = candidates.len(), "Search ranked.");

		let scored = strategy != SearchStrategy::Exact;
		let items = candidates
			.into_iter()
			.map(|candidate| {
				let score = scored.then_some(candidate.score);

				ConceptSummary::from_concept(candidate.concept, score)
			})
			.collect();

		Ok(SearchResponse { strategy, items })
	}

	async fn embed_query(&self, query: &str) -> Result<Vec<f32>> {
		self.embedding
			.embed(&self.cfg.providers.embedding, query)
			.await
			.map_err(|err| Error::EmbeddingUnavailable { message: err.to_string() })
	}
}
