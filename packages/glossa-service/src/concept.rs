use glossa_domain::{dedup, ranking, strategy};
use glossa_storage::{concepts, hierarchy, models::HierarchyNeighbor};

use crate::{ConceptSummary, Error, GlossaService, MAPPING_RELATIONSHIPS, Result};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AncestorItem {
	pub concept_id: i32,
	pub concept_name: String,
	pub vocabulary_id: String,
	pub concept_code: String,
	pub min_levels_of_separation: i32,
	pub max_levels_of_separation: i32,
}
impl From<HierarchyNeighbor> for AncestorItem {
	fn from(row: HierarchyNeighbor) -> Self {
		Self {
			concept_id: row.concept_id,
			concept_name: row.concept_name,
			vocabulary_id: row.vocabulary_id,
			concept_code: row.concept_code,
			min_levels_of_separation: row.min_levels_of_separation,
			max_levels_of_separation: row.max_levels_of_separation,
		}
	}
}

/// Direct descendants share the ancestor row shape; separation is always 1.
pub type DescendantItem = AncestorItem;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RelatedItem {
	pub concept_id: i32,
	pub concept_name: String,
	pub vocabulary_id: String,
	pub domain_id: String,
	pub concept_code: String,
	pub standard_concept: Option<String>,
	pub relationship_id: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ConceptDetailResponse {
	pub concept: ConceptSummary,
	pub ancestors: Vec<AncestorItem>,
	pub descendants: Vec<DescendantItem>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DescendantSearchRequest {
	pub concept_id: i32,
	pub query: String,
	#[serde(default)]
	pub limit: Option<i64>,
}

impl GlossaService {
	/// Fetches a concept for display, with its ancestors (closest first) and
	/// direct descendants. Unknown ids are a NotFound error here; this is
	/// the one navigator operation that validates existence.
	pub async fn concept_detail(&self, concept_id: i32) -> Result<ConceptDetailResponse> {
		let concept = concepts::get_concept(&self.db, concept_id)
			.await?
			.ok_or_else(|| Error::NotFound { message: format!("Concept {concept_id}.") })?;
		let limit = self.cfg.search.default_limit;
		let ancestors = self.ancestors(concept_id, Some(limit)).await?;
		let descendants = self.descendants(concept_id, Some(limit)).await?;

		Ok(ConceptDetailResponse {
			concept: ConceptSummary::from_concept(concept, None),
			ancestors,
			descendants,
		})
	}

	/// All ancestors of the concept ordered by minimum separation ascending.
	/// Unknown ids yield an empty list; the closure table is authoritative
	/// and absence of rows is a valid empty result.
	pub async fn ancestors(
		&self,
		concept_id: i32,
		limit: Option<i64>,
	) -> Result<Vec<AncestorItem>> {
		let limit = self.resolve_limit(limit)?;
		let rows = hierarchy::ancestors(&self.db, concept_id, limit).await?;

		Ok(rows.into_iter().map(AncestorItem::from).collect())
	}

	/// Direct descendants only (minimum separation exactly 1).
	pub async fn descendants(
		&self,
		concept_id: i32,
		limit: Option<i64>,
	) -> Result<Vec<DescendantItem>> {
		let limit = self.resolve_limit(limit)?;
		let rows = hierarchy::direct_descendants(&self.db, concept_id, limit).await?;

		Ok(rows.into_iter().map(DescendantItem::from).collect())
	}

	/// Mapping neighbors in both directions, valid edges only, deduplicated
	/// by neighbor concept id with outgoing rows taking precedence, then
	/// truncated to the limit.
	pub async fn related(&self, concept_id: i32, limit: Option<i64>) -> Result<Vec<RelatedItem>> {
		let limit = self.resolve_limit(limit)?;
		let kinds = MAPPING_RELATIONSHIPS.iter().map(|kind| kind.to_string()).collect::<Vec<_>>();
		let cap = self.candidate_cap(limit);
		let outgoing = hierarchy::related_outgoing(&self.db, concept_id, &kinds, cap).await?;
		let incoming = hierarchy::related_incoming(&self.db, concept_id, &kinds, cap).await?;
		let mut combined = Vec::with_capacity(outgoing.len() + incoming.len());

		combined.extend(outgoing);
		combined.extend(incoming);

		let mut deduped = dedup::dedup_by_concept_id(combined, |row| row.concept_id);

		deduped.truncate(limit as usize);

		Ok(deduped
			.into_iter()
			.map(|row| RelatedItem {
				concept_id: row.concept_id,
				concept_name: row.concept_name,
				vocabulary_id: row.vocabulary_id,
				domain_id: row.domain_id,
				concept_code: row.concept_code,
				standard_concept: row.standard_concept,
				relationship_id: row.relationship_id,
			})
			.collect())
	}

	/// Case-insensitive name search restricted to direct descendants. An
	/// empty query or an ancestor without direct descendants short-circuits
	/// to an empty list before any name matching runs.
	pub async fn search_descendants(
		&self,
		req: DescendantSearchRequest,
	) -> Result<Vec<DescendantItem>> {
		let limit = self.resolve_limit(req.limit)?;
		let Some(query) = strategy::normalize_query(&req.query) else {
			return Ok(Vec::new());
		};
		let cap = self.candidate_cap(limit);
		let rows = hierarchy::direct_descendants(&self.db, req.concept_id, cap).await?;

		if rows.is_empty() {
			return Ok(Vec::new());
		}

		let mut matched = rows
			.into_iter()
			.filter(|row| ranking::name_contains(&row.concept_name, query))
			.map(DescendantItem::from)
			.collect::<Vec<_>>();

		matched.truncate(limit as usize);

		Ok(matched)
	}
}
