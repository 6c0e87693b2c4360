use glossa_storage::concepts;

use crate::{GlossaService, Result};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct VocabularyItem {
	pub vocabulary_id: String,
	pub vocabulary_name: String,
	pub vocabulary_version: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DomainItem {
	pub domain_id: String,
	pub domain_name: String,
}

impl GlossaService {
	/// Reference dimensions for filter pickers, ordered by id.
	pub async fn vocabularies(&self) -> Result<Vec<VocabularyItem>> {
		let rows = concepts::list_vocabularies(&self.db).await?;

		Ok(rows
			.into_iter()
			.map(|row| VocabularyItem {
				vocabulary_id: row.vocabulary_id,
				vocabulary_name: row.vocabulary_name,
				vocabulary_version: row.vocabulary_version,
			})
			.collect())
	}

	pub async fn domains(&self) -> Result<Vec<DomainItem>> {
		let rows = concepts::list_domains(&self.db).await?;

		Ok(rows
			.into_iter()
			.map(|row| DomainItem { domain_id: row.domain_id, domain_name: row.domain_name })
			.collect())
	}
}
