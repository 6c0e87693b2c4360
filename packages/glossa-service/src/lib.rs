pub mod concept;
pub mod date_serde;
pub mod reference;
pub mod search;

mod error;

pub use error::{Error, Result};

use std::{future::Future, pin::Pin, sync::Arc};

pub use concept::{
	AncestorItem, ConceptDetailResponse, DescendantItem, DescendantSearchRequest, RelatedItem,
};
pub use reference::{DomainItem, VocabularyItem};
pub use search::{ConceptSummary, SearchRequest, SearchResponse};

use glossa_config::{Config, EmbeddingProviderConfig};
use glossa_storage::db::Db;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The only relationship kinds eligible for neighbor traversal.
pub const MAPPING_RELATIONSHIPS: [&str; 2] = ["Maps to", "Mapped from"];

/// Seam for the query-embedding backend. The default implementation calls the
/// configured HTTP provider; tests substitute deterministic stubs.
pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		text: &'a str,
	) -> BoxFuture<'a, glossa_providers::Result<Vec<f32>>>;
}

struct HttpEmbedding;
impl EmbeddingProvider for HttpEmbedding {
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		text: &'a str,
	) -> BoxFuture<'a, glossa_providers::Result<Vec<f32>>> {
		Box::pin(glossa_providers::embedding::embed_one(cfg, text))
	}
}

pub struct GlossaService {
	pub cfg: Config,
	pub db: Db,
	pub embedding: Arc<dyn EmbeddingProvider>,
}
impl GlossaService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self::with_embedding(cfg, db, Arc::new(HttpEmbedding))
	}

	pub fn with_embedding(cfg: Config, db: Db, embedding: Arc<dyn EmbeddingProvider>) -> Self {
		Self { cfg, db, embedding }
	}

	pub(crate) fn resolve_limit(&self, limit: Option<i64>) -> Result<i64> {
		match limit {
			None => Ok(self.cfg.search.default_limit),
			Some(value) if value > 0 => Ok(value),
			Some(_) => Err(Error::InvalidRequest {
				message: "limit must be a positive integer.".to_string(),
			}),
		}
	}

	/// Store-level fetch cap: at least the configured candidate pool, and
	/// never smaller than the requested limit.
	pub(crate) fn candidate_cap(&self, limit: i64) -> i64 {
		limit.max(self.cfg.search.candidate_pool)
	}
}
