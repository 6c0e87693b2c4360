use std::sync::Arc;

use glossa_service::GlossaService;
use glossa_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<GlossaService>,
}
impl AppState {
	pub async fn new(config: glossa_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema(config.providers.embedding.dimensions).await?;

		let service = GlossaService::new(config, db);

		Ok(Self { service: Arc::new(service) })
	}
}
