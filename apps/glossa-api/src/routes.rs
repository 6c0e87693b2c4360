use axum::{
	Json, Router,
	extract::{Path, Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use serde::{Deserialize, Serialize};

use glossa_domain::strategy;
use glossa_service::{
	AncestorItem, ConceptDetailResponse, DescendantItem, DescendantSearchRequest, DomainItem,
	Error as ServiceError, RelatedItem, SearchRequest, SearchResponse, VocabularyItem,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/search", get(search))
		.route("/concept/{concept_id}", get(concept_detail))
		.route("/concept/{concept_id}/ancestors", get(ancestors))
		.route("/concept/{concept_id}/descendants", get(descendants))
		.route("/concept/{concept_id}/similar", get(similar))
		.route("/concept/{concept_id}/descendants/search", get(search_descendants))
		.route("/vocabularies", get(vocabularies))
		.route("/domains", get(domains))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

/// Flags arrive as opaque strings; only the literal `"true"` enables one.
#[derive(Debug, Deserialize)]
struct SearchParams {
	#[serde(default)]
	q: String,
	fuzzy: Option<String>,
	semantic: Option<String>,
	standard_only: Option<String>,
	vocabulary_id: Option<String>,
	domain_id: Option<String>,
	limit: Option<i64>,
}

async fn search(
	State(state): State<AppState>,
	Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
	let request = SearchRequest {
		query: params.q,
		fuzzy: strategy::flag_enabled(params.fuzzy.as_deref()),
		semantic: strategy::flag_enabled(params.semantic.as_deref()),
		standard_only: strategy::flag_enabled(params.standard_only.as_deref()),
		vocabulary_id: params.vocabulary_id,
		domain_id: params.domain_id,
		limit: params.limit,
	};
	let response = state.service.search(request).await?;

	Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct LimitParams {
	limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct DescendantSearchParams {
	#[serde(default)]
	q: String,
	limit: Option<i64>,
}

async fn concept_detail(
	State(state): State<AppState>,
	Path(concept_id): Path<i32>,
) -> Result<Json<ConceptDetailResponse>, ApiError> {
	let response = state.service.concept_detail(concept_id).await?;

	Ok(Json(response))
}

async fn ancestors(
	State(state): State<AppState>,
	Path(concept_id): Path<i32>,
	Query(params): Query<LimitParams>,
) -> Result<Json<Vec<AncestorItem>>, ApiError> {
	let response = state.service.ancestors(concept_id, params.limit).await?;

	Ok(Json(response))
}

async fn descendants(
	State(state): State<AppState>,
	Path(concept_id): Path<i32>,
	Query(params): Query<LimitParams>,
) -> Result<Json<Vec<DescendantItem>>, ApiError> {
	let response = state.service.descendants(concept_id, params.limit).await?;

	Ok(Json(response))
}

async fn similar(
	State(state): State<AppState>,
	Path(concept_id): Path<i32>,
	Query(params): Query<LimitParams>,
) -> Result<Json<Vec<RelatedItem>>, ApiError> {
	let response = state.service.related(concept_id, params.limit).await?;

	Ok(Json(response))
}

async fn search_descendants(
	State(state): State<AppState>,
	Path(concept_id): Path<i32>,
	Query(params): Query<DescendantSearchParams>,
) -> Result<Json<Vec<DescendantItem>>, ApiError> {
	let request =
		DescendantSearchRequest { concept_id, query: params.q, limit: params.limit };
	let response = state.service.search_descendants(request).await?;

	Ok(Json(response))
}

async fn vocabularies(State(state): State<AppState>) -> Result<Json<Vec<VocabularyItem>>, ApiError> {
	let response = state.service.vocabularies().await?;

	Ok(Json(response))
}

async fn domains(State(state): State<AppState>) -> Result<Json<Vec<DomainItem>>, ApiError> {
	let response = state.service.domains().await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match &err {
			ServiceError::InvalidRequest { .. } =>
				Self::new(StatusCode::BAD_REQUEST, "invalid_request", err.to_string()),
			ServiceError::NotFound { .. } =>
				Self::new(StatusCode::NOT_FOUND, "not_found", err.to_string()),
			ServiceError::EmbeddingUnavailable { .. } => Self::new(
				StatusCode::SERVICE_UNAVAILABLE,
				"search_backend_unavailable",
				err.to_string(),
			),
			ServiceError::Storage { .. } =>
				Self::new(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", err.to_string()),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
