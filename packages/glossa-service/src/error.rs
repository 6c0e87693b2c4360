pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	/// The semantic search backend could not produce a query embedding.
	/// Distinguishable so callers can fall back to another strategy; exact
	/// and fuzzy requests are unaffected.
	#[error("Search backend unavailable: {message}")]
	EmbeddingUnavailable { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<sqlx::Error> for Error {
	fn from(err: sqlx::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

impl From<glossa_storage::Error> for Error {
	fn from(err: glossa_storage::Error) -> Self {
		match err {
			glossa_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			glossa_storage::Error::InvalidArgument(message) => Self::InvalidRequest { message },
		}
	}
}
