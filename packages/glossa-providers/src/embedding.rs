use std::{sync::OnceLock, time::Duration};

use reqwest::Client;
use serde_json::Value;

use glossa_config::EmbeddingProviderConfig;

use crate::{Error, Result};

static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// The underlying HTTP handle is built at most once per process and shared
/// read-only across concurrent callers. The first caller's timeout wins;
/// every request in a process uses the same provider config in practice.
fn client(timeout_ms: u64) -> Result<&'static Client> {
	if let Some(client) = HTTP_CLIENT.get() {
		return Ok(client);
	}

	let built = Client::builder().timeout(Duration::from_millis(timeout_ms)).build()?;

	Ok(HTTP_CLIENT.get_or_init(|| built))
}

/// Embeds a single query string, returning a unit-L2-norm vector of exactly
/// `cfg.dimensions` components.
pub async fn embed_one(cfg: &EmbeddingProviderConfig, text: &str) -> Result<Vec<f32>> {
	let mut vectors = embed(cfg, &[text.to_string()]).await?;

	if vectors.len() != 1 {
		return Err(Error::InvalidResponse {
			message: format!("Expected one embedding, provider returned {}.", vectors.len()),
		});
	}

	Ok(vectors.remove(0))
}

pub async fn embed(cfg: &EmbeddingProviderConfig, texts: &[String]) -> Result<Vec<Vec<f32>>> {
	let client = client(cfg.timeout_ms)?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"input": texts,
		"dimensions": cfg.dimensions,
	});
	let res = client
		.post(url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;
	let mut vectors = parse_embedding_response(json)?;

	for vec in &mut vectors {
		if vec.len() != cfg.dimensions as usize {
			return Err(Error::InvalidResponse {
				message: format!(
					"Embedding dimension mismatch: expected {}, got {}.",
					cfg.dimensions,
					vec.len()
				),
			});
		}

		glossa_domain::vector::l2_normalize(vec);
	}

	Ok(vectors)
}

fn parse_embedding_response(json: Value) -> Result<Vec<Vec<f32>>> {
	let data = json.get("data").and_then(|v| v.as_array()).ok_or_else(|| {
		Error::InvalidResponse { message: "Embedding response is missing data array.".to_string() }
	})?;

	let mut indexed: Vec<(usize, Vec<f32>)> = Vec::with_capacity(data.len());

	for (fallback_index, item) in data.iter().enumerate() {
		let index = item
			.get("index")
			.and_then(|v| v.as_u64())
			.map(|v| v as usize)
			.unwrap_or(fallback_index);
		let embedding = item.get("embedding").and_then(|v| v.as_array()).ok_or_else(|| {
			Error::InvalidResponse { message: "Embedding item missing embedding array.".to_string() }
		})?;
		let mut vec = Vec::with_capacity(embedding.len());

		for value in embedding {
			let number = value.as_f64().ok_or_else(|| Error::InvalidResponse {
				message: "Embedding value must be numeric.".to_string(),
			})?;

			vec.push(number as f32);
		}

		indexed.push((index, vec));
	}

	indexed.sort_by_key(|(index, _)| *index);

	Ok(indexed.into_iter().map(|(_, vec)| vec).collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_embeddings_in_index_order() {
		let json = serde_json::json!({
			"data": [
				{ "index": 1, "embedding": [2.0, 3.0] },
				{ "index": 0, "embedding": [0.5, 1.5] }
			]
		});
		let parsed = parse_embedding_response(json).expect("parse failed");

		assert_eq!(parsed.len(), 2);
		assert_eq!(parsed[0], vec![0.5, 1.5]);
		assert_eq!(parsed[1], vec![2.0, 3.0]);
	}

	#[test]
	fn rejects_missing_data_array() {
		let json = serde_json::json!({ "unexpected": [] });

		assert!(parse_embedding_response(json).is_err());
	}

	#[test]
	fn rejects_non_numeric_values() {
		let json = serde_json::json!({
			"data": [{ "index": 0, "embedding": [1.0, "oops"] }]
		});

		assert!(parse_embedding_response(json).is_err());
	}
}
