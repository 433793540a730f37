// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Google Custom Search client implementation.

use std::sync::Arc;

use ansor_common_secret::{SecretString, REDACTED};
use tracing::{debug, instrument, trace};

use crate::error::{ConstructionError, CseError};
use crate::query::QueryEscaping;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::SearchResponse;

pub const DEFAULT_BASE_URL: &str = "https://customsearch.googleapis.com/customsearch/v1";

/// Client for the Google Custom Search JSON API.
///
/// Immutable once built. Cloning shares the transport, so one client (or
/// its clones) can serve any number of concurrent searches.
#[derive(Debug, Clone)]
pub struct CseClient {
	transport: Arc<dyn Transport>,
	api_key: SecretString,
	cx: String,
	base_url: String,
	escaping: QueryEscaping,
}

impl CseClient {
	/// Creates a client with a default [`ReqwestTransport`].
	///
	/// # Panics
	///
	/// Panics if `api_key` or `cx` is empty.
	pub fn new(api_key: impl Into<String>, cx: impl Into<String>) -> Self {
		Self::with_transport(api_key, cx, Arc::new(ReqwestTransport::new()))
	}

	/// Creates a client over a caller-supplied transport.
	///
	/// # Panics
	///
	/// Panics if `api_key` or `cx` is empty.
	pub fn with_transport(
		api_key: impl Into<String>,
		cx: impl Into<String>,
		transport: Arc<dyn Transport>,
	) -> Self {
		match Self::try_with_transport(api_key, cx, transport) {
			Ok(client) => client,
			Err(e) => panic!("{e}"),
		}
	}

	/// Like [`CseClient::new`] but reports empty credentials as an error.
	pub fn try_new(
		api_key: impl Into<String>,
		cx: impl Into<String>,
	) -> Result<Self, ConstructionError> {
		Self::try_with_transport(api_key, cx, Arc::new(ReqwestTransport::new()))
	}

	/// Like [`CseClient::with_transport`] but reports empty credentials as an
	/// error.
	pub fn try_with_transport(
		api_key: impl Into<String>,
		cx: impl Into<String>,
		transport: Arc<dyn Transport>,
	) -> Result<Self, ConstructionError> {
		let api_key = api_key.into();
		let cx = cx.into();

		if api_key.is_empty() {
			return Err(ConstructionError::EmptyApiKey);
		}
		if cx.is_empty() {
			return Err(ConstructionError::EmptyEngineId);
		}

		Ok(Self {
			transport,
			api_key: SecretString::new(api_key),
			cx,
			base_url: DEFAULT_BASE_URL.to_string(),
			escaping: QueryEscaping::default(),
		})
	}

	/// Sets a custom endpoint (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Selects how the query is escaped into the URL. Defaults to
	/// [`QueryEscaping::Legacy`].
	pub fn with_query_escaping(mut self, escaping: QueryEscaping) -> Self {
		self.escaping = escaping;
		self
	}

	pub fn engine_id(&self) -> &str {
		&self.cx
	}

	pub fn query_escaping(&self) -> QueryEscaping {
		self.escaping
	}

	/// Builds the request URL. The key and engine id are interpolated as-is.
	pub fn request_url(&self, query: &str) -> String {
		self.url_with_key(self.api_key.expose(), query)
	}

	fn url_with_key(&self, key: &str, query: &str) -> String {
		format!(
			"{}?key={}&cx={}&q={}",
			self.base_url,
			key,
			self.cx,
			self.escaping.apply(query)
		)
	}

	/// Runs one search: a single GET, status check and JSON decode.
	#[instrument(skip(self), fields(cx = %self.cx))]
	pub async fn search(&self, query: &str) -> Result<SearchResponse, CseError> {
		let url = self.request_url(query);
		debug!(url = %self.url_with_key(REDACTED, query), "Sending search request");

		let response = self
			.transport
			.get(&url)
			.await
			.map_err(|source| CseError::Transport { source })?;

		let status = response.status();
		let content_length = response.content_length();
		debug!(status, "Received search response");

		if status != 200 {
			// Best-effort: a failed read still reports the status.
			let body = response.bytes().await.unwrap_or_default();
			return Err(CseError::Upstream {
				status,
				body: String::from_utf8_lossy(&body).into_owned(),
			});
		}

		let body = response.bytes().await.map_err(|source| CseError::Read {
			content_length,
			status,
			source,
		})?;

		trace!(bytes = body.len(), "Response body read");

		let parsed: SearchResponse =
			serde_json::from_slice(&body).map_err(|source| CseError::Decode {
				body: String::from_utf8_lossy(&body).into_owned(),
				source,
			})?;

		debug!(result_count = parsed.items.len(), "Search completed");
		Ok(parsed)
	}
}
