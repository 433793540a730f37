// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP transport seam used by [`crate::CseClient`].
//!
//! The client only needs a GET, the status, the advertised length and the
//! body. Keeping that behind a trait lets tests inject canned responses and
//! lets callers share one `reqwest::Client` (and its pool) across clients.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

/// Boxed error carried as the cause of transport and read failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait]
pub trait Transport: fmt::Debug + Send + Sync {
	/// Issues a GET. An `Err` means no response was received at all.
	async fn get(&self, url: &str) -> Result<Box<dyn TransportResponse>, BoxError>;
}

#[async_trait]
pub trait TransportResponse: Send {
	fn status(&self) -> u16;

	fn content_length(&self) -> Option<u64>;

	/// Reads the whole body. Consumes the response so the underlying
	/// connection is released whatever the outcome.
	async fn bytes(self: Box<Self>) -> Result<Vec<u8>, BoxError>;
}

/// Production transport over `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
	http_client: Client,
}

impl ReqwestTransport {
	/// Creates a transport with the shared User-Agent and a 10 second timeout.
	pub fn new() -> Self {
		Self {
			http_client: ansor_common_http::new_client_with_timeout(REQUEST_TIMEOUT),
		}
	}

	/// Wraps an existing client, e.g. to share its connection pool.
	pub fn from_client(http_client: Client) -> Self {
		Self { http_client }
	}
}

impl Default for ReqwestTransport {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Transport for ReqwestTransport {
	async fn get(&self, url: &str) -> Result<Box<dyn TransportResponse>, BoxError> {
		let response = self.http_client.get(url).send().await?;
		Ok(Box::new(ReqwestResponse(response)))
	}
}

struct ReqwestResponse(reqwest::Response);

#[async_trait]
impl TransportResponse for ReqwestResponse {
	fn status(&self) -> u16 {
		self.0.status().as_u16()
	}

	fn content_length(&self) -> Option<u64> {
		self.0.content_length()
	}

	async fn bytes(self: Box<Self>) -> Result<Vec<u8>, BoxError> {
		let body = self.0.bytes().await?;
		Ok(body.to_vec())
	}
}
