// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Custom Search client.

use thiserror::Error;

use crate::transport::BoxError;

/// Invalid credentials passed when building a [`crate::CseClient`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
	#[error("apiKey cannot be empty")]
	EmptyApiKey,

	#[error("engineId cannot be empty")]
	EmptyEngineId,
}

/// Errors returned by [`crate::CseClient::search`]. None are retried.
#[derive(Debug, Error)]
pub enum CseError {
	/// The GET never produced a response (connect, DNS, timeout, ...).
	#[error("failed to get search results: {source}")]
	Transport {
		#[source]
		source: BoxError,
	},

	/// The API answered with a status other than 200.
	#[error("failed to perform search, got {status}: {body}")]
	Upstream { status: u16, body: String },

	/// The API answered 200 but the body could not be read.
	#[error(
		"failed to read response body. Length: {length}, StatusCode: {status}: {source}",
		length = describe_length(.content_length)
	)]
	Read {
		content_length: Option<u64>,
		status: u16,
		#[source]
		source: BoxError,
	},

	/// The body was read but is not a valid search response.
	#[error("failed to unmarshal response body:\n{body}: {source}")]
	Decode {
		body: String,
		#[source]
		source: serde_json::Error,
	},
}

impl CseError {
	/// HTTP status of the response, when one was received.
	pub fn status(&self) -> Option<u16> {
		match self {
			CseError::Transport { .. } | CseError::Decode { .. } => None,
			CseError::Upstream { status, .. } | CseError::Read { status, .. } => Some(*status),
		}
	}
}

fn describe_length(content_length: &Option<u64>) -> String {
	match content_length {
		Some(len) => len.to_string(),
		None => "unknown".to_string(),
	}
}
