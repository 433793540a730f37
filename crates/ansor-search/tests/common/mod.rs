// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Canned transports for driving `CseClient` without a network.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use ansor_search::{BoxError, Transport, TransportResponse};
use async_trait::async_trait;

/// What the stub does when asked for a URL.
#[derive(Debug, Clone)]
pub enum Reply {
	Respond { status: u16, body: String },
	FailBody { status: u16, content_length: Option<u64> },
	FailRequest(String),
}

impl Reply {
	pub fn ok(body: impl Into<String>) -> Self {
		Reply::Respond {
			status: 200,
			body: body.into(),
		}
	}

	pub fn status(status: u16, body: impl Into<String>) -> Self {
		Reply::Respond {
			status,
			body: body.into(),
		}
	}
}

type Responder = dyn Fn(&str) -> Reply + Send + Sync;

/// Answers every GET by calling a closure with the requested URL and
/// records the URLs it saw.
pub struct StubTransport {
	responder: Box<Responder>,
	requests: Mutex<Vec<String>>,
}

impl std::fmt::Debug for StubTransport {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("StubTransport").finish_non_exhaustive()
	}
}

impl StubTransport {
	pub fn new(responder: impl Fn(&str) -> Reply + Send + Sync + 'static) -> Arc<Self> {
		Arc::new(Self {
			responder: Box::new(responder),
			requests: Mutex::new(Vec::new()),
		})
	}

	pub fn always(reply: Reply) -> Arc<Self> {
		Self::new(move |_| reply.clone())
	}

	pub fn requests(&self) -> Vec<String> {
		self.requests.lock().unwrap().clone()
	}
}

#[async_trait]
impl Transport for StubTransport {
	async fn get(&self, url: &str) -> Result<Box<dyn TransportResponse>, BoxError> {
		self.requests.lock().unwrap().push(url.to_string());
		match (self.responder)(url) {
			Reply::Respond { status, body } => Ok(Box::new(StubResponse {
				status,
				content_length: Some(body.len() as u64),
				body: Ok(body.into_bytes()),
			})),
			Reply::FailBody {
				status,
				content_length,
			} => Ok(Box::new(StubResponse {
				status,
				content_length,
				body: Err("connection reset while reading body".to_string()),
			})),
			Reply::FailRequest(message) => Err(message.into()),
		}
	}
}

struct StubResponse {
	status: u16,
	content_length: Option<u64>,
	body: Result<Vec<u8>, String>,
}

#[async_trait]
impl TransportResponse for StubResponse {
	fn status(&self) -> u16 {
		self.status
	}

	fn content_length(&self) -> Option<u64> {
		self.content_length
	}

	async fn bytes(self: Box<Self>) -> Result<Vec<u8>, BoxError> {
		let this = *self;
		this.body.map_err(BoxError::from)
	}
}

/// Extracts the raw `q` value from a request URL.
pub fn query_param(url: &str) -> &str {
	url.split_once("&q=").map(|(_, q)| q).unwrap_or_default()
}

pub const TWO_ITEMS: &str = r#"{
	"kind": "customsearch#search",
	"searchInformation": {
		"searchTime": 0.21,
		"formattedSearchTime": "0.21",
		"totalResults": "2",
		"formattedTotalResults": "2"
	},
	"items": [
		{
			"kind": "customsearch#result",
			"title": "The Rust Programming Language",
			"htmlTitle": "The <b>Rust</b> Programming Language",
			"link": "https://doc.rust-lang.org/book/",
			"displayLink": "doc.rust-lang.org",
			"snippet": "An introductory book about Rust.",
			"htmlSnippet": "An introductory book about <b>Rust</b>.",
			"formattedUrl": "https://doc.rust-lang.org/book/",
			"htmlFormattedUrl": "https://doc.<b>rust</b>-lang.org/book/",
			"pagemap": {
				"cse_thumbnail": [
					{ "src": "https://encrypted-tbn0.gstatic.com/images?q=tbn:1", "width": "225", "height": "225" }
				],
				"metatags": [
					{
						"og:image": "https://doc.rust-lang.org/book/og.png",
						"og:type": "website",
						"og:title": "The Rust Book",
						"og:description": "Learn Rust",
						"og:url": "https://doc.rust-lang.org/book/",
						"twitter:card": "summary_large_image",
						"twitter:title": "The Rust Book",
						"twitter:description": "Learn Rust",
						"twitter:image": "https://doc.rust-lang.org/book/tw.png",
						"viewport": "width=device-width, initial-scale=1"
					}
				]
			}
		},
		{
			"kind": "customsearch#result",
			"title": "Rust by Example",
			"htmlTitle": "<b>Rust</b> by Example",
			"link": "https://doc.rust-lang.org/rust-by-example/",
			"displayLink": "doc.rust-lang.org",
			"snippet": "A collection of runnable examples.",
			"htmlSnippet": "A collection of runnable examples.",
			"formattedUrl": "https://doc.rust-lang.org/rust-by-example/",
			"htmlFormattedUrl": "https://doc.<b>rust</b>-lang.org/<b>rust</b>-by-example/",
			"mime": "application/pdf",
			"fileFormat": "PDF/Adobe Acrobat"
		}
	]
}"#;
