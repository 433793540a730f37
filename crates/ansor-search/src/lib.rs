// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Google Custom Search JSON API client.
//!
//! [`CseClient`] builds the request URL from an API key, an engine id (cx)
//! and a free-text query, performs a single GET through a [`Transport`] and
//! decodes the body into a typed [`SearchResponse`]. There is no retry,
//! pagination or caching; each call is one request.

pub mod client;
pub mod error;
pub mod query;
pub mod transport;
pub mod types;

pub use client::{CseClient, DEFAULT_BASE_URL};
pub use error::{ConstructionError, CseError};
pub use query::{canonicalize, QueryEscaping};
pub use transport::{BoxError, ReqwestTransport, Transport, TransportResponse};
pub use types::{
	Context, PagemapAttributes, Queries, Query, SearchInformation, SearchItem, SearchResponse,
	UrlTemplate,
};
