// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Response schema of the Custom Search JSON API.
//!
//! Every field defaults when the API omits it, so a body of `{}` or
//! `{"items": []}` decodes to an empty response rather than an error. An
//! explicit `null` is treated the same as an absent key.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Result of one query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResponse {
	#[serde(deserialize_with = "null_as_default")]
	pub kind: String,
	#[serde(deserialize_with = "null_as_default")]
	pub url: UrlTemplate,
	#[serde(deserialize_with = "null_as_default")]
	pub queries: Queries,
	#[serde(deserialize_with = "null_as_default")]
	pub context: Context,
	#[serde(deserialize_with = "null_as_default")]
	pub search_information: SearchInformation,
	/// Results in upstream relevance order.
	#[serde(deserialize_with = "null_as_default")]
	pub items: Vec<SearchItem>,
}

/// OpenSearch URL template describing the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlTemplate {
	#[serde(rename = "type", deserialize_with = "null_as_default")]
	pub kind: String,
	#[serde(deserialize_with = "null_as_default")]
	pub template: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Queries {
	#[serde(deserialize_with = "null_as_default")]
	pub request: Vec<Query>,
	#[serde(deserialize_with = "null_as_default")]
	pub next_page: Vec<Query>,
}

/// Echo of the parameters of a request (or of the next page request).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Query {
	#[serde(deserialize_with = "null_as_default")]
	pub title: String,
	/// Upstream sends this as a decimal string.
	#[serde(deserialize_with = "null_as_default")]
	pub total_results: String,
	#[serde(deserialize_with = "null_as_default")]
	pub search_terms: String,
	#[serde(deserialize_with = "null_as_default")]
	pub count: u32,
	#[serde(deserialize_with = "null_as_default")]
	pub start_index: u32,
	#[serde(deserialize_with = "null_as_default")]
	pub input_encoding: String,
	#[serde(deserialize_with = "null_as_default")]
	pub output_encoding: String,
	#[serde(deserialize_with = "null_as_default")]
	pub safe: String,
	#[serde(deserialize_with = "null_as_default")]
	pub cx: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
	#[serde(deserialize_with = "null_as_default")]
	pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchInformation {
	/// Seconds.
	#[serde(deserialize_with = "null_as_default")]
	pub search_time: f64,
	#[serde(deserialize_with = "null_as_default")]
	pub formatted_search_time: String,
	#[serde(deserialize_with = "null_as_default")]
	pub total_results: String,
	#[serde(deserialize_with = "null_as_default")]
	pub formatted_total_results: String,
}

/// A single search result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchItem {
	#[serde(deserialize_with = "null_as_default")]
	pub kind: String,
	#[serde(deserialize_with = "null_as_default")]
	pub title: String,
	#[serde(deserialize_with = "null_as_default")]
	pub html_title: String,
	#[serde(deserialize_with = "null_as_default")]
	pub link: String,
	#[serde(deserialize_with = "null_as_default")]
	pub display_link: String,
	#[serde(deserialize_with = "null_as_default")]
	pub snippet: String,
	#[serde(deserialize_with = "null_as_default")]
	pub html_snippet: String,
	#[serde(deserialize_with = "null_as_default")]
	pub formatted_url: String,
	#[serde(deserialize_with = "null_as_default")]
	pub html_formatted_url: String,
	/// Structured data group name (`metatags`, `cse_image`, ...) to records.
	#[serde(deserialize_with = "null_as_default")]
	pub pagemap: BTreeMap<String, Vec<PagemapAttributes>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub mime: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub file_format: Option<String>,
}

/// Decodes `null` as the field's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One pagemap record. Attributes the API did not send stay `None` and are
/// omitted when re-serialized; unknown attributes are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagemapAttributes {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub src: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub width: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub height: Option<String>,

	#[serde(rename = "og:image", skip_serializing_if = "Option::is_none")]
	pub og_image: Option<String>,
	#[serde(rename = "og:type", skip_serializing_if = "Option::is_none")]
	pub og_type: Option<String>,
	#[serde(rename = "og:title", skip_serializing_if = "Option::is_none")]
	pub og_title: Option<String>,
	#[serde(rename = "og:description", skip_serializing_if = "Option::is_none")]
	pub og_description: Option<String>,
	#[serde(rename = "og:url", skip_serializing_if = "Option::is_none")]
	pub og_url: Option<String>,

	#[serde(rename = "twitter:card", skip_serializing_if = "Option::is_none")]
	pub twitter_card: Option<String>,
	#[serde(rename = "twitter:title", skip_serializing_if = "Option::is_none")]
	pub twitter_title: Option<String>,
	#[serde(rename = "twitter:description", skip_serializing_if = "Option::is_none")]
	pub twitter_description: Option<String>,
	#[serde(rename = "twitter:image", skip_serializing_if = "Option::is_none")]
	pub twitter_image: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub viewport: Option<String>,
}

impl SearchResponse {
	/// `(title, link)` for each item, in order.
	pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
		self
			.items
			.iter()
			.map(|item| (item.title.as_str(), item.link.as_str()))
	}
}
