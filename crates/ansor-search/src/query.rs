// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Query canonicalization before the query is embedded in the request URL.

/// How the free-text query is escaped into the `q` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryEscaping {
	/// Spaces become `+`; nothing else is touched. Queries containing `&`,
	/// `#`, `=` or `?` can therefore produce a malformed request.
	#[default]
	Legacy,
	/// `application/x-www-form-urlencoded`: spaces become `+`, reserved and
	/// non-ASCII bytes are percent-encoded.
	PercentEncode,
}

impl QueryEscaping {
	pub fn apply(self, query: &str) -> String {
		match self {
			QueryEscaping::Legacy => canonicalize(query),
			QueryEscaping::PercentEncode => {
				url::form_urlencoded::byte_serialize(query.as_bytes()).collect()
			}
		}
	}
}

/// Replaces every literal space with `+`. All other characters pass through.
pub fn canonicalize(query: &str) -> String {
	query.replace(' ', "+")
}
