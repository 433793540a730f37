// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Custom Search credentials configuration.

use ansor_common_secret::SecretString;
use thiserror::Error;

use crate::env::{load_env, load_secret_env, SecretEnvError};

/// Environment variable holding the Custom Search API key.
pub const API_KEY_VAR: &str = "GSE_KEY";
/// Environment variable holding the search engine identifier (cx).
pub const ENGINE_ID_VAR: &str = "GSE_ENG";

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("missing {what}: set {var} or pass it on the command line")]
	Missing { what: &'static str, var: &'static str },

	#[error("{what} is empty (from {var})")]
	Empty { what: &'static str, var: &'static str },

	#[error(transparent)]
	Secret(#[from] SecretEnvError),
}

/// Partial credentials from one source. Fields left `None` fall through to
/// the next layer when merged.
#[derive(Debug, Clone, Default)]
pub struct SearchConfigLayer {
	pub api_key: Option<SecretString>,
	pub engine_id: Option<String>,
}

impl SearchConfigLayer {
	/// Reads `GSE_KEY` (or `GSE_KEY_FILE`) and `GSE_ENG`.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_env_vars(API_KEY_VAR, ENGINE_ID_VAR)
	}

	pub fn from_env_vars(api_key_var: &str, engine_id_var: &str) -> Result<Self, ConfigError> {
		Ok(Self {
			api_key: load_secret_env(api_key_var)?,
			engine_id: load_env(engine_id_var),
		})
	}

	/// Overlays `other` on top of `self`; set fields in `other` win.
	pub fn merge(&mut self, other: Self) {
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.engine_id.is_some() {
			self.engine_id = other.engine_id;
		}
	}

	pub fn finalize(self) -> Result<SearchConfig, ConfigError> {
		let api_key = self.api_key.ok_or(ConfigError::Missing {
			what: "API key",
			var: API_KEY_VAR,
		})?;
		if api_key.is_empty() {
			return Err(ConfigError::Empty {
				what: "API key",
				var: API_KEY_VAR,
			});
		}

		let engine_id = self.engine_id.ok_or(ConfigError::Missing {
			what: "search engine id",
			var: ENGINE_ID_VAR,
		})?;
		if engine_id.is_empty() {
			return Err(ConfigError::Empty {
				what: "search engine id",
				var: ENGINE_ID_VAR,
			});
		}

		Ok(SearchConfig { api_key, engine_id })
	}
}

/// Validated credentials: both values are present and non-empty.
#[derive(Debug, Clone)]
pub struct SearchConfig {
	pub api_key: SecretString,
	pub engine_id: String,
}
