// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Environment variable helpers.
//!
//! Secrets support the `*_FILE` convention used by Docker and Kubernetes
//! secret mounts: `GSE_KEY_FILE=/run/secrets/gse_key` takes precedence over
//! `GSE_KEY`.

use std::path::PathBuf;
use std::{env, fs};

use ansor_common_secret::SecretString;
use thiserror::Error;

/// Errors that can occur when loading secrets from environment variables.
#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("failed to read secret file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },
}

/// Load a secret using the `VAR` / `VAR_FILE` convention.
///
/// 1. If `{var}_FILE` is set, the secret is read from that path. A single
///    trailing newline is stripped.
/// 2. Otherwise `{var}` is used directly.
/// 3. Otherwise `Ok(None)`.
pub fn load_secret_env(var: &str) -> Result<Option<SecretString>, SecretEnvError> {
	let file_var = format!("{var}_FILE");

	if let Ok(path_str) = env::var(&file_var) {
		if path_str.is_empty() {
			return Err(SecretEnvError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(&path_str);
		let content = fs::read_to_string(&path).map_err(|source| SecretEnvError::Io {
			path: path.clone(),
			source,
		})?;

		tracing::debug!(var = %file_var, "loaded secret from file");
		let secret = content.strip_suffix('\n').unwrap_or(&content).to_string();
		return Ok(Some(SecretString::new(secret)));
	}

	Ok(env::var(var).ok().map(SecretString::new))
}

/// Load a plain (non-secret) value. Unset and non-unicode values are `None`.
pub fn load_env(var: &str) -> Option<String> {
	env::var(var).ok()
}
