// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration for the ansor search client.
//!
//! Credentials are never compiled in. They are collected from layers
//! (environment, command line) and validated once:
//!
//! - [`load_secret_env`]: read a secret from `VAR` or from the file named by
//!   `VAR_FILE`
//! - [`SearchConfigLayer`]: partial credentials that merge, later layers win
//! - [`SearchConfig`]: the finalized, validated API key and engine id

pub mod env;
pub mod search;

pub use ansor_common_secret::{Secret, SecretString, REDACTED};

pub use env::{load_env, load_secret_env, SecretEnvError};
pub use search::{ConfigError, SearchConfig, SearchConfigLayer, API_KEY_VAR, ENGINE_ID_VAR};
