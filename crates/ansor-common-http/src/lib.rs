// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client construction for ansor.
//!
//! Every outbound client built here carries the same `ansor/{version}`
//! User-Agent so upstream request logs can be attributed.

mod client;

pub use client::{builder, new_client, new_client_with_timeout, user_agent};
