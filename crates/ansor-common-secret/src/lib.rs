// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Secret wrapper for credentials such as the Custom Search API key.
//!
//! A [`Secret<T>`] never shows its value through `Debug` or `Display`, so a
//! client holding one can derive `Debug` and be logged with `?client`
//! without leaking the key. Access requires an explicit `.expose()` call and
//! the inner value is zeroized on drop.
//!
//! ```
//! use ansor_common_secret::Secret;
//!
//! let api_key = Secret::new("AIza-test-key".to_string());
//!
//! assert_eq!(format!("{:?}", api_key), "Secret(\"[REDACTED]\")");
//! assert_eq!(format!("{}", api_key), "[REDACTED]");
//! assert_eq!(api_key.expose(), "AIza-test-key");
//! ```

use std::fmt;
use zeroize::Zeroize;

/// Placeholder printed in place of any secret value.
pub const REDACTED: &str = "[REDACTED]";

/// A value that must not end up in logs or error messages.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Secret<T>
where
	T: Zeroize,
{
	inner: T,
}

/// The common case: a secret string such as an API key.
pub type SecretString = Secret<String>;

impl<T> Secret<T>
where
	T: Zeroize,
{
	pub fn new(inner: T) -> Self {
		Self { inner }
	}

	/// Explicitly access the inner value.
	pub fn expose(&self) -> &T {
		&self.inner
	}
}

impl SecretString {
	/// Whether the wrapped string is empty. Does not reveal the value.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl From<&str> for SecretString {
	fn from(value: &str) -> Self {
		Self::new(value.to_string())
	}
}

impl<T> Clone for Secret<T>
where
	T: Zeroize + Clone,
{
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

impl<T> fmt::Debug for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Secret").field(&REDACTED).finish()
	}
}

impl<T> fmt::Display for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl<T> PartialEq for Secret<T>
where
	T: Zeroize + PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.inner == other.inner
	}
}

impl<T> Eq for Secret<T> where T: Zeroize + Eq {}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn debug_is_redacted() {
		let secret = SecretString::from("AIza-super-secret");
		let output = format!("{secret:?}");

		assert!(!output.contains("AIza-super-secret"));
		assert!(output.contains(REDACTED));
	}

	#[test]
	fn display_is_redacted() {
		let secret = SecretString::from("AIza-super-secret");
		assert_eq!(format!("{secret}"), REDACTED);
	}

	#[test]
	fn expose_returns_inner_value() {
		let secret = SecretString::from("AIza-key");
		assert_eq!(secret.expose(), "AIza-key");
	}

	#[test]
	fn is_empty_reflects_inner_value() {
		assert!(SecretString::from("").is_empty());
		assert!(!SecretString::from("k").is_empty());
	}

	/// A struct deriving Debug around a secret must not leak it either; the
	/// search client relies on this.
	#[test]
	fn nested_debug_is_redacted() {
		#[derive(Debug)]
		#[allow(dead_code)]
		struct Credentials {
			api_key: SecretString,
			cx: String,
		}

		let creds = Credentials {
			api_key: SecretString::from("AIza-nested"),
			cx: "engine".to_string(),
		};
		let output = format!("{creds:?}");
		assert!(!output.contains("AIza-nested"));
		assert!(output.contains("engine"));
	}

	#[test]
	fn clone_preserves_value() {
		let secret = SecretString::from("AIza-clone");
		assert_eq!(secret.clone(), secret);
	}

	proptest! {
		#[test]
		fn never_leaks_through_formatting(value in "sk-[0-9a-f]{8,32}") {
			let secret = SecretString::new(value.clone());
			let display = format!("{}", secret);
			let debug = format!("{:?}", secret);
			prop_assert!(!display.contains(&value));
			prop_assert!(!debug.contains(&value));
			prop_assert_eq!(secret.expose(), &value);
		}
	}
}
