// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

use std::{
	fmt::{self, Display, Formatter},
	ops::Deref,
};

use serde::Serialize;

/// An external identifier: a fixed prefix followed by one or more ASCII digits
/// (`tt0111161`).
///
/// Only validated ids are ever joined onto the metadata store path, so a record
/// cell like `../secrets` can never escape the store.
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ExternalId(String);

impl ExternalId {
	/// Parses `value` (surrounding whitespace ignored) against `prefix`.
	pub fn parse(value: &str, prefix: &str) -> Option<Self> {
		let value = value.trim();
		let digits = value.strip_prefix(prefix)?;
		if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
			return None;
		}
		Some(Self(value.to_string()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Deref for ExternalId {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for ExternalId {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl PartialEq<str> for ExternalId {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for ExternalId {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_valid() {
		let id = ExternalId::parse("tt0111161", "tt").unwrap();
		assert_eq!(id, "tt0111161");
	}

	#[test]
	fn test_parse_trims_whitespace() {
		let id = ExternalId::parse("  tt1 ", "tt").unwrap();
		assert_eq!(id.as_str(), "tt1");
	}

	#[test]
	fn test_parse_rejects_wrong_prefix() {
		assert!(ExternalId::parse("nm0000001", "tt").is_none());
	}

	#[test]
	fn test_parse_rejects_bare_prefix() {
		assert!(ExternalId::parse("tt", "tt").is_none());
		assert!(ExternalId::parse("", "tt").is_none());
	}

	#[test]
	fn test_parse_rejects_path_components() {
		assert!(ExternalId::parse("tt1/../../etc/passwd", "tt").is_none());
		assert!(ExternalId::parse("tt12a", "tt").is_none());
	}
}
