// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

//! Content hashing for response fingerprints.
//!
//! Uses the pure Rust xxHash3 implementation. Digests are only compared within
//! one process lifetime, but are stable across runs and platforms, so a
//! restarted server with unchanged data keeps its entity tags.

use core::fmt::{self, Display, Formatter, LowerHex};

use xxhash_rust::xxh3;

/// A 128-bit xxHash3 digest.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash128(pub u128);

impl LowerHex for Hash128 {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		LowerHex::fmt(&self.0, f)
	}
}

/// Zero-padded lowercase hex, always 32 characters.
impl Display for Hash128 {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{:032x}", self.0)
	}
}

/// Compute xxHash3 128-bit hash of data.
#[inline]
pub fn xxh3_128(data: &[u8]) -> Hash128 {
	Hash128(xxh3::xxh3_128(data))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_deterministic() {
		let body = br#"{"metas":[]}"#;
		assert_eq!(xxh3_128(body), xxh3_128(body));
	}

	#[test]
	fn test_single_byte_difference() {
		let a = xxh3_128(br#"{"metas":[{"id":"tt0111161"}]}"#);
		let b = xxh3_128(br#"{"metas":[{"id":"tt0111162"}]}"#);
		assert_ne!(a, b);
	}

	#[test]
	fn test_display_is_zero_padded() {
		assert_eq!(Hash128(0xff).to_string(), format!("{}ff", "0".repeat(30)));
		assert_eq!(format!("{:x}", Hash128(0xff)), "ff");
		assert_eq!(xxh3_128(b"").to_string().len(), 32);
	}

	#[test]
	fn test_display_is_lowercase_hex() {
		let hex = xxh3_128(b"catalog").to_string();
		assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
	}
}
