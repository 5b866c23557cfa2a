// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

use std::fmt::{self, Display, Formatter};

use bytes::Bytes;
use marquee_runtime::xxh3_128;
use serde::Serialize;

use crate::{error::Result, metadata::MetadataItem};

/// Content fingerprint of a serialized body: the lowercase hex xxHash3-128
/// digest of the exact bytes. Used verbatim as the `ETag`.
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
	pub fn of(body: &[u8]) -> Self {
		Self(xxh3_128(body).to_string())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Display for Fingerprint {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl PartialEq<str> for Fingerprint {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

#[derive(Serialize)]
struct Envelope<'a> {
	metas: &'a [MetadataItem],
}

/// A catalog ready to be served.
#[derive(Debug, Clone)]
pub struct CatalogResponse {
	items: Vec<MetadataItem>,
	body: Bytes,
	fingerprint: Fingerprint,
}

impl CatalogResponse {
	/// Serializes `items` into `{"metas":[...]}` and fingerprints the result.
	pub fn new(items: Vec<MetadataItem>) -> Result<Self> {
		let body = Bytes::from(serde_json::to_vec(&Envelope {
			metas: &items,
		})?);
		let fingerprint = Fingerprint::of(&body);
		Ok(Self {
			items,
			body,
			fingerprint,
		})
	}

	pub fn items(&self) -> &[MetadataItem] {
		&self.items
	}

	/// The exact bytes sent to clients. Cloning is a reference count bump.
	pub fn body(&self) -> &Bytes {
		&self.body
	}

	pub fn fingerprint(&self) -> &Fingerprint {
		&self.fingerprint
	}
}
