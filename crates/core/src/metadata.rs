// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

//! The per-identifier metadata store.
//!
//! One JSON document per external id lives at `<root>/<id>.<ext>`. Documents
//! are written by an external fetcher; this module only reads them. A document
//! that cannot be read or is not a JSON object is skipped with a warning, never
//! treated as fatal.

use std::{
	collections::HashSet,
	fmt::{self, Display, Formatter},
	fs, io,
	path::PathBuf,
};

use serde::{Serialize, Serializer};
use serde_json::value::RawValue;
use tracing::warn;

use crate::{defaults, id::ExternalId};

/// A metadata document, carried verbatim into responses.
#[derive(Debug, Clone)]
pub struct MetadataItem {
	id: ExternalId,
	document: Box<RawValue>,
}

impl MetadataItem {
	/// Validates `text` as a JSON object. Surrounding whitespace is dropped.
	pub fn parse(id: ExternalId, text: &str) -> Result<Self, SkipReason> {
		let trimmed = text.trim();
		if !trimmed.starts_with('{') {
			return Err(SkipReason::Malformed("document is not a JSON object".to_string()));
		}
		let document = RawValue::from_string(trimmed.to_string()).map_err(|e| SkipReason::Malformed(e.to_string()))?;
		Ok(Self {
			id,
			document,
		})
	}

	pub fn id(&self) -> &ExternalId {
		&self.id
	}

	/// The document's JSON text.
	pub fn document(&self) -> &str {
		self.document.get()
	}
}

impl Serialize for MetadataItem {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.document.serialize(serializer)
	}
}

/// Why an item was left out of its catalog.
#[derive(Debug)]
pub enum SkipReason {
	/// The document file is absent or unreadable.
	Missing(io::Error),
	/// The document is not a JSON object.
	Malformed(String),
	/// The record cell is not a valid external id.
	InvalidIdentifier,
	/// The record cell is empty and no id could be resolved from the title.
	Unresolved,
}

impl Display for SkipReason {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			SkipReason::Missing(e) => write!(f, "metadata document unavailable: {}", e),
			SkipReason::Malformed(msg) => write!(f, "metadata document malformed: {}", msg),
			SkipReason::InvalidIdentifier => f.write_str("not a valid external id"),
			SkipReason::Unresolved => f.write_str("no id and no title match"),
		}
	}
}

/// An omitted item: the raw key (id or record cell) and the reason.
#[derive(Debug)]
pub struct Skipped {
	pub key: String,
	pub reason: SkipReason,
}

#[derive(Debug, Default)]
pub struct LoadedMetadata {
	pub items: Vec<MetadataItem>,
	pub skipped: Vec<Skipped>,
}

#[derive(Debug, Clone)]
pub struct MetadataStore {
	root: PathBuf,
	extension: String,
}

impl MetadataStore {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
			extension: defaults::METADATA_EXTENSION.to_string(),
		}
	}

	pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
		self.extension = extension.into();
		self
	}

	pub fn path_of(&self, id: &ExternalId) -> PathBuf {
		self.root.join(format!("{}.{}", id, self.extension))
	}

	/// Loads the document of every id in order. Ids whose document is missing
	/// or malformed are omitted without shifting the others.
	pub fn load(&self, ids: &[ExternalId]) -> LoadedMetadata {
		let mut loaded = LoadedMetadata::default();

		for id in ids {
			let path = self.path_of(id);
			let result = fs::read_to_string(&path)
				.map_err(SkipReason::Missing)
				.and_then(|text| MetadataItem::parse(id.clone(), &text));

			match result {
				Ok(item) => loaded.items.push(item),
				Err(reason) => {
					warn!("Skipping {}: {} ({})", id, reason, path.display());
					loaded.skipped.push(Skipped {
						key: id.to_string(),
						reason,
					});
				}
			}
		}

		loaded
	}

	/// Ids without a document file, in first-seen order, without duplicates.
	pub fn missing<'a>(&self, ids: impl IntoIterator<Item = &'a ExternalId>) -> Vec<ExternalId> {
		let mut seen = HashSet::new();
		ids.into_iter().filter(|id| seen.insert(*id) && !self.path_of(id).is_file()).cloned().collect()
	}
}
