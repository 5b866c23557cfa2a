// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

use std::{
	fmt::{self, Display, Formatter},
	fs,
	path::Path,
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
	Movie,
}

impl MediaType {
	pub fn as_str(&self) -> &'static str {
		match self {
			MediaType::Movie => "movie",
		}
	}
}

impl Display for MediaType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported media type {0:?}")]
pub struct UnsupportedMediaType(pub String);

impl FromStr for MediaType {
	type Err = UnsupportedMediaType;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s {
			"movie" => Ok(MediaType::Movie),
			other => Err(UnsupportedMediaType(other.to_string())),
		}
	}
}

/// A configured catalog.
///
/// `source` names the record file (`<source>.csv`); when unset the catalog id
/// is used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogDescriptor {
	pub id: String,
	#[serde(rename = "type")]
	pub media_type: MediaType,
	pub name: String,
	#[serde(default)]
	source: Option<String>,
}

impl CatalogDescriptor {
	pub fn new(id: impl Into<String>, media_type: MediaType, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			media_type,
			name: name.into(),
			source: None,
		}
	}

	pub fn with_source(mut self, source: impl Into<String>) -> Self {
		self.source = Some(source.into());
		self
	}

	pub fn source(&self) -> &str {
		self.source.as_deref().unwrap_or(&self.id)
	}

	/// Reads a JSON array of descriptors:
	/// `[{"id": "...", "type": "movie", "name": "...", "source": "..."}]`.
	pub fn load_list(path: impl AsRef<Path>) -> Result<Vec<Self>> {
		let path = path.as_ref();
		let invalid = |reason: String| Error::InvalidCatalogList {
			path: path.to_path_buf(),
			reason,
		};

		let content = fs::read(path).map_err(|e| invalid(e.to_string()))?;
		let list: Vec<Self> = serde_json::from_slice(&content).map_err(|e| invalid(e.to_string()))?;
		if list.is_empty() {
			return Err(invalid("no catalogs configured".to_string()));
		}
		if let Some(bad) = list.iter().find(|d| d.id.is_empty() || d.source().contains(['/', '\\'])) {
			return Err(invalid(format!("catalog {:?} has an empty id or a source outside the data directory", bad.id)));
		}
		Ok(list)
	}
}
