// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

//! Title to external id resolution.
//!
//! Some record sources only know a film's title. The assembler asks an
//! [`IdResolver`] for the id of any row whose id cell is empty.

use std::{collections::HashMap, path::Path};

use tracing::debug;

use crate::{error::Result, id::ExternalId, record::RecordFile};

pub trait IdResolver: Send + Sync {
	fn resolve(&self, title: &str) -> Option<ExternalId>;
}

/// Resolves nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoResolver;

impl IdResolver for NoResolver {
	fn resolve(&self, _title: &str) -> Option<ExternalId> {
		None
	}
}

/// Exact-title lookup table.
#[derive(Debug, Default, Clone)]
pub struct MapResolver {
	titles: HashMap<String, ExternalId>,
}

impl MapResolver {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, title: impl Into<String>, id: ExternalId) -> Self {
		self.titles.insert(title.into(), id);
		self
	}

	/// Loads a record file with a title column and an id column. Rows whose id
	/// is not valid are ignored; for repeated titles the first row wins.
	pub fn load(path: impl AsRef<Path>, title_column: &str, id_column: &str, prefix: &str) -> Result<Self> {
		let file = RecordFile::read(path)?;
		let title = file.column(title_column)?;
		let id = file.column(id_column)?;

		let mut titles = HashMap::new();
		for (title, id) in file.values(title).zip(file.values(id)) {
			match ExternalId::parse(id, prefix) {
				Some(id) => {
					titles.entry(title.trim().to_string()).or_insert(id);
				}
				None => debug!("Ignoring title lookup row {:?}: invalid id {:?}", title, id),
			}
		}

		Ok(Self {
			titles,
		})
	}

	pub fn len(&self) -> usize {
		self.titles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.titles.is_empty()
	}
}

impl IdResolver for MapResolver {
	fn resolve(&self, title: &str) -> Option<ExternalId> {
		self.titles.get(title.trim()).cloned()
	}
}
