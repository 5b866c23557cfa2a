// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

use std::{path::PathBuf, sync::Arc};

use tracing::{info, warn};

use crate::{
	catalog::{CatalogDescriptor, CatalogResponse},
	defaults,
	error::Result,
	id::ExternalId,
	metadata::{MetadataStore, SkipReason, Skipped},
	record::RecordFile,
	resolve::{IdResolver, NoResolver},
};

/// Where catalogs are read from and how record files are interpreted.
#[derive(Debug, Clone)]
pub struct AssemblerConfig {
	/// Directory holding `<source>.csv` record files.
	pub data_dir: PathBuf,
	/// Metadata store directory, relative to `data_dir`.
	pub metadata_dir: PathBuf,
	pub id_column: String,
	pub title_column: String,
	pub id_prefix: String,
}

impl AssemblerConfig {
	pub fn new(data_dir: impl Into<PathBuf>) -> Self {
		Self {
			data_dir: data_dir.into(),
			metadata_dir: PathBuf::from(defaults::METADATA_DIR),
			id_column: defaults::ID_COLUMN.to_string(),
			title_column: defaults::TITLE_COLUMN.to_string(),
			id_prefix: defaults::ID_PREFIX.to_string(),
		}
	}

	pub fn with_id_column(mut self, column: impl Into<String>) -> Self {
		self.id_column = column.into();
		self
	}

	pub fn with_title_column(mut self, column: impl Into<String>) -> Self {
		self.title_column = column.into();
		self
	}

	pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.id_prefix = prefix.into();
		self
	}

	pub fn record_path(&self, descriptor: &CatalogDescriptor) -> PathBuf {
		self.data_dir.join(format!("{}.{}", descriptor.source(), defaults::RECORD_EXTENSION))
	}
}

impl Default for AssemblerConfig {
	fn default() -> Self {
		Self::new(".")
	}
}

/// The external ids of one record file, in row order, and the rows that did not
/// yield one.
#[derive(Debug, Default)]
pub struct Identifiers {
	pub ids: Vec<ExternalId>,
	pub skipped: Vec<Skipped>,
}

/// Builds [`CatalogResponse`]s from record files and the metadata store.
pub struct Assembler {
	config: AssemblerConfig,
	store: MetadataStore,
	resolver: Arc<dyn IdResolver>,
}

impl Assembler {
	pub fn new(config: AssemblerConfig) -> Self {
		let store = MetadataStore::new(config.data_dir.join(&config.metadata_dir));
		Self {
			config,
			store,
			resolver: Arc::new(NoResolver),
		}
	}

	pub fn with_resolver(mut self, resolver: impl IdResolver + 'static) -> Self {
		self.resolver = Arc::new(resolver);
		self
	}

	pub fn config(&self) -> &AssemblerConfig {
		&self.config
	}

	pub fn store(&self) -> &MetadataStore {
		&self.store
	}

	/// Reads the catalog's record file and extracts its ids in row order.
	///
	/// Fails if the file is unreadable or has no id column. An empty id cell
	/// falls back to the title column through the resolver; a cell that still
	/// yields no valid id is skipped.
	pub fn identifiers(&self, descriptor: &CatalogDescriptor) -> Result<Identifiers> {
		let file = RecordFile::read(self.config.record_path(descriptor))?;
		let id_column = file.column(&self.config.id_column)?;
		let title_column = file.column_opt(&self.config.title_column);

		let mut result = Identifiers::default();
		for row in file.rows() {
			let cell = row.get(id_column).unwrap_or_default().trim();
			let title = title_column.and_then(|c| row.get(c)).map(str::trim).unwrap_or_default();

			let (id, key) = if cell.is_empty() {
				if title.is_empty() {
					(None, String::new())
				} else {
					(self.resolver.resolve(title), title.to_string())
				}
			} else {
				(ExternalId::parse(cell, &self.config.id_prefix), cell.to_string())
			};

			match id {
				Some(id) => result.ids.push(id),
				None => {
					let reason = if cell.is_empty() {
						SkipReason::Unresolved
					} else {
						SkipReason::InvalidIdentifier
					};
					warn!("Skipping row {:?} of catalog {}: {}", key, descriptor.id, reason);
					result.skipped.push(Skipped {
						key,
						reason,
					});
				}
			}
		}

		Ok(result)
	}

	/// Builds the served response of one catalog.
	pub fn assemble(&self, descriptor: &CatalogDescriptor) -> Result<CatalogResponse> {
		let identifiers = self.identifiers(descriptor)?;
		let loaded = self.store.load(&identifiers.ids);
		let skipped = identifiers.skipped.len() + loaded.skipped.len();

		let response = CatalogResponse::new(loaded.items)?;
		info!(
			"Assembled catalog {}: {} items, {} skipped, fingerprint {}",
			descriptor.id,
			response.items().len(),
			skipped,
			response.fingerprint()
		);
		Ok(response)
	}
}
