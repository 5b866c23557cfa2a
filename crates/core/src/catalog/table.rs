// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

use std::collections::HashMap;

use tracing::info;

use crate::{
	catalog::{Assembler, CatalogDescriptor, CatalogResponse, MediaType},
	error::{Error, Result},
};

struct Entry {
	media_type: MediaType,
	response: CatalogResponse,
}

/// Every served catalog, keyed by catalog id.
///
/// Built once before the server starts and never modified afterwards; there is
/// no mutation API, so any number of request tasks can read it through an
/// `Arc` without locking.
pub struct CatalogTable {
	entries: HashMap<String, Entry>,
	order: Vec<String>,
}

impl CatalogTable {
	/// Assembles every descriptor in order. The first fatal error aborts the
	/// build.
	pub fn build(assembler: &Assembler, descriptors: &[CatalogDescriptor]) -> Result<Self> {
		let mut entries = HashMap::with_capacity(descriptors.len());
		let mut order = Vec::with_capacity(descriptors.len());

		for descriptor in descriptors {
			if entries.contains_key(&descriptor.id) {
				return Err(Error::DuplicateCatalog {
					id: descriptor.id.clone(),
				});
			}

			let response = assembler.assemble(descriptor)?;
			entries.insert(
				descriptor.id.clone(),
				Entry {
					media_type: descriptor.media_type,
					response,
				},
			);
			order.push(descriptor.id.clone());
		}

		info!("Initialized {} catalogs", order.len());
		Ok(Self {
			entries,
			order,
		})
	}

	pub fn get(&self, id: &str) -> Option<&CatalogResponse> {
		self.entries.get(id).map(|e| &e.response)
	}

	/// Like [`get`](Self::get), but only if the catalog has `media_type`.
	pub fn lookup(&self, media_type: MediaType, id: &str) -> Option<&CatalogResponse> {
		self.entries.get(id).filter(|e| e.media_type == media_type).map(|e| &e.response)
	}

	/// Catalog ids in configuration order.
	pub fn ids(&self) -> impl Iterator<Item = &str> {
		self.order.iter().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}
}
