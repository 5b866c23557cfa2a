// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

//! The add-on manifest: the static descriptor clients read to discover which
//! catalogs exist.

use bytes::Bytes;
use serde::Serialize;

use crate::{
	catalog::{CatalogDescriptor, MediaType},
	defaults,
	error::Result,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceItem {
	pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
	#[serde(rename = "type")]
	pub media_type: MediaType,
	pub id: String,
	pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
	pub id: String,
	pub name: String,
	pub description: String,
	pub version: String,
	pub resources: Vec<ResourceItem>,
	pub types: Vec<MediaType>,
	pub catalogs: Vec<CatalogItem>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub id_prefixes: Vec<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub background: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub logo: Option<String>,
}

impl Manifest {
	/// The manifest listing `catalogs`, with `types` collected from them in
	/// first-seen order.
	pub fn new(version: impl Into<String>, catalogs: &[CatalogDescriptor]) -> Self {
		let mut types = Vec::new();
		for catalog in catalogs {
			if !types.contains(&catalog.media_type) {
				types.push(catalog.media_type);
			}
		}

		Self {
			id: defaults::MANIFEST_ID.to_string(),
			name: defaults::MANIFEST_NAME.to_string(),
			description: defaults::MANIFEST_DESCRIPTION.to_string(),
			version: version.into(),
			resources: vec![ResourceItem {
				name: "catalog".to_string(),
			}],
			types,
			catalogs: catalogs
				.iter()
				.map(|c| CatalogItem {
					media_type: c.media_type,
					id: c.id.clone(),
					name: c.name.clone(),
				})
				.collect(),
			id_prefixes: vec![defaults::ID_PREFIX.to_string()],
			background: Some(defaults::MANIFEST_BACKGROUND.to_string()),
			logo: Some(defaults::MANIFEST_LOGO.to_string()),
		}
	}

	pub fn with_id_prefixes(mut self, prefixes: Vec<String>) -> Self {
		self.id_prefixes = prefixes;
		self
	}

	/// Serialized once at startup and served as-is.
	pub fn to_bytes(&self) -> Result<Bytes> {
		Ok(Bytes::from(serde_json::to_vec(self)?))
	}
}

#[cfg(test)]
mod tests {
	use serde_json::{Value, json};

	use super::*;

	#[test]
	fn test_manifest_wire_format() {
		let catalogs = vec![
			CatalogDescriptor::new("imdb-top-250", MediaType::Movie, "IMDb Top 250"),
			CatalogDescriptor::new("top-box-office-us", MediaType::Movie, "Box Office").with_source("box-office-weekend-us"),
		];
		let bytes = Manifest::new("0.1.0", &catalogs).to_bytes().unwrap();
		let value: Value = serde_json::from_slice(&bytes).unwrap();

		assert_eq!(value["version"], "0.1.0");
		assert_eq!(value["resources"], json!([{"name": "catalog"}]));
		assert_eq!(value["types"], json!(["movie"]));
		assert_eq!(value["idPrefixes"], json!(["tt"]));
		assert_eq!(
			value["catalogs"],
			json!([
				{"type": "movie", "id": "imdb-top-250", "name": "IMDb Top 250"},
				{"type": "movie", "id": "top-box-office-us", "name": "Box Office"}
			])
		);
	}

	#[test]
	fn test_empty_prefixes_are_omitted() {
		let manifest = Manifest::new("0.1.0", &[]).with_id_prefixes(Vec::new());
		let value: Value = serde_json::from_slice(&manifest.to_bytes().unwrap()).unwrap();
		assert!(value.get("idPrefixes").is_none());
		assert_eq!(value["types"], json!([]));
	}
}
