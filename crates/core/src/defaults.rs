// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

//! Built-in configuration values.

use crate::catalog::{CatalogDescriptor, MediaType};

/// Header of the record-file column holding the external id.
pub const ID_COLUMN: &str = "IMDb ID";

/// Header of the record-file column holding the title, used for id resolution.
pub const TITLE_COLUMN: &str = "title";

/// Every external id starts with this prefix.
pub const ID_PREFIX: &str = "tt";

/// Subdirectory of the data directory holding one metadata document per id.
pub const METADATA_DIR: &str = "metas";

/// File extension of metadata documents.
pub const METADATA_EXTENSION: &str = "json";

/// File extension of record files.
pub const RECORD_EXTENSION: &str = "csv";

pub const MANIFEST_ID: &str = "tv.deflix.stremio-top-movies";
pub const MANIFEST_NAME: &str = "Top movies";
pub const MANIFEST_DESCRIPTION: &str = "Multiple catalogs of top movie lists: IMDb Top 250, IMDb Most Popular, Top Box Office (US), Rotten Tomatoes Certified Fresh Movies, Academy Award for Best Picture, Cannes Film Festival Palme d'Or winners, Venice Film Festival Golden Lion winners, Berlin International Film Festival Golden Bear winners";
pub const MANIFEST_BACKGROUND: &str = "https://www.deflix.tv/images/Logo-1024px.png";
pub const MANIFEST_LOGO: &str = "https://www.deflix.tv/images/Logo-250px.png";

/// The catalogs served when no catalog list is configured.
pub fn catalogs() -> Vec<CatalogDescriptor> {
	vec![
		CatalogDescriptor::new("imdb-top-250", MediaType::Movie, r#"IMDb Top Rated (a.k.a. "IMDb Top 250")"#),
		CatalogDescriptor::new("imdb-most-popular", MediaType::Movie, "IMDb Most Popular"),
		CatalogDescriptor::new("top-box-office-us", MediaType::Movie, "Top Box Office (US) (last weekend)")
			.with_source("box-office-weekend-us"),
		CatalogDescriptor::new(
			"rt-certified-fresh",
			MediaType::Movie,
			"Rotten Tomatoes Certified Fresh (DVD + Streaming)",
		)
		.with_source("rt-certified-fresh-dvd-streaming"),
		CatalogDescriptor::new("academy-awards-winners", MediaType::Movie, "Academy Award for Best Picture"),
		CatalogDescriptor::new("palme-dor-winners", MediaType::Movie, "Cannes Film Festival Palme d'Or winners"),
		CatalogDescriptor::new("golden-lion-winners", MediaType::Movie, "Venice Film Festival Golden Lion winners"),
		CatalogDescriptor::new(
			"golden-bear-winners",
			MediaType::Movie,
			"Berlin International Film Festival Golden Bear winners",
		),
	]
}
