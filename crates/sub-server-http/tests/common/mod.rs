// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

#![allow(dead_code)]

use std::sync::Arc;

use marquee_core::{Assembler, AssemblerConfig, CatalogDescriptor, CatalogTable, Manifest, MediaType};
use marquee_sub_server_http::{AppState, HttpConfig};
use marquee_testing::DataDir;

pub const TOP_250: &str = "imdb-top-250";
pub const POPULAR: &str = "imdb-most-popular";

pub fn descriptors() -> Vec<CatalogDescriptor> {
	vec![
		CatalogDescriptor::new(TOP_250, MediaType::Movie, "IMDb Top 250"),
		CatalogDescriptor::new(POPULAR, MediaType::Movie, "IMDb Most Popular"),
	]
}

/// Builds state over two catalogs. The data dir must outlive only table construction.
pub fn state(config: &HttpConfig) -> AppState {
	let data = DataDir::new();
	data.ranked(TOP_250, &["tt1", "tt2", "tt3"]);
	data.ranked(POPULAR, &["tt3"]);
	data.movie("tt1");
	data.movie("tt3");

	let descriptors = descriptors();
	let assembler = Assembler::new(AssemblerConfig::new(data.path()));
	let table = CatalogTable::build(&assembler, &descriptors).unwrap();
	let manifest = Manifest::new("1.2.3", &descriptors).to_bytes().unwrap();

	AppState::new(Arc::new(table), manifest, config).unwrap()
}
