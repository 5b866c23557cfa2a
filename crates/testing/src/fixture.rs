// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

//! On-disk data directory fixtures.
//!
//! Mirrors the layout the server reads: `<root>/<source>.csv` record files and
//! `<root>/metas/<id>.json` metadata documents.

use std::{
	fs,
	path::{Path, PathBuf},
};

use crate::tempdir::TempDir;

pub struct DataDir {
	dir: TempDir,
}

impl DataDir {
	/// Creates an empty data directory with its `metas` subdirectory.
	pub fn new() -> Self {
		let dir = TempDir::new().expect("failed to create temp dir");
		fs::create_dir(dir.path().join("metas")).expect("failed to create metas dir");
		Self {
			dir,
		}
	}

	pub fn path(&self) -> &Path {
		self.dir.path()
	}

	pub fn metas_path(&self) -> PathBuf {
		self.path().join("metas")
	}

	/// Writes `<root>/<stem>.csv` with `header` as the first row.
	pub fn records(&self, stem: &str, header: &[&str], rows: &[&[&str]]) -> PathBuf {
		let path = self.path().join(format!("{stem}.csv"));
		let mut writer = csv::Writer::from_path(&path).expect("failed to create record file");
		writer.write_record(header).expect("failed to write header");
		for row in rows {
			writer.write_record(*row).expect("failed to write row");
		}
		writer.flush().expect("failed to flush record file");
		path
	}

	/// Writes a record file with the usual `rank,title,IMDb ID` header, one row
	/// per id.
	pub fn ranked(&self, stem: &str, ids: &[&str]) -> PathBuf {
		let rows: Vec<Vec<String>> = ids
			.iter()
			.enumerate()
			.map(|(i, id)| vec![(i + 1).to_string(), format!("Movie {id}"), id.to_string()])
			.collect();
		let rows: Vec<Vec<&str>> = rows.iter().map(|r| r.iter().map(String::as_str).collect()).collect();
		let rows: Vec<&[&str]> = rows.iter().map(Vec::as_slice).collect();
		self.records(stem, &["rank", "title", "IMDb ID"], &rows)
	}

	/// Writes raw bytes to a record file, for malformed-input tests.
	pub fn raw_records(&self, stem: &str, content: &str) -> PathBuf {
		let path = self.path().join(format!("{stem}.csv"));
		fs::write(&path, content).expect("failed to write record file");
		path
	}

	/// Writes `<root>/metas/<id>.json` verbatim.
	pub fn meta(&self, id: &str, document: &str) -> PathBuf {
		let path = self.metas_path().join(format!("{id}.json"));
		fs::write(&path, document).expect("failed to write metadata document");
		path
	}

	/// Writes a minimal movie document for `id`.
	pub fn movie(&self, id: &str) -> PathBuf {
		self.meta(id, &format!(r#"{{"id":"{id}","type":"movie","name":"Movie {id}"}}"#))
	}
}

impl Default for DataDir {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_ranked_layout() {
		let data = DataDir::new();
		let path = data.ranked("imdb-top-250", &["tt1", "tt2"]);
		let content = fs::read_to_string(path).unwrap();
		assert_eq!(content, "rank,title,IMDb ID\n1,Movie tt1,tt1\n2,Movie tt2,tt2\n");
	}

	#[test]
	fn test_movie_document() {
		let data = DataDir::new();
		let path = data.movie("tt1");
		assert_eq!(path, data.metas_path().join("tt1.json"));
		assert_eq!(fs::read_to_string(path).unwrap(), r#"{"id":"tt1","type":"movie","name":"Movie tt1"}"#);
	}
}
