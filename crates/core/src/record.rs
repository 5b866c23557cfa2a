// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

//! Record files: one CSV file per catalog, first row is the header.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};

use crate::error::{Error, Result};

/// A fully loaded record file.
#[derive(Debug, Clone)]
pub struct RecordFile {
	path: PathBuf,
	header: StringRecord,
	rows: Vec<StringRecord>,
}

impl RecordFile {
	/// Reads the whole file.
	///
	/// Every row must have as many fields as the header.
	pub fn read(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref().to_path_buf();
		let unavailable = |source| Error::DataUnavailable {
			path: path.clone(),
			source,
		};

		let mut reader = ReaderBuilder::new().has_headers(false).flexible(false).from_path(&path).map_err(unavailable)?;

		let mut records = reader.records();
		let header = match records.next() {
			Some(header) => header.map_err(unavailable)?,
			None => {
				return Err(Error::EmptyRecordFile {
					path,
				});
			}
		};
		let rows = records.collect::<std::result::Result<Vec<_>, _>>().map_err(unavailable)?;

		Ok(Self {
			path,
			header,
			rows,
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn header(&self) -> impl Iterator<Item = &str> {
		self.header.iter()
	}

	/// Index of the column named exactly `name`.
	pub fn column(&self, name: &str) -> Result<usize> {
		self.column_opt(name).ok_or_else(|| Error::MissingColumn {
			path: self.path.clone(),
			column: name.to_string(),
			header: self.header.iter().map(str::to_string).collect(),
		})
	}

	pub fn column_opt(&self, name: &str) -> Option<usize> {
		self.header.iter().position(|h| h == name)
	}

	/// Data rows, header excluded.
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Cells of column `index`, in row order.
	pub fn values(&self, index: usize) -> impl Iterator<Item = &str> {
		self.rows.iter().map(move |row| row.get(index).unwrap_or_default())
	}

	pub fn rows(&self) -> impl Iterator<Item = &StringRecord> {
		self.rows.iter()
	}
}

#[cfg(test)]
mod tests {
	use marquee_testing::DataDir;

	use super::*;

	#[test]
	fn test_read_header_and_rows() {
		let data = DataDir::new();
		let path = data.ranked("imdb-top-250", &["tt1", "tt2", "tt3"]);

		let file = RecordFile::read(&path).unwrap();
		assert_eq!(file.header().collect::<Vec<_>>(), vec!["rank", "title", "IMDb ID"]);
		assert_eq!(file.len(), 3);

		let column = file.column("IMDb ID").unwrap();
		assert_eq!(column, 2);
		assert_eq!(file.values(column).collect::<Vec<_>>(), vec!["tt1", "tt2", "tt3"]);
	}

	#[test]
	fn test_header_only_file_has_no_rows() {
		let data = DataDir::new();
		let path = data.raw_records("empty-list", "rank,title,IMDb ID\n");

		let file = RecordFile::read(&path).unwrap();
		assert!(file.is_empty());
	}

	#[test]
	fn test_missing_column() {
		let data = DataDir::new();
		let path = data.records("no-ids", &["rank", "title"], &[&["1", "Heat"]]);

		let file = RecordFile::read(&path).unwrap();
		let err = file.column("IMDb ID").unwrap_err();
		assert!(matches!(err, Error::MissingColumn { ref column, .. } if column == "IMDb ID"));
		assert_eq!(file.column_opt("year"), None);
	}

	#[test]
	fn test_column_name_is_exact() {
		let data = DataDir::new();
		let path = data.records("case", &["imdb id"], &[&["tt1"]]);

		let file = RecordFile::read(&path).unwrap();
		assert!(file.column("IMDb ID").is_err());
	}

	#[test]
	fn test_missing_file_is_unavailable() {
		let data = DataDir::new();
		let err = RecordFile::read(data.path().join("absent.csv")).unwrap_err();
		assert!(matches!(err, Error::DataUnavailable { .. }));
	}

	#[test]
	fn test_empty_file() {
		let data = DataDir::new();
		let path = data.raw_records("blank", "");
		let err = RecordFile::read(&path).unwrap_err();
		assert!(matches!(err, Error::EmptyRecordFile { .. }));
	}

	#[test]
	fn test_uneven_rows_are_unavailable() {
		let data = DataDir::new();
		let path = data.raw_records("uneven", "rank,IMDb ID\n1,tt1\n2\n");
		let err = RecordFile::read(&path).unwrap_err();
		assert!(matches!(err, Error::DataUnavailable { .. }));
	}

	#[test]
	fn test_quoted_fields() {
		let data = DataDir::new();
		let path = data.raw_records("quoted", "year,title,IMDb ID\n1994,\"Pulp Fiction, the movie\",tt0110912\n");

		let file = RecordFile::read(&path).unwrap();
		let title = file.column("title").unwrap();
		assert_eq!(file.values(title).next(), Some("Pulp Fiction, the movie"));
	}
}
