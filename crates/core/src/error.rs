// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

//! Startup-fatal errors.
//!
//! Every variant means a catalog cannot be built, and the process must not
//! start serving. Per-item problems are not errors; see
//! [`SkipReason`](crate::metadata::SkipReason).

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("record file {path} is unavailable: {source}")]
	DataUnavailable {
		path: PathBuf,
		#[source]
		source: csv::Error,
	},

	#[error("record file {path} has no header row")]
	EmptyRecordFile {
		path: PathBuf,
	},

	#[error("record file {path} has no {column:?} column (header: {header:?})")]
	MissingColumn {
		path: PathBuf,
		column: String,
		header: Vec<String>,
	},

	#[error("catalog {id:?} is configured more than once")]
	DuplicateCatalog {
		id: String,
	},

	#[error("catalog list {path} is invalid: {reason}")]
	InvalidCatalogList {
		path: PathBuf,
		reason: String,
	},

	#[error("response could not be serialized: {0}")]
	Serialize(#[from] serde_json::Error),
}
