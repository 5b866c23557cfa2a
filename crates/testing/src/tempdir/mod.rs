// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

use std::{
	env, fs, io,
	path::{Path, PathBuf},
};

use uuid::Uuid;

/// A uniquely named directory under the system temp dir, removed on drop.
#[derive(Debug)]
pub struct TempDir {
	path: PathBuf,
}

impl TempDir {
	pub fn new() -> io::Result<Self> {
		let mut path = env::temp_dir();
		path.push(format!("marquee-{}", Uuid::new_v4()));
		fs::create_dir(&path)?;
		Ok(Self {
			path,
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl Drop for TempDir {
	fn drop(&mut self) {
		let _ = fs::remove_dir_all(&self.path);
	}
}
