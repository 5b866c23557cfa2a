// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

pub mod fixture;
pub mod tempdir;

pub use fixture::DataDir;
pub use tempdir::TempDir;
