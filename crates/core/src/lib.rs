// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

//! Catalog assembly for Marquee.
//!
//! Everything in this crate runs once, at startup, before the HTTP server binds:
//!
//! 1. [`record::RecordFile`] reads a catalog's CSV record file.
//! 2. [`metadata::MetadataStore`] reads one JSON document per external id.
//! 3. [`catalog::Assembler`] joins the two into a serialized, fingerprinted
//!    [`catalog::CatalogResponse`].
//! 4. [`catalog::CatalogTable`] holds every response, read-only, for the
//!    lifetime of the process.
//!
//! Failures that make a catalog impossible to build are [`Error`]s and abort
//! startup. Failures that only affect a single item are logged and the item is
//! left out (see [`metadata::SkipReason`]).

pub mod catalog;
pub mod defaults;
pub mod error;
pub mod id;
pub mod manifest;
pub mod metadata;
pub mod record;
pub mod resolve;

pub use catalog::{
	Assembler, AssemblerConfig, CatalogDescriptor, CatalogResponse, CatalogTable, Fingerprint, MediaType,
};
pub use error::{Error, Result};
pub use id::ExternalId;
pub use manifest::Manifest;
pub use metadata::{LoadedMetadata, MetadataItem, MetadataStore, SkipReason, Skipped};
pub use record::RecordFile;
pub use resolve::{IdResolver, MapResolver, NoResolver};
