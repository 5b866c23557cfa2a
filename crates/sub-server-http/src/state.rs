// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

use std::sync::Arc;

use axum::http::HeaderValue;
use bytes::Bytes;
use marquee_core::CatalogTable;

use crate::{config::HttpConfig, error::ServerError};

struct Inner {
	table: Arc<CatalogTable>,
	manifest: Bytes,
	cache_control: HeaderValue,
	redirect: HeaderValue,
}

/// Shared, read-only request state. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
	inner: Arc<Inner>,
}

impl AppState {
	pub fn new(table: Arc<CatalogTable>, manifest: Bytes, config: &HttpConfig) -> Result<Self, ServerError> {
		let redirect = header_value("Location", config.redirect_url.clone())?;
		let cache_control = header_value("Cache-Control", config.cache_control())?;

		Ok(Self {
			inner: Arc::new(Inner {
				table,
				manifest,
				cache_control,
				redirect,
			}),
		})
	}

	pub fn table(&self) -> &CatalogTable {
		&self.inner.table
	}

	pub fn manifest(&self) -> &Bytes {
		&self.inner.manifest
	}

	pub fn cache_control(&self) -> &HeaderValue {
		&self.inner.cache_control
	}

	pub fn redirect(&self) -> &HeaderValue {
		&self.inner.redirect
	}
}

fn header_value(name: &'static str, value: String) -> Result<HeaderValue, ServerError> {
	HeaderValue::from_str(&value).map_err(|_| ServerError::InvalidHeader {
		name,
		value,
	})
}
