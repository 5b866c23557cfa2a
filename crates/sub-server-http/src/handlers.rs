// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

//! HTTP endpoint handlers.
//!
//! - `/health` - Liveness check
//! - `/manifest.json` - Add-on manifest
//! - `/catalog/{type}/{id}.json` - Conditional catalog responses
//! - `/` - Redirect to the website

use axum::{
	extract::{Path, State},
	http::{HeaderMap, HeaderValue, StatusCode, header},
	response::{IntoResponse, Response},
};
use marquee_core::MediaType;

use crate::{conditional, error::AppError, state::AppState};

const CATALOG_SUFFIX: &str = ".json";

/// Health check endpoint. Always `200 OK`.
pub async fn health() -> &'static str {
	"OK"
}

pub async fn manifest(State(state): State<AppState>) -> impl IntoResponse {
	([(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))], state.manifest().clone())
}

/// Serves a stored catalog.
///
/// The media type and catalog id are checked before the client's validator is
/// considered, so an unknown catalog is `404` even for `If-None-Match: *`.
pub async fn catalog(
	State(state): State<AppState>,
	Path((media_type, file)): Path<(String, String)>,
	headers: HeaderMap,
) -> Result<Response, AppError> {
	let media_type: MediaType = media_type.parse().map_err(|_| AppError::UnsupportedMediaType(media_type))?;

	let Some(id) = file.strip_suffix(CATALOG_SUFFIX) else {
		return Err(AppError::UnknownCatalog(file));
	};

	let catalog = state.table().lookup(media_type, id).ok_or_else(|| AppError::UnknownCatalog(id.to_string()))?;

	Ok(conditional::respond(&headers, catalog, state.cache_control()))
}

/// Permanent redirect to the configured website.
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
	(StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, state.redirect().clone())])
}
