// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

//! Entity-tag conditional responses.
//!
//! A stored catalog is answered with `304 Not Modified` when the client's
//! `If-None-Match` validator is the wildcard `*` or equals the catalog's
//! fingerprint byte for byte, and with `200 OK` and the full body otherwise.
//! Both carry `Cache-Control` and `ETag` so the client cache entry is
//! refreshed. Validators are not unquoted, split on commas or weakened.

use axum::{
	http::{HeaderMap, HeaderValue, StatusCode, header},
	response::{IntoResponse, Response},
};
use marquee_core::{CatalogResponse, Fingerprint};

/// The client's `If-None-Match` validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator<'a> {
	Absent,
	Any,
	Tag(&'a [u8]),
}

impl<'a> Validator<'a> {
	/// Reads the first `If-None-Match` header.
	pub fn from_headers(headers: &'a HeaderMap) -> Self {
		match headers.get(header::IF_NONE_MATCH) {
			None => Validator::Absent,
			Some(value) if value.as_bytes() == b"*" => Validator::Any,
			Some(value) => Validator::Tag(value.as_bytes()),
		}
	}

	/// Whether the client already holds the representation named by `fingerprint`.
	pub fn matches(&self, fingerprint: &Fingerprint) -> bool {
		match self {
			Validator::Absent => false,
			Validator::Any => true,
			Validator::Tag(tag) => *tag == fingerprint.as_str().as_bytes(),
		}
	}
}

/// Builds the response for a stored catalog.
pub fn respond(headers: &HeaderMap, catalog: &CatalogResponse, cache_control: &HeaderValue) -> Response {
	let fingerprint = catalog.fingerprint();
	let etag = [(header::ETAG, fingerprint.to_string())];

	if Validator::from_headers(headers).matches(fingerprint) {
		tracing::trace!("Catalog not modified, fingerprint {}", fingerprint);
		return (StatusCode::NOT_MODIFIED, [(header::CACHE_CONTROL, cache_control.clone())], etag).into_response();
	}

	(
		StatusCode::OK,
		[(header::CONTENT_TYPE, HeaderValue::from_static("application/json")), (header::CACHE_CONTROL, cache_control.clone())],
		etag,
		catalog.body().clone(),
	)
		.into_response()
}
