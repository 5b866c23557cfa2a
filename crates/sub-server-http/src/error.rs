// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

//! HTTP error handling.
//!
//! [`AppError`] covers request-level outcomes that become error responses.
//! [`ServerError`] covers server setup failures.

use std::io;

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
};

/// Request-level errors. Both render as an empty `404 Not Found`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
	#[error("unsupported media type {0:?}")]
	UnsupportedMediaType(String),

	#[error("unknown catalog {0:?}")]
	UnknownCatalog(String),
}

impl IntoResponse for AppError {
	fn into_response(self) -> Response {
		tracing::debug!("Not found: {}", self);
		StatusCode::NOT_FOUND.into_response()
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	#[error("failed to bind {addr}: {source}")]
	Bind {
		addr: String,
		#[source]
		source: io::Error,
	},

	#[error("bound address unavailable: {0}")]
	AddressUnavailable(#[source] io::Error),

	#[error("invalid {name} header value {value:?}")]
	InvalidHeader {
		name: &'static str,
		value: String,
	},
}
