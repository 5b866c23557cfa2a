// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

use axum::{
	Router,
	http::{Method, header},
	routing::get,
};
use tower_http::{
	cors::{Any, CorsLayer},
	trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{handlers, state::AppState};

/// Builds the router for all endpoints.
///
/// Only `GET` is routed; other methods on known paths get `405`.
pub fn router(state: AppState) -> Router {
	let cors = CorsLayer::new().allow_origin(Any).allow_methods([Method::GET]).allow_headers([
		header::ACCEPT,
		header::ACCEPT_LANGUAGE,
		header::CONTENT_TYPE,
		header::ORIGIN,
		header::ACCEPT_ENCODING,
		header::CONTENT_LANGUAGE,
		header::HeaderName::from_static("x-requested-with"),
	]);

	let trace = TraceLayer::new_for_http()
		.make_span_with(DefaultMakeSpan::new().level(Level::INFO))
		.on_response(DefaultOnResponse::new().level(Level::INFO));

	Router::new()
		.route("/health", get(handlers::health))
		.route("/manifest.json", get(handlers::manifest))
		.route("/catalog/{type}/{id}", get(handlers::catalog))
		.route("/", get(handlers::root))
		.layer(cors)
		.layer(trace)
		.with_state(state)
}
