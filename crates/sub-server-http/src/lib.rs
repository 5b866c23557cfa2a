// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

//! HTTP server subsystem for Marquee.
//!
//! This crate provides an Axum-based HTTP server that serves the catalogs of an
//! immutable [`CatalogTable`](marquee_core::CatalogTable) with entity-tag based
//! conditional GET. It runs on a [`SharedRuntime`](marquee_runtime::SharedRuntime)
//! and implements the Marquee `Subsystem` trait for lifecycle management.
//!
//! # Endpoints
//!
//! - `GET /health` - Liveness check, always `OK`
//! - `GET /manifest.json` - The add-on manifest
//! - `GET /catalog/{type}/{id}.json` - A catalog, honoring `If-None-Match`
//! - `GET /` - Permanent redirect to the configured website
//!
//! # Example
//!
//! ```ignore
//! use marquee_runtime::SharedRuntime;
//! use marquee_sub_server_http::{AppState, HttpConfig, HttpSubsystem};
//!
//! let runtime = SharedRuntime::new(4)?;
//! let config = HttpConfig::default().with_bind_addr("0.0.0.0:8080");
//! let state = AppState::new(table, manifest, &config)?;
//!
//! let mut http = HttpSubsystem::new(config, state, runtime);
//! http.start()?;
//! ```

pub mod conditional;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod subsystem;

pub use config::HttpConfig;
pub use error::{AppError, ServerError};
pub use routes::router;
pub use state::AppState;
pub use subsystem::HttpSubsystem;
