// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

//! HTTP server subsystem implementing the Marquee Subsystem trait.
//!
//! This module provides `HttpSubsystem` which manages the lifecycle of the
//! HTTP server, including startup, health monitoring, and graceful shutdown.

use std::{
	net::SocketAddr,
	sync::{
		Arc,
		atomic::{AtomicBool, Ordering},
	},
};

use marquee_runtime::SharedRuntime;
use marquee_sub_api::{HealthStatus, Subsystem, SubsystemError};
use tokio::{net::TcpListener, sync::oneshot, time::timeout};

use crate::{config::HttpConfig, error::ServerError, routes::router, state::AppState};

const NAME: &str = "Http";

/// HTTP server subsystem.
///
/// The listener is bound synchronously in [`start`](Subsystem::start), so bind
/// failures surface to the caller. [`shutdown`](Subsystem::shutdown) stops
/// accepting connections and waits up to the configured grace period for
/// in-flight requests to finish.
///
/// # Example
///
/// ```ignore
/// let state = AppState::new(table, manifest, &config)?;
///
/// let mut http = HttpSubsystem::new(config, state, runtime);
///
/// http.start()?;
/// // Server is now accepting connections
///
/// http.shutdown()?;
/// // Server has gracefully stopped
/// ```
pub struct HttpSubsystem {
	config: HttpConfig,
	/// Actual bound address (available after start).
	local_addr: Option<SocketAddr>,
	state: AppState,
	running: Arc<AtomicBool>,
	shutdown_tx: Option<oneshot::Sender<()>>,
	shutdown_complete_rx: Option<oneshot::Receiver<()>>,
	runtime: SharedRuntime,
}

impl HttpSubsystem {
	pub fn new(config: HttpConfig, state: AppState, runtime: SharedRuntime) -> Self {
		Self {
			config,
			local_addr: None,
			state,
			running: Arc::new(AtomicBool::new(false)),
			shutdown_tx: None,
			shutdown_complete_rx: None,
			runtime,
		}
	}

	/// Get the actual bound address (available after start).
	pub fn local_addr(&self) -> Option<SocketAddr> {
		self.local_addr
	}

	/// Get the actual bound port (available after start).
	pub fn port(&self) -> Option<u16> {
		self.local_addr.map(|a| a.port())
	}

	fn bind(&self) -> Result<TcpListener, ServerError> {
		let addr = self.config.bind_addr.clone();
		self.runtime.block_on(TcpListener::bind(&addr)).map_err(|source| ServerError::Bind {
			addr,
			source,
		})
	}
}

fn start_failed(err: ServerError) -> SubsystemError {
	SubsystemError::Start {
		subsystem: NAME,
		source: Box::new(err),
	}
}

impl Subsystem for HttpSubsystem {
	fn name(&self) -> &'static str {
		NAME
	}

	fn start(&mut self) -> Result<(), SubsystemError> {
		if self.shutdown_tx.is_some() {
			return Ok(());
		}

		let listener = self.bind().map_err(start_failed)?;
		let local_addr = listener.local_addr().map_err(|e| start_failed(ServerError::AddressUnavailable(e)))?;
		self.local_addr = Some(local_addr);
		tracing::info!("HTTP server bound to {}", local_addr);

		let (shutdown_tx, shutdown_rx) = oneshot::channel();
		let (complete_tx, complete_rx) = oneshot::channel();

		let app = router(self.state.clone());
		let running = self.running.clone();
		running.store(true, Ordering::SeqCst);

		self.runtime.spawn(async move {
			let server = axum::serve(listener, app).with_graceful_shutdown(async {
				shutdown_rx.await.ok();
				tracing::info!("HTTP server received shutdown signal");
			});

			if let Err(e) = server.await {
				tracing::error!("HTTP server error: {}", e);
			}

			running.store(false, Ordering::SeqCst);
			let _ = complete_tx.send(());
			tracing::info!("HTTP server stopped");
		});

		self.shutdown_tx = Some(shutdown_tx);
		self.shutdown_complete_rx = Some(complete_rx);
		Ok(())
	}

	fn shutdown(&mut self) -> Result<(), SubsystemError> {
		if let Some(tx) = self.shutdown_tx.take() {
			let _ = tx.send(());
		}

		if let Some(rx) = self.shutdown_complete_rx.take() {
			let grace = self.config.shutdown_grace;
			// The timer must be created inside the runtime.
			if self.runtime.block_on(async move { timeout(grace, rx).await }).is_err() {
				tracing::warn!("HTTP server did not drain within {:?}", grace);
				return Err(SubsystemError::ShutdownTimeout {
					subsystem: NAME,
					grace,
				});
			}
		}
		Ok(())
	}

	fn is_running(&self) -> bool {
		self.running.load(Ordering::SeqCst)
	}

	fn health_status(&self) -> HealthStatus {
		if self.running.load(Ordering::SeqCst) {
			HealthStatus::Healthy
		} else if self.shutdown_tx.is_some() {
			HealthStatus::Failed {
				description: "Server task exited".to_string(),
			}
		} else {
			HealthStatus::Failed {
				description: "Not running".to_string(),
			}
		}
	}
}
