// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

use std::{future::Future, io, sync::Arc};

use tokio::{
	runtime::{Builder, Runtime},
	task::JoinHandle,
};

/// A cloneable handle to a multi-threaded tokio runtime.
///
/// Subsystems keep a clone and use it both to spawn their serving tasks and to
/// block on lifecycle futures (bind, shutdown) from synchronous code.
#[derive(Clone)]
pub struct SharedRuntime {
	inner: Arc<Runtime>,
}

impl SharedRuntime {
	/// Creates a runtime with `threads` worker threads.
	pub fn new(threads: usize) -> io::Result<Self> {
		let runtime = Builder::new_multi_thread()
			.worker_threads(threads.max(1))
			.thread_name("marquee-worker")
			.enable_all()
			.build()?;

		Ok(Self {
			inner: Arc::new(runtime),
		})
	}

	pub fn spawn<F>(&self, future: F) -> JoinHandle<F::Output>
	where
		F: Future + Send + 'static,
		F::Output: Send + 'static,
	{
		self.inner.spawn(future)
	}

	/// Runs a future to completion on this runtime.
	///
	/// Must not be called from within an async context.
	pub fn block_on<F: Future>(&self, future: F) -> F::Output {
		self.inner.block_on(future)
	}
}
