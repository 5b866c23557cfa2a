// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "localhost:8080";
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);
pub const DEFAULT_REDIRECT_URL: &str = "https://www.deflix.tv";
/// Shorter than the 10 seconds container runtimes wait before killing.
pub const DEFAULT_SHUTDOWN_GRACE: Duration = Duration::from_secs(9);

#[derive(Debug, Clone)]
pub struct HttpConfig {
	/// Address and port to bind to (e.g. "0.0.0.0:8080").
	pub bind_addr: String,
	/// Sent as `Cache-Control: max-age=<seconds>, public`.
	pub max_age: Duration,
	/// Target of the `/` redirect.
	pub redirect_url: String,
	/// How long shutdown waits for in-flight requests.
	pub shutdown_grace: Duration,
}

impl HttpConfig {
	pub fn new() -> Self {
		Self {
			bind_addr: DEFAULT_BIND_ADDR.to_string(),
			max_age: DEFAULT_MAX_AGE,
			redirect_url: DEFAULT_REDIRECT_URL.to_string(),
			shutdown_grace: DEFAULT_SHUTDOWN_GRACE,
		}
	}

	pub fn with_bind_addr(mut self, addr: impl Into<String>) -> Self {
		self.bind_addr = addr.into();
		self
	}

	pub fn with_max_age(mut self, max_age: Duration) -> Self {
		self.max_age = max_age;
		self
	}

	pub fn with_redirect_url(mut self, url: impl Into<String>) -> Self {
		self.redirect_url = url.into();
		self
	}

	pub fn with_shutdown_grace(mut self, grace: Duration) -> Self {
		self.shutdown_grace = grace;
		self
	}

	pub fn cache_control(&self) -> String {
		format!("max-age={}, public", self.max_age.as_secs())
	}
}

impl Default for HttpConfig {
	fn default() -> Self {
		Self::new()
	}
}
