// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

use std::{
	env,
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use tracing_subscriber::{
	EnvFilter,
	filter::ParseError,
	layer::SubscriberExt,
	util::{SubscriberInitExt, TryInitError},
};

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
	#[error("invalid log filter {directives:?}: {source}")]
	InvalidFilter {
		directives: String,
		#[source]
		source: ParseError,
	},

	#[error("tracing subscriber already installed: {0}")]
	AlreadyInstalled(#[source] TryInitError),

	#[error("unknown log format {0:?}, expected \"text\" or \"json\"")]
	UnknownFormat(String),
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
	#[default]
	Text,
	Json,
}

impl Display for LogFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			LogFormat::Text => f.write_str("text"),
			LogFormat::Json => f.write_str("json"),
		}
	}
}

impl FromStr for LogFormat {
	type Err = TracingError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"text" => Ok(LogFormat::Text),
			"json" => Ok(LogFormat::Json),
			_ => Err(TracingError::UnknownFormat(s.to_string())),
		}
	}
}

/// Builder for the global tracing subscriber.
///
/// The level directive applies unless `RUST_LOG` is set to something
/// non-empty, in which case `RUST_LOG` wins.
#[derive(Debug, Clone)]
pub struct TracingBuilder {
	level: String,
	format: LogFormat,
	ansi: bool,
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Text,
			ansi: true,
		}
	}

	/// Sets the default filter directive, e.g. `info` or `marquee_core=debug`.
	pub fn with_level(mut self, level: impl Into<String>) -> Self {
		self.level = level.into();
		self
	}

	pub fn with_format(mut self, format: LogFormat) -> Self {
		self.format = format;
		self
	}

	pub fn with_ansi(mut self, ansi: bool) -> Self {
		self.ansi = ansi;
		self
	}

	pub fn level(&self) -> &str {
		&self.level
	}

	pub fn format(&self) -> LogFormat {
		self.format
	}

	fn directives<'a>(&'a self, from_env: Option<&'a str>) -> &'a str {
		match from_env {
			Some(directives) if !directives.trim().is_empty() => directives,
			_ => &self.level,
		}
	}

	/// The filter this builder would install.
	pub fn filter(&self) -> Result<EnvFilter, TracingError> {
		let from_env = env::var(EnvFilter::DEFAULT_ENV).ok();
		parse_filter(self.directives(from_env.as_deref()))
	}

	/// Installs the subscriber. Fails if one is already installed.
	pub fn init(self) -> Result<(), TracingError> {
		let filter = self.filter()?;
		let registry = tracing_subscriber::registry().with(filter);

		match self.format {
			LogFormat::Text => registry.with(tracing_subscriber::fmt::layer().with_ansi(self.ansi)).try_init(),
			LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
		}
		.map_err(TracingError::AlreadyInstalled)?;

		tracing::debug!("Tracing initialized with {} format", self.format);
		Ok(())
	}
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}

fn parse_filter(directives: &str) -> Result<EnvFilter, TracingError> {
	EnvFilter::try_new(directives).map_err(|source| TracingError::InvalidFilter {
		directives: directives.to_string(),
		source,
	})
}
