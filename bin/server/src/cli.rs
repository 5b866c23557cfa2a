// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

use std::{path::PathBuf, time::Duration};

use clap::{Parser, Subcommand};
use marquee_core::{Assembler, AssemblerConfig, CatalogDescriptor, MapResolver, defaults};
use marquee_sub_server_http::{HttpConfig, config::DEFAULT_REDIRECT_URL};
use marquee_sub_tracing::{LogFormat, TracingBuilder};

/// Serves precomputed movie catalogs with entity-tag conditional GET.
#[derive(Debug, Parser)]
#[command(name = "marquee", version, about, long_about = None)]
pub struct Cli {
	/// Host or address to listen on.
	#[arg(long, env = "MARQUEE_BIND_ADDR", default_value = "localhost", global = true)]
	pub bind_addr: String,

	#[arg(long, env = "MARQUEE_PORT", default_value_t = 8080, global = true)]
	pub port: u16,

	/// Directory holding the record files and the `metas` directory.
	#[arg(long, env = "MARQUEE_DATA_DIR", default_value = ".", global = true)]
	pub data_dir: PathBuf,

	/// Client cache lifetime, e.g. `12h` or `30m`.
	#[arg(long, env = "MARQUEE_MAX_AGE", default_value = "12h", value_parser = humantime::parse_duration, global = true)]
	pub max_age: Duration,

	#[arg(long, env = "MARQUEE_REDIRECT_URL", default_value = DEFAULT_REDIRECT_URL, global = true)]
	pub redirect_url: String,

	/// How long shutdown waits for in-flight requests.
	#[arg(long, env = "MARQUEE_SHUTDOWN_GRACE", default_value = "9s", value_parser = humantime::parse_duration, global = true)]
	pub shutdown_grace: Duration,

	/// Default log filter; `RUST_LOG` takes precedence when set.
	#[arg(long, env = "MARQUEE_LOG_LEVEL", default_value = "info", global = true)]
	pub log_level: String,

	/// `text` or `json`.
	#[arg(long, env = "MARQUEE_LOG_FORMAT", default_value = "text", global = true)]
	pub log_format: LogFormat,

	/// JSON file listing catalog descriptors, replacing the built-in list.
	#[arg(long, env = "MARQUEE_CATALOGS", global = true)]
	pub catalogs: Option<PathBuf>,

	/// Record file mapping titles to ids, used to fill empty id cells.
	#[arg(long, env = "MARQUEE_TITLES", global = true)]
	pub titles: Option<PathBuf>,

	#[arg(long, env = "MARQUEE_ID_COLUMN", default_value = defaults::ID_COLUMN, global = true)]
	pub id_column: String,

	#[arg(long, env = "MARQUEE_TITLE_COLUMN", default_value = defaults::TITLE_COLUMN, global = true)]
	pub title_column: String,

	/// Prefix every external id must carry; also advertised in the manifest.
	#[arg(long, env = "MARQUEE_ID_PREFIX", default_value = defaults::ID_PREFIX, global = true)]
	pub id_prefix: String,

	#[command(subcommand)]
	pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
	/// Build every catalog and serve them over HTTP (default).
	Serve,
	/// Print the ids referenced by catalogs that have no metadata document.
	Missing,
}

impl Cli {
	pub fn command(&self) -> Command {
		self.command.unwrap_or(Command::Serve)
	}

	pub fn tracing(&self) -> TracingBuilder {
		TracingBuilder::new().with_level(self.log_level.clone()).with_format(self.log_format)
	}

	/// `host:port`, with IPv6 literals bracketed.
	pub fn socket_addr(&self) -> String {
		if self.bind_addr.contains(':') && !self.bind_addr.starts_with('[') {
			format!("[{}]:{}", self.bind_addr, self.port)
		} else {
			format!("{}:{}", self.bind_addr, self.port)
		}
	}

	pub fn http_config(&self) -> HttpConfig {
		HttpConfig::new()
			.with_bind_addr(self.socket_addr())
			.with_max_age(self.max_age)
			.with_redirect_url(self.redirect_url.clone())
			.with_shutdown_grace(self.shutdown_grace)
	}

	pub fn descriptors(&self) -> marquee_core::Result<Vec<CatalogDescriptor>> {
		match &self.catalogs {
			Some(path) => CatalogDescriptor::load_list(path),
			None => Ok(defaults::catalogs()),
		}
	}

	pub fn assembler(&self) -> marquee_core::Result<Assembler> {
		let config = AssemblerConfig::new(&self.data_dir)
			.with_id_column(self.id_column.clone())
			.with_title_column(self.title_column.clone())
			.with_id_prefix(self.id_prefix.clone());

		let assembler = match &self.titles {
			Some(path) => {
				let resolver = MapResolver::load(path, &config.title_column, &config.id_column, &config.id_prefix)?;
				tracing::info!("Loaded {} titles from {}", resolver.len(), path.display());
				Assembler::new(config).with_resolver(resolver)
			}
			None => Assembler::new(config),
		};
		Ok(assembler)
	}
}
