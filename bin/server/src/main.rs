// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

mod cli;

use std::{
	collections::HashSet,
	io::{self, Write},
	process::ExitCode,
	sync::Arc,
	thread,
};

use clap::Parser;
use marquee_core::{Assembler, CatalogDescriptor, CatalogTable, Manifest};
use marquee_runtime::SharedRuntime;
use marquee_sub_api::{Subsystem, SubsystemError};
use marquee_sub_server_http::{AppState, HttpSubsystem, ServerError};
use tokio::signal;
use tracing::{error, info};

use crate::cli::{Cli, Command};

#[derive(Debug, thiserror::Error)]
enum Error {
	#[error(transparent)]
	Catalog(#[from] marquee_core::Error),

	#[error(transparent)]
	Server(#[from] ServerError),

	#[error(transparent)]
	Subsystem(#[from] SubsystemError),

	#[error("failed to start runtime: {0}")]
	Runtime(#[source] io::Error),

	#[error("failed to write report: {0}")]
	Report(#[source] io::Error),
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	if let Err(err) = cli.tracing().init() {
		eprintln!("marquee: {}", err);
		return ExitCode::FAILURE;
	}

	let result = match cli.command() {
		Command::Serve => serve(&cli),
		Command::Missing => missing(&cli),
	};

	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!("{}", err);
			ExitCode::FAILURE
		}
	}
}

fn serve(cli: &Cli) -> Result<(), Error> {
	let descriptors = cli.descriptors()?;
	let assembler = cli.assembler()?;
	let table = CatalogTable::build(&assembler, &descriptors)?;
	let manifest = manifest(&assembler, &descriptors).to_bytes()?;

	let config = cli.http_config();
	let state = AppState::new(Arc::new(table), manifest, &config)?;

	let threads = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
	let runtime = SharedRuntime::new(threads).map_err(Error::Runtime)?;

	let mut http = HttpSubsystem::new(config, state, runtime.clone());
	http.start()?;
	info!("Serving {} catalogs on port {}", descriptors.len(), http.port().unwrap_or_default());

	runtime.block_on(shutdown_signal());

	http.shutdown()?;
	info!("Shutdown complete");
	Ok(())
}

fn manifest(assembler: &Assembler, descriptors: &[CatalogDescriptor]) -> Manifest {
	Manifest::new(env!("CARGO_PKG_VERSION"), descriptors).with_id_prefixes(vec![assembler.config().id_prefix.clone()])
}

fn missing(cli: &Cli) -> Result<(), Error> {
	let descriptors = cli.descriptors()?;
	let assembler = cli.assembler()?;
	report_missing(&assembler, &descriptors, &mut io::stdout().lock())
}

/// Writes each id without a metadata document once, in first-seen order.
fn report_missing(assembler: &Assembler, descriptors: &[CatalogDescriptor], out: &mut impl Write) -> Result<(), Error> {
	let mut seen = HashSet::new();
	for descriptor in descriptors {
		let identifiers = assembler.identifiers(descriptor)?;
		for id in assembler.store().missing(&identifiers.ids) {
			if seen.insert(id.clone()) {
				writeln!(out, "{}", id).map_err(Error::Report)?;
			}
		}
	}
	out.flush().map_err(Error::Report)
}

async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(e) = signal::ctrl_c().await {
			error!("Failed to install Ctrl+C handler: {}", e);
			std::future::pending::<()>().await;
		}
	};

	#[cfg(unix)]
	let terminate = async {
		match signal::unix::signal(signal::unix::SignalKind::terminate()) {
			Ok(mut terminate) => {
				terminate.recv().await;
			}
			Err(e) => {
				error!("Failed to install SIGTERM handler: {}", e);
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => {},
		_ = terminate => {},
	}

	info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
	use marquee_core::{AssemblerConfig, MediaType};
	use marquee_testing::DataDir;

	use super::*;

	#[test]
	fn test_report_missing_dedupes_across_catalogs() {
		let data = DataDir::new();
		data.ranked("first", &["tt1", "tt2", "tt3"]);
		data.ranked("second", &["tt3", "tt4", "tt2"]);
		data.movie("tt1");
		data.movie("tt4");

		let descriptors = vec![
			CatalogDescriptor::new("first", MediaType::Movie, "First"),
			CatalogDescriptor::new("second", MediaType::Movie, "Second"),
		];
		let assembler = Assembler::new(AssemblerConfig::new(data.path()));

		let mut out = Vec::new();
		report_missing(&assembler, &descriptors, &mut out).unwrap();
		assert_eq!(String::from_utf8(out).unwrap(), "tt2\ntt3\n");
	}

	#[test]
	fn test_manifest_advertises_configured_prefix() {
		let descriptors = vec![CatalogDescriptor::new("people", MediaType::Movie, "People")];
		let assembler = Assembler::new(AssemblerConfig::new(".").with_id_prefix("nm"));

		let manifest = manifest(&assembler, &descriptors);
		assert_eq!(manifest.id_prefixes, vec!["nm".to_string()]);
		assert_eq!(manifest.version, env!("CARGO_PKG_VERSION"));
	}

	#[test]
	fn test_report_missing_fails_on_absent_record_file() {
		let data = DataDir::new();
		let descriptors = vec![CatalogDescriptor::new("absent", MediaType::Movie, "Absent")];
		let assembler = Assembler::new(AssemblerConfig::new(data.path()));

		let mut out = Vec::new();
		let err = report_missing(&assembler, &descriptors, &mut out).unwrap_err();
		assert!(matches!(err, Error::Catalog(marquee_core::Error::DataUnavailable { .. })));
	}
}
