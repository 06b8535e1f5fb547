//! `regsel`: narrow a selection to the matches of a regex from the command line.
//!
//! Loads a document into the in-memory host, seeds the selection from
//! `--range`, and drives one select-by-regex session to completion.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

mod cli;
mod run;

use cli::Cli;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let report = run::run(&cli)?;
	info!(outcome = %report.outcome, ranges = report.selection.len(), "session finished");

	let mut out = std::io::stdout().lock();
	if cli.json {
		serde_json::to_writer_pretty(&mut out, &report)?;
		writeln!(out)?;
	} else {
		report.write_plain(&mut out)?;
	}
	out.flush()?;

	Ok(())
}

fn default_filter(verbose: u8) -> &'static str {
	match verbose {
		0 => "regsel_select=info,regsel_term=info,warn",
		1 => "regsel_select=debug,regsel_term=debug,info",
		_ => "regsel_select=trace,regsel_term=trace,debug",
	}
}

fn setup_tracing(verbose: u8) {
	use std::fs::OpenOptions;

	use tracing_subscriber::EnvFilter;
	use tracing_subscriber::prelude::*;

	let filter = || {
		EnvFilter::try_from_env("REGSEL_LOG")
			.or_else(|_| EnvFilter::try_from_default_env())
			.unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)))
	};

	// REGSEL_LOG_DIR sends logs to a per-process file instead of stderr
	if let Some(log_dir) = std::env::var("REGSEL_LOG_DIR").ok().map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let log_path = log_dir.join(format!("regsel.{}.log", std::process::id()));

		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			let file_layer = tracing_subscriber::fmt::layer()
				.with_writer(file)
				.with_ansi(false)
				.with_target(true);

			tracing_subscriber::registry().with(filter()).with(file_layer).init();
			tracing::debug!(path = ?log_path, "tracing initialized");
			return;
		}
	}

	tracing_subscriber::fmt()
		.with_env_filter(filter())
		.with_writer(std::io::stderr)
		.init();
}
