//! CLI schema and parsing helpers for the regsel binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use regsel_primitives::Range;

#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(name = "regsel")]
#[command(about = "Narrow a selection to the matches of a regular expression")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Regular expression to select
	pub pattern: String,

	/// File to search (reads stdin if omitted)
	pub file: Option<PathBuf>,

	/// Original selection as `A..B` char offsets; repeatable.
	/// `B..A` is a reversed range and a bare `A` is a caret (scans its line).
	/// Defaults to the whole document.
	#[arg(short = 'r', long = "range", value_name = "A..B", value_parser = parse_range)]
	pub ranges: Vec<Range>,

	/// Feed the pattern one keystroke at a time and report each preview
	#[arg(long)]
	pub type_out: bool,

	/// Path to a TOML config file (the prompt title and highlight settings
	/// apply; a single run never recalls history, so `[history]` has no effect)
	#[arg(short = 'c', long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Print the result as JSON
	#[arg(long)]
	pub json: bool,

	/// Increase log verbosity (-v debug, -vv trace)
	#[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
	pub verbose: u8,
}

/// Parses `A..B` (anchor..head) or a bare caret offset `A`.
pub fn parse_range(s: &str) -> Result<Range, String> {
	let offset = |part: &str| {
		part.trim()
			.parse::<usize>()
			.map_err(|e| format!("invalid offset `{part}` in `{s}`: {e}"))
	};

	match s.split_once("..") {
		Some((anchor, head)) => Ok(Range::new(offset(anchor)?, offset(head)?)),
		None => Ok(Range::point(offset(s)?)),
	}
}
