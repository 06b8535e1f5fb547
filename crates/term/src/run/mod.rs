//! Drives one select-by-regex session over a document.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, bail};
use regsel_primitives::{Selection, ViewId};
use regsel_select::memory::MemoryHost;
use regsel_select::{Command, Config, Outcome, PromptEvent, SelectByRegex, SelectError};
use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::Cli;

#[cfg(test)]
mod tests;

const VIEW: ViewId = ViewId::SCRATCH;

/// A range of the final selection together with the text it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedRange {
	pub start: usize,
	pub end: usize,
	pub text: String,
}

/// State of the preview after one `--type-out` keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
	pub pattern: String,
	/// Number of highlighted matches, `None` when the prefix was rejected.
	pub matches: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

/// Result of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
	pub outcome: String,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub previews: Vec<Preview>,
	pub selection: Vec<SelectedRange>,
}

impl Report {
	/// Writes previews as `# pattern: N` lines, then one `start..end<TAB>text` line per range.
	pub fn write_plain(&self, out: &mut impl Write) -> std::io::Result<()> {
		for preview in &self.previews {
			match (&preview.matches, &preview.error) {
				(_, Some(error)) => writeln!(out, "# {}: {error}", preview.pattern)?,
				(Some(n), None) => writeln!(out, "# {}: {n}", preview.pattern)?,
				(None, None) => writeln!(out, "# {}", preview.pattern)?,
			}
		}
		for range in &self.selection {
			writeln!(out, "{}..{}\t{}", range.start, range.end, range.text.escape_debug())?;
		}
		Ok(())
	}
}

/// Reads the document named by the CLI, or stdin.
fn read_document(file: Option<&Path>) -> anyhow::Result<String> {
	match file {
		Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display())),
		None => {
			let mut text = String::new();
			std::io::stdin().read_to_string(&mut text).context("reading stdin")?;
			Ok(text)
		}
	}
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
	match &cli.config {
		Some(path) => Config::load(path).with_context(|| format!("loading config {}", path.display())),
		None => Ok(Config::default()),
	}
}

/// Runs a session described by `cli`.
pub fn run(cli: &Cli) -> anyhow::Result<Report> {
	let config = load_config(cli)?;
	let text = read_document(cli.file.as_deref())?;
	select(&text, cli, config)
}

/// Runs a session over `text`.
pub fn select(text: &str, cli: &Cli, config: Config) -> anyhow::Result<Report> {
	let mut host = MemoryHost::with_text(VIEW, text);
	let len = text.chars().count();

	for range in &cli.ranges {
		if range.max() > len {
			bail!("range {}..{} is past the end of the document ({len} chars)", range.anchor, range.head);
		}
	}
	let selection = Selection::try_from_ranges(cli.ranges.iter().copied()).unwrap_or_else(|| Selection::single(0, len));
	debug!(ranges = selection.len(), len, "seeding selection");
	host.view_mut(VIEW)
		.context("scratch view missing")?
		.set_selection(selection);

	let mut controller = SelectByRegex::new(config);
	controller.run(&mut host, VIEW, Command::SelectByRegex)?;

	let mut previews = Vec::new();
	if cli.type_out {
		let mut typed = String::new();
		for ch in cli.pattern.chars() {
			typed.push(ch);
			previews.push(preview(&mut controller, &mut host, &typed));
		}
	}

	let outcome = controller
		.handle(&mut host, VIEW, PromptEvent::Submitted(cli.pattern.clone()))
		.with_context(|| format!("selecting `{}`", cli.pattern))?;

	let view = host.view(VIEW).context("scratch view missing")?;
	let selection = view
		.selection()
		.iter()
		.map(|range| SelectedRange {
			start: range.min(),
			end: range.max(),
			text: view.slice(*range),
		})
		.collect();

	Ok(Report {
		outcome: describe(&outcome),
		previews,
		selection,
	})
}

fn preview(controller: &mut SelectByRegex, host: &mut MemoryHost, typed: &str) -> Preview {
	let (matches, error) = match controller.handle(host, VIEW, PromptEvent::Changed(typed.to_string())) {
		Ok(Outcome::Previewed(n)) => (Some(n), None),
		Ok(Outcome::Cleared) => (Some(0), None),
		Ok(_) => (None, None),
		Err(SelectError::Search(e)) => {
			warn!(pattern = typed, error = %e, "prefix rejected");
			(None, Some(e.to_string()))
		}
		Err(e) => (None, Some(e.to_string())),
	};
	Preview {
		pattern: typed.to_string(),
		matches,
		error,
	}
}

fn describe(outcome: &Outcome) -> String {
	match outcome {
		Outcome::Selected(n) => format!("selected {n}"),
		Outcome::KeptOriginal => "no match".to_string(),
		Outcome::Restored => "restored".to_string(),
		other => format!("{other:?}").to_lowercase(),
	}
}
