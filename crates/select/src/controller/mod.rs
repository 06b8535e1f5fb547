//! The select-by-regex state machine.
//!
//! Each view is either idle or has its prompt open. The host feeds prompt
//! events in through [`SelectByRegex::handle`]; the controller answers by
//! previewing matches as a highlight, committing them as the selection, or
//! putting the original selection back.

use regsel_primitives::{Direction, Range, Selection, ViewId};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::config::Config;
use crate::error::{Result, SelectError};
use crate::history::PatternHistory;
use crate::host::{HighlightStyle, PromptRequest, SelectHost, ViewSearch};
use crate::scan::scan;
use crate::session::Session;


/// Events the host's prompt reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
	/// The prompt text changed (one keystroke).
	Changed(String),
	/// The user confirmed the prompt.
	Submitted(String),
	/// The user dismissed the prompt.
	Cancelled,
}

/// Whether a view has a prompt open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
	Idle,
	PromptOpen,
}

/// What the controller did in response to a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	/// No session was open on the view.
	Ignored,
	/// The prompt was opened.
	Opened,
	/// Empty prompt text; the existing preview was left as-is.
	Unchanged,
	/// Matches were drawn as a highlight.
	Previewed(usize),
	/// No matches; the highlight was erased.
	Cleared,
	/// Matches replaced the selection.
	Selected(usize),
	/// No matches on submit; the original selection was kept.
	KeptOriginal,
	/// The original selection was restored.
	Restored,
	/// A history entry replaced the prompt text.
	Recalled(String),
}

/// Controller for the select-by-regex command across all views.
#[derive(Debug, Default)]
pub struct SelectByRegex {
	config: Config,
	history: PatternHistory,
	sessions: FxHashMap<ViewId, Session>,
}

impl SelectByRegex {
	/// Creates a controller with a fresh history in the configured mode.
	pub fn new(config: Config) -> Self {
		let history = PatternHistory::new(config.history.mode);
		Self::with_history(config, history)
	}

	/// Creates a controller around an existing history.
	pub fn with_history(config: Config, history: PatternHistory) -> Self {
		Self {
			config,
			history,
			sessions: FxHashMap::default(),
		}
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn history(&self) -> &PatternHistory {
		&self.history
	}

	pub fn state(&self, view: ViewId) -> SessionState {
		if self.sessions.contains_key(&view) {
			SessionState::PromptOpen
		} else {
			SessionState::Idle
		}
	}

	/// Returns the open session on `view`, if any.
	pub fn session(&self, view: ViewId) -> Option<&Session> {
		self.sessions.get(&view)
	}

	/// Captures the selection of `view` and opens the pattern prompt.
	///
	/// A session already open on the view is replaced and its highlight erased.
	pub fn begin(&mut self, host: &mut dyn SelectHost, view: ViewId) -> Outcome {
		let originals = host.selection(view);

		if let Some(previous) = self.sessions.remove(&view) {
			debug!(%view, "select_by_regex: replacing open session");
			previous.close(host, view, &self.config.highlight.tag);
		}

		let initial = self.history.prefill().unwrap_or_default().to_string();
		host.open_prompt(
			view,
			PromptRequest {
				title: &self.config.prompt.title,
				initial_text: &initial,
			},
		);

		debug!(%view, regions = originals.len(), prefill = %initial, "select_by_regex: session opened");
		self.sessions.insert(view, Session::new(originals, initial));
		Outcome::Opened
	}

	/// Dispatches a prompt event.
	pub fn handle(&mut self, host: &mut dyn SelectHost, view: ViewId, event: PromptEvent) -> Result<Outcome> {
		match event {
			PromptEvent::Changed(text) => self.on_pattern_changed(host, view, &text),
			PromptEvent::Submitted(text) => self.on_submit(host, view, &text),
			PromptEvent::Cancelled => Ok(self.cancel(host, view)),
		}
	}

	/// Previews the matches of `text`. Empty text leaves the current preview alone.
	///
	/// A search error propagates and the prompt stays open.
	pub fn on_pattern_changed(&mut self, host: &mut dyn SelectHost, view: ViewId, text: &str) -> Result<Outcome> {
		let Some(session) = self.sessions.get_mut(&view) else {
			debug!(%view, "select_by_regex: change without open prompt");
			return Ok(Outcome::Ignored);
		};
		session.set_pattern(text);
		if text.is_empty() {
			return Ok(Outcome::Unchanged);
		}
		scan_and_preview(&self.config, session, host, view, text)
	}

	/// Commits the matches of `text` and records it in the history.
	///
	/// Empty text cancels. On a search error the session stays open and
	/// nothing is recorded.
	pub fn on_submit(&mut self, host: &mut dyn SelectHost, view: ViewId, text: &str) -> Result<Outcome> {
		if text.is_empty() {
			return Ok(self.cancel(host, view));
		}
		let Some(session) = self.sessions.get(&view) else {
			debug!(%view, "select_by_regex: submit without open prompt");
			return Ok(Outcome::Ignored);
		};

		let matches = find_matches(host, view, text, session.original_regions())?;
		let Some(session) = self.sessions.remove(&view) else {
			return Ok(Outcome::Ignored);
		};
		let outcome = commit(&self.config, session, host, view, matches);

		self.history.record(text);
		debug!(%view, pattern = text, ?outcome, "select_by_regex: committed");
		Ok(outcome)
	}

	/// Restores the original selection and erases the highlight.
	pub fn cancel(&mut self, host: &mut dyn SelectHost, view: ViewId) -> Outcome {
		let Some(session) = self.sessions.remove(&view) else {
			debug!(%view, "select_by_regex: cancel without open prompt");
			return Outcome::Ignored;
		};
		session.restore(host, view);
		session.close(host, view, &self.config.highlight.tag);
		debug!(%view, "select_by_regex: cancelled");
		Outcome::Restored
	}

	/// Replaces the prompt text with the next history entry and previews it.
	///
	/// Returns `Ok(None)` when the history does not cycle (last-pattern mode).
	pub fn cycle_history(
		&mut self,
		host: &mut dyn SelectHost,
		view: ViewId,
		backwards: bool,
	) -> Result<Option<String>> {
		let Some(session) = self.sessions.get_mut(&view) else {
			return Err(SelectError::NoSession(view));
		};
		let direction = if backwards {
			Direction::Backward
		} else {
			Direction::Forward
		};
		let Some(entry) = self.history.cycle(direction).map(str::to_string) else {
			return Ok(None);
		};

		host.set_prompt_text(view, &entry);
		session.set_pattern(entry.as_str());
		if !entry.is_empty() {
			scan_and_preview(&self.config, session, host, view, &entry)?;
		}
		trace!(%view, entry = %entry, "select_by_regex: recalled history entry");
		Ok(Some(entry))
	}
}

fn find_matches(host: &dyn SelectHost, view: ViewId, pattern: &str, regions: &[Range]) -> Result<Vec<Range>> {
	let search = ViewSearch::new(host, view);
	Ok(scan(&search, pattern, regions)?)
}

/// Draws the matches as a highlight without touching the selection.
fn scan_and_preview(
	config: &Config,
	session: &Session,
	host: &mut dyn SelectHost,
	view: ViewId,
	pattern: &str,
) -> Result<Outcome> {
	let matches = find_matches(host, view, pattern, session.original_regions())?;
	let tag = &config.highlight.tag;

	let Some(first) = matches.first() else {
		host.remove_highlight(view, tag);
		trace!(%view, pattern, "select_by_regex: preview cleared");
		return Ok(Outcome::Cleared);
	};

	let style = HighlightStyle {
		scope: host.scope_at(view, first.min()),
		draw: config.highlight.draw,
	};
	host.add_highlight(view, tag, &matches, &style);
	trace!(%view, pattern, matches = matches.len(), "select_by_regex: preview drawn");
	Ok(Outcome::Previewed(matches.len()))
}

/// Selects the matches, or the original regions when there are none.
fn commit(config: &Config, session: Session, host: &mut dyn SelectHost, view: ViewId, matches: Vec<Range>) -> Outcome {
	let count = matches.len();
	let outcome = match Selection::try_from_ranges(matches) {
		Some(selection) => {
			host.set_selection(view, selection);
			Outcome::Selected(count)
		}
		None => {
			session.restore(host, view);
			Outcome::KeptOriginal
		}
	};
	session.close(host, view, &config.highlight.tag);
	outcome
}
