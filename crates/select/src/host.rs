//! Capabilities the embedding editor provides.
//!
//! The controller never touches a buffer directly. Everything it needs from the
//! editor goes through [`SelectHost`]: reading and writing a view's selection,
//! opening the pattern prompt, searching forward, and drawing a transient
//! highlight. [`DocumentSearch`] is the narrower search-only capability the
//! scan algorithm runs against, so it can be exercised with a plain test double.

use regsel_primitives::{CharIdx, Range, Selection, ViewId};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Opaque style token sampled from the document (a syntax scope name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scope(String);

impl Scope {
	pub fn new(name: impl Into<String>) -> Self {
		Self(name.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for Scope {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

impl std::fmt::Display for Scope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

/// How a highlight set is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawStyle {
	/// Border around each region, no fill.
	#[default]
	Outline,
	/// Solid background fill.
	Fill,
	/// Underline only.
	Underline,
}

/// Style of a highlight set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightStyle {
	/// Scope whose color the highlight borrows.
	pub scope: Scope,
	pub draw: DrawStyle,
}

/// Parameters for opening the pattern prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptRequest<'a> {
	/// Label shown before the input field.
	pub title: &'a str,
	/// Text the input field starts with.
	pub initial_text: &'a str,
}

/// Forward search over one document.
pub trait DocumentSearch {
	/// Returns the nearest match of `pattern` starting at or after `from`.
	///
	/// The search covers the whole document and does not wrap around.
	fn find_next(&self, pattern: &str, from: CharIdx) -> Result<Option<Range>, SearchError>;

	/// Returns the extent of the line containing `offset`, without its terminator.
	fn line_containing(&self, offset: CharIdx) -> Range;
}

/// Everything the select-by-regex controller needs from the editor.
///
/// Prompt events travel the other way: the host calls
/// [`SelectByRegex::handle`](crate::SelectByRegex::handle) when the prompt text
/// changes, is submitted, or is dismissed.
pub trait SelectHost {
	/// Returns the current selection of `view`.
	fn selection(&self, view: ViewId) -> Selection;

	/// Replaces the selection of `view`.
	fn set_selection(&mut self, view: ViewId, selection: Selection);

	/// Shows the text prompt for `view`.
	fn open_prompt(&mut self, view: ViewId, request: PromptRequest<'_>);

	/// Overwrites the whole text of the open prompt on `view`.
	fn set_prompt_text(&mut self, view: ViewId, text: &str);

	/// See [`DocumentSearch::find_next`].
	fn find_next(&self, view: ViewId, pattern: &str, from: CharIdx) -> Result<Option<Range>, SearchError>;

	/// See [`DocumentSearch::line_containing`].
	fn line_containing(&self, view: ViewId, offset: CharIdx) -> Range;

	/// Returns the style token at `offset`.
	fn scope_at(&self, view: ViewId, offset: CharIdx) -> Scope;

	/// Draws (or replaces) the highlight set named `tag`.
	fn add_highlight(&mut self, view: ViewId, tag: &str, regions: &[Range], style: &HighlightStyle);

	/// Erases the highlight set named `tag`. Erasing a missing tag is a no-op.
	fn remove_highlight(&mut self, view: ViewId, tag: &str);
}

/// Borrows a host as the [`DocumentSearch`] of a single view.
pub struct ViewSearch<'a> {
	host: &'a dyn SelectHost,
	view: ViewId,
}

impl<'a> ViewSearch<'a> {
	pub fn new(host: &'a dyn SelectHost, view: ViewId) -> Self {
		Self { host, view }
	}
}

impl DocumentSearch for ViewSearch<'_> {
	fn find_next(&self, pattern: &str, from: CharIdx) -> Result<Option<Range>, SearchError> {
		self.host.find_next(self.view, pattern, from)
	}

	fn line_containing(&self, offset: CharIdx) -> Range {
		self.host.line_containing(self.view, offset)
	}
}
