//! In-memory [`SelectHost`] over rope buffers.
//!
//! Used by the command-line frontend and the tests. Patterns use the `regex`
//! crate's syntax; offsets in and out are char indices.

use std::cell::RefCell;
use std::collections::BTreeMap;

use regex::Regex;
use regsel_primitives::{CharIdx, Range, Rope, Selection, ViewId, line_extent};
use rustc_hash::FxHashMap;

use crate::error::SearchError;
use crate::host::{HighlightStyle, PromptRequest, Scope, SelectHost};


/// Scope reported where no span was registered.
pub const DEFAULT_SCOPE: &str = "text.plain";

/// A drawn highlight set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
	pub regions: Vec<Range>,
	pub style: HighlightStyle,
}

/// State of an open prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
	pub title: String,
	pub text: String,
}

/// One buffer shown in one view.
#[derive(Debug, Clone)]
pub struct MemoryView {
	text: Rope,
	flat: String,
	selection: Selection,
	scopes: Vec<(Range, Scope)>,
	highlights: BTreeMap<String, Highlight>,
	prompt: Option<PromptState>,
}

impl MemoryView {
	pub fn new(text: &str) -> Self {
		Self {
			text: Rope::from_str(text),
			flat: text.to_string(),
			selection: Selection::default(),
			scopes: Vec::new(),
			highlights: BTreeMap::new(),
			prompt: None,
		}
	}

	pub fn text(&self) -> &Rope {
		&self.text
	}

	/// Returns the text covered by `range`, clamped to the document.
	pub fn slice(&self, range: Range) -> String {
		let len = self.text.len_chars();
		let range = range.clamp(len);
		self.text.slice(range.min()..range.max()).to_string()
	}

	pub fn selection(&self) -> &Selection {
		&self.selection
	}

	/// Replaces the selection, clamping every range to the end of the text.
	pub fn set_selection(&mut self, mut selection: Selection) {
		selection.clamp(self.text.len_chars());
		self.selection = selection;
	}

	/// Registers a scope span. The innermost span wins in [`SelectHost::scope_at`].
	pub fn add_scope(&mut self, range: Range, scope: impl Into<Scope>) {
		self.scopes.push((range.normalized(), scope.into()));
	}

	pub fn scope_at(&self, offset: CharIdx) -> Scope {
		self.scopes
			.iter()
			.filter(|(range, _)| range.contains(offset))
			.min_by_key(|(range, _)| range.len())
			.map(|(_, scope)| scope.clone())
			.unwrap_or_else(|| Scope::new(DEFAULT_SCOPE))
	}

	pub fn highlight(&self, tag: &str) -> Option<&Highlight> {
		self.highlights.get(tag)
	}

	pub fn has_highlights(&self) -> bool {
		!self.highlights.is_empty()
	}

	pub fn prompt(&self) -> Option<&PromptState> {
		self.prompt.as_ref()
	}

	/// Closes the prompt, as the editor does after submit or cancel.
	pub fn close_prompt(&mut self) -> Option<PromptState> {
		self.prompt.take()
	}
}

/// Reference host holding any number of views.
#[derive(Debug, Default)]
pub struct MemoryHost {
	views: FxHashMap<ViewId, MemoryView>,
	regex_cache: RefCell<Option<(String, Regex)>>,
}

impl MemoryHost {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a host with a single view showing `text`.
	pub fn with_text(view: ViewId, text: &str) -> Self {
		let mut host = Self::new();
		host.insert_view(view, text);
		host
	}

	/// Adds (or replaces) a view showing `text`, with a caret at offset 0.
	pub fn insert_view(&mut self, view: ViewId, text: &str) -> &mut MemoryView {
		let slot = self.views.entry(view).or_insert_with(|| MemoryView::new(""));
		*slot = MemoryView::new(text);
		slot
	}

	pub fn view(&self, view: ViewId) -> Option<&MemoryView> {
		self.views.get(&view)
	}

	pub fn view_mut(&mut self, view: ViewId) -> Option<&mut MemoryView> {
		self.views.get_mut(&view)
	}

	fn compiled<T>(&self, pattern: &str, f: impl FnOnce(&Regex) -> T) -> Result<T, SearchError> {
		let mut cache = self.regex_cache.borrow_mut();
		let (key, re) = match cache.take() {
			Some((cached, re)) if cached == pattern => (cached, re),
			_ => {
				let re = Regex::new(pattern).map_err(|e| SearchError::InvalidPattern {
					pattern: pattern.to_string(),
					message: e.to_string(),
				})?;
				(pattern.to_string(), re)
			}
		};
		let out = f(&re);
		*cache = Some((key, re));
		Ok(out)
	}
}

impl SelectHost for MemoryHost {
	fn selection(&self, view: ViewId) -> Selection {
		self.views.get(&view).map(|v| v.selection.clone()).unwrap_or_default()
	}

	fn set_selection(&mut self, view: ViewId, selection: Selection) {
		if let Some(v) = self.views.get_mut(&view) {
			v.set_selection(selection);
		}
	}

	fn open_prompt(&mut self, view: ViewId, request: PromptRequest<'_>) {
		if let Some(v) = self.views.get_mut(&view) {
			v.prompt = Some(PromptState {
				title: request.title.to_string(),
				text: request.initial_text.to_string(),
			});
		}
	}

	fn set_prompt_text(&mut self, view: ViewId, text: &str) {
		if let Some(prompt) = self.views.get_mut(&view).and_then(|v| v.prompt.as_mut()) {
			prompt.text = text.to_string();
		}
	}

	fn find_next(&self, view: ViewId, pattern: &str, from: CharIdx) -> Result<Option<Range>, SearchError> {
		let v = self.views.get(&view).ok_or(SearchError::UnknownView(view))?;
		let from = from.min(v.text.len_chars());
		let byte = v.text.char_to_byte(from);

		self.compiled(pattern, |re| {
			re.find_at(&v.flat, byte)
				.map(|m| Range::new(v.text.byte_to_char(m.start()), v.text.byte_to_char(m.end())))
		})
	}

	fn line_containing(&self, view: ViewId, offset: CharIdx) -> Range {
		self.views
			.get(&view)
			.map(|v| line_extent(v.text.slice(..), offset))
			.unwrap_or_else(|| Range::point(offset))
	}

	fn scope_at(&self, view: ViewId, offset: CharIdx) -> Scope {
		self.views
			.get(&view)
			.map(|v| v.scope_at(offset))
			.unwrap_or_else(|| Scope::new(DEFAULT_SCOPE))
	}

	fn add_highlight(&mut self, view: ViewId, tag: &str, regions: &[Range], style: &HighlightStyle) {
		if let Some(v) = self.views.get_mut(&view) {
			v.highlights.insert(
				tag.to_string(),
				Highlight {
					regions: regions.to_vec(),
					style: style.clone(),
				},
			);
		}
	}

	fn remove_highlight(&mut self, view: ViewId, tag: &str) {
		if let Some(v) = self.views.get_mut(&view) {
			v.highlights.remove(tag);
		}
	}
}
