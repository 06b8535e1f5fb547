use regsel_primitives::{Range, Selection, ViewId};

use crate::host::SelectHost;

/// State of one select-by-regex invocation on a view.
///
/// Created when the prompt opens and dropped when it closes. The original
/// selection is an owned copy, so later changes to the view's selection never
/// leak into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
	originals: Selection,
	pattern: String,
}

impl Session {
	pub fn new(originals: Selection, pattern: impl Into<String>) -> Self {
		Self {
			originals,
			pattern: pattern.into(),
		}
	}

	/// Selection captured when the session began.
	pub fn originals(&self) -> &Selection {
		&self.originals
	}

	/// Ranges of the captured selection, in their original order.
	pub fn original_regions(&self) -> &[Range] {
		self.originals.ranges()
	}

	/// Prompt text as of the last event.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	pub fn set_pattern(&mut self, pattern: impl Into<String>) {
		self.pattern = pattern.into();
	}

	/// Puts the captured selection back on the view.
	pub fn restore(&self, host: &mut dyn SelectHost, view: ViewId) {
		host.set_selection(view, self.originals.clone());
	}

	/// Ends the session, erasing the highlight set.
	///
	/// The tag is erased even when no preview was drawn, so a highlight left
	/// by the host under the same tag never outlives the prompt.
	pub fn close(self, host: &mut dyn SelectHost, view: ViewId, tag: &str) {
		host.remove_highlight(view, tag);
	}
}
