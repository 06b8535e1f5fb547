//! Previously submitted patterns.
//!
//! Two configurations are supported. [`HistoryRing`] keeps every submission and
//! lets the prompt cycle through them; [`LastPattern`] only remembers the most
//! recent one to pre-fill the next prompt. Either lives for the whole process
//! and is shared by every view.

use regsel_primitives::Direction;
use serde::{Deserialize, Serialize};
use tracing::debug;


/// Which history configuration to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
	/// Cyclable ring of every submission.
	#[default]
	Ring,
	/// Single last-used pattern.
	Last,
}

/// Append-only ring of submitted patterns with a wrapping cursor.
///
/// Slot 0 always holds an empty sentinel. Recording resets the cursor to that
/// slot, which sits cyclically just past the newest entry, so cycling backward
/// yields the newest pattern first and cycling forward yields the oldest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRing {
	entries: Vec<String>,
	cursor: usize,
}

impl Default for HistoryRing {
	fn default() -> Self {
		Self {
			entries: vec![String::new()],
			cursor: 0,
		}
	}
}

impl HistoryRing {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `pattern` and resets the cursor to the sentinel slot.
	pub fn record(&mut self, pattern: impl Into<String>) {
		self.entries.push(pattern.into());
		self.cursor = 0;
	}

	/// Moves the cursor one step, wrapping at both ends, and returns the entry there.
	pub fn cycle(&mut self, direction: Direction) -> &str {
		let len = self.entries.len() as isize;
		let step = match direction {
			Direction::Forward => 1,
			Direction::Backward => -1,
		};
		self.cursor = (self.cursor as isize + step).rem_euclid(len) as usize;
		&self.entries[self.cursor]
	}

	/// Submitted patterns, oldest first (sentinel excluded).
	pub fn entries(&self) -> &[String] {
		&self.entries[1..]
	}

	/// Number of submitted patterns.
	pub fn len(&self) -> usize {
		self.entries.len() - 1
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Current cursor slot; 0 is the sentinel.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Most recently recorded pattern.
	pub fn newest(&self) -> Option<&str> {
		self.entries().last().map(String::as_str)
	}
}

/// Remembers only the last submitted pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastPattern {
	last: Option<String>,
}

impl LastPattern {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn record(&mut self, pattern: impl Into<String>) {
		self.last = Some(pattern.into());
	}

	pub fn get(&self) -> Option<&str> {
		self.last.as_deref()
	}
}

/// Process-wide pattern history in one of its two configurations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternHistory {
	Ring(HistoryRing),
	Last(LastPattern),
}

impl Default for PatternHistory {
	fn default() -> Self {
		Self::new(HistoryMode::default())
	}
}

impl PatternHistory {
	/// Creates an empty history in the given configuration.
	pub fn new(mode: HistoryMode) -> Self {
		match mode {
			HistoryMode::Ring => Self::Ring(HistoryRing::new()),
			HistoryMode::Last => Self::Last(LastPattern::new()),
		}
	}

	pub fn mode(&self) -> HistoryMode {
		match self {
			Self::Ring(_) => HistoryMode::Ring,
			Self::Last(_) => HistoryMode::Last,
		}
	}

	/// Records a submitted pattern. Empty patterns are never stored.
	pub fn record(&mut self, pattern: &str) {
		if pattern.is_empty() {
			debug!("history: ignoring empty pattern");
			return;
		}
		match self {
			Self::Ring(ring) => ring.record(pattern),
			Self::Last(last) => last.record(pattern),
		}
	}

	/// Text a freshly opened prompt starts with.
	///
	/// Only the last-pattern configuration pre-fills; the ring starts empty.
	pub fn prefill(&self) -> Option<&str> {
		match self {
			Self::Ring(_) => None,
			Self::Last(last) => last.get(),
		}
	}

	/// Cycles through the ring. Returns `None` in the last-pattern configuration.
	pub fn cycle(&mut self, direction: Direction) -> Option<&str> {
		match self {
			Self::Ring(ring) => Some(ring.cycle(direction)),
			Self::Last(_) => None,
		}
	}
}
