/// Selection direction (anchor to head).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	/// Head is at or after anchor (normal selection).
	Forward,
	/// Head is before anchor (reverse selection).
	Backward,
}

/// A position in the text, measured in characters (not bytes).
///
/// This is the canonical coordinate space for regsel.
pub type CharIdx = usize;

/// A text range defined by anchor and head positions.
///
/// The anchor is the fixed end, and the head moves during selection extension.
/// Regardless of direction, the range covers the half-open extent
/// `[min(), max())`. A range with `anchor == head` is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
	/// The fixed end of the range.
	pub anchor: CharIdx,
	/// The moving end of the range (cursor position).
	pub head: CharIdx,
}

impl Range {
	/// Creates a new range from anchor to head.
	pub fn new(anchor: CharIdx, head: CharIdx) -> Self {
		Self { anchor, head }
	}

	/// Creates a zero-width range (caret) at the given position.
	pub fn point(pos: CharIdx) -> Self {
		Self::new(pos, pos)
	}

	/// Returns the smaller of anchor and head.
	#[inline]
	pub fn min(&self) -> CharIdx {
		std::cmp::min(self.anchor, self.head)
	}

	/// Returns the larger of anchor and head.
	#[inline]
	pub fn max(&self) -> CharIdx {
		std::cmp::max(self.anchor, self.head)
	}

	/// Returns the length of the range in characters.
	#[inline]
	pub fn len(&self) -> usize {
		self.max() - self.min()
	}

	/// Returns true if anchor equals head (zero-width caret).
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.anchor == self.head
	}

	/// Returns the direction of this range.
	#[inline]
	pub fn direction(&self) -> Direction {
		if self.head < self.anchor {
			Direction::Backward
		} else {
			Direction::Forward
		}
	}

	/// Returns a new range with anchor and head swapped.
	pub fn flip(&self) -> Self {
		Self {
			anchor: self.head,
			head: self.anchor,
		}
	}

	/// Returns a range with the specified direction, flipping if needed.
	pub fn with_direction(self, direction: Direction) -> Self {
		if self.direction() == direction {
			self
		} else {
			self.flip()
		}
	}

	/// Returns the same extent as a forward range (`anchor <= head`).
	#[inline]
	pub fn normalized(self) -> Self {
		self.with_direction(Direction::Forward)
	}

	/// Returns true if the position is within the range (exclusive of max).
	pub fn contains(&self, pos: CharIdx) -> bool {
		pos >= self.min() && pos < self.max()
	}

	/// Returns true if `other` lies entirely within this range's extent.
	///
	/// Boundaries are inclusive on both sides, so a range contains itself and
	/// a caret sitting on either edge.
	pub fn contains_range(&self, other: &Range) -> bool {
		self.min() <= other.min() && other.max() <= self.max()
	}

	/// Clamps anchor and head to `[0, max_char]`.
	pub fn clamp(&self, max_char: CharIdx) -> Self {
		Self {
			anchor: self.anchor.min(max_char),
			head: self.head.min(max_char),
		}
	}
}

impl Default for Range {
	fn default() -> Self {
		Self::point(0)
	}
}

impl From<std::ops::Range<CharIdx>> for Range {
	fn from(r: std::ops::Range<CharIdx>) -> Self {
		Self::new(r.start, r.end)
	}
}
