use smallvec::{SmallVec, smallvec};

use crate::range::{CharIdx, Range};


/// An ordered, non-empty list of ranges.
///
/// Ranges are stored exactly as given: reversed ranges keep their direction
/// and overlapping ranges are not merged, so a captured selection can be
/// written back unchanged. The first range is the primary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
	ranges: SmallVec<[Range; 1]>,
}

impl Selection {
	/// Create a new selection with at least one range.
	///
	/// The `primary` range comes first; additional ranges follow in iteration
	/// order.
	pub fn new(primary: Range, others: impl IntoIterator<Item = Range>) -> Self {
		let mut ranges: SmallVec<[Range; 1]> = smallvec![primary];
		ranges.extend(others);
		Self { ranges }
	}

	/// Creates a selection from an iterator, returning `None` when it yields nothing.
	pub fn try_from_ranges(ranges: impl IntoIterator<Item = Range>) -> Option<Self> {
		let ranges: SmallVec<[Range; 1]> = ranges.into_iter().collect();
		if ranges.is_empty() { None } else { Some(Self { ranges }) }
	}

	/// Creates a single-range selection.
	pub fn single(anchor: CharIdx, head: CharIdx) -> Self {
		Self {
			ranges: smallvec![Range::new(anchor, head)],
		}
	}

	/// Creates a point selection (zero-width caret).
	pub fn point(pos: CharIdx) -> Self {
		Self::single(pos, pos)
	}

	/// Returns all ranges as a slice.
	pub fn ranges(&self) -> &[Range] {
		&self.ranges
	}

	/// Returns the number of ranges in this selection.
	///
	/// This is always at least 1 (Selection cannot be empty).
	#[allow(clippy::len_without_is_empty, reason = "Selection is never empty by design")]
	pub fn len(&self) -> usize {
		self.ranges.len()
	}

	/// Iterates over all ranges.
	pub fn iter(&self) -> impl Iterator<Item = &Range> {
		self.ranges.iter()
	}

	/// Returns true if every range is a zero-width caret.
	pub fn is_carets(&self) -> bool {
		self.ranges.iter().all(Range::is_empty)
	}

	/// Clamps all ranges to `[0, max_char]`.
	pub fn clamp(&mut self, max_char: CharIdx) {
		for range in &mut self.ranges {
			*range = range.clamp(max_char);
		}
	}
}

impl Default for Selection {
	fn default() -> Self {
		Self::point(0)
	}
}
