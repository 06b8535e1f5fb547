//! Line lookup over ropes.

use ropey::RopeSlice;

use crate::range::{CharIdx, Range};

/// Returns the extent of the line containing `pos`, without its terminator.
///
/// `pos` is clamped to the end of the text. Both `\n` and `\r\n` endings are
/// excluded, so a caret on an empty line yields an empty range at the line start.
pub fn line_extent(text: RopeSlice, pos: CharIdx) -> Range {
	let pos = pos.min(text.len_chars());
	let line = text.char_to_line(pos);
	let start = text.line_to_char(line);
	let content = text.line(line);
	let mut len = content.len_chars();

	if len > 0 && content.char(len - 1) == '\n' {
		len -= 1;
		if len > 0 && content.char(len - 1) == '\r' {
			len -= 1;
		}
	}

	Range::new(start, start + len)
}

#[cfg(test)]
mod tests {
	use ropey::Rope;

	use super::*;

	#[test]
	fn test_empty() {
		let text = Rope::from("");
		assert_eq!(line_extent(text.slice(..), 0), Range::point(0));
	}

	#[test]
	fn line_extent_excludes_newline() {
		let text = Rope::from("hello\nworld\n");
		let slice = text.slice(..);
		assert_eq!(line_extent(slice, 0), Range::new(0, 5));
		assert_eq!(line_extent(slice, 5), Range::new(0, 5));
		assert_eq!(line_extent(slice, 6), Range::new(6, 11));
		assert_eq!(line_extent(slice, 12), Range::point(12));
	}

	#[test]
	fn line_extent_crlf() {
		let text = Rope::from("ab\r\ncd");
		let slice = text.slice(..);
		assert_eq!(line_extent(slice, 1), Range::new(0, 2));
		assert_eq!(line_extent(slice, 5), Range::new(4, 6));
	}

	#[test]
	fn line_extent_clamps_past_end() {
		let text = Rope::from("abc");
		assert_eq!(line_extent(text.slice(..), 99), Range::new(0, 3));
	}

	#[test]
	fn line_extent_middle_of_document() {
		let text = Rope::from("01234\n6789012345678901\nxyz");
		assert_eq!(line_extent(text.slice(..), 10), Range::new(6, 22));
	}
}
