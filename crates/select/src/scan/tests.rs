use std::cell::Cell;

use proptest::prelude::*;
use regex::Regex;
use regsel_primitives::{CharIdx, Range};

use super::*;

/// ASCII-only document searched with `regex`, counting host calls.
struct AsciiDoc {
	text: String,
	calls: Cell<usize>,
}

impl AsciiDoc {
	fn new(text: &str) -> Self {
		assert!(text.is_ascii());
		Self {
			text: text.to_string(),
			calls: Cell::new(0),
		}
	}
}

impl DocumentSearch for AsciiDoc {
	fn find_next(&self, pattern: &str, from: CharIdx) -> Result<Option<Range>, SearchError> {
		self.calls.set(self.calls.get() + 1);
		let re = Regex::new(pattern).map_err(|e| SearchError::InvalidPattern {
			pattern: pattern.to_string(),
			message: e.to_string(),
		})?;
		if from > self.text.len() {
			return Ok(None);
		}
		Ok(re.find_at(&self.text, from).map(|m| Range::new(m.start(), m.end())))
	}

	fn line_containing(&self, offset: CharIdx) -> Range {
		let offset = offset.min(self.text.len());
		let start = self.text[..offset].rfind('\n').map_or(0, |i| i + 1);
		let end = self.text[offset..].find('\n').map_or(self.text.len(), |i| offset + i);
		Range::new(start, end)
	}
}

/// Host that always answers with the same match, wherever the cursor is.
struct Stuck(Range);

impl DocumentSearch for Stuck {
	fn find_next(&self, _pattern: &str, _from: CharIdx) -> Result<Option<Range>, SearchError> {
		Ok(Some(self.0))
	}

	fn line_containing(&self, _offset: CharIdx) -> Range {
		Range::new(0, 100)
	}
}

#[test]
fn matches_inside_region() {
	let doc = AsciiDoc::new("aXbXcXd");
	let found = scan(&doc, "X", &[Range::new(0, 10)]).unwrap();
	assert_eq!(found, vec![Range::new(1, 2), Range::new(3, 4), Range::new(5, 6)]);
}

#[test]
fn no_match_is_empty() {
	let doc = AsciiDoc::new("hello");
	assert!(scan(&doc, "z", &[Range::new(0, 5)]).unwrap().is_empty());
}

#[test]
fn reversed_region_is_normalized() {
	let doc = AsciiDoc::new("aXbXcXd");
	let found = scan(&doc, "X", &[Range::new(4, 0)]).unwrap();
	assert_eq!(found, vec![Range::new(1, 2), Range::new(3, 4)]);
}

#[test]
fn straddling_match_is_rejected_not_clipped() {
	let doc = AsciiDoc::new("foo bar baz");
	let found = scan(&doc, "ba.", &[Range::new(0, 6)]).unwrap();
	assert!(found.is_empty());

	let found = scan(&doc, "ba.", &[Range::new(0, 7)]).unwrap();
	assert_eq!(found, vec![Range::new(4, 7)]);
}

#[test]
fn matches_before_region_are_skipped() {
	let doc = AsciiDoc::new("ab ab ab");
	let found = scan(&doc, "ab", &[Range::new(4, 8)]).unwrap();
	assert_eq!(found, vec![Range::new(6, 8)]);
}

#[test]
fn caret_widens_to_line() {
	let text = "01234\n6789abcdef012345\nxyz";
	let doc = AsciiDoc::new(text);
	assert_eq!(effective_bounds(&doc, Range::point(10)), Range::new(6, 22));
	let found = scan(&doc, "[0-9]+", &[Range::point(10)]).unwrap();
	assert_eq!(found, vec![Range::new(6, 10), Range::new(16, 22)]);
}

#[test]
fn caret_on_empty_line_finds_nothing() {
	let doc = AsciiDoc::new("a\n\na");
	let found = scan(&doc, "a", &[Range::point(2)]).unwrap();
	assert!(found.is_empty());
	assert_eq!(doc.calls.get(), 0);
}

#[test]
fn zero_length_matches_advance_one_char() {
	let doc = AsciiDoc::new("baab");
	let found = scan(&doc, "a*", &[Range::new(0, 4)]).unwrap();
	assert_eq!(found, vec![Range::new(1, 3)]);
}

#[test]
fn empty_only_pattern_terminates() {
	let doc = AsciiDoc::new("abcdef");
	let found = scan(&doc, "", &[Range::new(0, 6)]).unwrap();
	assert!(found.is_empty());
	assert_eq!(doc.calls.get(), 6);
}

#[test]
fn regions_are_scanned_independently_in_order() {
	let doc = AsciiDoc::new("x1 x2 x3 x4");
	let found = scan(&doc, "x.", &[Range::new(9, 11), Range::new(0, 5)]).unwrap();
	assert_eq!(found, vec![Range::new(9, 11), Range::new(0, 2), Range::new(3, 5)]);
}

#[test]
fn overlapping_regions_are_not_deduplicated() {
	let doc = AsciiDoc::new("aXb");
	let found = scan(&doc, "X", &[Range::new(0, 3), Range::new(1, 2)]).unwrap();
	assert_eq!(found, vec![Range::new(1, 2), Range::new(1, 2)]);
}

#[test]
fn invalid_pattern_propagates() {
	let doc = AsciiDoc::new("abc");
	let err = scan(&doc, "(", &[Range::new(0, 3)]).unwrap_err();
	assert!(matches!(err, SearchError::InvalidPattern { ref pattern, .. } if pattern == "("));
}

#[test]
fn backwards_answer_still_makes_progress() {
	let host = Stuck(Range::new(0, 2));
	let found = scan_region(&host, "x", Range::new(5, 9)).unwrap();
	assert!(found.is_empty());
}

#[test]
fn match_beyond_region_stops_early() {
	let doc = AsciiDoc::new("a.........................b");
	let found = scan(&doc, "b", &[Range::new(0, 5)]).unwrap();
	assert!(found.is_empty());
	assert_eq!(doc.calls.get(), 1);
}

fn patterns() -> impl Strategy<Value = &'static str> {
	prop::sample::select(vec!["a", "a*", "b+", "ab", "", "x?", "a|b", "^", "$", "\\b", "(?m)^a"])
}

proptest! {
	#[test]
	fn matches_stay_inside_their_region(
		text in "[ab\n]{0,40}",
		raw in prop::collection::vec((0usize..45, 0usize..45), 1..4),
		pattern in patterns(),
	) {
		let doc = AsciiDoc::new(&text);
		let len = text.len();
		let regions: Vec<Range> = raw.iter().map(|&(a, h)| Range::new(a.min(len), h.min(len))).collect();

		for region in &regions {
			let bounds = effective_bounds(&doc, *region);
			doc.calls.set(0);
			let found = scan_region(&doc, pattern, *region).unwrap();
			prop_assert!(doc.calls.get() <= bounds.len() + 1);
			for m in &found {
				prop_assert!(!m.is_empty());
				prop_assert!(bounds.contains_range(m));
			}
			prop_assert!(found.windows(2).all(|w| w[0].max() <= w[1].min()));
		}
	}
}
