//! Narrowing regions down to the pattern matches they contain.

use regsel_primitives::Range;
use tracing::trace;

use crate::error::SearchError;
use crate::host::DocumentSearch;

#[cfg(test)]
mod tests;

/// Returns the bounds a region is scanned within.
///
/// Reversed regions are normalized, and a caret widens to its whole line.
pub fn effective_bounds<S: DocumentSearch + ?Sized>(search: &S, region: Range) -> Range {
	let region = region.normalized();
	if region.is_empty() {
		search.line_containing(region.min()).normalized()
	} else {
		region
	}
}

/// Collects the matches of `pattern` lying entirely inside `region`, left to right.
///
/// Matches that start inside the region but run past its end are dropped, not
/// clipped. Zero-length matches are never recorded; each one advances the
/// cursor by a single character.
pub fn scan_region<S: DocumentSearch + ?Sized>(
	search: &S,
	pattern: &str,
	region: Range,
) -> Result<Vec<Range>, SearchError> {
	let bounds = effective_bounds(search, region);
	let end = bounds.max();
	let mut cursor = bounds.min();
	let mut matches = Vec::new();
	let mut probes = 0usize;

	while cursor < end {
		probes += 1;
		let Some(found) = search.find_next(pattern, cursor)? else {
			break;
		};
		let found = found.normalized();

		if found.is_empty() || found.max() <= cursor {
			cursor += 1;
			continue;
		}

		if found.min() >= end {
			break;
		}

		if bounds.contains_range(&found) {
			matches.push(found);
		}
		cursor = found.max();
	}

	trace!(?bounds, probes, matches = matches.len(), "scanned region");
	Ok(matches)
}

/// Scans every region independently and concatenates the results in region order.
///
/// Overlapping regions may yield the same match more than once.
pub fn scan<S: DocumentSearch + ?Sized>(
	search: &S,
	pattern: &str,
	regions: &[Range],
) -> Result<Vec<Range>, SearchError> {
	let mut matches = Vec::new();
	for region in regions {
		matches.extend(scan_region(search, pattern, *region)?);
	}
	Ok(matches)
}
