//! Shorthand lines pasted from the in-game bookmark window.
//!
//! The bookmark window exports one tab-separated row per bookmark:
//!
//! ```text
//! #H5A ABC H296<TAB>Coordinate<TAB>2 km<TAB>J123456<TAB>...
//! ```
//!
//! Only `Coordinate` rows located in the system being viewed can describe
//! a connection there; their first column is the shorthand.

use tracing::debug;

use crate::{ParsedConnection, SyntaxError, parse};

/// Bookmark type of points in space.
const COORDINATE: &str = "Coordinate";

/// One line that may hold shorthand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
	pub text: String,
	/// Whether a syntax error on this line should be reported rather than
	/// skipped.
	pub strict: bool,
}

impl Candidate {
	pub fn new(text: impl Into<String>, strict: bool) -> Self {
		Self {
			text: text.into(),
			strict,
		}
	}

	/// The text with a leading `#` marker removed.
	pub fn shorthand(&self) -> &str {
		let text = self.text.trim_start();
		match text.strip_prefix('#') {
			Some(rest) => rest.trim_start(),
			None => text,
		}
	}

	fn marked(text: &str) -> bool {
		text.trim_start().starts_with('#')
	}
}

/// What a clipboard blob turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paste {
	/// Lines to parse, in paste order.
	Lines(Vec<Candidate>),
	/// Not shorthand; the paste belongs to whoever else handles it.
	NotBookmarks,
}

/// Splits a clipboard blob into shorthand candidates for `system`.
pub fn extract(clipboard: &str, system: &str) -> Paste {
	if clipboard.contains(['\r', '\n']) {
		let lines: Vec<_> = clipboard
			.split('\n')
			.map(|row| row.strip_suffix('\r').unwrap_or(row))
			.filter_map(|row| coordinate_name(row, system))
			.map(|name| Candidate::new(name, Candidate::marked(name)))
			.collect();
		if lines.is_empty() {
			return Paste::NotBookmarks;
		}
		return Paste::Lines(lines);
	}

	if !clipboard.contains('\t') {
		return Paste::Lines(vec![Candidate::new(clipboard, true)]);
	}
	match coordinate_name(clipboard, system) {
		Some(name) => Paste::Lines(vec![Candidate::new(name, true)]),
		None => Paste::NotBookmarks,
	}
}

/// First column of a `Coordinate` row located in `system`.
fn coordinate_name<'a>(row: &'a str, system: &str) -> Option<&'a str> {
	let mut columns = row.split('\t');
	let name = columns.next()?;
	let kind = columns.next()?;
	let _distance = columns.next()?;
	let location = columns.next()?;
	(kind == COORDINATE && location == system).then_some(name)
}

/// Outcome of parsing a set of candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateReport {
	/// Successfully parsed lines, in candidate order.
	pub parsed: Vec<ParsedConnection>,
	/// Strict lines that failed, with their text.
	pub rejected: Vec<(String, SyntaxError)>,
	/// Non-strict lines that failed.
	pub skipped: usize,
}

/// Parses every candidate.
pub fn parse_candidates(candidates: &[Candidate]) -> CandidateReport {
	let mut report = CandidateReport::default();
	for candidate in candidates {
		match parse(candidate.shorthand()) {
			Ok(parsed) => report.parsed.push(parsed),
			Err(error) if candidate.strict => report.rejected.push((candidate.text.clone(), error)),
			Err(_) => report.skipped += 1,
		}
	}
	debug!(
		parsed = report.parsed.len(),
		rejected = report.rejected.len(),
		skipped = report.skipped,
		"parsed bookmark candidates"
	);
	report
}

#[cfg(test)]
mod tests;
