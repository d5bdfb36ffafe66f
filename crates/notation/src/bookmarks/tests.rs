use pretty_assertions::assert_eq;

use super::*;
use crate::SyntaxErrorKind;

const SYSTEM: &str = "J123456";

fn row(name: &str, kind: &str, system: &str) -> String {
	format!("{name}\t{kind}\t2 km\t{system}\tCloud Ring")
}

#[test]
fn plain_line_is_one_strict_candidate() {
	assert_eq!(
		extract("H5A ABC H296", SYSTEM),
		Paste::Lines(vec![Candidate::new("H5A ABC H296", true)])
	);
}

#[test]
fn single_bookmark_row() {
	let paste = row("#H5A ABC H296", "Coordinate", SYSTEM);
	assert_eq!(
		extract(&paste, SYSTEM),
		Paste::Lines(vec![Candidate::new("#H5A ABC H296", true)])
	);
}

#[test]
fn single_row_elsewhere_is_not_ours() {
	let paste = row("#H5A ABC H296", "Coordinate", "J654321");
	assert_eq!(extract(&paste, SYSTEM), Paste::NotBookmarks);
}

#[test]
fn signature_paste_is_not_ours() {
	let paste = "ABC-123\tCosmic Signature\tWormhole\t\t100.0%\t4.21 AU";
	assert_eq!(extract(paste, SYSTEM), Paste::NotBookmarks);
}

#[test]
fn multi_line_export_keeps_local_coordinates() {
	let paste = [
		row("#H5A ABC H296", "Coordinate", SYSTEM),
		row("Home", "Station", SYSTEM),
		row("#H3B DEF K162", "Coordinate", "J654321"),
		row("safe spot", "Coordinate", SYSTEM),
	]
	.join("\r\n");

	assert_eq!(
		extract(&paste, SYSTEM),
		Paste::Lines(vec![
			Candidate::new("#H5A ABC H296", true),
			Candidate::new("safe spot", false),
		])
	);
}

#[test]
fn multi_line_without_coordinates_is_not_ours() {
	let paste = "ABC-123\tCosmic Signature\nDEF-456\tCosmic Signature";
	assert_eq!(extract(paste, SYSTEM), Paste::NotBookmarks);
}

#[test]
fn shorthand_strips_the_marker() {
	assert_eq!(Candidate::new("  # H5A ABC H296", true).shorthand(), "H5A ABC H296");
	assert_eq!(Candidate::new("H5A ABC H296", true).shorthand(), "H5A ABC H296");
}

#[test]
fn only_strict_failures_are_reported() {
	let candidates = [
		Candidate::new("#H5A ABC H296", true),
		Candidate::new("safe spot", false),
		Candidate::new("#H5", true),
		Candidate::new("H3B DEF K162", false),
	];
	let report = parse_candidates(&candidates);

	assert_eq!(report.parsed.len(), 2);
	assert_eq!(report.parsed[0].signature.as_str(), "ABC");
	assert_eq!(report.parsed[1].signature.as_str(), "DEF");
	assert_eq!(report.skipped, 1);
	assert_eq!(report.rejected.len(), 1);
	assert_eq!(report.rejected[0].0, "#H5");
	assert_eq!(report.rejected[0].1.kind, SyntaxErrorKind::MissingSignature);
}
