//! Error messages shown to the operator.

use fastmap_notation::parse;
use insta::assert_snapshot;

fn message(line: &str) -> String {
	parse(line).unwrap_err().to_string()
}

#[test]
fn empty_line() {
	assert_snapshot!(message(""), @"syntax error at column 1: empty input");
}

#[test]
fn truncated_line() {
	assert_snapshot!(message("H5"), @"syntax error at column 3: missing signature (expected three letters)");
}

#[test]
fn run_on_signature() {
	assert_snapshot!(message("H5A ABCD H296"), @"syntax error at column 8: expected a space after signature");
}

#[test]
fn stray_character() {
	assert_snapshot!(
		message("H5A ABC X H296"),
		@"syntax error at column 9: expected wormhole type or size/mass/lifetime, found 'X'"
	);
}

#[test]
fn missing_type() {
	assert_snapshot!(message("H5A ABC"), @"syntax error at column 8: expected wormhole type, found end of input");
}

#[test]
fn unterminated_comment() {
	assert_snapshot!(message("H5A ABC H296 (x"), @"syntax error at column 14: unterminated comment (missing ')')");
}

#[test]
fn oversized_hours() {
	assert_snapshot!(
		message("H5A ABC 99999999999 H296"),
		@"syntax error at column 9: remaining lifetime is out of range"
	);
}
