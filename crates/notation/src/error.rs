//! Syntax errors.

use std::fmt;

use thiserror::Error;

/// Grammar element named in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
	Chain,
	Class,
	Depth,
	Signature,
	Type,
	Modifiers,
	TypeOrModifiers,
	Comment,
	End,
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Chain => "chain letter",
			Self::Class => "class identifier",
			Self::Depth => "depth",
			Self::Signature => "signature",
			Self::Type => "wormhole type",
			Self::Modifiers => "size/mass/lifetime",
			Self::TypeOrModifiers => "wormhole type or size/mass/lifetime",
			Self::Comment => "parenthesized comment",
			Self::End => "end of input",
		})
	}
}

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
	/// The line is blank.
	#[error("empty input")]
	Empty,
	/// The line ends, or stops having letters, before three signature
	/// letters were read.
	#[error("missing signature (expected three letters)")]
	MissingSignature,
	/// Two fields run into each other.
	#[error("expected a space after {after}")]
	MissingSeparator { after: Field },
	#[error("expected {expected}, found '{found}'")]
	Unexpected { expected: Field, found: char },
	#[error("expected {expected}, found end of input")]
	UnexpectedEnd { expected: Field },
	/// A `(` without its `)`.
	#[error("unterminated comment (missing ')')")]
	UnterminatedComment,
	/// An hour count too large to represent.
	#[error("remaining lifetime is out of range")]
	LifeOutOfRange,
}

/// A malformed shorthand line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at column {}: {kind}", .position + 1)]
pub struct SyntaxError {
	pub kind: SyntaxErrorKind,
	/// Byte offset in the input where the error occurred.
	pub position: usize,
}

impl SyntaxError {
	pub fn new(kind: SyntaxErrorKind, position: usize) -> Self {
		Self { kind, position }
	}

	/// 1-based column of the offending character.
	pub fn column(&self) -> usize {
		self.position + 1
	}
}
