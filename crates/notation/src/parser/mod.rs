//! # Parser
//!
//! Turns one line of wormhole shorthand into a [`ParsedConnection`].
//!
//! ## Supported Syntax
//!
//! ```text
//! entry     = hole (" "* comment)? " "*
//! hole      = chain class depth " "+ sig " "+ (type (" "+ modifiers)? | modifiers " "+ type)
//! chain     = letter
//! class     = digit+ | "?" | "thera" | "trig" | "th" | "tr" | "h" | "l" | "n" | "p" | "t" | letter
//! depth     = letter+
//! sig       = letter letter letter
//! type      = letter digit digit digit
//! modifiers = ("f" | "s" | "c" | "h" | "d" | "e" | digit+)+
//! comment   = "(" [^)]* ")"
//! ```
//!
//! Letters are case-insensitive. For example `H5A ABC H296 EC (bubbled)` is
//! chain `H`, class 5, depth `A`, signature `ABC`, type `H296`, end of life,
//! critical mass, with a comment.

use fastmap_primitives::{Depth, LifeState, MassState, ScopeClass, SigPrefix, TypeCode, TypeToken};

use crate::connection::{CRITICAL_LIFE_HOURS, Modifiers, ParsedConnection};
use crate::error::{Field, SyntaxError, SyntaxErrorKind};


/// Maintains the parser's state for recursive descent parsing.
struct Parser<'a> {
	/// The unconsumed rest of the input.
	input: &'a str,
	/// Current byte position in the original input.
	position: usize,
}

impl<'a> Parser<'a> {
	fn new(input: &'a str) -> Self {
		Self { input, position: 0 }
	}

	/// Peeks at the next character without consuming it.
	fn peek(&self) -> Option<char> {
		self.input.chars().next()
	}

	/// Consumes and returns the next character, advancing the parser.
	fn next(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.advance(ch.len_utf8());
		Some(ch)
	}

	/// Skips `len` bytes. `len` must fall on a character boundary.
	fn advance(&mut self, len: usize) {
		self.position += len;
		self.input = &self.input[len..];
	}

	/// Consumes and returns the longest prefix whose characters satisfy a predicate.
	fn take_while<F>(&mut self, predicate: F) -> &'a str
	where
		F: Fn(char) -> bool,
	{
		let len = self.input.find(|ch| !predicate(ch)).unwrap_or(self.input.len());
		let taken = &self.input[..len];
		self.advance(len);
		taken
	}

	/// Consumes a run of spaces and returns how many there were.
	fn skip_spaces(&mut self) -> usize {
		self.take_while(|ch| ch == ' ').len()
	}

	/// Requires at least one space.
	///
	/// `at_end` is reported when the input is exhausted instead.
	fn separator(&mut self, after: Field, at_end: SyntaxErrorKind) -> Result<(), SyntaxError> {
		if self.skip_spaces() > 0 {
			return Ok(());
		}
		match self.peek() {
			None => Err(self.error(at_end)),
			Some(_) => Err(self.error(SyntaxErrorKind::MissingSeparator { after })),
		}
	}

	/// Error for the character at the current position: `Unexpected` if
	/// there is one, `end` otherwise.
	fn unexpected(&self, expected: Field, end: SyntaxErrorKind) -> SyntaxError {
		match self.peek() {
			Some(found) => self.error(SyntaxErrorKind::Unexpected { expected, found }),
			None => self.error(end),
		}
	}

	/// Creates a [`SyntaxError`] with the current parser position.
	fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
		SyntaxError::new(kind, self.position)
	}
}

/// Per-call record of which modifier families have been written.
///
/// The first flag of a family sets it; later flags of the same family are
/// accepted and ignored.
#[derive(Default)]
struct ModifierAccumulator {
	small_craft: Option<bool>,
	mass: Option<MassState>,
	life: Option<LifeState>,
	hours: Option<u32>,
}

impl ModifierAccumulator {
	fn finish(self) -> Modifiers {
		let life = self.life.unwrap_or(match self.hours {
			Some(hours) if hours <= CRITICAL_LIFE_HOURS => LifeState::Critical,
			_ => LifeState::Stable,
		});
		Modifiers {
			small_craft: self.small_craft.unwrap_or(false),
			mass: self.mass.unwrap_or_default(),
			life,
			remaining_life_hours: self.hours,
		}
	}
}

/// Parses one shorthand line.
///
/// # Errors
///
/// Returns a [`SyntaxError`] pointing at the first character that does not
/// fit the grammar. Nothing is returned on failure.
///
/// # Examples
///
/// ```
/// use fastmap_notation::parse;
///
/// let wh = parse("H5A ABC H296").unwrap();
/// assert_eq!(wh.chain, 'H');
/// assert_eq!(wh.signature.as_str(), "ABC");
/// ```
pub fn parse(text: &str) -> Result<ParsedConnection, SyntaxError> {
	if text.trim().is_empty() {
		return Err(SyntaxError::new(SyntaxErrorKind::Empty, 0));
	}

	let mut parser = Parser::new(text);
	let chain = parse_chain(&mut parser)?;
	let class = parse_class(&mut parser)?;
	let depth = parse_depth(&mut parser)?;
	parser.separator(Field::Depth, SyntaxErrorKind::MissingSignature)?;
	let signature = parse_signature(&mut parser)?;
	parser.separator(Field::Signature, SyntaxErrorKind::UnexpectedEnd { expected: Field::Type })?;
	let (type_token, modifiers) = parse_type_and_modifiers(&mut parser)?;
	let comment = parse_comment(&mut parser)?;

	parser.skip_spaces();
	if let Some(found) = parser.peek() {
		return Err(parser.error(SyntaxErrorKind::Unexpected {
			expected: Field::End,
			found,
		}));
	}

	Ok(ParsedConnection {
		chain,
		class,
		depth,
		signature,
		modifiers,
		type_token,
		comment,
		raw: text.to_string(),
	})
}

/// Parses the chain letter.
fn parse_chain(parser: &mut Parser) -> Result<char, SyntaxError> {
	match parser.peek() {
		Some(ch) if ch.is_ascii_alphabetic() => {
			parser.next();
			Ok(ch.to_ascii_uppercase())
		}
		_ => Err(parser.unexpected(Field::Chain, SyntaxErrorKind::MissingSignature)),
	}
}

/// Parses the class token.
///
/// Digit runs are looked up whole, so `12` is Thera rather than class 1.
/// Alphabetic tokens are tried longest first, and a token only counts if a
/// depth letter follows it: `HThA` is Thera at depth `A`, while in `HTh ABC`
/// the class is `T` and the depth `H`. Tokens outside the table read as
/// [`ScopeClass::Unknown`].
fn parse_class(parser: &mut Parser) -> Result<ScopeClass, SyntaxError> {
	match parser.peek() {
		Some('?') => {
			parser.next();
			Ok(ScopeClass::Unknown)
		}
		Some(ch) if ch.is_ascii_digit() => {
			let digits = parser.take_while(|ch| ch.is_ascii_digit());
			Ok(ScopeClass::from_token(digits).unwrap_or(ScopeClass::Unknown))
		}
		Some(ch) if ch.is_ascii_alphabetic() => {
			let rest = parser.input;
			let followed_by_depth = |len: usize| rest[len..].starts_with(|ch: char| ch.is_ascii_alphabetic());

			let mut candidates = ScopeClass::letter_prefixes(rest).peekable();
			let fallback = candidates.peek().copied();
			let (len, class) = candidates
				.find(|&(len, _)| followed_by_depth(len))
				.or(fallback)
				.unwrap_or((1, ScopeClass::Unknown));
			parser.advance(len);
			Ok(class)
		}
		_ => Err(parser.unexpected(Field::Class, SyntaxErrorKind::MissingSignature)),
	}
}

/// Parses the depth label (greedy run of letters).
fn parse_depth(parser: &mut Parser) -> Result<Depth, SyntaxError> {
	let letters = parser.take_while(|ch| ch.is_ascii_alphabetic());
	Depth::new(letters).ok_or_else(|| parser.unexpected(Field::Depth, SyntaxErrorKind::MissingSignature))
}

/// Parses exactly three signature letters.
fn parse_signature(parser: &mut Parser) -> Result<SigPrefix, SyntaxError> {
	let len = parser
		.input
		.bytes()
		.take(3)
		.take_while(u8::is_ascii_alphabetic)
		.count();
	let Some(signature) = SigPrefix::new(&parser.input[..len]) else {
		return Err(parser.error(SyntaxErrorKind::MissingSignature));
	};
	parser.advance(len);
	Ok(signature)
}

/// Parses the type token and the optional modifier block, in either order.
///
/// A type token is tried first; only if none starts here is a modifier block
/// read, and then a type must follow it.
fn parse_type_and_modifiers(parser: &mut Parser) -> Result<(TypeToken, Modifiers), SyntaxError> {
	let mut modifiers = ModifierAccumulator::default();

	if let Some(token) = try_parse_type(parser) {
		let checkpoint = (parser.input, parser.position);
		let spaces = parser.skip_spaces();
		match parser.peek() {
			Some(ch) if spaces > 0 && is_modifier(ch) => parse_modifiers(parser, &mut modifiers)?,
			_ => (parser.input, parser.position) = checkpoint,
		}
		return Ok((token, modifiers.finish()));
	}

	match parser.peek() {
		Some(ch) if is_modifier(ch) => {}
		_ => {
			return Err(parser.unexpected(
				Field::TypeOrModifiers,
				SyntaxErrorKind::UnexpectedEnd { expected: Field::Type },
			));
		}
	}
	parse_modifiers(parser, &mut modifiers)?;
	parser.separator(Field::Modifiers, SyntaxErrorKind::UnexpectedEnd { expected: Field::Type })?;

	match try_parse_type(parser) {
		Some(token) => Ok((token, modifiers.finish())),
		None => Err(parser.unexpected(Field::Type, SyntaxErrorKind::UnexpectedEnd { expected: Field::Type })),
	}
}

/// Attempts to parse a type token: a letter and three digits, ending at a
/// space, a comment or the end of input.
fn try_parse_type(parser: &mut Parser) -> Option<TypeToken> {
	let bytes = parser.input.as_bytes();
	let shaped = bytes.len() >= 4
		&& bytes[0].is_ascii_alphabetic()
		&& bytes[1..4].iter().all(u8::is_ascii_digit)
		&& bytes.get(4).is_none_or(|&b| b == b' ' || b == b'(');
	if !shaped {
		return None;
	}

	let code = TypeCode::new(&parser.input[..4]).ok()?;
	parser.advance(4);
	Some(TypeToken::from_code(code))
}

fn is_modifier(ch: char) -> bool {
	ch.is_ascii_digit() || matches!(ch.to_ascii_uppercase(), 'F' | 'S' | 'C' | 'H' | 'D' | 'E')
}

/// Parses a run of size/mass/lifetime flags into `acc`.
fn parse_modifiers(parser: &mut Parser, acc: &mut ModifierAccumulator) -> Result<(), SyntaxError> {
	while let Some(ch) = parser.peek() {
		if ch.is_ascii_digit() {
			let start = parser.position;
			let digits = parser.take_while(|ch| ch.is_ascii_digit());
			let hours = digits
				.parse::<u32>()
				.map_err(|_| SyntaxError::new(SyntaxErrorKind::LifeOutOfRange, start))?;
			acc.hours.get_or_insert(hours);
			continue;
		}

		match ch.to_ascii_uppercase() {
			'F' | 'S' => {
				acc.small_craft.get_or_insert(true);
			}
			'C' => {
				acc.mass.get_or_insert(MassState::Critical);
			}
			'H' | 'D' => {
				acc.mass.get_or_insert(MassState::Destabilized);
			}
			'E' => {
				acc.life.get_or_insert(LifeState::Critical);
			}
			_ => break,
		}
		parser.next();
	}
	Ok(())
}

/// Parses an optional parenthesized comment, returning the text inside.
fn parse_comment(parser: &mut Parser) -> Result<Option<String>, SyntaxError> {
	let checkpoint = (parser.input, parser.position);
	parser.skip_spaces();
	if parser.peek() != Some('(') {
		(parser.input, parser.position) = checkpoint;
		return Ok(None);
	}

	let open = parser.position;
	parser.next();
	let body = parser.take_while(|ch| ch != ')');
	if parser.next() != Some(')') {
		return Err(SyntaxError::new(SyntaxErrorKind::UnterminatedComment, open));
	}
	Ok(Some(body.to_string()))
}
