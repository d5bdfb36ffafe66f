//! Parsed shorthand.

use fastmap_primitives::{Depth, LifeState, MassState, ScopeClass, SigPrefix, TypeToken};
use serde::{Deserialize, Serialize};

/// Hour count at or below which an explicit remaining lifetime counts as
/// end of life.
pub const CRITICAL_LIFE_HOURS: u32 = 4;

/// Size, mass and lifetime flags of one connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
	/// Only frigate-sized ships fit (`F` or `S`).
	pub small_craft: bool,
	pub mass: MassState,
	pub life: LifeState,
	/// Remaining lifetime the operator typed as a number.
	pub remaining_life_hours: Option<u32>,
}

impl Modifiers {
	/// Renders the flags in a fixed order, empty when everything is default.
	pub fn flags(&self) -> String {
		let mut flags = String::new();
		if self.small_craft {
			flags.push('F');
		}
		flags.extend(self.mass.flag());
		flags.extend(self.life.flag());
		if let Some(hours) = self.remaining_life_hours {
			flags.push_str(&hours.to_string());
		}
		flags
	}
}

/// One shorthand line, split into its fields.
///
/// Equality ignores [`raw`](Self::raw): two lines that differ only in field
/// order or spacing parse to equal values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedConnection {
	/// Chain label, upper-cased.
	pub chain: char,
	/// Class the operator typed for the far side.
	pub class: ScopeClass,
	pub depth: Depth,
	pub signature: SigPrefix,
	pub modifiers: Modifiers,
	pub type_token: TypeToken,
	/// Text between the parentheses, without them.
	pub comment: Option<String>,
	/// The line as it was given.
	pub raw: String,
}

impl ParsedConnection {
	/// Renders the canonical shorthand for this connection.
	///
	/// Parsing the result yields a value equal to `self`.
	pub fn to_notation(&self) -> String {
		// `T` followed by a depth starting with `H` or `R` would read back as
		// `Th`/`Tr`; the numeric alias never collides with depth letters.
		let class = match self.class {
			ScopeClass::Thera => "12",
			class => class.short_token(),
		};
		let mut line = format!(
			"{}{}{} {} {}",
			self.chain,
			class,
			self.depth,
			self.signature,
			self.type_token
		);
		let flags = self.modifiers.flags();
		if !flags.is_empty() {
			line.push(' ');
			line.push_str(&flags);
		}
		if let Some(comment) = &self.comment {
			line.push_str(" (");
			line.push_str(comment);
			line.push(')');
		}
		line
	}
}

impl PartialEq for ParsedConnection {
	fn eq(&self, other: &Self) -> bool {
		self.chain == other.chain
			&& self.class == other.class
			&& self.depth == other.depth
			&& self.signature == other.signature
			&& self.modifiers == other.modifiers
			&& self.type_token == other.type_token
			&& self.comment == other.comment
	}
}

impl Eq for ParsedConnection {}
