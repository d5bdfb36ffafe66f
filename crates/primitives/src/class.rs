//! Class-token table.
//!
//! Every class a wormhole can lead to is a [`ScopeClass`] variant. The short
//! tokens typed in shorthand, the names used by the reference catalog, and the
//! reserved system identifiers of the named destinations are all exhaustive
//! matches over that enum, so an unrecognised class can only ever surface as
//! [`ScopeClass::Unknown`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ScopeId;


/// Class of a scope (solar system) as far as wormhole mapping cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScopeClass {
	HighSec,
	LowSec,
	NullSec,
	Triglavian,
	C1,
	C2,
	C3,
	C4,
	C5,
	C6,
	C13,
	Thera,
	Sentinel,
	Barbican,
	Vidette,
	Conflux,
	Redoubt,
	/// Low-security system with fixed wormhole statics.
	Turnur,
	Unknown,
}

/// Alphabetic short tokens, longest first so that `Thera` wins over `Th`
/// and `Th` over `T`.
const LETTER_TOKENS: &[(&str, ScopeClass)] = &[
	("thera", ScopeClass::Thera),
	("trig", ScopeClass::Triglavian),
	("th", ScopeClass::Thera),
	("tr", ScopeClass::Triglavian),
	("h", ScopeClass::HighSec),
	("l", ScopeClass::LowSec),
	("n", ScopeClass::NullSec),
	("p", ScopeClass::Triglavian),
	("t", ScopeClass::Thera),
];

impl ScopeClass {
	/// All variants, in declaration order.
	pub const ALL: [ScopeClass; 19] = [
		Self::HighSec,
		Self::LowSec,
		Self::NullSec,
		Self::Triglavian,
		Self::C1,
		Self::C2,
		Self::C3,
		Self::C4,
		Self::C5,
		Self::C6,
		Self::C13,
		Self::Thera,
		Self::Sentinel,
		Self::Barbican,
		Self::Vidette,
		Self::Conflux,
		Self::Redoubt,
		Self::Turnur,
		Self::Unknown,
	];

	/// Looks up a complete short token, ignoring ASCII case.
	///
	/// Returns `None` for tokens that are not in the table. Callers that want
	/// the lenient behavior map `None` to [`ScopeClass::Unknown`] themselves.
	pub fn from_token(token: &str) -> Option<Self> {
		let class = match token {
			"?" => Self::Unknown,
			"1" => Self::C1,
			"2" => Self::C2,
			"3" => Self::C3,
			"4" => Self::C4,
			"5" => Self::C5,
			"6" => Self::C6,
			"12" => Self::Thera,
			"13" => Self::C13,
			"14" => Self::Sentinel,
			"15" => Self::Barbican,
			"16" => Self::Vidette,
			"17" => Self::Conflux,
			"18" => Self::Redoubt,
			_ => {
				return LETTER_TOKENS
					.iter()
					.find(|(t, _)| t.eq_ignore_ascii_case(token))
					.map(|&(_, class)| class);
			}
		};
		Some(class)
	}

	/// Alphabetic tokens that are a case-insensitive prefix of `input`, longest first.
	///
	/// Yields `(token_len, class)` pairs.
	pub fn letter_prefixes(input: &str) -> impl Iterator<Item = (usize, ScopeClass)> + '_ {
		LETTER_TOKENS.iter().filter_map(move |&(token, class)| {
			let head = input.get(..token.len())?;
			head.eq_ignore_ascii_case(token).then_some((token.len(), class))
		})
	}

	/// Canonical short token.
	///
	/// Aliased classes pick one form deterministically: Thera is `T` (not `12`
	/// or `Th`), Triglavian is `P`. Turnur has no token of its own and renders
	/// as the low-security `L`.
	pub fn short_token(self) -> &'static str {
		match self {
			Self::HighSec => "H",
			Self::LowSec | Self::Turnur => "L",
			Self::NullSec => "N",
			Self::Triglavian => "P",
			Self::C1 => "1",
			Self::C2 => "2",
			Self::C3 => "3",
			Self::C4 => "4",
			Self::C5 => "5",
			Self::C6 => "6",
			Self::C13 => "13",
			Self::Thera => "T",
			Self::Sentinel => "14",
			Self::Barbican => "15",
			Self::Vidette => "16",
			Self::Conflux => "17",
			Self::Redoubt => "18",
			Self::Unknown => "?",
		}
	}

	/// Name the reference catalog uses for this class as a destination.
	pub fn catalog_name(self) -> &'static str {
		match self {
			Self::HighSec => "High-Sec",
			Self::LowSec => "Low-Sec",
			Self::NullSec => "Null-Sec",
			Self::Triglavian => "Triglavian",
			Self::C1 => "Class-1",
			Self::C2 => "Class-2",
			Self::C3 => "Class-3",
			Self::C4 => "Class-4",
			Self::C5 => "Class-5",
			Self::C6 => "Class-6",
			Self::C13 => "Class-13",
			Self::Thera => "Thera",
			Self::Sentinel => "J055520",
			Self::Barbican => "J110145",
			Self::Vidette => "J164710",
			Self::Conflux => "J200727",
			Self::Redoubt => "J174618",
			Self::Turnur => "Turnur",
			Self::Unknown => "Unknown",
		}
	}

	/// Reads a catalog name, accepting the historical aliases.
	///
	/// Anything unrecognised is [`ScopeClass::Unknown`].
	pub fn from_catalog_name(name: &str) -> Self {
		match name {
			"High-Sec" => Self::HighSec,
			"Low-Sec" => Self::LowSec,
			"Null-Sec" => Self::NullSec,
			"Triglavian" | "Pochven" => Self::Triglavian,
			"Class-1" => Self::C1,
			"Class-2" => Self::C2,
			"Class-3" => Self::C3,
			"Class-4" => Self::C4,
			"Class-5" => Self::C5,
			"Class-6" => Self::C6,
			"Class-13" => Self::C13,
			"Thera" | "Class-12" => Self::Thera,
			"J055520" | "Class-14" => Self::Sentinel,
			"J110145" | "Class-15" => Self::Barbican,
			"J164710" | "Class-16" => Self::Vidette,
			"J200727" | "Class-17" => Self::Conflux,
			"J174618" | "Class-18" => Self::Redoubt,
			"Turnur" => Self::Turnur,
			_ => Self::Unknown,
		}
	}

	/// Fixed system identifier of a named destination.
	///
	/// Ordinary classes span many systems and return `None`.
	pub fn reserved_scope(self) -> Option<ScopeId> {
		let id = match self {
			Self::Sentinel => 31_000_001,
			Self::Barbican => 31_000_002,
			Self::Vidette => 31_000_003,
			Self::Conflux => 31_000_004,
			Self::Thera => 31_000_005,
			Self::Redoubt => 31_000_006,
			Self::Turnur => 30_002_086,
			_ => return None,
		};
		Some(ScopeId(id))
	}

	/// Returns `false` only for [`ScopeClass::Unknown`].
	pub fn is_known(self) -> bool {
		self != Self::Unknown
	}
}

impl fmt::Display for ScopeClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.catalog_name())
	}
}

impl Serialize for ScopeClass {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.catalog_name())
	}
}

impl<'de> Deserialize<'de> for ScopeClass {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let name = String::deserialize(deserializer)?;
		Ok(Self::from_catalog_name(&name))
	}
}
