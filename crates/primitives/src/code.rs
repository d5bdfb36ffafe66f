//! Connection type codes.
//!
//! A [`TypeCode`] is the four-character designation of a wormhole type
//! (`H296`, `K162`, `B274`, ...). `K162` is special: it is the generic exit
//! side of every wormhole and says nothing about where it leads, so the
//! shorthand treats it as the [`TypeToken::Reverse`] marker.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;


/// Reasons a string is not a valid [`TypeCode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
	#[error("type code must be 4 characters: {0:?}")]
	Length(String),
	#[error("type code must start with a letter: {0:?}")]
	LeadingLetter(String),
	#[error("type code must be alphanumeric: {0:?}")]
	NotAlphanumeric(String),
}

/// A four-character wormhole type code, stored upper-cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeCode([u8; 4]);

impl TypeCode {
	/// The generic exit side shared by all wormhole types.
	pub const REVERSE: TypeCode = TypeCode(*b"K162");

	/// Validates and upper-cases `code`.
	///
	/// # Errors
	///
	/// Returns a [`CodeError`] unless `code` is exactly four ASCII
	/// alphanumerics starting with a letter.
	pub fn new(code: &str) -> Result<Self, CodeError> {
		let bytes: [u8; 4] = code
			.as_bytes()
			.try_into()
			.map_err(|_| CodeError::Length(code.to_string()))?;
		if !bytes[0].is_ascii_alphabetic() {
			return Err(CodeError::LeadingLetter(code.to_string()));
		}
		if !bytes.iter().all(u8::is_ascii_alphanumeric) {
			return Err(CodeError::NotAlphanumeric(code.to_string()));
		}
		Ok(Self(bytes.map(|b| b.to_ascii_uppercase())))
	}

	/// The code as a string slice.
	pub fn as_str(&self) -> &str {
		// Construction only admits ASCII.
		std::str::from_utf8(&self.0).unwrap_or_default()
	}

	/// Returns `true` for `K162`.
	pub fn is_reverse(&self) -> bool {
		*self == Self::REVERSE
	}
}

impl fmt::Display for TypeCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for TypeCode {
	type Err = CodeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

impl Serialize for TypeCode {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for TypeCode {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let code = String::deserialize(deserializer)?;
		Self::new(&code).map_err(D::Error::custom)
	}
}

/// The type written on one side of a connection in shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeToken {
	/// `K162`: the concrete type is on the other side.
	Reverse,
	/// A concrete type code.
	Code(TypeCode),
}

impl TypeToken {
	/// Classifies a code, folding `K162` into [`TypeToken::Reverse`].
	pub fn from_code(code: TypeCode) -> Self {
		if code.is_reverse() { Self::Reverse } else { Self::Code(code) }
	}

	/// The concrete code, if this is not the reverse marker.
	pub fn concrete(self) -> Option<TypeCode> {
		match self {
			Self::Reverse => None,
			Self::Code(code) => Some(code),
		}
	}

	/// The code as written, `K162` for the reverse marker.
	pub fn code(self) -> TypeCode {
		self.concrete().unwrap_or(TypeCode::REVERSE)
	}
}

impl fmt::Display for TypeToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.code().fmt(f)
	}
}

impl Serialize for TypeToken {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.code().serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for TypeToken {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		TypeCode::deserialize(deserializer).map(Self::from_code)
	}
}

/// Type recorded on a connection pair: the concrete side's code, or unknown
/// (`????`) while neither side has been identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionType {
	Code(TypeCode),
	Unknown,
}

impl ConnectionType {
	const UNKNOWN: &'static str = "????";
}

impl fmt::Display for ConnectionType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Code(code) => code.fmt(f),
			Self::Unknown => f.write_str(Self::UNKNOWN),
		}
	}
}

impl Serialize for ConnectionType {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Code(code) => code.serialize(serializer),
			Self::Unknown => serializer.serialize_str(Self::UNKNOWN),
		}
	}
}

impl<'de> Deserialize<'de> for ConnectionType {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		if raw == Self::UNKNOWN || raw.is_empty() {
			return Ok(Self::Unknown);
		}
		TypeCode::new(&raw).map(Self::Code).map_err(D::Error::custom)
	}
}
