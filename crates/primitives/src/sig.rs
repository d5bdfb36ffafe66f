//! Signature prefixes.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The three letters that open a signature code (`ABC` of `ABC-123`),
/// upper-cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SigPrefix([u8; 3]);

impl SigPrefix {
	/// Returns `None` unless `letters` is exactly three ASCII letters.
	pub fn new(letters: &str) -> Option<Self> {
		let bytes: [u8; 3] = letters.as_bytes().try_into().ok()?;
		bytes
			.iter()
			.all(u8::is_ascii_alphabetic)
			.then(|| Self(bytes.map(|b| b.to_ascii_uppercase())))
	}

	pub fn as_str(&self) -> &str {
		// Construction only admits ASCII letters.
		std::str::from_utf8(&self.0).unwrap_or_default()
	}

	/// Whether a full signature code starts with this prefix, ignoring case.
	pub fn matches(&self, code: &str) -> bool {
		code.get(..3).is_some_and(|head| head.eq_ignore_ascii_case(self.as_str()))
	}
}

impl fmt::Display for SigPrefix {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Serialize for SigPrefix {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for SigPrefix {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let letters = String::deserialize(deserializer)?;
		Self::new(&letters).ok_or_else(|| D::Error::custom(format!("invalid signature prefix: {letters:?}")))
	}
}
