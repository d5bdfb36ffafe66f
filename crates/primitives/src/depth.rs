//! Chain depth labels.
//!
//! Depth is written as letters: `A` is the first hole out of home, `B` the
//! next, and past `Z` the labels continue as `AA`, `AB`, ... `AZ`, `BA`, the
//! way spreadsheet columns do (bijective base 26).

use std::cmp::Ordering;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};


/// A depth label: one or more ASCII letters, upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Depth(String);

impl Depth {
	/// Validates and upper-cases a label. Returns `None` if `label` is empty
	/// or contains anything but ASCII letters.
	pub fn new(label: &str) -> Option<Self> {
		if label.is_empty() || !label.bytes().all(|b| b.is_ascii_alphabetic()) {
			return None;
		}
		Some(Self(label.to_ascii_uppercase()))
	}

	/// Builds the label for a 1-based position. `0` has no label.
	pub fn from_ordinal(mut ordinal: u64) -> Option<Self> {
		if ordinal == 0 {
			return None;
		}
		let mut label = Vec::new();
		while ordinal > 0 {
			ordinal -= 1;
			label.push(b'A' + (ordinal % 26) as u8);
			ordinal /= 26;
		}
		label.reverse();
		Some(Self(label.into_iter().map(char::from).collect()))
	}

	/// 1-based position of this label, or `None` if it does not fit in a `u64`.
	pub fn ordinal(&self) -> Option<u64> {
		self.0.bytes().try_fold(0u64, |acc, b| {
			acc.checked_mul(26)?.checked_add(u64::from(b - b'A' + 1))
		})
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Ord for Depth {
	/// Shorter labels come first; equal lengths compare alphabetically, which
	/// matches ordinal order without overflow.
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.len().cmp(&other.0.len()).then_with(|| self.0.cmp(&other.0))
	}
}

impl PartialOrd for Depth {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl fmt::Display for Depth {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Serialize for Depth {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.0)
	}
}

impl<'de> Deserialize<'de> for Depth {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let label = String::deserialize(deserializer)?;
		Self::new(&label).ok_or_else(|| D::Error::custom(format!("invalid depth label: {label:?}")))
	}
}
