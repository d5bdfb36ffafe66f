//! Mass and lifetime states of a connection.

use serde::{Deserialize, Serialize};

/// How much mass a connection has left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassState {
	#[default]
	Stable,
	/// Under 10% mass remaining.
	Critical,
	/// Under 50% mass remaining.
	#[serde(rename = "destab")]
	Destabilized,
}

impl MassState {
	/// Shorthand flag for this state, `None` for the default.
	pub fn flag(self) -> Option<char> {
		match self {
			Self::Stable => None,
			Self::Critical => Some('C'),
			Self::Destabilized => Some('H'),
		}
	}
}

/// How much lifetime a connection has left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeState {
	#[default]
	Stable,
	/// End of life: a few hours at most.
	Critical,
}

impl LifeState {
	/// Shorthand flag for this state, `None` for the default.
	pub fn flag(self) -> Option<char> {
		match self {
			Self::Stable => None,
			Self::Critical => Some('E'),
		}
	}
}
