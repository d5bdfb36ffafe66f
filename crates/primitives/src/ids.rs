//! Identifier newtypes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a scope (solar system) in the mapping dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeId(pub u32);

impl fmt::Display for ScopeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl From<u32> for ScopeId {
	fn from(id: u32) -> Self {
		Self(id)
	}
}
