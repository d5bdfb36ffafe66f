//! Resolver tunables.
//!
//! Every key is optional; omitted keys keep their defaults:
//!
//! ```toml
//! small_craft_mass_limit = 5000000
//! default_lifetime_hours = 24
//! end_of_life_hours = 1
//! ambiguous_signatures = "first"
//! ```

use fastmap_catalog::SMALL_CRAFT_MASS_LIMIT;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What to do when several signatures in scope share the typed prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbiguityPolicy {
	/// Take the first in snapshot order and log a warning.
	#[default]
	First,
	/// Fail with [`AmbiguousSignatureMatch`](crate::ResolveError::AmbiguousSignatureMatch).
	Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
	/// Jump mass at or below which a type counts as small-craft only.
	pub small_craft_mass_limit: u64,
	/// Lifetime assumed when neither side has a concrete type.
	pub default_lifetime_hours: u32,
	/// Remaining lifetime recorded for an end-of-life connection without an
	/// explicit hour count.
	pub end_of_life_hours: u32,
	pub ambiguous_signatures: AmbiguityPolicy,
}

impl Default for ResolverConfig {
	fn default() -> Self {
		Self {
			small_craft_mass_limit: SMALL_CRAFT_MASS_LIMIT,
			default_lifetime_hours: 24,
			end_of_life_hours: 1,
			ambiguous_signatures: AmbiguityPolicy::default(),
		}
	}
}

impl ResolverConfig {
	/// Parses a TOML document into a [`ResolverConfig`].
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Toml`] for malformed documents, unknown keys or
	/// mistyped values, and [`ConfigError::InvalidValue`] for values that
	/// parse but cannot be used.
	pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if self.default_lifetime_hours == 0 {
			return Err(ConfigError::InvalidValue {
				key: "default_lifetime_hours",
				reason: "must be at least one hour",
			});
		}
		if self.end_of_life_hours > self.default_lifetime_hours {
			return Err(ConfigError::InvalidValue {
				key: "end_of_life_hours",
				reason: "must not exceed default_lifetime_hours",
			});
		}
		Ok(())
	}
}
