//! Catalog entries.

use std::fmt;

use fastmap_primitives::{ScopeClass, TypeCode};
use serde::{Deserialize, Serialize};

/// Jump mass at or below which only frigate-sized ships fit through.
pub const SMALL_CRAFT_MASS_LIMIT: u64 = 5_000_000;

/// Coarse size class of a wormhole type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassCategory {
	/// Frigates and smaller only.
	SmallCraft,
	Standard,
}

impl fmt::Display for MassCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::SmallCraft => "small-craft",
			Self::Standard => "standard",
		})
	}
}

/// One wormhole type as described by the reference catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
	pub code: TypeCode,
	/// Class of the system this type leads to.
	pub destination: ScopeClass,
	/// Classes of systems this type can appear in.
	#[serde(default)]
	pub origins: Vec<ScopeClass>,
	/// Lifetime of a fresh connection, in hours.
	pub max_life_hours: u32,
	/// Largest single ship mass that can pass, in kilograms.
	pub jump_mass: u64,
	/// Total mass the connection can pass before collapsing.
	#[serde(default)]
	pub total_mass: Option<u64>,
}

impl CatalogEntry {
	/// Creates an entry that spawns nowhere in particular.
	///
	/// Use [`with_origins`](Self::with_origins) to make it eligible for
	/// reverse-side inference.
	pub fn new(code: TypeCode, destination: ScopeClass, max_life_hours: u32, jump_mass: u64) -> Self {
		Self {
			code,
			destination,
			origins: Vec::new(),
			max_life_hours,
			jump_mass,
			total_mass: None,
		}
	}

	pub fn with_origins(mut self, origins: impl IntoIterator<Item = ScopeClass>) -> Self {
		self.origins = origins.into_iter().collect();
		self
	}

	pub fn with_total_mass(mut self, total_mass: u64) -> Self {
		self.total_mass = Some(total_mass);
		self
	}

	/// Whether this type appears in systems of class `class`.
	pub fn spawns_in(&self, class: ScopeClass) -> bool {
		self.origins.contains(&class)
	}

	/// Size class relative to `limit` (inclusive for small craft).
	pub fn mass_category(&self, limit: u64) -> MassCategory {
		if self.jump_mass <= limit {
			MassCategory::SmallCraft
		} else {
			MassCategory::Standard
		}
	}
}
