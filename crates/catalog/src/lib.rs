//! Connection-type catalog.
//!
//! The catalog maps every wormhole type code to where it leads, how long it
//! lives and how much mass it passes. It is loaded once from the reference
//! system and shared read-only afterwards; nothing here mutates a built
//! [`Catalog`].

use fastmap_primitives::{ScopeClass, TypeCode};
use indexmap::IndexMap;

pub use entry::{CatalogEntry, MassCategory, SMALL_CRAFT_MASS_LIMIT};
pub use error::{CatalogError, Result};

mod entry;
mod error;
mod load;

#[cfg(test)]
mod tests;

/// Immutable set of catalog entries keyed by type code.
///
/// Iteration follows insertion order, which is also the order in which
/// reverse-side inference considers candidates.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	entries: IndexMap<TypeCode, CatalogEntry>,
}

impl Catalog {
	/// Builds a catalog from entries.
	///
	/// # Errors
	///
	/// Returns [`CatalogError::DuplicateCode`] if two entries share a code.
	pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Result<Self> {
		let mut map = IndexMap::new();
		for entry in entries {
			if map.contains_key(&entry.code) {
				return Err(CatalogError::DuplicateCode(entry.code));
			}
			map.insert(entry.code, entry);
		}
		Ok(Self { entries: map })
	}

	pub fn get(&self, code: &TypeCode) -> Option<&CatalogEntry> {
		self.entries.get(code)
	}

	pub fn contains(&self, code: &TypeCode) -> bool {
		self.entries.contains_key(code)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
		self.entries.values()
	}

	/// Types that lead into `destination` and spawn in `origin`, in catalog
	/// order.
	///
	/// Looking from `destination` back through a `K162`, these are the types
	/// the far side can carry.
	pub fn leading_to(&self, destination: ScopeClass, origin: ScopeClass) -> impl Iterator<Item = &CatalogEntry> {
		self.iter()
			.filter(move |entry| entry.destination == destination && entry.spawns_in(origin))
	}
}
