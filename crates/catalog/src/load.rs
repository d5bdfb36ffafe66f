//! Loading the reference system's wormhole table.
//!
//! The document is a JSON object keyed by type code:
//!
//! ```text
//! {
//!   "H296": { "leadsTo": "Class-5", "life": "24 Hours", "jump": 2000000000,
//!             "mass": 3000000000, "from": ["Class-5", "Class-6"] },
//!   ...
//! }
//! ```
//!
//! `life` is either an hour count or a string starting with one. Masses are
//! integers or numeric strings. The generic `K162` entry is skipped: its
//! destination depends on the other side and the resolver never consults it.

use fastmap_primitives::{ScopeClass, TypeCode};
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::{Catalog, CatalogEntry, CatalogError, Result};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
	Number(u64),
	Text(String),
}

impl RawValue {
	fn describe(&self) -> String {
		match self {
			Self::Number(n) => n.to_string(),
			Self::Text(s) => s.clone(),
		}
	}
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
	leads_to: ScopeClass,
	life: RawValue,
	jump: RawValue,
	#[serde(default)]
	mass: Option<RawValue>,
	#[serde(default)]
	from: Vec<ScopeClass>,
}

impl Catalog {
	/// Parses a catalog document in the reference system's JSON shape.
	///
	/// # Errors
	///
	/// Returns a [`CatalogError`] on malformed JSON, keys that are not type
	/// codes, or unreadable lifetime and mass values.
	pub fn from_json(json: &str) -> Result<Self> {
		let raw: IndexMap<String, RawEntry> = serde_json::from_str(json)?;
		let mut entries = Vec::with_capacity(raw.len());

		for (key, raw) in raw {
			let code = TypeCode::new(&key).map_err(|error| CatalogError::InvalidTypeCode { code: key, error })?;
			if code.is_reverse() {
				debug!("skipping generic K162 catalog entry");
				continue;
			}
			entries.push(convert(code, raw)?);
		}

		let catalog = Self::from_entries(entries)?;
		debug!(entries = catalog.len(), "loaded connection catalog");
		Ok(catalog)
	}
}

fn convert(code: TypeCode, raw: RawEntry) -> Result<CatalogEntry> {
	let max_life_hours = hours(&raw.life).ok_or_else(|| CatalogError::InvalidLifetime {
		code,
		value: raw.life.describe(),
	})?;
	let jump_mass = mass(code, &raw.jump)?;
	let total_mass = raw.mass.as_ref().map(|m| mass(code, m)).transpose()?;

	let mut entry = CatalogEntry::new(code, raw.leads_to, max_life_hours, jump_mass).with_origins(raw.from);
	entry.total_mass = total_mass;
	Ok(entry)
}

/// Leading hour count of `"16 Hours"`-style values.
fn hours(value: &RawValue) -> Option<u32> {
	match value {
		RawValue::Number(n) => u32::try_from(*n).ok(),
		RawValue::Text(text) => {
			let text = text.trim_start();
			let end = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
			text[..end].parse().ok()
		}
	}
}

fn mass(code: TypeCode, value: &RawValue) -> Result<u64> {
	match value {
		RawValue::Number(n) => Ok(*n),
		RawValue::Text(text) => text.trim().parse().map_err(|_| CatalogError::InvalidMass {
			code,
			value: text.clone(),
		}),
	}
}
