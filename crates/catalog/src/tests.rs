use fastmap_primitives::{ScopeClass, TypeCode};

use super::*;

fn entry(code: &str, destination: ScopeClass, jump: u64, origins: &[ScopeClass]) -> CatalogEntry {
	CatalogEntry::new(TypeCode::new(code).unwrap(), destination, 16, jump).with_origins(origins.iter().copied())
}

#[test]
fn duplicate_codes_are_rejected() {
	let err = Catalog::from_entries([
		entry("H296", ScopeClass::C5, 2_000_000_000, &[]),
		entry("h296", ScopeClass::C6, 2_000_000_000, &[]),
	])
	.unwrap_err();
	assert!(matches!(err, CatalogError::DuplicateCode(code) if code.as_str() == "H296"));
}

#[test]
fn leading_to_filters_both_ends() {
	let catalog = Catalog::from_entries([
		entry("C247", ScopeClass::C3, 375_000_000, &[ScopeClass::C3]),
		entry("Z006", ScopeClass::C3, 5_000_000, &[ScopeClass::C3, ScopeClass::HighSec]),
		entry("B274", ScopeClass::HighSec, 375_000_000, &[ScopeClass::C3]),
	])
	.unwrap();

	let from_c3: Vec<_> = catalog
		.leading_to(ScopeClass::C3, ScopeClass::C3)
		.map(|e| e.code.to_string())
		.collect();
	assert_eq!(from_c3, ["C247", "Z006"]);

	let from_hs: Vec<_> = catalog
		.leading_to(ScopeClass::C3, ScopeClass::HighSec)
		.map(|e| e.code.to_string())
		.collect();
	assert_eq!(from_hs, ["Z006"]);

	assert_eq!(catalog.leading_to(ScopeClass::C3, ScopeClass::NullSec).count(), 0);
}

#[test]
fn mass_category_threshold_is_inclusive() {
	let frig = entry("E004", ScopeClass::C1, SMALL_CRAFT_MASS_LIMIT, &[]);
	let big = entry("A239", ScopeClass::LowSec, SMALL_CRAFT_MASS_LIMIT + 1, &[]);
	assert_eq!(frig.mass_category(SMALL_CRAFT_MASS_LIMIT), MassCategory::SmallCraft);
	assert_eq!(big.mass_category(SMALL_CRAFT_MASS_LIMIT), MassCategory::Standard);
}

#[test]
fn empty_catalog() {
	let catalog = Catalog::default();
	assert!(catalog.is_empty());
	assert_eq!(catalog.len(), 0);
	assert!(catalog.get(&TypeCode::new("H296").unwrap()).is_none());
}
