//! Turning a parsed line into a create-or-update against the snapshot.
//!
//! # Resolution Order
//!
//! 1. A concrete type must exist in the catalog.
//! 2. The destination comes from the catalog when the type is concrete, and
//!    from the typed class otherwise; for `K162` the far side's type is
//!    inferred from the entries that lead from the typed class into the
//!    origin's class.
//! 3. The typed prefix picks a signature in the origin scope.
//! 4. Lifetimes come from the concrete side's catalog entry.
//! 5. A signature that already is a connection endpoint updates its link in
//!    place; any other signature starts a new pair.

use fastmap_catalog::{Catalog, CatalogEntry, MassCategory};
use fastmap_notation::ParsedConnection;
use fastmap_primitives::{ConnectionType, LifeState, ScopeClass, ScopeId, SigPrefix, TypeToken};
use tracing::{debug, trace, warn};

use crate::config::{AmbiguityPolicy, ResolverConfig};
use crate::error::{PairedRecord, ResolveError, Result};
use crate::snapshot::{EndpointRole, OriginScope, SignatureRecord, Snapshot};
use crate::upsert::{FarType, Lifetime, LinkUpsert, ResolvedUpsert, SignatureUpsert, UpsertAction};


/// Resolves parsed connections against a catalog.
///
/// The resolver holds no per-call state; one instance can be shared across
/// threads and reused for any number of snapshots.
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
	catalog: &'a Catalog,
	config: ResolverConfig,
}

/// What step 2 learned about the far side.
struct FarSide<'a> {
	destination: ScopeClass,
	far_type: FarType,
	/// Reserved scope of a named destination.
	scope: Option<ScopeId>,
	connection_type: ConnectionType,
	/// Catalog entry of whichever side carries the concrete type.
	entry: Option<&'a CatalogEntry>,
	/// Whether the concrete type is the one the operator typed.
	typed_here: bool,
}

impl<'a> Resolver<'a> {
	/// Creates a resolver with default configuration.
	pub fn new(catalog: &'a Catalog) -> Self {
		Self {
			catalog,
			config: ResolverConfig::default(),
		}
	}

	pub fn with_config(mut self, config: &ResolverConfig) -> Self {
		self.config = config.clone();
		self
	}

	pub fn catalog(&self) -> &'a Catalog {
		self.catalog
	}

	pub fn config(&self) -> &ResolverConfig {
		&self.config
	}

	/// Resolves one parsed line seen from `origin`.
	///
	/// # Errors
	///
	/// Returns the first [`ResolveError`] hit in resolution order. Nothing
	/// partial is returned on failure.
	pub fn resolve(
		&self,
		parsed: &ParsedConnection,
		origin: OriginScope,
		snapshot: &Snapshot<'_>,
	) -> Result<ResolvedUpsert> {
		let typed = match parsed.type_token {
			TypeToken::Reverse => None,
			TypeToken::Code(code) => Some(
				self.catalog
					.get(&code)
					.ok_or(ResolveError::UnknownConnectionType(code))?,
			),
		};

		let far = match typed {
			Some(entry) => FarSide {
				destination: entry.destination,
				far_type: FarType::Reverse,
				scope: entry.destination.reserved_scope(),
				connection_type: ConnectionType::Code(entry.code),
				entry: Some(entry),
				typed_here: true,
			},
			None if parsed.class.is_known() => {
				let entry = self.infer_far_type(parsed, origin)?;
				FarSide {
					destination: parsed.class,
					far_type: FarType::Code(entry.code),
					scope: parsed.class.reserved_scope(),
					connection_type: ConnectionType::Code(entry.code),
					entry: Some(entry),
					typed_here: false,
				}
			}
			None => FarSide {
				destination: ScopeClass::Unknown,
				far_type: FarType::Unknown,
				scope: None,
				connection_type: ConnectionType::Unknown,
				entry: None,
				typed_here: false,
			},
		};

		let matched = self.match_signature(parsed.signature, origin.id, snapshot)?;
		let lifetime = self.lifetime(parsed, far.entry);
		let name = compose_name(parsed, far.destination);

		let upsert = if matched.is_endpoint() {
			update(parsed, origin, snapshot, matched, &far, lifetime, name)?
		} else {
			create(parsed, origin, matched, &far, lifetime, name)
		};

		debug!(
			signature = %matched.code,
			action = ?upsert.action,
			destination = %upsert.destination,
			connection_type = %upsert.link.connection_type,
			"resolved connection"
		);
		Ok(upsert)
	}

	/// Picks the catalog type on the far side of a `K162`.
	///
	/// A lone eligible type is taken whatever the small-craft flag says.
	/// Otherwise the flag selects the mass category and the first matching
	/// type in catalog order wins.
	fn infer_far_type(&self, parsed: &ParsedConnection, origin: OriginScope) -> Result<&'a CatalogEntry> {
		let eligible: Vec<_> = self.catalog.leading_to(origin.class, parsed.class).collect();
		trace!(
			from = %parsed.class,
			to = %origin.class,
			eligible = eligible.len(),
			"eligible far-side types"
		);

		if let [only] = eligible.as_slice() {
			return Ok(*only);
		}

		let category = if parsed.modifiers.small_craft {
			MassCategory::SmallCraft
		} else {
			MassCategory::Standard
		};
		eligible
			.into_iter()
			.find(|entry| entry.mass_category(self.config.small_craft_mass_limit) == category)
			.ok_or(ResolveError::ImpossibleConnection {
				from: parsed.class,
				to: origin.class,
				category,
			})
	}

	fn match_signature<'s>(
		&self,
		prefix: SigPrefix,
		scope: ScopeId,
		snapshot: &Snapshot<'s>,
	) -> Result<&'s SignatureRecord> {
		let mut in_scope = snapshot.in_scope(scope).peekable();
		if in_scope.peek().is_none() {
			return Err(ResolveError::EmptyScope { scope });
		}

		let matches: Vec<_> = in_scope.filter(|sig| prefix.matches(&sig.code)).collect();
		match (matches.as_slice(), self.config.ambiguous_signatures) {
			([], _) => Err(ResolveError::NoMatchingSignature { prefix, scope }),
			([only], _) => Ok(*only),
			([first, ..], AmbiguityPolicy::First) => {
				warn!(
					%prefix,
					count = matches.len(),
					chosen = %first.code,
					"several signatures match prefix, taking the first"
				);
				Ok(*first)
			}
			(_, AmbiguityPolicy::Reject) => Err(ResolveError::AmbiguousSignatureMatch {
				prefix,
				scope,
				count: matches.len(),
			}),
		}
	}

	fn lifetime(&self, parsed: &ParsedConnection, entry: Option<&CatalogEntry>) -> Lifetime {
		let max_hours = entry.map_or(self.config.default_lifetime_hours, |entry| entry.max_life_hours);
		let remaining_hours = match (parsed.modifiers.remaining_life_hours, parsed.modifiers.life) {
			(Some(hours), _) => hours,
			(None, LifeState::Critical) => self.config.end_of_life_hours,
			(None, LifeState::Stable) => max_hours,
		};
		Lifetime {
			max_hours,
			remaining_hours,
		}
	}
}

/// Display name written onto the origin signature.
pub fn compose_name(parsed: &ParsedConnection, destination: ScopeClass) -> String {
	let mut name = format!(
		"{}{}{} {}",
		parsed.chain,
		destination.short_token(),
		parsed.depth,
		parsed.signature
	);
	if let Some(comment) = &parsed.comment {
		name.push_str(" (");
		name.push_str(comment);
		name.push(')');
	}
	name
}

fn create(
	parsed: &ParsedConnection,
	origin: OriginScope,
	matched: &SignatureRecord,
	far: &FarSide<'_>,
	lifetime: Lifetime,
	name: String,
) -> ResolvedUpsert {
	let origin_role = EndpointRole::Initial;
	ResolvedUpsert {
		action: UpsertAction::Create,
		link: LinkUpsert {
			id: None,
			connection_type: far.connection_type,
			typed_side: typed_side(origin_role, far.typed_here),
			life: parsed.modifiers.life,
			mass: parsed.modifiers.mass,
		},
		origin: SignatureUpsert {
			id: Some(matched.id),
			role: origin_role,
			code: Some(matched.code.clone()),
			scope: Some(origin.id),
			name: Some(name),
			lifetime,
		},
		far: SignatureUpsert {
			id: None,
			role: origin_role.opposite(),
			code: None,
			scope: far.scope,
			name: None,
			lifetime,
		},
		destination: far.destination,
		far_type: far.far_type,
	}
}

fn update(
	parsed: &ParsedConnection,
	origin: OriginScope,
	snapshot: &Snapshot<'_>,
	matched: &SignatureRecord,
	far: &FarSide<'_>,
	lifetime: Lifetime,
	name: String,
) -> Result<ResolvedUpsert> {
	let Some((link, origin_role)) = snapshot.link_for(matched.id) else {
		warn!(signature = %matched.id, "connection endpoint has no link in snapshot");
		return Err(ResolveError::MissingPairedRecord {
			signature: matched.id,
			missing: PairedRecord::Link,
		});
	};

	let opposite_id = link.endpoint(origin_role.opposite());
	let Some(opposite) = snapshot.signature(opposite_id) else {
		warn!(
			signature = %matched.id,
			link = %link.id,
			opposite = %opposite_id,
			"linked signature missing from snapshot"
		);
		return Err(ResolveError::MissingPairedRecord {
			signature: matched.id,
			missing: PairedRecord::Endpoint(opposite_id),
		});
	};

	Ok(ResolvedUpsert {
		action: UpsertAction::Update,
		link: LinkUpsert {
			id: Some(link.id),
			connection_type: far.connection_type,
			typed_side: typed_side(origin_role, far.typed_here),
			life: parsed.modifiers.life,
			mass: parsed.modifiers.mass,
		},
		origin: SignatureUpsert {
			id: Some(matched.id),
			role: origin_role,
			code: Some(matched.code.clone()),
			scope: Some(origin.id),
			name: Some(name),
			lifetime,
		},
		far: SignatureUpsert {
			id: Some(opposite.id),
			role: origin_role.opposite(),
			code: None,
			scope: opposite.scope.or(far.scope),
			name: None,
			lifetime,
		},
		destination: far.destination,
		far_type: far.far_type,
	})
}

/// Endpoint carrying the link's type: the origin when the operator typed a
/// concrete code, the far side otherwise.
fn typed_side(origin_role: EndpointRole, typed_here: bool) -> EndpointRole {
	if typed_here { origin_role } else { origin_role.opposite() }
}
