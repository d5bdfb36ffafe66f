//! Resolver output, shaped for a persistence collaborator.

use fastmap_primitives::{ConnectionType, LifeState, MassState, ScopeClass, ScopeId, TypeCode};
use serde::{Deserialize, Serialize};

use crate::snapshot::{EndpointRole, LinkId, SignatureId};

/// Whether the upsert writes new records or edits linked ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertAction {
	/// A new pair and link.
	Create,
	/// An existing link and its two signatures, identities preserved.
	Update,
}

/// What is known about the type on the far side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FarType {
	/// The far side is the generic `K162` of the typed code.
	Reverse,
	/// Inferred from the catalog.
	Code(TypeCode),
	/// Neither side identified yet.
	Unknown,
}

/// Lifetime written onto both signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifetime {
	/// Lifetime of a fresh connection of this type.
	pub max_hours: u32,
	pub remaining_hours: u32,
}

/// Fields to write onto one signature. `None` leaves the field alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureUpsert {
	/// Existing record to edit; `None` creates one.
	pub id: Option<SignatureId>,
	pub role: EndpointRole,
	/// Full scanner code.
	pub code: Option<String>,
	pub scope: Option<ScopeId>,
	pub name: Option<String>,
	pub lifetime: Lifetime,
}

/// Fields to write onto the connection pair link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkUpsert {
	/// Existing link to edit; `None` creates one.
	pub id: Option<LinkId>,
	#[serde(rename = "type")]
	pub connection_type: ConnectionType,
	/// Endpoint that carries [`connection_type`](Self::connection_type).
	pub typed_side: EndpointRole,
	pub life: LifeState,
	pub mass: MassState,
}

/// A fully resolved connection, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedUpsert {
	pub action: UpsertAction,
	pub link: LinkUpsert,
	/// The signature the operator scanned.
	pub origin: SignatureUpsert,
	/// Its counterpart on the other side.
	pub far: SignatureUpsert,
	/// Class of the system the connection leads to.
	pub destination: ScopeClass,
	pub far_type: FarType,
}
