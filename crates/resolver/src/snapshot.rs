//! Read-only view of what the mapping dataset already holds.
//!
//! Callers take a fresh snapshot per call; the resolver borrows it for the
//! duration of one resolution and never keeps it.

use std::fmt;

use fastmap_primitives::{ConnectionType, LifeState, MassState, ScopeClass, ScopeId};
use serde::{Deserialize, Serialize};

/// Identifier of a signature record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignatureId(pub u64);

impl fmt::Display for SignatureId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// Identifier of a connection pair link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(pub u64);

impl fmt::Display for LinkId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// What a scanned signature turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureKind {
	#[default]
	Unknown,
	Combat,
	Data,
	Relic,
	Ore,
	Gas,
	/// One endpoint of a connection pair.
	Wormhole,
}

/// A recorded signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureRecord {
	pub id: SignatureId,
	/// Full scanner code, e.g. `ABC-123`.
	pub code: String,
	/// Scope the signature sits in, if known.
	#[serde(default)]
	pub scope: Option<ScopeId>,
	#[serde(default)]
	pub kind: SignatureKind,
	#[serde(default)]
	pub name: Option<String>,
}

impl SignatureRecord {
	pub fn new(id: u64, code: impl Into<String>, scope: Option<ScopeId>, kind: SignatureKind) -> Self {
		Self {
			id: SignatureId(id),
			code: code.into(),
			scope,
			kind,
			name: None,
		}
	}

	pub fn is_endpoint(&self) -> bool {
		self.kind == SignatureKind::Wormhole
	}
}

/// Which end of a connection pair a signature is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointRole {
	Initial,
	Secondary,
}

impl EndpointRole {
	pub fn opposite(self) -> Self {
		match self {
			Self::Initial => Self::Secondary,
			Self::Secondary => Self::Initial,
		}
	}
}

/// Two signatures recorded as the ends of one connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairLink {
	pub id: LinkId,
	pub initial: SignatureId,
	pub secondary: SignatureId,
	#[serde(rename = "type")]
	pub connection_type: ConnectionType,
	#[serde(default)]
	pub mass: MassState,
	#[serde(default)]
	pub life: LifeState,
}

impl PairLink {
	pub fn new(id: u64, initial: SignatureId, secondary: SignatureId, connection_type: ConnectionType) -> Self {
		Self {
			id: LinkId(id),
			initial,
			secondary,
			connection_type,
			mass: MassState::default(),
			life: LifeState::default(),
		}
	}

	/// The role `signature` plays in this link, if it is an endpoint.
	pub fn role_of(&self, signature: SignatureId) -> Option<EndpointRole> {
		if self.initial == signature {
			Some(EndpointRole::Initial)
		} else if self.secondary == signature {
			Some(EndpointRole::Secondary)
		} else {
			None
		}
	}

	pub fn endpoint(&self, role: EndpointRole) -> SignatureId {
		match role {
			EndpointRole::Initial => self.initial,
			EndpointRole::Secondary => self.secondary,
		}
	}
}

/// Borrowed signatures and links at one point in time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Snapshot<'a> {
	pub signatures: &'a [SignatureRecord],
	pub links: &'a [PairLink],
}

impl<'a> Snapshot<'a> {
	pub fn new(signatures: &'a [SignatureRecord], links: &'a [PairLink]) -> Self {
		Self { signatures, links }
	}

	/// Records located in `scope`, in snapshot order.
	pub fn in_scope(&self, scope: ScopeId) -> impl Iterator<Item = &'a SignatureRecord> {
		self.signatures.iter().filter(move |sig| sig.scope == Some(scope))
	}

	pub fn signature(&self, id: SignatureId) -> Option<&'a SignatureRecord> {
		self.signatures.iter().find(|sig| sig.id == id)
	}

	/// The first link naming `signature` as an endpoint, with its role there.
	pub fn link_for(&self, signature: SignatureId) -> Option<(&'a PairLink, EndpointRole)> {
		self.links
			.iter()
			.find_map(|link| link.role_of(signature).map(|role| (link, role)))
	}
}

/// The system the operator is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginScope {
	pub id: ScopeId,
	pub class: ScopeClass,
}

impl OriginScope {
	pub fn new(id: impl Into<ScopeId>, class: ScopeClass) -> Self {
		Self { id: id.into(), class }
	}
}
