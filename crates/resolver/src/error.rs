//! Error types for resolution and resolver configuration.

use std::fmt;

use fastmap_catalog::MassCategory;
use fastmap_primitives::{ScopeClass, ScopeId, SigPrefix, TypeCode};
use serde::Serialize;
use thiserror::Error;

use crate::snapshot::SignatureId;

/// Record the snapshot should have held but did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairedRecord {
	/// The link naming the signature as an endpoint.
	Link,
	/// The opposite endpoint of a link.
	Endpoint(SignatureId),
}

impl fmt::Display for PairedRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Link => f.write_str("its connection link"),
			Self::Endpoint(id) => write!(f, "paired signature {id}"),
		}
	}
}

/// Why one connection could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
	/// The typed code is not in the catalog.
	#[error("unknown wormhole type {0}")]
	UnknownConnectionType(TypeCode),

	/// No catalog type leads from the typed class into the origin's class
	/// in the requested size.
	#[error("impossible connection: no {category} connections from {from} to {to}")]
	ImpossibleConnection {
		/// Class the operator typed for the far side.
		from: ScopeClass,
		/// Class of the origin scope.
		to: ScopeClass,
		category: MassCategory,
	},

	/// The origin scope has no signatures to match against.
	#[error("no signatures in scope {scope} (paste the signature list first)")]
	EmptyScope { scope: ScopeId },

	/// No signature in the origin scope starts with the prefix.
	#[error("no signature matching {prefix} in scope {scope}")]
	NoMatchingSignature { prefix: SigPrefix, scope: ScopeId },

	/// Several signatures start with the prefix and the policy rejects
	/// guessing.
	#[error("{count} signatures matching {prefix} in scope {scope}")]
	AmbiguousSignatureMatch {
		prefix: SigPrefix,
		scope: ScopeId,
		count: usize,
	},

	/// The snapshot tags a signature as a connection endpoint but lacks the
	/// records that pair it.
	#[error("signature {signature} is a connection endpoint but {missing} is missing")]
	MissingPairedRecord {
		signature: SignatureId,
		missing: PairedRecord,
	},
}

/// Fieldless discriminant of [`ResolveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
	UnknownConnectionType,
	ImpossibleConnection,
	EmptyScope,
	NoMatchingSignature,
	AmbiguousSignatureMatch,
	MissingPairedRecord,
}

impl ResolveError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::UnknownConnectionType(_) => ErrorKind::UnknownConnectionType,
			Self::ImpossibleConnection { .. } => ErrorKind::ImpossibleConnection,
			Self::EmptyScope { .. } => ErrorKind::EmptyScope,
			Self::NoMatchingSignature { .. } => ErrorKind::NoMatchingSignature,
			Self::AmbiguousSignatureMatch { .. } => ErrorKind::AmbiguousSignatureMatch,
			Self::MissingPairedRecord { .. } => ErrorKind::MissingPairedRecord,
		}
	}

	/// Whether the caller's snapshot contradicts itself, as opposed to the
	/// operator typing something that does not fit it.
	pub fn is_inconsistency(&self) -> bool {
		matches!(self, Self::MissingPairedRecord { .. })
	}
}

/// Errors that can occur when reading resolver configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or a value of the wrong type.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A value parsed but makes no sense.
	#[error("invalid value for {key}: {reason}")]
	InvalidValue { key: &'static str, reason: &'static str },
}

/// Result type for resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;
