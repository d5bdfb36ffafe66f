//! Error types for catalog loading.

use fastmap_primitives::{CodeError, TypeCode};
use thiserror::Error;

/// Errors that can occur while building a [`Catalog`](crate::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The catalog document is not valid JSON or has the wrong shape.
	#[error("catalog JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// A key of the catalog document is not a type code.
	#[error("invalid type code {code:?}: {error}")]
	InvalidTypeCode {
		/// The offending key.
		code: String,
		/// Why it was rejected.
		#[source]
		error: CodeError,
	},

	/// A lifetime value has no leading hour count.
	#[error("invalid lifetime for {code}: {value:?}")]
	InvalidLifetime {
		/// Entry the value belongs to.
		code: TypeCode,
		/// The raw value.
		value: String,
	},

	/// A mass value is not a non-negative integer.
	#[error("invalid mass for {code}: {value:?}")]
	InvalidMass {
		/// Entry the value belongs to.
		code: TypeCode,
		/// The raw value.
		value: String,
	},

	/// Two entries share a type code.
	#[error("duplicate type code: {0}")]
	DuplicateCode(TypeCode),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
