//! Connection resolution for wormhole shorthand.
//!
//! A [`Resolver`] takes a [`ParsedConnection`](fastmap_notation::ParsedConnection),
//! fills in what the shorthand left open from the [`Catalog`](fastmap_catalog::Catalog)
//! and reconciles it with a [`Snapshot`] of recorded signatures and links.
//! The result is a [`ResolvedUpsert`] that either creates a new pair or
//! updates an existing one in place.
//!
//! [`Fastmap`] bundles parsing and resolution behind one handle.

mod batch;
mod config;
mod error;
mod facade;
mod resolve;
mod snapshot;
mod upsert;

pub use batch::BatchSummary;
pub use config::{AmbiguityPolicy, ResolverConfig};
pub use error::{ConfigError, ErrorKind, PairedRecord, ResolveError, Result};
pub use facade::{Fastmap, LineOutcome, PasteReport};
pub use resolve::{Resolver, compose_name};
pub use snapshot::{
	EndpointRole, LinkId, OriginScope, PairLink, SignatureId, SignatureKind, SignatureRecord, Snapshot,
};
pub use upsert::{FarType, Lifetime, LinkUpsert, ResolvedUpsert, SignatureUpsert, UpsertAction};
