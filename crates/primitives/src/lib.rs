//! Shared value types for wormhole shorthand: class tokens, type codes,
//! depth labels, signature prefixes and connection states.

/// Class-token table.
pub mod class;
/// Wormhole type codes.
pub mod code;
/// Chain depth labels.
pub mod depth;
/// Identifier types.
pub mod ids;
/// Signature prefixes.
pub mod sig;
/// Mass and lifetime states.
pub mod state;

pub use class::ScopeClass;
pub use code::{CodeError, ConnectionType, TypeCode, TypeToken};
pub use depth::Depth;
pub use ids::ScopeId;
pub use sig::SigPrefix;
pub use state::{LifeState, MassState};
