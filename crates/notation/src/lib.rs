//! Wormhole bookmark shorthand.
//!
//! A connection is written as one terse line such as `H5A ABC H296 EC`:
//! chain letter, far-side class and depth, the signature's first three
//! letters, the wormhole type and optional size/mass/lifetime flags. See
//! [`parse`] for the grammar.

pub mod bookmarks;
mod connection;
mod error;
mod parser;

pub use connection::{CRITICAL_LIFE_HOURS, Modifiers, ParsedConnection};
pub use error::{Field, SyntaxError, SyntaxErrorKind};
pub use parser::parse;
