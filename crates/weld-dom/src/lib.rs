//! Weld DOM - Node Identity
//!
//! Interned-string identities for nodes owned by an external document tree.
//!
//! The document tree itself lives on the other side of a string-keyed
//! boundary; what crosses it are node identities. This crate makes those
//! identities cheap to compare and safe to hold: every string is interned
//! once per session, and equality is a pointer check.

mod atom;
mod interner;

pub use atom::{Atom, NodeHandle, QualifiedName};
pub use interner::{AtomTable, InternError};
