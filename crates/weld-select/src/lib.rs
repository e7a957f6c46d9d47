//! Weld Select - Selection Adapter
//!
//! Bridges a CSS selection engine to an opaque, host-owned document tree.
//!
//! The engine asks ~30 kinds of questions about nodes it does not own; the
//! host answers string-keyed queries about nodes it does. This crate is the
//! contract between them, plus the two pieces of real logic that belong
//! nowhere else: resolving keyword and relative font sizes into absolute
//! lengths, and the per-node data store the engine uses to memoize state
//! across matching passes.

mod adapter;
mod fixed;
mod font_size;
mod handler;
mod host;
pub mod matchers;
mod node_data;
mod ua_defaults;
mod units;

pub use adapter::HostSelectionAdapter;
pub use fixed::Fixed16;
pub use font_size::{FontSize, FontSizeConfig, FontSizeRequest, SizeKeyword, resolve_font_size};
pub use handler::{PresentationalHint, SelectionHandler};
pub use host::{BoolQuery, DocumentHost, NodeQuery, StringQuery, parse_class_list};
pub use node_data::NodeDataStore;
pub use ua_defaults::{Color, GenericFamily, PropertyId, UaDefault, ua_default_for_property};
pub use units::{Length, LengthUnit, UnitError, Viewport, parse_size};

// Re-export the identity types so engines depend on one crate.
pub use weld_dom::{Atom, AtomTable, InternError, NodeHandle, QualifiedName};

/// Errors the adapter can surface to the engine.
///
/// Navigation misses and missing user-agent defaults are not errors; they
/// are `None` results. Malformed host text degrades to empty results.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    /// String interning failed. The adapter has no recovery strategy;
    /// whether to repeat the (idempotent) query is the engine's call.
    #[error(transparent)]
    OutOfMemory(#[from] InternError),
}
