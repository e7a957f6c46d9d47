//! Selection Handler
//!
//! The node-introspection contract a selection engine requires. One method
//! per predicate or accessor; the engine calls these while walking and
//! matching, and every answer must come back before the next predicate is
//! evaluated.
//!
//! Getting these semantics exactly right is the whole job: a wrong edge
//! case here does not crash, it silently mis-styles.

use weld_dom::{Atom, NodeHandle, QualifiedName};

use crate::SelectError;
use crate::font_size::{FontSize, FontSizeRequest};
use crate::ua_defaults::{PropertyId, UaDefault};

/// Presentational hints are deliberately unimplemented: this enum has no
/// variants, so the empty set is the only reportable answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationalHint {}

/// What a selection engine needs to know about nodes it does not own.
///
/// Accessors that mint atoms or handles can fail with
/// [`SelectError::OutOfMemory`] and take `&mut self`; predicates are
/// infallible reads. Absent results (`None`) mean "no such node" or "no
/// value" and are never errors.
pub trait SelectionHandler {
    /// Opaque per-node blob the engine caches across matching passes.
    type Data;

    // --- Identity accessors ---

    /// Element name, case preserved; case-folding for matching is the
    /// engine's job.
    fn node_name(&mut self, node: &NodeHandle) -> Result<Option<QualifiedName>, SelectError>;

    /// Complete ordered class list. Empty is a valid answer, distinct from
    /// an error.
    fn node_classes(&mut self, node: &NodeHandle) -> Result<Vec<Atom>, SelectError>;

    /// Element id, case preserved.
    fn node_id(&mut self, node: &NodeHandle) -> Result<Option<Atom>, SelectError>;

    // --- Tree navigation ---

    /// Nearest ancestor named `name`.
    fn named_ancestor_node(
        &mut self,
        node: &NodeHandle,
        name: &QualifiedName,
    ) -> Result<Option<NodeHandle>, SelectError>;

    /// The parent, only if named `name`.
    fn named_parent_node(
        &mut self,
        node: &NodeHandle,
        name: &QualifiedName,
    ) -> Result<Option<NodeHandle>, SelectError>;

    /// The immediately preceding sibling, only if named `name`.
    fn named_sibling_node(
        &mut self,
        node: &NodeHandle,
        name: &QualifiedName,
    ) -> Result<Option<NodeHandle>, SelectError>;

    /// The closest preceding sibling named `name`, however far back.
    fn named_generic_sibling_node(
        &mut self,
        node: &NodeHandle,
        name: &QualifiedName,
    ) -> Result<Option<NodeHandle>, SelectError>;

    /// The parent node.
    fn parent_node(&mut self, node: &NodeHandle) -> Result<Option<NodeHandle>, SelectError>;

    /// The immediately preceding sibling.
    fn sibling_node(&mut self, node: &NodeHandle) -> Result<Option<NodeHandle>, SelectError>;

    // --- Name, class, id, attribute predicates ---

    /// Element-name match. HTML element names compare case-insensitively.
    fn node_has_name(&self, node: &NodeHandle, name: &QualifiedName) -> bool;

    fn node_has_class(&self, node: &NodeHandle, class: &Atom) -> bool;

    fn node_has_id(&self, node: &NodeHandle, id: &Atom) -> bool;

    fn node_has_attribute(&self, node: &NodeHandle, attr: &QualifiedName) -> bool;

    fn node_has_attribute_equal(
        &self,
        node: &NodeHandle,
        attr: &QualifiedName,
        value: &Atom,
    ) -> bool;

    /// See [`crate::matchers::dashmatch`] for the exact relation.
    fn node_has_attribute_dashmatch(
        &self,
        node: &NodeHandle,
        attr: &QualifiedName,
        value: &Atom,
    ) -> bool;

    /// Whitespace-separated token containment.
    fn node_has_attribute_includes(
        &self,
        node: &NodeHandle,
        attr: &QualifiedName,
        value: &Atom,
    ) -> bool;

    fn node_has_attribute_prefix(
        &self,
        node: &NodeHandle,
        attr: &QualifiedName,
        value: &Atom,
    ) -> bool;

    fn node_has_attribute_suffix(
        &self,
        node: &NodeHandle,
        attr: &QualifiedName,
        value: &Atom,
    ) -> bool;

    fn node_has_attribute_substring(
        &self,
        node: &NodeHandle,
        attr: &QualifiedName,
        value: &Atom,
    ) -> bool;

    // --- Structural and state predicates, delegated verbatim: the adapter
    // asserts no independent knowledge of document or UI state. ---

    fn node_is_root(&self, node: &NodeHandle) -> bool;

    /// Signed count of siblings matching the filter: same-named only when
    /// `same_name`, following instead of preceding when `after`.
    fn node_count_siblings(&self, node: &NodeHandle, same_name: bool, after: bool) -> i32;

    fn node_is_empty(&self, node: &NodeHandle) -> bool;

    fn node_is_link(&self, node: &NodeHandle) -> bool;

    fn node_is_visited(&self, node: &NodeHandle) -> bool;

    fn node_is_hover(&self, node: &NodeHandle) -> bool;

    fn node_is_active(&self, node: &NodeHandle) -> bool;

    fn node_is_focus(&self, node: &NodeHandle) -> bool;

    fn node_is_enabled(&self, node: &NodeHandle) -> bool;

    fn node_is_disabled(&self, node: &NodeHandle) -> bool;

    fn node_is_checked(&self, node: &NodeHandle) -> bool;

    fn node_is_target(&self, node: &NodeHandle) -> bool;

    fn node_is_lang(&self, node: &NodeHandle, lang: &Atom) -> bool;

    // --- Hints, defaults, font sizes ---

    /// Always empty; see [`PresentationalHint`].
    fn node_presentational_hints(&self, node: &NodeHandle) -> Vec<PresentationalHint>;

    /// `None` when the property has no built-in default, a normal outcome
    /// distinct from an error.
    fn ua_default_for_property(&self, property: PropertyId) -> Option<UaDefault>;

    /// Resolve a font size against the parent's; the result is always a
    /// concrete dimension.
    fn compute_font_size(&self, parent: Option<FontSize>, request: FontSizeRequest) -> FontSize;

    // --- Per-node engine data ---

    /// Attach or replace the engine's blob for `node`.
    fn set_node_data(&mut self, node: &NodeHandle, data: Self::Data);

    /// The blob previously attached to `node`; a miss is a normal outcome.
    fn node_data(&self, node: &NodeHandle) -> Option<&Self::Data>;
}
