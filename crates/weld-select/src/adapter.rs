//! Host Selection Adapter
//!
//! Implements the engine contract by routing every question through the
//! host's string-keyed queries. Three private dispatch helpers carry all
//! the traffic; each contract method is a one-line specialization.

use weld_dom::{Atom, AtomTable, NodeHandle, QualifiedName};

use crate::SelectError;
use crate::font_size::{FontSize, FontSizeConfig, FontSizeRequest, resolve_font_size};
use crate::handler::{PresentationalHint, SelectionHandler};
use crate::host::{BoolQuery, DocumentHost, NodeQuery, StringQuery};
use crate::node_data::NodeDataStore;
use crate::ua_defaults::{self, PropertyId, UaDefault};

/// One selection session over a host document.
///
/// Owns the atom table and the per-node data store, so independent
/// sessions share nothing and a single session is plain `&mut` state: at
/// most one matching pass runs at a time.
pub struct HostSelectionAdapter<H, D> {
    host: H,
    atoms: AtomTable,
    node_data: NodeDataStore<D>,
    font_config: FontSizeConfig,
}

impl<H: DocumentHost, D> HostSelectionAdapter<H, D> {
    pub fn new(host: H) -> Self {
        Self::with_font_config(host, FontSizeConfig::default())
    }

    pub fn with_font_config(host: H, font_config: FontSizeConfig) -> Self {
        tracing::debug!("starting selection session");
        Self {
            host,
            atoms: AtomTable::new(),
            node_data: NodeDataStore::new(),
            font_config,
        }
    }

    /// Mint the handle for a host node identity.
    ///
    /// This is the engine's entry point into the session; every further
    /// handle comes back out of a navigation accessor, already interned.
    pub fn intern_node(&mut self, identity: &str) -> Result<NodeHandle, SelectError> {
        Ok(NodeHandle::new(self.atoms.intern(identity)?))
    }

    /// Intern an engine-side string (a name, class, id, or attribute
    /// value) into the session's atom space.
    pub fn intern(&mut self, text: &str) -> Result<Atom, SelectError> {
        Ok(self.atoms.intern(text)?)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Ask a string question. An empty answer is absent; anything else is
    /// re-interned so it compares by identity from here on.
    fn fetch_string(
        &mut self,
        node: &NodeHandle,
        query: StringQuery,
    ) -> Result<Option<Atom>, SelectError> {
        let answer = self.host.query_string(query, node.as_str());
        self.intern_nonempty(&answer)
    }

    /// Ask a yes/no question. Absent parameters go to the host as `""`.
    fn match_predicate(
        &self,
        node: &NodeHandle,
        query: BoolQuery,
        search: Option<&str>,
        matches: Option<&str>,
    ) -> bool {
        self.host.query_bool(
            query,
            node.as_str(),
            search.unwrap_or(""),
            matches.unwrap_or(""),
        )
    }

    /// Ask a named-navigation question and re-intern the answer as a
    /// handle.
    fn match_and_fetch(
        &mut self,
        node: &NodeHandle,
        query: NodeQuery,
        search: &str,
    ) -> Result<Option<NodeHandle>, SelectError> {
        let answer = self.host.query_node(query, node.as_str(), search);
        Ok(self.intern_nonempty(&answer)?.map(NodeHandle::new))
    }

    fn intern_nonempty(&mut self, answer: &str) -> Result<Option<Atom>, SelectError> {
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.atoms.intern(answer)?))
        }
    }
}

impl<H: DocumentHost, D> SelectionHandler for HostSelectionAdapter<H, D> {
    type Data = D;

    fn node_name(&mut self, node: &NodeHandle) -> Result<Option<QualifiedName>, SelectError> {
        Ok(self
            .fetch_string(node, StringQuery::Name)?
            .map(QualifiedName::local))
    }

    fn node_classes(&mut self, node: &NodeHandle) -> Result<Vec<Atom>, SelectError> {
        let classes = self.host.node_classes(node.as_str());
        let mut atoms = Vec::with_capacity(classes.len());
        for class in &classes {
            atoms.push(self.atoms.intern(class)?);
        }
        Ok(atoms)
    }

    fn node_id(&mut self, node: &NodeHandle) -> Result<Option<Atom>, SelectError> {
        self.fetch_string(node, StringQuery::Id)
    }

    fn named_ancestor_node(
        &mut self,
        node: &NodeHandle,
        name: &QualifiedName,
    ) -> Result<Option<NodeHandle>, SelectError> {
        self.match_and_fetch(node, NodeQuery::NamedAncestor, name.local.as_str())
    }

    fn named_parent_node(
        &mut self,
        node: &NodeHandle,
        name: &QualifiedName,
    ) -> Result<Option<NodeHandle>, SelectError> {
        self.match_and_fetch(node, NodeQuery::NamedParent, name.local.as_str())
    }

    fn named_sibling_node(
        &mut self,
        node: &NodeHandle,
        name: &QualifiedName,
    ) -> Result<Option<NodeHandle>, SelectError> {
        self.match_and_fetch(node, NodeQuery::NamedSibling, name.local.as_str())
    }

    fn named_generic_sibling_node(
        &mut self,
        node: &NodeHandle,
        name: &QualifiedName,
    ) -> Result<Option<NodeHandle>, SelectError> {
        self.match_and_fetch(node, NodeQuery::NamedGenericSibling, name.local.as_str())
    }

    fn parent_node(&mut self, node: &NodeHandle) -> Result<Option<NodeHandle>, SelectError> {
        Ok(self
            .fetch_string(node, StringQuery::Parent)?
            .map(NodeHandle::new))
    }

    fn sibling_node(&mut self, node: &NodeHandle) -> Result<Option<NodeHandle>, SelectError> {
        Ok(self
            .fetch_string(node, StringQuery::PrecedingSibling)?
            .map(NodeHandle::new))
    }

    fn node_has_name(&self, node: &NodeHandle, name: &QualifiedName) -> bool {
        self.match_predicate(node, BoolQuery::HasName, Some(name.local.as_str()), None)
    }

    fn node_has_class(&self, node: &NodeHandle, class: &Atom) -> bool {
        self.match_predicate(node, BoolQuery::HasClass, Some(class.as_str()), None)
    }

    fn node_has_id(&self, node: &NodeHandle, id: &Atom) -> bool {
        self.match_predicate(node, BoolQuery::HasId, Some(id.as_str()), None)
    }

    fn node_has_attribute(&self, node: &NodeHandle, attr: &QualifiedName) -> bool {
        self.match_predicate(node, BoolQuery::HasAttribute, Some(attr.local.as_str()), None)
    }

    fn node_has_attribute_equal(
        &self,
        node: &NodeHandle,
        attr: &QualifiedName,
        value: &Atom,
    ) -> bool {
        self.match_predicate(
            node,
            BoolQuery::AttributeEqual,
            Some(attr.local.as_str()),
            Some(value.as_str()),
        )
    }

    fn node_has_attribute_dashmatch(
        &self,
        node: &NodeHandle,
        attr: &QualifiedName,
        value: &Atom,
    ) -> bool {
        self.match_predicate(
            node,
            BoolQuery::AttributeDashmatch,
            Some(attr.local.as_str()),
            Some(value.as_str()),
        )
    }

    fn node_has_attribute_includes(
        &self,
        node: &NodeHandle,
        attr: &QualifiedName,
        value: &Atom,
    ) -> bool {
        self.match_predicate(
            node,
            BoolQuery::AttributeIncludes,
            Some(attr.local.as_str()),
            Some(value.as_str()),
        )
    }

    fn node_has_attribute_prefix(
        &self,
        node: &NodeHandle,
        attr: &QualifiedName,
        value: &Atom,
    ) -> bool {
        self.match_predicate(
            node,
            BoolQuery::AttributePrefix,
            Some(attr.local.as_str()),
            Some(value.as_str()),
        )
    }

    fn node_has_attribute_suffix(
        &self,
        node: &NodeHandle,
        attr: &QualifiedName,
        value: &Atom,
    ) -> bool {
        self.match_predicate(
            node,
            BoolQuery::AttributeSuffix,
            Some(attr.local.as_str()),
            Some(value.as_str()),
        )
    }

    fn node_has_attribute_substring(
        &self,
        node: &NodeHandle,
        attr: &QualifiedName,
        value: &Atom,
    ) -> bool {
        self.match_predicate(
            node,
            BoolQuery::AttributeSubstring,
            Some(attr.local.as_str()),
            Some(value.as_str()),
        )
    }

    fn node_is_root(&self, node: &NodeHandle) -> bool {
        self.match_predicate(node, BoolQuery::IsRoot, None, None)
    }

    fn node_count_siblings(&self, node: &NodeHandle, same_name: bool, after: bool) -> i32 {
        self.host.count_siblings(node.as_str(), same_name, after)
    }

    fn node_is_empty(&self, node: &NodeHandle) -> bool {
        self.match_predicate(node, BoolQuery::IsEmpty, None, None)
    }

    fn node_is_link(&self, node: &NodeHandle) -> bool {
        self.match_predicate(node, BoolQuery::IsLink, None, None)
    }

    fn node_is_visited(&self, node: &NodeHandle) -> bool {
        self.match_predicate(node, BoolQuery::IsVisited, None, None)
    }

    fn node_is_hover(&self, node: &NodeHandle) -> bool {
        self.match_predicate(node, BoolQuery::IsHover, None, None)
    }

    fn node_is_active(&self, node: &NodeHandle) -> bool {
        self.match_predicate(node, BoolQuery::IsActive, None, None)
    }

    fn node_is_focus(&self, node: &NodeHandle) -> bool {
        self.match_predicate(node, BoolQuery::IsFocus, None, None)
    }

    fn node_is_enabled(&self, node: &NodeHandle) -> bool {
        self.match_predicate(node, BoolQuery::IsEnabled, None, None)
    }

    fn node_is_disabled(&self, node: &NodeHandle) -> bool {
        self.match_predicate(node, BoolQuery::IsDisabled, None, None)
    }

    fn node_is_checked(&self, node: &NodeHandle) -> bool {
        self.match_predicate(node, BoolQuery::IsChecked, None, None)
    }

    fn node_is_target(&self, node: &NodeHandle) -> bool {
        self.match_predicate(node, BoolQuery::IsTarget, None, None)
    }

    fn node_is_lang(&self, node: &NodeHandle, lang: &Atom) -> bool {
        self.match_predicate(node, BoolQuery::IsLang, Some(lang.as_str()), None)
    }

    fn node_presentational_hints(&self, _node: &NodeHandle) -> Vec<PresentationalHint> {
        Vec::new()
    }

    fn ua_default_for_property(&self, property: PropertyId) -> Option<UaDefault> {
        ua_defaults::ua_default_for_property(property)
    }

    fn compute_font_size(&self, parent: Option<FontSize>, request: FontSizeRequest) -> FontSize {
        resolve_font_size(&self.font_config, parent, request)
    }

    fn set_node_data(&mut self, node: &NodeHandle, data: D) {
        self.node_data.set(node.clone(), data);
    }

    fn node_data(&self, node: &NodeHandle) -> Option<&D> {
        self.node_data.get(node)
    }
}
