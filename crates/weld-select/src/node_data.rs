//! Per-Node Data Store
//!
//! Opaque engine state cached against node identity between matching
//! passes.

use std::collections::HashMap;

use weld_dom::NodeHandle;

/// Map from node identity to an opaque per-node blob.
///
/// Lookup is by interned identity: handles hash by pointer, so a hit means
/// the same table entry, not merely equal text. The store lives as long as
/// the session that owns it; entries are replaced, never duplicated, and
/// never individually destroyed.
#[derive(Debug)]
pub struct NodeDataStore<D> {
    entries: HashMap<NodeHandle, D>,
}

impl<D> NodeDataStore<D> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert or replace the blob for `node`. At most one entry per handle.
    pub fn set(&mut self, node: NodeHandle, data: D) {
        self.entries.insert(node, data);
    }

    /// The blob for `node`, if one was ever set. A miss is a normal
    /// outcome the engine tolerates.
    pub fn get(&self, node: &NodeHandle) -> Option<&D> {
        self.entries.get(node)
    }

    /// Number of nodes with attached data.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<D> Default for NodeDataStore<D> {
    fn default() -> Self {
        Self::new()
    }
}
