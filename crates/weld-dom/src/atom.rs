//! Interned Strings & Node Handles
//!
//! Identity-compared immutable strings, the currency of the selection
//! boundary.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Interned, immutable string.
///
/// Two atoms are equal only when they refer to the same table entry, so
/// comparison and hashing are pointer operations, never byte scans. Atoms
/// from different [`AtomTable`](crate::AtomTable)s never compare equal,
/// even for identical text.
#[derive(Clone)]
pub struct Atom(Arc<str>);

impl Atom {
    pub(crate) fn from_shared(text: Arc<str>) -> Self {
        Self(text)
    }

    /// The interned text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Byte length of the interned text.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn identity(&self) -> usize {
        Arc::as_ptr(&self.0) as *const u8 as usize
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Atom {}

impl Hash for Atom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Atom({:?})", &*self.0)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a document node for the duration of a matching session.
///
/// Handles are minted only by the adapter's interning path, so any two
/// handles for the same host node are the same atom and compare in O(1).
/// The node's storage stays with the document provider; a handle is only
/// forwarded back to it.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct NodeHandle(Atom);

impl NodeHandle {
    /// Wrap an interned identity as a handle.
    pub fn new(identity: Atom) -> Self {
        Self(identity)
    }

    /// The underlying string representation the host understands.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The interned identity itself.
    pub fn atom(&self) -> &Atom {
        &self.0
    }
}

/// (namespace, local-name) pair for element and attribute names.
///
/// Namespaces are not resolved today: every name this crate mints has
/// `namespace == None`. The field stays visible so a namespace-aware host
/// extends the type rather than the call sites.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct QualifiedName {
    pub namespace: Option<Atom>,
    pub local: Atom,
}

impl QualifiedName {
    /// A namespace-less name.
    pub fn local(name: Atom) -> Self {
        Self {
            namespace: None,
            local: name,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::AtomTable;

    #[test]
    fn test_same_table_same_identity() {
        let mut atoms = AtomTable::new();
        let a = atoms.intern("div").unwrap();
        let b = atoms.intern("div").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_tables_differ() {
        let mut first = AtomTable::new();
        let mut second = AtomTable::new();
        let a = first.intern("div").unwrap();
        let b = second.intern("div").unwrap();
        assert_eq!(a.as_str(), b.as_str());
        assert_ne!(a, b);
    }

    #[test]
    fn test_handle_round_trip() {
        let mut atoms = AtomTable::new();
        let handle = super::NodeHandle::new(atoms.intern("uuid-1234").unwrap());
        assert_eq!(handle.as_str(), "uuid-1234");
        assert_eq!(handle, super::NodeHandle::new(atoms.intern("uuid-1234").unwrap()));
    }

    #[test]
    fn test_qualified_name_has_no_namespace() {
        let mut atoms = AtomTable::new();
        let name = super::QualifiedName::local(atoms.intern("a").unwrap());
        assert!(name.namespace.is_none());
        assert_eq!(name.local.as_str(), "a");
    }
}
