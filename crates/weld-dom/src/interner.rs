//! Atom Table - String Interning
//!
//! Deduplicates boundary strings so handle comparison is pointer equality.

use std::collections::HashSet;
use std::sync::Arc;

use crate::Atom;

/// Default cap on distinct strings per table.
const DEFAULT_MAX_ENTRIES: usize = 1 << 20;

/// Interning failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    /// The table refused to grow. Surfaced to the caller, never retried
    /// here.
    #[error("atom table exhausted at {0} entries")]
    OutOfMemory(usize),
}

/// Deduplicating string interner.
///
/// Interning the same text twice yields the same [`Atom`], so identity
/// comparison is enough everywhere downstream. The table holds at most
/// `max_entries` distinct strings; node identities accumulate for a whole
/// session, and the cap bounds what a hostile or runaway host can pin.
#[derive(Debug)]
pub struct AtomTable {
    entries: HashSet<Arc<str>>,
    max_entries: usize,
}

impl AtomTable {
    pub fn new() -> Self {
        Self::with_capacity_limit(DEFAULT_MAX_ENTRIES)
    }

    /// A table that refuses to hold more than `max_entries` distinct
    /// strings.
    pub fn with_capacity_limit(max_entries: usize) -> Self {
        Self {
            entries: HashSet::new(),
            max_entries,
        }
    }

    /// Intern `text`, returning its canonical atom.
    pub fn intern(&mut self, text: &str) -> Result<Atom, InternError> {
        if let Some(existing) = self.entries.get(text) {
            return Ok(Atom::from_shared(existing.clone()));
        }
        if self.entries.len() >= self.max_entries {
            tracing::debug!(entries = self.entries.len(), "atom table full");
            return Err(InternError::OutOfMemory(self.entries.len()));
        }
        let shared: Arc<str> = Arc::from(text);
        self.entries.insert(shared.clone());
        Ok(Atom::from_shared(shared))
    }

    /// Number of distinct strings interned.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AtomTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_dedup() {
        let mut atoms = AtomTable::new();
        let a = atoms.intern("hello").unwrap();
        let b = atoms.intern("hello").unwrap();
        assert_eq!(a, b);
        assert_eq!(atoms.len(), 1);
    }

    #[test]
    fn test_intern_distinct() {
        let mut atoms = AtomTable::new();
        let a = atoms.intern("hello").unwrap();
        let b = atoms.intern("world").unwrap();
        assert_ne!(a, b);
        assert_eq!(atoms.len(), 2);
    }

    #[test]
    fn test_capacity_limit() {
        let mut atoms = AtomTable::with_capacity_limit(2);
        atoms.intern("a").unwrap();
        atoms.intern("b").unwrap();
        assert_eq!(atoms.intern("c"), Err(InternError::OutOfMemory(2)));
        // Known strings still intern after the cap is reached.
        assert!(atoms.intern("a").is_ok());
    }
}
