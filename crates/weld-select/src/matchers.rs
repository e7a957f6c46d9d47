//! Attribute Value Matchers
//!
//! The value-relation predicates hosts answer. The adapter delegates these
//! verbatim, so it never learns how attributes are stored; the canonical
//! pure definitions live here so every host agrees on the edge cases.
//!
//! `value` is always the attribute value the host observed on the node;
//! `search` is always the parameter the selector supplied.

/// Exact value match.
pub fn equal(value: &str, search: &str) -> bool {
    value == search
}

/// Dash match: the value exactly, or the search equals the value followed
/// by a dash and a suffix.
///
/// `dashmatch("en", "en")` and `dashmatch("en", "en-US")` hold;
/// `dashmatch("en-US", "en")` does not.
pub fn dashmatch(value: &str, search: &str) -> bool {
    if value == search {
        return true;
    }
    !value.is_empty()
        && search
            .strip_prefix(value)
            .is_some_and(|rest| rest.starts_with('-'))
}

/// Whitespace-separated token containment. An empty search never matches.
pub fn includes(value: &str, search: &str) -> bool {
    !search.is_empty() && value.split_whitespace().any(|token| token == search)
}

/// The value starts with the search. An empty search never matches.
pub fn prefix(value: &str, search: &str) -> bool {
    !search.is_empty() && value.starts_with(search)
}

/// The value ends with the search. An empty search never matches.
pub fn suffix(value: &str, search: &str) -> bool {
    !search.is_empty() && value.ends_with(search)
}

/// The value contains the search. An empty search never matches.
pub fn substring(value: &str, search: &str) -> bool {
    !search.is_empty() && value.contains(search)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashmatch_exact() {
        assert!(dashmatch("en", "en"));
    }

    #[test]
    fn test_dashmatch_direction() {
        // The search may extend the value by a dashed suffix, never the
        // other way around.
        assert!(dashmatch("en", "en-US"));
        assert!(!dashmatch("en-US", "en"));
        assert!(!dashmatch("en", "enx"));
        assert!(!dashmatch("", "-US"));
    }

    #[test]
    fn test_includes_tokens() {
        assert!(includes("nav active", "active"));
        assert!(includes("nav  active", "nav"));
        assert!(!includes("nav-active", "nav"));
        assert!(!includes("nav active", ""));
    }

    #[test]
    fn test_string_relations() {
        assert!(prefix("topbar", "top"));
        assert!(!prefix("topbar", "bar"));
        assert!(suffix("topbar", "bar"));
        assert!(!suffix("topbar", "top"));
        assert!(substring("topbar", "pba"));
        assert!(!substring("topbar", "baz"));
        assert!(!prefix("topbar", "") && !suffix("topbar", "") && !substring("topbar", ""));
    }
}
