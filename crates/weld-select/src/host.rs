//! Host Document Provider
//!
//! The contract the external tree owner implements: synchronous,
//! string-keyed questions about nodes the adapter does not own.

/// String-valued questions about a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringQuery {
    /// Element name, case preserved.
    Name,
    /// Element id.
    Id,
    /// Identity of the parent node.
    Parent,
    /// Identity of the immediately preceding sibling.
    PrecedingSibling,
    /// Flattened textual class list (`["a","b"]`), for hosts that can only
    /// answer in text. Structured hosts override
    /// [`DocumentHost::node_classes`] instead.
    ClassList,
}

/// Named tree-navigation questions. The parameter is the element name
/// searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeQuery {
    /// Nearest ancestor with the given name.
    NamedAncestor,
    /// The parent, only if it has the given name.
    NamedParent,
    /// The immediately preceding sibling, only if it has the given name.
    NamedSibling,
    /// The closest preceding sibling with the given name, however far back.
    NamedGenericSibling,
}

/// Yes/no questions about a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolQuery {
    /// Element-name match; HTML names compare case-insensitively.
    HasName,
    HasClass,
    HasId,
    HasAttribute,
    AttributeEqual,
    AttributeDashmatch,
    AttributeIncludes,
    AttributePrefix,
    AttributeSuffix,
    AttributeSubstring,
    IsRoot,
    IsEmpty,
    IsLink,
    IsVisited,
    IsHover,
    IsActive,
    IsFocus,
    IsEnabled,
    IsDisabled,
    IsChecked,
    IsTarget,
    IsLang,
}

/// Answers questions about nodes it owns.
///
/// Queries are synchronous and must not mutate the tree, though they may
/// read live state such as hover or focus. Absent parameters arrive as
/// `""`, never as a null marker, so implementations never branch on
/// nullability; an empty string answer means "no value".
pub trait DocumentHost {
    /// Answer a string-valued question. Empty means no value.
    fn query_string(&self, query: StringQuery, node: &str) -> String;

    /// Answer a named-navigation question with the identity of the found
    /// node, or empty when nothing matches.
    fn query_node(&self, query: NodeQuery, node: &str, search: &str) -> String;

    /// Answer a yes/no question with up to two parameters.
    fn query_bool(&self, query: BoolQuery, node: &str, search: &str, matches: &str) -> bool;

    /// Count siblings of `node`: only same-named ones when `same_name`,
    /// following siblings instead of preceding when `after`.
    fn count_siblings(&self, node: &str, same_name: bool, after: bool) -> i32;

    /// Complete ordered class list of `node`. Zero classes is a valid
    /// answer, distinct from an error. The default parses the flattened
    /// textual form of [`StringQuery::ClassList`]; hosts with structured
    /// attribute access should override.
    fn node_classes(&self, node: &str) -> Vec<String> {
        parse_class_list(&self.query_string(StringQuery::ClassList, node))
    }
}

/// Parse the flattened textual form of a class list, e.g. `["nav","open"]`.
///
/// Malformed input (missing brackets, unterminated quotes, delimiters
/// inside a token) yields zero classes rather than an error: the engine
/// cannot act on a partial parse.
pub fn parse_class_list(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let Some(body) = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return malformed(text);
    };

    let mut classes = Vec::new();
    let mut rest = body.trim();
    if rest.is_empty() {
        return classes;
    }
    loop {
        let Some(tail) = rest.strip_prefix('"') else {
            return malformed(text);
        };
        let Some(end) = tail.find('"') else {
            // Unterminated quote.
            return malformed(text);
        };
        let token = &tail[..end];
        if token.contains([',', '[', ']']) {
            return malformed(text);
        }
        classes.push(token.to_string());
        rest = tail[end + 1..].trim_start();
        if rest.is_empty() {
            break;
        }
        let Some(next) = rest.strip_prefix(',') else {
            return malformed(text);
        };
        rest = next.trim_start();
    }
    classes
}

fn malformed(text: &str) -> Vec<String> {
    tracing::debug!(text, "malformed class list, treating as no classes");
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_have_no_classes() {
        assert!(parse_class_list("").is_empty());
        assert!(parse_class_list("  ").is_empty());
        assert!(parse_class_list("[]").is_empty());
        assert!(parse_class_list("[ ]").is_empty());
    }

    #[test]
    fn test_tokens_in_order() {
        assert_eq!(parse_class_list(r#"["a","b"]"#), vec!["a", "b"]);
        assert_eq!(parse_class_list(r#"[ "nav" , "open" ]"#), vec!["nav", "open"]);
        assert_eq!(parse_class_list(r#"["solo"]"#), vec!["solo"]);
    }

    #[test]
    fn test_malformed_is_zero_classes() {
        assert!(parse_class_list(r#"["a""#).is_empty());
        assert!(parse_class_list(r#"["a]"#).is_empty());
        assert!(parse_class_list("[a,b]").is_empty());
        assert!(parse_class_list(r#"["a" "b"]"#).is_empty());
        assert!(parse_class_list("garbage").is_empty());
    }
}
