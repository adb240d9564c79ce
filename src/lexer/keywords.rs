//! Reserved word recognition for Cypher.
//!
//! Cypher keywords are case-insensitive. A symbolic name that collides with a
//! reserved word is always back-quoted by the renderer.

/// Reserved words, upper case, sorted for binary search.
const RESERVED: &[&str] = &[
    "ALL", "AND", "AS", "ASC", "ASCENDING", "BY", "CALL", "CASE", "CONTAINS", "CREATE",
    "DELETE", "DESC", "DESCENDING", "DETACH", "DISTINCT", "ELSE", "END", "ENDS", "EXISTS",
    "FALSE", "IN", "IS", "LIMIT", "MANDATORY", "MATCH", "MERGE", "NOT", "NULL", "ON",
    "OPTIONAL", "OR", "ORDER", "REMOVE", "RETURN", "SET", "SKIP", "STARTS", "THEN", "TRUE",
    "UNION", "UNWIND", "WHEN", "WHERE", "WITH", "XOR", "YIELD",
];

/// Returns `true` if `name` is a reserved Cypher word (case-insensitive).
pub fn is_reserved(name: &str) -> bool {
    let upper = name.to_ascii_uppercase();
    RESERVED.binary_search(&upper.as_str()).is_ok()
}

/// Literal keywords recognised inside property maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKeyword {
    True,
    False,
    Null,
}

/// Looks up a literal keyword (case-insensitive).
pub fn lookup_literal_keyword(name: &str) -> Option<LiteralKeyword> {
    match name.to_ascii_uppercase().as_str() {
        "TRUE" => Some(LiteralKeyword::True),
        "FALSE" => Some(LiteralKeyword::False),
        "NULL" => Some(LiteralKeyword::Null),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_table_is_sorted() {
        let mut sorted = RESERVED.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, RESERVED);
    }

    #[test]
    fn reserved_lookup_ignores_case() {
        assert!(is_reserved("match"));
        assert!(is_reserved("Where"));
        assert!(!is_reserved("Person"));
    }

    #[test]
    fn literal_keywords() {
        assert_eq!(lookup_literal_keyword("true"), Some(LiteralKeyword::True));
        assert_eq!(lookup_literal_keyword("NULL"), Some(LiteralKeyword::Null));
        assert_eq!(lookup_literal_keyword("nil"), None);
    }
}
