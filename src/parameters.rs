//! Bound parameter values for a statement.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use smol_str::SmolStr;

/// Name used when a preferred name sanitizes to nothing.
const FALLBACK_NAME: &str = "param";

/// Parameter table keyed by name.
///
/// Names are allocated deterministically: the preferred name first, then
/// `name_1`, `name_2`, ... until a free one is found. Iteration is in key
/// order so rendered output and parameter tables are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Parameters {
    values: BTreeMap<SmolStr, Value>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` under a fresh name derived from `preferred` and returns
    /// the name that was used.
    pub fn allocate(&mut self, preferred: &str, value: Value) -> SmolStr {
        let base = sanitize(preferred);
        let mut candidate = base.clone();
        let mut suffix = 0usize;
        while self.values.contains_key(&candidate) {
            suffix += 1;
            candidate = SmolStr::new(format!("{base}_{suffix}"));
        }
        self.values.insert(candidate.clone(), value);
        candidate
    }

    /// Binds `value` under exactly `name`, returning the previous value.
    pub fn insert(&mut self, name: impl Into<SmolStr>, value: Value) -> Option<Value> {
        self.values.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &SmolStr> {
        self.values.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SmolStr, &Value)> {
        self.values.iter()
    }

    /// Converts into a JSON object, the shape most drivers accept.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.values
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        )
    }

    pub fn into_inner(self) -> BTreeMap<SmolStr, Value> {
        self.values
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a SmolStr, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, SmolStr, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Reduces `preferred` to `[A-Za-z0-9_]`, never starting with a digit.
fn sanitize(preferred: &str) -> SmolStr {
    let mut name: String = preferred
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect();
    if name.chars().all(|ch| ch == '_') {
        return SmolStr::new(FALLBACK_NAME);
    }
    if name.starts_with(|ch: char| ch.is_ascii_digit()) {
        name.insert(0, '_');
    }
    SmolStr::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn allocation_suffixes_on_collision() {
        let mut params = Parameters::new();
        assert_eq!(params.allocate("name", json!("Alice")), "name");
        assert_eq!(params.allocate("name", json!("Bob")), "name_1");
        assert_eq!(params.allocate("name", json!("Carol")), "name_2");
        assert_eq!(params.get("name_1"), Some(&json!("Bob")));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn allocation_sanitizes_names() {
        let mut params = Parameters::new();
        assert_eq!(params.allocate("first name", json!(1)), "first_name");
        assert_eq!(params.allocate("2nd", json!(2)), "_2nd");
        assert_eq!(params.allocate("", json!(3)), "param");
        assert_eq!(params.allocate("äö", json!(4)), "param_1");
    }

    #[test]
    fn suffixed_names_do_not_collide_with_real_names() {
        let mut params = Parameters::new();
        params.insert("name_1", json!("taken"));
        assert_eq!(params.allocate("name", json!("a")), "name");
        assert_eq!(params.allocate("name", json!("b")), "name_2");
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut params = Parameters::new();
        params.allocate("b", json!(2));
        params.allocate("a", json!(1));
        assert_eq!(serde_json::to_string(&params).unwrap(), r#"{"a":1,"b":2}"#);
        assert_eq!(params.to_json(), json!({"a": 1, "b": 2}));
    }
}
