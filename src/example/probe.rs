//! Probes: the example objects a query is derived from.

use serde::Serialize;
use serde_json::{Map, Value};
use smol_str::SmolStr;

use crate::error::UnsupportedExampleError;

/// Read access to a probe's populated fields.
///
/// `field` distinguishes a field that was never set (`None`) from one that
/// was explicitly set to null (`Some(Value::Null)`).
pub trait Probe {
    /// Name used to look up the node description.
    fn type_name(&self) -> &str;

    fn field(&self, name: &str) -> Option<&Value>;

    /// Names of all set fields, including explicit nulls.
    fn field_names(&self) -> Vec<&str>;
}

/// A probe backed by a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeObject {
    type_name: SmolStr,
    fields: Map<String, Value>,
}

impl ProbeObject {
    pub fn new(type_name: impl Into<SmolStr>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Map::new(),
        }
    }

    /// Sets a field. Use `Value::Null` for an explicit null.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Builds a probe from any serializable value.
    ///
    /// The value must serialize to an object. Keys left out of the object are
    /// absent; `Option::None` fields serialize as explicit nulls unless they
    /// are skipped with `skip_serializing_if`.
    pub fn from_serializable<T>(
        type_name: impl Into<SmolStr>,
        value: &T,
    ) -> Result<Self, UnsupportedExampleError>
    where
        T: Serialize + ?Sized,
    {
        let fields = match serde_json::to_value(value) {
            Ok(Value::Object(fields)) => fields,
            Ok(other) => {
                return Err(UnsupportedExampleError::InvalidProbe {
                    reason: format!("expected an object, found {}", json_kind(&other)),
                });
            }
            Err(err) => {
                return Err(UnsupportedExampleError::InvalidProbe {
                    reason: err.to_string(),
                });
            }
        };
        Ok(Self {
            type_name: type_name.into(),
            fields,
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Probe for ProbeObject {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Person {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        age: Option<u32>,
        email: Option<String>,
    }

    #[test]
    fn absent_and_null_are_distinct() {
        let probe = ProbeObject::from_serializable(
            "Person",
            &Person {
                name: "Alice".into(),
                age: None,
                email: None,
            },
        )
        .unwrap();
        assert_eq!(probe.field("name"), Some(&json!("Alice")));
        assert_eq!(probe.field("age"), None);
        assert_eq!(probe.field("email"), Some(&Value::Null));
        assert_eq!(probe.field_names(), vec!["email", "name"]);
    }

    #[test]
    fn non_objects_are_rejected() {
        let err = ProbeObject::from_serializable("Person", &42).unwrap_err();
        assert_eq!(
            err,
            UnsupportedExampleError::InvalidProbe {
                reason: "expected an object, found a number".into()
            }
        );
    }
}
