//! Translation of an [`Example`] into a match condition.

use serde_json::Value;
use smol_str::SmolStr;
use tracing::debug;

use super::matcher::{Example, MatchMode, NullHandling};
use super::probe::Probe;
use super::schema::{NodeDescription, NodeDescriptionProvider, PropertyDescription};
use crate::ast::{ComparisonOperator, Expression, NodePattern};
use crate::builder::{self, OngoingReadingWithWhere, id, parameter};
use crate::error::UnsupportedExampleError;
use crate::parameters::Parameters;

/// Variable the root node is bound to.
pub const ROOT_NODE_NAME: &str = "n";

/// Condition and parameters derived from an example.
///
/// Probe values only ever reach [`parameters`](Self::parameters); the
/// condition references them as `$name`.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    node_description: NodeDescription,
    parameters: Parameters,
    condition: Option<Expression>,
}

impl Predicate {
    pub fn create<P: Probe>(
        schema: &dyn NodeDescriptionProvider,
        example: &Example<P>,
    ) -> Result<Self, UnsupportedExampleError> {
        let matcher = example.matcher();
        matcher.validate()?;

        let probe = example.probe();
        let description = schema.node_description(probe.type_name()).ok_or_else(|| {
            UnsupportedExampleError::UnknownType {
                type_name: SmolStr::new(probe.type_name()),
            }
        })?;

        if let Some(field) = probe
            .field_names()
            .into_iter()
            .find(|field| description.property(field).is_none())
        {
            return Err(UnsupportedExampleError::UnmappedField {
                type_name: SmolStr::new(description.type_name()),
                field: SmolStr::new(field),
            });
        }

        let root = root_node(description);
        let mut parameters = Parameters::new();
        let mut conditions = Vec::new();
        for property in description.properties() {
            let Some(value) = probe.field(property.field_name()) else {
                continue;
            };
            let target = subject(&root, property);
            if value.is_null() {
                if matcher.null_handling == NullHandling::Include && !property.is_association() {
                    conditions.push(target.is_null());
                }
                continue;
            }
            if property.is_association() {
                return Err(UnsupportedExampleError::Association {
                    type_name: SmolStr::new(description.type_name()),
                    field: SmolStr::new(property.field_name()),
                });
            }
            if value.is_object() {
                return Err(UnsupportedExampleError::NestedValue {
                    type_name: SmolStr::new(description.type_name()),
                    field: SmolStr::new(property.field_name()),
                });
            }

            let operator = match value {
                Value::String(_) if !property.is_internal_id() => {
                    matcher.string_matcher.operator()
                }
                _ => ComparisonOperator::Eq,
            };
            let name = parameters.allocate(property.graph_property_name(), value.clone());
            conditions.push(Expression::Comparison(
                operator,
                Box::new(target),
                Box::new(parameter(name)),
            ));
        }

        let condition_count = conditions.len();
        let condition = conditions.into_iter().reduce(|lhs, rhs| match matcher.mode {
            MatchMode::All => lhs.and(rhs),
            MatchMode::Any => lhs.or(rhs),
        });
        debug!(
            label = description.primary_label().as_str(),
            conditions = condition_count,
            parameters = parameters.len(),
            "derived predicate from example"
        );

        Ok(Self {
            node_description: description.clone(),
            parameters,
            condition,
        })
    }

    pub fn node_description(&self) -> &NodeDescription {
        &self.node_description
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn into_parameters(self) -> Parameters {
        self.parameters
    }

    /// `None` when the probe populated no matchable field.
    pub fn condition(&self) -> Option<&Expression> {
        self.condition.as_ref()
    }

    /// Hands the description and condition to a match entry point, such as
    /// [`prepare_match_of`].
    pub fn apply_to<F, R>(&self, entry: F) -> R
    where
        F: FnOnce(&NodeDescription, Option<Expression>) -> R,
    {
        entry(&self.node_description, self.condition.clone())
    }
}

/// The root node pattern, `(n:Primary:Additional...)`.
pub fn root_node(description: &NodeDescription) -> NodePattern {
    description.additional_labels().iter().fold(
        builder::node(description.primary_label()).named(ROOT_NODE_NAME),
        |node, label| node.labeled(label),
    )
}

fn subject(root: &NodePattern, property: &PropertyDescription) -> Expression {
    if property.is_internal_id() {
        id(root.as_expression())
    } else {
        root.property(property.graph_property_name())
    }
}

/// `MATCH (n:Label) [WHERE condition]`
pub fn prepare_match_of(
    description: &NodeDescription,
    condition: Option<Expression>,
) -> OngoingReadingWithWhere {
    builder::match_(root_node(description)).where_if_present(condition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::asterisk;
    use crate::example::{ExampleMatcher, ProbeObject, SchemaCatalog, StringMatcher};
    use crate::renderer::render;
    use serde_json::json;

    fn catalog() -> SchemaCatalog {
        SchemaCatalog::new().with(
            NodeDescription::new("Person", "Person")
                .with_additional_label("Actor")
                .with_property(PropertyDescription::simple("id").internal_id())
                .with_property(PropertyDescription::simple("name"))
                .with_property(PropertyDescription::new("born", "yearOfBirth"))
                .with_property(PropertyDescription::simple("movies").association()),
        )
    }

    fn cypher(predicate: &Predicate) -> String {
        let statement = predicate
            .apply_to(prepare_match_of)
            .returning([asterisk()])
            .build();
        render(&statement).unwrap()
    }

    #[test]
    fn internal_id_uses_id_function() {
        let probe = ProbeObject::new("Person").with_field("id", 42);
        let predicate = Predicate::create(&catalog(), &Example::of(probe)).unwrap();
        assert_eq!(
            cypher(&predicate),
            "MATCH (n:Person:Actor) WHERE id(n) = $id RETURN *"
        );
        assert_eq!(predicate.parameters().get("id"), Some(&json!(42)));
    }

    #[test]
    fn graph_property_names_are_used() {
        let probe = ProbeObject::new("Person")
            .with_field("name", "Keanu")
            .with_field("born", 1964);
        let predicate = Predicate::create(&catalog(), &Example::of(probe)).unwrap();
        assert_eq!(
            cypher(&predicate),
            "MATCH (n:Person:Actor) WHERE n.name = $name AND n.yearOfBirth = $yearOfBirth RETURN *"
        );
    }

    #[test]
    fn any_mode_and_string_matcher() {
        let probe = ProbeObject::new("Person")
            .with_field("name", "Kea")
            .with_field("born", 1964);
        let matcher = ExampleMatcher::matching_any().with_string_matcher(StringMatcher::StartsWith);
        let predicate = Predicate::create(&catalog(), &Example::with_matcher(probe, matcher)).unwrap();
        assert_eq!(
            cypher(&predicate),
            "MATCH (n:Person:Actor) WHERE n.name STARTS WITH $name OR n.yearOfBirth = $yearOfBirth RETURN *"
        );
    }

    #[test]
    fn explicit_null_follows_null_handling() {
        let probe = ProbeObject::new("Person").with_field("name", Value::Null);
        let ignored = Predicate::create(&catalog(), &Example::of(probe.clone())).unwrap();
        assert!(ignored.condition().is_none());
        assert_eq!(cypher(&ignored), "MATCH (n:Person:Actor) RETURN *");

        let matcher = ExampleMatcher::default().with_include_null_values();
        let included = Predicate::create(&catalog(), &Example::with_matcher(probe, matcher)).unwrap();
        assert_eq!(
            cypher(&included),
            "MATCH (n:Person:Actor) WHERE n.name IS NULL RETURN *"
        );
        assert!(included.parameters().is_empty());
    }

    #[test]
    fn unsupported_probe_shapes() {
        let schema = catalog();
        let association = ProbeObject::new("Person").with_field("movies", json!([{"title": "x"}]));
        assert!(matches!(
            Predicate::create(&schema, &Example::of(association)),
            Err(UnsupportedExampleError::Association { .. })
        ));

        let nested = ProbeObject::new("Person").with_field("name", json!({"first": "Keanu"}));
        assert!(matches!(
            Predicate::create(&schema, &Example::of(nested)),
            Err(UnsupportedExampleError::NestedValue { .. })
        ));

        let unmapped = ProbeObject::new("Person").with_field("nickname", "Neo");
        assert_eq!(
            Predicate::create(&schema, &Example::of(unmapped)),
            Err(UnsupportedExampleError::UnmappedField {
                type_name: "Person".into(),
                field: "nickname".into(),
            })
        );

        let unknown = ProbeObject::new("Movie");
        assert!(matches!(
            Predicate::create(&schema, &Example::of(unknown)),
            Err(UnsupportedExampleError::UnknownType { .. })
        ));
    }
}
