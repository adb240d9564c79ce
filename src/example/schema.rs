//! Node descriptions: the schema collaborator the translator consults.

use std::collections::BTreeMap;

use smol_str::SmolStr;

use crate::ast::SymbolicName;

/// How a field is stored in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyKind {
    /// A scalar (or list) node property.
    #[default]
    Simple,
    /// A relationship to another node.
    Association,
}

/// Mapping of one type field onto the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescription {
    field_name: SmolStr,
    graph_property_name: SmolStr,
    kind: PropertyKind,
    internal_id: bool,
}

impl PropertyDescription {
    /// A simple property whose graph name differs from the field name.
    pub fn new(field_name: impl Into<SmolStr>, graph_property_name: impl Into<SmolStr>) -> Self {
        Self {
            field_name: field_name.into(),
            graph_property_name: graph_property_name.into(),
            kind: PropertyKind::Simple,
            internal_id: false,
        }
    }

    /// A simple property stored under the field's own name.
    pub fn simple(name: impl Into<SmolStr>) -> Self {
        let name = name.into();
        Self::new(name.clone(), name)
    }

    pub fn association(mut self) -> Self {
        self.kind = PropertyKind::Association;
        self
    }

    /// Marks the field as holding the database-generated identifier, which is
    /// matched with `id(n)` rather than a node property.
    pub fn internal_id(mut self) -> Self {
        self.internal_id = true;
        self
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn graph_property_name(&self) -> &str {
        &self.graph_property_name
    }

    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    pub fn is_association(&self) -> bool {
        self.kind == PropertyKind::Association
    }

    pub fn is_internal_id(&self) -> bool {
        self.internal_id
    }
}

/// Labels and property mapping of one node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDescription {
    type_name: SmolStr,
    primary_label: SymbolicName,
    additional_labels: Vec<SymbolicName>,
    properties: Vec<PropertyDescription>,
}

impl NodeDescription {
    pub fn new(type_name: impl Into<SmolStr>, primary_label: impl Into<SymbolicName>) -> Self {
        Self {
            type_name: type_name.into(),
            primary_label: primary_label.into(),
            additional_labels: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn with_additional_label(mut self, label: impl Into<SymbolicName>) -> Self {
        self.additional_labels.push(label.into());
        self
    }

    pub fn with_property(mut self, property: PropertyDescription) -> Self {
        self.properties.push(property);
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn primary_label(&self) -> &SymbolicName {
        &self.primary_label
    }

    pub fn additional_labels(&self) -> &[SymbolicName] {
        &self.additional_labels
    }

    /// Properties in declaration order.
    pub fn properties(&self) -> &[PropertyDescription] {
        &self.properties
    }

    /// Looks up a property by its field name.
    pub fn property(&self, field_name: &str) -> Option<&PropertyDescription> {
        self.properties
            .iter()
            .find(|property| property.field_name() == field_name)
    }
}

/// Resolves node descriptions by type name.
pub trait NodeDescriptionProvider: Send + Sync {
    fn node_description(&self, type_name: &str) -> Option<&NodeDescription>;
}

/// In-memory [`NodeDescriptionProvider`].
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    descriptions: BTreeMap<SmolStr, NodeDescription>,
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `description`, replacing any previous one for the same type.
    pub fn register(&mut self, description: NodeDescription) -> &mut Self {
        self.descriptions
            .insert(description.type_name.clone(), description);
        self
    }

    pub fn with(mut self, description: NodeDescription) -> Self {
        self.register(description);
        self
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}

impl NodeDescriptionProvider for SchemaCatalog {
    fn node_description(&self, type_name: &str) -> Option<&NodeDescription> {
        self.descriptions.get(type_name)
    }
}
