//! Pattern nodes: the `(a:Label)-[:TYPE]->(b)` part of a `MATCH`.

use crate::ast::{Expression, SymbolicName};

/// A comma separated list of pattern elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub(crate) elements: Vec<PatternElement>,
}

impl Pattern {
    /// Creates a pattern from its elements.
    pub fn new(elements: Vec<PatternElement>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[PatternElement] {
        &self.elements
    }
}

impl From<NodePattern> for Pattern {
    fn from(node: NodePattern) -> Self {
        Pattern::new(vec![PatternElement::Node(node)])
    }
}

impl From<RelationshipChain> for Pattern {
    fn from(chain: RelationshipChain) -> Self {
        Pattern::new(vec![PatternElement::Chain(chain)])
    }
}

impl From<PatternElement> for Pattern {
    fn from(element: PatternElement) -> Self {
        Pattern::new(vec![element])
    }
}

/// One element of a pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternElement {
    /// A single node.
    Node(NodePattern),
    /// A node followed by one or more relationship hops.
    Chain(RelationshipChain),
}

impl From<NodePattern> for PatternElement {
    fn from(node: NodePattern) -> Self {
        PatternElement::Node(node)
    }
}

impl From<RelationshipChain> for PatternElement {
    fn from(chain: RelationshipChain) -> Self {
        PatternElement::Chain(chain)
    }
}

/// A node pattern, `(name:Label1:Label2 {key: value})`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodePattern {
    pub(crate) name: Option<SymbolicName>,
    pub(crate) labels: Vec<SymbolicName>,
    pub(crate) properties: Option<Properties>,
}

impl NodePattern {
    pub fn name(&self) -> Option<&SymbolicName> {
        self.name.as_ref()
    }

    pub fn labels(&self) -> &[SymbolicName] {
        &self.labels
    }

    pub fn properties(&self) -> Option<&Properties> {
        self.properties.as_ref()
    }
}

/// Direction of a relationship relative to the order it is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// `-[]->`
    #[default]
    Outgoing,
    /// `<-[]-`
    Incoming,
    /// `-[]-`
    Undirected,
}

/// A relationship pattern, `-[name:TYPE1|TYPE2 {key: value}]->`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RelationshipPattern {
    pub(crate) name: Option<SymbolicName>,
    pub(crate) types: Vec<SymbolicName>,
    pub(crate) properties: Option<Properties>,
    pub(crate) direction: Direction,
}

impl RelationshipPattern {
    pub fn name(&self) -> Option<&SymbolicName> {
        self.name.as_ref()
    }

    pub fn types(&self) -> &[SymbolicName] {
        &self.types
    }

    pub fn properties(&self) -> Option<&Properties> {
        self.properties.as_ref()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns `true` if there is nothing to write between the brackets.
    pub fn has_no_details(&self) -> bool {
        self.name.is_none() && self.types.is_empty() && self.properties.is_none()
    }
}

/// One relationship hop and the node it leads to.
#[derive(Debug, Clone, PartialEq)]
pub struct Hop {
    pub(crate) relationship: RelationshipPattern,
    pub(crate) node: NodePattern,
}

impl Hop {
    pub fn relationship(&self) -> &RelationshipPattern {
        &self.relationship
    }

    pub fn node(&self) -> &NodePattern {
        &self.node
    }
}

/// A path: a start node followed by relationship hops.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipChain {
    pub(crate) start: NodePattern,
    pub(crate) hops: Vec<Hop>,
}

impl RelationshipChain {
    pub fn start(&self) -> &NodePattern {
        &self.start
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }
}

/// An inline property map, `{key: value, ...}`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Properties {
    pub(crate) entries: Vec<PropertyEntry>,
}

impl Properties {
    pub fn new(entries: Vec<PropertyEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PropertyEntry] {
        &self.entries
    }
}

/// A single `key: value` pair of a property map.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyEntry {
    pub(crate) key: SymbolicName,
    pub(crate) value: Expression,
}

impl PropertyEntry {
    pub fn new(key: impl Into<SymbolicName>, value: Expression) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn key(&self) -> &SymbolicName {
        &self.key
    }

    pub fn value(&self) -> &Expression {
        &self.value
    }
}
