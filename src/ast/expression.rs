//! Expression nodes.
//!
//! Expressions compose recursively. Runtime values coming from callers or
//! probes are always [`Expression::Parameter`] references; [`Literal`] is
//! reserved for static values written directly into a statement.

use crate::ast::SymbolicName;
use smol_str::SmolStr;

/// Any Cypher expression supported by the builder.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Static literal, inlined into the query text.
    Literal(Literal),

    /// Parameter reference (`$name`).
    Parameter(SymbolicName),

    /// Variable reference (`n`).
    Variable(SymbolicName),

    /// Property lookup (`subject.key`).
    Property(Box<Expression>, SymbolicName),

    /// Function invocation (`count(*)`).
    Function(FunctionInvocation),

    /// The `*` wildcard, in projections and `count(*)`.
    Asterisk,

    /// Comparison (`left = right`, `left STARTS WITH right`, ...).
    Comparison(ComparisonOperator, Box<Expression>, Box<Expression>),

    /// Boolean combination (`left AND right`).
    Logical(LogicalOperator, Box<Expression>, Box<Expression>),

    /// Prefix or postfix unary operation (`NOT x`, `x IS NULL`).
    Unary(UnaryOperator, Box<Expression>),

    /// Parenthesized expression.
    Nested(Box<Expression>),

    /// Aliased projection item (`expr AS alias`).
    Aliased(Box<Expression>, SymbolicName),
}

impl Expression {
    /// Returns `true` if this expression is a condition combined with `operator`.
    pub fn is_logical(&self, operator: LogicalOperator) -> bool {
        matches!(self, Expression::Logical(op, _, _) if *op == operator)
    }

    /// Returns the parameter name if this is a parameter reference.
    pub fn parameter_name(&self) -> Option<&SymbolicName> {
        match self {
            Expression::Parameter(name) => Some(name),
            _ => None,
        }
    }
}

/// Static literal values.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(SmolStr),
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    StartsWith,
    EndsWith,
    Contains,
    /// Regular expression match (`=~`).
    Matches,
}

impl ComparisonOperator {
    /// Returns the operator as written in Cypher.
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "=",
            ComparisonOperator::NotEq => "<>",
            ComparisonOperator::Lt => "<",
            ComparisonOperator::LtEq => "<=",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::GtEq => ">=",
            ComparisonOperator::StartsWith => "STARTS WITH",
            ComparisonOperator::EndsWith => "ENDS WITH",
            ComparisonOperator::Contains => "CONTAINS",
            ComparisonOperator::Matches => "=~",
        }
    }
}

/// Boolean connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    And,
    Or,
    Xor,
}

impl LogicalOperator {
    /// Returns the operator as written in Cypher.
    pub fn as_str(self) -> &'static str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
            LogicalOperator::Xor => "XOR",
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Prefix `NOT`.
    Not,
    /// Postfix `IS NULL`.
    IsNull,
    /// Postfix `IS NOT NULL`.
    IsNotNull,
}

impl UnaryOperator {
    /// Returns the operator as written in Cypher.
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOperator::Not => "NOT",
            UnaryOperator::IsNull => "IS NULL",
            UnaryOperator::IsNotNull => "IS NOT NULL",
        }
    }

    /// Prefix operators are written before their operand.
    pub fn is_prefix(self) -> bool {
        matches!(self, UnaryOperator::Not)
    }
}

/// Any operator, as handed to [`Visitor::enter_operator`].
///
/// [`Visitor::enter_operator`]: crate::ast::visitor::Visitor::enter_operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Comparison(ComparisonOperator),
    Logical(LogicalOperator),
    Unary(UnaryOperator),
}

impl Operator {
    /// Returns the operator as written in Cypher.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Comparison(op) => op.as_str(),
            Operator::Logical(op) => op.as_str(),
            Operator::Unary(op) => op.as_str(),
        }
    }
}

/// A function call such as `count(DISTINCT n)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionInvocation {
    pub(crate) name: SmolStr,
    pub(crate) distinct: bool,
    pub(crate) arguments: Vec<Expression>,
}

impl FunctionInvocation {
    /// Creates an invocation of `name` with the given arguments.
    pub fn new(name: impl Into<SmolStr>, arguments: Vec<Expression>) -> Self {
        Self {
            name: name.into(),
            distinct: false,
            arguments,
        }
    }

    /// Marks the invocation as `DISTINCT`, for aggregates.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    pub fn arguments(&self) -> &[Expression] {
        &self.arguments
    }
}
