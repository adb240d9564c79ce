//! Function invocations.

use crate::ast::{Expression, FunctionInvocation};

fn invoke(name: &'static str, arguments: Vec<Expression>) -> Expression {
    Expression::Function(FunctionInvocation::new(name, arguments))
}

/// `count(expression)`; pass [`asterisk`](super::asterisk) for `count(*)`.
pub fn count(expression: Expression) -> Expression {
    invoke("count", vec![expression])
}

/// `count(DISTINCT expression)`
pub fn count_distinct(expression: Expression) -> Expression {
    Expression::Function(FunctionInvocation::new("count", vec![expression]).distinct())
}

/// `id(node)`, the internal identifier of a node or relationship.
pub fn id(element: Expression) -> Expression {
    invoke("id", vec![element])
}

pub fn to_lower(expression: Expression) -> Expression {
    invoke("toLower", vec![expression])
}

pub fn collect(expression: Expression) -> Expression {
    invoke("collect", vec![expression])
}

pub fn sum(expression: Expression) -> Expression {
    invoke("sum", vec![expression])
}

pub fn min(expression: Expression) -> Expression {
    invoke("min", vec![expression])
}

pub fn max(expression: Expression) -> Expression {
    invoke("max", vec![expression])
}

pub fn avg(expression: Expression) -> Expression {
    invoke("avg", vec![expression])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::asterisk;

    #[test]
    fn count_star() {
        match count(asterisk()) {
            Expression::Function(call) => {
                assert_eq!(call.name(), "count");
                assert!(!call.is_distinct());
                assert_eq!(call.arguments(), &[Expression::Asterisk]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn distinct_flag() {
        let Expression::Function(call) = count_distinct(asterisk()) else {
            panic!("expected a function");
        };
        assert!(call.is_distinct());
    }
}
