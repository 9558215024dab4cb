use super::Expr;

/// Conjunction of boolean operands. An empty conjunction is `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub operands: Vec<Expr>,
}

/// Disjunction of boolean operands. An empty disjunction is `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub operands: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprNot {
    pub expr: Box<Expr>,
}

impl Expr {
    /// Joins two predicates with AND, flattening nested conjunctions so
    /// repeated `filter` calls produce one flat operand list.
    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let mut operands = vec![];
        for operand in [lhs.into(), rhs.into()] {
            match operand {
                Expr::And(nested) => operands.extend(nested.operands),
                operand => operands.push(operand),
            }
        }
        Self::and_from_vec(operands)
    }

    pub fn and_from_vec(operands: Vec<Self>) -> Self {
        Self::And(ExprAnd { operands })
    }

    pub fn or(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::or_from_vec(vec![lhs.into(), rhs.into()])
    }

    pub fn or_from_vec(operands: Vec<Self>) -> Self {
        Self::Or(ExprOr { operands })
    }

    pub fn not(expr: impl Into<Self>) -> Self {
        Self::Not(ExprNot {
            expr: Box::new(expr.into()),
        })
    }
}
