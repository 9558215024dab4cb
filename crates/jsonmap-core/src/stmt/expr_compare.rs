use super::{BinaryOp, Expr};

/// `lhs <op> rhs`. The translator rewrites enum equalities of this shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
}

/// `expr IS NULL`, or `IS NOT NULL` when `negate` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprIsNull {
    pub negate: bool,
    pub expr: Box<Expr>,
}

/// Membership of `expr` in the list produced by `list`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprInList {
    pub expr: Box<Expr>,
    pub list: Box<Expr>,
}

macro_rules! comparisons {
    ( $( $name:ident => $op:ident, )* ) => {
        impl Expr {
            $(
                pub fn $name(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
                    Self::binary_op(lhs, BinaryOp::$op, rhs)
                }
            )*
        }
    };
}

comparisons! {
    eq => Eq,
    ne => Ne,
    ge => Ge,
    gt => Gt,
    le => Le,
    lt => Lt,
}

impl Expr {
    pub fn binary_op(lhs: impl Into<Self>, op: BinaryOp, rhs: impl Into<Self>) -> Self {
        Self::BinaryOp(ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        })
    }

    pub fn is_eq(&self) -> bool {
        matches!(self, Self::BinaryOp(expr) if expr.op.is_eq())
    }

    pub fn is_null(expr: impl Into<Self>) -> Self {
        Self::null_check(expr.into(), false)
    }

    pub fn is_not_null(expr: impl Into<Self>) -> Self {
        Self::null_check(expr.into(), true)
    }

    fn null_check(expr: Self, negate: bool) -> Self {
        Self::IsNull(ExprIsNull {
            negate,
            expr: Box::new(expr),
        })
    }

    pub fn in_list(expr: impl Into<Self>, list: impl Into<Self>) -> Self {
        Self::InList(ExprInList {
            expr: Box::new(expr.into()),
            list: Box::new(list.into()),
        })
    }
}
