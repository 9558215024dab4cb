//! Read-only traversal of predicate trees.
//!
//! Leaf hooks are overridable; interior nodes are walked through
//! [`Expr::for_each_operand`].

use super::{Expr, ExprArg, ExprProperty, Value};

pub trait Visit {
    fn visit_expr(&mut self, i: &Expr) {
        visit_expr(self, i);
    }

    fn visit_expr_arg(&mut self, i: &ExprArg) {
        let _ = i;
    }

    fn visit_expr_property(&mut self, i: &ExprProperty) {
        self.visit_expr(&i.base);
    }

    fn visit_value(&mut self, i: &Value) {
        let _ = i;
    }
}

pub fn visit_expr<V>(v: &mut V, node: &Expr)
where
    V: Visit + ?Sized,
{
    match node {
        Expr::Arg(expr) => v.visit_expr_arg(expr),
        Expr::Property(expr) => v.visit_expr_property(expr),
        Expr::Value(value) => v.visit_value(value),
        _ => node.for_each_operand(|operand| v.visit_expr(operand)),
    }
}

impl Expr {
    /// Calls `f` on each direct operand, left to right. A call's receiver
    /// comes before its arguments.
    pub fn for_each_operand(&self, mut f: impl FnMut(&Expr)) {
        match self {
            Expr::And(expr) => expr.operands.iter().for_each(f),
            Expr::Or(expr) => expr.operands.iter().for_each(f),
            Expr::List(expr) => expr.items.iter().for_each(f),
            Expr::BinaryOp(expr) => {
                f(&expr.lhs);
                f(&expr.rhs);
            }
            Expr::InList(expr) => {
                f(&expr.expr);
                f(&expr.list);
            }
            Expr::Index(expr) => {
                f(&expr.base);
                f(&expr.index);
            }
            Expr::Call(expr) => {
                if let Some(receiver) = &expr.receiver {
                    f(receiver);
                }
                expr.args.iter().for_each(f);
            }
            Expr::Cast(expr) => f(&expr.expr),
            Expr::IsNull(expr) => f(&expr.expr),
            Expr::Not(expr) => f(&expr.expr),
            Expr::Property(expr) => f(&expr.base),
            Expr::Arg(_) | Expr::Value(_) => {}
        }
    }
}
