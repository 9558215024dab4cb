use super::{BinaryOp, Expr, Value};
use crate::{Error, Result};

use std::cmp::Ordering;

impl Expr {
    /// Folds an expression that does not depend on the query row into a
    /// constant value.
    pub fn eval_const(&self) -> Result<Value> {
        match self {
            Expr::Value(value) => Ok(value.clone()),
            Expr::List(expr) => Ok(Value::List(
                expr.items
                    .iter()
                    .map(Expr::eval_const)
                    .collect::<Result<_>>()?,
            )),
            Expr::Cast(expr) => expr.ty.cast(expr.expr.eval_const()?),
            Expr::And(expr) => {
                for operand in &expr.operands {
                    if !operand.eval_const_bool()? {
                        return Ok(Value::Bool(false));
                    }
                }
                Ok(Value::Bool(true))
            }
            Expr::Or(expr) => {
                for operand in &expr.operands {
                    if operand.eval_const_bool()? {
                        return Ok(Value::Bool(true));
                    }
                }
                Ok(Value::Bool(false))
            }
            Expr::Not(expr) => Ok(Value::Bool(!expr.expr.eval_const_bool()?)),
            Expr::BinaryOp(expr) => {
                let lhs = expr.lhs.eval_const()?;
                let rhs = expr.rhs.eval_const()?;
                eval_binary_op(expr.op, &lhs, &rhs).map(Value::Bool)
            }
            Expr::IsNull(expr) => {
                let is_null = expr.expr.eval_const()?.is_null();
                Ok(Value::Bool(is_null != expr.negate))
            }
            Expr::InList(expr) => {
                let needle = expr.expr.eval_const()?;
                let Value::List(items) = expr.list.eval_const()? else {
                    return Err(Error::expression_evaluation_failed(
                        "IN list requires a list operand",
                    ));
                };
                Ok(Value::Bool(items.iter().any(|item| {
                    item == &needle || item.compare(&needle) == Some(Ordering::Equal)
                })))
            }
            Expr::Arg(_) | Expr::Property(_) if self.references_arg() => Err(
                Error::expression_evaluation_failed("expression references the query argument"),
            ),
            Expr::Property(expr) => Err(Error::expression_evaluation_failed(format!(
                "cannot read property `{}` of a constant",
                expr.name
            ))),
            Expr::Call(expr) => Err(Error::expression_evaluation_failed(format!(
                "cannot evaluate call to `{}`",
                expr.method
            ))),
            Expr::Index(_) => Err(Error::expression_evaluation_failed(
                "cannot evaluate indexer access",
            )),
            Expr::Arg(_) => Err(Error::expression_evaluation_failed(
                "expression references the query argument",
            )),
        }
    }

    fn eval_const_bool(&self) -> Result<bool> {
        match self.eval_const()? {
            Value::Bool(value) => Ok(value),
            value => Err(Error::type_conversion(value, "Bool")),
        }
    }
}

fn eval_binary_op(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<bool> {
    match op {
        BinaryOp::Eq => Ok(lhs == rhs || lhs.compare(rhs) == Some(Ordering::Equal)),
        BinaryOp::Ne => Ok(lhs != rhs && lhs.compare(rhs) != Some(Ordering::Equal)),
        _ => {
            let Some(ordering) = lhs.compare(rhs) else {
                return Err(Error::expression_evaluation_failed(format!(
                    "cannot compare {} with {}",
                    lhs.kind_name(),
                    rhs.kind_name()
                )));
            };

            Ok(match op {
                BinaryOp::Ge => ordering.is_ge(),
                BinaryOp::Gt => ordering.is_gt(),
                BinaryOp::Le => ordering.is_le(),
                BinaryOp::Lt => ordering.is_lt(),
                BinaryOp::Eq | BinaryOp::Ne => unreachable!(),
            })
        }
    }
}
