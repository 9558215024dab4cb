//! Enum comparisons for dialects that store enums as integers and cannot
//! compare them against the enum's name.

use super::{path, JsonMap};

use jsonmap_core::{
    stmt::{BinaryOp, Expr, ExprBinaryOp, ExprCall, Type, Value},
    Result,
};
use jsonmap_sql::ParseContext;

/// Maximum number of items in one `IN` list.
const IN_LIST_CHUNK: usize = 500;

/// Rewrites enum equality and enum `contains` checks. Returns `true` when the
/// node was recognized, whether or not a result was produced.
pub(super) fn rewrite(map: &JsonMap, cx: &mut ParseContext<'_>) -> Result<bool> {
    match cx.expr() {
        Expr::BinaryOp(expr) if expr.op == BinaryOp::Eq => eq(map, cx, expr),
        Expr::Call(expr) if expr.is_method("contains") => contains(map, cx, expr),
        _ => Ok(false),
    }
}

fn eq(map: &JsonMap, cx: &mut ParseContext<'_>, expr: &ExprBinaryOp) -> Result<bool> {
    let lhs = expr.lhs.uncast();
    let rhs = expr.rhs.uncast();

    if !lhs.is_enum() || !rhs.is_enum() {
        return Ok(false);
    }

    let mut lhs_sql = operand(map, cx, lhs)?;
    let mut rhs_sql = operand(map, cx, rhs)?;

    match (&lhs_sql, &rhs_sql) {
        (Some(_), None) if !rhs.references_arg() => rhs_sql = literal(cx, rhs)?,
        (None, Some(_)) if !lhs.references_arg() => lhs_sql = literal(cx, lhs)?,
        _ => {}
    }

    if let (Some(lhs), Some(rhs)) = (lhs_sql, rhs_sql) {
        cx.set_result(format!("{lhs} = {rhs}"));
    }

    Ok(true)
}

fn contains(map: &JsonMap, cx: &mut ParseContext<'_>, expr: &ExprCall) -> Result<bool> {
    let (collection, item) = match (&expr.receiver, &expr.args[..]) {
        (Some(receiver), [item]) => {
            if receiver.ty().is_bytes() {
                return Ok(false);
            }
            (&**receiver, item)
        }
        (None, [collection, item]) => {
            if collection.ty().is_string() {
                return Ok(false);
            }
            (collection, item)
        }
        _ => return Ok(false),
    };

    let item = item.uncast();
    if !item.is_enum() {
        return Ok(false);
    }

    let Some(lhs) = operand(map, cx, item)? else {
        return Ok(true);
    };

    if collection.references_arg() {
        return Ok(true);
    }

    let items = match collection.eval_const() {
        Ok(Value::List(items)) => items,
        Ok(value) => {
            tracing::trace!(kind = value.kind_name(), "`contains` collection is not a list");
            return Ok(true);
        }
        Err(err) => {
            tracing::trace!(%err, "`contains` collection is not constant");
            return Ok(true);
        }
    };

    if items.is_empty() {
        cx.set_result("1 = 0");
        return Ok(true);
    }

    let ty = Type::list(Type::I32);
    let mut lists = Vec::with_capacity(items.len().div_ceil(IN_LIST_CHUNK));
    for chunk in items.chunks(IN_LIST_CHUNK) {
        let list = cx.format_sql(&Value::List(chunk.to_vec()), Some(&ty))?;
        lists.push(format!("{lhs} in {list}"));
    }

    if lists.len() == 1 {
        cx.set_result(lists.remove(0));
    } else {
        cx.set_result(format!("({})", lists.join(" \r\n OR ")));
    }

    Ok(true)
}

/// SQL for a property operand, if it resolves to a column or JSON path.
fn operand(map: &JsonMap, cx: &ParseContext<'_>, expr: &Expr) -> Result<Option<String>> {
    if !expr.is_property() {
        return Ok(None);
    }

    path::resolve(map, cx, expr)
}

/// Folds a constant operand into an integer literal.
fn literal(cx: &ParseContext<'_>, expr: &Expr) -> Result<Option<String>> {
    match expr.eval_const() {
        Ok(value) => cx.format_sql(&value, Some(&Type::I32)).map(Some),
        Err(err) => {
            tracing::trace!(%err, "enum operand is not constant");
            Ok(None)
        }
    }
}
