use super::{flavor::Flavor, Comma, Delimited, Formatter, ToSql};

use jsonmap_core::{
    stmt::{self, ExprCall},
    Error, Result,
};

impl ToSql for &stmt::Expr {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        use stmt::Expr::*;

        if f.hooks {
            if let Some(sql) = f.serializer.hook(self)? {
                f.dst.push_str(&sql);
                return Ok(());
            }
        }

        match self {
            And(expr) => {
                let operands = expr.operands.iter().map(Grouped);
                fmt!(f, Delimited(operands, " AND "));
            }
            Arg(_) => {
                return Err(Error::unsupported_expression(
                    "the query argument cannot be used as a value",
                ))
            }
            BinaryOp(expr) => {
                // Comparisons against null need `IS NULL`
                match (expr.op, &*expr.lhs, &*expr.rhs) {
                    (op @ (stmt::BinaryOp::Eq | stmt::BinaryOp::Ne), operand, null)
                    | (op @ (stmt::BinaryOp::Eq | stmt::BinaryOp::Ne), null, operand)
                        if null.is_value_null() =>
                    {
                        let check = if op.is_eq() { " IS NULL" } else { " IS NOT NULL" };
                        fmt!(f, operand check);
                    }
                    (op, lhs, rhs) => {
                        fmt!(f, lhs " " op " " rhs);
                    }
                }
            }
            Call(expr) => call(expr, f)?,
            Cast(expr) => {
                fmt!(f, expr.expr);
            }
            Index(_) => {
                return Err(Error::unsupported_expression(
                    "indexer access has no SQL translation",
                ))
            }
            InList(expr) => {
                fmt!(f, expr.expr " IN " expr.list);
            }
            IsNull(expr) => {
                if expr.negate {
                    fmt!(f, expr.expr " IS NOT NULL");
                } else {
                    fmt!(f, expr.expr " IS NULL");
                }
            }
            List(expr) => {
                fmt!(f, "(" Comma(&expr.items) ")");
            }
            Not(expr) => {
                fmt!(f, "NOT (" expr.expr ")");
            }
            Or(expr) => {
                fmt!(f, Delimited(&expr.operands, " OR "));
            }
            Property(expr) if expr.is_field() => {
                let table = f.serializer.table_for(&expr.base)?;
                let column = f.serializer.column_ref(&table, &expr.name)?;
                f.dst.push_str(&column);
            }
            Property(expr) if expr.base.ty().is_string() && is_length(&expr.name) => {
                let func = match f.serializer.flavor {
                    Flavor::SqlServer => "LEN(",
                    _ => "LENGTH(",
                };
                fmt!(f, func expr.base ")");
            }
            Property(expr) => {
                return Err(Error::unsupported_expression(format!(
                    "property `{}` is not a column; nested properties can only be queried \
                     inside JSON-mapped fields",
                    expr.name
                )))
            }
            Value(value) => value.to_sql(f)?,
        }

        Ok(())
    }
}

impl ToSql for stmt::BinaryOp {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push_str(match self {
            stmt::BinaryOp::Eq => "=",
            stmt::BinaryOp::Gt => ">",
            stmt::BinaryOp::Ge => ">=",
            stmt::BinaryOp::Lt => "<",
            stmt::BinaryOp::Le => "<=",
            stmt::BinaryOp::Ne => "<>",
        });
        Ok(())
    }
}

/// Parenthesizes disjunctions nested in a conjunction.
struct Grouped<'a>(&'a stmt::Expr);

impl ToSql for Grouped<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        if matches!(self.0, stmt::Expr::Or(_)) {
            fmt!(f, "(" self.0 ")");
        } else {
            fmt!(f, self.0);
        }
        Ok(())
    }
}

fn call(expr: &ExprCall, f: &mut Formatter<'_>) -> Result<()> {
    if !expr.is_method("contains") {
        return Err(Error::unsupported_expression(format!(
            "method `{}` has no SQL translation",
            expr.method
        )));
    }

    let (collection, item) = match (&expr.receiver, &expr.args[..]) {
        (Some(receiver), [item]) => (&**receiver, item),
        (None, [collection, item]) => (collection, item),
        _ => {
            return Err(Error::unsupported_expression(format!(
                "`contains` takes one item, got {} arguments",
                expr.args.len()
            )))
        }
    };

    // Substring search
    if collection.ty().is_string() {
        if item.references_arg() {
            return Err(Error::unsupported_expression(
                "substring search needs a constant pattern",
            ));
        }

        let stmt::Value::String(needle) = item.eval_const()? else {
            return Err(Error::unsupported_expression(
                "substring search needs a string pattern",
            ));
        };

        let pattern = stmt::Value::String(format!("%{needle}%"));
        fmt!(f, collection " LIKE " pattern);
        return Ok(());
    }

    if collection.references_arg() {
        return match collection {
            stmt::Expr::List(_) => {
                fmt!(f, item " IN " collection);
                Ok(())
            }
            _ => Err(Error::unsupported_expression(
                "`contains` over a column has no SQL translation",
            )),
        };
    }

    match collection.eval_const()? {
        // `IN ()` is not valid SQL
        stmt::Value::List(items) if items.is_empty() => {
            fmt!(f, "1 = 0");
        }
        list @ stmt::Value::List(_) => {
            fmt!(f, item " IN " list);
        }
        value => return Err(Error::type_conversion(value, "List")),
    }

    Ok(())
}

fn is_length(name: &str) -> bool {
    name.eq_ignore_ascii_case("len") || name.eq_ignore_ascii_case("length")
}
