use super::JsonMap;

use jsonmap_core::{
    stmt::{Expr, Type},
    Error, Result,
};
use jsonmap_sql::{json_path, ParseContext, PathSegment};

/// Translates a property chain into a JSON-mapped column, such as
/// `arg.profile.address.city`, into the dialect's JSON path syntax.
///
/// Returns `None` when `expr` is not such a chain.
pub(super) fn resolve(map: &JsonMap, cx: &ParseContext<'_>, expr: &Expr) -> Result<Option<String>> {
    match try_resolve(map, cx, expr) {
        Ok(sql) => Ok(Some(sql)),
        Err(err) if err.is_unsupported_path() => {
            tracing::trace!(%err, "predicate node is not a JSON path");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn try_resolve(map: &JsonMap, cx: &ParseContext<'_>, expr: &Expr) -> Result<String> {
    if !expr.references_arg() {
        return Err(Error::unsupported_path("does not reference the query argument"));
    }

    // Leaf first
    let mut chain = vec![];
    let mut node = expr;

    let arg = loop {
        match node {
            Expr::Property(property) => {
                let base_ty = property.base.ty();
                if base_ty.is_basic() || base_ty.is_list() {
                    return Err(Error::unsupported_path(format!(
                        "`{}` is not a member of an object",
                        property.name
                    )));
                }

                chain.push(PathSegment::new(&property.name, &property.ty));
                node = &property.base;
            }
            Expr::Arg(arg) => break *arg,
            _ => {
                return Err(Error::unsupported_path(
                    "chain contains a node other than a property",
                ))
            }
        }
    };

    let Some(root) = chain.pop() else {
        return Err(Error::unsupported_path("not a property access"));
    };

    let Some(table) = cx.catalog().table(arg.model) else {
        return Err(Error::unsupported_path(format!(
            "model `{}` has no table",
            arg.model.name()
        )));
    };

    let Some(column) = table.column(&root.name) else {
        return Err(Error::unsupported_path(format!(
            "model `{}` has no field `{}`",
            arg.model.name(),
            root.name
        )));
    };

    match &column.ty {
        Type::Object(ty) if map.registry().is_mapped(ty) => {}
        _ => {
            return Err(Error::unsupported_path(format!(
                "field `{}` is not JSON-mapped",
                root.name
            )))
        }
    }

    let root = cx.free_parse(&Expr::property(arg, &root.name, &column.ty))?;

    if chain.is_empty() {
        return Ok(root);
    }

    let Some(style) = cx.dialect().json_style() else {
        return Err(Error::unsupported_path(format!(
            "{} has no JSON path syntax",
            cx.dialect()
        )));
    };

    chain.reverse();
    Ok(json_path::render(&root, &chain, style))
}
