use super::{enum_rewrite, path, JsonMap};

use jsonmap_core::Result;
use jsonmap_sql::{ParseContext, ParseExpression};

/// Predicate translation hook.
pub(super) struct Translate {
    map: JsonMap,
}

impl Translate {
    pub(super) fn new(map: JsonMap) -> Self {
        Self { map }
    }
}

impl ParseExpression for Translate {
    fn parse_expression(&self, cx: &mut ParseContext<'_>) -> Result<()> {
        let expr = cx.expr();

        if !expr.references_arg() {
            return Ok(());
        }

        if cx.dialect().is_mysql() && enum_rewrite::rewrite(&self.map, cx)? {
            return Ok(());
        }

        if expr.is_property() {
            if let Some(sql) = path::resolve(&self.map, cx, expr)? {
                cx.set_result(sql);
            }
        }

        Ok(())
    }
}
