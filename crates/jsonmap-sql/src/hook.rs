//! Translation hooks.
//!
//! Before translating a predicate node, the serializer hands it to every
//! registered [`ParseExpression`] hook. A hook that recognizes the node sets a
//! result, which replaces the default translation of the node and everything
//! below it.

use crate::Serializer;

use jsonmap_core::{
    driver::Dialect,
    schema::Catalog,
    stmt::{Expr, Type, Value},
    Result,
};

pub trait ParseExpression: Send + Sync {
    /// Inspects `cx.expr()` and optionally sets a SQL result.
    ///
    /// Errors abort the whole translation. Hooks that merely do not recognize
    /// a node leave the result unset instead.
    fn parse_expression(&self, cx: &mut ParseContext<'_>) -> Result<()>;
}

/// The node under translation, plus access to the serializer's default
/// translation and literal formatting.
pub struct ParseContext<'a> {
    serializer: &'a Serializer<'a>,
    expr: &'a Expr,
    result: Option<String>,
}

impl<'a> ParseContext<'a> {
    pub(crate) fn new(serializer: &'a Serializer<'a>, expr: &'a Expr) -> Self {
        Self {
            serializer,
            expr,
            result: None,
        }
    }

    /// The node being translated.
    pub fn expr(&self) -> &'a Expr {
        self.expr
    }

    pub fn dialect(&self) -> Dialect {
        self.serializer.dialect()
    }

    pub fn catalog(&self) -> &'a dyn Catalog {
        self.serializer.catalog()
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn set_result(&mut self, sql: impl Into<String>) {
        self.result = Some(sql.into());
    }

    pub fn clear_result(&mut self) {
        self.result = None;
    }

    /// Translates `expr` with the default translation, bypassing all hooks.
    pub fn free_parse(&self, expr: &Expr) -> Result<String> {
        self.serializer.free_parse(expr)
    }

    /// Formats a constant as an inline SQL literal.
    pub fn format_sql(&self, value: &Value, ty: Option<&Type>) -> Result<String> {
        self.serializer.format_sql(value, ty)
    }

    pub(crate) fn into_result(self) -> Option<String> {
        self.result
    }
}
