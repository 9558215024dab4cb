#[macro_use]
mod fmt;
use fmt::{Comma, Delimited, ToSql};

mod expr;

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod statement;
mod value;

use crate::{hook::ParseContext, ParseExpression, Statement};

use jsonmap_core::{
    driver::Dialect,
    schema::{db::Table, Catalog},
    stmt::{Expr, Type, Value},
    Error, Result,
};
use std::{fmt as std_fmt, sync::Arc};

/// Serializes statements and predicate fragments to SQL for one dialect.
pub struct Serializer<'a> {
    /// Resolves the tables of the models a statement references
    catalog: &'a dyn Catalog,

    /// The dialect the SQL is generated for
    dialect: Dialect,

    /// The database flavor handles quoting and literal differences between
    /// dialects.
    flavor: Flavor,

    /// Alias of the queried table
    alias: String,

    /// Translation hooks, consulted for every predicate node before the
    /// default translation.
    hooks: Vec<Arc<dyn ParseExpression>>,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// False when translating through `free_parse`
    hooks: bool,
}

impl<'a> Serializer<'a> {
    pub fn new(dialect: Dialect, catalog: &'a dyn Catalog) -> Serializer<'a> {
        Serializer {
            catalog,
            dialect,
            flavor: Flavor::from(dialect),
            alias: "a".to_string(),
            hooks: vec![],
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    pub fn hooks(mut self, hooks: Vec<Arc<dyn ParseExpression>>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn catalog(&self) -> &'a dyn Catalog {
        self.catalog
    }

    /// Serializes a statement.
    pub fn serialize(&self, stmt: &Statement) -> Result<String> {
        let mut ret = String::new();

        let mut f = Formatter {
            serializer: self,
            dst: &mut ret,
            hooks: true,
        };

        stmt.to_sql(&mut f)?;

        Ok(ret)
    }

    /// Translates a predicate node, giving translation hooks a chance at
    /// every node.
    pub fn serialize_expr(&self, expr: &Expr) -> Result<String> {
        self.render(expr, true)
    }

    /// Translates a predicate node with the default translation only. Hooks
    /// are not consulted for the node or any node below it.
    pub fn free_parse(&self, expr: &Expr) -> Result<String> {
        self.render(expr, false)
    }

    /// Formats a constant as an inline SQL literal. When `ty` is given the
    /// value is converted to it first.
    pub fn format_sql(&self, value: &Value, ty: Option<&Type>) -> Result<String> {
        let mut ret = String::new();

        let mut f = Formatter {
            serializer: self,
            dst: &mut ret,
            hooks: false,
        };

        match ty {
            Some(ty) => (&ty.cast(value.clone())?).to_sql(&mut f)?,
            None => value.to_sql(&mut f)?,
        }

        Ok(ret)
    }

    /// Column reference for a field of the queried model.
    pub fn column_ref(&self, table: &Table, field: &str) -> Result<String> {
        let Some(column) = table.column(field) else {
            return Err(Error::invalid_schema(format!(
                "table `{}` has no column for field `{field}`",
                table.name
            )));
        };

        let mut ret = String::new();
        let mut f = Formatter {
            serializer: self,
            dst: &mut ret,
            hooks: false,
        };
        let alias = Ident(&self.alias);
        let name = Ident(&column.name);
        fmt!(&mut f, alias "." name);

        Ok(ret)
    }

    fn render(&self, expr: &Expr, hooks: bool) -> Result<String> {
        let mut ret = String::new();

        let mut f = Formatter {
            serializer: self,
            dst: &mut ret,
            hooks,
        };

        expr.to_sql(&mut f)?;

        Ok(ret)
    }

    /// Runs translation hooks for a node. The first hook to produce a result
    /// wins.
    fn hook(&self, expr: &Expr) -> Result<Option<String>> {
        for hook in &self.hooks {
            let mut cx = ParseContext::new(self, expr);
            hook.parse_expression(&mut cx)?;

            if let Some(result) = cx.into_result() {
                tracing::trace!(sql = %result, "translation hook replaced node");
                return Ok(Some(result));
            }
        }

        Ok(None)
    }

    fn table_for(&self, expr: &Expr) -> Result<Arc<Table>> {
        let Expr::Arg(arg) = expr else {
            return Err(Error::unsupported_expression(format!(
                "expected the query argument, found {expr:?}"
            )));
        };

        self.catalog.table(arg.model).ok_or_else(|| {
            Error::invalid_schema(format!("model `{}` is not registered", arg.model.name()))
        })
    }
}

impl std_fmt::Debug for Serializer<'_> {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.debug_struct("Serializer")
            .field("dialect", &self.dialect)
            .field("alias", &self.alias)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
