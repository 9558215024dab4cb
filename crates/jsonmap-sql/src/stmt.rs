//! Statements the serializer can render.

use jsonmap_core::{
    schema::{app::ModelId, db::Table},
    stmt::Expr,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Statement {
    /// DDL for a configured table. Column types come from the resolved
    /// storage types, so JSON-mapped columns render as text or native JSON.
    CreateTable(CreateTable),

    /// Reads every column of a model's table.
    Select(Select),
}

#[derive(Debug, Clone)]
pub struct CreateTable {
    pub table: Arc<Table>,
}

#[derive(Debug, Clone)]
pub struct Select {
    pub model: ModelId,

    /// Predicate over the model's row, rendered as the `WHERE` clause.
    pub filter: Option<Expr>,
}

impl Statement {
    pub fn create_table(table: Arc<Table>) -> Self {
        Self::CreateTable(CreateTable { table })
    }

    pub fn select(model: ModelId) -> Self {
        Self::Select(Select::new(model))
    }
}

impl Select {
    pub fn new(model: ModelId) -> Self {
        Self {
            model,
            filter: None,
        }
    }

    /// Narrows the selection: `expr` is ANDed with any existing filter.
    pub fn and_filter(&mut self, expr: Expr) {
        let filter = match self.filter.take() {
            Some(existing) => Expr::and(existing, expr),
            None => expr,
        };
        self.filter = Some(filter);
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
