use super::Db;
use crate::Model;

use jsonmap_core::{stmt::Expr, Result};
use jsonmap_sql::{stmt, Statement};

use std::marker::PhantomData;

/// A query over all rows of `M`, optionally filtered.
#[derive(Debug)]
pub struct Select<'a, M> {
    db: &'a Db,
    stmt: stmt::Select,
    _p: PhantomData<M>,
}

impl<'a, M: Model> Select<'a, M> {
    pub(super) fn new(db: &'a Db) -> Self {
        Self {
            db,
            stmt: stmt::Select::new(M::id()),
            _p: PhantomData,
        }
    }

    /// ANDs a predicate onto the filter.
    pub fn filter(mut self, expr: impl Into<Expr>) -> Self {
        self.stmt.and_filter(expr.into());
        self
    }

    pub fn to_sql(&self) -> Result<String> {
        self.db.table::<M>()?;
        self.db
            .serializer()
            .serialize(&Statement::Select(self.stmt.clone()))
    }
}
