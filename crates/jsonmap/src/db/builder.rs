use super::{Aop, Db, DbId, Shared};
use crate::Model;

use jsonmap_core::{
    driver::Dialect,
    schema::app::{self, ModelId},
    Conversions, Error, Result,
};

use indexmap::IndexMap;
use std::sync::{Arc, Mutex};

#[derive(Debug)]
pub struct Builder {
    dialect: Dialect,

    alias: String,

    models: IndexMap<ModelId, app::Model>,

    conversions: Option<Arc<Conversions>>,
}

impl Builder {
    pub fn dialect(&mut self, dialect: Dialect) -> &mut Self {
        self.dialect = dialect;
        self
    }

    /// Alias of the queried table in generated SQL. Defaults to `a`.
    pub fn alias(&mut self, alias: impl Into<String>) -> &mut Self {
        self.alias = alias.into();
        self
    }

    pub fn register<M: Model>(&mut self) -> &mut Self {
        self.models.insert(M::id(), M::schema());
        self
    }

    /// Shares a conversion pipeline with other databases.
    pub fn conversions(&mut self, conversions: Arc<Conversions>) -> &mut Self {
        self.conversions = Some(conversions);
        self
    }

    pub fn build(&mut self) -> Result<Db> {
        for (id, model) in &self.models {
            if model.id != *id {
                return Err(Error::invalid_schema(format!(
                    "model `{}` declares the id of `{}`",
                    id.name(),
                    model.id.name()
                )));
            }
        }

        let db = Db {
            shared: Arc::new(Shared {
                id: DbId::next(),
                dialect: self.dialect,
                alias: self.alias.clone(),
                models: self.models.clone(),
                tables: Mutex::default(),
                aop: Aop::default(),
                conversions: self.conversions.clone().unwrap_or_default(),
                overrides: Arc::default(),
            }),
        };

        tracing::debug!(
            id = ?db.id(),
            dialect = %self.dialect,
            models = self.models.len(),
            "built database"
        );

        Ok(db)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dialect: Dialect::Sqlite,
            alias: "a".to_string(),
            models: IndexMap::new(),
            conversions: None,
        }
    }
}
