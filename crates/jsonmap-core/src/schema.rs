pub mod app;

mod builder;
pub use builder::{Builder, ColumnConfig, ConfigField, ConfigureField};

pub mod db;

use app::ModelId;
use db::Table;

use indexmap::IndexMap;
use std::sync::Arc;

/// Read access to the table metadata of configured models.
pub trait Catalog: Send + Sync {
    /// Returns the table a model maps to, configuring the model on first
    /// access when the implementation is lazy.
    fn table(&self, model: ModelId) -> Option<Arc<Table>>;
}

/// Tables of an eagerly configured set of models.
#[derive(Debug, Default)]
pub struct Schema {
    pub tables: IndexMap<ModelId, Arc<Table>>,
}

impl Schema {
    pub fn get(&self, model: ModelId) -> Option<&Table> {
        self.tables.get(&model).map(|table| &**table)
    }
}

impl Catalog for Schema {
    fn table(&self, model: ModelId) -> Option<Arc<Table>> {
        self.tables.get(&model).cloned()
    }
}
