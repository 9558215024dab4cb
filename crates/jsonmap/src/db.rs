mod aop;
pub use aop::Aop;

mod builder;
pub use builder::Builder;

mod fluent;
pub use fluent::{ColumnFluent, EntityFluent};
pub(crate) use fluent::Overrides;

mod select;
pub use select::Select;

use crate::{Model, Record};

use jsonmap_core::{
    driver::Dialect,
    schema::{self, app, app::ModelId, db::Table, Catalog},
    stmt::{Expr, Value},
    Conversions, Error, Result,
};
use jsonmap_sql::{Serializer, Statement};

use indexmap::IndexMap;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, PoisonError,
    },
};

/// Identifies a [`Db`] instance; clones share the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DbId(u64);

impl DbId {
    fn next() -> DbId {
        static NEXT_DB_ID: AtomicU64 = AtomicU64::new(0);

        DbId(NEXT_DB_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Shared state between all `Db` clones.
struct Shared {
    id: DbId,

    dialect: Dialect,

    /// Alias of the queried table in generated SQL
    alias: String,

    /// Registered models, not yet necessarily configured
    models: IndexMap<ModelId, app::Model>,

    /// Tables of the models configured so far. A model is configured the
    /// first time anything needs its table; the result is final.
    tables: Mutex<HashMap<ModelId, Arc<Table>>>,

    /// Extension events
    aop: Aop,

    /// Row decoding and parameter binding pipeline
    conversions: Arc<Conversions>,

    /// Column settings made through the fluent API
    overrides: Arc<Overrides>,
}

/// A database handle: model metadata, configuration events and SQL
/// generation for one dialect.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn id(&self) -> DbId {
        self.shared.id
    }

    pub fn dialect(&self) -> Dialect {
        self.shared.dialect
    }

    pub fn aop(&self) -> &Aop {
        &self.shared.aop
    }

    pub fn conversions(&self) -> &Arc<Conversions> {
        &self.shared.conversions
    }

    /// Fluent configuration of a model, effective until the model is first
    /// configured.
    pub fn config_entity<M: Model>(&self) -> EntityFluent<'_> {
        EntityFluent::new(self, M::id())
    }

    /// Returns the table of a model, configuring the model on first use.
    pub fn table<M: Model>(&self) -> Result<Arc<Table>> {
        self.table_by_id(M::id())
    }

    pub fn table_by_id(&self, model: ModelId) -> Result<Arc<Table>> {
        let mut tables = self
            .shared
            .tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(table) = tables.get(&model) {
            return Ok(table.clone());
        }

        let Some(schema) = self.shared.models.get(&model) else {
            return Err(Error::invalid_schema(format!(
                "model `{}` is not registered",
                model.name()
            )));
        };

        let mut builder = schema::Builder::new(self.shared.dialect);
        builder.handler(self.shared.overrides.clone());
        for handler in self.shared.aop.configure_field_handlers() {
            builder.handler(handler);
        }

        let table = Arc::new(builder.table(schema)?);
        tracing::debug!(model = model.name(), table = %table.name, "configured model");

        tables.insert(model, table.clone());
        Ok(table)
    }

    /// Returns `true` once the model's table has been configured.
    pub fn is_configured(&self, model: ModelId) -> bool {
        self.shared
            .tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&model)
    }

    pub fn select<M: Model>(&self) -> Select<'_, M> {
        Select::new(self)
    }

    /// Translates a predicate over `M` to a SQL fragment.
    pub fn filter_sql<M: Model>(&self, filter: &Expr) -> Result<String> {
        self.table::<M>()?;
        self.serializer().serialize_expr(filter)
    }

    pub fn create_table_sql<M: Model>(&self) -> Result<String> {
        let table = self.table::<M>()?;
        self.serializer()
            .serialize(&Statement::create_table(table))
    }

    /// Builds an instance of `M` from a raw row keyed by column name.
    pub fn materialize<M: Model>(&self, mut row: Record) -> Result<M> {
        let table = self.table::<M>()?;
        let mut record = Record::new();

        for column in table.columns() {
            let raw = row.take(&column.name)?;
            let value = self.shared.conversions.read_value(raw, &column.ty)?;
            record.insert(column.field.clone(), value);
        }

        M::load(record)
    }

    /// Converts a field value into the value bound for its column.
    pub fn bind<M: Model>(&self, field: &str, value: Value) -> Result<Value> {
        let table = self.table::<M>()?;
        let Some(column) = table.column(field) else {
            return Err(Error::invalid_schema(format!(
                "model `{}` has no field `{field}`",
                M::id().name()
            )));
        };

        self.shared.conversions.bind_value(value, &column.ty)
    }

    /// Converts every field of an instance into a raw row keyed by column
    /// name.
    pub fn save<M: Model>(&self, entity: &M) -> Result<Record> {
        let table = self.table::<M>()?;
        let mut record = entity.save();
        let mut row = Record::new();

        for column in table.columns() {
            let value = record.take(&column.field)?;
            let value = self.shared.conversions.bind_value(value, &column.ty)?;
            row.insert(column.name.clone(), value);
        }

        Ok(row)
    }

    fn serializer(&self) -> Serializer<'_> {
        Serializer::new(self.shared.dialect, self)
            .alias(&self.shared.alias)
            .hooks(self.shared.aop.parse_expression_hooks())
    }
}

impl Catalog for Db {
    fn table(&self, model: ModelId) -> Option<Arc<Table>> {
        match self.table_by_id(model) {
            Ok(table) => Some(table),
            Err(err) => {
                tracing::trace!(model = model.name(), %err, "no table for model");
                None
            }
        }
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("id", &self.shared.id)
            .field("dialect", &self.shared.dialect)
            .field("models", &self.shared.models.len())
            .finish()
    }
}
