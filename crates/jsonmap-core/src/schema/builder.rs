use super::{app, db, Schema};
use crate::{driver::Dialect, Error, Result};

use indexmap::IndexMap;
use std::{fmt, sync::Arc};

/// Column settings under construction, handed to each [`ConfigureField`]
/// handler in turn.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnConfig {
    /// Name of the column in the database
    pub name: String,

    /// Explicitly requested storage type. `None` lets the builder derive one
    /// from the field type.
    pub storage_ty: Option<db::Type>,

    /// The field is marked to be stored as a JSON document
    pub json_map: bool,
}

/// A field configuration event.
pub struct ConfigField<'a> {
    pub model: &'a app::Model,
    pub field: &'a app::Field,
    pub dialect: Dialect,
    pub column: &'a mut ColumnConfig,
}

/// Handler invoked for every field of a model while the model's table is
/// being configured.
pub trait ConfigureField: Send + Sync {
    fn configure_field(&self, cfg: &mut ConfigField<'_>) -> Result<()>;
}

/// Turns application models into database tables.
pub struct Builder {
    dialect: Dialect,

    /// Field configuration handlers, run in registration order
    handlers: Vec<Arc<dyn ConfigureField>>,
}

impl Builder {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            handlers: vec![],
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn handler(&mut self, handler: Arc<dyn ConfigureField>) -> &mut Self {
        self.handlers.push(handler);
        self
    }

    /// Configures the table of a single model.
    pub fn table(&self, model: &app::Model) -> Result<db::Table> {
        let mut columns = IndexMap::with_capacity(model.fields.len());

        for field in &model.fields {
            if columns.contains_key(&field.name) {
                return Err(Error::invalid_schema(format!(
                    "duplicate field `{}` in model `{}`",
                    field.name,
                    model.id.name()
                )));
            }

            let column = self
                .column(model, field)
                .map_err(|err| err.context(Error::invalid_schema(format!(
                    "failed to configure `{}.{}`",
                    model.id.name(),
                    field.name
                ))))?;

            columns.insert(field.name.clone(), column);
        }

        Ok(db::Table {
            model: model.id,
            name: model.table_name.clone(),
            columns,
        })
    }

    /// Configures the tables of a set of models at once.
    pub fn build<'a>(&self, models: impl IntoIterator<Item = &'a app::Model>) -> Result<Schema> {
        let mut tables = IndexMap::new();

        for model in models {
            tables.insert(model.id, Arc::new(self.table(model)?));
        }

        Ok(Schema { tables })
    }

    fn column(&self, model: &app::Model, field: &app::Field) -> Result<db::Column> {
        let mut column = ColumnConfig {
            name: field.name.clone(),
            storage_ty: field.storage_ty.clone(),
            json_map: field.json_map,
        };

        for handler in &self.handlers {
            handler.configure_field(&mut ConfigField {
                model,
                field,
                dialect: self.dialect,
                column: &mut column,
            })?;
        }

        let storage_ty = db::Type::from_app(&field.ty, column.storage_ty.as_ref())?;

        Ok(db::Column {
            name: column.name,
            field: field.name.clone(),
            ty: field.ty.clone(),
            storage_ty,
            nullable: field.nullable,
        })
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Builder")
            .field("dialect", &self.dialect)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
