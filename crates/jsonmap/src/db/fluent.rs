use super::Db;

use jsonmap_core::{
    schema::{app::ModelId, db, ConfigField, ConfigureField},
    Result,
};

use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

/// Column settings made through [`ColumnFluent`], applied before any other
/// configuration handler.
#[derive(Debug, Default)]
pub(crate) struct Overrides {
    columns: RwLock<HashMap<(ModelId, String), ColumnOverride>>,
}

#[derive(Debug, Clone, Default)]
struct ColumnOverride {
    name: Option<String>,
    storage_ty: Option<db::Type>,
    json_map: bool,
}

impl Overrides {
    fn update(&self, model: ModelId, field: &str, f: impl FnOnce(&mut ColumnOverride)) {
        let mut columns = self
            .columns
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        f(columns.entry((model, field.to_string())).or_default());
    }
}

impl ConfigureField for Overrides {
    fn configure_field(&self, cfg: &mut ConfigField<'_>) -> Result<()> {
        let columns = self.columns.read().unwrap_or_else(PoisonError::into_inner);

        let Some(column) = columns.get(&(cfg.model.id, cfg.field.name.clone())) else {
            return Ok(());
        };

        if let Some(name) = &column.name {
            cfg.column.name = name.clone();
        }

        if let Some(storage_ty) = &column.storage_ty {
            cfg.column.storage_ty = Some(storage_ty.clone());
        }

        cfg.column.json_map |= column.json_map;

        Ok(())
    }
}

/// Fluent configuration of one model.
#[derive(Debug)]
pub struct EntityFluent<'a> {
    db: &'a Db,
    model: ModelId,
}

impl<'a> EntityFluent<'a> {
    pub(super) fn new(db: &'a Db, model: ModelId) -> Self {
        Self { db, model }
    }

    pub fn property(&self, field: impl Into<String>) -> ColumnFluent<'a> {
        ColumnFluent {
            db: self.db,
            model: self.model,
            field: field.into(),
        }
    }
}

/// Fluent configuration of one field's column.
#[derive(Debug)]
pub struct ColumnFluent<'a> {
    db: &'a Db,
    model: ModelId,
    field: String,
}

impl ColumnFluent<'_> {
    pub fn model(&self) -> ModelId {
        self.model
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Renames the column.
    pub fn name(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.update(|column| column.name = Some(name))
    }

    pub fn storage_ty(self, storage_ty: db::Type) -> Self {
        self.update(|column| column.storage_ty = Some(storage_ty))
    }

    pub(crate) fn set_json_map(self) -> Self {
        self.update(|column| column.json_map = true)
    }

    fn update(self, f: impl FnOnce(&mut ColumnOverride)) -> Self {
        if self.db.is_configured(self.model) {
            tracing::debug!(
                model = self.model.name(),
                field = %self.field,
                "model already configured; column setting has no effect"
            );
        }

        self.db.shared.overrides.update(self.model, &self.field, f);
        self
    }
}
