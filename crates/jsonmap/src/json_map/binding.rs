use super::{JsonMap, StorageShape, TypeWriteHook};

use jsonmap_core::{
    schema::{ConfigField, ConfigureField},
    stmt::{Type, TypeObject},
    Conversions, Result,
};

use std::sync::Arc;

/// Decides the column of every JSON-mapped field as models are configured.
pub(super) struct ColumnBinding {
    map: JsonMap,

    /// Conversions of the database this handler is attached to
    conversions: Arc<Conversions>,
}

impl ColumnBinding {
    pub(super) fn new(map: JsonMap, conversions: Arc<Conversions>) -> Self {
        Self { map, conversions }
    }
}

impl ConfigureField for ColumnBinding {
    fn configure_field(&self, cfg: &mut ConfigField<'_>) -> Result<()> {
        let field = cfg.field;

        if !cfg.column.json_map && !self.map.is_toggled(cfg.model.id, &field.name) {
            return Ok(());
        }

        let ty = match &field.ty {
            Type::Object(ty) => ty.clone(),
            Type::List(item) => match TypeObject::list_of(item) {
                Some(ty) => ty,
                None => {
                    tracing::trace!(
                        model = cfg.model.id.name(),
                        field = %field.name,
                        ?item,
                        "marked list has no document type; declare it as a `Vec` object"
                    );
                    return Ok(());
                }
            },
            ty if self.conversions.is_single_column(ty) => return Ok(()),
            ty => {
                tracing::trace!(
                    model = cfg.model.id.name(),
                    field = %field.name,
                    ?ty,
                    "field marked JSON-mapped is not an object type; skipping"
                );
                return Ok(());
            }
        };

        let mut install = self.map.install();

        if cfg.column.storage_ty.is_none() {
            let shape = *install
                .shapes
                .entry((ty.key(), cfg.dialect))
                .or_insert_with(|| StorageShape::for_dialect(cfg.dialect));
            cfg.column.storage_ty = Some(shape.db_type());
        }

        if self.map.registry().try_register(&ty) {
            Arc::make_mut(&mut install.write_hooks)
                .push(Arc::new(TypeWriteHook::new(*self.map.codec(), ty.clone())));
            tracing::debug!(ty = ty.name(), "registered JSON-mapped type");
        }

        self.conversions.mark_single_column(ty.key());

        Ok(())
    }
}
