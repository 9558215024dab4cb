//! Conversion between raw column values and in-memory values.
//!
//! Every value read from a row goes through [`Conversions::read_value`] and
//! every value bound as a statement parameter goes through
//! [`Conversions::bind_value`]. Extensions register handlers that are tried,
//! in registration order, before the built-in conversions; the first handler
//! that returns `Some` decides the outcome.

use crate::{
    stmt::{Type, TypeKey, Value, ValueEnum},
    Error, Result,
};

use std::{
    collections::HashSet,
    fmt,
    sync::{Arc, PoisonError, RwLock},
};

/// Converts a raw column value into the in-memory value of a declared type.
pub trait ReadHandler: Send + Sync {
    /// Returns `None` when the handler does not apply, letting the next
    /// handler (and ultimately the built-in conversion) run.
    fn read(&self, raw: &Value, ty: &Type) -> Option<Result<Value>>;
}

/// Converts an in-memory value into the value bound to a statement
/// parameter.
pub trait WriteHandler: Send + Sync {
    /// Returns `None` when the handler does not apply.
    fn write(&self, value: &Value, ty: &Type) -> Option<Result<Value>>;
}

#[derive(Default)]
pub struct Conversions {
    read: RwLock<Vec<Arc<dyn ReadHandler>>>,
    write: RwLock<Vec<Arc<dyn WriteHandler>>>,

    /// Non-basic types that decode from a single column
    single_column: RwLock<HashSet<TypeKey>>,
}

impl Conversions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_read_handler(&self, handler: Arc<dyn ReadHandler>) {
        self.read
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(handler);
    }

    pub fn add_write_handler(&self, handler: Arc<dyn WriteHandler>) {
        self.write
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(handler);
    }

    /// Records that values of the given type are read from one column.
    /// Returns `false` if the type was already recorded.
    pub fn mark_single_column(&self, key: TypeKey) -> bool {
        self.single_column
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key)
    }

    /// Returns `true` if values of `ty` are read from exactly one column.
    pub fn is_single_column(&self, ty: &Type) -> bool {
        match ty.json_key() {
            Some(key) => self
                .single_column
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .contains(&key),
            None => ty.is_basic(),
        }
    }

    /// Converts a raw column value into a value of the declared type.
    pub fn read_value(&self, raw: Value, ty: &Type) -> Result<Value> {
        let handlers = self
            .read
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        for handler in &handlers {
            if let Some(res) = handler.read(&raw, ty) {
                return res;
            }
        }

        read_builtin(raw, ty)
    }

    /// Converts an in-memory value of the declared type into a parameter
    /// value.
    pub fn bind_value(&self, value: Value, ty: &Type) -> Result<Value> {
        let handlers = self
            .write
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        for handler in &handlers {
            if let Some(res) = handler.write(&value, ty) {
                return res;
            }
        }

        bind_builtin(value, ty)
    }
}

impl fmt::Debug for Conversions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let read = self.read.read().map(|h| h.len()).unwrap_or_default();
        let write = self.write.read().map(|h| h.len()).unwrap_or_default();

        f.debug_struct("Conversions")
            .field("read_handlers", &read)
            .field("write_handlers", &write)
            .finish()
    }
}

fn read_builtin(raw: Value, ty: &Type) -> Result<Value> {
    match (raw, ty) {
        (Value::I64(value), Type::Bool) => Ok(Value::Bool(value != 0)),
        (Value::String(name), Type::Enum(ty)) => match ty.variant_by_name(&name) {
            Some(variant) => Ok(Value::Enum(ValueEnum::from(variant))),
            None => Err(Error::type_conversion(Value::String(name), "enum")),
        },
        (Value::List(items), Type::List(item_ty)) => Ok(Value::List(
            items
                .into_iter()
                .map(|item| read_builtin(item, item_ty))
                .collect::<Result<_>>()?,
        )),
        // Objects only come back from a row if something turned them into
        // one; anything else needs a handler.
        (raw, _) => ty.cast(raw),
    }
}

fn bind_builtin(value: Value, ty: &Type) -> Result<Value> {
    match value {
        Value::Enum(value) => Ok(Value::I64(value.discriminant)),
        Value::List(items) => {
            let item_ty = match ty {
                Type::List(item_ty) => item_ty,
                _ => ty,
            };

            Ok(Value::List(
                items
                    .into_iter()
                    .map(|item| bind_builtin(item, item_ty))
                    .collect::<Result<_>>()?,
            ))
        }
        value @ Value::Object(_) => Err(Error::type_conversion(value, "column value")),
        value => Ok(value),
    }
}
