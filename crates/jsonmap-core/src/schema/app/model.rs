use super::Field;

use std::{
    any::TypeId,
    fmt,
    hash::{Hash, Hasher},
};

/// Uniquely identifies a model by its Rust type.
#[derive(Clone, Copy)]
pub struct ModelId {
    type_id: TypeId,
    name: &'static str,
}

impl ModelId {
    pub fn of<M: 'static>() -> Self {
        let name = std::any::type_name::<M>();
        Self {
            type_id: TypeId::of::<M>(),
            name: name.rsplit("::").next().unwrap_or(name),
        }
    }

    /// The model's Rust type name, without its module path.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ModelId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ModelId {}

impl Hash for ModelId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.name)
    }
}

/// An entity definition: a named row type with its fields.
#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model
    pub id: ModelId,

    /// Name of the table the model maps to
    pub table_name: String,

    /// Fields, in declaration order
    pub fields: Vec<Field>,
}

impl Model {
    pub fn new(id: ModelId, table_name: impl Into<String>) -> Self {
        Self {
            id,
            table_name: table_name.into(),
            fields: vec![],
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}
