use crate::{schema::db, stmt};

#[derive(Debug, Clone)]
pub struct Field {
    /// Field name, as written in predicates
    pub name: String,

    /// Declared type of the field
    pub ty: stmt::Type,

    /// True if the field is nullable
    pub nullable: bool,

    /// Declarative marker: store the field as a JSON document
    pub json_map: bool,

    /// Explicitly requested column storage type
    pub storage_ty: Option<db::Type>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<stmt::Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            nullable: false,
            json_map: false,
            storage_ty: None,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Marks the field as JSON-mapped.
    pub fn json_map(mut self) -> Self {
        self.json_map = true;
        self
    }

    pub fn storage_ty(mut self, storage_ty: db::Type) -> Self {
        self.storage_ty = Some(storage_ty);
        self
    }
}
