use jsonmap_core::{driver::Dialect, schema::db};

/// How a JSON-mapped type is stored in its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageShape {
    /// A text column holding the serialized document
    Text(StringLength),

    /// The dialect's native JSON column type
    NativeJson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringLength {
    /// The largest text type of the dialect
    Max,
}

impl StorageShape {
    pub fn for_dialect(dialect: Dialect) -> StorageShape {
        if dialect.supports_native_json() {
            StorageShape::NativeJson
        } else {
            StorageShape::Text(StringLength::Max)
        }
    }

    pub fn db_type(self) -> db::Type {
        match self {
            StorageShape::Text(StringLength::Max) => db::Type::LargeText,
            StorageShape::NativeJson => db::Type::Json,
        }
    }
}
