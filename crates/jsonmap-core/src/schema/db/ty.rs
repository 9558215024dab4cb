use crate::{driver::Dialect, stmt, Error, Result};

/// Database-level storage types.
///
/// `stmt::Type` is how a value looks in memory; `db::Type` is how the target
/// database stores the column. Columns keep both, and `storage_ty` is what a
/// `CREATE TABLE` statement would spell out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// A boolean value
    Boolean,

    /// A signed integer of `n` bytes
    Integer(u8),

    /// An unsigned integer of `n` bytes
    UnsignedInteger(u8),

    /// A floating point number of `n` bytes
    Float(u8),

    /// Unconstrained text type
    Text,

    /// Text type with an explicit maximum length
    VarChar(u64),

    /// The largest text type the database offers
    LargeText,

    /// The database's native JSON document type
    Json,

    /// Unconstrained binary type
    Blob,

    /// User-specified unrecognized type
    Custom(String),
}

impl Type {
    /// Maps an application-level type to a database-level storage type.
    pub fn from_app(ty: &stmt::Type, hint: Option<&Type>) -> Result<Type> {
        if let Some(hint) = hint {
            return Ok(hint.clone());
        }

        match ty {
            stmt::Type::Bool => Ok(Type::Boolean),
            stmt::Type::I8 => Ok(Type::Integer(1)),
            stmt::Type::I16 => Ok(Type::Integer(2)),
            stmt::Type::I32 => Ok(Type::Integer(4)),
            stmt::Type::I64 => Ok(Type::Integer(8)),
            stmt::Type::U8 => Ok(Type::UnsignedInteger(1)),
            stmt::Type::U16 => Ok(Type::UnsignedInteger(2)),
            stmt::Type::U32 => Ok(Type::UnsignedInteger(4)),
            stmt::Type::U64 => Ok(Type::UnsignedInteger(8)),
            stmt::Type::F32 => Ok(Type::Float(4)),
            stmt::Type::F64 => Ok(Type::Float(8)),
            stmt::Type::String => Ok(Type::Text),
            stmt::Type::Bytes => Ok(Type::Blob),
            // Enums are stored by discriminant
            stmt::Type::Enum(_) => Ok(Type::Integer(4)),
            // Nothing the database understands; left for an extension to
            // configure.
            stmt::Type::Object(ty) => Ok(Type::Custom(ty.name().to_string())),
            stmt::Type::List(_) => Ok(Type::Custom("list".to_string())),
            stmt::Type::Model(_) | stmt::Type::Unknown => Err(Error::invalid_schema(format!(
                "type {ty:?} cannot be stored in a column"
            ))),
        }
    }

    /// Spelling of the type in DDL for the given dialect.
    pub fn sql_name(&self, dialect: Dialect) -> String {
        match self {
            Type::Boolean if dialect.is_sql_server() => "BIT".into(),
            Type::Boolean if dialect.is_oracle() => "NUMBER(1)".into(),
            Type::Boolean => "BOOLEAN".into(),
            Type::Integer(1 | 2) => "SMALLINT".into(),
            Type::Integer(4) => "INTEGER".into(),
            Type::Integer(_) => "BIGINT".into(),
            Type::UnsignedInteger(size) if dialect.is_mysql() => {
                format!("{} UNSIGNED", Type::Integer(*size).sql_name(dialect))
            }
            Type::UnsignedInteger(size) => Type::Integer(size.saturating_mul(2)).sql_name(dialect),
            Type::Float(4) => "REAL".into(),
            Type::Float(_) => "DOUBLE PRECISION".into(),
            Type::Text if dialect.is_sql_server() => "NVARCHAR(255)".into(),
            Type::Text => "TEXT".into(),
            Type::VarChar(size) if dialect.is_sql_server() => format!("NVARCHAR({size})"),
            Type::VarChar(size) => format!("VARCHAR({size})"),
            Type::LargeText if dialect.is_sql_server() => "NVARCHAR(MAX)".into(),
            Type::LargeText if dialect.is_mysql() => "LONGTEXT".into(),
            Type::LargeText if dialect.is_oracle() => "NCLOB".into(),
            Type::LargeText => "TEXT".into(),
            Type::Json if dialect.is_postgresql() => "JSONB".into(),
            Type::Json => "JSON".into(),
            Type::Blob if dialect.is_postgresql() => "BYTEA".into(),
            Type::Blob => "BLOB".into(),
            Type::Custom(name) => name.clone(),
        }
    }

    /// Returns `true` if values are stored as text.
    pub fn is_text(&self) -> bool {
        matches!(self, Type::Text | Type::VarChar(_) | Type::LargeText)
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Type::Json)
    }
}
