use super::{JsonObject, Type, ValueEnum, ValueObject};

/// A constant or a raw column value.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer; every integer width is widened to this
    I64(i64),

    /// 64-bit float
    F64(f64),

    /// String value
    String(String),

    /// Byte array
    Bytes(Vec<u8>),

    /// Enum variant
    Enum(ValueEnum),

    /// A list of values
    List(Vec<Value>),

    /// An in-memory instance of a user type
    Object(ValueObject),

    /// A document read from a native JSON column
    Json(serde_json::Value),
}

impl Value {
    pub fn null() -> Self {
        Self::Null
    }

    pub fn object<T: JsonObject>(value: T) -> Self {
        Self::Object(ValueObject::new(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(value) => Some(*value),
            Self::Enum(value) => Some(value.discriminant),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ValueObject> {
        match self {
            Self::Object(value) => Some(value),
            _ => None,
        }
    }

    /// Name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::I64(_) => "I64",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Bytes(_) => "Bytes",
            Self::Enum(_) => "Enum",
            Self::List(_) => "List",
            Self::Object(_) => "Object",
            Self::Json(_) => "Json",
        }
    }

    /// Infers the type of the value. Enum constants do not know their enum
    /// type and infer as [`Type::Unknown`].
    pub fn infer_ty(&self) -> Type {
        match self {
            Self::Null | Self::Enum(_) | Self::Json(_) => Type::Unknown,
            Self::Bool(_) => Type::Bool,
            Self::I64(_) => Type::I64,
            Self::F64(_) => Type::F64,
            Self::String(_) => Type::String,
            Self::Bytes(_) => Type::Bytes,
            Self::List(items) => match items.first() {
                Some(item) => Type::list(item.infer_ty()),
                None => Type::list(Type::Unknown),
            },
            Self::Object(value) => Type::Object(value.ty().clone()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::I64(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}
