use super::{Shape, TypeEnum, TypeKey, TypeObject, Value, ValueEnum};
use crate::{schema::app::ModelId, Error, Result};

use std::ops::RangeInclusive;

/// The declared type of a field, value or expression.
///
/// Scalar types and enums are understood natively by the host. Everything the
/// host cannot store in a single column on its own is an [`Type::Object`]: a
/// user type that only becomes storable once it is JSON-mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Boolean value
    Bool,

    /// String type
    String,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 32-bit float
    F32,

    /// 64-bit float
    F64,

    /// Opaque byte array
    Bytes,

    /// An enumeration stored by its integer discriminant
    Enum(TypeEnum),

    /// A list of a single type
    List(Box<Type>),

    /// An instance of a model. This is the type of the query argument.
    Model(ModelId),

    /// A user-defined type the host cannot store natively
    Object(TypeObject),

    /// A type that could not be inferred (e.g., null)
    Unknown,
}

impl Type {
    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    pub fn object<T: super::JsonObject>() -> Self {
        Self::Object(TypeObject::of::<T>())
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_bytes(&self) -> bool {
        matches!(self, Self::Bytes)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    pub fn is_model(&self) -> bool {
        matches!(self, Self::Model(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns `true` for list types, including objects that serialize as a
    /// JSON array (`Vec<T>`).
    pub fn is_list(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::Object(ty) => ty.is_list(),
            _ => false,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::F32
                | Self::F64
        )
    }

    /// Scalar types map to a single column without any help.
    pub fn is_scalar(&self) -> bool {
        self.is_bool() || self.is_string() || self.is_bytes() || self.is_numeric()
    }

    /// Types the host reads and binds natively.
    pub fn is_basic(&self) -> bool {
        self.is_scalar() || self.is_enum()
    }

    pub fn as_enum(&self) -> Option<&TypeEnum> {
        match self {
            Self::Enum(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&TypeObject> {
        match self {
            Self::Object(ty) => Some(ty),
            _ => None,
        }
    }

    /// Key of the document type values of this type are stored as: the
    /// object type itself, or the stand-in for a list of scalars.
    pub fn json_key(&self) -> Option<TypeKey> {
        match self {
            Self::Object(ty) => Some(ty.key()),
            Self::List(item) => TypeKey::list_of(item),
            _ => None,
        }
    }

    /// Returns the type of the named property of values of this type, if it
    /// is statically known.
    pub fn property(&self, name: &str) -> Option<Type> {
        let Self::Object(ty) = self else {
            return None;
        };

        match ty.shape() {
            Shape::Struct(fields) => fields
                .into_iter()
                .find(|field| field.name == name)
                .map(|field| field.ty),
            _ => None,
        }
    }

    /// Converts a constant value to this type.
    pub fn cast(&self, value: Value) -> Result<Value> {
        // Null values are passed through
        if value.is_null() {
            return Ok(value);
        }

        Ok(match (value, self) {
            (value @ Value::Bool(_), Self::Bool) => value,
            (value @ Value::String(_), Self::String) => value,
            (value @ Value::Bytes(_), Self::Bytes) => value,
            (Value::Enum(value), ty) if ty.is_numeric() => {
                return ty.cast(Value::I64(value.discriminant))
            }
            (Value::I64(value), Self::F32 | Self::F64) => Value::F64(value as f64),
            (Value::I64(value), ty) if ty.is_numeric() => match ty.integer_range() {
                Some(range) if !range.contains(&value) => {
                    return Err(Error::type_conversion(Value::I64(value), self.name()))
                }
                _ => Value::I64(value),
            },
            (value @ Value::F64(_), Self::F32 | Self::F64) => value,
            (Value::I64(discriminant), Self::Enum(ty)) => match ty.variant(discriminant) {
                Some(variant) => Value::Enum(ValueEnum::from(variant)),
                None => return Err(Error::type_conversion(Value::I64(discriminant), "enum")),
            },
            (value @ Value::Enum(_), Self::Enum(_)) => value,
            (Value::List(items), Self::List(item_ty)) => Value::List(
                items
                    .into_iter()
                    .map(|item| item_ty.cast(item))
                    .collect::<Result<_>>()?,
            ),
            (Value::Object(value), Self::Object(ty)) if value.ty() == ty => Value::Object(value),
            (value, _) => return Err(Error::type_conversion(value, self.name())),
        })
    }

    /// Values representable by an integer type.
    fn integer_range(&self) -> Option<RangeInclusive<i64>> {
        Some(match self {
            Self::I8 => i8::MIN.into()..=i8::MAX.into(),
            Self::I16 => i16::MIN.into()..=i16::MAX.into(),
            Self::I32 => i32::MIN.into()..=i32::MAX.into(),
            Self::I64 => i64::MIN..=i64::MAX,
            Self::U64 => 0..=i64::MAX,
            Self::U8 => 0..=u8::MAX.into(),
            Self::U16 => 0..=u16::MAX.into(),
            Self::U32 => 0..=u32::MAX.into(),
            _ => return None,
        })
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::String => "String",
            Self::I8 => "I8",
            Self::I16 => "I16",
            Self::I32 => "I32",
            Self::I64 => "I64",
            Self::U8 => "U8",
            Self::U16 => "U16",
            Self::U32 => "U32",
            Self::U64 => "U64",
            Self::F32 => "F32",
            Self::F64 => "F64",
            Self::Bytes => "Bytes",
            Self::Enum(_) => "Enum",
            Self::List(_) => "List",
            Self::Model(_) => "Model",
            Self::Object(ty) => ty.name(),
            Self::Unknown => "Unknown",
        }
    }
}

impl From<&Self> for Type {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

impl From<ModelId> for Type {
    fn from(value: ModelId) -> Self {
        Self::Model(value)
    }
}

impl From<TypeEnum> for Type {
    fn from(value: TypeEnum) -> Self {
        Self::Enum(value)
    }
}

impl From<TypeObject> for Type {
    fn from(value: TypeObject) -> Self {
        Self::Object(value)
    }
}
