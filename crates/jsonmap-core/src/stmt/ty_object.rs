use super::{Type, ValueObject};
use crate::{json::IgnoreCase, Error, Result};

use serde::{de::DeserializeOwned, Serialize};
use std::{
    any::{Any, TypeId},
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// A user type that can be stored as a JSON document.
///
/// Implementors may describe their serialized layout through
/// [`JsonObject::shape`] so predicates can learn the type of nested
/// properties. Decoding never depends on the shape; an opaque shape is always
/// valid.
pub trait JsonObject:
    Serialize + DeserializeOwned + fmt::Debug + PartialEq + Send + Sync + 'static
{
    fn shape() -> Shape {
        Shape::Opaque
    }

    /// The type of this value when it is an item of a list.
    fn item_ty() -> Type {
        Type::Object(TypeObject::of::<Self>())
    }
}

impl<T: JsonObject> JsonObject for Vec<T> {
    fn shape() -> Shape {
        Shape::List(T::item_ty())
    }
}

/// Declares serde scalars as JSON objects, so lists of them (`Vec<String>`)
/// can be stored as one document, and maps the host's list types onto them.
macro_rules! scalar_items {
    ( $( $variant:ident => $rust:ty, )* ) => {
        $(
            impl JsonObject for $rust {
                fn item_ty() -> Type {
                    Type::$variant
                }
            }
        )*

        impl TypeKey {
            /// Registry key of the document type storing a `Type::List(item)`.
            pub fn list_of(item: &Type) -> Option<Self> {
                match item {
                    $( Type::$variant => Some(Self::of::<Vec<$rust>>()), )*
                    _ => None,
                }
            }
        }

        impl TypeObject {
            /// The document type storing a `Type::List(item)`, such as
            /// `Vec<String>` for a list of strings. Only lists of scalars have
            /// one.
            pub fn list_of(item: &Type) -> Option<Self> {
                match item {
                    $( Type::$variant => Some(Self::of::<Vec<$rust>>()), )*
                    _ => None,
                }
            }
        }
    };
}

scalar_items! {
    Bool => bool,
    String => String,
    I32 => i32,
    I64 => i64,
    F64 => f64,
}

/// Serialized layout of a [`JsonObject`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A JSON object with the listed properties, by serialized name.
    Struct(Vec<FieldShape>),

    /// A JSON array of the given item type.
    List(Type),

    /// Nothing is known about the layout.
    Opaque,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldShape {
    pub name: String,
    pub ty: Type,
}

impl FieldShape {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Identity of a Rust type, used as registry key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey(TypeId);

impl TypeKey {
    pub fn of<T: 'static>() -> Self {
        Self(TypeId::of::<T>())
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({:?})", self.0)
    }
}

/// The declared type of a JSON-mapped value.
///
/// Holds the monomorphized conversions of one concrete Rust type so values
/// can be encoded and decoded through the declared type rather than whatever
/// the runtime value happens to be.
#[derive(Clone)]
pub struct TypeObject {
    def: Arc<ObjectDef>,
}

struct ObjectDef {
    key: TypeKey,
    name: &'static str,
    shape: fn() -> Shape,
    to_json: fn(&(dyn Any + Send + Sync)) -> Option<serde_json::Result<serde_json::Value>>,
    from_json: fn(serde_json::Value, bool) -> serde_json::Result<Arc<dyn Any + Send + Sync>>,
    eq: fn(&(dyn Any + Send + Sync), &(dyn Any + Send + Sync)) -> bool,
    debug: fn(&(dyn Any + Send + Sync), &mut fmt::Formatter<'_>) -> fmt::Result,
}

impl TypeObject {
    pub fn of<T: JsonObject>() -> Self {
        fn to_json<T: JsonObject>(
            value: &(dyn Any + Send + Sync),
        ) -> Option<serde_json::Result<serde_json::Value>> {
            value.downcast_ref::<T>().map(serde_json::to_value)
        }

        fn from_json<T: JsonObject>(
            json: serde_json::Value,
            ignore_case: bool,
        ) -> serde_json::Result<Arc<dyn Any + Send + Sync>> {
            let value: T = if ignore_case {
                IgnoreCase::new(json).into_value()?
            } else {
                serde_json::from_value(json)?
            };
            Ok(Arc::new(value))
        }

        fn eq<T: JsonObject>(lhs: &(dyn Any + Send + Sync), rhs: &(dyn Any + Send + Sync)) -> bool {
            match (lhs.downcast_ref::<T>(), rhs.downcast_ref::<T>()) {
                (Some(lhs), Some(rhs)) => lhs == rhs,
                _ => false,
            }
        }

        fn debug<T: JsonObject>(
            value: &(dyn Any + Send + Sync),
            f: &mut fmt::Formatter<'_>,
        ) -> fmt::Result {
            match value.downcast_ref::<T>() {
                Some(value) => fmt::Debug::fmt(value, f),
                None => f.write_str("<mismatched object>"),
            }
        }

        Self {
            def: Arc::new(ObjectDef {
                key: TypeKey::of::<T>(),
                name: std::any::type_name::<T>(),
                shape: T::shape,
                to_json: to_json::<T>,
                from_json: from_json::<T>,
                eq: eq::<T>,
                debug: debug::<T>,
            }),
        }
    }

    pub fn key(&self) -> TypeKey {
        self.def.key
    }

    /// The Rust type name.
    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn shape(&self) -> Shape {
        (self.def.shape)()
    }

    pub fn is_list(&self) -> bool {
        matches!(self.shape(), Shape::List(_))
    }

    /// Converts a value of this type to a JSON tree.
    ///
    /// Fails with an encode error when the value is an instance of another
    /// type.
    pub fn to_json(&self, value: &ValueObject) -> Result<serde_json::Value> {
        match (self.def.to_json)(value.as_any()) {
            Some(Ok(json)) => Ok(json),
            Some(Err(err)) => Err(Error::encode(err.to_string())),
            None => Err(Error::encode(format!(
                "value is `{}`, declared `{}`",
                value.ty().name(),
                self.name()
            ))),
        }
    }

    /// Builds a value of this type from a JSON tree. With `ignore_case`,
    /// object keys match the type's serde field names ignoring case.
    pub fn from_json(&self, json: serde_json::Value, ignore_case: bool) -> Result<ValueObject> {
        let value = (self.def.from_json)(json, ignore_case)
            .map_err(|err| Error::decode(err.to_string()))?;
        Ok(ValueObject::from_parts(self.clone(), value))
    }

    pub(super) fn value_eq(
        &self,
        lhs: &(dyn Any + Send + Sync),
        rhs: &(dyn Any + Send + Sync),
    ) -> bool {
        (self.def.eq)(lhs, rhs)
    }

    pub(super) fn value_debug(
        &self,
        value: &(dyn Any + Send + Sync),
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        (self.def.debug)(value, f)
    }
}

impl PartialEq for TypeObject {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for TypeObject {}

impl Hash for TypeObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Debug for TypeObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
