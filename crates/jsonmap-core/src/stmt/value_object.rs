use super::{JsonObject, TypeObject, Value};

use std::{any::Any, fmt, sync::Arc};

/// An in-memory instance of a JSON-mappable user type.
#[derive(Clone)]
pub struct ValueObject {
    ty: TypeObject,
    value: Arc<dyn Any + Send + Sync>,
}

impl ValueObject {
    pub fn new<T: JsonObject>(value: T) -> Self {
        Self {
            ty: TypeObject::of::<T>(),
            value: Arc::new(value),
        }
    }

    pub(super) fn from_parts(ty: TypeObject, value: Arc<dyn Any + Send + Sync>) -> Self {
        Self { ty, value }
    }

    /// The runtime type of the value.
    pub fn ty(&self) -> &TypeObject {
        &self.ty
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.value.is::<T>()
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    pub(super) fn as_any(&self) -> &(dyn Any + Send + Sync) {
        &*self.value
    }
}

impl PartialEq for ValueObject {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && self.ty.value_eq(self.as_any(), other.as_any())
    }
}

impl fmt::Debug for ValueObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ty.value_debug(self.as_any(), f)
    }
}

impl From<ValueObject> for Value {
    fn from(value: ValueObject) -> Self {
        Self::Object(value)
    }
}
