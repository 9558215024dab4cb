use jsonmap_core::stmt::{TypeKey, TypeObject};

use std::{
    collections::HashMap,
    fmt,
    sync::{PoisonError, RwLock},
};

/// The set of types stored as JSON documents.
///
/// Membership only grows: a type, once registered, stays registered for the
/// lifetime of the registry.
#[derive(Default)]
pub struct TypeRegistry {
    types: RwLock<HashMap<TypeKey, TypeObject>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mapped(&self, ty: &TypeObject) -> bool {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&ty.key())
    }

    /// Registers `ty`, returning `true` only for the call that inserted it.
    pub fn try_register(&self, ty: &TypeObject) -> bool {
        let mut types = self.types.write().unwrap_or_else(PoisonError::into_inner);

        if types.contains_key(&ty.key()) {
            return false;
        }

        types.insert(ty.key(), ty.clone());
        true
    }

    pub fn get(&self, key: TypeKey) -> Option<TypeObject> {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types = self.types.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_set().entries(types.values()).finish()
    }
}
