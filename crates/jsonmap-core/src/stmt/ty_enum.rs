use std::sync::Arc;

/// An enumeration type. Each variant carries the integer discriminant the
/// host stores and compares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEnum {
    name: Arc<str>,
    variants: Arc<[EnumVariant]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumVariant {
    pub name: String,
    pub discriminant: i64,
}

impl TypeEnum {
    pub fn new(name: impl Into<Arc<str>>, variants: impl IntoIterator<Item = EnumVariant>) -> Self {
        Self {
            name: name.into(),
            variants: variants.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variants(&self) -> &[EnumVariant] {
        &self.variants
    }

    /// Finds the variant with the given discriminant.
    pub fn variant(&self, discriminant: i64) -> Option<&EnumVariant> {
        self.variants
            .iter()
            .find(|variant| variant.discriminant == discriminant)
    }

    /// Finds the variant with the given name.
    pub fn variant_by_name(&self, name: &str) -> Option<&EnumVariant> {
        self.variants.iter().find(|variant| variant.name == name)
    }
}

impl EnumVariant {
    pub fn new(name: impl Into<String>, discriminant: i64) -> Self {
        Self {
            name: name.into(),
            discriminant,
        }
    }
}
