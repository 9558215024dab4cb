use super::{EnumVariant, Value};

/// A constant enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueEnum {
    pub variant: String,
    pub discriminant: i64,
}

impl ValueEnum {
    pub fn new(variant: impl Into<String>, discriminant: i64) -> Self {
        Self {
            variant: variant.into(),
            discriminant,
        }
    }
}

impl From<&EnumVariant> for ValueEnum {
    fn from(value: &EnumVariant) -> Self {
        Self::new(value.name.clone(), value.discriminant)
    }
}

impl From<ValueEnum> for Value {
    fn from(value: ValueEnum) -> Self {
        Self::Enum(value)
    }
}
