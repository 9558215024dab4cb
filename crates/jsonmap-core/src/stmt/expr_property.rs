use super::{Expr, Type};

/// Reads the property `name` of `base`.
///
/// On the query argument, the property is a model field. On any other base it
/// is a member of a nested value, which only has SQL meaning inside a
/// JSON-mapped column.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprProperty {
    pub base: Box<Expr>,
    pub name: String,
    pub ty: Type,
}

impl Expr {
    pub fn property(base: impl Into<Expr>, name: impl Into<String>, ty: impl Into<Type>) -> Expr {
        ExprProperty {
            base: Box::new(base.into()),
            name: name.into(),
            ty: ty.into(),
        }
        .into()
    }
}

impl ExprProperty {
    /// Returns `true` when the property is read directly off the query
    /// argument, i.e. it is a model field.
    pub fn is_field(&self) -> bool {
        self.base.is_arg()
    }
}

impl From<ExprProperty> for Expr {
    fn from(value: ExprProperty) -> Self {
        Self::Property(value)
    }
}
