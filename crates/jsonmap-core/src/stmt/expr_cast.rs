use super::{Expr, Type};

/// Converts `expr` to `ty`.
///
/// Enum comparisons usually arrive wrapped in casts to the underlying integer
/// type; [`Expr::uncast`] looks through them.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCast {
    pub expr: Box<Expr>,
    pub ty: Type,
}

impl Expr {
    pub fn cast(expr: impl Into<Self>, ty: impl Into<Type>) -> Self {
        Self::Cast(ExprCast {
            expr: Box::new(expr.into()),
            ty: ty.into(),
        })
    }
}
