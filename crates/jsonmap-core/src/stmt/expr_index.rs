use super::{Expr, Type};

/// Indexer access, `base[index]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprIndex {
    pub base: Box<Expr>,
    pub index: Box<Expr>,
    pub ty: Type,
}

impl Expr {
    pub fn index(base: impl Into<Expr>, index: impl Into<Expr>, ty: impl Into<Type>) -> Expr {
        ExprIndex {
            base: Box::new(base.into()),
            index: Box::new(index.into()),
            ty: ty.into(),
        }
        .into()
    }
}

impl From<ExprIndex> for Expr {
    fn from(value: ExprIndex) -> Self {
        Self::Index(value)
    }
}
