use super::Expr;
use crate::schema::app::ModelId;

/// The query argument: the row of `model` a predicate is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExprArg {
    pub model: ModelId,
}

impl Expr {
    pub fn arg(model: ModelId) -> Self {
        ExprArg { model }.into()
    }
}

impl From<ExprArg> for Expr {
    fn from(value: ExprArg) -> Self {
        Self::Arg(value)
    }
}
