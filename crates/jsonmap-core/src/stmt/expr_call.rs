use super::{Expr, Type};

/// A method call.
///
/// Instance calls carry a receiver (`list.contains(x)`); free calls do not and
/// pass every operand as an argument (`contains(list, x)`).
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCall {
    pub receiver: Option<Box<Expr>>,
    pub method: String,
    pub args: Vec<Expr>,
    pub ty: Type,
}

impl Expr {
    pub fn call(
        receiver: impl Into<Expr>,
        method: impl Into<String>,
        args: impl IntoIterator<Item = Expr>,
        ty: impl Into<Type>,
    ) -> Expr {
        ExprCall {
            receiver: Some(Box::new(receiver.into())),
            method: method.into(),
            args: args.into_iter().collect(),
            ty: ty.into(),
        }
        .into()
    }

    pub fn call_free(
        method: impl Into<String>,
        args: impl IntoIterator<Item = Expr>,
        ty: impl Into<Type>,
    ) -> Expr {
        ExprCall {
            receiver: None,
            method: method.into(),
            args: args.into_iter().collect(),
            ty: ty.into(),
        }
        .into()
    }

    /// `collection.contains(item)`
    pub fn contains(collection: impl Into<Expr>, item: impl Into<Expr>) -> Expr {
        Expr::call(collection, "contains", [item.into()], Type::Bool)
    }
}

impl ExprCall {
    pub fn is_method(&self, name: &str) -> bool {
        self.method == name
    }
}

impl From<ExprCall> for Expr {
    fn from(value: ExprCall) -> Self {
        Self::Call(value)
    }
}
