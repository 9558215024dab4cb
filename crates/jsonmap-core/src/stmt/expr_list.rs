use super::Expr;

/// An inline list, such as the candidate values of a `contains` call.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprList {
    pub items: Vec<Expr>,
}

impl Expr {
    pub fn list<T: Into<Self>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(ExprList {
            items: items.into_iter().map(Into::into).collect(),
        })
    }
}
