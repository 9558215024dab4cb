use super::*;

/// A node of a query predicate.
///
/// Predicates are closures over the query's row, written as a tree: `Arg` is
/// the row itself and `Property` reads a named member off its base. Every node
/// that produces a non-boolean value carries its declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of boolean expressions
    And(ExprAnd),

    /// The query argument (the row being filtered)
    Arg(ExprArg),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// Method call
    Call(ExprCall),

    /// Cast an expression to a different type
    Cast(ExprCast),

    /// Indexer access
    Index(ExprIndex),

    /// In list
    InList(ExprInList),

    /// Whether an expression is (or is not) null. This is different from a
    /// binary expression because of how databases treat null comparisons.
    IsNull(ExprIsNull),

    /// A list of expressions of the same type
    List(ExprList),

    /// Negates a boolean expression
    Not(ExprNot),

    /// OR a set of boolean expressions
    Or(ExprOr),

    /// Read a named property of the base expression
    Property(ExprProperty),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    /// Is a value that evaluates to null
    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// Returns true if the expression is a constant value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(..))
    }

    pub fn is_arg(&self) -> bool {
        matches!(self, Self::Arg(_))
    }

    pub fn is_property(&self) -> bool {
        matches!(self, Self::Property(_))
    }

    pub fn as_property(&self) -> Option<&ExprProperty> {
        match self {
            Self::Property(expr) => Some(expr),
            _ => None,
        }
    }

    /// Returns the declared type of the value this expression produces.
    pub fn ty(&self) -> Type {
        match self {
            Self::Arg(expr) => Type::Model(expr.model),
            Self::Call(expr) => expr.ty.clone(),
            Self::Cast(expr) => expr.ty.clone(),
            Self::Index(expr) => expr.ty.clone(),
            Self::Property(expr) => expr.ty.clone(),
            Self::List(expr) => match expr.items.first() {
                Some(item) => Type::list(item.ty()),
                None => Type::list(Type::Unknown),
            },
            Self::Value(value) => value.infer_ty(),
            Self::And(_)
            | Self::BinaryOp(_)
            | Self::InList(_)
            | Self::IsNull(_)
            | Self::Not(_)
            | Self::Or(_) => Type::Bool,
        }
    }

    /// Returns `true` when the expression produces an enum value, either as
    /// a typed node or as an enum constant.
    pub fn is_enum(&self) -> bool {
        match self {
            Self::Value(Value::Enum(_)) => true,
            _ => self.ty().is_enum(),
        }
    }

    /// Returns `true` if the query argument appears anywhere in the
    /// expression.
    pub fn references_arg(&self) -> bool {
        struct FindArg(bool);

        impl Visit for FindArg {
            fn visit_expr_arg(&mut self, _: &ExprArg) {
                self.0 = true;
            }
        }

        let mut find = FindArg(false);
        find.visit_expr(self);
        find.0
    }

    /// Strips casts, returning the innermost operand.
    pub fn uncast(&self) -> &Expr {
        let mut expr = self;
        while let Self::Cast(cast) = expr {
            expr = &cast.expr;
        }
        expr
    }

    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Value(Value::Null))
    }
}

impl Default for Expr {
    fn default() -> Self {
        Self::Value(Value::default())
    }
}

macro_rules! impl_from_value {
    ( $( $ty:ty ),* ) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Self::Value(value.into())
                }
            }
        )*
    };
}

impl_from_value!(bool, i32, i64, f64, &str, String, ValueEnum, ValueObject);

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}
