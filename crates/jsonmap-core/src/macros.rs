/// Builds a property access chain rooted at an expression.
///
/// ```ignore
/// let city = path!(Expr::arg(user), .profile: profile_ty, .city: Type::String);
/// ```
#[macro_export]
macro_rules! path {
    (
        $base:expr $(, . $field:ident : $ty:expr )+ $(,)?
    ) => {{
        let expr = $crate::stmt::Expr::from($base);
        $(
            let expr = $crate::stmt::Expr::property(expr, stringify!($field), $ty);
        )+
        expr
    }};
}
