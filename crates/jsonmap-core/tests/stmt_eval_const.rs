use jsonmap_core::{
    path,
    schema::app::ModelId,
    stmt::{BinaryOp, EnumVariant, Expr, Type, TypeEnum, Value, ValueEnum},
};

struct User;

fn status_ty() -> TypeEnum {
    TypeEnum::new(
        "Status",
        [EnumVariant::new("Pending", 0), EnumVariant::new("Active", 1)],
    )
}

// ---------------------------------------------------------------------------
// Binary ops
// ---------------------------------------------------------------------------

#[test]
fn eq_equal_i64() {
    assert_eq!(
        Expr::binary_op(1i64, BinaryOp::Eq, 1i64)
            .eval_const()
            .unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn ne_different_strings() {
    assert_eq!(
        Expr::ne("foo", "bar").eval_const().unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn lt_mixed_numeric() {
    assert_eq!(Expr::lt(1i64, 1.5f64).eval_const().unwrap(), Value::Bool(true));
}

#[test]
fn eq_enum_against_discriminant() {
    let active = ValueEnum::new("Active", 1);
    assert_eq!(
        Expr::eq(active, 1i64).eval_const().unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn ordering_against_null_fails() {
    let err = Expr::gt(Value::Null, 1i64).eval_const().unwrap_err();
    assert!(err.is_expression_evaluation_failed());
}

// ---------------------------------------------------------------------------
// Logical ops
// ---------------------------------------------------------------------------

#[test]
fn and_short_circuits() {
    let expr = Expr::and(false, Expr::arg(ModelId::of::<User>()));
    assert_eq!(expr.eval_const().unwrap(), Value::Bool(false));
}

#[test]
fn or_of_constants() {
    let expr = Expr::or_from_vec(vec![false.into(), Expr::eq(2i64, 2i64)]);
    assert_eq!(expr.eval_const().unwrap(), Value::Bool(true));
}

#[test]
fn not_requires_bool() {
    let err = Expr::not("yes").eval_const().unwrap_err();
    assert!(err.is_type_conversion());
}

#[test]
fn in_list_finds_item() {
    let expr = Expr::in_list(2i64, Expr::list([1i64, 2, 3]));
    assert_eq!(expr.eval_const().unwrap(), Value::Bool(true));
}

#[test]
fn is_not_null_of_value() {
    assert_eq!(
        Expr::is_not_null("x").eval_const().unwrap(),
        Value::Bool(true)
    );
}

// ---------------------------------------------------------------------------
// Lists and casts
// ---------------------------------------------------------------------------

#[test]
fn list_of_enum_constants() {
    let expr = Expr::list([ValueEnum::new("Pending", 0), ValueEnum::new("Active", 1)]);
    assert_eq!(
        expr.eval_const().unwrap(),
        Value::List(vec![
            Value::Enum(ValueEnum::new("Pending", 0)),
            Value::Enum(ValueEnum::new("Active", 1)),
        ])
    );
}

#[test]
fn cast_enum_to_integer() {
    let expr = Expr::cast(ValueEnum::new("Active", 1), Type::I32);
    assert_eq!(expr.eval_const().unwrap(), Value::I64(1));
}

#[test]
fn cast_integer_to_enum() {
    let expr = Expr::cast(1i64, status_ty());
    assert_eq!(
        expr.eval_const().unwrap(),
        Value::Enum(ValueEnum::new("Active", 1))
    );
}

#[test]
fn cast_unknown_discriminant_fails() {
    let err = Expr::cast(7i64, status_ty()).eval_const().unwrap_err();
    assert!(err.is_type_conversion());
}

// ---------------------------------------------------------------------------
// Non-constant expressions
// ---------------------------------------------------------------------------

#[test]
fn arg_is_not_constant() {
    let err = Expr::arg(ModelId::of::<User>()).eval_const().unwrap_err();
    assert!(err.is_expression_evaluation_failed());
}

#[test]
fn property_of_arg_is_not_constant() {
    let expr = path!(Expr::arg(ModelId::of::<User>()), .name: Type::String);
    assert!(expr.references_arg());

    let err = Expr::eq(expr, "bob").eval_const().unwrap_err();
    assert!(err.is_expression_evaluation_failed());
    assert!(err.to_string().contains("query argument"), "{err}");
}

#[test]
fn call_is_not_folded() {
    let expr = Expr::contains(Expr::list([1i64, 2]), 1i64);
    let err = expr.eval_const().unwrap_err();
    assert!(err.to_string().contains("contains"), "{err}");
}
