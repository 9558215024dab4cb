use jsonmap_core::{
    driver::Dialect,
    path,
    schema::{
        app::{Field, Model, ModelId},
        Builder, Schema,
    },
    stmt::{EnumVariant, Expr, Type, TypeEnum, Value, ValueEnum},
};
use jsonmap_sql::Serializer;
use pretty_assertions::assert_eq;

struct User;

fn status() -> TypeEnum {
    TypeEnum::new(
        "Status",
        [EnumVariant::new("Pending", 0), EnumVariant::new("Active", 1)],
    )
}

fn schema(dialect: Dialect) -> Schema {
    let user = Model::new(ModelId::of::<User>(), "users")
        .field(Field::new("id", Type::I64))
        .field(Field::new("name", Type::String))
        .field(Field::new("status", status()));

    Builder::new(dialect).build([&user]).unwrap()
}

fn user() -> Expr {
    Expr::arg(ModelId::of::<User>())
}

fn sql(dialect: Dialect, expr: &Expr) -> String {
    let schema = schema(dialect);
    Serializer::new(dialect, &schema).serialize_expr(expr).unwrap()
}

#[test]
fn column_quoting_per_dialect() {
    let expr = Expr::eq(path!(user(), .name: Type::String), "bob");

    assert_eq!(sql(Dialect::Sqlite, &expr), "a.\"name\" = 'bob'");
    assert_eq!(sql(Dialect::Mysql, &expr), "a.`name` = 'bob'");
    assert_eq!(sql(Dialect::SqlServer, &expr), "a.[name] = N'bob'");
}

#[test]
fn enum_constants_are_discriminants() {
    let expr = Expr::eq(
        path!(user(), .status: status()),
        ValueEnum::new("Active", 1),
    );

    assert_eq!(sql(Dialect::Postgresql, &expr), "a.\"status\" = 1");
}

#[test]
fn null_comparisons() {
    let name = path!(user(), .name: Type::String);

    assert_eq!(
        sql(Dialect::Sqlite, &Expr::eq(name.clone(), Value::Null)),
        "a.\"name\" IS NULL"
    );
    assert_eq!(
        sql(Dialect::Sqlite, &Expr::ne(Value::Null, name)),
        "a.\"name\" IS NOT NULL"
    );
}

#[test]
fn disjunction_inside_conjunction_is_grouped() {
    let id = || path!(user(), .id: Type::I64);
    let expr = Expr::and(Expr::or(Expr::eq(id(), 1i64), Expr::eq(id(), 2i64)), Expr::gt(id(), 0i64));

    assert_eq!(
        sql(Dialect::Sqlite, &expr),
        "(a.\"id\" = 1 OR a.\"id\" = 2) AND a.\"id\" > 0"
    );
}

#[test]
fn contains_over_constant_list() {
    let expr = Expr::contains(Value::List(vec![1.into(), 2.into()]), path!(user(), .id: Type::I64));
    assert_eq!(sql(Dialect::Sqlite, &expr), "a.\"id\" IN (1, 2)");

    let empty = Expr::contains(Value::List(vec![]), path!(user(), .id: Type::I64));
    assert_eq!(sql(Dialect::Sqlite, &empty), "1 = 0");
}

#[test]
fn contains_over_string_is_like() {
    let expr = Expr::contains(path!(user(), .name: Type::String), "o'b");
    assert_eq!(sql(Dialect::Postgresql, &expr), "a.\"name\" LIKE '%o''b%'");
}

#[test]
fn string_length() {
    let expr = Expr::eq(path!(user(), .name: Type::String, .len: Type::I32), 3i64);

    assert_eq!(sql(Dialect::Sqlite, &expr), "LENGTH(a.\"name\") = 3");
    assert_eq!(sql(Dialect::CustomSqlServer, &expr), "LEN(a.[name]) = 3");
}

#[test]
fn literals() {
    let schema = schema(Dialect::Postgresql);
    let serializer = Serializer::new(Dialect::Postgresql, &schema);

    assert_eq!(serializer.format_sql(&Value::Bool(true), None).unwrap(), "true");
    assert_eq!(serializer.format_sql(&Value::F64(1.5), None).unwrap(), "1.5");
    assert_eq!(
        serializer
            .format_sql(&Value::Bytes(vec![0xde, 0xad]), None)
            .unwrap(),
        "'\\xDEAD'"
    );
    assert_eq!(
        serializer
            .format_sql(&Value::Enum(ValueEnum::new("Active", 1)), Some(&Type::I32))
            .unwrap(),
        "1"
    );

    let schema = self::schema(Dialect::Sqlite);
    let serializer = Serializer::new(Dialect::Sqlite, &schema);
    assert_eq!(serializer.format_sql(&Value::Bool(true), None).unwrap(), "1");
}

// ---------------------------------------------------------------------------
// Unsupported nodes
// ---------------------------------------------------------------------------

#[test]
fn nested_property_of_plain_column_fails() {
    let schema = schema(Dialect::Sqlite);
    let expr = Expr::eq(path!(user(), .name: Type::String, .first: Type::String), "b");

    let err = Serializer::new(Dialect::Sqlite, &schema)
        .serialize_expr(&expr)
        .unwrap_err();
    assert!(err.is_unsupported_expression());
}

#[test]
fn unknown_field_fails() {
    let schema = schema(Dialect::Sqlite);
    let expr = Expr::eq(path!(user(), .email: Type::String), "b");

    let err = Serializer::new(Dialect::Sqlite, &schema)
        .serialize_expr(&expr)
        .unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn unknown_method_fails() {
    let schema = schema(Dialect::Sqlite);
    let expr = Expr::call(path!(user(), .name: Type::String), "to_upper", Vec::new(), Type::String);

    let err = Serializer::new(Dialect::Sqlite, &schema)
        .serialize_expr(&expr)
        .unwrap_err();
    assert!(err.is_unsupported_expression());
}
