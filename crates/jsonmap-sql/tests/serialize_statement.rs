use jsonmap_core::{
    driver::Dialect,
    path,
    schema::{
        app::{Field, Model, ModelId},
        db, Builder, Catalog,
    },
    stmt::{Expr, Type},
};
use jsonmap_sql::{stmt::Select, Serializer, Statement};
use pretty_assertions::assert_eq;

struct User;
struct Unknown;

fn user() -> Model {
    Model::new(ModelId::of::<User>(), "users")
        .field(Field::new("id", Type::I64))
        .field(Field::new("name", Type::String).nullable())
        .field(Field::new("bio", Type::String).storage_ty(db::Type::LargeText))
}

#[test]
fn select_with_filter() {
    let schema = Builder::new(Dialect::Sqlite).build([&user()]).unwrap();
    let serializer = Serializer::new(Dialect::Sqlite, &schema);

    let mut select = Select::new(ModelId::of::<User>());
    select.and_filter(Expr::eq(
        path!(Expr::arg(ModelId::of::<User>()), .id: Type::I64),
        7i64,
    ));

    assert_eq!(
        serializer.serialize(&select.into()).unwrap(),
        "SELECT a.\"id\", a.\"name\", a.\"bio\" FROM \"users\" a WHERE a.\"id\" = 7"
    );
}

#[test]
fn select_with_custom_alias() {
    let schema = Builder::new(Dialect::Mysql).build([&user()]).unwrap();
    let serializer = Serializer::new(Dialect::Mysql, &schema).alias("u");

    assert_eq!(
        serializer
            .serialize(&Statement::select(ModelId::of::<User>()))
            .unwrap(),
        "SELECT u.`id`, u.`name`, u.`bio` FROM `users` u"
    );
}

#[test]
fn select_unknown_model() {
    let schema = Builder::new(Dialect::Sqlite).build([&user()]).unwrap();
    let err = Serializer::new(Dialect::Sqlite, &schema)
        .serialize(&Statement::select(ModelId::of::<Unknown>()))
        .unwrap_err();

    assert!(err.is_invalid_schema());
}

#[test]
fn create_table_uses_storage_types() {
    for (dialect, expected) in [
        (
            Dialect::Sqlite,
            "CREATE TABLE \"users\" (\"id\" BIGINT NOT NULL, \"name\" TEXT, \"bio\" TEXT NOT NULL)",
        ),
        (
            Dialect::SqlServer,
            "CREATE TABLE [users] ([id] BIGINT NOT NULL, [name] NVARCHAR(255), [bio] NVARCHAR(MAX) NOT NULL)",
        ),
    ] {
        let schema = Builder::new(dialect).build([&user()]).unwrap();
        let table = schema.table(ModelId::of::<User>()).unwrap();

        assert_eq!(
            Serializer::new(dialect, &schema)
                .serialize(&Statement::create_table(table))
                .unwrap(),
            expected
        );
    }
}
