use jsonmap_core::{
    driver::Dialect,
    path,
    schema::{
        app::{Field, Model, ModelId},
        Builder, Schema,
    },
    stmt::{Expr, Type, Value},
    Result,
};
use jsonmap_sql::{ParseContext, ParseExpression, Serializer};
use pretty_assertions::assert_eq;

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

struct User;

fn schema() -> Schema {
    let user = Model::new(ModelId::of::<User>(), "users")
        .field(Field::new("id", Type::I64))
        .field(Field::new("name", Type::String));

    Builder::new(Dialect::Sqlite).build([&user]).unwrap()
}

fn name() -> Expr {
    path!(Expr::arg(ModelId::of::<User>()), .name: Type::String)
}

/// Rewrites every column reference to `lower(<column>)`.
struct Lower;

impl ParseExpression for Lower {
    fn parse_expression(&self, cx: &mut ParseContext<'_>) -> Result<()> {
        if let Expr::Property(property) = cx.expr() {
            if property.is_field() {
                let column = cx.free_parse(cx.expr())?;
                cx.set_result(format!("lower({column})"));
            }
        }
        Ok(())
    }
}

#[derive(Default)]
struct Count(AtomicUsize);

impl ParseExpression for Count {
    fn parse_expression(&self, _cx: &mut ParseContext<'_>) -> Result<()> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn hook_result_replaces_node() {
    let schema = schema();
    let serializer = Serializer::new(Dialect::Sqlite, &schema).hooks(vec![Arc::new(Lower)]);

    assert_eq!(
        serializer.serialize_expr(&Expr::eq(name(), "bob")).unwrap(),
        "lower(a.\"name\") = 'bob'"
    );
}

#[test]
fn free_parse_bypasses_hooks() {
    let schema = schema();
    let serializer = Serializer::new(Dialect::Sqlite, &schema).hooks(vec![Arc::new(Lower)]);

    assert_eq!(
        serializer.free_parse(&Expr::eq(name(), "bob")).unwrap(),
        "a.\"name\" = 'bob'"
    );
}

#[test]
fn hooks_see_every_node_until_one_answers() {
    let schema = schema();
    let count = Arc::new(Count::default());
    let serializer = Serializer::new(Dialect::Sqlite, &schema)
        .hooks(vec![count.clone(), Arc::new(Lower)]);

    serializer.serialize_expr(&Expr::eq(name(), "bob")).unwrap();

    // binary op, property, value
    assert_eq!(count.0.load(Ordering::SeqCst), 3);
}

struct Fail;

impl ParseExpression for Fail {
    fn parse_expression(&self, cx: &mut ParseContext<'_>) -> Result<()> {
        if cx.expr().is_value() {
            jsonmap_core::bail!("no literals allowed");
        }
        Ok(())
    }
}

#[test]
fn hook_errors_abort_translation() {
    let schema = schema();
    let serializer = Serializer::new(Dialect::Sqlite, &schema).hooks(vec![Arc::new(Fail)]);

    let err = serializer
        .serialize_expr(&Expr::eq(name(), Value::from("bob")))
        .unwrap_err();
    assert_eq!(err.to_string(), "no literals allowed");
}
