#![allow(dead_code)]

use jsonmap::{
    driver::Dialect,
    schema::app::{self, Field},
    stmt::{EnumVariant, Expr, FieldShape, JsonObject, Shape, Type, TypeEnum, Value, ValueEnum},
    Db, Error, JsonMap, JsonOptions, Model, Record, Result,
};
use serde::{Deserialize, Serialize};

pub fn db(dialect: Dialect) -> Db {
    Db::builder()
        .dialect(dialect)
        .register::<User>()
        .register::<Order>()
        .register::<Customer>()
        .build()
        .unwrap()
}

/// A database with a fresh JSON map enabled on it.
pub fn setup(dialect: Dialect) -> (Db, JsonMap) {
    let db = db(dialect);
    let map = JsonMap::new(JsonOptions::default());
    map.enable(&db);
    (db, map)
}

pub fn status() -> TypeEnum {
    TypeEnum::new(
        "Status",
        [
            EnumVariant::new("Pending", 0),
            EnumVariant::new("Active", 1),
            EnumVariant::new("Closed", 2),
        ],
    )
}

pub fn active() -> ValueEnum {
    ValueEnum::new("Active", 1)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub city: String,
    pub street: Option<String>,
}

impl JsonObject for Address {
    fn shape() -> Shape {
        Shape::Struct(vec![
            FieldShape::new("City", Type::String),
            FieldShape::new("Street", Type::String),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Profile {
    pub address: Address,
    pub tags: Vec<String>,
    /// Discriminant of `status()`
    pub level: i64,
}

impl JsonObject for Profile {
    fn shape() -> Shape {
        Shape::Struct(vec![
            FieldShape::new("Address", Type::object::<Address>()),
            FieldShape::new("Tags", Type::list(Type::String)),
            FieldShape::new("Level", status()),
        ])
    }
}

pub fn profile(city: &str) -> Profile {
    Profile {
        address: Address {
            city: city.to_string(),
            street: None,
        },
        tags: vec!["a".to_string(), "b".to_string()],
        level: 1,
    }
}

/// `Profile` is marked, `Age` is a marked scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub profile: Option<Profile>,
    pub age: i64,
    pub status: ValueEnum,
}

impl Model for User {
    fn schema() -> app::Model {
        app::Model::new(Self::id(), "users")
            .field(Field::new("Id", Type::I64))
            .field(Field::new("Profile", Type::object::<Profile>()).nullable().json_map())
            .field(Field::new("Age", Type::I32).json_map())
            .field(Field::new("Status", status()))
    }

    fn load(mut record: Record) -> Result<Self> {
        Ok(User {
            id: record.take_i64("Id")?,
            profile: record.take_object("Profile")?,
            age: record.take_i64("Age")?,
            status: match record.take("Status")? {
                Value::Enum(value) => value,
                value => return Err(Error::type_conversion(value, "Status")),
            },
        })
    }

    fn save(&self) -> Record {
        Record::new()
            .with("Id", self.id)
            .with(
                "Profile",
                self.profile.clone().map(Value::object).unwrap_or_default(),
            )
            .with("Age", self.age)
            .with("Status", self.status.clone())
    }
}

impl User {
    pub fn profile() -> Expr {
        Expr::property(User::arg(), "Profile", Type::object::<Profile>())
    }

    pub fn city() -> Expr {
        Expr::property(
            Expr::property(User::profile(), "Address", Type::object::<Address>()),
            "City",
            Type::String,
        )
    }

    pub fn level() -> Expr {
        Expr::property(User::profile(), "Level", status())
    }
}

/// Two fields of the same JSON-mapped type.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub shipping: Address,
    pub billing: Address,
}

impl Model for Order {
    fn schema() -> app::Model {
        app::Model::new(Self::id(), "orders")
            .field(Field::new("Id", Type::I64))
            .field(Field::new("Shipping", Type::object::<Address>()).json_map())
            .field(Field::new("Billing", Type::object::<Address>()).json_map())
    }

    fn load(mut record: Record) -> Result<Self> {
        let missing = || Error::invalid_schema("address is null");

        Ok(Order {
            id: record.take_i64("Id")?,
            shipping: record.take_object("Shipping")?.ok_or_else(missing)?,
            billing: record.take_object("Billing")?.ok_or_else(missing)?,
        })
    }

    fn save(&self) -> Record {
        Record::new()
            .with("Id", self.id)
            .with("Shipping", Value::object(self.shipping.clone()))
            .with("Billing", Value::object(self.billing.clone()))
    }
}

/// Not marked; mapped only when toggled.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub home: Option<Address>,
}

impl Model for Customer {
    fn schema() -> app::Model {
        app::Model::new(Self::id(), "customers")
            .field(Field::new("Id", Type::I64))
            .field(Field::new("Home", Type::object::<Address>()).nullable())
    }

    fn load(mut record: Record) -> Result<Self> {
        Ok(Customer {
            id: record.take_i64("Id")?,
            home: record.take_object("Home")?,
        })
    }

    fn save(&self) -> Record {
        Record::new()
            .with("Id", self.id)
            .with("Home", self.home.clone().map(Value::object).unwrap_or_default())
    }
}

impl Customer {
    pub fn city() -> Expr {
        Expr::property(
            Expr::property(Customer::arg(), "Home", Type::object::<Address>()),
            "City",
            Type::String,
        )
    }
}
