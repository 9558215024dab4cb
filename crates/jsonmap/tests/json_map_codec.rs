mod common;
use common::*;

use jsonmap::{
    driver::Dialect,
    json_map::JsonCodec,
    stmt::{JsonObject, TypeObject, Value, ValueObject},
    JsonOptions, Record,
};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};

#[test]
fn typed_round_trip() {
    let codec = JsonCodec::default();
    let value = profile("Paris");

    let text = codec.encode(&value).unwrap();
    assert_eq!(
        text,
        r#"{"Address":{"City":"Paris","Street":null},"Tags":["a","b"],"Level":1}"#
    );
    assert_eq!(codec.decode::<Profile>(&text).unwrap(), value);
}

#[test]
fn erased_round_trip_uses_declared_type() {
    let codec = JsonCodec::default();
    let declared = TypeObject::of::<Address>();
    let value = ValueObject::new(Address {
        city: "Oslo".to_string(),
        street: Some("Karl Johans gate".to_string()),
    });

    let text = codec.encode_value(&value, &declared).unwrap();
    assert_eq!(codec.decode_value(&text, &declared).unwrap(), value);
}

#[test]
fn encode_rejects_value_of_other_type() {
    let codec = JsonCodec::default();
    let value = ValueObject::new(profile("Paris"));

    let err = codec
        .encode_value(&value, &TypeObject::of::<Address>())
        .unwrap_err();
    assert!(err.is_encode());
}

#[test]
fn property_names_match_ignoring_case() {
    let codec = JsonCodec::default();
    let text = r#"{"address":{"CITY":"x"},"tags":[],"LEVEL":2}"#;

    let value = codec.decode::<Profile>(text).unwrap();
    assert_eq!(value.address.city, "x");
    assert_eq!(value.level, 2);
}

/// Uses the default `JsonObject` impl: no declared shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Plain {
    city: String,
    #[serde(rename = "zip_code")]
    zip: Option<String>,
}

impl JsonObject for Plain {}

#[test]
fn case_insensitive_decode_needs_no_shape() {
    let codec = JsonCodec::new(JsonOptions::default());

    let value = codec
        .decode::<Plain>(r#"{"city":"x","ZIP_CODE":"0150"}"#)
        .unwrap();
    assert_eq!(value.city, "x");
    assert_eq!(value.zip.as_deref(), Some("0150"));

    let declared = TypeObject::of::<Plain>();
    let erased = codec.decode_value(r#"{"CITY":"y"}"#, &declared).unwrap();
    assert_eq!(erased.downcast_ref::<Plain>().unwrap().city, "y");

    let strict = JsonCodec::new(JsonOptions::default().property_name_case_insensitive(false));
    assert!(strict.decode::<Plain>(r#"{"city":"x"}"#).unwrap_err().is_decode());
}

#[test]
fn case_sensitive_decode_rejects_other_case() {
    let codec = JsonCodec::new(JsonOptions::default().property_name_case_insensitive(false));
    let err = codec
        .decode::<Address>(r#"{"CITY":"x","Street":null}"#)
        .unwrap_err();

    assert!(err.is_decode());
}

#[test]
fn non_ascii_escaping() {
    let address = Address {
        city: "北京".to_string(),
        street: None,
    };

    let plain = JsonCodec::default().encode(&address).unwrap();
    assert_eq!(plain, r#"{"City":"北京","Street":null}"#);

    let escaped = JsonCodec::new(JsonOptions::default().escape_non_ascii(true))
        .encode(&address)
        .unwrap();
    assert_eq!(escaped, r#"{"City":"\u5317\u4eac","Street":null}"#);
}

#[test]
fn malformed_text_is_a_decode_error() {
    let err = JsonCodec::default().decode::<Address>("{not json").unwrap_err();
    assert!(err.is_decode());
}

#[test]
fn options_deserialize_with_defaults() {
    let options: JsonOptions = serde_json::from_str(r#"{"escape_non_ascii":true}"#).unwrap();

    assert!(options.property_name_case_insensitive);
    assert!(options.escape_non_ascii);
}

fn user(profile: Option<Profile>) -> User {
    User {
        id: 7,
        profile,
        age: 30,
        status: active(),
    }
}

#[test]
fn entity_round_trip_through_text_column() {
    let (db, _map) = setup(Dialect::Sqlite);
    let user = user(Some(profile("Paris")));

    let row = db.save(&user).unwrap();
    assert_eq!(
        row.get("Profile"),
        Some(&Value::String(
            r#"{"Address":{"City":"Paris","Street":null},"Tags":["a","b"],"Level":1}"#
                .to_string()
        ))
    );
    assert_eq!(row.get("Status"), Some(&Value::I64(1)));

    assert_eq!(db.materialize::<User>(row).unwrap(), user);
}

#[test]
fn null_json_column_round_trips() {
    let (db, _map) = setup(Dialect::Sqlite);
    let user = user(None);

    let row = db.save(&user).unwrap();
    assert_eq!(row.get("Profile"), Some(&Value::Null));
    assert_eq!(db.materialize::<User>(row).unwrap(), user);
}

#[test]
fn native_json_values_are_decoded() {
    let (db, _map) = setup(Dialect::Postgresql);

    let row = Record::new()
        .with("Id", 1i64)
        .with(
            "Profile",
            serde_json::json!({ "Address": { "City": "Lima" }, "Tags": [], "Level": 0 }),
        )
        .with("Age", 20i64)
        .with("Status", 0i64);

    let user = db.materialize::<User>(row).unwrap();
    assert_eq!(user.profile.unwrap().address.city, "Lima");
}

#[test]
fn in_memory_values_pass_through_reads() {
    let (db, _map) = setup(Dialect::Sqlite);
    let profile = profile("Rome");

    let row = Record::new()
        .with("Id", 1i64)
        .with("Profile", Value::object(profile.clone()))
        .with("Age", 20i64)
        .with("Status", 1i64);

    assert_eq!(
        db.materialize::<User>(row).unwrap().profile,
        Some(profile)
    );
}

#[test]
fn malformed_stored_json_fails_materialize() {
    let (db, _map) = setup(Dialect::Sqlite);

    let row = Record::new()
        .with("Id", 1i64)
        .with("Profile", "{\"Address\":")
        .with("Age", 20i64)
        .with("Status", 1i64);

    let err = db.materialize::<User>(row).unwrap_err();
    assert!(err.is_decode());
}

#[test]
fn write_hook_falls_through_for_other_types() {
    let (db, _map) = setup(Dialect::Sqlite);
    db.table::<User>().unwrap();

    let bound = db
        .bind::<User>("Profile", Value::object(profile("Paris")))
        .unwrap();
    assert!(matches!(bound, Value::String(_)));

    // `Address` is not registered on this database, so nothing encodes it
    let err = db
        .bind::<User>(
            "Profile",
            Value::object(Address {
                city: "Paris".to_string(),
                street: None,
            }),
        )
        .unwrap_err();
    assert!(err.is_type_conversion());
}
