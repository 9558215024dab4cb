use jsonmap_core::stmt::{EnumVariant, Type, TypeEnum, Value, ValueEnum};

#[test]
fn null_passes_through_any_type() {
    assert_eq!(Type::String.cast(Value::Null).unwrap(), Value::Null);
    assert_eq!(Type::I64.cast(Value::Null).unwrap(), Value::Null);
}

#[test]
fn integer_widens_to_float() {
    assert_eq!(Type::F64.cast(Value::I64(3)).unwrap(), Value::F64(3.0));
}

#[test]
fn list_items_are_cast() {
    let ty = TypeEnum::new("Color", [EnumVariant::new("Red", 4)]);
    let value = Type::list(ty).cast(Value::List(vec![Value::I64(4)])).unwrap();

    assert_eq!(
        value,
        Value::List(vec![Value::Enum(ValueEnum::new("Red", 4))])
    );
}

#[test]
fn string_to_integer_fails() {
    let err = Type::I32.cast(Value::from("12")).unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert String to I32");
}

#[test]
fn scalar_and_basic_classification() {
    let ty = Type::Enum(TypeEnum::new("Color", Vec::<EnumVariant>::new()));

    assert!(Type::Bytes.is_scalar());
    assert!(!ty.is_scalar());
    assert!(ty.is_basic());
    assert!(!Type::list(Type::I32).is_basic());
}

#[test]
fn integer_casts_check_range() {
    let too_big = Value::I64(i64::from(i32::MAX) + 1);

    let err = Type::I32.cast(too_big.clone()).unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(Type::I64.cast(too_big).unwrap(), Value::I64(2_147_483_648));

    assert!(Type::U8.cast(Value::I64(-1)).unwrap_err().is_type_conversion());
    assert_eq!(Type::I16.cast(Value::I64(-300)).unwrap(), Value::I64(-300));
}

#[test]
fn enum_discriminant_must_fit_integer_type() {
    let wide = ValueEnum::new("Wide", 1 << 40);

    let err = Type::I32.cast(Value::Enum(wide.clone())).unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(Type::I64.cast(Value::Enum(wide)).unwrap(), Value::I64(1 << 40));
}
