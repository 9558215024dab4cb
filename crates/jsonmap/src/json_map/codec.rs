use super::JsonOptions;

use jsonmap_core::{
    json::IgnoreCase,
    stmt::{JsonObject, Type, TypeObject, Value, ValueObject},
    Error, Result,
};

use serde::Serialize;
use serde_json::{ser::Formatter, Number, Value as Json};
use std::io;

/// Converts JSON-mapped values to and from their stored text.
///
/// The erased entry points always go through the declared type, never the
/// runtime type of the value being converted.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    options: JsonOptions,
}

impl JsonCodec {
    pub fn new(options: JsonOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &JsonOptions {
        &self.options
    }

    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let mut buf = Vec::with_capacity(128);

        let res = if self.options.escape_non_ascii {
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
            value.serialize(&mut ser)
        } else {
            let mut ser = serde_json::Serializer::new(&mut buf);
            value.serialize(&mut ser)
        };
        res.map_err(|err| Error::encode(err.to_string()))?;

        String::from_utf8(buf).map_err(|err| Error::encode(err.to_string()))
    }

    pub fn decode<T: JsonObject>(&self, text: &str) -> Result<T> {
        let json = parse(text)?;

        let res = if self.options.property_name_case_insensitive {
            IgnoreCase::new(json).into_value()
        } else {
            serde_json::from_value(json)
        };
        res.map_err(|err| Error::decode(err.to_string()))
    }

    /// Encodes `value` as an instance of `declared`.
    pub fn encode_value(&self, value: &ValueObject, declared: &TypeObject) -> Result<String> {
        let json = declared.to_json(value)?;
        self.encode(&json)
    }

    pub fn decode_value(&self, text: &str, declared: &TypeObject) -> Result<ValueObject> {
        self.decode_json(parse(text)?, declared)
    }

    /// Builds an instance of `declared` from an already parsed document.
    pub fn decode_json(&self, json: Json, declared: &TypeObject) -> Result<ValueObject> {
        declared.from_json(json, self.options.property_name_case_insensitive)
    }

    /// Encodes the items of a list of scalars as a JSON array.
    pub fn encode_list(&self, items: &[Value]) -> Result<String> {
        let json = items.iter().map(item_to_json).collect::<Result<Vec<_>>>()?;
        self.encode(&json)
    }

    pub fn decode_list(&self, text: &str, item: &Type) -> Result<Value> {
        self.decode_list_json(parse(text)?, item)
    }

    /// Builds a `Value::List` of `item` values from a JSON array.
    pub fn decode_list_json(&self, json: Json, item: &Type) -> Result<Value> {
        let items = match json {
            Json::Array(items) => items,
            json => return Err(Error::decode(format!("expected a JSON array, found `{json}`"))),
        };

        items
            .into_iter()
            .map(|json| item_from_json(json, item))
            .collect::<Result<_>>()
            .map(Value::List)
    }
}

fn parse(text: &str) -> Result<Json> {
    serde_json::from_str(text).map_err(|err| Error::decode(err.to_string()))
}

fn item_to_json(value: &Value) -> Result<Json> {
    Ok(match value {
        Value::Null => Json::Null,
        Value::Bool(value) => Json::Bool(*value),
        Value::I64(value) => Json::from(*value),
        Value::F64(value) => Number::from_f64(*value)
            .map(Json::Number)
            .ok_or_else(|| Error::encode(format!("{value} has no JSON representation")))?,
        Value::String(value) => Json::String(value.clone()),
        value => {
            return Err(Error::encode(format!(
                "{} is not a scalar list item",
                value.kind_name()
            )))
        }
    })
}

fn item_from_json(json: Json, item: &Type) -> Result<Value> {
    let value = match json {
        Json::Null => Value::Null,
        Json::Bool(value) => Value::Bool(value),
        Json::String(value) => Value::String(value),
        Json::Number(number) => match (number.as_i64(), number.as_f64()) {
            (Some(value), _) => Value::I64(value),
            (None, Some(value)) => Value::F64(value),
            (None, None) => return Err(Error::decode(format!("number {number} is out of range"))),
        },
        json => return Err(Error::decode(format!("`{json}` is not a scalar list item"))),
    };

    item.cast(value)
        .map_err(|err| Error::decode(format!("list item: {err}")))
}

/// Writes strings with every non-ASCII character escaped.
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;

        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }

            writer.write_all(&fragment.as_bytes()[start..i])?;

            let mut units = [0; 2];
            for unit in ch.encode_utf16(&mut units) {
                writer.write_all(format!("\\u{unit:04x}").as_bytes())?;
            }

            start = i + ch.len_utf8();
        }

        writer.write_all(&fragment.as_bytes()[start..])
    }
}
