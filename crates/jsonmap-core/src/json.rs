//! Case-insensitive deserialization of JSON documents.
//!
//! [`IgnoreCase`] wraps a parsed [`serde_json::Value`] and deserializes it
//! like `serde_json` would, except that object keys of structs are matched to
//! the struct's declared field names ignoring case. The field names come from
//! serde itself, so renames and `rename_all` are honored for any
//! `Deserialize` type. An exact match always wins over a case variant.

use serde::de::{
    self, value::StringDeserializer, DeserializeSeed, Deserializer, IntoDeserializer, MapAccess,
    SeqAccess, Visitor,
};
use serde_json::{Error, Map, Value as Json};

/// A JSON document whose struct keys match field names ignoring case.
#[derive(Debug, Clone)]
pub struct IgnoreCase(Json);

impl IgnoreCase {
    pub fn new(json: Json) -> Self {
        Self(json)
    }

    /// Deserializes a `T` from the wrapped document.
    pub fn into_value<T: de::DeserializeOwned>(self) -> Result<T, Error> {
        T::deserialize(self)
    }
}

/// Renames keys of `map` to the field they match ignoring case.
///
/// Keys that already name a field, and keys that match no field, are kept
/// as-is. A case variant is dropped in favor of an exact key for the same
/// field.
fn fold_keys(map: Map<String, Json>, fields: &[&str]) -> Map<String, Json> {
    let exact: Vec<&str> = fields
        .iter()
        .copied()
        .filter(|field| map.contains_key(*field))
        .collect();

    let mut folded = Map::with_capacity(map.len());

    for (key, value) in map {
        if fields.contains(&key.as_str()) {
            folded.insert(key, value);
            continue;
        }

        let lower = key.to_lowercase();
        let field = fields.iter().find(|field| field.to_lowercase() == lower);

        match field {
            Some(field) if exact.contains(field) => {}
            Some(field) => {
                folded.entry(field.to_string()).or_insert(value);
            }
            None => {
                folded.entry(key).or_insert(value);
            }
        }
    }

    folded
}

impl<'de> Deserializer<'de> for IgnoreCase {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self.0 {
            Json::Object(map) => visitor.visit_map(Entries::new(map)),
            Json::Array(items) => visitor.visit_seq(Items::new(items)),
            json => json.deserialize_any(visitor),
        }
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        match self.0 {
            Json::Object(map) => visitor.visit_map(Entries::new(fold_keys(map, fields))),
            json => json.deserialize_struct(name, fields, visitor),
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self.0 {
            Json::Null => visitor.visit_none(),
            json => visitor.visit_some(IgnoreCase(json)),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self.0 {
            Json::Array(items) => visitor.visit_seq(Items::new(items)),
            json => json.deserialize_seq(visitor),
        }
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, _len: usize, visitor: V) -> Result<V::Value, Error> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, Error> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self.0 {
            Json::Object(map) => visitor.visit_map(Entries::new(map)),
            json => json.deserialize_map(visitor),
        }
    }

    // Enum payloads are decoded by `serde_json` directly and keep exact keys.
    fn deserialize_enum<V: Visitor<'de>>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        self.0.deserialize_enum(name, variants, visitor)
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error> {
        self.0.deserialize_unit_struct(name, visitor)
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        self.0.deserialize_bytes(visitor)
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        self.0.deserialize_byte_buf(visitor)
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        unit identifier ignored_any
    }
}

struct Entries {
    iter: serde_json::map::IntoIter,
    value: Option<Json>,
}

impl Entries {
    fn new(map: Map<String, Json>) -> Self {
        Self {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> MapAccess<'de> for Entries {
    type Error = Error;

    fn next_key_seed<K: DeserializeSeed<'de>>(&mut self, seed: K) -> Result<Option<K::Value>, Error> {
        let Some((key, value)) = self.iter.next() else {
            return Ok(None);
        };

        self.value = Some(value);
        let key: StringDeserializer<Error> = key.into_deserializer();
        seed.deserialize(key).map(Some)
    }

    fn next_value_seed<T: DeserializeSeed<'de>>(&mut self, seed: T) -> Result<T::Value, Error> {
        match self.value.take() {
            Some(value) => seed.deserialize(IgnoreCase(value)),
            None => Err(de::Error::custom("value requested before key")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct Items {
    iter: std::vec::IntoIter<Json>,
}

impl Items {
    fn new(items: Vec<Json>) -> Self {
        Self {
            iter: items.into_iter(),
        }
    }
}

impl<'de> SeqAccess<'de> for Items {
    type Error = Error;

    fn next_element_seed<T: DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, Error> {
        self.iter
            .next()
            .map(|item| seed.deserialize(IgnoreCase(item)))
            .transpose()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}
