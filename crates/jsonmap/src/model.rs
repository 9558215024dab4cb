use jsonmap_core::{
    schema::app::{self, ModelId},
    stmt::{Expr, JsonObject, Value},
    Error, Result,
};

use indexmap::IndexMap;

/// A row type mapped to a table.
pub trait Model: Sized + 'static {
    /// Uniquely identifies the model.
    fn id() -> ModelId {
        ModelId::of::<Self>()
    }

    /// The model's fields.
    fn schema() -> app::Model;

    /// Builds an instance from in-memory field values.
    fn load(record: Record) -> Result<Self>;

    /// Returns the in-memory values of every field.
    fn save(&self) -> Record;

    /// The query argument, for writing predicates over this model.
    fn arg() -> Expr {
        Expr::arg(Self::id())
    }
}

/// Field values of one row, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    values: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values.iter().map(|(field, value)| (field.as_str(), value))
    }

    /// Removes and returns a field's value; missing fields are an error.
    pub fn take(&mut self, field: &str) -> Result<Value> {
        self.values
            .shift_remove(field)
            .ok_or_else(|| Error::invalid_schema(format!("record has no field `{field}`")))
    }

    pub fn take_i64(&mut self, field: &str) -> Result<i64> {
        match self.take(field)? {
            Value::I64(value) => Ok(value),
            value => Err(Error::type_conversion(value, "I64")),
        }
    }

    pub fn take_string(&mut self, field: &str) -> Result<Option<String>> {
        match self.take(field)? {
            Value::Null => Ok(None),
            Value::String(value) => Ok(Some(value)),
            value => Err(Error::type_conversion(value, "String")),
        }
    }

    /// Takes a JSON-mapped field's value. Null reads as `None`.
    pub fn take_object<T: JsonObject + Clone>(&mut self, field: &str) -> Result<Option<T>> {
        match self.take(field)? {
            Value::Null => Ok(None),
            Value::Object(value) => {
                if let Some(value) = value.downcast_ref::<T>() {
                    return Ok(Some(value.clone()));
                }
                Err(Error::type_conversion(
                    Value::Object(value),
                    std::any::type_name::<T>(),
                ))
            }
            value => Err(Error::type_conversion(value, std::any::type_name::<T>())),
        }
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
