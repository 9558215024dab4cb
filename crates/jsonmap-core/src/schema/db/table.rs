use super::Column;
use crate::schema::app::ModelId;

use indexmap::IndexMap;

/// A database table, as configured for one model.
#[derive(Debug, Clone)]
pub struct Table {
    /// The model stored in the table
    pub model: ModelId,

    /// Name of the table
    pub name: String,

    /// Columns keyed by the name of the field they store, in declaration
    /// order.
    pub columns: IndexMap<String, Column>,
}

impl Table {
    /// Returns the column storing the given field.
    pub fn column(&self, field: &str) -> Option<&Column> {
        self.columns.get(field)
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.columns.values()
    }
}
