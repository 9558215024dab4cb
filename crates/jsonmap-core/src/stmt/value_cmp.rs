use super::Value;

use std::cmp::Ordering;

impl Value {
    /// Compares two constants of compatible types.
    ///
    /// Returns `None` when the values have no meaningful order, including any
    /// comparison against null.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        use Value::*;

        match (self, other) {
            (Bool(lhs), Bool(rhs)) => Some(lhs.cmp(rhs)),
            (I64(lhs), I64(rhs)) => Some(lhs.cmp(rhs)),
            (F64(lhs), F64(rhs)) => lhs.partial_cmp(rhs),
            (I64(lhs), F64(rhs)) => (*lhs as f64).partial_cmp(rhs),
            (F64(lhs), I64(rhs)) => lhs.partial_cmp(&(*rhs as f64)),
            (String(lhs), String(rhs)) => Some(lhs.cmp(rhs)),
            (Bytes(lhs), Bytes(rhs)) => Some(lhs.cmp(rhs)),
            (Enum(lhs), Enum(rhs)) => Some(lhs.discriminant.cmp(&rhs.discriminant)),
            (Enum(lhs), I64(rhs)) => Some(lhs.discriminant.cmp(rhs)),
            (I64(lhs), Enum(rhs)) => Some(lhs.cmp(&rhs.discriminant)),
            _ => None,
        }
    }
}
