use serde::{Deserialize, Serialize};

/// Codec settings, captured when a [`JsonMap`](super::JsonMap) is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonOptions {
    /// Match stored property names against the declared shape ignoring case.
    pub property_name_case_insensitive: bool,

    /// Escape every character outside ASCII as `\uXXXX` when encoding.
    pub escape_non_ascii: bool,
}

impl JsonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property_name_case_insensitive(mut self, value: bool) -> Self {
        self.property_name_case_insensitive = value;
        self
    }

    pub fn escape_non_ascii(mut self, value: bool) -> Self {
        self.escape_non_ascii = value;
        self
    }
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            property_name_case_insensitive: true,
            escape_non_ascii: false,
        }
    }
}
