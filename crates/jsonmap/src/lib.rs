pub mod db;
pub use db::Db;

pub mod json_map;
pub use json_map::{use_json_map, use_json_map_with, JsonMap, JsonMapColumn, JsonOptions};

mod model;
pub use model::{Model, Record};

pub use jsonmap_core::{driver, path, schema, stmt, Error, Result};
