mod dialect;
pub use dialect::{Dialect, JsonStyle};
