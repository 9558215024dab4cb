#[macro_use]
mod macros;

pub mod convert;
pub use convert::Conversions;

pub mod driver;
pub use driver::Dialect;

pub mod json;

mod error;
pub use error::Error;

pub mod schema;
pub use schema::Schema;

pub mod stmt;

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
