pub mod hook;
pub use hook::{ParseContext, ParseExpression};

pub mod json_path;
pub use json_path::PathSegment;

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::Statement;
