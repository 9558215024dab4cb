//! Rendering of "the value at a nested JSON path inside a column" for each
//! [`JsonStyle`].

use jsonmap_core::{driver::JsonStyle, stmt::Type};

/// One property step of a JSON path, outermost first.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    /// Serialized property name
    pub name: String,

    /// Declared type of the property's value
    pub ty: Type,
}

impl PathSegment {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Renders `path` navigated from the column fragment `root`.
///
/// `path` must not be empty; a bare column is just `root`.
pub fn render(root: &str, path: &[PathSegment], style: JsonStyle) -> String {
    match style {
        JsonStyle::FunctionExtractText => function("json_extract", root, path),
        JsonStyle::FunctionExtractValue => function("json_value", root, path),
        JsonStyle::BracketIndexing => {
            let mut sql = root.to_string();
            for segment in path {
                sql.push_str("['");
                sql.push_str(&quote(&segment.name));
                sql.push_str("']");
            }
            sql
        }
        JsonStyle::PostgresArrowChain => {
            let mut sql = root.to_string();
            for (i, segment) in path.iter().enumerate() {
                if i + 1 < path.len() {
                    sql.push_str("->");
                } else if segment.ty.is_list() {
                    // `->>` yields text, so arrays compare as their JSON text
                    sql.push_str("->>/*json array*/");
                } else {
                    sql.push_str("->>");
                }
                sql.push('\'');
                sql.push_str(&quote(&segment.name));
                sql.push('\'');
            }
            sql
        }
    }
}

fn function(name: &str, root: &str, path: &[PathSegment]) -> String {
    let mut json_path = String::from("$");
    for segment in path {
        json_path.push('.');
        json_path.push_str(&quote(&segment.name));
    }
    format!("{name}({root},'{json_path}')")
}

fn quote(name: &str) -> String {
    name.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> Vec<PathSegment> {
        vec![
            PathSegment::new("Address", Type::Unknown),
            PathSegment::new("City", Type::String),
        ]
    }

    #[test]
    fn function_styles() {
        assert_eq!(
            render("a.\"Profile\"", &path(), JsonStyle::FunctionExtractText),
            "json_extract(a.\"Profile\",'$.Address.City')"
        );
        assert_eq!(
            render("a.[Profile]", &path(), JsonStyle::FunctionExtractValue),
            "json_value(a.[Profile],'$.Address.City')"
        );
    }

    #[test]
    fn bracket_style() {
        assert_eq!(
            render("a.\"Profile\"", &path(), JsonStyle::BracketIndexing),
            "a.\"Profile\"['Address']['City']"
        );
    }

    #[test]
    fn arrow_chain_marks_trailing_list() {
        let path = [
            PathSegment::new("Address", Type::Unknown),
            PathSegment::new("Tags", Type::list(Type::String)),
        ];
        assert_eq!(
            render("a.\"Profile\"", &path, JsonStyle::PostgresArrowChain),
            "a.\"Profile\"->'Address'->>/*json array*/'Tags'"
        );
    }

    #[test]
    fn quotes_are_doubled() {
        let path = [PathSegment::new("it's", Type::String)];
        assert_eq!(
            render("c", &path, JsonStyle::FunctionExtractText),
            "json_extract(c,'$.it''s')"
        );
        assert_eq!(
            render("c", &path, JsonStyle::PostgresArrowChain),
            "c->>'it''s'"
        );
    }
}
