use super::{flavor::Flavor, Formatter, ToSql};

use jsonmap_core::Result;

/// A quoted identifier
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let name = self.0.as_ref();

        let (open, close) = match f.serializer.flavor {
            Flavor::Mysql => ('`', '`'),
            Flavor::SqlServer => ('[', ']'),
            _ => ('"', '"'),
        };

        f.dst.push(open);
        for c in name.chars() {
            if c == close {
                f.dst.push(close);
            }
            f.dst.push(c);
        }
        f.dst.push(close);

        Ok(())
    }
}
