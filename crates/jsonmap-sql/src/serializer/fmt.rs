use super::Formatter;

use jsonmap_core::Result;

/// Writes each fragment in order, propagating the first error.
macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_sql($f)?;
        )*
    }};
}

pub(super) trait ToSql {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()>;
}

impl ToSql for &str {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push_str(self);
        Ok(())
    }
}

impl ToSql for &String {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        self.as_str().to_sql(f)
    }
}

/// Items joined by `, `.
pub(super) struct Comma<L>(pub(super) L);

/// Items joined by the given separator, such as `" AND "`.
pub(super) struct Delimited<L>(pub(super) L, pub(super) &'static str);

impl<L> ToSql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        Delimited(self.0, ", ").to_sql(f)
    }
}

impl<L> ToSql for Delimited<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let Delimited(items, separator) = self;
        for (n, item) in items.into_iter().enumerate() {
            if n > 0 {
                fmt!(f, separator);
            }
            fmt!(f, item);
        }
        Ok(())
    }
}
