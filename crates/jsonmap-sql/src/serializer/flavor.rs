use jsonmap_core::driver::Dialect;

/// Families of dialects sharing quoting and literal syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    Postgresql,
    Sqlite,
    Mysql,
    SqlServer,
    Oracle,
    DuckDb,
    Other,
}

impl From<Dialect> for Flavor {
    fn from(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Sqlite => Flavor::Sqlite,
            Dialect::DuckDb => Flavor::DuckDb,
            dialect if dialect.is_mysql() => Flavor::Mysql,
            dialect if dialect.is_sql_server() => Flavor::SqlServer,
            dialect if dialect.is_oracle() => Flavor::Oracle,
            dialect if dialect.is_postgresql() => Flavor::Postgresql,
            _ => Flavor::Other,
        }
    }
}

impl Flavor {
    /// True when the dialect has boolean literals.
    pub(super) fn has_bool_literals(self) -> bool {
        matches!(self, Flavor::Postgresql | Flavor::DuckDb)
    }
}
