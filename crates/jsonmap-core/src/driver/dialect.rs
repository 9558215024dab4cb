use crate::Error;

use std::{fmt, str::FromStr};

/// The database engine a statement is generated for.
///
/// ODBC and custom-provider variants share SQL syntax with their native
/// counterpart but are kept distinct: some decisions (native JSON storage)
/// only apply to the native provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Sqlite,
    Mysql,
    OdbcMysql,
    CustomMysql,
    SqlServer,
    OdbcSqlServer,
    CustomSqlServer,
    Oracle,
    OdbcOracle,
    CustomOracle,
    Dameng,
    DuckDb,
    Postgresql,
    OdbcPostgresql,
    CustomPostgresql,
    KingbaseEs,
    ShenTong,
    Firebird,
    ClickHouse,
}

/// How a dialect renders "the value at JSON path P inside column C".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    /// `json_extract(col,'$.a.b')`
    FunctionExtractText,

    /// `json_value(col,'$.a.b')`
    FunctionExtractValue,

    /// `col['a']['b']`
    BracketIndexing,

    /// `col->'a'->>'b'`
    PostgresArrowChain,
}

impl Dialect {
    /// Every supported dialect, in declaration order.
    pub const ALL: [Dialect; 19] = [
        Dialect::Sqlite,
        Dialect::Mysql,
        Dialect::OdbcMysql,
        Dialect::CustomMysql,
        Dialect::SqlServer,
        Dialect::OdbcSqlServer,
        Dialect::CustomSqlServer,
        Dialect::Oracle,
        Dialect::OdbcOracle,
        Dialect::CustomOracle,
        Dialect::Dameng,
        Dialect::DuckDb,
        Dialect::Postgresql,
        Dialect::OdbcPostgresql,
        Dialect::CustomPostgresql,
        Dialect::KingbaseEs,
        Dialect::ShenTong,
        Dialect::Firebird,
        Dialect::ClickHouse,
    ];

    /// Returns the JSON navigation syntax of the dialect, or `None` when
    /// nested JSON paths cannot be queried on it.
    pub fn json_style(self) -> Option<JsonStyle> {
        use Dialect::*;

        match self {
            Sqlite | Mysql | OdbcMysql | CustomMysql => Some(JsonStyle::FunctionExtractText),
            SqlServer | OdbcSqlServer | CustomSqlServer | Oracle | OdbcOracle | CustomOracle
            | Dameng => Some(JsonStyle::FunctionExtractValue),
            DuckDb => Some(JsonStyle::BracketIndexing),
            Postgresql | OdbcPostgresql | CustomPostgresql | KingbaseEs | ShenTong => {
                Some(JsonStyle::PostgresArrowChain)
            }
            Firebird | ClickHouse => None,
        }
    }

    /// True when the dialect gets a native JSON column for JSON-mapped fields.
    ///
    /// Only the native PostgreSQL provider qualifies.
    pub fn supports_native_json(self) -> bool {
        matches!(self, Dialect::Postgresql)
    }

    /// True for the MySQL family, which compares enums as integers.
    pub fn is_mysql(self) -> bool {
        matches!(
            self,
            Dialect::Mysql | Dialect::OdbcMysql | Dialect::CustomMysql
        )
    }

    pub fn is_sql_server(self) -> bool {
        matches!(
            self,
            Dialect::SqlServer | Dialect::OdbcSqlServer | Dialect::CustomSqlServer
        )
    }

    pub fn is_oracle(self) -> bool {
        matches!(
            self,
            Dialect::Oracle | Dialect::OdbcOracle | Dialect::CustomOracle | Dialect::Dameng
        )
    }

    pub fn is_postgresql(self) -> bool {
        matches!(
            self,
            Dialect::Postgresql
                | Dialect::OdbcPostgresql
                | Dialect::CustomPostgresql
                | Dialect::KingbaseEs
                | Dialect::ShenTong
        )
    }

    /// The canonical name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        use Dialect::*;

        match self {
            Sqlite => "sqlite",
            Mysql => "mysql",
            OdbcMysql => "odbc-mysql",
            CustomMysql => "custom-mysql",
            SqlServer => "sqlserver",
            OdbcSqlServer => "odbc-sqlserver",
            CustomSqlServer => "custom-sqlserver",
            Oracle => "oracle",
            OdbcOracle => "odbc-oracle",
            CustomOracle => "custom-oracle",
            Dameng => "dameng",
            DuckDb => "duckdb",
            Postgresql => "postgresql",
            OdbcPostgresql => "odbc-postgresql",
            CustomPostgresql => "custom-postgresql",
            KingbaseEs => "kingbasees",
            ShenTong => "shentong",
            Firebird => "firebird",
            ClickHouse => "clickhouse",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");

        let alias = match normalized.as_str() {
            "postgres" | "pgsql" => "postgresql",
            "mssql" => "sqlserver",
            "kingbase" => "kingbasees",
            other => other,
        };

        Dialect::ALL
            .into_iter()
            .find(|dialect| dialect.name() == alias)
            .ok_or_else(|| crate::err!("unknown database dialect `{s}`"))
    }
}
