use jsonmap_core::driver::{Dialect, JsonStyle};

#[test]
fn parse_canonical_names() {
    for dialect in Dialect::ALL {
        assert_eq!(dialect.name().parse::<Dialect>().unwrap(), dialect);
    }
}

#[test]
fn parse_aliases() {
    assert_eq!("postgres".parse::<Dialect>().unwrap(), Dialect::Postgresql);
    assert_eq!(" MSSQL ".parse::<Dialect>().unwrap(), Dialect::SqlServer);
    assert_eq!("odbc_mysql".parse::<Dialect>().unwrap(), Dialect::OdbcMysql);
}

#[test]
fn parse_unknown_fails() {
    let err = "access".parse::<Dialect>().unwrap_err();
    assert_eq!(err.to_string(), "unknown database dialect `access`");
}

#[test]
fn json_style_per_family() {
    assert_eq!(
        Dialect::Sqlite.json_style(),
        Some(JsonStyle::FunctionExtractText)
    );
    assert_eq!(
        Dialect::CustomMysql.json_style(),
        Some(JsonStyle::FunctionExtractText)
    );
    assert_eq!(
        Dialect::Dameng.json_style(),
        Some(JsonStyle::FunctionExtractValue)
    );
    assert_eq!(
        Dialect::OdbcSqlServer.json_style(),
        Some(JsonStyle::FunctionExtractValue)
    );
    assert_eq!(Dialect::DuckDb.json_style(), Some(JsonStyle::BracketIndexing));
    assert_eq!(
        Dialect::ShenTong.json_style(),
        Some(JsonStyle::PostgresArrowChain)
    );
    assert_eq!(Dialect::Firebird.json_style(), None);
    assert_eq!(Dialect::ClickHouse.json_style(), None);
}

#[test]
fn native_json_only_for_postgresql() {
    let native: Vec<_> = Dialect::ALL
        .into_iter()
        .filter(|dialect| dialect.supports_native_json())
        .collect();

    assert_eq!(native, [Dialect::Postgresql]);
}
