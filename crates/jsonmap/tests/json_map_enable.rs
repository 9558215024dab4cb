mod common;
use common::*;

use jsonmap::{driver::Dialect, stmt::Expr, JsonMap, JsonOptions};
use pretty_assertions::assert_eq;

#[test]
fn enable_twice_installs_once() {
    let db = common::db(Dialect::Sqlite);
    let map = JsonMap::new(JsonOptions::default());

    map.enable(&db);
    map.enable(&db);

    assert_eq!(map.installations(), 1);
    assert_eq!(db.aop().configure_field_handlers().len(), 1);
    assert_eq!(db.aop().parse_expression_hooks().len(), 1);
}

#[test]
fn concurrent_enable_installs_once() {
    let dbs = (0..8).map(|_| common::db(Dialect::Sqlite)).collect::<Vec<_>>();
    let map = JsonMap::new(JsonOptions::default());

    std::thread::scope(|s| {
        for db in &dbs {
            for _ in 0..4 {
                s.spawn(|| map.enable(db));
            }
        }
    });

    assert_eq!(map.installations(), 1);
    for db in &dbs {
        assert_eq!(db.aop().configure_field_handlers().len(), 1);
    }
}

#[test]
fn concurrent_first_configuration() {
    let (db, map) = setup(Dialect::Sqlite);

    let sql = std::thread::scope(|s| {
        let handles = (0..8)
            .map(|_| s.spawn(|| db.filter_sql::<User>(&Expr::eq(User::city(), "X"))))
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect::<Vec<_>>()
    });

    for sql in sql {
        assert_eq!(sql, "json_extract(a.\"Profile\",'$.Address.City') = 'X'");
    }
    assert_eq!(map.registry().len(), 1);
}

#[test]
fn dialect_without_json_paths_gets_no_translation_hook() {
    let db = common::db(Dialect::ClickHouse);
    let map = JsonMap::new(JsonOptions::default());
    map.enable(&db);

    assert_eq!(db.aop().configure_field_handlers().len(), 1);
    assert!(db.aop().parse_expression_hooks().is_empty());
}

#[test]
fn independent_maps_do_not_share_types() {
    let (db, map) = setup(Dialect::Sqlite);
    db.table::<User>().unwrap();

    let other = JsonMap::new(JsonOptions::default());
    assert!(map.is_mapped::<Profile>());
    assert!(!other.is_mapped::<Profile>());
}
