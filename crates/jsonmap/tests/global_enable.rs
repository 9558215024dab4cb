mod common;
use common::*;

use jsonmap::{driver::Dialect, use_json_map, use_json_map_with, JsonOptions};

#[test]
fn global_registry_is_created_once() {
    let sqlite = common::db(Dialect::Sqlite);
    let postgres = common::db(Dialect::Postgresql);

    let first = use_json_map_with(&sqlite, JsonOptions::default().escape_non_ascii(true));
    let again = use_json_map(&sqlite);
    let other = use_json_map(&postgres);

    assert!(std::ptr::eq(first, again));
    assert!(std::ptr::eq(first, other));
    assert_eq!(first.installations(), 1);

    // The first caller's options stick
    assert!(first.options().escape_non_ascii);

    let table = postgres.table::<User>().unwrap();
    assert!(table.column("Profile").unwrap().storage_ty.is_json());
    assert!(first.is_mapped::<Profile>());
}
