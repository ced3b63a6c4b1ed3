//! The outbreak lists are client caches patched only after the backend
//! confirms a mutation. These scenarios pin the patch semantics.

use pretty_assertions::assert_eq;
use shared_types::{append_rows, remove_by_id, OutbreakLocation};

fn row(id: i64, location: &str) -> OutbreakLocation {
    OutbreakLocation {
        id,
        location: location.to_string(),
        coordinates: String::new(),
        bounding_box: None,
    }
}

#[test]
fn confirmed_insert_appends_returned_rows_in_order() {
    let mut list = vec![row(10, "Tarlac City, Tarlac"), row(11, "Carmen, Bohol")];
    let returned = vec![row(12, "Dropped pin (10.31570, 123.88540)")];

    append_rows(&mut list, returned);

    let ids: Vec<i64> = list.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![10, 11, 12]);
    assert_eq!(list[0].location, "Tarlac City, Tarlac");
}

#[test]
fn confirmed_delete_removes_exactly_the_deleted_id() {
    let mut list = vec![row(1, "a"), row(2, "b"), row(3, "c")];
    remove_by_id(&mut list, 2);
    let ids: Vec<i64> = list.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn failed_delete_leaves_the_list_untouched() {
    // the handler only patches after Ok; an error path never calls
    // remove_by_id, so the list must survive verbatim
    let before = vec![row(1, "a"), row(2, "b")];
    let mut list = before.clone();

    let delete_result: Result<(), &str> = Err("Location not found");
    if delete_result.is_ok() {
        remove_by_id(&mut list, 2);
    }

    assert_eq!(list, before);
}

#[test]
fn the_two_category_lists_are_independent() {
    let mut asf = vec![row(1, "asf site")];
    let mut red_tide = vec![row(1, "red tide site")];

    remove_by_id(&mut asf, 1);

    assert!(asf.is_empty());
    assert_eq!(red_tide.len(), 1);
    append_rows(&mut red_tide, vec![row(2, "another bay")]);
    assert_eq!(red_tide.len(), 2);
}

#[test]
fn insert_payload_round_trips_backend_rows() {
    // PostgREST returns the inserted rows verbatim; they must parse
    // straight into list rows
    let body = r#"[{
        "id": 42,
        "location": "Manila, Philippines",
        "coordinates": "14.59950, 120.98420",
        "bounding_box": "[\"14.3795\",\"14.8195\",\"120.7642\",\"121.2042\"]"
    }]"#;
    let rows: Vec<OutbreakLocation> = serde_json::from_str(body).unwrap();

    let mut list = Vec::new();
    append_rows(&mut list, rows);
    assert_eq!(list[0].id, 42);
    assert_eq!(list[0].coordinates, "14.59950, 120.98420");
    assert!(list[0].bounding_box.is_some());
}
