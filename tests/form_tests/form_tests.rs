//! Tests for form handling with an explicit selection

use aqlstore::form::{self, FormInput};
use aqlstore::{AqlError, Config, PersonStore, Record};
use tempfile::TempDir;

fn setup_temp_store() -> (TempDir, PersonStore) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder().data_dir(temp_dir.path()).build();
    let store = PersonStore::open(config).unwrap();
    (temp_dir, store)
}

// =============================================================================
// apply()
// =============================================================================

#[test]
fn test_apply_without_selection() {
    let record = form::apply(None, &FormInput::new("Alice", "30", "X")).unwrap();

    assert_eq!(record, Record::new("Alice", 30, "X"));
    assert_eq!(record.id, 0);
}

#[test]
fn test_apply_keeps_selected_id() {
    let selected = Record::new("Old", 1, "Old").with_id(7);

    let record = form::apply(Some(&selected), &FormInput::new("New", "2", "New")).unwrap();

    assert_eq!(record, Record::new("New", 2, "New").with_id(7));
}

#[test]
fn test_apply_empty_age_is_zero() {
    let record = form::apply(None, &FormInput::new("A", "  ", "X")).unwrap();

    assert_eq!(record.age, 0);
}

#[test]
fn test_apply_rejects_bad_age() {
    let err = form::apply(None, &FormInput::new("A", "old", "X")).unwrap_err();

    assert!(matches!(err, AqlError::InvalidInput(_)));
}

#[test]
fn test_form_from_record() {
    let record = Record::new("Bob", 25, "Y").with_id(2);

    assert_eq!(FormInput::from_record(&record), FormInput::new("Bob", "25", "Y"));
}

// =============================================================================
// save() / delete_selected()
// =============================================================================

#[test]
fn test_save_without_selection_adds() {
    let (_temp, store) = setup_temp_store();

    let first = form::save(&store, None, &FormInput::new("Alice", "30", "X")).unwrap();
    let second = form::save(&store, None, &FormInput::new("Bob", "25", "Y")).unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn test_save_with_selection_updates() {
    let (_temp, store) = setup_temp_store();
    let saved = form::save(&store, None, &FormInput::new("Alice", "30", "X")).unwrap();

    let mut input = FormInput::from_record(&saved);
    input.city = "Springfield".to_string();
    let updated = form::save(&store, Some(&saved), &input).unwrap();

    assert_eq!(updated, Record::new("Alice", 30, "Springfield").with_id(1));
    assert_eq!(store.get_all().unwrap(), vec![updated]);
}

#[test]
fn test_save_with_stale_selection_writes_nothing() {
    let (_temp, store) = setup_temp_store();
    let stale = Record::new("Gone", 1, "X").with_id(5);

    form::save(&store, Some(&stale), &FormInput::new("Gone", "2", "X")).unwrap();

    assert!(store.get_all().unwrap().is_empty());
}

#[test]
fn test_save_bad_input_writes_nothing() {
    let (_temp, store) = setup_temp_store();

    assert!(form::save(&store, None, &FormInput::new("A", "x", "X")).is_err());
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_delete_selected() {
    let (_temp, store) = setup_temp_store();
    let saved = form::save(&store, None, &FormInput::new("Alice", "30", "X")).unwrap();

    assert_eq!(form::delete_selected(&store, None).unwrap(), None);
    assert_eq!(store.count().unwrap(), 1);

    assert_eq!(form::delete_selected(&store, Some(&saved)).unwrap(), Some(1));
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_delete_stale_selection_returns_none() {
    let (_temp, store) = setup_temp_store();
    let saved = form::save(&store, None, &FormInput::new("Alice", "30", "X")).unwrap();
    store.delete(saved.id).unwrap();
    let before = store.read_raw().unwrap();

    assert_eq!(form::delete_selected(&store, Some(&saved)).unwrap(), None);
    assert_eq!(store.read_raw().unwrap(), before);
}
