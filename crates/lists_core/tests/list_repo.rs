use lists_core::db::open_db_in_memory;
use lists_core::{ItemValidationError, ListRepository, RepoError, SqliteListRepository};
use std::collections::HashSet;
use uuid::Uuid;

#[test]
fn create_list_persists_an_empty_list() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::try_new(&conn).unwrap();

    let list_id = repo.create_list().unwrap();

    let loaded = repo.get_list(list_id).unwrap().unwrap();
    assert_eq!(loaded.id, list_id);
    assert!(repo.list_items(list_id).unwrap().is_empty());
    assert_eq!(repo.count_lists().unwrap(), 1);
}

#[test]
fn list_ids_are_unique() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::try_new(&conn).unwrap();

    let ids: HashSet<_> = (0..20).map(|_| repo.create_list().unwrap()).collect();
    assert_eq!(ids.len(), 20);
}

#[test]
fn get_list_returns_none_for_unknown_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::try_new(&conn).unwrap();
    repo.create_list().unwrap();

    assert!(repo.get_list(Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn list_items_keeps_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::try_new(&conn).unwrap();
    let list_id = repo.create_list().unwrap();

    for text in ["c", "a", "b"] {
        repo.create_item(text, list_id).unwrap();
    }

    let texts: Vec<_> = repo
        .list_items(list_id)
        .unwrap()
        .into_iter()
        .map(|item| item.text)
        .collect();
    assert_eq!(texts, ["c", "a", "b"]);
}

#[test]
fn list_items_only_returns_items_of_that_list() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::try_new(&conn).unwrap();
    let correct = repo.create_list().unwrap();
    let other = repo.create_list().unwrap();
    repo.create_item("itemey 1", correct).unwrap();
    repo.create_item("other list item 1", other).unwrap();
    repo.create_item("itemey 2", correct).unwrap();

    let items = repo.list_items(correct).unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| item.list_id == correct));
    assert_eq!(items[0].text, "itemey 1");
    assert_eq!(items[1].text, "itemey 2");
}

#[test]
fn create_item_rejects_empty_text_without_side_effects() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::try_new(&conn).unwrap();
    let list_id = repo.create_list().unwrap();

    let err = repo.create_item("", list_id).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ItemValidationError::EmptyText)
    ));
    assert_eq!(repo.count_items().unwrap(), 0);
    assert_eq!(repo.count_lists().unwrap(), 1);
}

#[test]
fn create_item_accepts_whitespace_only_text() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::try_new(&conn).unwrap();
    let list_id = repo.create_list().unwrap();

    repo.create_item("   ", list_id).unwrap();
    assert_eq!(repo.list_items(list_id).unwrap()[0].text, "   ");
}

#[test]
fn create_item_for_unknown_list_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::try_new(&conn).unwrap();
    let missing = Uuid::new_v4();

    let err = repo.create_item("orphan", missing).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing));
    assert_eq!(repo.count_items().unwrap(), 0);
    assert_eq!(repo.count_lists().unwrap(), 0);
}

#[test]
fn in_transaction_commits_on_success() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::try_new(&conn).unwrap();

    let list_id = repo
        .in_transaction(|repo| {
            let list_id = repo.create_list()?;
            repo.create_item("first", list_id)?;
            Ok(list_id)
        })
        .unwrap();

    assert_eq!(repo.list_items(list_id).unwrap().len(), 1);
}

#[test]
fn in_transaction_rolls_back_on_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::try_new(&conn).unwrap();

    let result: Result<(), RepoError> = repo.in_transaction(|repo| {
        let list_id = repo.create_list()?;
        repo.create_item("", list_id)?;
        Ok(())
    });

    assert!(result.is_err());
    assert_eq!(repo.count_lists().unwrap(), 0);
    assert_eq!(repo.count_items().unwrap(), 0);
}

#[test]
fn corrupted_item_row_is_reported_not_masked() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteListRepository::try_new(&conn).unwrap();
    let list_id = repo.create_list().unwrap();
    conn.execute(
        "INSERT INTO items (uuid, list_uuid, text) VALUES ('not-a-uuid', ?1, 'x');",
        [list_id.to_string()],
    )
    .unwrap();

    let err = repo.list_items(list_id).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}
