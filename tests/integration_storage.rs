//! Integration tests for file-backed persistence and backup.

use ocean_kanban::storage::{FileStore, KeyValue, MemoryStore, Storage, StorageConfig};
use ocean_kanban::{CreateBoard, CreateCard, CreateList, DataManager};
use serde_json::json;
use tempfile::TempDir;

fn file_storage(temp: &TempDir) -> Storage<FileStore> {
    Storage::new(FileStore::new(temp.path().join("kanban")))
}

#[test]
fn test_file_backed_session_round_trip() {
    let temp = TempDir::new().unwrap();

    // Session one: build a board and persist the export.
    let mut data = DataManager::new();
    let board_id = data.create_board(CreateBoard::new("Persistent")).id.clone();
    let list_id = data
        .create_list(CreateList::new("Todo", board_id.clone()))
        .id
        .clone();
    data.create_card(CreateCard::new("survive restart", list_id));

    let mut storage = file_storage(&temp);
    assert!(storage.initialize());
    let snapshot = serde_json::to_value(data.export()).unwrap();
    assert!(storage.set("data", &snapshot));

    // Session two: fresh manager, same directory.
    let storage = file_storage(&temp);
    let mut restored = DataManager::new();
    let report = restored.import_value(&storage.get("data").unwrap());
    assert_eq!(report.boards, 1);
    assert_eq!(report.cards, 1);

    let tree = restored.board_hierarchy(&board_id).unwrap();
    assert_eq!(tree.lists[0].cards[0].title, "survive restart");
}

#[test]
fn test_files_carry_the_namespace_prefix() {
    let temp = TempDir::new().unwrap();
    let mut storage = file_storage(&temp);
    storage.set("boards", &json!([]));

    assert!(temp
        .path()
        .join("kanban")
        .join("ocean_kanban_boards.json")
        .exists());
    assert_eq!(storage.stored_keys(), vec!["boards".to_string()]);
}

#[test]
fn test_prefix_isolation_between_configs() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("shared");

    let mut a = Storage::with_config(
        FileStore::new(dir.clone()),
        StorageConfig {
            prefix: "a_".to_string(),
            version: "1.0.0".to_string(),
        },
    );
    let mut b = Storage::with_config(
        FileStore::new(dir),
        StorageConfig {
            prefix: "b_".to_string(),
            version: "1.0.0".to_string(),
        },
    );

    a.set("boards", &json!(["a"]));
    b.set("boards", &json!(["b"]));
    assert_eq!(a.get("boards").unwrap()[0], "a");

    // Clearing one namespace leaves the other intact.
    assert!(a.clear());
    assert!(a.get("boards").is_none());
    assert_eq!(b.get("boards").unwrap()[0], "b");
}

#[test]
fn test_backup_moves_between_backends() {
    let temp = TempDir::new().unwrap();
    let mut file_storage = file_storage(&temp);
    file_storage.initialize();
    file_storage.set("boards", &json!([{"id": "board_1", "title": "Backed up"}]));

    // Back up from the file store, restore into a memory store.
    let blob = file_storage.create_backup().unwrap();
    let mut memory_storage = Storage::new(MemoryStore::new());
    memory_storage.restore_backup(&blob).unwrap();

    assert_eq!(
        memory_storage.get("boards").unwrap()[0]["title"],
        "Backed up"
    );
    assert_eq!(memory_storage.get("app_version").unwrap(), json!("1.0.0"));
}

#[test]
fn test_restore_rejects_truncated_blob() {
    let temp = TempDir::new().unwrap();
    let mut storage = file_storage(&temp);
    storage.set("boards", &json!([1]));

    let blob = storage.create_backup().unwrap();
    let truncated = &blob[..blob.len() / 2];
    assert!(storage.restore_backup(truncated).is_err());

    // Failed restore leaves the namespace untouched.
    assert_eq!(storage.get("boards").unwrap(), json!([1]));
}

#[test]
fn test_migrate_after_version_bump() {
    let temp = TempDir::new().unwrap();
    {
        let mut old = Storage::with_config(
            FileStore::new(temp.path().join("kanban")),
            StorageConfig {
                prefix: "ocean_kanban_".to_string(),
                version: "0.9.0".to_string(),
            },
        );
        old.initialize();
        assert_eq!(old.get("app_version").unwrap(), json!("0.9.0"));
    }

    let mut current = file_storage(&temp);
    assert!(current.migrate());
    assert_eq!(current.get("app_version").unwrap(), json!("1.0.0"));
    assert!(!current.migrate());
}

#[test]
fn test_stats_reflect_stored_values() {
    let temp = TempDir::new().unwrap();
    let mut storage = file_storage(&temp);
    storage.set("boards", &json!([]));
    storage.set("user_preferences", &json!({"theme": "ocean"}));

    let stats = storage.stats();
    assert_eq!(stats.item_count, 2);
    assert!(stats.total_bytes > 2);

    // Raw backend sees the same two files.
    assert_eq!(storage.backend().keys().unwrap().len(), 2);
}
