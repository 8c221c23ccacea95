//! Kanban board data engine: boards, lists, and cards.
//!
//! This crate is the data layer of a kanban application: an in-memory
//! [`DataManager`] that owns the board → list → card hierarchy and keeps the
//! parent/child references consistent, a [`validate`] module with one
//! canonical rule table per entity type, and a [`storage`] layer that
//! persists JSON values through a pluggable key-value backend with
//! namespacing, versioning, and base64 backup envelopes.
//!
//! ## Design
//!
//! - **Single owner, single thread** - one `DataManager` instance owns all
//!   three collections; every operation runs to completion synchronously.
//! - **Tolerant reads, consistent writes** - mutations keep child-id
//!   sequences and back-references in agreement (cascading deletes, linked
//!   creates), while read paths skip dangling ids instead of failing.
//! - **Never raise** - not-found is `None`/`false`, field problems are a
//!   [`validate::Validation`] report, and storage failures degrade to
//!   negative results at the [`storage::Storage`] boundary.
//!
//! ## Basic Usage
//!
//! ```rust
//! use ocean_kanban::{CreateBoard, CreateCard, CreateList, DataManager};
//!
//! let mut data = DataManager::new();
//!
//! let board_id = data.create_board(CreateBoard::new("Release 1.0")).id.clone();
//! let todo = data
//!     .create_list(CreateList::new("Todo", board_id.clone()))
//!     .id
//!     .clone();
//! data.create_card(CreateCard::new("Write changelog", todo.clone()));
//!
//! let tree = data.board_hierarchy(&board_id).unwrap();
//! assert_eq!(tree.lists[0].cards[0].title, "Write changelog");
//!
//! let stats = data.board_stats(&board_id).unwrap();
//! assert_eq!(stats.total_cards, 1);
//! ```
//!
//! ## Persistence
//!
//! ```rust
//! use ocean_kanban::storage::{MemoryStore, Storage};
//! use ocean_kanban::{CreateBoard, DataManager};
//!
//! let mut data = DataManager::new();
//! data.create_board(CreateBoard::new("Persisted"));
//!
//! let mut storage = Storage::new(MemoryStore::new());
//! let snapshot = serde_json::to_value(data.export()).unwrap();
//! assert!(storage.set("data", &snapshot));
//!
//! let mut restored = DataManager::new();
//! restored.import_value(&storage.get("data").unwrap());
//! assert_eq!(restored.board_count(), 1);
//! ```

pub mod error;
pub mod manager;
pub mod storage;
pub mod types;
pub mod validate;

pub use error::{KanbanError, Result};
pub use manager::{BoardHierarchy, BoardStats, DataExport, DataManager, ImportReport, ListHierarchy};
pub use types::{
    Attachment, AttachmentId, Board, BoardId, Card, CardId, ChecklistItem, ChecklistItemId,
    ChecklistProgress, Comment, CommentId, CreateBoard, CreateCard, CreateList, List, ListId,
    Priority, UpdateBoard, UpdateCard, UpdateList,
};
pub use validate::{
    validate_attachment, validate_board, validate_card, validate_checklist_item, validate_comment,
    validate_list, Validation,
};
