//! Board: the top-level container owning an ordered set of lists.

use super::ids::{BoardId, ListId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default board color applied when a draft does not specify one.
pub const DEFAULT_BOARD_COLOR: &str = "#0079bf";

/// Top-level kanban container.
///
/// Owns its lists through `list_ids`; the vector order is the display order.
/// Field names serialize in camelCase to stay compatible with the stored
/// wire format (`listIds`, `isArchived`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub list_ids: Vec<ListId>,
    #[serde(default)]
    pub position: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub collaborators: Vec<String>,
}

impl Board {
    /// Construct a board from a draft, generating its id and timestamps and
    /// filling every omitted field with its default.
    pub fn new(draft: CreateBoard) -> Self {
        let now = Utc::now();
        Self {
            id: BoardId::new(),
            title: draft.title,
            description: draft.description.unwrap_or_default(),
            color: draft.color.or_else(|| Some(DEFAULT_BOARD_COLOR.to_string())),
            list_ids: Vec::new(),
            position: draft.position.unwrap_or(0),
            created_at: now,
            updated_at: now,
            is_archived: false,
            owner: draft.owner,
            collaborators: draft.collaborators,
        }
    }

    /// Append a list id if not already present.
    pub fn add_list(&mut self, list_id: ListId) {
        if !self.list_ids.contains(&list_id) {
            self.list_ids.push(list_id);
            self.touch();
        }
    }

    /// Insert a list id at `index` (clamped to the sequence length).
    /// A no-op when the id is already present.
    pub fn insert_list(&mut self, list_id: ListId, index: usize) {
        if !self.list_ids.contains(&list_id) {
            let index = index.min(self.list_ids.len());
            self.list_ids.insert(index, list_id);
            self.touch();
        }
    }

    /// Detach a list id. Unknown ids are a silent no-op.
    pub fn remove_list(&mut self, list_id: &ListId) {
        if let Some(index) = self.list_ids.iter().position(|id| id == list_id) {
            self.list_ids.remove(index);
            self.touch();
        }
    }

    /// Replace the display order of the owned lists.
    pub fn reorder_lists(&mut self, order: Vec<ListId>) {
        self.list_ids = order;
        self.touch();
    }

    /// Refresh `updated_at` to the current time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Draft for creating a [`Board`]. Everything except the title is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateBoard {
    pub title: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub position: Option<u32>,
    pub owner: Option<String>,
    pub collaborators: Vec<String>,
}

impl CreateBoard {
    /// Start a draft with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the color (`#RRGGBB`).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the ordering position among sibling boards.
    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the owner.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Set the collaborators.
    pub fn with_collaborators(mut self, collaborators: Vec<String>) -> Self {
        self.collaborators = collaborators;
        self
    }
}

/// Field patch for updating a [`Board`]. `None` leaves a field untouched;
/// nullable fields use a double `Option` so they can be cleared explicitly.
#[derive(Debug, Clone, Default)]
pub struct UpdateBoard {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<Option<String>>,
    pub position: Option<u32>,
    pub is_archived: Option<bool>,
    pub owner: Option<Option<String>>,
    pub collaborators: Option<Vec<String>>,
}

impl UpdateBoard {
    /// Start an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(Some(color.into()));
        self
    }

    /// Clear the color.
    pub fn clear_color(mut self) -> Self {
        self.color = Some(None);
        self
    }

    /// Set the position.
    pub fn position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    /// Set or clear the archived flag.
    pub fn archived(mut self, archived: bool) -> Self {
        self.is_archived = Some(archived);
        self
    }

    /// Set the owner.
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(Some(owner.into()));
        self
    }

    /// Clear the owner.
    pub fn clear_owner(mut self) -> Self {
        self.owner = Some(None);
        self
    }

    /// Replace the collaborators.
    pub fn collaborators(mut self, collaborators: Vec<String>) -> Self {
        self.collaborators = Some(collaborators);
        self
    }

    /// Merge the patch into a board. Later write wins per field.
    pub(crate) fn apply(self, board: &mut Board) {
        if let Some(title) = self.title {
            board.title = title;
        }
        if let Some(description) = self.description {
            board.description = description;
        }
        if let Some(color) = self.color {
            board.color = color;
        }
        if let Some(position) = self.position {
            board.position = position;
        }
        if let Some(is_archived) = self.is_archived {
            board.is_archived = is_archived;
        }
        if let Some(owner) = self.owner {
            board.owner = owner;
        }
        if let Some(collaborators) = self.collaborators {
            board.collaborators = collaborators;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_creation_defaults() {
        let board = Board::new(CreateBoard::new("Launch plan"));
        assert!(board.id.has_prefix());
        assert_eq!(board.title, "Launch plan");
        assert_eq!(board.description, "");
        assert_eq!(board.color.as_deref(), Some(DEFAULT_BOARD_COLOR));
        assert!(board.list_ids.is_empty());
        assert_eq!(board.position, 0);
        assert!(!board.is_archived);
        assert!(board.owner.is_none());
        assert_eq!(board.created_at, board.updated_at);
    }

    #[test]
    fn test_board_draft_builders() {
        let board = Board::new(
            CreateBoard::new("Team")
                .with_description("Shared work")
                .with_color("#112233")
                .with_position(3)
                .with_owner("alice")
                .with_collaborators(vec!["bob".into()]),
        );
        assert_eq!(board.description, "Shared work");
        assert_eq!(board.color.as_deref(), Some("#112233"));
        assert_eq!(board.position, 3);
        assert_eq!(board.owner.as_deref(), Some("alice"));
        assert_eq!(board.collaborators, vec!["bob".to_string()]);
    }

    #[test]
    fn test_add_list_is_idempotent() {
        let mut board = Board::new(CreateBoard::new("B"));
        let list_id = ListId::from_string("list_1");
        board.add_list(list_id.clone());
        let stamped = board.updated_at;
        board.add_list(list_id.clone());
        assert_eq!(board.list_ids, vec![list_id]);
        // No second mutation, so no timestamp refresh either.
        assert_eq!(board.updated_at, stamped);
    }

    #[test]
    fn test_remove_list_unknown_is_noop() {
        let mut board = Board::new(CreateBoard::new("B"));
        board.add_list(ListId::from_string("list_1"));
        let stamped = board.updated_at;
        board.remove_list(&ListId::from_string("list_missing"));
        assert_eq!(board.list_ids.len(), 1);
        assert_eq!(board.updated_at, stamped);

        board.remove_list(&ListId::from_string("list_1"));
        assert!(board.list_ids.is_empty());
    }

    #[test]
    fn test_reorder_lists() {
        let mut board = Board::new(CreateBoard::new("B"));
        board.add_list(ListId::from_string("list_a"));
        board.add_list(ListId::from_string("list_b"));
        board.reorder_lists(vec![
            ListId::from_string("list_b"),
            ListId::from_string("list_a"),
        ]);
        assert_eq!(board.list_ids[0].as_str(), "list_b");
    }

    #[test]
    fn test_update_patch_merges_and_clears() {
        let mut board = Board::new(CreateBoard::new("B").with_owner("alice"));
        UpdateBoard::new()
            .title("Renamed")
            .archived(true)
            .clear_owner()
            .apply(&mut board);
        assert_eq!(board.title, "Renamed");
        assert!(board.is_archived);
        assert!(board.owner.is_none());
        // Untouched fields survive the merge.
        assert_eq!(board.color.as_deref(), Some(DEFAULT_BOARD_COLOR));
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut board = Board::new(
            CreateBoard::new("Wire")
                .with_description("shape")
                .with_owner("alice"),
        );
        board.add_list(ListId::from_string("list_1"));

        let json = serde_json::to_value(&board).unwrap();
        // Wire format is camelCase and carries every field, set or not.
        assert!(json.get("listIds").is_some());
        assert!(json.get("isArchived").is_some());
        assert!(json.get("createdAt").is_some());

        let back: Board = serde_json::from_value(json).unwrap();
        assert_eq!(back, board);
    }
}
