//! List: the mid-tier container owning an ordered set of cards.

use super::ids::{BoardId, CardId, ListId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A list of cards belonging to exactly one board.
///
/// `board_id` is a weak back-reference: it records the relation but the list
/// does not own the board. `card_ids` order is the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: ListId,
    pub title: String,
    pub board_id: BoardId,
    #[serde(default)]
    pub card_ids: Vec<CardId>,
    #[serde(default)]
    pub position: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_archived: bool,
    /// Soft cap on card count; the list is over capacity when exceeded.
    #[serde(default)]
    pub wip_limit: Option<u32>,
    #[serde(default)]
    pub color: Option<String>,
}

impl List {
    /// Construct a list from a draft, generating its id and timestamps.
    pub fn new(draft: CreateList) -> Self {
        let now = Utc::now();
        Self {
            id: ListId::new(),
            title: draft.title,
            board_id: draft.board_id,
            card_ids: Vec::new(),
            position: draft.position.unwrap_or(0),
            created_at: now,
            updated_at: now,
            is_archived: false,
            wip_limit: draft.wip_limit,
            color: draft.color,
        }
    }

    /// Append a card id if not already present.
    pub fn add_card(&mut self, card_id: CardId) {
        if !self.card_ids.contains(&card_id) {
            self.card_ids.push(card_id);
            self.touch();
        }
    }

    /// Insert a card id at `index` (clamped to the sequence length).
    /// A no-op when the id is already present.
    pub fn insert_card(&mut self, card_id: CardId, index: usize) {
        if !self.card_ids.contains(&card_id) {
            let index = index.min(self.card_ids.len());
            self.card_ids.insert(index, card_id);
            self.touch();
        }
    }

    /// Detach a card id. Unknown ids are a silent no-op.
    pub fn remove_card(&mut self, card_id: &CardId) {
        if let Some(index) = self.card_ids.iter().position(|id| id == card_id) {
            self.card_ids.remove(index);
            self.touch();
        }
    }

    /// Replace the display order of the owned cards.
    pub fn reorder_cards(&mut self, order: Vec<CardId>) {
        self.card_ids = order;
        self.touch();
    }

    /// Move a card already in this list to `to_index` (clamped).
    /// Unknown ids and same-index moves are silent no-ops.
    pub fn move_card(&mut self, card_id: &CardId, to_index: usize) {
        if let Some(current) = self.card_ids.iter().position(|id| id == card_id) {
            let target = to_index.min(self.card_ids.len() - 1);
            if current != target {
                let id = self.card_ids.remove(current);
                self.card_ids.insert(target, id);
                self.touch();
            }
        }
    }

    /// Number of cards currently in the list.
    pub fn card_count(&self) -> usize {
        self.card_ids.len()
    }

    /// Whether the card count exceeds the WIP limit, when one is set.
    pub fn is_wip_exceeded(&self) -> bool {
        self.wip_limit
            .is_some_and(|limit| self.card_ids.len() as u32 > limit)
    }

    /// Refresh `updated_at` to the current time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Draft for creating a [`List`]. Title and owning board are required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateList {
    pub title: String,
    pub board_id: BoardId,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub wip_limit: Option<u32>,
    #[serde(default)]
    pub color: Option<String>,
}

impl CreateList {
    /// Start a draft with a title and owning board.
    pub fn new(title: impl Into<String>, board_id: impl Into<BoardId>) -> Self {
        Self {
            title: title.into(),
            board_id: board_id.into(),
            position: None,
            wip_limit: None,
            color: None,
        }
    }

    /// Set the ordering position among sibling lists.
    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the WIP limit (soft cap, at least 1).
    pub fn with_wip_limit(mut self, limit: u32) -> Self {
        self.wip_limit = Some(limit);
        self
    }

    /// Set the color (`#RRGGBB`).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Field patch for updating a [`List`].
#[derive(Debug, Clone, Default)]
pub struct UpdateList {
    pub title: Option<String>,
    pub board_id: Option<BoardId>,
    pub position: Option<u32>,
    pub is_archived: Option<bool>,
    pub wip_limit: Option<Option<u32>>,
    pub color: Option<Option<String>>,
}

impl UpdateList {
    /// Start an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
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

    /// Set the WIP limit.
    pub fn wip_limit(mut self, limit: u32) -> Self {
        self.wip_limit = Some(Some(limit));
        self
    }

    /// Clear the WIP limit.
    pub fn clear_wip_limit(mut self) -> Self {
        self.wip_limit = Some(None);
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

    /// Merge the patch into a list. Later write wins per field.
    pub(crate) fn apply(self, list: &mut List) {
        if let Some(title) = self.title {
            list.title = title;
        }
        if let Some(board_id) = self.board_id {
            list.board_id = board_id;
        }
        if let Some(position) = self.position {
            list.position = position;
        }
        if let Some(is_archived) = self.is_archived {
            list.is_archived = is_archived;
        }
        if let Some(wip_limit) = self.wip_limit {
            list.wip_limit = wip_limit;
        }
        if let Some(color) = self.color {
            list.color = color;
        }
    }
}
