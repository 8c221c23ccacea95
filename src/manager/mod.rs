//! In-memory entity management for the board/list/card hierarchy.

mod mv;
mod query;
mod transfer;

pub use query::{BoardHierarchy, BoardStats, ListHierarchy};
pub use transfer::{DataExport, ImportReport};

use crate::types::{
    Board, BoardId, Card, CardId, CreateBoard, CreateCard, CreateList, List, ListId, UpdateBoard,
    UpdateCard, UpdateList,
};
use std::collections::HashMap;

/// Owner of the three entity collections.
///
/// All mutation goes through these methods, which keep the parent/child
/// id sequences consistent with the back-references: creating a child links
/// it into its parent when the parent resolves, deleting a parent cascades
/// to its children, and deleting a child detaches it from its parent.
///
/// Not-found conditions surface as `None`/`false` returns, never as errors.
/// Field validity is the caller's concern via [`crate::validate`]; the
/// manager does not reject malformed fields.
#[derive(Debug, Default)]
pub struct DataManager {
    pub(crate) boards: HashMap<BoardId, Board>,
    pub(crate) lists: HashMap<ListId, List>,
    pub(crate) cards: HashMap<CardId, Card>,
}

impl DataManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    // Board operations

    /// Construct and store a board.
    pub fn create_board(&mut self, draft: CreateBoard) -> &Board {
        let board = Board::new(draft);
        self.boards.entry(board.id.clone()).or_insert(board)
    }

    /// Look up a board by id.
    pub fn board(&self, id: &BoardId) -> Option<&Board> {
        self.boards.get(id)
    }

    /// All boards, ordered by position then creation time.
    pub fn boards(&self) -> Vec<&Board> {
        let mut all: Vec<&Board> = self.boards.values().collect();
        all.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        all
    }

    /// Merge a field patch into a board and refresh its timestamp.
    /// Returns `None` when the id is unknown.
    pub fn update_board(&mut self, id: &BoardId, patch: UpdateBoard) -> Option<&Board> {
        let board = self.boards.get_mut(id)?;
        patch.apply(board);
        board.touch();
        Some(board)
    }

    /// Delete a board and cascade to every list it owns (and their cards).
    /// Returns `false` when the id is unknown.
    pub fn delete_board(&mut self, id: &BoardId) -> bool {
        let Some(board) = self.boards.remove(id) else {
            return false;
        };
        for list_id in &board.list_ids {
            self.delete_list(list_id);
        }
        true
    }

    // List operations

    /// Construct and store a list, linking it into its board when the board
    /// resolves. An unknown board id still creates the list, orphaned.
    pub fn create_list(&mut self, draft: CreateList) -> &List {
        let list = List::new(draft);
        if let Some(board) = self.boards.get_mut(&list.board_id) {
            board.add_list(list.id.clone());
        }
        self.lists.entry(list.id.clone()).or_insert(list)
    }

    /// Look up a list by id.
    pub fn list(&self, id: &ListId) -> Option<&List> {
        self.lists.get(id)
    }

    /// Merge a field patch into a list and refresh its timestamp.
    pub fn update_list(&mut self, id: &ListId, patch: UpdateList) -> Option<&List> {
        let list = self.lists.get_mut(id)?;
        patch.apply(list);
        list.touch();
        Some(list)
    }

    /// Delete a list, cascade to its cards, and detach it from its board.
    pub fn delete_list(&mut self, id: &ListId) -> bool {
        let Some(list) = self.lists.remove(id) else {
            return false;
        };
        for card_id in &list.card_ids {
            self.delete_card(card_id);
        }
        if let Some(board) = self.boards.get_mut(&list.board_id) {
            board.remove_list(id);
        }
        true
    }

    /// Lists whose back-reference points at the board, ordered by position
    /// then creation time. Linear scan; no index is maintained.
    pub fn lists_by_board(&self, board_id: &BoardId) -> Vec<&List> {
        let mut found: Vec<&List> = self
            .lists
            .values()
            .filter(|list| &list.board_id == board_id)
            .collect();
        found.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        found
    }

    // Card operations

    /// Construct and store a card, linking it into its list when the list
    /// resolves. An unknown list id still creates the card, orphaned.
    pub fn create_card(&mut self, draft: CreateCard) -> &Card {
        let card = Card::new(draft);
        if let Some(list) = self.lists.get_mut(&card.list_id) {
            list.add_card(card.id.clone());
        }
        self.cards.entry(card.id.clone()).or_insert(card)
    }

    /// Look up a card by id.
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    /// Merge a field patch into a card and refresh its timestamp.
    pub fn update_card(&mut self, id: &CardId, patch: UpdateCard) -> Option<&Card> {
        let card = self.cards.get_mut(id)?;
        patch.apply(card);
        card.touch();
        Some(card)
    }

    /// Delete a card and detach it from its list.
    pub fn delete_card(&mut self, id: &CardId) -> bool {
        let Some(card) = self.cards.remove(id) else {
            return false;
        };
        if let Some(list) = self.lists.get_mut(&card.list_id) {
            list.remove_card(id);
        }
        true
    }

    /// Cards whose back-reference points at the list, ordered by position
    /// then creation time. Linear scan; no index is maintained.
    pub fn cards_by_list(&self, list_id: &ListId) -> Vec<&Card> {
        let mut found: Vec<&Card> = self
            .cards
            .values()
            .filter(|card| &card.list_id == list_id)
            .collect();
        found.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        found
    }

    // Collection sizes

    /// Number of stored boards.
    pub fn board_count(&self) -> usize {
        self.boards.len()
    }

    /// Number of stored lists.
    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    /// Number of stored cards.
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    // Mutable access for entity-level operations (labels, checklist, ...).

    /// Mutable access to a board for entity-level mutators.
    pub fn board_mut(&mut self, id: &BoardId) -> Option<&mut Board> {
        self.boards.get_mut(id)
    }

    /// Mutable access to a list for entity-level mutators.
    pub fn list_mut(&mut self, id: &ListId) -> Option<&mut List> {
        self.lists.get_mut(id)
    }

    /// Mutable access to a card for entity-level mutators.
    pub fn card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.get_mut(id)
    }
}
