//! Cross-container move operations.
//!
//! The `position` argument is the requested insertion index into the target
//! child-id sequence. It is clamped to the sequence length, and the clamped
//! index is what lands in the moved entity's `position` field, so the id
//! sequence and the ordering key stay in agreement.

use super::DataManager;
use crate::types::{BoardId, CardId, ListId};

impl DataManager {
    /// Move a card from one list to another, inserting it at `position`.
    ///
    /// Returns `false` and changes nothing unless the card and both lists
    /// exist. Moving within a single list reorders it.
    pub fn move_card(
        &mut self,
        card_id: &CardId,
        from_list: &ListId,
        to_list: &ListId,
        position: u32,
    ) -> bool {
        if !self.cards.contains_key(card_id)
            || !self.lists.contains_key(from_list)
            || !self.lists.contains_key(to_list)
        {
            return false;
        }

        if let Some(from) = self.lists.get_mut(from_list) {
            from.remove_card(card_id);
        }
        let mut index = position as usize;
        if let Some(to) = self.lists.get_mut(to_list) {
            index = index.min(to.card_ids.len());
            to.insert_card(card_id.clone(), index);
        }
        if let Some(card) = self.cards.get_mut(card_id) {
            card.list_id = to_list.clone();
            card.position = index as u32;
            card.touch();
        }
        true
    }

    /// Move a list to another board, inserting it at `position`.
    ///
    /// Returns `false` and changes nothing unless the list, its current
    /// board, and the target board all exist.
    pub fn move_list(&mut self, list_id: &ListId, to_board: &BoardId, position: u32) -> bool {
        let Some(from_board) = self.lists.get(list_id).map(|l| l.board_id.clone()) else {
            return false;
        };
        if !self.boards.contains_key(&from_board) || !self.boards.contains_key(to_board) {
            return false;
        }

        if let Some(from) = self.boards.get_mut(&from_board) {
            from.remove_list(list_id);
        }
        let mut index = position as usize;
        if let Some(to) = self.boards.get_mut(to_board) {
            index = index.min(to.list_ids.len());
            to.insert_list(list_id.clone(), index);
        }
        if let Some(list) = self.lists.get_mut(list_id) {
            list.board_id = to_board.clone();
            list.position = index as u32;
            list.touch();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CreateBoard, CreateCard, CreateList};

    fn setup() -> (DataManager, BoardId, ListId, ListId, CardId) {
        let mut data = DataManager::new();
        let board_id = data.create_board(CreateBoard::new("Board")).id.clone();
        let from = data
            .create_list(CreateList::new("From", board_id.clone()))
            .id
            .clone();
        let to = data
            .create_list(CreateList::new("To", board_id.clone()))
            .id
            .clone();
        let card_id = data
            .create_card(CreateCard::new("Task", from.clone()))
            .id
            .clone();
        (data, board_id, from, to, card_id)
    }

    #[test]
    fn test_move_card_between_lists() {
        let (mut data, _board, from, to, card_id) = setup();
        data.create_card(CreateCard::new("existing", to.clone()));

        assert!(data.move_card(&card_id, &from, &to, 0));

        let card = data.card(&card_id).unwrap();
        assert_eq!(card.list_id, to);
        assert_eq!(card.position, 0);
        assert!(data.list(&from).unwrap().card_ids.is_empty());
        // Inserted at index 0, ahead of the existing card, exactly once.
        let to_list = data.list(&to).unwrap();
        assert_eq!(to_list.card_ids[0], card_id);
        assert_eq!(
            to_list.card_ids.iter().filter(|id| **id == card_id).count(),
            1
        );
    }

    #[test]
    fn test_move_card_appends_when_position_past_end() {
        let (mut data, _board, from, to, card_id) = setup();
        data.create_card(CreateCard::new("existing", to.clone()));

        assert!(data.move_card(&card_id, &from, &to, 99));
        let to_list = data.list(&to).unwrap();
        assert_eq!(to_list.card_ids[1], card_id);
        // The stored position is the clamped insertion index, not the
        // out-of-range request.
        assert_eq!(data.card(&card_id).unwrap().position, 1);
    }

    #[test]
    fn test_move_list_position_matches_insertion_index() {
        let (mut data, _board, from, _to, _card) = setup();
        let other = data.create_board(CreateBoard::new("Other")).id.clone();

        assert!(data.move_list(&from, &other, 7));
        assert_eq!(data.board(&other).unwrap().list_ids, vec![from.clone()]);
        assert_eq!(data.list(&from).unwrap().position, 0);
    }

    #[test]
    fn test_move_card_unknown_ids_change_nothing() {
        let (mut data, _board, from, to, card_id) = setup();

        assert!(!data.move_card(&CardId::from_string("card_x"), &from, &to, 0));
        assert!(!data.move_card(&card_id, &ListId::from_string("list_x"), &to, 0));
        assert!(!data.move_card(&card_id, &from, &ListId::from_string("list_x"), 0));

        let card = data.card(&card_id).unwrap();
        assert_eq!(card.list_id, from);
        assert_eq!(data.list(&from).unwrap().card_ids, vec![card_id]);
    }

    #[test]
    fn test_move_card_within_same_list_reorders() {
        let (mut data, _board, from, _to, card_id) = setup();
        data.create_card(CreateCard::new("second", from.clone()));

        assert!(data.move_card(&card_id, &from, &from, 1));
        let list = data.list(&from).unwrap();
        assert_eq!(list.card_ids[1], card_id);
        assert_eq!(list.card_ids.len(), 2);
    }

    #[test]
    fn test_move_list_between_boards() {
        let (mut data, board_id, from, _to, _card) = setup();
        let other = data.create_board(CreateBoard::new("Other")).id.clone();

        assert!(data.move_list(&from, &other, 0));

        let list = data.list(&from).unwrap();
        assert_eq!(list.board_id, other);
        assert_eq!(list.position, 0);
        assert!(!data.board(&board_id).unwrap().list_ids.contains(&from));
        assert_eq!(data.board(&other).unwrap().list_ids, vec![from]);
    }

    #[test]
    fn test_move_list_requires_both_boards() {
        let (mut data, board_id, from, _to, _card) = setup();

        assert!(!data.move_list(&from, &BoardId::from_string("board_x"), 0));
        assert!(!data.move_list(&ListId::from_string("list_x"), &board_id, 0));

        // An orphaned list cannot be moved: its current board must resolve.
        let orphan = data
            .create_list(CreateList::new("Orphan", BoardId::from_string("board_gone")))
            .id
            .clone();
        assert!(!data.move_list(&orphan, &board_id, 0));
    }
}
