//! Read-side queries: hierarchy assembly, search, and statistics.

use super::DataManager;
use crate::types::{Board, BoardId, Card, List, ListId};
use serde::Serialize;
use std::collections::HashSet;

/// A board with its lists and their cards embedded, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct BoardHierarchy {
    #[serde(flatten)]
    pub board: Board,
    pub lists: Vec<ListHierarchy>,
}

/// A list with its cards embedded, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct ListHierarchy {
    #[serde(flatten)]
    pub list: List,
    pub cards: Vec<Card>,
}

/// Aggregate numbers for one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStats {
    pub board_id: BoardId,
    pub total_lists: usize,
    pub total_cards: usize,
    pub completed_cards: usize,
    /// `round(completed / total * 100)`; 0 when the board has no cards.
    pub completion_percentage: u32,
}

impl DataManager {
    /// Assemble the nested board → lists → cards snapshot, following the
    /// child-id sequences (display order). Dangling ids are skipped; the
    /// read path tolerates inconsistency rather than failing.
    /// Returns `None` when the board itself is unknown.
    pub fn board_hierarchy(&self, board_id: &BoardId) -> Option<BoardHierarchy> {
        let board = self.boards.get(board_id)?;
        let lists = board
            .list_ids
            .iter()
            .filter_map(|list_id| self.lists.get(list_id))
            .map(|list| ListHierarchy {
                cards: list
                    .card_ids
                    .iter()
                    .filter_map(|card_id| self.cards.get(card_id))
                    .cloned()
                    .collect(),
                list: list.clone(),
            })
            .collect();
        Some(BoardHierarchy {
            board: board.clone(),
            lists,
        })
    }

    /// Case-insensitive substring search over card title, description, and
    /// labels. With `board_id`, only cards whose owning list belongs to that
    /// board are considered.
    pub fn search_cards(&self, query: &str, board_id: Option<&BoardId>) -> Vec<&Card> {
        let needle = query.to_lowercase();
        let scope: Option<HashSet<&ListId>> = board_id.map(|board_id| {
            self.lists
                .values()
                .filter(|list| &list.board_id == board_id)
                .map(|list| &list.id)
                .collect()
        });

        let mut found: Vec<&Card> = self
            .cards
            .values()
            .filter(|card| match &scope {
                Some(list_ids) => list_ids.contains(&card.list_id),
                None => true,
            })
            .filter(|card| {
                card.title.to_lowercase().contains(&needle)
                    || card.description.to_lowercase().contains(&needle)
                    || card
                        .labels
                        .iter()
                        .any(|label| label.to_lowercase().contains(&needle))
            })
            .collect();
        found.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        found
    }

    /// Aggregate counts for a board, or `None` when it is unknown.
    ///
    /// Totals come from the lists' card-id sequences; completion is counted
    /// over the cards that actually resolve.
    pub fn board_stats(&self, board_id: &BoardId) -> Option<BoardStats> {
        if !self.boards.contains_key(board_id) {
            return None;
        }

        let lists = self.lists_by_board(board_id);
        let total_cards: usize = lists.iter().map(|list| list.card_ids.len()).sum();
        let completed_cards: usize = lists
            .iter()
            .map(|list| {
                self.cards_by_list(&list.id)
                    .iter()
                    .filter(|card| card.is_completed)
                    .count()
            })
            .sum();
        let completion_percentage = if total_cards > 0 {
            (completed_cards as f64 / total_cards as f64 * 100.0).round() as u32
        } else {
            0
        };

        Some(BoardStats {
            board_id: board_id.clone(),
            total_lists: lists.len(),
            total_cards,
            completed_cards,
            completion_percentage,
        })
    }
}
