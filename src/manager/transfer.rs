//! Full-state export and import. One schema for both directions; the
//! serialized entity shape is the wire format external tools must match.

use super::DataManager;
use crate::types::{Board, Card, List};
use crate::validate::{validate_board, validate_card, validate_list};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Snapshot of all three collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataExport {
    #[serde(default)]
    pub boards: Vec<Board>,
    #[serde(default)]
    pub lists: Vec<List>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Counts from one import pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub boards: usize,
    pub lists: usize,
    pub cards: usize,
    /// Records dropped for failing to decode or validate.
    pub skipped: usize,
}

impl DataManager {
    /// Snapshot every collection, ordered by id for stable output.
    pub fn export(&self) -> DataExport {
        let mut boards: Vec<Board> = self.boards.values().cloned().collect();
        boards.sort_by(|a, b| a.id.cmp(&b.id));
        let mut lists: Vec<List> = self.lists.values().cloned().collect();
        lists.sort_by(|a, b| a.id.cmp(&b.id));
        let mut cards: Vec<Card> = self.cards.values().cloned().collect();
        cards.sort_by(|a, b| a.id.cmp(&b.id));
        DataExport {
            boards,
            lists,
            cards,
        }
    }

    /// Replace all in-memory state with the snapshot.
    ///
    /// Records that fail validation are skipped with a warning; one bad
    /// record never aborts the rest of the import.
    pub fn import(&mut self, data: DataExport) -> ImportReport {
        self.boards.clear();
        self.lists.clear();
        self.cards.clear();

        let mut report = ImportReport::default();

        for board in data.boards {
            let validation = validate_board(&board);
            if !validation.is_valid {
                warn!(id = %board.id, errors = ?validation.errors, "skipping invalid board on import");
                report.skipped += 1;
                continue;
            }
            self.boards.insert(board.id.clone(), board);
            report.boards += 1;
        }
        for list in data.lists {
            let validation = validate_list(&list);
            if !validation.is_valid {
                warn!(id = %list.id, errors = ?validation.errors, "skipping invalid list on import");
                report.skipped += 1;
                continue;
            }
            self.lists.insert(list.id.clone(), list);
            report.lists += 1;
        }
        for card in data.cards {
            let validation = validate_card(&card);
            if !validation.is_valid {
                warn!(id = %card.id, errors = ?validation.errors, "skipping invalid card on import");
                report.skipped += 1;
                continue;
            }
            self.cards.insert(card.id.clone(), card);
            report.cards += 1;
        }

        report
    }

    /// Import from raw JSON, e.g. a value read back from storage.
    ///
    /// Each record is decoded individually, so an undecodable record is
    /// skipped (with a warning) instead of failing the whole payload.
    pub fn import_value(&mut self, value: &Value) -> ImportReport {
        let mut data = DataExport::default();
        let mut undecodable = 0usize;

        for key in ["boards", "lists", "cards"] {
            let Some(records) = value.get(key).and_then(Value::as_array) else {
                continue;
            };
            for record in records {
                let decoded = match key {
                    "boards" => serde_json::from_value::<Board>(record.clone())
                        .map(|b| data.boards.push(b)),
                    "lists" => {
                        serde_json::from_value::<List>(record.clone()).map(|l| data.lists.push(l))
                    }
                    _ => {
                        serde_json::from_value::<Card>(record.clone()).map(|c| data.cards.push(c))
                    }
                };
                if let Err(error) = decoded {
                    warn!(collection = key, %error, "skipping undecodable record on import");
                    undecodable += 1;
                }
            }
        }

        let mut report = self.import(data);
        report.skipped += undecodable;
        report
    }
}
