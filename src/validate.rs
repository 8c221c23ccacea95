//! Field validation for boards, lists, and cards.
//!
//! One canonical rule table per entity type, shared by every call site (the
//! in-memory manager's callers and the import path). Validators are pure:
//! they never mutate their input and never fail. The outcome is always a
//! [`Validation`] report with human-readable errors in rule order.
//!
//! Enum membership (priority) and date well-formedness are carried by the
//! type system and rejected at deserialization, so they need no rules here.

use crate::types::{Attachment, Board, Card, ChecklistItem, Comment, List};

/// Outcome of validating one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl Validation {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

const BOARD_TITLE_MAX: usize = 100;
const BOARD_DESCRIPTION_MAX: usize = 500;
const LIST_TITLE_MAX: usize = 100;
const CARD_TITLE_MAX: usize = 200;
const CARD_DESCRIPTION_MAX: usize = 2000;
const CHECKLIST_TEXT_MAX: usize = 500;
const COMMENT_TEXT_MAX: usize = 1000;

/// Validate a board: required title, length bounds, hex color.
pub fn validate_board(board: &Board) -> Validation {
    let mut errors = Vec::new();

    if board.title.trim().is_empty() {
        errors.push("Board title is required".to_string());
    }
    if board.title.chars().count() > BOARD_TITLE_MAX {
        errors.push(format!(
            "Board title must be {BOARD_TITLE_MAX} characters or less"
        ));
    }
    if board.description.chars().count() > BOARD_DESCRIPTION_MAX {
        errors.push(format!(
            "Board description must be {BOARD_DESCRIPTION_MAX} characters or less"
        ));
    }
    if let Some(color) = &board.color {
        if !is_hex_color(color) {
            errors.push("Board color must be a valid hex color code".to_string());
        }
    }

    Validation::from_errors(errors)
}

/// Validate a list: required title and board association, WIP limit bound,
/// hex color.
pub fn validate_list(list: &List) -> Validation {
    let mut errors = Vec::new();

    if list.title.trim().is_empty() {
        errors.push("List title is required".to_string());
    }
    if list.title.chars().count() > LIST_TITLE_MAX {
        errors.push(format!(
            "List title must be {LIST_TITLE_MAX} characters or less"
        ));
    }
    if list.board_id.is_empty() {
        errors.push("List must be associated with a board".to_string());
    }
    if list.wip_limit == Some(0) {
        errors.push("WIP limit must be at least 1".to_string());
    }
    if let Some(color) = &list.color {
        if !is_hex_color(color) {
            errors.push("List color must be a valid hex color code".to_string());
        }
    }

    Validation::from_errors(errors)
}

/// Validate a card: required title and list association, length bounds,
/// non-negative hours, hex color.
pub fn validate_card(card: &Card) -> Validation {
    let mut errors = Vec::new();

    if card.title.trim().is_empty() {
        errors.push("Card title is required".to_string());
    }
    if card.title.chars().count() > CARD_TITLE_MAX {
        errors.push(format!(
            "Card title must be {CARD_TITLE_MAX} characters or less"
        ));
    }
    if card.description.chars().count() > CARD_DESCRIPTION_MAX {
        errors.push(format!(
            "Card description must be {CARD_DESCRIPTION_MAX} characters or less"
        ));
    }
    if card.list_id.is_empty() {
        errors.push("Card must be associated with a list".to_string());
    }
    if card.estimated_hours.is_some_and(|h| h < 0.0) {
        errors.push("Estimated hours must be non-negative".to_string());
    }
    if card.actual_hours.is_some_and(|h| h < 0.0) {
        errors.push("Actual hours must be non-negative".to_string());
    }
    if let Some(color) = &card.color {
        if !is_hex_color(color) {
            errors.push("Card color must be a valid hex color code".to_string());
        }
    }

    Validation::from_errors(errors)
}

/// Validate a checklist item: required text, length bound.
pub fn validate_checklist_item(item: &ChecklistItem) -> Validation {
    let mut errors = Vec::new();

    if item.text.trim().is_empty() {
        errors.push("Checklist item text is required".to_string());
    }
    if item.text.chars().count() > CHECKLIST_TEXT_MAX {
        errors.push(format!(
            "Checklist item text must be {CHECKLIST_TEXT_MAX} characters or less"
        ));
    }

    Validation::from_errors(errors)
}

/// Validate a comment: required text and author, length bound.
pub fn validate_comment(comment: &Comment) -> Validation {
    let mut errors = Vec::new();

    if comment.text.trim().is_empty() {
        errors.push("Comment text is required".to_string());
    }
    if comment.text.chars().count() > COMMENT_TEXT_MAX {
        errors.push(format!(
            "Comment text must be {COMMENT_TEXT_MAX} characters or less"
        ));
    }
    if comment.author.trim().is_empty() {
        errors.push("Comment author is required".to_string());
    }

    Validation::from_errors(errors)
}

/// Validate an attachment: required name, URL, and type.
pub fn validate_attachment(attachment: &Attachment) -> Validation {
    let mut errors = Vec::new();

    if attachment.name.trim().is_empty() {
        errors.push("Attachment name is required".to_string());
    }
    if attachment.url.trim().is_empty() {
        errors.push("Attachment URL is required".to_string());
    }
    if attachment.kind.trim().is_empty() {
        errors.push("Attachment type is required".to_string());
    }

    Validation::from_errors(errors)
}

/// Accepts exactly `#RRGGBB` with hex digits.
fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardId, CreateBoard, CreateCard, CreateList, ListId};

    #[test]
    fn test_valid_board_passes() {
        let board = Board::new(CreateBoard::new("Launch").with_description("plan"));
        let result = validate_board(&board);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_board_title_rules() {
        let mut board = Board::new(CreateBoard::new("  "));
        let result = validate_board(&board);
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("title is required"));

        board.title = "x".repeat(101);
        let result = validate_board(&board);
        assert!(result.errors.iter().any(|e| e.contains("100 characters")));
    }

    #[test]
    fn test_board_description_and_color_rules() {
        let mut board = Board::new(CreateBoard::new("B"));
        board.description = "d".repeat(501);
        board.color = Some("teal".to_string());
        let result = validate_board(&board);
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors[0].contains("500 characters"));
        assert!(result.errors[1].contains("hex color"));
    }

    #[test]
    fn test_list_rules() {
        let mut list = List::new(CreateList::new("", BoardId::from_string("")));
        list.wip_limit = Some(0);
        let result = validate_list(&list);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("title is required")));
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("associated with a board")));
        assert!(result.errors.iter().any(|e| e.contains("at least 1")));

        let ok = List::new(
            CreateList::new("Todo", BoardId::from_string("board_1")).with_wip_limit(1),
        );
        assert!(validate_list(&ok).is_valid);
    }

    #[test]
    fn test_card_rules() {
        let card = Card::new(CreateCard::new("", ListId::from_string("list_1")));
        let result = validate_card(&card);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("title is required")));

        let mut card = Card::new(CreateCard::new("ok", ListId::from_string("list_1")));
        card.estimated_hours = Some(-1.0);
        card.actual_hours = Some(-0.5);
        card.color = Some("#12345".to_string());
        let result = validate_card(&card);
        assert_eq!(result.errors.len(), 3);

        card.title = "t".repeat(201);
        card.description = "d".repeat(2001);
        let result = validate_card(&card);
        assert!(result.errors.iter().any(|e| e.contains("200 characters")));
        assert!(result.errors.iter().any(|e| e.contains("2000 characters")));
    }

    #[test]
    fn test_item_level_rules() {
        let mut item = ChecklistItem::new("  ");
        assert!(!validate_checklist_item(&item).is_valid);
        item.text = "real step".to_string();
        assert!(validate_checklist_item(&item).is_valid);

        let comment = Comment::new("", "");
        let result = validate_comment(&comment);
        assert_eq!(result.errors.len(), 2);

        let attachment = Attachment::new("", "", "", 0);
        let result = validate_attachment(&attachment);
        assert_eq!(result.errors.len(), 3);
        assert!(validate_attachment(&Attachment::new("a", "https://x/a", "text/plain", 0)).is_valid);
    }

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#0079bf"));
        assert!(is_hex_color("#FFFFFF"));
        assert!(!is_hex_color("0079bf"));
        assert!(!is_hex_color("#0079b"));
        assert!(!is_hex_color("#0079bfa"));
        assert!(!is_hex_color("#0079bg"));
    }
}
