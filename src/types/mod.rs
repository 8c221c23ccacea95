//! Core entity types for the kanban data layer.

mod board;
mod card;
mod ids;
mod list;

pub use board::{Board, CreateBoard, UpdateBoard, DEFAULT_BOARD_COLOR};
pub use card::{
    Attachment, Card, ChecklistItem, ChecklistProgress, Comment, CreateCard, Priority, UpdateCard,
};
pub use ids::{AttachmentId, BoardId, CardId, ChecklistItemId, CommentId, ListId};
pub use list::{CreateList, List, UpdateList};
