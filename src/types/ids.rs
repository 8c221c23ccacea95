//! Typed identifiers for kanban entities.
//!
//! Each entity type gets its own newtype so a `BoardId` and a `ListId` can
//! never be confused, even when the underlying strings were equal. Generated
//! ids are the entity-type prefix followed by a ULID, which carries a
//! millisecond timestamp plus randomness for collision resistance.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh id: type prefix + ULID.
            pub fn new() -> Self {
                Self(format!(concat!($prefix, "{}"), Ulid::new()))
            }

            /// Wrap an existing id string, e.g. one read back from storage.
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The prefix every generated id of this type carries.
            pub fn prefix() -> &'static str {
                $prefix
            }

            /// Whether this id carries the expected type prefix.
            pub fn has_prefix(&self) -> bool {
                self.0.starts_with($prefix)
            }

            /// The id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the id is the empty string.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

entity_id!(
    /// Identifier for a [`Board`](crate::types::Board).
    BoardId,
    "board_"
);
entity_id!(
    /// Identifier for a [`List`](crate::types::List).
    ListId,
    "list_"
);
entity_id!(
    /// Identifier for a [`Card`](crate::types::Card).
    CardId,
    "card_"
);
entity_id!(
    /// Identifier for a checklist item on a card.
    ChecklistItemId,
    "item_"
);
entity_id!(
    /// Identifier for a comment on a card.
    CommentId,
    "comment_"
);
entity_id!(
    /// Identifier for an attachment on a card.
    AttachmentId,
    "attachment_"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_prefixed() {
        assert!(BoardId::new().has_prefix());
        assert!(ListId::new().as_str().starts_with("list_"));
        assert!(CardId::new().as_str().starts_with("card_"));
        assert!(ChecklistItemId::new().as_str().starts_with("item_"));
        assert!(CommentId::new().as_str().starts_with("comment_"));
        assert!(AttachmentId::new().as_str().starts_with("attachment_"));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = CardId::new();
        let b = CardId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_string_preserves_value() {
        let id = BoardId::from_string("board_1");
        assert_eq!(id.as_str(), "board_1");
        assert_eq!(id.to_string(), "board_1");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ListId::from_string("list_1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"list_1\"");
        let back: ListId = serde_json::from_str("\"list_1\"").unwrap();
        assert_eq!(back, id);
    }
}
