//! Card: the leaf work item, with labels, checklist, comments, and attachments.

use super::ids::{AttachmentId, CardId, ChecklistItemId, CommentId, ListId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Card priority. Serializes lowercase on the wire; unknown values are
/// rejected at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// The wire spelling of the priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

/// One entry of a card's checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: ChecklistItemId,
    pub text: String,
    #[serde(default)]
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl ChecklistItem {
    /// Create a fresh, incomplete item.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ChecklistItemId::new(),
            text: text.into(),
            is_completed: false,
            created_at: Utc::now(),
        }
    }
}

/// A comment in a card's discussion thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment.
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: CommentId::new(),
            text: text.into(),
            author: author.into(),
            created_at: Utc::now(),
        }
    }
}

/// A file reference attached to a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: AttachmentId,
    pub name: String,
    pub url: String,
    /// MIME type, stored as `type` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
    pub size: u64,
    pub created_at: DateTime<Utc>,
}

impl Attachment {
    /// Create a new attachment reference.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        kind: impl Into<String>,
        size: u64,
    ) -> Self {
        Self {
            id: AttachmentId::new(),
            name: name.into(),
            url: url.into(),
            kind: kind.into(),
            size,
            created_at: Utc::now(),
        }
    }
}

/// Completion summary of a card's checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistProgress {
    pub completed: usize,
    pub total: usize,
    /// `round(completed / total * 100)`; 0 for an empty checklist.
    pub percentage: u32,
}

/// A work item belonging to exactly one list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub list_id: ListId,
    #[serde(default)]
    pub position: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub priority: Priority,
    /// Set semantics with insertion order preserved.
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub assignees: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub actual_hours: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
}

impl Card {
    /// Construct a card from a draft, generating its id and timestamps and
    /// filling every omitted field with its default.
    pub fn new(draft: CreateCard) -> Self {
        let now = Utc::now();
        Self {
            id: CardId::new(),
            title: draft.title,
            description: draft.description.unwrap_or_default(),
            list_id: draft.list_id,
            position: draft.position.unwrap_or(0),
            created_at: now,
            updated_at: now,
            due_date: draft.due_date,
            is_completed: false,
            is_archived: false,
            priority: draft.priority.unwrap_or_default(),
            labels: draft.labels,
            assignees: draft.assignees,
            attachments: Vec::new(),
            checklist: Vec::new(),
            comments: Vec::new(),
            estimated_hours: draft.estimated_hours,
            actual_hours: None,
            color: draft.color,
        }
    }

    /// Add a label if not already present.
    pub fn add_label(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !self.labels.contains(&label) {
            self.labels.push(label);
            self.touch();
        }
    }

    /// Remove a label. Unknown labels are a silent no-op.
    pub fn remove_label(&mut self, label: &str) {
        if let Some(index) = self.labels.iter().position(|l| l == label) {
            self.labels.remove(index);
            self.touch();
        }
    }

    /// Add an assignee if not already present.
    pub fn add_assignee(&mut self, assignee: impl Into<String>) {
        let assignee = assignee.into();
        if !self.assignees.contains(&assignee) {
            self.assignees.push(assignee);
            self.touch();
        }
    }

    /// Remove an assignee. Unknown assignees are a silent no-op.
    pub fn remove_assignee(&mut self, assignee: &str) {
        if let Some(index) = self.assignees.iter().position(|a| a == assignee) {
            self.assignees.remove(index);
            self.touch();
        }
    }

    /// Append a checklist item and return its id.
    pub fn add_checklist_item(&mut self, text: impl Into<String>) -> ChecklistItemId {
        let item = ChecklistItem::new(text);
        let id = item.id.clone();
        self.checklist.push(item);
        self.touch();
        id
    }

    /// Flip the completion state of a checklist item.
    /// Unknown ids are a silent no-op.
    pub fn toggle_checklist_item(&mut self, item_id: &ChecklistItemId) {
        if let Some(item) = self.checklist.iter_mut().find(|i| &i.id == item_id) {
            item.is_completed = !item.is_completed;
            self.touch();
        }
    }

    /// Append a comment and return its id.
    pub fn add_comment(
        &mut self,
        text: impl Into<String>,
        author: impl Into<String>,
    ) -> CommentId {
        let comment = Comment::new(text, author);
        let id = comment.id.clone();
        self.comments.push(comment);
        self.touch();
        id
    }

    /// Append an attachment and return its id.
    pub fn add_attachment(
        &mut self,
        name: impl Into<String>,
        url: impl Into<String>,
        kind: impl Into<String>,
        size: u64,
    ) -> AttachmentId {
        let attachment = Attachment::new(name, url, kind, size);
        let id = attachment.id.clone();
        self.attachments.push(attachment);
        self.touch();
        id
    }

    /// Whether the card is past its due date and not completed.
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(Utc::now())
    }

    fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        self.due_date.is_some_and(|due| due < now) && !self.is_completed
    }

    /// Completion summary of the checklist. 0/0/0 when empty.
    pub fn checklist_progress(&self) -> ChecklistProgress {
        let total = self.checklist.len();
        if total == 0 {
            return ChecklistProgress {
                completed: 0,
                total: 0,
                percentage: 0,
            };
        }
        let completed = self.checklist.iter().filter(|i| i.is_completed).count();
        let percentage = (completed as f64 / total as f64 * 100.0).round() as u32;
        ChecklistProgress {
            completed,
            total,
            percentage,
        }
    }

    /// Refresh `updated_at` to the current time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Draft for creating a [`Card`]. Title and owning list are required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCard {
    pub title: String,
    pub list_id: ListId,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub assignees: Vec<String>,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
}

impl CreateCard {
    /// Start a draft with a title and owning list.
    pub fn new(title: impl Into<String>, list_id: impl Into<ListId>) -> Self {
        Self {
            title: title.into(),
            list_id: list_id.into(),
            description: None,
            position: None,
            due_date: None,
            priority: None,
            labels: Vec::new(),
            assignees: Vec::new(),
            estimated_hours: None,
            color: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the ordering position among sibling cards.
    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the due date.
    pub fn with_due_date(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(due);
        self
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the labels.
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    /// Set the assignees.
    pub fn with_assignees(mut self, assignees: Vec<String>) -> Self {
        self.assignees = assignees;
        self
    }

    /// Set the estimated hours.
    pub fn with_estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    /// Set the color (`#RRGGBB`).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Field patch for updating a [`Card`].
#[derive(Debug, Clone, Default)]
pub struct UpdateCard {
    pub title: Option<String>,
    pub description: Option<String>,
    pub position: Option<u32>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub is_completed: Option<bool>,
    pub is_archived: Option<bool>,
    pub priority: Option<Priority>,
    pub labels: Option<Vec<String>>,
    pub assignees: Option<Vec<String>>,
    pub estimated_hours: Option<Option<f64>>,
    pub actual_hours: Option<Option<f64>>,
    pub color: Option<Option<String>>,
}

impl UpdateCard {
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

    /// Set the position.
    pub fn position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the due date.
    pub fn due_date(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(Some(due));
        self
    }

    /// Clear the due date.
    pub fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Set or clear the completed flag.
    pub fn completed(mut self, completed: bool) -> Self {
        self.is_completed = Some(completed);
        self
    }

    /// Set or clear the archived flag.
    pub fn archived(mut self, archived: bool) -> Self {
        self.is_archived = Some(archived);
        self
    }

    /// Set the priority.
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replace the labels.
    pub fn labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Replace the assignees.
    pub fn assignees(mut self, assignees: Vec<String>) -> Self {
        self.assignees = Some(assignees);
        self
    }

    /// Set the estimated hours.
    pub fn estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(Some(hours));
        self
    }

    /// Set the actual hours.
    pub fn actual_hours(mut self, hours: f64) -> Self {
        self.actual_hours = Some(Some(hours));
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

    /// Merge the patch into a card. Later write wins per field.
    pub(crate) fn apply(self, card: &mut Card) {
        if let Some(title) = self.title {
            card.title = title;
        }
        if let Some(description) = self.description {
            card.description = description;
        }
        if let Some(position) = self.position {
            card.position = position;
        }
        if let Some(due_date) = self.due_date {
            card.due_date = due_date;
        }
        if let Some(is_completed) = self.is_completed {
            card.is_completed = is_completed;
        }
        if let Some(is_archived) = self.is_archived {
            card.is_archived = is_archived;
        }
        if let Some(priority) = self.priority {
            card.priority = priority;
        }
        if let Some(labels) = self.labels {
            card.labels = labels;
        }
        if let Some(assignees) = self.assignees {
            card.assignees = assignees;
        }
        if let Some(estimated_hours) = self.estimated_hours {
            card.estimated_hours = estimated_hours;
        }
        if let Some(actual_hours) = self.actual_hours {
            card.actual_hours = actual_hours;
        }
        if let Some(color) = self.color {
            card.color = color;
        }
    }
}
