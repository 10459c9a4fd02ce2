//! Write-up model and related functionality

use chrono::{DateTime, Utc};
use common::store::Document;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication status of a write-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteUpStatus {
    Draft,
    Published,
}

/// Kind of attached file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    Document,
}

/// Denormalized author snapshot captured at creation time
///
/// Not a live reference into the directory; later edits to the user do
/// not propagate here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

/// Comment on a write-up
///
/// Append-only: there is no edit or delete operation for comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
}

/// File attached to a write-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: Uuid,
    pub name: String,
    pub kind: AttachmentKind,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Write-up entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteUp {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: WriteUpStatus,
    pub comments: Vec<Comment>,
    pub attachments: Vec<Attachment>,
    pub is_deleted: bool,
}

impl Document for WriteUp {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// New write-up creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewWriteUp {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub author: Author,
    pub status: Option<WriteUpStatus>,
    pub comments: Option<Vec<Comment>>,
    pub attachments: Option<Vec<Attachment>>,
}

/// Write-up update payload
///
/// Fields left unset keep their current values; author, creation time
/// and the deletion flag cannot be changed through a save.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWriteUp {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<WriteUpStatus>,
    pub comments: Option<Vec<Comment>>,
    pub attachments: Option<Vec<Attachment>>,
}

/// Query parameters for write-up listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WriteUpQuery {
    /// Case-insensitive search term
    pub search: Option<String>,
}

/// New comment payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewComment {
    pub content: String,
    pub author: Author,
}

/// New attachment payload; the upload itself is stubbed
#[derive(Debug, Clone, Deserialize)]
pub struct NewAttachment {
    pub kind: AttachmentKind,
}
