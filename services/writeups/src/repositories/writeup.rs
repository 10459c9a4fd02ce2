//! Write-up repository backed by the shared document collection

use chrono::Utc;
use common::store::Collection;
use tracing::info;
use uuid::Uuid;

use crate::models::{
    Attachment, AttachmentKind, Author, Comment, NewWriteUp, UpdateWriteUp, WriteUp, WriteUpStatus,
};

/// Title given to documents created without one
const UNTITLED: &str = "Untitled Document";

/// Write-up repository
///
/// A write-up moves through three deletion states: active, soft-deleted
/// (visible in the recycle bin, restorable) and gone. Gone is terminal
/// and only reachable from the recycle bin; once a record is removed,
/// every later operation on its id is a no-op.
#[derive(Clone)]
pub struct WriteUpRepository {
    write_ups: Collection<WriteUp>,
}

impl WriteUpRepository {
    /// Create an empty write-up repository
    pub fn new() -> Self {
        Self {
            write_ups: Collection::new(),
        }
    }

    /// Create a repository over a pre-seeded library
    pub fn seeded(write_ups: Vec<WriteUp>) -> Self {
        Self {
            write_ups: Collection::seeded(write_ups),
        }
    }

    /// List active write-ups whose title or content matches the term
    pub async fn list(&self, search: Option<&str>) -> Vec<WriteUp> {
        let term = search.unwrap_or("").to_lowercase();
        self.write_ups
            .all()
            .await
            .into_iter()
            .filter(|write_up| !write_up.is_deleted)
            .filter(|write_up| {
                term.is_empty()
                    || write_up.title.to_lowercase().contains(&term)
                    || write_up.content.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// List the recycle bin, matching on title only
    pub async fn list_deleted(&self, search: Option<&str>) -> Vec<WriteUp> {
        let term = search.unwrap_or("").to_lowercase();
        self.write_ups
            .all()
            .await
            .into_iter()
            .filter(|write_up| write_up.is_deleted)
            .filter(|write_up| term.is_empty() || write_up.title.to_lowercase().contains(&term))
            .collect()
    }

    /// Find a write-up by ID
    pub async fn find_by_id(&self, id: Uuid) -> Option<WriteUp> {
        self.write_ups.get(id).await
    }

    /// Create a new write-up with a fresh identity
    ///
    /// A blank title falls back to the placeholder and the status
    /// defaults to draft.
    pub async fn create(&self, new: NewWriteUp) -> WriteUp {
        let now = Utc::now();
        let title = if new.title.trim().is_empty() {
            UNTITLED.to_string()
        } else {
            new.title
        };

        let write_up = WriteUp {
            id: Uuid::new_v4(),
            title,
            content: new.content,
            author: new.author,
            created_at: now,
            updated_at: now,
            status: new.status.unwrap_or(WriteUpStatus::Draft),
            comments: new.comments.unwrap_or_default(),
            attachments: new.attachments.unwrap_or_default(),
            is_deleted: false,
        };

        info!("Creating write-up: {}", write_up.id);
        self.write_ups.insert(write_up.clone()).await;

        write_up
    }

    /// Replace the editable fields of an existing write-up
    ///
    /// Fields absent from the patch keep their current values; author,
    /// created_at and the deletion flag are never touched here.
    pub async fn save(&self, id: Uuid, patch: UpdateWriteUp) -> Option<WriteUp> {
        info!("Saving write-up: {}", id);

        self.write_ups
            .update(id, |write_up| {
                if let Some(title) = patch.title {
                    write_up.title = title;
                }
                if let Some(content) = patch.content {
                    write_up.content = content;
                }
                if let Some(status) = patch.status {
                    write_up.status = status;
                }
                if let Some(comments) = patch.comments {
                    write_up.comments = comments;
                }
                if let Some(attachments) = patch.attachments {
                    write_up.attachments = attachments;
                }
                write_up.updated_at = Utc::now();
            })
            .await
    }

    /// Move a write-up to the recycle bin
    pub async fn soft_delete(&self, id: Uuid) -> Option<WriteUp> {
        info!("Soft-deleting write-up: {}", id);

        self.write_ups
            .update(id, |write_up| write_up.is_deleted = true)
            .await
    }

    /// Bring a write-up back from the recycle bin
    pub async fn restore(&self, id: Uuid) -> Option<WriteUp> {
        info!("Restoring write-up: {}", id);

        self.write_ups
            .update(id, |write_up| write_up.is_deleted = false)
            .await
    }

    /// Destroy a write-up; irreversible
    ///
    /// Only records already in the recycle bin can be destroyed; an
    /// active record is left untouched.
    pub async fn permanent_delete(&self, id: Uuid) -> Option<WriteUp> {
        info!("Permanently deleting write-up: {}", id);

        self.write_ups
            .remove_where(id, |write_up| write_up.is_deleted)
            .await
    }

    /// Append a comment to a write-up
    ///
    /// Whitespace-only content is ignored and leaves the comment
    /// sequence unchanged.
    pub async fn add_comment(&self, id: Uuid, content: &str, author: Author) -> Option<WriteUp> {
        if content.trim().is_empty() {
            return None;
        }

        let comment = Comment {
            id: Uuid::new_v4(),
            content: content.to_string(),
            author,
            created_at: Utc::now(),
        };

        info!("Adding comment to write-up: {}", id);
        self.write_ups
            .update(id, |write_up| write_up.comments.push(comment))
            .await
    }

    /// Append a stub attachment; no file is actually transferred
    pub async fn add_attachment(&self, id: Uuid, kind: AttachmentKind) -> Option<WriteUp> {
        let (name, url) = match kind {
            AttachmentKind::Document => ("new-document.docx", "#"),
            AttachmentKind::Image => ("new-image.png", "https://placehold.co/800x600.png"),
        };

        let attachment = Attachment {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind,
            url: url.to_string(),
            created_at: Utc::now(),
        };

        info!("Adding {:?} attachment to write-up: {}", kind, id);
        self.write_ups
            .update(id, |write_up| write_up.attachments.push(attachment))
            .await
    }

    /// Drop an attachment from a write-up
    pub async fn remove_attachment(&self, id: Uuid, attachment_id: Uuid) -> Option<WriteUp> {
        info!(
            "Removing attachment {} from write-up: {}",
            attachment_id, id
        );

        self.write_ups
            .update(id, |write_up| {
                write_up
                    .attachments
                    .retain(|attachment| attachment.id != attachment_id)
            })
            .await
    }

    /// Number of write-ups, recycle bin included
    pub async fn count(&self) -> usize {
        self.write_ups.len().await
    }
}

impl Default for WriteUpRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> Author {
        Author {
            id: Uuid::new_v4(),
            name: "Maya Chen".to_string(),
            email: "maya.chen@example.com".to_string(),
            avatar: None,
        }
    }

    fn new_write_up(title: &str, content: &str) -> NewWriteUp {
        NewWriteUp {
            title: title.to_string(),
            content: content.to_string(),
            author: author(),
            status: None,
            comments: None,
            attachments: None,
        }
    }

    #[tokio::test]
    async fn test_create_defaults() {
        let repo = WriteUpRepository::new();

        let first = repo.create(new_write_up("", "body")).await;
        let second = repo.create(new_write_up("   ", "body")).await;

        assert_eq!(first.title, "Untitled Document");
        assert_eq!(second.title, "Untitled Document");
        assert_eq!(first.status, WriteUpStatus::Draft);
        assert!(!first.is_deleted);
        assert!(first.comments.is_empty());
        assert!(first.attachments.is_empty());
        assert_eq!(first.created_at, first.updated_at);
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_soft_delete_and_restore_roundtrip() {
        let repo = WriteUpRepository::new();
        let created = repo.create(new_write_up("Release Notes", "v1.4")).await;

        repo.soft_delete(created.id).await.expect("record exists");
        assert!(repo.list(None).await.is_empty());
        let deleted = repo.list_deleted(None).await;
        assert_eq!(deleted.len(), 1);
        assert_eq!(deleted[0].id, created.id);
        assert!(deleted[0].is_deleted);

        let restored = repo.restore(created.id).await.expect("record exists");
        assert!(repo.list_deleted(None).await.is_empty());
        assert_eq!(repo.list(None).await.len(), 1);

        // Identity and every other field survive the round trip
        assert_eq!(restored, created);
    }

    #[tokio::test]
    async fn test_permanent_delete_only_from_recycle_bin() {
        let repo = WriteUpRepository::new();
        let created = repo.create(new_write_up("Runbook", "steps")).await;

        // Active records cannot be destroyed
        assert!(repo.permanent_delete(created.id).await.is_none());
        assert_eq!(repo.count().await, 1);

        repo.soft_delete(created.id).await.expect("record exists");
        let removed = repo
            .permanent_delete(created.id)
            .await
            .expect("record is in the recycle bin");
        assert_eq!(removed.id, created.id);

        // Gone is terminal: the id is absent from both views and every
        // later operation is a no-op.
        assert!(repo.list(None).await.is_empty());
        assert!(repo.list_deleted(None).await.is_empty());
        assert!(repo.restore(created.id).await.is_none());
        assert!(repo.soft_delete(created.id).await.is_none());
        assert!(
            repo.save(created.id, UpdateWriteUp::default())
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_save_preserves_unspecified_fields() {
        let repo = WriteUpRepository::new();
        let created = repo.create(new_write_up("Roadmap", "Q3 plans")).await;
        repo.add_comment(created.id, "Looks good", author())
            .await
            .expect("record exists");
        repo.add_attachment(created.id, AttachmentKind::Document)
            .await
            .expect("record exists");

        let patch = UpdateWriteUp {
            title: Some("Roadmap 2025".to_string()),
            ..UpdateWriteUp::default()
        };
        let saved = repo.save(created.id, patch).await.expect("record exists");

        assert_eq!(saved.title, "Roadmap 2025");
        assert_eq!(saved.content, "Q3 plans");
        assert_eq!(saved.comments.len(), 1);
        assert_eq!(saved.attachments.len(), 1);
        assert_eq!(saved.author, created.author);
        assert_eq!(saved.created_at, created.created_at);
        assert!(!saved.is_deleted);
    }

    #[tokio::test]
    async fn test_save_replaces_provided_fields() {
        let repo = WriteUpRepository::new();
        let created = repo.create(new_write_up("Draft Notes", "first pass")).await;

        let patch = UpdateWriteUp {
            content: Some("second pass".to_string()),
            status: Some(WriteUpStatus::Published),
            comments: Some(Vec::new()),
            ..UpdateWriteUp::default()
        };
        let saved = repo.save(created.id, patch).await.expect("record exists");

        assert_eq!(saved.title, "Draft Notes");
        assert_eq!(saved.content, "second pass");
        assert_eq!(saved.status, WriteUpStatus::Published);
        assert!(saved.comments.is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_comment_is_rejected() {
        let repo = WriteUpRepository::new();
        let created = repo.create(new_write_up("Minutes", "notes")).await;

        assert!(repo.add_comment(created.id, "  ", author()).await.is_none());
        assert!(repo.add_comment(created.id, "", author()).await.is_none());

        let current = repo.find_by_id(created.id).await.unwrap();
        assert!(current.comments.is_empty());
    }

    #[tokio::test]
    async fn test_attachment_lifecycle() {
        let repo = WriteUpRepository::new();
        let created = repo.create(new_write_up("Interface Notes", "details")).await;

        let with_doc = repo
            .add_attachment(created.id, AttachmentKind::Document)
            .await
            .expect("record exists");
        let with_image = repo
            .add_attachment(created.id, AttachmentKind::Image)
            .await
            .expect("record exists");
        assert_eq!(with_image.attachments.len(), 2);
        assert_eq!(with_doc.attachments[0].name, "new-document.docx");
        assert_eq!(with_image.attachments[1].kind, AttachmentKind::Image);

        let doc_id = with_doc.attachments[0].id;
        let after_remove = repo
            .remove_attachment(created.id, doc_id)
            .await
            .expect("record exists");
        assert_eq!(after_remove.attachments.len(), 1);
        assert_eq!(after_remove.attachments[0].kind, AttachmentKind::Image);
    }

    #[tokio::test]
    async fn test_search_filters() {
        let repo = WriteUpRepository::new();
        repo.create(new_write_up("Deployment Guide", "rollout steps"))
            .await;
        let binned = repo.create(new_write_up("Old Meeting Notes", "agenda")).await;
        repo.soft_delete(binned.id).await.expect("record exists");

        // Active list matches on title or content
        assert_eq!(repo.list(Some("GUIDE")).await.len(), 1);
        assert_eq!(repo.list(Some("rollout")).await.len(), 1);
        assert!(repo.list(Some("agenda")).await.is_empty());

        // Recycle bin matches on title only
        assert_eq!(repo.list_deleted(Some("meeting")).await.len(), 1);
        assert!(repo.list_deleted(Some("agenda")).await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_id_operations_are_noops() {
        let repo = WriteUpRepository::new();
        let created = repo.create(new_write_up("Only Doc", "body")).await;
        let ghost = Uuid::new_v4();

        assert!(repo.save(ghost, UpdateWriteUp::default()).await.is_none());
        assert!(repo.soft_delete(ghost).await.is_none());
        assert!(repo.restore(ghost).await.is_none());
        assert!(repo.permanent_delete(ghost).await.is_none());
        assert!(repo.add_comment(ghost, "hello", author()).await.is_none());
        assert!(
            repo.add_attachment(ghost, AttachmentKind::Image)
                .await
                .is_none()
        );
        assert!(
            repo.remove_attachment(ghost, Uuid::new_v4())
                .await
                .is_none()
        );

        assert_eq!(repo.count().await, 1);
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), created);
    }
}
