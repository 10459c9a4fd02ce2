//! Write-up service models

pub mod writeup;

// Re-export for convenience
pub use writeup::{
    Attachment, AttachmentKind, Author, Comment, NewAttachment, NewComment, NewWriteUp,
    UpdateWriteUp, WriteUp, WriteUpQuery, WriteUpStatus,
};
