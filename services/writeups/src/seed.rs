//! Hard-coded startup data for the write-up library
//!
//! The library is seeded in-process and lives only for the lifetime of
//! the service. One record starts out in the recycle bin so the restore
//! path is reachable from a fresh boot.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{Attachment, AttachmentKind, Author, Comment, WriteUp, WriteUpStatus};

fn author(name: &str, email: &str, seed: &str) -> Author {
    Author {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        avatar: Some(format!(
            "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
            seed
        )),
    }
}

fn comment(content: &str, by: Author) -> Comment {
    Comment {
        id: Uuid::new_v4(),
        content: content.to_string(),
        author: by,
        created_at: Utc::now(),
    }
}

fn attachment(name: &str, kind: AttachmentKind, url: &str) -> Attachment {
    Attachment {
        id: Uuid::new_v4(),
        name: name.to_string(),
        kind,
        url: url.to_string(),
        created_at: Utc::now(),
    }
}

/// Write-ups present in the library at startup
pub fn write_ups() -> Vec<WriteUp> {
    let maya = author("Maya Chen", "maya.chen@example.com", "maya");
    let daniel = author("Daniel Okafor", "daniel.o@example.com", "daniel");
    let now = Utc::now();

    vec![
        WriteUp {
            id: Uuid::new_v4(),
            title: "Onboarding Checklist".to_string(),
            content: "Accounts, access requests and first-week tasks for new team members."
                .to_string(),
            author: maya.clone(),
            created_at: now,
            updated_at: now,
            status: WriteUpStatus::Published,
            comments: vec![comment("Added the VPN setup step.", daniel.clone())],
            attachments: vec![
                attachment("checklist.docx", AttachmentKind::Document, "#"),
                attachment(
                    "org-chart.png",
                    AttachmentKind::Image,
                    "https://placehold.co/800x600.png",
                ),
            ],
            is_deleted: false,
        },
        WriteUp {
            id: Uuid::new_v4(),
            title: "Incident Review - April Outage".to_string(),
            content: "Timeline, root cause and follow-ups from the April capacity incident."
                .to_string(),
            author: daniel.clone(),
            created_at: now,
            updated_at: now,
            status: WriteUpStatus::Draft,
            comments: vec![
                comment("Can we link the dashboard snapshots?", maya.clone()),
                comment("Will attach them before publishing.", daniel),
            ],
            attachments: vec![attachment("timeline.docx", AttachmentKind::Document, "#")],
            is_deleted: false,
        },
        WriteUp {
            id: Uuid::new_v4(),
            title: "Legacy Deployment Notes".to_string(),
            content: "Superseded by the new deployment guide.".to_string(),
            author: maya,
            created_at: now,
            updated_at: now,
            status: WriteUpStatus::Published,
            comments: Vec::new(),
            attachments: Vec::new(),
            is_deleted: true,
        },
    ]
}
