//! Hard-coded startup data for the directory
//!
//! The portal has no registration backend; the directory is seeded
//! in-process and lives only for the lifetime of the service.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{User, UserRole, UserStatus};

fn avatar(seed: &str) -> Option<String> {
    Some(format!(
        "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
        seed
    ))
}

fn user(name: &str, email: &str, status: UserStatus, role: UserRole, seed: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        status,
        role,
        created_at: now,
        updated_at: now,
        avatar: avatar(seed),
        password_hash: None,
    }
}

/// Users present in the directory at startup
pub fn users() -> Vec<User> {
    vec![
        user(
            "Alex Morgan",
            "alex.morgan@example.com",
            UserStatus::Pending,
            UserRole::User,
            "alex",
        ),
        user(
            "Priya Patel",
            "priya.p@example.com",
            UserStatus::Pending,
            UserRole::User,
            "priya",
        ),
        user(
            "Tomas Lindqvist",
            "tomas.l@example.com",
            UserStatus::Pending,
            UserRole::User,
            "tomas",
        ),
        user(
            "Maya Chen",
            "maya.chen@example.com",
            UserStatus::Active,
            UserRole::Admin,
            "maya",
        ),
        user(
            "Daniel Okafor",
            "daniel.o@example.com",
            UserStatus::Active,
            UserRole::User,
            "daniel",
        ),
        user(
            "Lena Fischer",
            "lena.f@example.com",
            UserStatus::Active,
            UserRole::User,
            "lena",
        ),
    ]
}
