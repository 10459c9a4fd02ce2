//! User model and related functionality

use chrono::{DateTime, Utc};
use common::store::Document;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account status within the directory
///
/// The pending and active partitions shown to administrators are views
/// derived from this field; a record can never be in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Pending,
    Active,
    Inactive,
}

/// Role granted to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub avatar: Option<String>,
    /// Argon2 hash of the account password; never sent to clients
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,
}

impl Document for User {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// User update payload
///
/// Fields left unset are preserved on the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

/// Query parameters for directory listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserQuery {
    /// Filter by account status
    pub status: Option<UserStatus>,
    /// Case-insensitive search over name and email
    pub search: Option<String>,
}

/// Request for account password change
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}
