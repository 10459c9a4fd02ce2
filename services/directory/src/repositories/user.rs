//! User repository backed by the shared directory collection

use anyhow::Result;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use chrono::Utc;
use common::store::Collection;
use tracing::info;
use uuid::Uuid;

use crate::models::{UpdateUser, User, UserStatus};

/// User repository
///
/// All users live in one collection; the pending and active partitions
/// are derived by filtering on status, so approving a user can never
/// leave it in both partitions or in neither.
#[derive(Clone)]
pub struct UserRepository {
    users: Collection<User>,
}

impl UserRepository {
    /// Create an empty user repository
    pub fn new() -> Self {
        Self {
            users: Collection::new(),
        }
    }

    /// Create a repository over a pre-seeded directory
    pub fn seeded(users: Vec<User>) -> Self {
        Self {
            users: Collection::seeded(users),
        }
    }

    /// List users, optionally narrowed by status and search term
    ///
    /// The search matches name or email case-insensitively and never
    /// mutates stored data.
    pub async fn list(&self, status: Option<UserStatus>, search: Option<&str>) -> Vec<User> {
        let term = search.unwrap_or("").to_lowercase();
        self.users
            .all()
            .await
            .into_iter()
            .filter(|user| status.map_or(true, |s| user.status == s))
            .filter(|user| {
                term.is_empty()
                    || user.name.to_lowercase().contains(&term)
                    || user.email.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.users.get(id).await
    }

    /// Approve a pending registration
    ///
    /// Only a record whose status is `pending` moves to `active`; the
    /// role is preserved as-is. Unknown or non-pending ids are no-ops.
    pub async fn approve(&self, id: Uuid) -> Option<User> {
        info!("Approving user: {}", id);

        self.users
            .update_where(
                id,
                |user| user.status == UserStatus::Pending,
                |user| {
                    user.status = UserStatus::Active;
                    user.updated_at = Utc::now();
                },
            )
            .await
    }

    /// Reject a pending registration, removing it from the directory
    ///
    /// Records that are no longer pending are left untouched, so an
    /// approve followed by a reject of the same id cannot remove an
    /// active user.
    pub async fn reject(&self, id: Uuid) -> Option<User> {
        info!("Rejecting user: {}", id);

        self.users
            .remove_where(id, |user| user.status == UserStatus::Pending)
            .await
    }

    /// Merge a partial patch into a user record
    ///
    /// A patch that changes `status` re-partitions the record between
    /// the pending and active views immediately.
    pub async fn update(&self, id: Uuid, patch: &UpdateUser) -> Option<User> {
        info!("Updating user: {}", id);

        self.users
            .update(id, |user| {
                if let Some(name) = &patch.name {
                    user.name = name.clone();
                }
                if let Some(email) = &patch.email {
                    user.email = email.clone();
                }
                if let Some(role) = patch.role {
                    user.role = role;
                }
                if let Some(status) = patch.status {
                    user.status = status;
                }
                user.updated_at = Utc::now();
            })
            .await
    }

    /// Remove a user from the directory regardless of status
    pub async fn delete(&self, id: Uuid) -> Option<User> {
        info!("Deleting user: {}", id);

        self.users.remove(id).await
    }

    /// Verify a user's current password against the stored hash
    ///
    /// Users without a stored credential never verify.
    pub async fn verify_password(&self, id: Uuid, password: &str) -> Result<bool> {
        let Some(user) = self.users.get(id).await else {
            return Ok(false);
        };
        let Some(hash) = user.password_hash.as_deref() else {
            return Ok(false);
        };

        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| anyhow::anyhow!("Failed to parse password hash: {}", e))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash and store a new password for a user
    pub async fn set_password(&self, id: Uuid, password: &str) -> Result<Option<User>> {
        info!("Setting password for user: {}", id);

        let salt = SaltString::generate(&mut rand::thread_rng());
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
            .to_string();

        Ok(self
            .users
            .update(id, |user| {
                user.password_hash = Some(password_hash);
                user.updated_at = Utc::now();
            })
            .await)
    }

    /// Number of users in the directory
    pub async fn count(&self) -> usize {
        self.users.len().await
    }
}

impl Default for UserRepository {
    fn default() -> Self {
        Self::new()
    }
}
