//! Directory service models

pub mod user;

// Re-export for convenience
pub use user::{ChangePasswordRequest, UpdateUser, User, UserQuery, UserRole, UserStatus};
