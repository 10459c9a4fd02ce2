//! Application state shared across handlers

use crate::repositories::UserRepository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: UserRepository,
}
