//! Application state shared across handlers

use crate::repositories::WriteUpRepository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub write_ups: WriteUpRepository,
}
