//! Repositories for directory operations

pub mod user;

pub use user::UserRepository;
