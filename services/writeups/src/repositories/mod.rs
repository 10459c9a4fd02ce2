//! Repositories for write-up operations

pub mod writeup;

pub use writeup::WriteUpRepository;
