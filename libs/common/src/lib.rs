//! Common library for the admin portal services
//!
//! This crate provides shared functionality used across the portal
//! services, including the in-process document collections that back
//! every store, server configuration, and common error types.

pub mod config;
pub mod error;
pub mod store;
