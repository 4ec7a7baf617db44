//! Shared utilities, configuration, and error handling for Bulletin
//!
//! This crate provides common functionality used across the Bulletin
//! application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Repository error mapping
//! - Shared axum extractors

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::{Pagination, ValidatedJson};
