//! Core types for the mobilia media service.
//!
//! This crate holds configuration, the unified `AppError`, and the domain
//! models (buckets, image variants, request/response schemas) shared by the
//! processing, storage, db, and api crates.

pub mod config;
pub mod error;
pub mod models;
pub mod storage_types;

pub use config::Config;
pub use error::{AppError, LogLevel};
pub use storage_types::StorageBackend;
