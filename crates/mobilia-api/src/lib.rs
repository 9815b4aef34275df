//! HTTP API for the mobilia media service.
//!
//! Multipart upload endpoints for catalog images and datasheets, plus the
//! category image delete flow. Everything under `/api` requires a session
//! token issued by the CRM's auth provider.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;
