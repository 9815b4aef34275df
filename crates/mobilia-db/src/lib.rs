//! Database access for the mobilia media service.
//!
//! The catalog schema itself is owned by the CRM backend; this crate only
//! touches the image-reference columns the media service must read or clear
//! during replace and delete flows.

pub mod category;

pub use category::{CategoryRepository, CategoryStore};
