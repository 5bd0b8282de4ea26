//! # Pondlife IO
//!
//! Persistence layer for pond snapshots.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - JSON serialization helpers
//! - Lenient snapshot decoding and atomic snapshot files

/// Error types and result aliases for I/O operations
pub mod error;
/// Snapshot files: lenient decoding, atomic save, load-or-default
pub mod persistence;
/// Validated serialization helpers for JSON
pub mod serialization;

pub use error::{IoError, Result};
pub use persistence::{decode_snapshot, load_snapshot, save_snapshot};
pub use serialization::{from_json, to_json, to_json_pretty};
