//! Media file indexing
//!
//! Recognized-format table and the recursive directory index that backs
//! the `/videos` endpoint.

pub mod formats;
pub mod tree;

pub use formats::MediaFormat;
pub use tree::{list_tree, FileEntry};
