//! Server configuration
//!
//! Startup parameters are resolved in `main.rs` (command line first, then
//! environment); this module validates them and fixes the canonical media
//! root used for path-containment checks on every streaming request.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Default playback record filename, placed inside the media root when no
/// explicit path is configured.
pub const DEFAULT_RECORD_FILENAME: &str = ".lanshelf-record.json";

/// Validated server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Canonicalized media root. Every streamed path must stay inside it.
    pub root: PathBuf,
    /// Backing file for the playback record
    pub record_path: PathBuf,
    /// HTTP listening port
    pub port: u16,
}

impl Config {
    /// Validate startup parameters.
    ///
    /// The media root must exist and be a directory; it is canonicalized
    /// here, once, so streaming handlers can compare resolved request paths
    /// against it without re-resolving the root on every request.
    pub fn new(root: PathBuf, record_file: Option<PathBuf>, port: u16) -> Result<Self> {
        let root = std::fs::canonicalize(&root)
            .map_err(|e| Error::Config(format!("media root {} is not accessible: {}", root.display(), e)))?;

        if !root.is_dir() {
            return Err(Error::Config(format!(
                "media root {} is not a directory",
                root.display()
            )));
        }

        let record_path = record_file.unwrap_or_else(|| root.join(DEFAULT_RECORD_FILENAME));

        Ok(Self {
            root,
            record_path,
            port,
        })
    }
}
