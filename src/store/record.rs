//! Playback record store
//!
//! A small persisted key-value mapping (file key -> last position) with
//! last-played tracking, backed by a single JSON file. The whole record is
//! rewritten on every save.
//!
//! Saves are serialized behind a mutex so overlapping read-modify-write
//! cycles cannot drop each other's keys, and each write lands in a temp
//! file renamed over the record so a reader never observes a torn file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::debug;

/// Persisted playback state.
///
/// Positions are caller-defined: seconds for video, page number for PDF.
/// The store does not interpret them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaybackRecord {
    pub last_played_video: Option<String>,
    pub history_records: HashMap<String, f64>,
}

/// File-backed playback record store
pub struct PlaybackStore {
    path: PathBuf,
    /// Serializes save cycles (read-modify-write) against each other
    write_lock: Mutex<()>,
}

impl PlaybackStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Read the persisted record.
    ///
    /// A store that has never been written returns the empty record without
    /// creating the backing file. An existing but unreadable or corrupt
    /// file is a storage error.
    pub async fn load(&self) -> Result<PlaybackRecord> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                Error::Storage(format!(
                    "playback record {} is corrupt: {}",
                    self.path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(PlaybackRecord::default()),
            Err(e) => Err(Error::Storage(format!(
                "failed to read playback record {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    /// Record `position` for `key` and mark it as the last played file.
    ///
    /// Reads the current record (initializing it if absent), applies the
    /// update, and rewrites the whole file atomically. Returns the record
    /// as written.
    pub async fn save(&self, key: &str, position: f64) -> Result<PlaybackRecord> {
        let _guard = self.write_lock.lock().await;

        let mut record = self.load().await?;
        record.last_played_video = Some(key.to_string());
        record.history_records.insert(key.to_string(), position);

        let json = serde_json::to_vec_pretty(&record)
            .map_err(|e| Error::Storage(format!("failed to encode playback record: {}", e)))?;

        // Write-then-rename within the same directory keeps the swap atomic
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &json).await.map_err(|e| {
            Error::Storage(format!(
                "failed to write playback record {}: {}",
                tmp.display(),
                e
            ))
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            Error::Storage(format!(
                "failed to replace playback record {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!("Saved playback position {} for {}", position, key);
        Ok(record)
    }
}
