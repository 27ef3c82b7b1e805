//! Recursive media file index
//!
//! Walks the media root and produces the nested tree the browser client
//! renders. Directories always appear (even when empty of recognized
//! files); files appear as leaves only when their extension is in the
//! format table. Sibling order follows the underlying directory listing,
//! not alphabetical order.

use crate::error::Result;
use crate::media::formats;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One node of the media tree.
///
/// The `key` is the path relative to the media root, joined with the
/// platform separator. It is used verbatim as the playback-record key and
/// as the path suffix in streaming requests, so it must round-trip: joining
/// it back onto the root reaches the same file. Entries whose names are
/// not valid UTF-8 cannot round-trip and are excluded from the walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub title: String,
    pub key: String,
    /// Present (possibly empty) for directories, absent for files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FileEntry>>,
    /// Present and true for files, absent for directories
    #[serde(rename = "isLeaf", default, skip_serializing_if = "Option::is_none")]
    pub is_leaf: Option<bool>,
}

/// List the media tree under `root`.
///
/// Fails if the root (or any subdirectory reached during the walk) is
/// unreadable.
pub fn list_tree(root: &Path) -> Result<Vec<FileEntry>> {
    walk(root, Path::new(""))
}

fn walk(dir: &Path, rel: &Path) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        // A lossy key would not resolve back to the file when used in a
        // streaming request, so non-UTF-8 names are skipped entirely
        let Some(title) = name.to_str().map(String::from) else {
            continue;
        };
        let rel_path = rel.join(&name);
        let key = rel_path.to_string_lossy().into_owned();

        if entry.file_type()?.is_dir() {
            let children = walk(&entry.path(), &rel_path)?;
            entries.push(FileEntry {
                title,
                key,
                children: Some(children),
                is_leaf: None,
            });
        } else if formats::lookup(&entry.path()).is_some() {
            entries.push(FileEntry {
                title,
                key,
                children: None,
                is_leaf: Some(true),
            });
        }
        // Unrecognized files are silently omitted
    }

    Ok(entries)
}
