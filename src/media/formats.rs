//! Recognized media formats
//!
//! Single table mapping file extensions to their served content type and
//! whether the streaming endpoint honors byte ranges for them. Both the
//! file index and the streaming handlers consult this table, so adding a
//! format is a one-line change here.

use std::path::Path;

/// A recognized media format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaFormat {
    /// File extension, lowercase, without the dot
    pub extension: &'static str,
    /// Content-Type sent when serving files of this format
    pub content_type: &'static str,
    /// Whether byte-range requests are honored for this format
    pub range_capable: bool,
}

/// All formats the index recognizes. Files with any other extension are
/// silently omitted from the tree and never streamed.
///
/// Browsers play mkv containers fine when served as video/mp4, matching the
/// fixed content type the video endpoint has always used.
pub const FORMATS: &[MediaFormat] = &[
    MediaFormat {
        extension: "mp4",
        content_type: "video/mp4",
        range_capable: true,
    },
    MediaFormat {
        extension: "mkv",
        content_type: "video/mp4",
        range_capable: true,
    },
    MediaFormat {
        extension: "pdf",
        content_type: "application/pdf",
        range_capable: false,
    },
];

/// Look up the format for a path by extension (case-insensitive).
/// Returns `None` for unrecognized or missing extensions.
pub fn lookup(path: &Path) -> Option<&'static MediaFormat> {
    let ext = path.extension()?.to_str()?;
    FORMATS.iter().find(|f| f.extension.eq_ignore_ascii_case(ext))
}
