//! Playback record persistence

pub mod record;

pub use record::{PlaybackRecord, PlaybackStore};
