//! Saved playlists and voice playback.

pub mod playback;
pub mod playlist;
