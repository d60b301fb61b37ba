//! Adapters for the external collaborators the handlers call out to.
//! Handlers only see the traits so tests can swap in fakes.

pub mod giphy;
pub mod media;

pub use giphy::{GifLookup, GiphyClient};
pub use media::{MediaEngine, SongbirdEngine, Track};
