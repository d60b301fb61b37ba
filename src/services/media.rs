//! Playback engine boundary.
//!
//! The bot treats the engine as authoritative for queue state: one queue per
//! guild, created by joining a voice channel and torn down by `destroy`.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::model::id::{ChannelId, GuildId, UserId};
use songbird::Songbird;
use songbird::error::JoinError;
use songbird::input::YoutubeDl;
use tracing::{debug, instrument};

use crate::constants::SEARCH_RESULTS;
use crate::error::MediaError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub url: String,
    pub requested_by: UserId,
}

#[async_trait]
pub trait MediaEngine: Send + Sync {
    /// Ranked search results, best match first. An empty list means no match.
    async fn search(&self, query: &str, requested_by: UserId) -> Result<Vec<Track>, MediaError>;

    /// Whether a queue (voice connection) exists for the guild.
    async fn is_connected(&self, guild_id: GuildId) -> bool;

    async fn connect(&self, guild_id: GuildId, channel_id: ChannelId) -> Result<(), MediaError>;

    /// Appends the track to the guild queue, starting playback if it was idle.
    /// Returns how many tracks were ahead of it.
    async fn enqueue(&self, guild_id: GuildId, track: Track) -> Result<usize, MediaError>;

    async fn is_playing(&self, guild_id: GuildId) -> bool;

    /// Stops playback, clears the queue and leaves the voice channel.
    async fn destroy(&self, guild_id: GuildId) -> Result<(), MediaError>;
}

/// `MediaEngine` backed by songbird calls and `yt-dlp` search.
pub struct SongbirdEngine {
    manager: Arc<Songbird>,
    http: reqwest::Client,
}

impl SongbirdEngine {
    pub fn new(manager: Arc<Songbird>, http: reqwest::Client) -> Self {
        Self { manager, http }
    }
}

#[async_trait]
impl MediaEngine for SongbirdEngine {
    #[instrument(level = "debug", skip(self))]
    async fn search(&self, query: &str, requested_by: UserId) -> Result<Vec<Track>, MediaError> {
        let mut source = YoutubeDl::new_search(self.http.clone(), query.to_string());
        let results = match source.search(Some(SEARCH_RESULTS)).await {
            Ok(results) => results.collect::<Vec<_>>(),
            // yt-dlp reports an empty result set as a failure.
            Err(e) if e.to_string().contains("no results found") => Vec::new(),
            Err(e) => return Err(MediaError::Search(e.to_string())),
        };
        let tracks = results
            .into_iter()
            .filter_map(|meta| {
                let url = meta.source_url?;
                Some(Track {
                    title: meta.title.unwrap_or_else(|| url.clone()),
                    url,
                    requested_by,
                })
            })
            .collect::<Vec<_>>();
        debug!(target = "media", query, found = tracks.len(), "search finished");
        Ok(tracks)
    }

    async fn is_connected(&self, guild_id: GuildId) -> bool {
        self.manager.get(guild_id).is_some()
    }

    async fn connect(&self, guild_id: GuildId, channel_id: ChannelId) -> Result<(), MediaError> {
        self.manager
            .join(guild_id, channel_id)
            .await
            .map(|_call| ())
            .map_err(|e| MediaError::Join(e.to_string()))
    }

    async fn enqueue(&self, guild_id: GuildId, track: Track) -> Result<usize, MediaError> {
        let call = self.manager.get(guild_id).ok_or(MediaError::NoCall)?;
        let mut handler = call.lock().await;
        let ahead = handler.queue().len();
        let input = YoutubeDl::new(self.http.clone(), track.url);
        handler.enqueue_input(input.into()).await;
        debug!(target = "media", guild_id = %guild_id, title = %track.title, ahead, "track queued");
        Ok(ahead)
    }

    async fn is_playing(&self, guild_id: GuildId) -> bool {
        match self.manager.get(guild_id) {
            Some(call) => call.lock().await.queue().current().is_some(),
            None => false,
        }
    }

    async fn destroy(&self, guild_id: GuildId) -> Result<(), MediaError> {
        if let Some(call) = self.manager.get(guild_id) {
            call.lock().await.queue().stop();
        }
        match self.manager.remove(guild_id).await {
            Ok(()) | Err(JoinError::NoCall) => Ok(()),
            Err(e) => Err(MediaError::Join(e.to_string())),
        }
    }
}
