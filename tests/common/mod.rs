//! Fakes for the external collaborators plus an in-memory `AppState`.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fitbeat_bot::AppState;
use fitbeat_bot::commands::Invocation;
use fitbeat_bot::database::Store;
use fitbeat_bot::error::{LookupError, MediaError};
use fitbeat_bot::services::{GifLookup, MediaEngine, Track};
use serenity::model::id::{ChannelId, GuildId, UserId};

pub const USER: u64 = 111_222_333;
pub const GUILD: u64 = 444;
pub const VOICE: u64 = 555;

pub fn user_invocation() -> Invocation {
    Invocation::new(UserId::new(USER))
}

pub fn guild_invocation() -> Invocation {
    user_invocation().in_guild(GuildId::new(GUILD))
}

pub fn voice_invocation() -> Invocation {
    guild_invocation().in_voice(ChannelId::new(VOICE))
}

pub struct FakeGifs {
    pub url: Option<String>,
}

impl FakeGifs {
    pub fn ok(url: &str) -> Self {
        Self {
            url: Some(url.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { url: None }
    }
}

#[async_trait]
impl GifLookup for FakeGifs {
    async fn random_gif(&self) -> Result<String, LookupError> {
        self.url
            .clone()
            .ok_or_else(|| LookupError::Malformed("no gif".to_string()))
    }
}

/// In-memory media engine that records every call it receives.
#[derive(Default)]
pub struct FakeMedia {
    pub results: Vec<String>,
    pub fail_join: bool,
    pub connected: AtomicBool,
    pub queued: Mutex<Vec<Track>>,
    pub calls: Mutex<Vec<&'static str>>,
}

impl FakeMedia {
    pub fn with_results(titles: &[&str]) -> Self {
        Self {
            results: titles.iter().map(|t| t.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn failing_join(mut self) -> Self {
        self.fail_join = true;
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn queued_titles(&self) -> Vec<String> {
        self.queued
            .lock()
            .unwrap()
            .iter()
            .map(|t| t.title.clone())
            .collect()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl MediaEngine for FakeMedia {
    async fn search(&self, _query: &str, requested_by: UserId) -> Result<Vec<Track>, MediaError> {
        self.record("search");
        Ok(self
            .results
            .iter()
            .enumerate()
            .map(|(i, title)| Track {
                title: title.clone(),
                url: format!("https://media.test/{i}"),
                requested_by,
            })
            .collect())
    }

    async fn is_connected(&self, _guild_id: GuildId) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn connect(&self, _guild_id: GuildId, _channel_id: ChannelId) -> Result<(), MediaError> {
        self.record("connect");
        if self.fail_join {
            return Err(MediaError::Join("timed out".to_string()));
        }
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn enqueue(&self, _guild_id: GuildId, track: Track) -> Result<usize, MediaError> {
        self.record("enqueue");
        let mut queued = self.queued.lock().unwrap();
        let ahead = queued.len();
        queued.push(track);
        Ok(ahead)
    }

    async fn is_playing(&self, _guild_id: GuildId) -> bool {
        !self.queued.lock().unwrap().is_empty()
    }

    async fn destroy(&self, _guild_id: GuildId) -> Result<(), MediaError> {
        self.record("destroy");
        self.connected.store(false, Ordering::SeqCst);
        self.queued.lock().unwrap().clear();
        Ok(())
    }
}

pub async fn memory_store() -> Store {
    Store::open_in_memory()
        .await
        .expect("in-memory store should open")
}

pub async fn app_state(gifs: FakeGifs, media: Arc<FakeMedia>) -> AppState {
    AppState::new(memory_store().await, Arc::new(gifs), media)
}

pub async fn default_state() -> AppState {
    app_state(FakeGifs::failing(), Arc::new(FakeMedia::default())).await
}
