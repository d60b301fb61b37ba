//! This module defines the shared state handed to every command.
//! It is stored as a `TypeMapKey` in Serenity's global context.

use std::sync::Arc;

use serenity::prelude::TypeMapKey;

use crate::config::DEFAULT_PREFIX;
use crate::database::Store;
use crate::services::{GifLookup, MediaEngine};

/// The central, shared state of the application.
pub struct AppState {
    /// The persistent store. Owned by the process; closed on shutdown.
    pub store: Store,
    pub gifs: Arc<dyn GifLookup>,
    pub media: Arc<dyn MediaEngine>,
    /// The command prefix, fixed at startup.
    pub prefix: String,
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}

impl AppState {
    pub fn new(store: Store, gifs: Arc<dyn GifLookup>, media: Arc<dyn MediaEngine>) -> Self {
        Self {
            store,
            gifs,
            media,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}
