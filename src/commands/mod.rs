//! Command parsing, the handlers, and the dispatcher that ties them together.

pub mod fitness;
pub mod help;
pub mod music;
pub mod parser;
pub mod reply;

pub use parser::{Command, parse};
pub use reply::{EmbedReply, Reply};

use serenity::model::id::{ChannelId, GuildId, UserId};
use tracing::{debug, error, instrument};

use crate::AppState;

/// Who issued a command and from where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub user_id: UserId,
    pub guild_id: Option<GuildId>,
    /// The author's current voice channel, if any.
    pub voice_channel: Option<ChannelId>,
}

impl Invocation {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            guild_id: None,
            voice_channel: None,
        }
    }

    pub fn in_guild(mut self, guild_id: GuildId) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    pub fn in_voice(mut self, channel_id: ChannelId) -> Self {
        self.voice_channel = Some(channel_id);
        self
    }

    /// The opaque key rows are stored under.
    pub fn user_key(&self) -> String {
        self.user_id.get().to_string()
    }
}

/// Runs one command to completion. Every outcome, including failures, ends in
/// exactly one reply; nothing propagates past this point.
#[instrument(level = "debug", skip(state, invocation, command), fields(user_id = %invocation.user_id, command = command.name()))]
pub async fn execute(state: &AppState, invocation: &Invocation, command: Command) -> Reply {
    let user_key = invocation.user_key();
    let store = &state.store;
    let outcome = match command {
        Command::SetGoal(text) => fitness::goal::set_goal(store, &user_key, &text).await,
        Command::Goal => fitness::goal::show_goal(store, &user_key).await,
        Command::LogActivity(args) => {
            fitness::activity::log_activity(store, &user_key, &args).await
        }
        Command::Progress => fitness::progress::show_progress(store, &user_key).await,
        Command::Motivation => fitness::motivation::motivation(state.gifs.as_ref()).await,
        Command::CreatePlaylist(name) => {
            music::playlist::create_playlist(store, &user_key, &name).await
        }
        Command::AddSong { playlist, song } => {
            music::playlist::add_song(store, &user_key, &playlist, &song).await
        }
        Command::ShowPlaylist(name) => {
            music::playlist::show_playlist(store, &user_key, &name).await
        }
        Command::Play(query) => {
            music::playback::play(state.media.as_ref(), invocation, &query).await
        }
        Command::Stop => music::playback::stop(state.media.as_ref(), invocation).await,
        Command::Help(name) => Ok(help::render(&state.prefix, name.as_deref())),
    };

    outcome.unwrap_or_else(|err| {
        if err.is_fault() {
            error!(target = "commands", kind = err.kind(), error = %err, "command failed");
        } else {
            debug!(target = "commands", kind = err.kind(), reason = %err, "command rejected");
        }
        Reply::from(&err)
    })
}
