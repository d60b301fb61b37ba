//! `!play` and `!stop`. The media engine owns queue state; these handlers only
//! decide which engine calls to make and what to reply.

use tracing::{instrument, warn};

use crate::commands::{Invocation, Reply};
use crate::error::CommandError;
use crate::services::MediaEngine;
use crate::ui::style::EMOJI_NOTES;

pub const NOTHING_PLAYING: &str = "No music is currently playing!";
pub const JOIN_FAILED: &str = "Could not join your voice channel!";

#[instrument(level = "debug", skip(media, invocation), fields(user_id = %invocation.user_id))]
pub async fn play(
    media: &dyn MediaEngine,
    invocation: &Invocation,
    query: &str,
) -> Result<Reply, CommandError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(CommandError::validation("Please provide a song name to play!"));
    }
    let Some(guild_id) = invocation.guild_id else {
        return Err(CommandError::validation(
            "Music playback only works inside a server.",
        ));
    };
    let Some(channel_id) = invocation.voice_channel else {
        return Err(CommandError::validation(
            "You need to be in a voice channel to play music!",
        ));
    };

    let tracks = media
        .search(query, invocation.user_id)
        .await
        .map_err(|err| {
            warn!(target = "playback", error = %err, "search failed");
            CommandError::external("Could not search for that song. Try again later.")
        })?;
    let Some(track) = tracks.into_iter().next() else {
        return Err(CommandError::not_found("No results found for your query!"));
    };

    if !media.is_connected(guild_id).await
        && let Err(err) = media.connect(guild_id, channel_id).await
    {
        warn!(target = "playback", guild_id = %guild_id, error = %err, "voice join failed");
        if let Err(cleanup) = media.destroy(guild_id).await {
            warn!(target = "playback", guild_id = %guild_id, error = %cleanup, "queue cleanup failed");
        }
        return Err(CommandError::external(JOIN_FAILED));
    }

    let title = track.title.clone();
    let ahead = media.enqueue(guild_id, track).await.map_err(|err| {
        warn!(target = "playback", guild_id = %guild_id, error = %err, "enqueue failed");
        CommandError::external("Could not queue that track. Try again later.")
    })?;

    let reply = if ahead == 0 {
        format!("{EMOJI_NOTES} Now playing: **{title}**")
    } else {
        format!("{EMOJI_NOTES} Queued: **{title}** ({ahead} ahead in the queue)")
    };
    Ok(Reply::text(reply))
}

pub async fn stop(media: &dyn MediaEngine, invocation: &Invocation) -> Result<Reply, CommandError> {
    let Some(guild_id) = invocation.guild_id else {
        return Err(CommandError::not_found(NOTHING_PLAYING));
    };
    if !media.is_connected(guild_id).await || !media.is_playing(guild_id).await {
        return Err(CommandError::not_found(NOTHING_PLAYING));
    }
    media.destroy(guild_id).await.map_err(|err| {
        warn!(target = "playback", guild_id = %guild_id, error = %err, "queue teardown failed");
        CommandError::external("Could not stop the music. Try again later.")
    })?;
    Ok(Reply::text("Stopped the music and cleared the queue."))
}
