use crate::commands::Reply;
use crate::constants::{MAX_EMBED_DESCRIPTION_CHARS, MAX_LISTED_SONG_CHARS, MAX_LISTED_SONGS};
use crate::database::Store;
use crate::error::{CommandError, StoreError};
use crate::ui::style::{COLOR_MUSIC, EMOJI_NOTES, numbered_within};

pub const ADD_SONG_USAGE: &str = "Usage: `!addsong <playlist_name> <song_name>`";

fn not_found(name: &str) -> CommandError {
    CommandError::not_found(format!("Playlist \"{name}\" not found!"))
}

pub async fn create_playlist(
    store: &Store,
    user_id: &str,
    name: &str,
) -> Result<Reply, CommandError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CommandError::validation(
            "Please provide a name for your playlist! Example: `!createplaylist MyPlaylist`",
        ));
    }
    if name.contains(char::is_whitespace) {
        return Err(CommandError::validation(
            "Playlist names must be a single word so `!addsong` can find them. Example: `!createplaylist MorningMix`",
        ));
    }
    match store.create_playlist(user_id, name).await {
        Ok(()) => Ok(Reply::text(format!(
            "Playlist \"{name}\" created successfully!"
        ))),
        Err(StoreError::Duplicate) => Err(CommandError::Duplicate(format!(
            "A playlist with the name \"{name}\" already exists."
        ))),
        Err(other) => Err(other.into()),
    }
}

/// Appends `song` to the end of the playlist and persists the whole list.
pub async fn add_song(
    store: &Store,
    user_id: &str,
    playlist_name: &str,
    song: &str,
) -> Result<Reply, CommandError> {
    let (playlist_name, song) = (playlist_name.trim(), song.trim());
    if playlist_name.is_empty() || song.is_empty() {
        return Err(CommandError::validation(ADD_SONG_USAGE));
    }
    let Some(mut playlist) = store.playlist(user_id, playlist_name).await? else {
        return Err(not_found(playlist_name));
    };
    playlist.songs.push(song.to_string());
    match store.save_songs(&playlist).await {
        Ok(()) => Ok(Reply::text(format!(
            "Added \"{song}\" to \"{playlist_name}\"!"
        ))),
        Err(StoreError::Missing) => Err(not_found(playlist_name)),
        Err(other) => Err(other.into()),
    }
}

pub async fn show_playlist(store: &Store, user_id: &str, name: &str) -> Result<Reply, CommandError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CommandError::validation("Usage: `!showplaylist <playlist_name>`"));
    }
    let Some(playlist) = store.playlist(user_id, name).await? else {
        return Err(not_found(name));
    };
    let title = format!("{EMOJI_NOTES} {}", playlist.name);
    if playlist.songs.is_empty() {
        return Ok(Reply::embed(
            title,
            format!("This playlist is empty. Add songs with `!addsong {} <song_name>`.", playlist.name),
            COLOR_MUSIC,
        ));
    }
    let total = playlist.songs.len();
    let candidates = &playlist.songs[..total.min(MAX_LISTED_SONGS)];
    let (listing, shown) =
        numbered_within(candidates, MAX_LISTED_SONG_CHARS, MAX_EMBED_DESCRIPTION_CHARS);
    let mut reply = Reply::embed(title, listing, COLOR_MUSIC);
    if total > shown {
        reply = reply.with_footer(format!("…and {} more", total - shown));
    } else {
        reply = reply.with_footer(format!("{total} song(s)"));
    }
    Ok(reply)
}
