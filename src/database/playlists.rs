//! Contains all database functions related to user playlists.
//! The ordered song list is stored as a JSON array in `playlists.songs`.

use tracing::instrument;

use super::Store;
use super::models::{Playlist, PlaylistRow};
use crate::error::StoreError;

fn encode_songs(songs: &[String]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(songs)?)
}

impl Store {
    /// Creates an empty playlist. Fails with `StoreError::Duplicate` if the
    /// user already has one with this name; the existing row is left untouched.
    #[instrument(level = "debug", skip(self))]
    pub async fn create_playlist(&self, user_id: &str, name: &str) -> Result<(), StoreError> {
        let result = sqlx::query(
            "INSERT INTO playlists (user_id, playlist_name, songs) VALUES (?1, ?2, ?3)
             ON CONFLICT (user_id, playlist_name) DO NOTHING",
        )
        .bind(user_id)
        .bind(name)
        .bind(encode_songs(&[])?)
        .execute(self.pool())
        .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::Duplicate);
        }
        Ok(())
    }

    pub async fn playlist(&self, user_id: &str, name: &str) -> Result<Option<Playlist>, StoreError> {
        let row = sqlx::query_as::<_, PlaylistRow>(
            "SELECT user_id, playlist_name, songs FROM playlists
             WHERE user_id = ?1 AND playlist_name = ?2",
        )
        .bind(user_id)
        .bind(name)
        .fetch_optional(self.pool())
        .await?;
        row.map(Playlist::try_from).transpose()
    }

    /// Persists the full song sequence of an existing playlist.
    #[instrument(level = "debug", skip(self, playlist), fields(user_id = %playlist.user_id, name = %playlist.name, songs = playlist.songs.len()))]
    pub async fn save_songs(&self, playlist: &Playlist) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE playlists SET songs = ?1 WHERE user_id = ?2 AND playlist_name = ?3",
        )
        .bind(encode_songs(&playlist.songs)?)
        .bind(&playlist.user_id)
        .bind(&playlist.name)
        .execute(self.pool())
        .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::Missing);
        }
        Ok(())
    }

    /// Number of playlists one user owns. Only tests use this, to check that a
    /// rejected command wrote nothing.
    pub async fn playlist_count(&self, user_id: &str) -> Result<i64, StoreError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM playlists WHERE user_id = ?1")
                .bind(user_id)
                .fetch_one(self.pool())
                .await?;
        Ok(count)
    }
}
