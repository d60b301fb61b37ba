//! Shared database types.

use chrono::NaiveDate;
use sqlx::FromRow;

use crate::error::StoreError;

/// Date format used for the `logs.date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One `!logactivity` invocation. Rows are never updated once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub user_id: String,
    pub activity_type: String,
    pub duration_minutes: i64,
    pub date: NaiveDate,
}

/// Derived view: total minutes per activity type for one user. Never stored.
#[derive(FromRow, Debug, Clone, PartialEq, Eq)]
pub struct ActivityTotal {
    pub activity_type: String,
    pub total_minutes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub user_id: String,
    pub name: String,
    pub songs: Vec<String>,
}

#[derive(FromRow, Debug)]
pub(crate) struct PlaylistRow {
    pub user_id: String,
    pub playlist_name: String,
    pub songs: String,
}

impl TryFrom<PlaylistRow> for Playlist {
    type Error = StoreError;

    fn try_from(row: PlaylistRow) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: row.user_id,
            name: row.playlist_name,
            songs: serde_json::from_str(&row.songs)?,
        })
    }
}
