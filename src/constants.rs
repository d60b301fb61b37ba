// Central constants for external lookups and limits.
pub const GIPHY_BASE_URL: &str = "https://api.giphy.com";
pub const GIF_TAG: &str = "fitness";
pub const GIF_RATING: &str = "g";

/// How many candidates the media search asks for; only the first is queued.
pub const SEARCH_RESULTS: usize = 5;

/// Songs listed by `showplaylist` before the remainder is summarised.
pub const MAX_LISTED_SONGS: usize = 25;

/// Longest single activity accepted by `logactivity`: one week.
pub const MAX_DURATION_MINUTES: i64 = 7 * 24 * 60;

/// Characters of each song shown by `showplaylist`.
pub const MAX_LISTED_SONG_CHARS: usize = 150;

// Discord message limits, counted in characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;
pub const MAX_EMBED_TITLE_CHARS: usize = 256;
pub const MAX_EMBED_DESCRIPTION_CHARS: usize = 4096;
pub const MAX_EMBED_FIELD_NAME_CHARS: usize = 256;
pub const MAX_EMBED_FIELD_VALUE_CHARS: usize = 1024;
pub const MAX_EMBED_FOOTER_CHARS: usize = 2048;
pub const MAX_EMBED_TOTAL_CHARS: usize = 6000;
