use chrono::{NaiveDate, Utc};

use crate::commands::Reply;
use crate::constants::MAX_DURATION_MINUTES;
use crate::database::Store;
use crate::database::models::ActivityEntry;
use crate::error::CommandError;
use crate::ui::style::EMOJI_MUSCLE;

pub const USAGE: &str = "Usage: `!logactivity <type> <duration_in_minutes>`";

/// Validates `<type> <duration>` into an entry dated `today`. Extra tokens are ignored.
pub fn parse_entry(
    user_id: &str,
    args: &[String],
    today: NaiveDate,
) -> Result<ActivityEntry, CommandError> {
    let [activity_type, duration, ..] = args else {
        return Err(CommandError::validation(USAGE));
    };
    let duration_minutes = duration
        .parse::<i64>()
        .map_err(|_| CommandError::validation("Duration must be a number in minutes!"))?;
    if duration_minutes <= 0 {
        return Err(CommandError::validation(
            "Duration must be a positive number of minutes!",
        ));
    }
    if duration_minutes > MAX_DURATION_MINUTES {
        return Err(CommandError::validation(format!(
            "Duration can be at most {MAX_DURATION_MINUTES} minutes (one week)!"
        )));
    }
    Ok(ActivityEntry {
        user_id: user_id.to_string(),
        activity_type: activity_type.clone(),
        duration_minutes,
        date: today,
    })
}

pub async fn log_activity(
    store: &Store,
    user_id: &str,
    args: &[String],
) -> Result<Reply, CommandError> {
    let entry = parse_entry(user_id, args, Utc::now().date_naive())?;
    store.log_activity(&entry).await?;
    Ok(Reply::text(format!(
        "Logged {} minutes of {}! Keep it up! {EMOJI_MUSCLE}",
        entry.duration_minutes, entry.activity_type
    )))
}
