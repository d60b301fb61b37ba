use crate::commands::Reply;
use crate::database::Store;
use crate::database::models::ActivityTotal;
use crate::error::CommandError;
use crate::ui::style::{COLOR_FITNESS, EMOJI_RUN, minutes_line};

pub const NOTHING_LOGGED: &str = "No progress logged yet! Use `!logactivity` to get started.";

pub async fn show_progress(store: &Store, user_id: &str) -> Result<Reply, CommandError> {
    let totals = store.activity_totals(user_id).await?;
    if totals.is_empty() {
        return Ok(Reply::text(NOTHING_LOGGED));
    }
    Ok(render_totals(&totals))
}

pub fn render_totals(totals: &[ActivityTotal]) -> Reply {
    let lines = totals
        .iter()
        .map(|t| minutes_line(&t.activity_type, t.total_minutes))
        .collect::<Vec<_>>()
        .join("\n");
    let overall = totals
        .iter()
        .fold(0i64, |acc, t| acc.saturating_add(t.total_minutes));
    Reply::embed(format!("{EMOJI_RUN} Your progress"), lines, COLOR_FITNESS)
        .with_footer(format!("{overall} minutes in total"))
}
