use crate::commands::Reply;
use crate::database::Store;
use crate::error::CommandError;

pub async fn set_goal(store: &Store, user_id: &str, text: &str) -> Result<Reply, CommandError> {
    let goal = text.trim();
    if goal.is_empty() {
        return Err(CommandError::validation(
            "Please specify a goal! Example: `!setgoal Run 5km every week`",
        ));
    }
    store.upsert_goal(user_id, goal).await?;
    Ok(Reply::text(format!(
        "Your fitness goal has been set to: \"{goal}\""
    )))
}

pub async fn show_goal(store: &Store, user_id: &str) -> Result<Reply, CommandError> {
    let reply = match store.goal(user_id).await? {
        Some(goal) => Reply::text(format!("Your current fitness goal: \"{goal}\"")),
        None => Reply::text("You haven't set a goal yet! Use `!setgoal <goal>` to set one."),
    };
    Ok(reply)
}
