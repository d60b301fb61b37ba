//! Goal, activity log, progress and motivation handlers against an in-memory store.
mod common;

use std::sync::Arc;

use common::{FakeGifs, FakeMedia, USER, app_state, default_state, memory_store, user_invocation};
use fitbeat_bot::commands::fitness::{activity, goal, motivation, progress};
use fitbeat_bot::commands::{Command, Reply, execute};
use fitbeat_bot::database::models::ActivityEntry;
use fitbeat_bot::error::CommandError;

fn args(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_owned).collect()
}

#[tokio::test]
async fn setgoal_overwrites_previous_goal() {
    let store = memory_store().await;
    let user = USER.to_string();

    goal::set_goal(&store, &user, "Run 5km weekly").await.unwrap();
    let reply = goal::set_goal(&store, &user, "Swim 2km").await.unwrap();

    assert_eq!(reply.body(), "Your fitness goal has been set to: \"Swim 2km\"");
    assert_eq!(store.goal(&user).await.unwrap().as_deref(), Some("Swim 2km"));
    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?1")
        .bind(&user)
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn setgoal_rejects_blank_text() {
    let store = memory_store().await;
    let err = goal::set_goal(&store, "1", "   ").await.unwrap_err();
    assert!(matches!(err, CommandError::Validation(_)));
    assert_eq!(store.goal("1").await.unwrap(), None);
}

#[tokio::test]
async fn goal_without_setgoal_says_so() {
    let store = memory_store().await;
    let reply = goal::show_goal(&store, "1").await.unwrap();
    assert!(reply.body().contains("haven't set a goal"));
}

#[tokio::test]
async fn progress_with_no_logs_is_not_an_empty_list() {
    let store = memory_store().await;
    let reply = progress::show_progress(&store, "nobody").await.unwrap();
    assert_eq!(reply, Reply::text(progress::NOTHING_LOGGED));
}

#[tokio::test]
async fn progress_totals_are_order_independent() {
    let forward = memory_store().await;
    let backward = memory_store().await;
    let calls = ["running 30", "cycling 45", "running 20", "yoga 15", "cycling 5"];

    for call in calls {
        activity::log_activity(&forward, "u", &args(call)).await.unwrap();
    }
    for call in calls.iter().rev() {
        activity::log_activity(&backward, "u", &args(call)).await.unwrap();
    }

    let a = forward.activity_totals("u").await.unwrap();
    let b = backward.activity_totals("u").await.unwrap();
    assert_eq!(a, b);
    let running = a.iter().find(|t| t.activity_type == "running").unwrap();
    assert_eq!(running.total_minutes, 50);
    let cycling = a.iter().find(|t| t.activity_type == "cycling").unwrap();
    assert_eq!(cycling.total_minutes, 50);
}

#[tokio::test]
async fn progress_only_counts_the_invoking_user() {
    let store = memory_store().await;
    activity::log_activity(&store, "a", &args("running 30")).await.unwrap();
    activity::log_activity(&store, "b", &args("running 90")).await.unwrap();

    let reply = progress::show_progress(&store, "a").await.unwrap();
    assert_eq!(reply.body(), "running: 30 minutes");
}

#[tokio::test]
async fn oversized_duration_is_rejected_before_writing() {
    let store = memory_store().await;
    for raw in ["a 9223372036854775807", "b 10081"] {
        let err = activity::log_activity(&store, "u", &args(raw))
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::Validation(_)));
    }
    assert_eq!(store.activity_entry_count("u").await.unwrap(), 0);
}

#[tokio::test]
async fn progress_replies_even_when_totals_exceed_i64() {
    let store = memory_store().await;
    for activity_type in ["a", "b"] {
        store
            .log_activity(&ActivityEntry {
                user_id: "u".into(),
                activity_type: activity_type.into(),
                duration_minutes: i64::MAX,
                date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            })
            .await
            .unwrap();
    }

    let reply = progress::show_progress(&store, "u").await.unwrap();
    let Reply::Embed(embed) = reply else {
        panic!("progress should render an embed");
    };
    assert_eq!(embed.footer, Some(format!("{} minutes in total", i64::MAX)));
}

#[tokio::test]
async fn non_numeric_duration_writes_nothing() {
    let store = memory_store().await;
    let err = activity::log_activity(&store, "u", &args("running abc"))
        .await
        .unwrap_err();
    assert!(matches!(err, CommandError::Validation(_)));
    assert_eq!(err.user_message(), "Duration must be a number in minutes!");
    assert_eq!(store.activity_entry_count("u").await.unwrap(), 0);
}

#[tokio::test]
async fn logactivity_needs_two_arguments() {
    let store = memory_store().await;
    let err = activity::log_activity(&store, "u", &args("running"))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), activity::USAGE);
    assert_eq!(store.activity_entry_count("u").await.unwrap(), 0);
}

#[tokio::test]
async fn logactivity_echoes_duration_and_type() {
    let store = memory_store().await;
    let reply = activity::log_activity(&store, "u", &args("rowing 25"))
        .await
        .unwrap();
    assert!(reply.body().starts_with("Logged 25 minutes of rowing!"));
    assert_eq!(store.activity_entry_count("u").await.unwrap(), 1);
}

#[tokio::test]
async fn motivation_embeds_the_gif() {
    let gifs = FakeGifs::ok("https://media.giphy.test/lift.gif");
    let reply = motivation::motivation(&gifs).await.unwrap();
    match reply {
        Reply::Embed(embed) => {
            assert_eq!(embed.image_url.as_deref(), Some("https://media.giphy.test/lift.gif"));
        }
        other => panic!("expected an embed, got {other:?}"),
    }
}

#[tokio::test]
async fn motivation_failure_uses_the_fallback_text() {
    let state = app_state(FakeGifs::failing(), Arc::new(FakeMedia::default())).await;
    let reply = execute(&state, &user_invocation(), Command::Motivation).await;
    assert_eq!(reply, Reply::text(motivation::FALLBACK));
}

#[tokio::test]
async fn goal_then_two_runs_then_progress() {
    let state = default_state().await;
    let invocation = user_invocation();
    let prefix = state.prefix.clone();

    for line in [
        "!setgoal Run 5km weekly",
        "!logactivity running 30",
        "!logactivity running 20",
    ] {
        let command = fitbeat_bot::commands::parse(line, &prefix).expect("recognised command");
        execute(&state, &invocation, command).await;
    }
    let command = fitbeat_bot::commands::parse("!progress", &prefix).unwrap();
    let reply = execute(&state, &invocation, command).await;

    assert!(reply.body().contains("running: 50 minutes"), "got {reply:?}");
    assert_eq!(
        state.store.goal(&USER.to_string()).await.unwrap().as_deref(),
        Some("Run 5km weekly")
    );
}
