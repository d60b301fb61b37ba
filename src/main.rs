use std::sync::Arc;

use anyhow::Context as _;
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use songbird::{SerenityInit, Songbird};
use tracing::{error, info};

use fitbeat_bot::config::Config;
use fitbeat_bot::database::Store;
use fitbeat_bot::handler::Handler;
use fitbeat_bot::services::{GiphyClient, SongbirdEngine};
use fitbeat_bot::{AppState, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = Config::from_env().context("invalid configuration")?;
    info!(target = "startup", ?config, "configuration loaded");

    let store = Store::open(&config.database_url)
        .await
        .context("failed to open the database")?;

    let http = reqwest::Client::new();
    let voice = Songbird::serenity();
    let app_state = Arc::new(
        AppState::new(
            store.clone(),
            Arc::new(GiphyClient::new(http.clone(), config.giphy_api_key.clone())),
            Arc::new(SongbirdEngine::new(voice.clone(), http)),
        )
        .with_prefix(config.command_prefix.clone()),
    );

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_VOICE_STATES;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler {
            allowed_guild_id: config.guild_id,
        })
        .register_songbird_with(voice)
        .type_map_insert::<AppState>(app_state)
        .await
        .context("error creating the Discord client")?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!(target = "startup", "shutdown requested");
            shard_manager.shutdown_all().await;
        }
    });

    let result = client.start().await;
    store.close().await;
    if let Err(why) = &result {
        error!(target = "startup", error = ?why, "client error");
    }
    result.context("Discord client stopped with an error")
}
