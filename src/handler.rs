use serenity::async_trait;
use serenity::client::Context;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::id::{ChannelId, GuildId};
use serenity::prelude::EventHandler;
use tracing::{error, info};

use crate::commands::{self, Invocation};
use crate::AppState;

pub struct Handler {
    /// When set, only messages from this guild are handled.
    pub allowed_guild_id: Option<GuildId>,
}

impl Handler {
    fn accepts(&self, msg: &Message) -> bool {
        if msg.author.bot {
            return false;
        }
        match self.allowed_guild_id {
            Some(allowed) => msg.guild_id == Some(allowed),
            None => true,
        }
    }
}

/// The author's current voice channel, read from the gateway cache.
fn author_voice_channel(ctx: &Context, msg: &Message) -> Option<ChannelId> {
    let guild = msg.guild(&ctx.cache)?;
    guild
        .voice_states
        .get(&msg.author.id)
        .and_then(|state| state.channel_id)
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if !self.accepts(&msg) {
            return;
        }
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            error!(target = "handler", "AppState missing from TypeMap");
            return;
        };
        let Some(command) = commands::parse(&msg.content, &app_state.prefix) else {
            return;
        };

        let mut invocation = Invocation::new(msg.author.id);
        invocation.guild_id = msg.guild_id;
        invocation.voice_channel = author_voice_channel(&ctx, &msg);

        let reply = commands::execute(&app_state, &invocation, command).await;
        if let Err(why) = msg
            .channel_id
            .send_message(&ctx.http, reply.to_message(&msg))
            .await
        {
            error!(target = "handler", channel_id = %msg.channel_id, error = ?why, "failed to send reply");
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            target = "handler",
            user = %ready.user.name,
            guilds = ready.guilds.len(),
            "connected and ready"
        );
    }
}
