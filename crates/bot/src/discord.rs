use anyhow::{Context as _, Result};
use async_trait::async_trait;
use serenity::all::{
    ChannelId, Client, Context, CreateEmbed, CreateMessage, EventHandler, GatewayIntents, Http,
    Message, Ready,
};
use std::sync::Arc;
use ttd_resolver::Reply;

use crate::dispatch::{Dispatcher, ReplySink};
use crate::sandbox;

/// Embed accent colour (TempleOS light cyan)
pub const EMBED_COLOUR: u32 = 0x55FFFF;

fn intents() -> GatewayIntents {
    GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
}

/// Discord rejects embeds beyond these sizes
const MAX_FIELDS: usize = 25;
const MAX_FIELD_NAME_CHARS: usize = 256;
const MAX_FIELD_VALUE_CHARS: usize = 1024;
const MAX_EMBED_CHARS: usize = 6000;

/// Render a reply as a single Discord embed.
///
/// Fields past Discord's limits are shortened or dropped so the reply still
/// goes out.
pub fn build_embed(reply: &Reply) -> CreateEmbed {
    let mut embed = CreateEmbed::new().colour(EMBED_COLOUR);
    let mut budget = MAX_EMBED_CHARS;
    let mut kept = 0;

    for field in reply.fields().iter().take(MAX_FIELDS) {
        let name = truncate_chars(&field.name, MAX_FIELD_NAME_CHARS);
        let value = truncate_chars(&field.value, MAX_FIELD_VALUE_CHARS);
        let size = name.chars().count() + value.chars().count();
        if size > budget {
            break;
        }
        budget -= size;
        embed = embed.field(name, value, field.inline);
        kept += 1;
    }

    if kept < reply.len() {
        log::debug!(
            "Dropped {} of {} field(s) over the embed size limit",
            reply.len() - kept,
            reply.len()
        );
    }
    embed
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Posts replies through Discord's REST API
pub struct DiscordSink {
    http: Arc<Http>,
}

impl DiscordSink {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ReplySink for DiscordSink {
    type Channel = ChannelId;

    async fn send_reply(&self, channel: &ChannelId, reply: &Reply) -> Result<()> {
        let message = CreateMessage::new().embed(build_embed(reply));
        channel
            .send_message(&self.http, message)
            .await
            .with_context(|| format!("sending embed to channel {channel}"))?;
        Ok(())
    }
}

/// Gateway event handler; serenity runs each event on its own task.
pub struct DiscordHandler {
    dispatcher: Dispatcher,
}

impl DiscordHandler {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl EventHandler for DiscordHandler {
    async fn message(&self, ctx: Context, msg: Message) {
        let sink = DiscordSink::new(Arc::clone(&ctx.http));
        let outcome = self
            .dispatcher
            .handle_message(&sink, &msg.channel_id, &msg.content)
            .await;
        log::trace!("Message {} -> {outcome:?}", msg.id);
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        log::info!(
            "Connected as {} ({} symbols, {} paths)",
            ready.user.name,
            self.dispatcher.dataset().symbol_count(),
            self.dispatcher.dataset().path_count()
        );
        sandbox::restrict_process();
    }
}

/// Connect to the gateway and serve until the connection ends.
pub async fn run(token: &str, dispatcher: Dispatcher) -> Result<()> {
    let mut client = Client::builder(token, intents())
        .event_handler(DiscordHandler::new(dispatcher))
        .await
        .context("Failed to build Discord client")?;

    log::info!("Starting Discord gateway connection");
    client
        .start()
        .await
        .context("Discord client stopped with an error")
}
