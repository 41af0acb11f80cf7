//! Channel lifecycle commands: /join, /part, /topic.

use super::CommandHandler;
use crate::context::Context;
use crate::error::{CommandError, HandlerResult};
use crate::usage::BoundArgs;
use async_trait::async_trait;
use tracing::info;

/// Handler for `/join <channel>`.
pub struct JoinHandler;

#[async_trait]
impl CommandHandler for JoinHandler {
    async fn handle(&self, ctx: &Context<'_>, args: &BoundArgs<'_>) -> HandlerResult {
        let channel = args.required("channel")?;
        ctx.backend.join_channel(channel).await;
        info!(channel = %channel, "requested channel join");
        Ok(())
    }
}

/// Handler for `/part [<channel>]`.
///
/// Without an argument, parts the channel the input was typed into.
pub struct PartHandler;

#[async_trait]
impl CommandHandler for PartHandler {
    async fn handle(&self, ctx: &Context<'_>, args: &BoundArgs<'_>) -> HandlerResult {
        let channel = args
            .get("channel")
            .or_else(|| ctx.conversation.channel_name())
            .ok_or_else(|| CommandError::ChannelRequired {
                usage: args.usage_line().to_string(),
            })?;
        ctx.backend.part_channel(channel).await;
        info!(channel = %channel, "requested channel part");
        Ok(())
    }
}

/// Handler for `/topic <new_topic>`. Only valid in a channel conversation.
pub struct TopicHandler;

#[async_trait]
impl CommandHandler for TopicHandler {
    async fn handle(&self, ctx: &Context<'_>, args: &BoundArgs<'_>) -> HandlerResult {
        let new_topic = args.required("new_topic")?;
        let channel = ctx
            .conversation
            .channel_name()
            .ok_or(CommandError::NotOnChannel)?;
        ctx.backend.change_topic(channel, new_topic).await;
        info!(channel = %channel, "requested topic change");
        Ok(())
    }
}
