//! Connection-level commands: /nick, /quit.

use super::CommandHandler;
use crate::context::Context;
use crate::error::HandlerResult;
use crate::usage::BoundArgs;
use async_trait::async_trait;
use tracing::info;

/// Handler for `/nick <new_nick>`.
pub struct NickHandler;

#[async_trait]
impl CommandHandler for NickHandler {
    async fn handle(&self, ctx: &Context<'_>, args: &BoundArgs<'_>) -> HandlerResult {
        let new_nick = args.required("new_nick")?;
        ctx.backend.change_nick(new_nick).await;
        info!(nick = %new_nick, "requested nick change");
        Ok(())
    }
}

/// Handler for `/quit`.
pub struct QuitHandler;

#[async_trait]
impl CommandHandler for QuitHandler {
    async fn handle(&self, ctx: &Context<'_>, _args: &BoundArgs<'_>) -> HandlerResult {
        ctx.backend.quit().await;
        info!("requested disconnect");
        Ok(())
    }
}
