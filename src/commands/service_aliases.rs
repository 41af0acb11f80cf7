//! Service command aliases: /ns, /nickserv, /ms, /memoserv.
//!
//! Shortcuts for messaging network services directly, bypassing the
//! current conversation.

use super::CommandHandler;
use crate::context::Context;
use crate::error::HandlerResult;
use crate::usage::BoundArgs;
use async_trait::async_trait;

/// Handler that messages a fixed service nick. Registered under both the
/// short and the long alias for its service.
pub struct ServiceAliasHandler {
    service: String,
}

impl ServiceAliasHandler {
    /// Alias handler for a service nick.
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }
}

#[async_trait]
impl CommandHandler for ServiceAliasHandler {
    async fn handle(&self, ctx: &Context<'_>, args: &BoundArgs<'_>) -> HandlerResult {
        let message = args.required("message")?;
        ctx.backend.send_privmsg(&self.service, message).await;
        Ok(())
    }
}
