//! Message commands and the conversation send path.
//!
//! `/me` and the plain-text path share one rule: resolve the conversation's
//! send target, then hand the text to the backend. CTCP ACTION framing is
//! the only protocol detail this crate knows about.

use super::CommandHandler;
use crate::context::Context;
use crate::error::{CommandError, HandlerResult};
use crate::usage::BoundArgs;
use async_trait::async_trait;

/// CTCP delimiter framing ACTION messages.
const CTCP_DELIM: char = '\x01';

/// Wrap a message body as a CTCP ACTION, conventionally rendered by
/// recipients as a third-person action.
fn action(text: &str) -> String {
    format!("{CTCP_DELIM}ACTION {text}{CTCP_DELIM}")
}

/// Send one line to the conversation's own target.
async fn send_to_conversation(ctx: &Context<'_>, text: &str) -> HandlerResult {
    match ctx.conversation.send_target() {
        Some(target) => {
            ctx.backend.send_privmsg(target, text).await;
            Ok(())
        }
        None => Err(CommandError::NotSendable),
    }
}

/// Handler for `/me <message>`: send an action message to the current
/// conversation. Goes through the same destination resolution as plain
/// text.
pub struct MeHandler;

#[async_trait]
impl CommandHandler for MeHandler {
    async fn handle(&self, ctx: &Context<'_>, args: &BoundArgs<'_>) -> HandlerResult {
        let message = args.required("message")?;
        send_to_conversation(ctx, &action(message)).await
    }
}

/// Handler for `/msg <nick> <message>`: message a nick directly, regardless
/// of the current conversation.
pub struct MsgHandler;

#[async_trait]
impl CommandHandler for MsgHandler {
    async fn handle(&self, ctx: &Context<'_>, args: &BoundArgs<'_>) -> HandlerResult {
        let nick = args.required("nick")?;
        let message = args.required("message")?;
        ctx.backend.send_privmsg(nick, message).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::action;

    #[test]
    fn action_is_framed_with_ctcp_markers() {
        assert_eq!(action("waves"), "\x01ACTION waves\x01");
    }
}
