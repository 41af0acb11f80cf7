//! Built-in command handlers.
//!
//! One handler struct per command, registered by [`default_registry`].
//! Building the registry is an explicit startup step with no import-time
//! side effects: construct it once, hand it to the dispatcher, and it is
//! read-only from then on.

mod channel;
mod connection;
mod messaging;
mod service_aliases;

pub use channel::{JoinHandler, PartHandler, TopicHandler};
pub use connection::{NickHandler, QuitHandler};
pub use messaging::{MeHandler, MsgHandler};
pub use service_aliases::ServiceAliasHandler;

use crate::config::ClientConfig;
use crate::context::Context;
use crate::error::HandlerResult;
use crate::registry::Registry;
use crate::usage::{BoundArgs, UsageSpec};
use async_trait::async_trait;
use std::sync::Arc;

/// A slash-command implementation.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Run the command with arguments bound per its usage declaration.
    async fn handle(&self, ctx: &Context<'_>, args: &BoundArgs<'_>) -> HandlerResult;
}

/// Usage strings in the built-in table are a compile-time contract; a
/// malformed one is a bug in this file and halts startup.
fn usage(line: &str) -> UsageSpec {
    UsageSpec::parse(line).expect("built-in usage string is valid")
}

/// Build the default command set.
///
/// Later registrations overwrite earlier ones, so an embedder can
/// re-register a name before freezing the registry.
pub fn default_registry(config: &ClientConfig) -> Registry {
    let mut registry = Registry::new();

    registry.register(usage("/join <channel>"), Arc::new(JoinHandler));
    registry.register(usage("/part [<channel>]"), Arc::new(PartHandler));
    registry.register(usage("/quit"), Arc::new(QuitHandler));
    registry.register(usage("/nick <new_nick>"), Arc::new(NickHandler));
    registry.register(usage("/topic <new_topic>"), Arc::new(TopicHandler));
    registry.register(usage("/me <message>"), Arc::new(MeHandler));
    registry.register(usage("/msg <nick> <message>"), Arc::new(MsgHandler));

    // Service aliases: one handler per service, two names each
    let nickserv = Arc::new(ServiceAliasHandler::new(config.services.nickserv.clone()));
    registry.register(usage("/nickserv <message>"), nickserv.clone());
    registry.register(usage("/ns <message>"), nickserv);

    let memoserv = Arc::new(ServiceAliasHandler::new(config.services.memoserv.clone()));
    registry.register(usage("/memoserv <message>"), memoserv.clone());
    registry.register(usage("/ms <message>"), memoserv);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_is_complete() {
        let registry = default_registry(&ClientConfig::default());
        for name in [
            "join", "part", "quit", "nick", "topic", "me", "msg", "ns", "nickserv", "ms",
            "memoserv",
        ] {
            assert!(registry.lookup(name).is_some(), "missing /{name}");
        }
        assert_eq!(registry.len(), 11);
    }

    #[test]
    fn alias_pairs_share_their_usage_shape() {
        let registry = default_registry(&ClientConfig::default());
        let ns = registry.lookup("ns").unwrap();
        let nickserv = registry.lookup("nickserv").unwrap();
        assert_eq!(ns.usage.min_args(), nickserv.usage.min_args());
        assert_eq!(ns.usage.max_args(), nickserv.usage.max_args());
    }
}
