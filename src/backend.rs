//! Session backend capabilities.
//!
//! The dispatcher treats the network session as a set of fire-and-forget
//! capabilities: it does not wait for acknowledgment and does not retry.
//! Calls are issued in the same order as the lines and commands that
//! produced them; failures are the session's own concern, reported
//! asynchronously through its message stream rather than from dispatch.

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::debug;

/// Capabilities the command core consumes from the network session.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Send a message to a channel or nick.
    async fn send_privmsg(&self, target: &str, text: &str);
    /// Request joining a channel.
    async fn join_channel(&self, channel: &str);
    /// Request parting a channel.
    async fn part_channel(&self, channel: &str);
    /// Request a nick change.
    async fn change_nick(&self, nick: &str);
    /// Request a channel topic change.
    async fn change_topic(&self, channel: &str, topic: &str);
    /// Request disconnecting from the server.
    async fn quit(&self);
}

/// One requested backend operation, as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    /// Message to a channel or nick.
    Privmsg {
        /// Channel or nick receiving the message.
        target: String,
        /// Message body.
        text: String,
    },
    /// Join a channel.
    Join(String),
    /// Part a channel.
    Part(String),
    /// Change nick.
    Nick(String),
    /// Change a channel topic.
    Topic {
        /// Channel whose topic changes.
        channel: String,
        /// New topic text.
        topic: String,
    },
    /// Disconnect from the server.
    Quit,
}

/// [`Backend`] adapter that forwards every capability call as a
/// [`BackendCommand`] over an unbounded channel to the session task.
///
/// The channel is unbounded so capability calls never block dispatch. If
/// the session task is gone the command is dropped.
#[derive(Debug, Clone)]
pub struct ChannelBackend {
    tx: mpsc::UnboundedSender<BackendCommand>,
}

impl ChannelBackend {
    /// Wrap a sender to the session task.
    pub fn new(tx: mpsc::UnboundedSender<BackendCommand>) -> Self {
        Self { tx }
    }

    fn push(&self, command: BackendCommand) {
        if self.tx.send(command).is_err() {
            debug!("session task gone, dropping backend command");
        }
    }
}

#[async_trait]
impl Backend for ChannelBackend {
    async fn send_privmsg(&self, target: &str, text: &str) {
        self.push(BackendCommand::Privmsg {
            target: target.to_string(),
            text: text.to_string(),
        });
    }

    async fn join_channel(&self, channel: &str) {
        self.push(BackendCommand::Join(channel.to_string()));
    }

    async fn part_channel(&self, channel: &str) {
        self.push(BackendCommand::Part(channel.to_string()));
    }

    async fn change_nick(&self, nick: &str) {
        self.push(BackendCommand::Nick(nick.to_string()));
    }

    async fn change_topic(&self, channel: &str, topic: &str) {
        self.push(BackendCommand::Topic {
            channel: channel.to_string(),
            topic: topic.to_string(),
        });
    }

    async fn quit(&self) {
        self.push(BackendCommand::Quit);
    }
}
