//! Conversation context and the view seam.
//!
//! [`Conversation`] is the closed set of places a line of input can come
//! from. The dispatcher only asks which variant it is and what send target
//! it carries; it never mutates the context. Destination resolution is the
//! [`Conversation::send_target`] accessor.

use crate::backend::Backend;
use crate::prompt::ConfirmPrompt;

/// The conversation a line of input was typed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversation {
    /// A joined channel.
    Channel {
        /// Channel name, sigil included (e.g. `#rust`).
        name: String,
    },
    /// A direct-message conversation.
    Direct {
        /// The other party's nick.
        nick: String,
    },
    /// A view with no send target, such as the server status window.
    Status,
}

impl Conversation {
    /// Channel conversation.
    pub fn channel(name: impl Into<String>) -> Self {
        Self::Channel { name: name.into() }
    }

    /// Direct-message conversation.
    pub fn direct(nick: impl Into<String>) -> Self {
        Self::Direct { nick: nick.into() }
    }

    /// Concrete target for outbound messages, if this conversation has one.
    pub fn send_target(&self) -> Option<&str> {
        match self {
            Self::Channel { name } => Some(name),
            Self::Direct { nick } => Some(nick),
            Self::Status => None,
        }
    }

    /// Channel name, when the conversation is a channel.
    pub fn channel_name(&self) -> Option<&str> {
        match self {
            Self::Channel { name } => Some(name),
            _ => None,
        }
    }
}

/// Sink for inline status and error text.
///
/// The rendering layer decides how a status line is shown; the core only
/// emits text.
pub trait MessageLog: Send + Sync {
    /// Append one system/status line to the conversation's message log.
    fn add_status(&self, text: &str);
}

/// Everything a dispatch needs: the conversation the input came from plus
/// the injected capability seams.
pub struct Context<'a> {
    /// Conversation the input was typed into.
    pub conversation: &'a Conversation,
    /// Session backend capabilities.
    pub backend: &'a dyn Backend,
    /// Sink for inline status text.
    pub view: &'a dyn MessageLog,
    /// Yes/no confirmation capability.
    pub prompt: &'a dyn ConfirmPrompt,
}

impl<'a> Context<'a> {
    /// Bundle a conversation with the capability seams.
    pub fn new(
        conversation: &'a Conversation,
        backend: &'a dyn Backend,
        view: &'a dyn MessageLog,
        prompt: &'a dyn ConfirmPrompt,
    ) -> Self {
        Self {
            conversation,
            backend,
            view,
            prompt,
        }
    }
}
