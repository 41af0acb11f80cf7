//! Error taxonomy for command dispatch.
//!
//! User-facing failures never escape the dispatcher: they become status
//! lines in the active conversation, and the entry point reports a boolean
//! outcome only. Internal variants are logged instead of shown.

use thiserror::Error;

/// Errors produced while dispatching a line of input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The input looked like a command but no such name is registered.
    /// Carries the raw first token as typed, leading slash included.
    #[error("no command named '{0}'")]
    UnknownCommand(String),

    /// Argument count is outside the command's arity bounds. Carries the
    /// usage line for display.
    #[error("arguments do not match usage: {0}")]
    BadArity(String),

    /// The active conversation has no send target.
    #[error("conversation has no send target")]
    NotSendable,

    /// `/part` outside a channel without an explicit channel argument.
    #[error("channel argument required outside a channel: {usage}")]
    ChannelRequired {
        /// Usage line shown alongside the explanation.
        usage: String,
    },

    /// A channel-only command was used outside a channel.
    #[error("not on a channel")]
    NotOnChannel,

    /// Registry contract violation (e.g. a handler reading a parameter its
    /// usage string never declared). Not user-visible.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CommandError {
    /// Static error label for tracing fields.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCommand(_) => "unknown_command",
            Self::BadArity(_) => "bad_arity",
            Self::NotSendable => "not_sendable",
            Self::ChannelRequired { .. } => "channel_required",
            Self::NotOnChannel => "not_on_channel",
            Self::Internal(_) => "internal_error",
        }
    }

    /// User-facing status lines for this error.
    ///
    /// Returns an empty list for errors that must not reach the
    /// conversation log.
    pub fn status_lines(&self) -> Vec<String> {
        match self {
            Self::UnknownCommand(token) => vec![format!("No command named '{token}'")],
            Self::BadArity(usage) => vec![format!("Usage: {usage}")],
            Self::NotSendable => vec![
                "You can't send messages here. \
                 Join a channel instead and send messages there."
                    .to_string(),
            ],
            Self::ChannelRequired { usage } => vec![
                format!("Usage: {usage}"),
                "Channel is needed unless you are currently on a channel.".to_string(),
            ],
            Self::NotOnChannel => {
                vec!["You must be on a channel to change its topic.".to_string()]
            }
            Self::Internal(_) => Vec::new(),
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(
            CommandError::UnknownCommand("/x".into()).error_code(),
            "unknown_command"
        );
        assert_eq!(CommandError::NotSendable.error_code(), "not_sendable");
        assert_eq!(
            CommandError::Internal("oops".into()).error_code(),
            "internal_error"
        );
    }

    #[test]
    fn unknown_command_names_the_raw_token() {
        let lines = CommandError::UnknownCommand("/bogus".into()).status_lines();
        assert_eq!(lines, vec!["No command named '/bogus'".to_string()]);
    }

    #[test]
    fn arity_error_shows_the_usage_line() {
        let lines = CommandError::BadArity("/join <channel>".into()).status_lines();
        assert_eq!(lines, vec!["Usage: /join <channel>".to_string()]);
    }

    #[test]
    fn channel_required_emits_two_lines() {
        let lines = CommandError::ChannelRequired {
            usage: "/part [<channel>]".into(),
        }
        .status_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Usage: /part [<channel>]");
        assert_eq!(
            lines[1],
            "Channel is needed unless you are currently on a channel."
        );
    }

    #[test]
    fn internal_errors_are_not_user_visible() {
        assert!(
            CommandError::Internal("bug".into())
                .status_lines()
                .is_empty()
        );
    }
}
