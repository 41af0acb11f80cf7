//! Input dispatch.
//!
//! [`Dispatcher::handle`] is the entry point for every line the user
//! submits: classify it as slash-command or plain text, validate and bind
//! command arguments, and route the result to a handler or to the
//! outbound-message path. The entry point never fails; rejected input is
//! explained inline and reported as `false`.

use crate::config::ClientConfig;
use crate::context::Context;
use crate::error::CommandError;
use crate::prompt::ConfirmRequest;
use crate::registry::Registry;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, error};

/// A slash followed by a lowercase command word, optionally arguments.
/// Multi-line pastes fail this match and fall through to the plain-text
/// path even when they begin with a slash-word.
fn command_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^/[a-z]+(\s.*)?$").expect("command pattern compiles"))
}

/// Bounded whitespace split: at most `max_splits` splits on whitespace
/// runs, with the remainder kept verbatim (embedded spaces and all) as the
/// final piece. This is what lets a trailing message parameter contain
/// spaces.
fn split_limited(input: &str, max_splits: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = input.trim_start();
    while !rest.is_empty() {
        if pieces.len() == max_splits {
            pieces.push(rest);
            break;
        }
        match rest.find(char::is_whitespace) {
            Some(end) => {
                pieces.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => {
                pieces.push(rest);
                break;
            }
        }
    }
    pieces
}

/// Routes each submitted line to a command handler or the outbound-message
/// path.
pub struct Dispatcher {
    registry: Registry,
    multiline_threshold: usize,
}

impl Dispatcher {
    /// Dispatcher over a frozen registry, with input knobs from config.
    pub fn new(registry: Registry, config: &ClientConfig) -> Self {
        Self {
            registry,
            multiline_threshold: config.input.multiline_confirm_threshold,
        }
    }

    /// Handle one submitted input.
    ///
    /// Returns `true` when a command ran or at least one message was sent;
    /// `false` when the input was rejected or aborted, with any explanation
    /// already appended to the conversation's log.
    pub async fn handle(&self, ctx: &Context<'_>, input: &str) -> bool {
        if input.is_empty() {
            return false;
        }
        if command_pattern().is_match(input) {
            self.run_command(ctx, input).await
        } else {
            self.send_plain_text(ctx, input).await
        }
    }

    async fn run_command(&self, ctx: &Context<'_>, input: &str) -> bool {
        // The raw token keeps its slash for display; registry keys don't.
        let token = input
            .split_whitespace()
            .next()
            .expect("command pattern guarantees a token");
        let Some(entry) = self.registry.lookup(&token[1..]) else {
            surface(ctx, &CommandError::UnknownCommand(token.to_string()));
            return false;
        };

        // The last argument absorbs the rest of the line, spaces included.
        // The split bound is never zero: zero would mean "no split at all"
        // and glue the command token to its arguments.
        let pieces = split_limited(input, entry.usage.max_args().max(1));
        let args = &pieces[1..];
        if args.len() < entry.usage.min_args() || args.len() > entry.usage.max_args() {
            surface(ctx, &CommandError::BadArity(entry.usage.line().to_string()));
            return false;
        }

        debug!(command = %entry.usage.name(), args = args.len(), "dispatching command");
        let bound = entry.usage.bind(args);
        if let Err(e) = entry.handler.handle(ctx, &bound).await {
            surface(ctx, &e);
        }
        // The command was dispatched; handler complaints are inline text,
        // not a rejection of the input.
        true
    }

    async fn send_plain_text(&self, ctx: &Context<'_>, input: &str) -> bool {
        // "//x" escapes the command syntax: strip one slash, send "/x".
        let text = if input.starts_with("//") {
            &input[1..]
        } else {
            input
        };
        let lines: Vec<&str> = text.lines().collect();

        if lines.len() > self.multiline_threshold {
            let request = ConfirmRequest::multiline(lines.len());
            if !ctx.prompt.confirm(&request).await {
                debug!(lines = lines.len(), "multiline send declined");
                return false;
            }
        }

        let Some(target) = ctx.conversation.send_target() else {
            surface(ctx, &CommandError::NotSendable);
            return false;
        };
        for line in &lines {
            ctx.backend.send_privmsg(target, line).await;
        }
        true
    }
}

/// Append an error's status lines to the conversation log. Errors with no
/// user-facing text are contract violations and only get logged.
fn surface(ctx: &Context<'_>, err: &CommandError) {
    let lines = err.status_lines();
    if lines.is_empty() {
        error!(code = err.error_code(), error = %err, "internal dispatch error");
        return;
    }
    debug!(code = err.error_code(), "surfacing command error");
    for line in lines {
        ctx.view.add_status(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::{command_pattern, split_limited};

    #[test]
    fn classifies_slash_word_as_command() {
        assert!(command_pattern().is_match("/join"));
        assert!(command_pattern().is_match("/join #chan"));
        assert!(command_pattern().is_match("/topic hello world"));

        assert!(!command_pattern().is_match("hello"));
        assert!(!command_pattern().is_match("//join"));
        assert!(!command_pattern().is_match("/Join"));
        assert!(!command_pattern().is_match("/join2"));
        assert!(!command_pattern().is_match("/"));
        assert!(!command_pattern().is_match(" /join"));
    }

    #[test]
    fn multiline_paste_is_not_a_command() {
        assert!(!command_pattern().is_match("/topic hello\nworld"));
    }

    #[test]
    fn split_caps_pieces_and_keeps_remainder() {
        assert_eq!(
            split_limited("/topic hello world", 1),
            vec!["/topic", "hello world"]
        );
        assert_eq!(
            split_limited("/msg alice  hi  there", 2),
            vec!["/msg", "alice", "hi  there"]
        );
        assert_eq!(split_limited("/join   #chan", 1), vec!["/join", "#chan"]);
    }

    #[test]
    fn split_without_arguments_yields_the_token_alone() {
        assert_eq!(split_limited("/quit", 1), vec!["/quit"]);
        assert_eq!(split_limited("/part  ", 1), vec!["/part"]);
    }
}
