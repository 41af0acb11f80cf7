//! Confirmation gate for bulk message fragmentation.
//!
//! Splitting a long paste into many separate messages is a user-facing
//! safety decision, so it goes through an injected yes/no capability
//! instead of a hard-wired dialog. A GUI host can raise a modal; a
//! headless host can answer from a script.

use async_trait::async_trait;

/// A yes/no question put to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    /// Short dialog title.
    pub title: String,
    /// The question itself.
    pub question: String,
    /// Longer explanation of the consequences.
    pub detail: String,
}

impl ConfirmRequest {
    /// The multi-line paste warning, naming the exact line count.
    pub fn multiline(line_count: usize) -> Self {
        Self {
            title: "Send multiple lines".to_string(),
            question: "Do you really want to send many lines of text as separate messages?"
                .to_string(),
            detail: format!(
                "You are about to send the {line_count} lines of text. \
                 It will be sent as {line_count} separate messages, one line per message. \
                 Sending many messages like this is usually considered bad style, \
                 and it's often better to use a pastebin site instead. \
                 Are you sure you want to do it?"
            ),
        }
    }
}

/// Injected confirmation capability.
///
/// Invoked at most once per dispatched input; the dispatch suspends until
/// the user answers.
#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    /// Ask the user; `true` means proceed.
    async fn confirm(&self, request: &ConfirmRequest) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiline_warning_names_the_line_count() {
        let request = ConfirmRequest::multiline(7);
        assert_eq!(request.title, "Send multiple lines");
        assert!(request.detail.contains("the 7 lines of text"));
        assert!(request.detail.contains("7 separate messages"));
    }
}
