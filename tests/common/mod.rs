//! Integration test common infrastructure.
//!
//! Recording implementations of the capability seams, plus a fixture that
//! wires them to a dispatcher over the default command set.

// Not every test binary uses every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use slirc_client::{
    Backend, BackendCommand, ClientConfig, ConfirmPrompt, ConfirmRequest, Context, Conversation,
    Dispatcher, MessageLog, default_registry,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Backend that records every capability call, in order.
#[derive(Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<BackendCommand>>,
}

impl RecordingBackend {
    pub fn calls(&self) -> Vec<BackendCommand> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, call: BackendCommand) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Backend for RecordingBackend {
    async fn send_privmsg(&self, target: &str, text: &str) {
        self.push(privmsg(target, text));
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

/// View sink that records status lines.
#[derive(Default)]
pub struct RecordingLog {
    lines: Mutex<Vec<String>>,
}

impl RecordingLog {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl MessageLog for RecordingLog {
    fn add_status(&self, text: &str) {
        self.lines.lock().unwrap().push(text.to_string());
    }
}

/// Prompt scripted to a fixed answer, counting how often it is asked.
pub struct ScriptedPrompt {
    answer: bool,
    asked: AtomicUsize,
    last_request: Mutex<Option<ConfirmRequest>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn times_asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ConfirmRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmPrompt for ScriptedPrompt {
    async fn confirm(&self, request: &ConfirmRequest) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.answer
    }
}

/// A conversation wired to recording seams and a dispatcher over the
/// default command set.
pub struct Fixture {
    pub conversation: Conversation,
    pub backend: RecordingBackend,
    pub log: RecordingLog,
    pub prompt: ScriptedPrompt,
    dispatcher: Dispatcher,
}

impl Fixture {
    /// Fixture whose prompt accepts everything.
    pub fn new(conversation: Conversation) -> Self {
        Self::with_prompt(conversation, true)
    }

    /// Fixture with a scripted prompt answer.
    pub fn with_prompt(conversation: Conversation, answer: bool) -> Self {
        Self::with_config(conversation, answer, ClientConfig::default())
    }

    /// Fixture over a custom configuration.
    pub fn with_config(conversation: Conversation, answer: bool, config: ClientConfig) -> Self {
        Self {
            conversation,
            backend: RecordingBackend::default(),
            log: RecordingLog::default(),
            prompt: ScriptedPrompt::answering(answer),
            dispatcher: Dispatcher::new(default_registry(&config), &config),
        }
    }

    /// Dispatch one input line against the fixture's conversation.
    pub async fn handle(&self, input: &str) -> bool {
        let ctx = Context::new(&self.conversation, &self.backend, &self.log, &self.prompt);
        self.dispatcher.handle(&ctx, input).await
    }
}

/// Shorthand for the expected privmsg call.
pub fn privmsg(target: &str, text: &str) -> BackendCommand {
    BackendCommand::Privmsg {
        target: target.to_string(),
        text: text.to_string(),
    }
}
