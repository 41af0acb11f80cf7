//! # slirc-client
//!
//! Command dispatch core for the Straylight IRC client.
//!
//! Every line the user submits lands in [`Dispatcher::handle`], which
//! decides whether it is a slash-command or plain text, validates and binds
//! command arguments against a declarative usage grammar
//! (`/msg <nick> <message>`), and routes the result to a command handler or
//! to the outbound-message path. A confirmation gate guards against
//! silently fragmenting a long paste into many separate messages.
//!
//! The surrounding client stays out of this crate: the network session is
//! reached through the [`Backend`] capability trait, the rendering layer
//! through [`MessageLog`], and the yes/no confirmation UI through
//! [`ConfirmPrompt`]. All three are injected per dispatch via [`Context`],
//! which keeps the core headlessly testable.
//!
//! ## Quick start
//!
//! ```
//! use slirc_client::{ClientConfig, Dispatcher, default_registry};
//!
//! let config = ClientConfig::default();
//! let dispatcher = Dispatcher::new(default_registry(&config), &config);
//! // then, per submitted line: dispatcher.handle(&ctx, input).await
//! ```

pub mod backend;
pub mod commands;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod prompt;
pub mod registry;
pub mod usage;

pub use self::backend::{Backend, BackendCommand, ChannelBackend};
pub use self::commands::{CommandHandler, default_registry};
pub use self::config::{ClientConfig, ConfigError};
pub use self::context::{Context, Conversation, MessageLog};
pub use self::dispatch::Dispatcher;
pub use self::error::{CommandError, HandlerResult};
pub use self::prompt::{ConfirmPrompt, ConfirmRequest};
pub use self::registry::{CommandEntry, Registry};
pub use self::usage::{BoundArgs, Param, UsageError, UsageSpec};
