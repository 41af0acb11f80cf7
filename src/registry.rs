//! Command registry.
//!
//! Populated once at startup by
//! [`default_registry`](crate::commands::default_registry) and read-only
//! afterwards, so lookups need no synchronization.

use crate::commands::CommandHandler;
use crate::usage::UsageSpec;
use std::collections::HashMap;
use std::sync::Arc;

/// A registered command: validated usage plus its handler.
#[derive(Clone)]
pub struct CommandEntry {
    /// Validated usage declaration.
    pub usage: UsageSpec,
    /// Handler invoked with bound arguments.
    pub handler: Arc<dyn CommandHandler>,
}

/// Mapping from command name (without the slash) to its entry.
#[derive(Default)]
pub struct Registry {
    commands: HashMap<String, CommandEntry>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for the usage's command name.
    ///
    /// Registering one handler under several usages creates aliases.
    pub fn register(&mut self, usage: UsageSpec, handler: Arc<dyn CommandHandler>) {
        self.commands
            .insert(usage.name().to_string(), CommandEntry { usage, handler });
    }

    /// Entry for a command name, without the leading slash.
    pub fn lookup(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    /// Number of registered names; aliases count separately.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
