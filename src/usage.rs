//! Declarative usage grammar for slash-commands.
//!
//! A usage string such as `/msg <nick> <message>` declares a command's name
//! and its parameters: required `<ident>` tokens first, then optional
//! `[<ident>]` tokens. Validation happens once, at registration time;
//! dispatch never re-parses usage text, it only zips arguments onto the
//! declared names.

use crate::error::CommandError;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// `/name` followed by required, then optional, parameter tokens. The
/// group ordering is what rejects a required parameter after an optional
/// one.
fn usage_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^/[a-z]+( <[a-z_]+>)*( \[<[a-z_]+>\])*$").expect("usage pattern compiles")
    })
}

/// Rejection of a malformed usage string at registration time.
///
/// This is a programming error in a command table, not a runtime user
/// error: it halts registry construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// The string does not match the `/name <req>... [<opt>]...` grammar.
    #[error("malformed usage string: {0:?}")]
    Malformed(String),
}

/// A single declared parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name as declared, without the angle brackets.
    pub name: String,
    /// Whether the parameter must be supplied.
    pub required: bool,
}

/// A validated usage declaration: command name plus ordered parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageSpec {
    line: String,
    name: String,
    params: Vec<Param>,
}

impl UsageSpec {
    /// Validate a usage string.
    pub fn parse(usage: &str) -> Result<Self, UsageError> {
        if !usage_pattern().is_match(usage) {
            return Err(UsageError::Malformed(usage.to_string()));
        }

        let mut tokens = usage.split(' ');
        let name = tokens
            .next()
            .expect("pattern guarantees a command token")
            .trim_start_matches('/')
            .to_string();
        let params = tokens
            .map(|token| match token.strip_prefix("[<") {
                Some(rest) => Param {
                    name: rest.trim_end_matches(">]").to_string(),
                    required: false,
                },
                None => Param {
                    name: token
                        .trim_start_matches('<')
                        .trim_end_matches('>')
                        .to_string(),
                    required: true,
                },
            })
            .collect();

        Ok(Self {
            line: usage.to_string(),
            name,
            params,
        })
    }

    /// Command name, without the leading slash.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The usage line verbatim, for error display.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Declared parameters, in order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Minimum argument count: the number of required parameters.
    pub fn min_args(&self) -> usize {
        self.params.iter().filter(|p| p.required).count()
    }

    /// Maximum argument count: all declared parameters.
    pub fn max_args(&self) -> usize {
        self.params.len()
    }

    /// Zip supplied argument pieces onto the declared parameter names, in
    /// order. Optional parameters not supplied bind to `None`, never to an
    /// empty string.
    pub fn bind<'a>(&'a self, args: &[&'a str]) -> BoundArgs<'a> {
        let values = (0..self.params.len())
            .map(|i| args.get(i).copied())
            .collect();
        BoundArgs { spec: self, values }
    }
}

/// Arguments positionally bound to a command's declared parameter names.
#[derive(Debug)]
pub struct BoundArgs<'a> {
    spec: &'a UsageSpec,
    values: Vec<Option<&'a str>>,
}

impl<'a> BoundArgs<'a> {
    /// Value bound to a declared parameter; `None` when an optional
    /// parameter was not supplied (or the name was never declared).
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.spec
            .params
            .iter()
            .position(|p| p.name == name)
            .and_then(|i| self.values[i])
    }

    /// Value of a required parameter.
    ///
    /// Arity checking runs before binding, so absence here means the
    /// handler asked for a parameter its usage string never declared.
    pub fn required(&self, name: &str) -> Result<&'a str, CommandError> {
        self.get(name).ok_or_else(|| {
            CommandError::Internal(format!(
                "parameter '{name}' not bound for /{}",
                self.spec.name()
            ))
        })
    }

    /// The usage line of the command these arguments were bound for.
    pub fn usage_line(&self) -> &str {
        self.spec.line()
    }
}
