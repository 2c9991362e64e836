use std::collections::BTreeMap;
use std::fmt;

use clap::ValueEnum;
use thiserror::Error;

/// Sub-actions accepted by `branch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BranchAction {
    Create,
    Checkout,
    List,
}

/// Sub-actions accepted by `stash`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StashAction {
    Save,
    Pop,
}

/// Sub-actions accepted by `tag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TagAction {
    Create,
    Delete,
    List,
}

/// The selected operation. Commands with sub-actions carry them, so each
/// variant is one key in the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Commit,
    Push,
    Pull,
    Branch(BranchAction),
    Merge,
    Stash(StashAction),
    Rebase,
    Tag(TagAction),
    Status,
    Add,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Commit => write!(f, "commit"),
            Command::Push => write!(f, "push"),
            Command::Pull => write!(f, "pull"),
            Command::Branch(BranchAction::Create) => write!(f, "branch create"),
            Command::Branch(BranchAction::Checkout) => write!(f, "branch checkout"),
            Command::Branch(BranchAction::List) => write!(f, "branch list"),
            Command::Merge => write!(f, "merge"),
            Command::Stash(StashAction::Save) => write!(f, "stash save"),
            Command::Stash(StashAction::Pop) => write!(f, "stash pop"),
            Command::Rebase => write!(f, "rebase"),
            Command::Tag(TagAction::Create) => write!(f, "tag create"),
            Command::Tag(TagAction::Delete) => write!(f, "tag delete"),
            Command::Tag(TagAction::List) => write!(f, "tag list"),
            Command::Status => write!(f, "status"),
            Command::Add => write!(f, "add"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Flag(bool),
    Text(String),
}

/// One validated CLI call, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub command: Command,
    pub args: Vec<String>,
    pub options: BTreeMap<String, OptionValue>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("`{command}` requires a {what}")]
    MissingArgument { command: Command, what: &'static str },
}

impl InvocationRequest {
    pub fn new(command: Command) -> Self {
        Self {
            command,
            args: Vec::new(),
            options: BTreeMap::new(),
        }
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Append a positional argument only when one is present.
    pub fn maybe_arg(self, value: Option<String>) -> Self {
        match value {
            Some(v) => self.arg(v),
            None => self,
        }
    }

    pub fn flag(mut self, name: &str, on: bool) -> Self {
        self.options.insert(name.to_string(), OptionValue::Flag(on));
        self
    }

    pub fn text(mut self, name: &str, value: Option<String>) -> Self {
        if let Some(v) = value {
            self.options.insert(name.to_string(), OptionValue::Text(v));
        }
        self
    }

    pub fn positional(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// `true` only when the flag was given and set.
    pub fn is_set(&self, name: &str) -> bool {
        matches!(self.options.get(name), Some(OptionValue::Flag(true)))
    }

    /// Text option value; empty strings count as absent.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        match self.options.get(name) {
            Some(OptionValue::Text(v)) if !v.is_empty() => Some(v.as_str()),
            _ => None,
        }
    }

    /// First positional argument, or a `MissingArgument` error naming `what`.
    /// An empty value is still a value; the external tool judges it.
    pub fn require(&self, what: &'static str) -> Result<&str, RequestError> {
        self.positional(0).ok_or(RequestError::MissingArgument {
            command: self.command,
            what,
        })
    }
}
