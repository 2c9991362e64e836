use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser, Subcommand};

use crate::config::GitConfig;
use crate::request::{BranchAction, Command, InvocationRequest, StashAction, TagAction};
use crate::routes::DEFAULT_BRANCH;

#[derive(Parser, Debug)]
#[command(
    name = "gitops",
    version,
    about = "Run everyday git operations through one small front end",
    long_about = "gitops turns a fixed set of commands (commit, push, pull, branch, merge,\n\
                  stash, rebase, tag, status, add) into single git invocations and prints\n\
                  the outcome as [SUCCESS] or [ERROR] followed by git's own output."
)]
pub struct Cli {
    /// Directory git runs in
    #[arg(short = 'C', long = "repo", value_name = "PATH", default_value = ".", global = true)]
    pub repo: PathBuf,

    /// Version-control binary to invoke
    #[arg(long, value_name = "PROGRAM", default_value = "git", global = true)]
    pub git_binary: String,

    /// Print the result as a JSON object
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv); logs go to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Commit changes
    Commit {
        /// Commit message
        message: String,

        /// Stage all modified files before committing
        #[arg(short, long)]
        all: bool,
    },

    /// Push a branch to origin
    Push {
        /// Branch name
        #[arg(short, long, default_value = DEFAULT_BRANCH)]
        branch: String,

        /// Force push
        #[arg(short, long)]
        force: bool,
    },

    /// Pull a branch from origin
    Pull {
        /// Branch name
        #[arg(short, long, default_value = DEFAULT_BRANCH)]
        branch: String,
    },

    /// Create, check out or list branches
    Branch {
        #[arg(value_enum)]
        action: BranchAction,

        /// Branch name (required for create and checkout)
        #[arg(required_if_eq_any([("action", "create"), ("action", "checkout")]))]
        name: Option<String>,
    },

    /// Merge a branch into the current branch
    Merge {
        /// Branch to merge
        branch: String,
    },

    /// Save or pop stashed changes
    Stash {
        #[arg(value_enum)]
        action: StashAction,

        /// Stash message (save only)
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Rebase the current branch onto another branch
    Rebase {
        /// Branch to rebase onto
        branch: String,
    },

    /// Create, delete or list tags
    Tag {
        #[arg(value_enum)]
        action: TagAction,

        /// Tag name (required for create and delete)
        #[arg(required_if_eq_any([("action", "create"), ("action", "delete")]))]
        name: Option<String>,

        /// Annotation message (create only)
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Show working tree status
    Status,

    /// Stage files
    Add {
        /// Files to stage
        files: Vec<String>,

        /// Stage everything (takes precedence over listed files)
        #[arg(short, long)]
        all: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    pub fn git_config(&self) -> GitConfig {
        GitConfig::new(self.git_binary.clone(), &self.repo)
    }

    /// Print the full help listing to stdout.
    pub fn print_usage() -> std::io::Result<()> {
        Self::command().print_help()?;
        println!();
        Ok(())
    }
}

impl Commands {
    /// The request this command dispatches, or `None` for helper commands
    /// that never reach the external tool.
    pub fn to_request(&self) -> Option<InvocationRequest> {
        let request = match self {
            Commands::Commit { message, all } => InvocationRequest::new(Command::Commit)
                .arg(message.clone())
                .flag("all", *all),
            Commands::Push { branch, force } => InvocationRequest::new(Command::Push)
                .arg(branch.clone())
                .flag("force", *force),
            Commands::Pull { branch } => InvocationRequest::new(Command::Pull).arg(branch.clone()),
            Commands::Branch { action, name } => {
                InvocationRequest::new(Command::Branch(*action)).maybe_arg(name.clone())
            }
            Commands::Merge { branch } => {
                InvocationRequest::new(Command::Merge).arg(branch.clone())
            }
            Commands::Stash { action, message } => {
                InvocationRequest::new(Command::Stash(*action)).text("message", message.clone())
            }
            Commands::Rebase { branch } => {
                InvocationRequest::new(Command::Rebase).arg(branch.clone())
            }
            Commands::Tag { action, name, message } => InvocationRequest::new(Command::Tag(*action))
                .maybe_arg(name.clone())
                .text("message", message.clone()),
            Commands::Status => InvocationRequest::new(Command::Status),
            Commands::Add { files, all } => {
                let mut request = InvocationRequest::new(Command::Add).flag("all", *all);
                request.args.extend(files.iter().cloned());
                request
            }
            Commands::Completions { .. } => return None,
        };
        Some(request)
    }
}
